//! End-to-end tests for record validation.

mod record;
mod schema_json;
