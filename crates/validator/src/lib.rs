//! # fieldcheck
//!
//! A declarative field-validation engine. Each field of a record is declared
//! with a [`ConstraintSet`]; the [`Validator`] checks every field against its
//! constraints and returns a [`Report`] that maps each failing field to one
//! diagnostic.
//!
//! ## Quick Start
//!
//! ```
//! use fieldcheck::prelude::*;
//!
//! struct User {
//!     name: String,
//!     age: i64,
//!     email: String,
//!     password: String,
//! }
//!
//! impl Record for User {
//!     fn fields(&self) -> Vec<FieldDescriptor<'_>> {
//!         vec![
//!             FieldDescriptor::string("Name", &self.name, ConstraintSet::new().required()),
//!             FieldDescriptor::integer("Age", self.age, ConstraintSet::new().required().min(18).max(99)),
//!             FieldDescriptor::string("Email", &self.email, ConstraintSet::new().required().email()),
//!             FieldDescriptor::string(
//!                 "Password",
//!                 &self.password,
//!                 ConstraintSet::new().required().min_len(8).max_len(20),
//!             ),
//!         ]
//!     }
//! }
//!
//! let user = User {
//!     name: "Handy".into(),
//!     age: 5,
//!     email: "bad".into(),
//!     password: "short".into(),
//! };
//!
//! let report = Validator::new().validate_record(&user);
//! assert_eq!(report.get("Age"), Some("Value should be greater than or equal to 18"));
//! assert_eq!(report.get("Email"), Some("Invalid email format"));
//! assert_eq!(report.get("Password"), Some("Length should be at least 8 characters"));
//! assert!(!report.contains("Name"));
//! ```
//!
//! ## Declaring constraints
//!
//! - In code: the `const` builder on [`ConstraintSet`].
//! - As a tag string: `"required,min=18,max=99".parse::<ConstraintSet>()`.
//! - As JSON configuration: [`Schema::from_json_str`], then
//!   [`Schema::validate_json`] on a JSON object.
//!
//! ## Evaluation order
//!
//! Checks run as required → range → length → email and the last failing one
//! wins. See [`engine`] for details.

// ValidationError is the fundamental error type for all checks; boxing it
// would add indirection to every check for no practical benefit.
#![allow(clippy::result_large_err)]

pub mod constraint;
pub mod engine;
pub mod field;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod report;
pub mod schema;
pub mod validators;

pub use constraint::{Constraint, ConstraintSet};
pub use engine::{Validator, validate};
pub use field::{FieldDescriptor, FieldKind, FieldValue, Record};
pub use report::Report;
pub use schema::{Schema, SchemaError};
