//! Prelude module for convenient imports.
//!
//! ```
//! use fieldcheck::prelude::*;
//!
//! const AGE: ConstraintSet = ConstraintSet::new().required().min(18);
//! let report = validate(&[FieldDescriptor::integer("Age", 5, AGE)]);
//! assert!(report.contains("Age"));
//! assert!(min_length(3).validate("abc").is_ok());
//! ```

pub use crate::constraint::{Constraint, ConstraintSet};
pub use crate::engine::{Validator, validate};
pub use crate::field::{FieldDescriptor, FieldKind, FieldValue, Record};
pub use crate::foundation::{Validate, ValidationError, ValidationResult};
pub use crate::report::Report;
pub use crate::schema::{FieldSpec, Schema, SchemaBuilder, SchemaError};

pub use crate::validators::{
    Email, Max, MaxLength, Min, MinLength, Required, Zeroable, email, max, max_length, min,
    min_length, required,
};
