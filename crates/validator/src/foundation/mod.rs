//! Core validation types and traits
//!
//! - **Traits**: [`Validate`]
//! - **Errors**: [`ValidationError`]
//!
//! Every primitive check in [`validators`](crate::validators) implements
//! [`Validate`] for the kind of value it applies to and reports failure as a
//! [`ValidationError`] whose `message` is the diagnostic that ends up in the
//! [`Report`](crate::Report).
//!
//! ```
//! use fieldcheck::foundation::Validate;
//! use fieldcheck::validators::min_length;
//!
//! let validator = min_length(8);
//! assert!(validator.validate("123456789").is_ok());
//!
//! let err = validator.validate("short").unwrap_err();
//! assert_eq!(err.message, "Length should be at least 8 characters");
//! ```

pub mod error;
pub mod traits;

pub use error::ValidationError;
pub use traits::Validate;

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a value with a single check.
///
/// This is a convenience function for one-off validations.
#[must_use = "validation result must be checked"]
pub fn validate_value<V>(value: &V::Input, validator: &V) -> ValidationResult<()>
where
    V: Validate + ?Sized,
{
    validator.validate(value)
}
