//! Built-in primitive checks
//!
//! One validator per constraint kind the engine understands:
//!
//! - **Presence**: [`Required`]
//! - **Numeric**: [`Min`], [`Max`]
//! - **String**: [`MinLength`], [`MaxLength`], [`Email`]
//!
//! Each carries the diagnostic that the engine records for a failing field.
//!
//! ```
//! use fieldcheck::foundation::Validate;
//! use fieldcheck::validators::{email, max, min};
//!
//! assert!(min(18).validate(&24).is_ok());
//! assert!(max(99).validate(&150).is_err());
//! assert!(email().validate("user@example.com").is_ok());
//! ```

pub mod content;
pub mod length;
pub mod range;
pub mod required;

pub use content::{Email, email};
pub use length::{MaxLength, MinLength, max_length, min_length};
pub use range::{Max, Min, max, min};
pub use required::{Required, Zeroable, required};
