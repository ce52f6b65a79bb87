//! Presence validator
//!
//! A value is "present" when it differs from the zero value of its kind:
//! the empty string for text, `0` for integers.
//!
//! # Examples
//!
//! ```
//! use fieldcheck::foundation::Validate;
//! use fieldcheck::validators::required;
//!
//! assert!(required::<str>().validate("Handy").is_ok());
//! assert!(required::<str>().validate("").is_err());
//! assert!(required::<i64>().validate(&0).is_err());
//! ```

use crate::foundation::{Validate, ValidationError};
use std::marker::PhantomData;

/// Types that have a distinguished zero value.
pub trait Zeroable {
    /// Returns `true` if this is the zero value of the type.
    fn is_zero(&self) -> bool;
}

impl Zeroable for str {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl Zeroable for String {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

macro_rules! impl_zeroable_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl Zeroable for $t {
                fn is_zero(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

impl_zeroable_int!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

/// Validates that a value is not the zero value of its kind.
#[derive(Debug)]
pub struct Required<T: ?Sized> {
    _phantom: PhantomData<fn(&T)>,
}

// Manual impls: derives would demand `T: Clone`, which `str` is not.
impl<T: ?Sized> Clone for Required<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Required<T> {}

impl<T: Zeroable + ?Sized> Validate for Required<T> {
    type Input = T;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if input.is_zero() {
            Err(ValidationError::required())
        } else {
            Ok(())
        }
    }
}

/// Creates a `Required` validator.
#[must_use]
pub const fn required<T: ?Sized>() -> Required<T> {
    Required {
        _phantom: PhantomData,
    }
}
