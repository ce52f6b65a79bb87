//! Numeric bound validators

use std::fmt::Display;

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a value is greater than or equal to a lower bound.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Min<T: PartialOrd + Display + Copy> { min: T } for T;
    rule(self, input) { *input >= self.min }
    error(self, input) { ValidationError::below_min(self.min, *input) }
    fn min(value: T);
}

crate::validator! {
    /// Validates that a value is less than or equal to an upper bound.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldcheck::validators::max;
    /// use fieldcheck::foundation::Validate;
    ///
    /// let validator = max(99);
    /// assert!(validator.validate(&99).is_ok());
    /// assert!(validator.validate(&100).is_err());
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Max<T: PartialOrd + Display + Copy> { max: T } for T;
    rule(self, input) { *input <= self.max }
    error(self, input) { ValidationError::above_max(self.max, *input) }
    fn max(value: T);
}

// ============================================================================
// TESTS
// ============================================================================
