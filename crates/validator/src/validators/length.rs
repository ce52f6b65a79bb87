//! String length validators
//!
//! Length is measured in Unicode scalar values (chars), never bytes, so
//! non-ASCII text is counted the way a reader would count it.
//!
//! Bounds are signed. No string is shorter than a negative minimum, and every
//! string is longer than a negative maximum.

use crate::foundation::ValidationError;

#[inline]
fn char_len(input: &str) -> usize {
    input.chars().count()
}

#[inline]
fn at_least(len: usize, min: i64) -> bool {
    usize::try_from(min).ok().is_none_or(|min| len >= min)
}

#[inline]
fn at_most(len: usize, max: i64) -> bool {
    usize::try_from(max).is_ok_and(|max| len <= max)
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string has at least a minimum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: i64 } for str;
    rule(self, input) { at_least(char_len(input), self.min) }
    error(self, input) { ValidationError::min_length(self.min, char_len(input)) }
    fn min_length(min: i64);
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string does not exceed a maximum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: i64 } for str;
    rule(self, input) { at_most(char_len(input), self.max) }
    error(self, input) { ValidationError::max_length(self.max, char_len(input)) }
    fn max_length(max: i64);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn test_min_length() {
        let validator = min_length(8);
        assert!(validator.validate("12345678").is_ok());
        assert!(validator.validate("123456789").is_ok());

        let err = validator.validate("short").unwrap_err();
        assert_eq!(err.message, "Length should be at least 8 characters");
        assert_eq!(err.param("actual"), Some("5"));
    }

    #[test]
    fn test_max_length() {
        let validator = max_length(20);
        assert!(validator.validate(&"x".repeat(20)).is_ok());
        assert_eq!(
            validator.validate(&"x".repeat(21)).unwrap_err().message,
            "Length should be at most 20 characters"
        );
    }

    #[test]
    fn test_negative_bounds() {
        assert!(min_length(-1).validate("").is_ok());
        assert!(min_length(-1).validate("abc").is_ok());

        for input in ["", "abc"] {
            let err = max_length(-1).validate(input).unwrap_err();
            assert_eq!(err.message, "Length should be at most -1 characters");
        }
    }

    #[test]
    fn test_unicode_counts_chars() {
        let input = "äöüßé";
        assert_eq!(input.len(), 10);
        assert!(max_length(5).validate(input).is_ok());
        assert!(min_length(6).validate(input).is_err());
    }
}
