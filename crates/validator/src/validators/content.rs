//! String content validators

use std::sync::LazyLock;

use crate::foundation::ValidationError;

static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

// ============================================================================
// EMAIL VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates email format.
    ///
    /// The whole input must match: a local part of `[A-Za-z0-9._%+-]`, `@`,
    /// a domain of `[A-Za-z0-9.-]`, then a dot and an alphabetic TLD of at
    /// least two letters.
    pub Email for str;
    rule(input) { EMAIL_REGEX.is_match(input) }
    error(input) { ValidationError::invalid_email() }
    fn email();
}

// ============================================================================
// TESTS
// ============================================================================
