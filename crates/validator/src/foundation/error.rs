//! Error type for failed checks
//!
//! A [`ValidationError`] carries a stable machine `code`, the human-readable
//! `message` that is surfaced in the report, the optional field it belongs to,
//! and the parameters that produced it.
//!
//! All string fields use `Cow<'static, str>` so static codes and messages
//! never allocate.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation error.
///
/// # Examples
///
/// ```
/// use fieldcheck::foundation::ValidationError;
///
/// let error = ValidationError::new("min", "Value should be greater than or equal to 18")
///     .with_field("Age")
///     .with_param("min", "18")
///     .with_param("actual", "5");
///
/// assert_eq!(error.param("min"), Some("18"));
/// assert_eq!(error.to_string(), "[Age] min: Value should be greater than or equal to 18 (params: [min=18, actual=5])");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code for programmatic handling.
    ///
    /// Examples: "required", "min_length", "email"
    pub code: Cow<'static, str>,

    /// Human-readable diagnostic.
    pub message: Cow<'static, str>,

    /// Name of the field this error was recorded for, if any.
    pub field: Option<Cow<'static, str>>,

    /// Parameters that produced the error, as ordered key-value pairs.
    ///
    /// Example: `[("min", "18"), ("actual", "5")]`
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
        }
    }

    /// Sets the field name for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a "required" error.
    pub fn required() -> Self {
        Self::new("required", "Field is required")
    }

    /// Creates a "min" error for a value below its lower bound.
    pub fn below_min<T: fmt::Display>(min: T, actual: T) -> Self {
        Self::new(
            "min",
            format!("Value should be greater than or equal to {min}"),
        )
        .with_param("min", min.to_string())
        .with_param("actual", actual.to_string())
    }

    /// Creates a "max" error for a value above its upper bound.
    pub fn above_max<T: fmt::Display>(max: T, actual: T) -> Self {
        Self::new("max", format!("Value should be less than or equal to {max}"))
            .with_param("max", max.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates a "min_length" error.
    pub fn min_length(min: i64, actual: usize) -> Self {
        Self::new(
            "min_length",
            format!("Length should be at least {min} characters"),
        )
        .with_param("min", min.to_string())
        .with_param("actual", actual.to_string())
    }

    /// Creates a "max_length" error.
    pub fn max_length(max: i64, actual: usize) -> Self {
        Self::new(
            "max_length",
            format!("Length should be at most {max} characters"),
        )
        .with_param("max", max.to_string())
        .with_param("actual", actual.to_string())
    }

    /// Creates an "email" format error.
    pub fn invalid_email() -> Self {
        Self::new("email", "Invalid email format")
    }
}

// ============================================================================
// TESTS
// ============================================================================
