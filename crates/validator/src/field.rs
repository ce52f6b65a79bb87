//! Field descriptors
//!
//! A [`FieldDescriptor`] is the unit the engine evaluates: a field's name, its
//! value and its [`ConstraintSet`]. Descriptors borrow from the record they
//! describe, so building one per validation call costs no allocation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constraint::ConstraintSet;
use crate::validators::Zeroable;

/// The semantic type of a field's value.
///
/// Decides which constraints apply: `min`/`max` to integers,
/// `minLen`/`maxLen`/`email` to strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum FieldKind {
    String,
    Integer,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::String => "string",
            Self::Integer => "integer",
        })
    }
}

/// A borrowed field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum FieldValue<'a> {
    String(&'a str),
    Integer(i64),
}

impl FieldValue<'_> {
    /// The kind of this value.
    pub const fn kind(&self) -> FieldKind {
        match self {
            Self::String(_) => FieldKind::String,
            Self::Integer(_) => FieldKind::Integer,
        }
    }

    /// The zero value of `kind`.
    pub const fn zero(kind: FieldKind) -> Self {
        match kind {
            FieldKind::String => Self::String(""),
            FieldKind::Integer => Self::Integer(0),
        }
    }
}

impl Zeroable for FieldValue<'_> {
    fn is_zero(&self) -> bool {
        match self {
            Self::String(s) => s.is_zero(),
            Self::Integer(n) => n.is_zero(),
        }
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        Self::String(value)
    }
}

impl<'a> From<&'a String> for FieldValue<'a> {
    fn from(value: &'a String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for FieldValue<'_> {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for FieldValue<'_> {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

/// A field's name, value and declared constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor<'a> {
    name: &'a str,
    value: FieldValue<'a>,
    constraints: ConstraintSet,
}

impl<'a> FieldDescriptor<'a> {
    pub fn new(
        name: &'a str,
        value: impl Into<FieldValue<'a>>,
        constraints: ConstraintSet,
    ) -> Self {
        Self {
            name,
            value: value.into(),
            constraints,
        }
    }

    /// Shorthand for a string-kind descriptor.
    pub const fn string(name: &'a str, value: &'a str, constraints: ConstraintSet) -> Self {
        Self {
            name,
            value: FieldValue::String(value),
            constraints,
        }
    }

    /// Shorthand for an integer-kind descriptor.
    pub const fn integer(name: &'a str, value: i64, constraints: ConstraintSet) -> Self {
        Self {
            name,
            value: FieldValue::Integer(value),
            constraints,
        }
    }

    pub const fn name(&self) -> &'a str {
        self.name
    }

    pub const fn value(&self) -> FieldValue<'a> {
        self.value
    }

    pub const fn kind(&self) -> FieldKind {
        self.value.kind()
    }

    pub const fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }
}

/// A record type that can describe its own fields.
///
/// This is the statically-typed replacement for inspecting a struct at
/// runtime: the implementor lists its fields with their constraints.
///
/// # Examples
///
/// ```
/// use fieldcheck::{ConstraintSet, FieldDescriptor, Record, Validator};
///
/// struct Login {
///     email: String,
/// }
///
/// impl Record for Login {
///     fn fields(&self) -> Vec<FieldDescriptor<'_>> {
///         vec![FieldDescriptor::string(
///             "Email",
///             &self.email,
///             ConstraintSet::new().required().email(),
///         )]
///     }
/// }
///
/// let login = Login { email: "nope".into() };
/// let report = Validator::new().validate_record(&login);
/// assert_eq!(report.get("Email"), Some("Invalid email format"));
/// ```
pub trait Record {
    /// Returns one descriptor per field, in declaration order.
    fn fields(&self) -> Vec<FieldDescriptor<'_>>;
}
