//! Constraint declarations
//!
//! A [`ConstraintSet`] is the structured form of a field's rules. It is built
//! once at declaration time, either through the `const` builder methods or by
//! parsing the tag syntax
//!
//! ```text
//! required,min=18,max=99,minLen=8,maxLen=20,email
//! ```
//!
//! and never changes afterwards. A bound that does not parse as an integer is
//! dropped with a warning and the corresponding check is skipped.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::schema::SchemaError;

/// A single named rule, as yielded by [`ConstraintSet::iter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constraint {
    /// Value must differ from the zero value of its kind.
    Required,
    /// Integer lower bound (inclusive).
    Min(i64),
    /// Integer upper bound (inclusive).
    Max(i64),
    /// Minimum string length in chars. A negative bound never fails.
    MinLen(i64),
    /// Maximum string length in chars. A negative bound always fails.
    MaxLen(i64),
    /// String must look like an email address.
    Email,
}

impl Constraint {
    /// The rule name as written in tag syntax.
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Min(_) => "min",
            Self::Max(_) => "max",
            Self::MinLen(_) => "minLen",
            Self::MaxLen(_) => "maxLen",
            Self::Email => "email",
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Min(b) | Self::Max(b) | Self::MinLen(b) | Self::MaxLen(b) => {
                write!(f, "{}={b}", self.tag())
            }
            Self::Required | Self::Email => f.write_str(self.tag()),
        }
    }
}

/// The fixed set of rules declared for one field.
///
/// # Examples
///
/// ```
/// use fieldcheck::ConstraintSet;
///
/// const AGE: ConstraintSet = ConstraintSet::new().required().min(18).max(99);
///
/// let parsed: ConstraintSet = "required,min=18,max=99".parse().unwrap();
/// assert_eq!(parsed, AGE);
/// assert_eq!(AGE.to_string(), "required,min=18,max=99");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ConstraintSet {
    required: bool,
    min: Option<i64>,
    max: Option<i64>,
    min_len: Option<i64>,
    max_len: Option<i64>,
    email: bool,
}

impl ConstraintSet {
    /// An empty set: every field passes.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            min_len: None,
            max_len: None,
            email: false,
        }
    }

    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub const fn min(mut self, bound: i64) -> Self {
        self.min = Some(bound);
        self
    }

    #[must_use]
    pub const fn max(mut self, bound: i64) -> Self {
        self.max = Some(bound);
        self
    }

    #[must_use]
    pub const fn min_len(mut self, bound: i64) -> Self {
        self.min_len = Some(bound);
        self
    }

    #[must_use]
    pub const fn max_len(mut self, bound: i64) -> Self {
        self.max_len = Some(bound);
        self
    }

    #[must_use]
    pub const fn email(mut self) -> Self {
        self.email = true;
        self
    }

    pub const fn is_required(&self) -> bool {
        self.required
    }

    pub const fn min_bound(&self) -> Option<i64> {
        self.min
    }

    pub const fn max_bound(&self) -> Option<i64> {
        self.max
    }

    pub const fn min_len_bound(&self) -> Option<i64> {
        self.min_len
    }

    pub const fn max_len_bound(&self) -> Option<i64> {
        self.max_len
    }

    pub const fn is_email(&self) -> bool {
        self.email
    }

    /// Returns `true` if no rule is declared.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Iterates the declared rules in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = Constraint> {
        [
            self.required.then_some(Constraint::Required),
            self.min.map(Constraint::Min),
            self.max.map(Constraint::Max),
            self.min_len.map(Constraint::MinLen),
            self.max_len.map(Constraint::MaxLen),
            self.email.then_some(Constraint::Email),
        ]
        .into_iter()
        .flatten()
    }

    fn insert(&mut self, constraint: Constraint) {
        match constraint {
            Constraint::Required => self.required = true,
            Constraint::Min(b) => self.min = Some(b),
            Constraint::Max(b) => self.max = Some(b),
            Constraint::MinLen(b) => self.min_len = Some(b),
            Constraint::MaxLen(b) => self.max_len = Some(b),
            Constraint::Email => self.email = true,
        }
    }
}

impl FromIterator<Constraint> for ConstraintSet {
    fn from_iter<I: IntoIterator<Item = Constraint>>(iter: I) -> Self {
        let mut set = Self::new();
        for constraint in iter {
            set.insert(constraint);
        }
        set
    }
}

// ============================================================================
// TAG SYNTAX
// ============================================================================

/// Parses an integer bound, logging and discarding it when malformed.
///
/// Negative values are kept: they are well-formed integers.
fn parse_bound(rule: &str, raw: Option<&str>) -> Option<i64> {
    let Some(raw) = raw else {
        tracing::warn!(rule, "constraint is missing its bound; check skipped");
        return None;
    };
    match raw.trim().parse() {
        Ok(bound) => Some(bound),
        Err(_) => {
            tracing::warn!(rule, bound = raw, "malformed constraint bound; check skipped");
            None
        }
    }
}

impl FromStr for ConstraintSet {
    type Err = SchemaError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let mut set = Self::new();

        for token in tag.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            let (name, bound) = match token.split_once('=') {
                Some((name, bound)) => (name.trim(), Some(bound)),
                None => (token, None),
            };

            match name {
                "required" => set.required = true,
                "email" => set.email = true,
                "min" => set.min = parse_bound(name, bound),
                "max" => set.max = parse_bound(name, bound),
                "minLen" => set.min_len = parse_bound(name, bound),
                "maxLen" => set.max_len = parse_bound(name, bound),
                other => return Err(SchemaError::UnknownConstraint(other.to_owned())),
            }
        }

        Ok(set)
    }
}

impl TryFrom<String> for ConstraintSet {
    type Error = SchemaError;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        tag.parse()
    }
}

impl fmt::Display for ConstraintSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, constraint) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{constraint}")?;
        }
        Ok(())
    }
}

impl From<ConstraintSet> for String {
    fn from(set: ConstraintSet) -> Self {
        set.to_string()
    }
}

// ============================================================================
// TESTS
// ============================================================================
