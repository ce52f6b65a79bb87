//! Validation report
//!
//! A [`Report`] maps each failing field to the single diagnostic it kept. It
//! is created fresh by every validation call and owns its contents.

use std::fmt;

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::foundation::ValidationError;

/// Field name → diagnostic for every field that failed a check.
///
/// Entries keep the order in which their fields were first reported; callers
/// must not rely on it for anything but stable rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    entries: IndexMap<String, ValidationError>,
}

impl Report {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `error` for `field`, replacing any earlier entry for it.
    pub(crate) fn record(&mut self, field: &str, error: ValidationError) {
        let error = error.with_field(field.to_owned());
        self.entries.insert(field.to_owned(), error);
    }

    /// The diagnostic kept for `field`, if it failed.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries.get(field).map(|e| e.message.as_ref())
    }

    /// The full error kept for `field`, including its code and parameters.
    #[must_use]
    pub fn error(&self, field: &str) -> Option<&ValidationError> {
        self.entries.get(field)
    }

    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.entries.contains_key(field)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(field, message)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(field, e)| (field.as_str(), e.message.as_ref()))
    }

    /// Iterates the names of the failing fields.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// `Ok(())` when nothing failed, the report itself otherwise.
    #[must_use = "result must be used"]
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl IntoIterator for Report {
    type Item = (String, String);
    type IntoIter = std::iter::Map<
        indexmap::map::IntoIter<String, ValidationError>,
        fn((String, ValidationError)) -> (String, String),
    >;

    fn into_iter(self) -> Self::IntoIter {
        fn into_pair((field, e): (String, ValidationError)) -> (String, String) {
            (field, e.message.into_owned())
        }
        self.entries
            .into_iter()
            .map(into_pair as fn((String, ValidationError)) -> (String, String))
    }
}

impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (field, message) in self.iter() {
            map.serialize_entry(field, message)?;
        }
        map.end()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("Validation successful");
        }
        f.write_str("Validation errors:")?;
        for (field, message) in self.iter() {
            write!(f, "\n{field}: {message}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Report {}
