//! Runtime record declarations
//!
//! A [`Schema`] lists a record type's fields with their kind and rules. It can
//! be built in code or loaded from JSON configuration:
//!
//! ```json
//! [
//!   { "name": "Name", "kind": "string", "rules": "required" },
//!   { "name": "Age", "kind": "integer", "rules": "required,min=18,max=99" }
//! ]
//! ```
//!
//! and then bound to a JSON object to produce the descriptors the engine
//! evaluates. All errors here happen while declaring or binding, never during
//! validation itself.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constraint::ConstraintSet;
use crate::engine::Validator;
use crate::field::{FieldDescriptor, FieldKind, FieldValue};
use crate::report::Report;

/// Errors raised while declaring a schema or binding a record to it.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SchemaError {
    /// A tag named a rule this engine does not know.
    #[error("unknown constraint `{0}`")]
    UnknownConstraint(String),

    /// Two fields share a name.
    #[error("field `{0}` is declared more than once")]
    DuplicateField(String),

    /// A record member has the wrong JSON type for its declared kind.
    #[error("field `{field}` expects {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: FieldKind,
        actual: &'static str,
    },

    /// The bound record is not a JSON object.
    #[error("record must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    /// The schema document itself is malformed.
    #[error("invalid schema document: {0}")]
    Json(#[from] serde_json::Error),
}

/// One declared field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub kind: FieldKind,
    #[serde(default)]
    pub rules: ConstraintSet,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, kind: FieldKind, rules: ConstraintSet) -> Self {
        Self {
            name: name.into(),
            kind,
            rules,
        }
    }
}

/// An ordered, duplicate-free list of field declarations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<FieldSpec>", into = "Vec<FieldSpec>")]
pub struct Schema {
    fields: Vec<FieldSpec>,
}

impl Schema {
    /// Creates a schema, rejecting duplicate field names.
    pub fn new(fields: Vec<FieldSpec>) -> Result<Self, SchemaError> {
        for (i, spec) in fields.iter().enumerate() {
            if fields[..i].iter().any(|earlier| earlier.name == spec.name) {
                return Err(SchemaError::DuplicateField(spec.name.clone()));
            }
        }
        Ok(Self { fields })
    }

    #[must_use]
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// Loads a schema from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Produces one descriptor per declared field from a JSON object.
    ///
    /// Members that are missing or `null` bind to the zero value of their
    /// kind, so `required` still catches them. Members not declared in the
    /// schema are ignored.
    pub fn bind<'a>(&'a self, record: &'a Value) -> Result<Vec<FieldDescriptor<'a>>, SchemaError> {
        let object = record
            .as_object()
            .ok_or_else(|| SchemaError::NotAnObject(json_type(record)))?;

        self.fields
            .iter()
            .map(|spec| -> Result<FieldDescriptor<'a>, SchemaError> {
                let value = match object.get(&spec.name) {
                    None | Some(Value::Null) => FieldValue::zero(spec.kind),
                    Some(member) => bind_value(spec, member)?,
                };
                Ok(FieldDescriptor::new(&spec.name, value, spec.rules))
            })
            .collect()
    }

    /// Binds `record` and validates it.
    pub fn validate_json(&self, record: &Value) -> Result<Report, SchemaError> {
        let fields = self.bind(record)?;
        Ok(Validator::new().validate(&fields))
    }
}

impl TryFrom<Vec<FieldSpec>> for Schema {
    type Error = SchemaError;

    fn try_from(fields: Vec<FieldSpec>) -> Result<Self, Self::Error> {
        Self::new(fields)
    }
}

impl From<Schema> for Vec<FieldSpec> {
    fn from(schema: Schema) -> Self {
        schema.fields
    }
}

fn bind_value<'a>(spec: &FieldSpec, member: &'a Value) -> Result<FieldValue<'a>, SchemaError> {
    let bound = match (spec.kind, member) {
        (FieldKind::String, Value::String(s)) => Some(FieldValue::String(s)),
        (FieldKind::Integer, Value::Number(n)) => n.as_i64().map(FieldValue::Integer),
        _ => None,
    };
    bound.ok_or_else(|| SchemaError::TypeMismatch {
        field: spec.name.clone(),
        expected: spec.kind,
        actual: json_type(member),
    })
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Fluent builder for [`Schema`].
///
/// ```
/// use fieldcheck::{ConstraintSet, Schema};
///
/// let schema = Schema::builder()
///     .string("Email", ConstraintSet::new().required().email())
///     .integer("Age", ConstraintSet::new().min(18))
///     .build()
///     .unwrap();
/// assert_eq!(schema.fields().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SchemaBuilder {
    fields: Vec<FieldSpec>,
}

impl SchemaBuilder {
    #[must_use = "builder methods must be chained or built"]
    pub fn field(mut self, name: impl Into<String>, kind: FieldKind, rules: ConstraintSet) -> Self {
        self.fields.push(FieldSpec::new(name, kind, rules));
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn string(self, name: impl Into<String>, rules: ConstraintSet) -> Self {
        self.field(name, FieldKind::String, rules)
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn integer(self, name: impl Into<String>, rules: ConstraintSet) -> Self {
        self.field(name, FieldKind::Integer, rules)
    }

    pub fn build(self) -> Result<Schema, SchemaError> {
        Schema::new(self.fields)
    }
}
