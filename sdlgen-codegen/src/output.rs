//! Output of one type-building invocation.

use indexmap::IndexMap;
use sdlgen_model::FieldDescriptor;
use serde::Serialize;
use serde_json::Value;

/// Ordered mapping from field uid to its output type.
pub type FieldMap = IndexMap<String, FieldType>;

static NULL: Value = Value::Null;

/// Output type of one generated field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldType {
    /// Plain type reference; the host resolves the value by field name.
    Named(String),
    /// Type reference with an explicit accessor.
    Resolved {
        /// Wrapped type name.
        #[serde(rename = "type")]
        type_name: String,
        /// Value accessor.
        #[serde(skip)]
        accessor: FieldAccessor,
    },
}

impl FieldType {
    /// Returns the wrapped type name.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::Resolved { type_name, .. } => type_name,
        }
    }

    /// Returns the accessor, if the field has one.
    #[must_use]
    pub fn accessor(&self) -> Option<&FieldAccessor> {
        match self {
            Self::Named(_) => None,
            Self::Resolved { accessor, .. } => Some(accessor),
        }
    }
}

impl PartialEq<&str> for FieldType {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, Self::Named(name) if name == other)
    }
}

/// Reads one field's value out of a source record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAccessor {
    uid: String,
}

impl FieldAccessor {
    /// Creates an accessor for the given field uid.
    #[must_use]
    pub fn new(uid: impl Into<String>) -> Self {
        Self { uid: uid.into() }
    }

    /// Returns the uid this accessor reads.
    #[must_use]
    pub fn uid(&self) -> &str {
        &self.uid
    }

    /// Returns `source[uid]`, or `null` when the record lacks the field or is
    /// not an object.
    #[must_use]
    pub fn resolve<'v>(&self, source: &'v Value) -> &'v Value {
        source.get(&self.uid).unwrap_or(&NULL)
    }
}

/// A reference field awaiting link resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reference {
    /// Type name of the object holding the field.
    pub parent: String,
    /// Field uid.
    pub uid: String,
}

/// A file field awaiting asset resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileField {
    /// Type name of the object holding the field.
    pub parent: String,
    /// The file field descriptor.
    pub field: FieldDescriptor,
}

/// Everything one top-level invocation produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuiltSchema {
    /// Output type of every top-level field, in schema order.
    pub fields: FieldMap,
    /// SDL declarations, in discovery order.
    pub types: Vec<String>,
    /// Reference fields, in discovery order.
    pub references: Vec<Reference>,
    /// File fields, in discovery order.
    pub file_fields: Vec<FileField>,
}
