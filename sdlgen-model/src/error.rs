//! Error types for content-model parsing and validation.

use thiserror::Error;

/// Error type for content-model parsing operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON decoding error.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Missing required attribute.
    #[error("missing required attribute '{attribute}' on field '{field}'")]
    MissingAttribute {
        /// Field uid.
        field: String,
        /// Attribute name.
        attribute: String,
    },

    /// Invalid content-model structure.
    #[error("invalid content model structure: {message}")]
    InvalidStructure {
        /// Error message.
        message: String,
    },
}

/// Error type for content-model validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// A field has an empty uid.
    #[error("field with empty uid under '{parent}'")]
    EmptyUid {
        /// Path of the enclosing schema.
        parent: String,
    },

    /// Two sibling fields share a uid.
    #[error("duplicate field uid '{uid}' under '{parent}'")]
    DuplicateField {
        /// Path of the enclosing schema.
        parent: String,
        /// Duplicated uid.
        uid: String,
    },
}

impl ParseError {
    /// Creates a missing attribute error.
    pub fn missing_attr(field: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::MissingAttribute {
            field: field.into(),
            attribute: attribute.into(),
        }
    }

    /// Creates an invalid structure error.
    pub fn invalid_structure(message: impl Into<String>) -> Self {
        Self::InvalidStructure {
            message: message.into(),
        }
    }
}

impl SchemaError {
    /// Creates a duplicate field error.
    pub fn duplicate(parent: impl Into<String>, uid: impl Into<String>) -> Self {
        Self::DuplicateField {
            parent: parent.into(),
            uid: uid.into(),
        }
    }
}
