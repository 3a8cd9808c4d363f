//! Content-model validation utilities.
//!
//! Checks the structural invariants the type builder relies on: every uid is
//! non-empty and unique among its siblings, at every nesting level.

use crate::content_type::ContentType;
use crate::error::SchemaError;
use crate::fields::{FieldDescriptor, FieldKind};
use std::collections::HashSet;

/// Validates a content type's schema.
///
/// # Errors
/// Returns `SchemaError` describing the first violation found.
pub fn validate_content_type(content_type: &ContentType) -> Result<(), SchemaError> {
    validate_schema(&content_type.schema, &content_type.uid)
}

/// Validates a top-level field list.
///
/// # Errors
/// Returns `SchemaError` describing the first violation found.
pub fn validate_fields(fields: &[FieldDescriptor]) -> Result<(), SchemaError> {
    validate_schema(fields, "")
}

fn validate_schema(fields: &[FieldDescriptor], path: &str) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();

    for field in fields {
        if field.uid.is_empty() {
            return Err(SchemaError::EmptyUid {
                parent: path.to_string(),
            });
        }
        if !seen.insert(field.uid.as_str()) {
            return Err(SchemaError::duplicate(path, &field.uid));
        }

        let child = child_path(path, &field.uid);
        match &field.kind {
            FieldKind::Group { schema } | FieldKind::GlobalField { schema, .. } => {
                validate_schema(schema, &child)?;
            }
            FieldKind::Blocks { blocks } => {
                for block in blocks {
                    validate_schema(&block.schema, &child_path(&child, &block.uid))?;
                }
            }
            _ => {}
        }
    }

    Ok(())
}

fn child_path(path: &str, uid: &str) -> String {
    if path.is_empty() {
        uid.to_string()
    } else {
        format!("{path}.{uid}")
    }
}
