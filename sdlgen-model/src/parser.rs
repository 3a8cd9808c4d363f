//! Content-model JSON parser.
//!
//! This module maps the platform's JSON field descriptors onto
//! [`FieldDescriptor`], dispatching on the `data_type` tag.

use crate::content_type::ContentType;
use crate::error::ParseError;
use crate::fields::{BlockDef, FieldDescriptor, FieldKind, ScalarKind};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parses a JSON array of field descriptors.
///
/// # Errors
/// Returns `ParseError` if the JSON is malformed or a field is missing a
/// required attribute.
pub fn parse_fields(json: &str) -> Result<Vec<FieldDescriptor>, ParseError> {
    Ok(serde_json::from_str(json)?)
}

/// Parses content types from JSON.
///
/// Accepts either a bare array of content types or the platform's
/// `{"content_types": [...]}` response envelope.
///
/// # Errors
/// Returns `ParseError` if the JSON is malformed or has neither shape.
pub fn parse_content_types(json: &str) -> Result<Vec<ContentType>, ParseError> {
    let value: Value = serde_json::from_str(json)?;
    content_types_from_value(value)
}

/// Parses content types from an already decoded JSON value.
///
/// # Errors
/// Returns `ParseError` if the value has neither accepted shape.
pub fn content_types_from_value(value: Value) -> Result<Vec<ContentType>, ParseError> {
    let list = match value {
        Value::Array(_) => value,
        Value::Object(mut map) => map.remove("content_types").ok_or_else(|| {
            ParseError::invalid_structure("object without a 'content_types' member")
        })?,
        other => {
            return Err(ParseError::invalid_structure(format!(
                "expected an array or object, found {other}"
            )));
        }
    };
    Ok(serde_json::from_value(list)?)
}

/// Wire representation of a field descriptor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawField {
    uid: String,
    data_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    display_name: Option<String>,
    #[serde(default)]
    mandatory: bool,
    #[serde(default)]
    multiple: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    schema: Option<Vec<FieldDescriptor>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    blocks: Option<Vec<BlockDef>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reference_to: Option<ReferenceTo>,
}

/// `reference_to` is a bare string for single targets and global fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum ReferenceTo {
    One(String),
    Many(Vec<String>),
}

impl ReferenceTo {
    fn into_vec(self) -> Vec<String> {
        match self {
            Self::One(target) => vec![target],
            Self::Many(targets) => targets,
        }
    }
}

impl TryFrom<RawField> for FieldDescriptor {
    type Error = ParseError;

    fn try_from(raw: RawField) -> Result<Self, Self::Error> {
        let kind = match raw.data_type.as_str() {
            "file" => FieldKind::File,
            "group" => FieldKind::Group {
                schema: raw.schema.unwrap_or_default(),
            },
            "global_field" => {
                let reference_to = match raw.reference_to {
                    Some(ReferenceTo::One(name)) => name,
                    Some(ReferenceTo::Many(mut names)) if names.len() == 1 => names.remove(0),
                    _ => return Err(ParseError::missing_attr(&raw.uid, "reference_to")),
                };
                FieldKind::GlobalField {
                    reference_to,
                    schema: raw.schema.unwrap_or_default(),
                }
            }
            "blocks" => FieldKind::Blocks {
                blocks: raw.blocks.unwrap_or_default(),
            },
            "reference" => FieldKind::Reference {
                reference_to: raw.reference_to.map(ReferenceTo::into_vec).unwrap_or_default(),
            },
            tag => match ScalarKind::from_data_type(tag) {
                Some(scalar) => FieldKind::Scalar(scalar),
                None => FieldKind::Unknown(tag.to_string()),
            },
        };

        Ok(Self {
            uid: raw.uid,
            display_name: raw.display_name,
            mandatory: raw.mandatory,
            multiple: raw.multiple,
            kind,
        })
    }
}

impl From<FieldDescriptor> for RawField {
    fn from(field: FieldDescriptor) -> Self {
        let data_type = field.data_type().to_string();
        let mut raw = Self {
            uid: field.uid,
            data_type,
            display_name: field.display_name,
            mandatory: field.mandatory,
            multiple: field.multiple,
            schema: None,
            blocks: None,
            reference_to: None,
        };
        match field.kind {
            FieldKind::Group { schema } => raw.schema = Some(schema),
            FieldKind::GlobalField {
                reference_to,
                schema,
            } => {
                raw.schema = Some(schema);
                raw.reference_to = Some(ReferenceTo::One(reference_to));
            }
            FieldKind::Blocks { blocks } => raw.blocks = Some(blocks),
            FieldKind::Reference { reference_to } => {
                raw.reference_to = Some(ReferenceTo::Many(reference_to));
            }
            FieldKind::Scalar(_) | FieldKind::File | FieldKind::Unknown(_) => {}
        }
        raw
    }
}
