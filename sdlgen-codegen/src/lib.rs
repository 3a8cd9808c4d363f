//! # sdlgen Codegen
//!
//! GraphQL SDL type synthesis from content-type field descriptors.
//!
//! This crate provides:
//! - Scalar mapping and list/non-null wrapping of field types
//! - Deterministic naming of synthesized object and union types
//! - A recursive builder that declares one type per group, global field and
//!   modular blocks field, plus placeholder types for reference targets
//! - Bookkeeping of reference and file fields for later resolution

pub mod entry;
pub mod error;
pub mod generator;
pub mod naming;
pub mod nullability;
pub mod options;
pub mod output;
pub mod registry;
pub mod scalar;
pub mod sdl;

pub use entry::extend_with_default_entry_fields;
pub use error::CodegenError;
pub use generator::{
    Generator, REFERENCE_TITLE_FIELD, REFERENCE_TITLE_TYPE, SchemaRun, reference_placeholder,
};
pub use nullability::Nullability;
pub use options::SchemaOptions;
pub use output::{BuiltSchema, FieldAccessor, FieldMap, FieldType, FileField, Reference};
pub use registry::TypeRegistry;

use sdlgen_model::FieldDescriptor;

/// Builds the output types for one field list on a fresh run.
///
/// # Arguments
/// * `fields` - Top-level fields of the content type
/// * `parent` - Type name of the object owning `fields`
/// * `prefix` - Namespace prefix for generated global type names
/// * `options` - Customisation options
#[must_use]
pub fn build_custom_schema(
    fields: &[FieldDescriptor],
    parent: &str,
    prefix: &str,
    options: &SchemaOptions,
) -> BuiltSchema {
    SchemaRun::new(prefix, *options).build(fields, parent)
}

/// Builds output types from a JSON array of field descriptors.
///
/// # Errors
/// Returns `CodegenError` if the JSON cannot be parsed.
pub fn generate_from_json(
    json: &str,
    parent: &str,
    prefix: &str,
    options: &SchemaOptions,
) -> Result<BuiltSchema, CodegenError> {
    let fields = sdlgen_model::parse_fields(json)?;
    Ok(build_custom_schema(&fields, parent, prefix, options))
}

/// Builds output types from a file holding a JSON array of field descriptors.
///
/// # Errors
/// Returns `CodegenError` if reading or parsing fails.
pub fn generate_from_file(
    path: &std::path::Path,
    parent: &str,
    prefix: &str,
    options: &SchemaOptions,
) -> Result<BuiltSchema, CodegenError> {
    let json = std::fs::read_to_string(path)?;
    generate_from_json(&json, parent, prefix, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const FIELDS: &str = r#"[
        {"uid": "title", "data_type": "text", "mandatory": true},
        {"uid": "author", "data_type": "reference", "reference_to": "person"}
    ]"#;

    #[test]
    fn test_generate_from_json() {
        let built = generate_from_json(FIELDS, "cs_post", "cs", &SchemaOptions::default())
            .expect("Failed to generate");

        assert_eq!(built.fields["title"].type_name(), "String!");
        assert_eq!(built.fields["author"], "[cs_person]!");
        assert_eq!(built.references[0].parent, "cs_post");
    }

    #[test]
    fn test_generate_from_json_rejects_malformed_input() {
        let err = generate_from_json("{", "p", "cs", &SchemaOptions::default()).unwrap_err();
        assert!(matches!(err, CodegenError::Parse(_)));
    }

    #[test]
    fn test_generate_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(FIELDS.as_bytes()).expect("write");

        let built = generate_from_file(file.path(), "cs_post", "cs", &SchemaOptions::default())
            .expect("Failed to generate");
        assert_eq!(built.fields.len(), 2);
    }

    #[test]
    fn test_generate_from_missing_file() {
        let err = generate_from_file(
            std::path::Path::new("/nonexistent/fields.json"),
            "p",
            "cs",
            &SchemaOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, CodegenError::Io(_)));
    }
}
