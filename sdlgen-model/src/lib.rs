//! # sdlgen Model
//!
//! Content-type field descriptors as published by a headless content platform.
//!
//! This crate provides:
//! - Field descriptor types, one variant per field kind
//! - JSON parsing of the platform's content-model wire format
//! - Structural validation of field lists

pub mod content_type;
pub mod error;
pub mod fields;
pub mod parser;
pub mod validation;

pub use content_type::ContentType;
pub use error::{ParseError, SchemaError};
pub use fields::{BlockDef, FieldDescriptor, FieldKind, ScalarKind};
pub use parser::{content_types_from_value, parse_content_types, parse_fields};
pub use validation::{validate_content_type, validate_fields};
