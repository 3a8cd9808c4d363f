//! # sdlgen Host
//!
//! Host side of schema generation.
//!
//! This crate provides:
//! - Plugin configuration, including the schema generation gate
//! - The content-type source and schema-actions seams
//! - The schema customisation lifecycle tying them to the type builder

pub mod actions;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod source;

pub use actions::{ObjectTypeConfig, SchemaActions, SdlActions, TypeDefinition};
pub use config::PluginConfig;
pub use error::HostError;
pub use lifecycle::{SchemaReport, create_schema_customization};
pub use source::{ContentTypeSource, JsonFileSource, StaticSource};
