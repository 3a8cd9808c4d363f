//! # sdlgen
//!
//! GraphQL SDL type generation for headless CMS content models.
//!
//! sdlgen compiles a content type's field descriptors into explicit type
//! definitions so that a GraphQL schema does not depend on inferring types
//! from whatever entries happen to exist.
//!
//! ## Features
//!
//! - **Typed field descriptors** - one variant per field kind, parsed from the
//!   platform's JSON content model
//! - **Deterministic naming** - synthesized type names derive from the
//!   enclosing type, so repeated uids never collide
//! - **Shared global field types** - optionally one type per global field
//!   definition across every content type
//! - **Host lifecycle** - gated registration of all generated types
//!
//! ## Quick Start
//!
//! ```
//! use sdlgen::prelude::*;
//!
//! let fields = vec![
//!     FieldDescriptor::scalar("title", ScalarKind::Text).mandatory(true),
//!     FieldDescriptor::reference("author", ["person"]),
//! ];
//!
//! let built = build_custom_schema(&fields, "CS_post", "CS", &SchemaOptions::default());
//! assert_eq!(built.fields["title"].type_name(), "String!");
//! assert_eq!(built.fields["author"].type_name(), "[CS_person]!");
//! ```
//!
//! ## Crate Organization
//!
//! - [`model`] - Field descriptors, JSON parsing, validation
//! - [`codegen`] - Type synthesis
//! - [`host`] - Configuration and the schema customisation lifecycle

pub mod prelude;

/// Content-model types and parsing.
pub mod model {
    pub use sdlgen_model::*;
}

/// Type synthesis from field descriptors.
pub mod codegen {
    pub use sdlgen_codegen::*;
}

/// Host configuration and lifecycle.
pub mod host {
    pub use sdlgen_host::*;
}

// Re-export commonly used items at the crate root
pub use sdlgen_codegen::{BuiltSchema, SchemaOptions, SchemaRun, build_custom_schema};
pub use sdlgen_host::{PluginConfig, create_schema_customization};
pub use sdlgen_model::{ContentType, FieldDescriptor};
