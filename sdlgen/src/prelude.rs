//! Prelude module for convenient imports.
//!
//! ```
//! use sdlgen::prelude::*;
//! ```

// Model types
pub use sdlgen_model::{
    BlockDef, ContentType, FieldDescriptor, FieldKind, ScalarKind, parse_content_types,
    parse_fields,
};

// Codegen types
pub use sdlgen_codegen::{
    BuiltSchema, FieldAccessor, FieldMap, FieldType, SchemaOptions, SchemaRun,
    build_custom_schema,
};

// Host types
pub use sdlgen_host::{
    ContentTypeSource, JsonFileSource, PluginConfig, SchemaActions, SdlActions, StaticSource,
    create_schema_customization,
};
