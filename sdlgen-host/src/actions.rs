//! Schema-building actions exposed by the host.

use sdlgen_codegen::FieldMap;
use sdlgen_codegen::sdl::render_fields;

/// Configuration of an object type built from a field map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectTypeConfig {
    /// Type name.
    pub name: String,
    /// Implemented interfaces.
    pub interfaces: Vec<String>,
    /// Fields, in order.
    pub fields: FieldMap,
    /// Whether the host may infer fields beyond `fields`.
    pub infer: bool,
}

impl ObjectTypeConfig {
    /// Creates an object type implementing `Node`.
    #[must_use]
    pub fn node(name: impl Into<String>, fields: FieldMap) -> Self {
        Self {
            name: name.into(),
            interfaces: vec!["Node".to_string()],
            fields,
            infer: false,
        }
    }

    /// Sets whether the host may infer extra fields.
    #[must_use]
    pub fn infer(mut self, infer: bool) -> Self {
        self.infer = infer;
        self
    }

    /// Renders the object type as SDL.
    #[must_use]
    pub fn to_sdl(&self) -> String {
        let implements = if self.interfaces.is_empty() {
            String::new()
        } else {
            format!(" implements {}", self.interfaces.join(" & "))
        };
        let directive = if self.infer { " @infer" } else { "" };
        format!(
            "type {}{}{} {{ {} }}",
            self.name,
            implements,
            directive,
            render_fields(&self.fields)
        )
    }
}

/// A type handed to the host for registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDefinition {
    /// SDL declaration.
    Sdl(String),
    /// Object type built through [`SchemaActions::build_object_type`].
    Object(ObjectTypeConfig),
}

impl TypeDefinition {
    /// Renders the definition as SDL.
    #[must_use]
    pub fn to_sdl(&self) -> String {
        match self {
            Self::Sdl(sdl) => sdl.clone(),
            Self::Object(config) => config.to_sdl(),
        }
    }
}

/// Schema-building API of the host.
pub trait SchemaActions {
    /// Builds an object type from a field map.
    fn build_object_type(&self, config: ObjectTypeConfig) -> TypeDefinition {
        TypeDefinition::Object(config)
    }

    /// Registers type definitions, in order.
    fn create_types(&mut self, types: Vec<TypeDefinition>);
}

/// Actions that render every registered type to SDL.
#[derive(Debug, Default, Clone)]
pub struct SdlActions {
    types: Vec<String>,
    calls: usize,
}

impl SdlActions {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the registered declarations, in registration order.
    #[must_use]
    pub fn types(&self) -> &[String] {
        &self.types
    }

    /// Returns how many times `create_types` was called.
    #[must_use]
    pub fn create_types_calls(&self) -> usize {
        self.calls
    }

    /// Returns the full SDL document, one declaration per line.
    #[must_use]
    pub fn sdl(&self) -> String {
        self.types.join("\n")
    }
}

impl SchemaActions for SdlActions {
    fn create_types(&mut self, types: Vec<TypeDefinition>) {
        self.calls += 1;
        self.types
            .extend(types.iter().map(TypeDefinition::to_sdl));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdlgen_codegen::FieldType;

    #[test]
    fn test_object_type_to_sdl() {
        let mut fields = FieldMap::new();
        fields.insert("title".into(), FieldType::Named("String!".into()));
        fields.insert("published".into(), FieldType::Named("Date".into()));

        let config = ObjectTypeConfig::node("Contentstack_post", fields);
        assert_eq!(
            config.to_sdl(),
            "type Contentstack_post implements Node { title:String!,published:Date }"
        );
    }

    #[test]
    fn test_object_type_without_interfaces() {
        let config = ObjectTypeConfig {
            name: "Plain".into(),
            interfaces: Vec::new(),
            fields: FieldMap::new(),
            infer: false,
        };
        assert_eq!(config.to_sdl(), "type Plain {  }");
    }

    #[test]
    fn test_object_type_with_inference() {
        let mut fields = FieldMap::new();
        fields.insert("title".into(), FieldType::Named("String!".into()));

        let config = ObjectTypeConfig::node("CS_person", fields).infer(true);
        assert_eq!(
            config.to_sdl(),
            "type CS_person implements Node @infer { title:String! }"
        );
    }

    #[test]
    fn test_sdl_actions_collects_in_order() {
        let mut actions = SdlActions::new();
        let object = actions.build_object_type(ObjectTypeConfig::node("A", FieldMap::new()));
        actions.create_types(vec![TypeDefinition::Sdl("scalar X".into()), object]);

        assert_eq!(actions.create_types_calls(), 1);
        assert_eq!(actions.types(), ["scalar X", "type A implements Node {  }"]);
        assert_eq!(actions.sdl(), "scalar X\ntype A implements Node {  }");
    }
}
