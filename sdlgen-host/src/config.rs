//! Plugin configuration.

use crate::error::HostError;
use sdlgen_codegen::SchemaOptions;
use serde::Deserialize;

/// Default namespace prefix for generated type names.
pub const DEFAULT_TYPE_PREFIX: &str = "Contentstack";

/// Host plugin configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PluginConfig {
    /// Whether explicit type definitions are generated and registered.
    pub enable_schema_generation: bool,
    /// Namespace prefix for generated type names.
    pub type_prefix: String,
    /// Drop every non-null marker from generated types.
    pub disable_mandatory_fields: bool,
    /// Declare one shared type per global field definition.
    pub create_separate_global_field_types: bool,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            enable_schema_generation: false,
            type_prefix: DEFAULT_TYPE_PREFIX.to_string(),
            disable_mandatory_fields: false,
            create_separate_global_field_types: false,
        }
    }
}

impl PluginConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from JSON; absent keys take their defaults.
    ///
    /// # Errors
    /// Returns `HostError::Config` if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self, HostError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets whether schema generation is enabled.
    #[must_use]
    pub fn enable_schema_generation(mut self, enable: bool) -> Self {
        self.enable_schema_generation = enable;
        self
    }

    /// Sets the type prefix.
    #[must_use]
    pub fn type_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.type_prefix = prefix.into();
        self
    }

    /// Sets whether mandatory markers are suppressed.
    #[must_use]
    pub fn disable_mandatory_fields(mut self, disable: bool) -> Self {
        self.disable_mandatory_fields = disable;
        self
    }

    /// Sets whether global fields get one shared type.
    #[must_use]
    pub fn create_separate_global_field_types(mut self, separate: bool) -> Self {
        self.create_separate_global_field_types = separate;
        self
    }

    /// Returns the type builder options derived from this configuration.
    #[must_use]
    pub fn schema_options(&self) -> SchemaOptions {
        SchemaOptions::new()
            .disable_mandatory_fields(self.disable_mandatory_fields)
            .create_separate_global_field_types(self.create_separate_global_field_types)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PluginConfig::default();
        assert!(!config.enable_schema_generation);
        assert_eq!(config.type_prefix, "Contentstack");
        assert_eq!(config.schema_options(), SchemaOptions::default());
    }

    #[test]
    fn test_from_json() {
        let config = PluginConfig::from_json(
            r#"{"enableSchemaGeneration": true, "typePrefix": "CS", "disableMandatoryFields": true}"#,
        )
        .expect("Failed to parse");

        assert!(config.enable_schema_generation);
        assert_eq!(config.type_prefix, "CS");
        assert!(config.schema_options().disable_mandatory_fields);
        assert!(!config.schema_options().create_separate_global_field_types);
    }

    #[test]
    fn test_from_json_rejects_wrong_types() {
        let err = PluginConfig::from_json(r#"{"enableSchemaGeneration": "yes"}"#).unwrap_err();
        assert!(matches!(err, HostError::Config(_)));
    }

    #[test]
    fn test_builder() {
        let config = PluginConfig::new()
            .enable_schema_generation(true)
            .type_prefix("Site")
            .create_separate_global_field_types(true);

        assert!(config.enable_schema_generation);
        assert_eq!(config.type_prefix, "Site");
        assert!(config.schema_options().create_separate_global_field_types);
    }
}
