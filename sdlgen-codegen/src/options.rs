//! Customisation options recognised by the type builder.

use serde::Deserialize;

/// Options controlling nullability and global field type sharing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SchemaOptions {
    /// Drop every non-null marker produced by the nullability wrapper.
    pub disable_mandatory_fields: bool,
    /// Declare one shared type per global field definition instead of one
    /// type per embedding parent.
    pub create_separate_global_field_types: bool,
}

impl SchemaOptions {
    /// Creates options with both switches off.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            disable_mandatory_fields: false,
            create_separate_global_field_types: false,
        }
    }

    /// Sets whether mandatory markers are suppressed.
    #[must_use]
    pub const fn disable_mandatory_fields(mut self, disable: bool) -> Self {
        self.disable_mandatory_fields = disable;
        self
    }

    /// Sets whether global fields get one shared type.
    #[must_use]
    pub const fn create_separate_global_field_types(mut self, separate: bool) -> Self {
        self.create_separate_global_field_types = separate;
        self
    }
}
