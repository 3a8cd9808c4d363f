//! Run-scoped registry of declared types and global field usage.

use indexmap::IndexMap;
use std::collections::HashSet;

/// Types declared so far in one run, plus the parents using each global
/// field definition.
///
/// Lives for one [`SchemaRun`](crate::generator::SchemaRun) and is shared by
/// every content type built on it.
#[derive(Debug, Default, Clone)]
pub struct TypeRegistry {
    declared: HashSet<String>,
    global_fields: IndexMap<String, Vec<String>>,
}

impl TypeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a type name as declared.
    ///
    /// Returns `true` if the name was not declared before.
    pub fn declare(&mut self, name: &str) -> bool {
        if self.declared.contains(name) {
            return false;
        }
        self.declared.insert(name.to_string())
    }

    /// Returns true if the global field definition has been seen.
    #[must_use]
    pub fn has_global_field(&self, definition: &str) -> bool {
        self.global_fields.contains_key(definition)
    }

    /// Records `parent` as a user of a global field definition.
    ///
    /// Returns `true` on the first use of the definition.
    pub fn record_global_field_use(&mut self, definition: &str, parent: &str) -> bool {
        match self.global_fields.get_mut(definition) {
            Some(users) => {
                users.push(parent.to_string());
                false
            }
            None => {
                self.global_fields
                    .insert(definition.to_string(), vec![parent.to_string()]);
                true
            }
        }
    }

    /// Returns the parents using a global field definition, in first-use
    /// order.
    #[must_use]
    pub fn global_field_users(&self, definition: &str) -> Option<&[String]> {
        self.global_fields.get(definition).map(Vec::as_slice)
    }

    /// Iterates global field definitions and their users, in first-use order.
    pub fn global_fields(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.global_fields
            .iter()
            .map(|(name, users)| (name.as_str(), users.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declare_once() {
        let mut registry = TypeRegistry::new();
        assert!(registry.declare("prefix_assets"));
        assert!(!registry.declare("prefix_assets"));
        assert!(registry.declare("prefix_author"));
    }

    #[test]
    fn test_global_field_users() {
        let mut registry = TypeRegistry::new();
        assert!(!registry.has_global_field("seo"));
        assert!(registry.record_global_field_use("seo", "prefix_page"));
        assert!(!registry.record_global_field_use("seo", "prefix_post"));
        assert!(registry.record_global_field_use("banner", "prefix_page"));

        assert!(registry.has_global_field("seo"));
        assert_eq!(
            registry.global_field_users("seo"),
            Some(&["prefix_page".to_string(), "prefix_post".to_string()][..])
        );
        assert_eq!(registry.global_field_users("missing"), None);

        let names: Vec<_> = registry.global_fields().map(|(name, _)| name).collect();
        assert_eq!(names, ["seo", "banner"]);
    }
}
