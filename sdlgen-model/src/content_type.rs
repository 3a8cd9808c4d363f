//! Content type definitions.

use crate::fields::FieldDescriptor;
use serde::{Deserialize, Serialize};

/// A content type: a named, ordered list of field descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentType {
    /// Content type identifier.
    pub uid: String,
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Top-level fields.
    #[serde(default)]
    pub schema: Vec<FieldDescriptor>,
}

impl ContentType {
    /// Creates a new content type.
    #[must_use]
    pub fn new(uid: impl Into<String>, schema: Vec<FieldDescriptor>) -> Self {
        let uid = uid.into();
        Self {
            title: uid.clone(),
            uid,
            schema,
        }
    }

    /// Sets the display title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Returns the generated object type name for this content type.
    #[must_use]
    pub fn type_name(&self, prefix: &str) -> String {
        format!("{}_{}", prefix, self.uid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::ScalarKind;

    #[test]
    fn test_content_type_creation() {
        let ct = ContentType::new(
            "blog_post",
            vec![FieldDescriptor::scalar("title", ScalarKind::Text)],
        )
        .title("Blog Post");

        assert_eq!(ct.uid, "blog_post");
        assert_eq!(ct.title, "Blog Post");
        assert_eq!(ct.schema.len(), 1);
        assert_eq!(ct.type_name("Contentstack"), "Contentstack_blog_post");
    }

    #[test]
    fn test_title_defaults_to_uid() {
        let ct = ContentType::new("page", Vec::new());
        assert_eq!(ct.title, "page");
    }
}
