//! Object type declarations.

use super::Declaration;

/// An object type declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectDeclaration {
    name: String,
    node: bool,
    body: String,
}

impl ObjectDeclaration {
    /// Creates a plain object type with the given body.
    #[must_use]
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            node: false,
            body: body.into(),
        }
    }

    /// Creates an object type implementing `Node` with field inference.
    #[must_use]
    pub fn node(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            node: true,
            ..Self::new(name, body)
        }
    }
}

impl Declaration for ObjectDeclaration {
    fn name(&self) -> &str {
        &self.name
    }

    fn render(&self) -> String {
        if self.node {
            format!("type {} implements Node @infer {{ {} }}", self.name, self.body)
        } else {
            format!("type {} {{ {} }}", self.name, self.body)
        }
    }
}
