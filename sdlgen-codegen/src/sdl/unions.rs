//! Union type declarations.

use super::Declaration;

/// A union type declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionDeclaration {
    name: String,
    members: Vec<String>,
}

impl UnionDeclaration {
    /// Creates a union over the given member types, in order.
    #[must_use]
    pub fn new(name: impl Into<String>, members: Vec<String>) -> Self {
        Self {
            name: name.into(),
            members,
        }
    }
}

impl Declaration for UnionDeclaration {
    fn name(&self) -> &str {
        &self.name
    }

    fn render(&self) -> String {
        format!("union {} = {}", self.name, self.members.join(" | "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_render() {
        let decl = UnionDeclaration::new(
            "p_ap_b_Union",
            vec!["p_a".to_string(), "p_b".to_string()],
        );
        assert_eq!(decl.render(), "union p_ap_b_Union = p_a | p_b");
    }
}
