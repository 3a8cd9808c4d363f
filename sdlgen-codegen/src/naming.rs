//! Naming scheme for synthesized types.
//!
//! Field uids are only unique among siblings, so every name that must be
//! unique across a run is derived from the enclosing parent name as well.

/// How global fields are named.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalFieldNaming {
    /// One type per embedding parent, named like a group.
    PerParent,
    /// One type per global field definition, named after the definition.
    Shared,
}

impl GlobalFieldNaming {
    /// Selects the naming mode from the `create_separate_global_field_types`
    /// switch.
    #[must_use]
    pub const fn from_flag(separate: bool) -> Self {
        if separate { Self::Shared } else { Self::PerParent }
    }
}

/// Name of an object type scoped to one parent (groups, blocks).
#[must_use]
pub fn object_type_name(parent: &str, uid: &str) -> String {
    format!("{parent}_{uid}")
}

/// Name of the type declared for a global field.
#[must_use]
pub fn global_field_type_name(
    parent: &str,
    uid: &str,
    definition: &str,
    naming: GlobalFieldNaming,
) -> String {
    match naming {
        GlobalFieldNaming::Shared => definition.to_string(),
        GlobalFieldNaming::PerParent => object_type_name(parent, uid),
    }
}

/// Name of the placeholder type for one reference target.
#[must_use]
pub fn reference_type_name(prefix: &str, target: &str) -> String {
    format!("{prefix}_{target}")
}

/// Name of the union over several reference targets.
///
/// Target type names are concatenated without a separator.
#[must_use]
pub fn union_type_name<S: AsRef<str>>(prefix: &str, targets: &[S]) -> String {
    let mut name: String = targets
        .iter()
        .map(|target| reference_type_name(prefix, target.as_ref()))
        .collect();
    name.push_str("_Union");
    name
}

/// Name of the generated asset type.
#[must_use]
pub fn assets_type_name(prefix: &str) -> String {
    format!("{prefix}_assets")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_type_name() {
        assert_eq!(object_type_name("Contentstack_page", "seo"), "Contentstack_page_seo");
    }

    #[test]
    fn test_global_field_naming_modes() {
        assert_eq!(
            global_field_type_name("Parent", "banner", "hero_banner", GlobalFieldNaming::Shared),
            "hero_banner"
        );
        assert_eq!(
            global_field_type_name("Parent", "banner", "hero_banner", GlobalFieldNaming::PerParent),
            "Parent_banner"
        );
        assert_eq!(GlobalFieldNaming::from_flag(true), GlobalFieldNaming::Shared);
        assert_eq!(GlobalFieldNaming::from_flag(false), GlobalFieldNaming::PerParent);
    }

    #[test]
    fn test_reference_names() {
        assert_eq!(reference_type_name("prefix", "author"), "prefix_author");
        assert_eq!(
            union_type_name("prefix", &["target_1", "target_2"]),
            "prefix_target_1prefix_target_2_Union"
        );
    }

    #[test]
    fn test_assets_type_name() {
        assert_eq!(assets_type_name("Contentstack"), "Contentstack_assets");
    }
}
