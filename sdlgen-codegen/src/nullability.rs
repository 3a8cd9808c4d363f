//! List and non-null wrapping of type names.

use crate::options::SchemaOptions;

/// Applies list and non-null markers to type names.
///
/// Every generated field type passes through here, so the
/// `disable_mandatory_fields` switch strips non-null markers everywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct Nullability {
    force_optional: bool,
}

impl Nullability {
    /// Creates a wrapper honouring the given options.
    #[must_use]
    pub const fn new(options: &SchemaOptions) -> Self {
        Self {
            force_optional: options.disable_mandatory_fields,
        }
    }

    /// Wraps `inner` as `[inner]` when `multiple` and appends `!` when
    /// `mandatory`.
    #[must_use]
    pub fn wrap(&self, inner: &str, multiple: bool, mandatory: bool) -> String {
        let mandatory = mandatory && !self.force_optional;
        match (multiple, mandatory) {
            (true, true) => format!("[{inner}]!"),
            (true, false) => format!("[{inner}]"),
            (false, true) => format!("{inner}!"),
            (false, false) => inner.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::scalar_mapping;
    use sdlgen_model::ScalarKind;

    #[test]
    fn test_wrap_matrix_for_every_scalar() {
        let wrapper = Nullability::default();
        for kind in ScalarKind::ALL {
            let t = scalar_mapping(kind).type_name;
            assert_eq!(wrapper.wrap(t, true, true), format!("[{t}]!"));
            assert_eq!(wrapper.wrap(t, false, true), format!("{t}!"));
            assert_eq!(wrapper.wrap(t, true, false), format!("[{t}]"));
            assert_eq!(wrapper.wrap(t, false, false), t);
        }
    }

    #[test]
    fn test_disable_mandatory_fields() {
        let options = SchemaOptions::new().disable_mandatory_fields(true);
        let wrapper = Nullability::new(&options);
        assert_eq!(wrapper.wrap("String", true, true), "[String]");
        assert_eq!(wrapper.wrap("String", false, true), "String");
    }
}
