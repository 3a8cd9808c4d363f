//! Scalar field mapping.
//!
//! Table from primitive field kind to output scalar name, and whether the
//! generated field needs an explicit accessor rather than the host's default
//! structural field lookup.

use sdlgen_model::ScalarKind;

/// Name of the externally declared link type.
pub const LINK_TYPE: &str = "linktype";

/// SDL declaration of the link type, registered by the host.
pub const LINK_TYPE_DECLARATION: &str = "type linktype { title: String href: String }";

/// Output mapping for one scalar kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScalarMapping {
    /// Output scalar type name.
    pub type_name: &'static str,
    /// Whether the field needs an accessor.
    pub accessor: bool,
}

/// Returns the output mapping for a scalar kind.
#[must_use]
pub const fn scalar_mapping(kind: ScalarKind) -> ScalarMapping {
    let (type_name, accessor) = match kind {
        ScalarKind::Text => ("String", true),
        ScalarKind::IsoDate => ("Date", false),
        ScalarKind::Number => ("Int", true),
        ScalarKind::Boolean => ("Boolean", false),
        ScalarKind::Json => ("JSON", true),
        ScalarKind::Link => (LINK_TYPE, false),
    };
    ScalarMapping {
        type_name,
        accessor,
    }
}
