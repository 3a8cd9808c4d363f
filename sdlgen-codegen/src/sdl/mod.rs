//! SDL declaration rendering.

pub mod objects;
pub mod unions;

pub use objects::ObjectDeclaration;
pub use unions::UnionDeclaration;

use crate::output::FieldMap;

/// A renderable type declaration.
pub trait Declaration {
    /// Declared type name.
    fn name(&self) -> &str;

    /// Renders the declaration as one line of SDL.
    fn render(&self) -> String;
}

/// Renders a field map as a declaration body: `uid:Type` entries in map
/// order, comma separated.
///
/// The layout follows a JSON object rendering of the field map with quotes
/// and braces stripped, so entries keep their `,` delimiter. SDL treats
/// commas as insignificant, and without them adjacent entries would run
/// together.
#[must_use]
pub fn render_fields(fields: &FieldMap) -> String {
    let mut body = String::new();
    for (i, (uid, field_type)) in fields.iter().enumerate() {
        if i > 0 {
            body.push(',');
        }
        body.push_str(uid);
        body.push(':');
        body.push_str(field_type.type_name());
    }
    body
}
