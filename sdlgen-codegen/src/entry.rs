//! System fields present on every entry.

use crate::output::{FieldMap, FieldType};

/// System entry fields and their types.
pub const DEFAULT_ENTRY_FIELDS: [(&str, &str); 6] = [
    ("uid", "String!"),
    ("locale", "String"),
    ("created_at", "Date"),
    ("updated_at", "Date"),
    ("created_by", "String"),
    ("updated_by", "String"),
];

/// Adds the system entry fields to a content type's field map.
///
/// Fields the content type declares itself are left untouched.
pub fn extend_with_default_entry_fields(fields: &mut FieldMap) {
    for (uid, type_name) in DEFAULT_ENTRY_FIELDS {
        fields
            .entry(uid.to_string())
            .or_insert_with(|| FieldType::Named(type_name.to_string()));
    }
}
