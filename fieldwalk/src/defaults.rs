//! Default values for freshly created data objects.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::schema::{FieldDefinition, FieldTree};

/// Build the initial data object for one level of a schema.
///
/// Each field starts as `[]`, `null` or `""` depending on its type (see
/// [`crate::schema::FieldKind::default_shape`]). Localized fields become a
/// mapping from every locale in `locales` to that value instead. Nested
/// `fields` are not descended into; use [`new_element`] when appending to an
/// array field.
pub fn initialize<S: AsRef<str>>(fields: &FieldTree, locales: &[S]) -> Value {
    let data: Map<String, Value> = fields
        .iter()
        .map(|(key, field)| (key.clone(), initial_value(field, locales)))
        .collect();
    Value::Object(data)
}

/// Initial value of a single field, fanned out per locale when localized.
pub fn initial_value<S: AsRef<str>>(field: &FieldDefinition, locales: &[S]) -> Value {
    if !field.field_type.localized {
        return field.default_value();
    }
    let per_locale: Map<String, Value> = locales
        .iter()
        .map(|locale| (locale.as_ref().to_string(), field.default_value()))
        .collect();
    Value::Object(per_locale)
}

/// Initial data for one new element of an array field.
///
/// A field without nested `fields` yields an empty mapping.
pub fn new_element<S: AsRef<str>>(array_field: &FieldDefinition, locales: &[S]) -> Value {
    match &array_field.fields {
        Some(fields) => initialize(fields, locales),
        None => initialize(&IndexMap::new(), locales),
    }
}
