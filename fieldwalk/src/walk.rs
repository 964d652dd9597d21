//! Schema-driven traversal of a data tree.
//!
//! The walker pairs every field definition with the value stored for it,
//! visiting fields in declaration order, parents before children. Fields of
//! type `array` with nested `fields` are expanded once per element of the
//! list found in the data; every other field with nested `fields` is entered
//! once with the plain path.

use serde_json::Value;

use crate::{
    data::access,
    path,
    schema::{FieldDefinition, FieldTree, lookup},
};

/// Visit every `(field, value)` pair of `data` described by `fields`.
///
/// `value` is `None` when the data has nothing at that field's path. The walk
/// reads `data` live and keeps no snapshot.
pub fn walk<'a, F>(fields: &'a FieldTree, data: &'a Value, mut visit: F)
where
    F: FnMut(&'a FieldDefinition, Option<&'a Value>),
{
    walk_with_paths(fields, data, |_, field, value| visit(field, value));
}

/// [`walk`] that also hands the visitor the data path of each value, with
/// array indices in place (e.g. `gallery[1].caption`).
pub fn walk_with_paths<'a, F>(fields: &'a FieldTree, data: &'a Value, mut visit: F)
where
    F: FnMut(&str, &'a FieldDefinition, Option<&'a Value>),
{
    let walker = Walker {
        schema: fields,
        data,
    };
    walker.walk_level(fields, "", &mut visit);
}

struct Walker<'a> {
    /// Top-level schema; every lookup starts here.
    schema: &'a FieldTree,
    data: &'a Value,
}

impl<'a> Walker<'a> {
    fn walk_level<F>(&self, items: &'a FieldTree, prefix: &str, visit: &mut F)
    where
        F: FnMut(&str, &'a FieldDefinition, Option<&'a Value>),
    {
        for key in items.keys() {
            let child_path = path::join(prefix, key);
            let schema_path = path::strip_indices(&child_path);
            let Some(field) = lookup::definition_by_path(self.schema, &schema_path) else {
                continue;
            };
            let value = access::value_by_path(self.data, &child_path);

            trace!("visit {child_path} ({})", field.field_type);
            visit(&child_path, field, value);

            let Some(nested) = &field.fields else {
                continue;
            };
            match value {
                Some(Value::Array(elements)) if field.field_type.is_plain_array() => {
                    trace!("expand {child_path} over {} elements", elements.len());
                    for idx in 0..elements.len() {
                        self.walk_level(nested, &path::index(&child_path, idx), visit);
                    }
                }
                _ => self.walk_level(nested, &child_path, visit),
            }
        }
    }
}
