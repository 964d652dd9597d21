use serde_json::Value;

use crate::{
    data::access,
    path,
    schema::{
        field::{FieldDefinition, FieldTree},
        types::FieldType,
    },
};

/// A node reached while resolving a path against a schema.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SchemaNode<'a> {
    /// A field tree: the whole schema for an empty path, or a field's
    /// `fields` mapping.
    Tree(&'a FieldTree),
    /// A field definition.
    Field(&'a FieldDefinition),
    /// A field's `type` tag.
    Type(&'a FieldType),
    /// A field's `multiple` flag, when set.
    Multiple(bool),
    /// An extra attribute of a field definition, or something inside one.
    Attribute(&'a Value),
}

impl<'a> SchemaNode<'a> {
    pub fn as_field(self) -> Option<&'a FieldDefinition> {
        match self {
            SchemaNode::Field(field) => Some(field),
            _ => None,
        }
    }

    /// One resolution step below the top level: `fields[key]` first, then
    /// the node's own `key`.
    fn child(self, key: &str) -> Option<SchemaNode<'a>> {
        match self {
            SchemaNode::Tree(tree) => tree.get(key).map(SchemaNode::Field),
            SchemaNode::Field(field) => field
                .field(key)
                .map(SchemaNode::Field)
                .or_else(|| own_key(field, key)),
            SchemaNode::Attribute(value) => value
                .get("fields")
                .and_then(|fields| access::step(fields, key))
                .or_else(|| access::step(value, key))
                .map(SchemaNode::Attribute),
            SchemaNode::Type(_) | SchemaNode::Multiple(_) => None,
        }
    }
}

/// A key of the definition itself, typed keys included.
fn own_key<'a>(field: &'a FieldDefinition, key: &str) -> Option<SchemaNode<'a>> {
    match key {
        "type" => Some(SchemaNode::Type(&field.field_type)),
        "multiple" => field.multiple.map(SchemaNode::Multiple),
        "fields" => field.fields.as_ref().map(SchemaNode::Tree),
        _ => field.attribute(key).map(SchemaNode::Attribute),
    }
}

/// Resolve `path` against a schema tree.
///
/// The first token is looked up directly in `schema`. Each later token is
/// looked up under the current node's `fields`, then under the node itself.
/// Once a token cannot be resolved the walk stops and the last node that was
/// resolved is returned, so `"gallery.caption.whatever"` still yields the
/// `caption` definition. `None` means the first token was not found.
///
/// Array indices are ordinary tokens here and normally stop the walk at the
/// array field; strip them with [`path::strip_indices`] for an
/// index-agnostic lookup.
pub fn field_by_path<'a>(schema: &'a FieldTree, path: &str) -> Option<SchemaNode<'a>> {
    let mut tokens = path::tokens(path);
    let Some(first) = tokens.next() else {
        return Some(SchemaNode::Tree(schema));
    };

    let mut current = SchemaNode::Tree(schema).child(first)?;
    for token in tokens {
        match current.child(token) {
            Some(next) => current = next,
            None => break,
        }
    }
    Some(current)
}

/// Like [`field_by_path`], keeping only results that are field definitions.
pub fn definition_by_path<'a>(schema: &'a FieldTree, path: &str) -> Option<&'a FieldDefinition> {
    field_by_path(schema, path).and_then(SchemaNode::as_field)
}
