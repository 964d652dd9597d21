use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{error::SchemaError, schema::types::FieldType};

/// Ordered mapping from field key to its definition.
///
/// Iteration follows declaration order, which is the order the walker visits
/// fields in.
pub type FieldTree = IndexMap<String, FieldDefinition>;

/// One named node of the field schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FieldDefinition {
    /// Type tag, `unknown` when the source omits it.
    #[serde(rename = "type", default)]
    #[schemars(with = "String")]
    pub field_type: FieldType,
    /// Whether a select/checkbox/radio field holds a list of choices.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiple: Option<bool>,
    /// Nested sub-fields; for `array` fields this is the shape of one element.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<FieldTree>,
    /// Every other attribute (label, description, options, ...).
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl FieldDefinition {
    pub fn new(field_type: FieldType) -> Self {
        Self {
            field_type,
            ..Default::default()
        }
    }

    /// Builder-style helper to attach nested fields.
    pub fn with_fields(mut self, fields: FieldTree) -> Self {
        self.fields = Some(fields);
        self
    }

    pub fn is_multiple(&self) -> bool {
        self.multiple.unwrap_or(false)
    }

    /// Look up a nested field by key.
    pub fn field(&self, key: &str) -> Option<&FieldDefinition> {
        self.fields.as_ref().and_then(|f| f.get(key))
    }

    /// Look up an extra attribute by name.
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Initial value for this field, ignoring locales.
    pub fn default_value(&self) -> Value {
        self.field_type
            .kind
            .default_shape(self.is_multiple())
            .value()
    }
}

/// Fill in missing `type` tags across a raw schema mapping.
///
/// Every field reachable through `fields` gets `"type": "unknown"` when the
/// tag is missing or `null`, and `null` field entries are dropped. Anything
/// that is not a mapping is returned untouched.
pub fn normalize(raw: Value) -> Value {
    match raw {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter_map(|(key, field)| normalize_field(field).map(|f| (key, f)))
                .collect(),
        ),
        other => other,
    }
}

fn normalize_field(field: Value) -> Option<Value> {
    match field {
        Value::Null => None,
        Value::Object(mut map) => {
            if map.get("type").is_none_or(Value::is_null) {
                map.insert("type".into(), Value::String("unknown".into()));
            }
            if let Some(fields) = map.get_mut("fields") {
                *fields = normalize(fields.take());
            }
            Some(Value::Object(map))
        }
        other => Some(other),
    }
}

/// Normalize a raw schema mapping and convert it into a [`FieldTree`].
pub fn fields_from_value(raw: Value) -> Result<FieldTree, SchemaError> {
    if !raw.is_object() {
        return Err(SchemaError::InvalidShape {
            path: String::new(),
            expected: "mapping of fields".into(),
            actual: raw.to_string(),
        });
    }
    Ok(serde_json::from_value(normalize(raw))?)
}
