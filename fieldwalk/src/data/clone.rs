use serde_json::{Map, Value};

/// Copy a nested value into a fresh tree sharing nothing with the source.
///
/// Lists and mappings are rebuilt element by element and scalars are copied.
/// `serde_json::Value` has no proxy or shared wrappers to unwrap, so the
/// result is always a plain owned tree.
pub fn deep_clone(value: &Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.iter().map(deep_clone).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), deep_clone(v)))
                .collect::<Map<String, Value>>(),
        ),
        scalar => scalar.clone(),
    }
}
