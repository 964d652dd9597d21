use serde_json::{Map, Value};

use crate::path;

/// Call `callback(parent, key, path)` for every leaf of a nested mapping.
///
/// Only mappings are descended into. Lists, scalars and `null` are leaves, so
/// a list of objects is reported once as a whole, unlike the schema walker
/// which expands array elements. Empty mappings report nothing and a
/// non-mapping root has no parent, so it reports nothing either. A leaf
/// stored under the empty key `""` is not reported; a mapping under it is
/// still descended into.
pub fn process<F>(value: &Value, mut callback: F)
where
    F: FnMut(&Map<String, Value>, &str, &str),
{
    if let Value::Object(map) = value {
        process_map(map, "", &mut callback);
    }
}

fn process_map<F>(map: &Map<String, Value>, prefix: &str, callback: &mut F)
where
    F: FnMut(&Map<String, Value>, &str, &str),
{
    for (key, child) in map {
        let child_path = path::join(prefix, key);
        match child {
            Value::Object(inner) => process_map(inner, &child_path, callback),
            _ if key.is_empty() => {}
            _ => callback(map, key, &child_path),
        }
    }
}

/// [`process`] with mutable access to each leaf's parent mapping.
///
/// Keys are snapshotted per mapping before visiting; a key the callback
/// removes before it is reached is skipped.
pub fn process_mut<F>(value: &mut Value, mut callback: F)
where
    F: FnMut(&mut Map<String, Value>, &str, &str),
{
    if let Value::Object(map) = value {
        process_map_mut(map, "", &mut callback);
    }
}

fn process_map_mut<F>(map: &mut Map<String, Value>, prefix: &str, callback: &mut F)
where
    F: FnMut(&mut Map<String, Value>, &str, &str),
{
    let keys: Vec<String> = map.keys().cloned().collect();
    for key in keys {
        let child_path = path::join(prefix, &key);
        let descend = match map.get(&key) {
            None => continue,
            Some(child) => child.is_object(),
        };
        if !descend {
            if !key.is_empty() {
                callback(map, &key, &child_path);
            }
        } else if let Some(Value::Object(inner)) = map.get_mut(&key) {
            process_map_mut(inner, &child_path, callback);
        }
    }
}
