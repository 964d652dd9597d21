use serde_json::Value;

use crate::path;

/// One access step: index into a list when the token is an integer, key
/// lookup into a mapping otherwise.
///
/// A non-numeric token against a list is a key lookup, which finds nothing.
pub(crate) fn step<'a>(value: &'a Value, token: &str) -> Option<&'a Value> {
    match value {
        Value::Array(items) => token.parse::<usize>().ok().and_then(|i| items.get(i)),
        Value::Object(map) => map.get(token),
        _ => None,
    }
}

fn step_mut<'a>(value: &'a mut Value, token: &str) -> Option<&'a mut Value> {
    match value {
        Value::Array(items) => token.parse::<usize>().ok().and_then(|i| items.get_mut(i)),
        Value::Object(map) => map.get_mut(token),
        _ => None,
    }
}

/// Resolve `path` against a data tree.
///
/// The empty path yields `data` itself. Resolution is strict: the first
/// missing key ends it with `None`, and so does stepping into `null`. A path
/// whose last step lands on `null` yields `Some(&Value::Null)`.
pub fn value_by_path<'a>(data: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = data;
    for token in path::tokens(path) {
        if current.is_null() {
            return None;
        }
        current = step(current, token)?;
    }
    Some(current)
}

/// Mutable counterpart of [`value_by_path`] with identical resolution.
pub fn value_by_path_mut<'a>(data: &'a mut Value, path: &str) -> Option<&'a mut Value> {
    let mut current = data;
    for token in path::tokens(path) {
        if current.is_null() {
            return None;
        }
        current = step_mut(current, token)?;
    }
    Some(current)
}
