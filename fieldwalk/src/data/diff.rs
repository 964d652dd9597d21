use std::{borrow::Cow, ptr};

use serde_json::Value;

/// Deep structural comparison of two values.
///
/// Returns `false` when `a` and `b` are the same reference or have the same
/// structure and contents. Numbers compare by numeric value, so `1` and `1.0`
/// are not different; other scalars compare by value. Lists are compared as
/// mappings from index to element, so a list and a mapping keyed `"0"`,
/// `"1"`, ... with equal entries are not different.
///
/// With `keys` set, only those keys are compared at the top level; nested
/// levels always compare every key. Inputs must be acyclic, which
/// `serde_json::Value` guarantees.
pub fn differs(a: &Value, b: &Value, keys: Option<&[&str]>) -> bool {
    if ptr::eq(a, b) {
        return false;
    }
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => return x.as_f64() != y.as_f64(),
        _ if !is_structured(a) || !is_structured(b) => return a != b,
        _ => {}
    }

    let retained = |key: &str| keys.is_none_or(|k| k.contains(&key));
    let left = entries(a).filter(|(k, _)| retained(k)).count();
    let right = entries(b).filter(|(k, _)| retained(k)).count();
    if left != right {
        return true;
    }

    entries(a)
        .filter(|(k, _)| retained(k))
        .any(|(key, v1)| match entry(b, &key) {
            Some(v2) => differs(v1, v2, None),
            None => true,
        })
}

fn is_structured(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

fn entries(value: &Value) -> Box<dyn Iterator<Item = (Cow<'_, str>, &Value)> + '_> {
    match value {
        Value::Object(map) => Box::new(map.iter().map(|(k, v)| (Cow::Borrowed(k.as_str()), v))),
        Value::Array(items) => Box::new(
            items
                .iter()
                .enumerate()
                .map(|(i, v)| (Cow::Owned(i.to_string()), v)),
        ),
        _ => Box::new(std::iter::empty()),
    }
}

/// The entry of a mapping or list under `key`. List keys must be canonical
/// indices, so `"01"` does not reach element 1.
fn entry<'v>(value: &'v Value, key: &str) -> Option<&'v Value> {
    match value {
        Value::Object(map) => map.get(key),
        Value::Array(items) => key
            .parse::<usize>()
            .ok()
            .filter(|idx| idx.to_string() == key)
            .and_then(|idx| items.get(idx)),
        _ => None,
    }
}
