//! Path strings used to address both schema trees and data trees.
//!
//! A path is a flat string: keys are separated by `.` and array elements are
//! addressed with `[n]`, e.g. `gallery[2].caption`. There is no escaping, so a
//! key that itself contains `.`, `[` or `]` cannot be addressed.

use std::sync::LazyLock;

use regex::Regex;

static INDEX_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\d+\]").expect("index pattern is a valid regex"));

/// Split a path into its key tokens.
///
/// Splits on `.`, `[` and `]` and drops empty tokens, so `"a[0].b"` yields
/// `["a", "0", "b"]`. Tokens stay untyped; whether `"0"` is an index is up to
/// the accessor consuming it.
pub fn tokens(path: &str) -> impl Iterator<Item = &str> + '_ {
    path.split(['.', '[', ']']).filter(|s| !s.is_empty())
}

/// Append a key to a parent path.
pub fn join(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

/// Append an array index to a parent path.
pub fn index(parent: &str, idx: usize) -> String {
    format!("{parent}[{idx}]")
}

/// Remove every `[n]` segment, giving the index-agnostic schema path.
pub fn strip_indices(path: &str) -> String {
    INDEX_SUFFIX.replace_all(path, "").into_owned()
}
