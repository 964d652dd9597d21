//! Operations on data trees (`serde_json::Value`).
//!
//! None of these know about the field schema:
//!
//! - [`access`] - Strict path resolution
//! - [`process`] - Leaf enumeration with parent, key and path
//! - [`diff`] - Deep structural comparison
//! - [`clone`] - Deep copy

/// Strict path resolution against a data tree.
pub mod access;

/// Deep copy of a data tree.
pub mod clone;

/// Deep structural comparison.
pub mod diff;

/// Leaf enumeration over nested mappings.
pub mod process;

pub use access::{value_by_path, value_by_path_mut};
pub use clone::deep_clone;
pub use diff::differs;
pub use process::{process, process_mut};
