//! # fieldwalk
//!
//! Schema-driven path addressing and traversal for form field trees.
//!
//! A field schema describes editable content: sections holding fields,
//! fields holding nested sub-fields, `array` fields repeating a sub-schema
//! and `i18n` fields keeping one value per locale. This crate pairs such a
//! schema with the data being edited (a `serde_json::Value`).
//!
//! ## Features
//!
//! - Path strings (`gallery[2].caption`) resolved against data or schema
//! - Default data for a schema level, fanned out per locale for `i18n` fields
//! - A walker visiting every `(field, value)` pair, expanding array elements
//! - Leaf enumeration, deep comparison and deep copy of arbitrary data
//! - Interface documents in JSON, TOML or YAML
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldwalk::{defaults, schema, walk};
//! use serde_json::json;
//!
//! let fields = schema::fields_from_value(json!({
//!     "title": {"type": "i18n"},
//!     "gallery": {"type": "array", "fields": {"caption": {"type": "text"}}}
//! }))
//! .unwrap();
//!
//! let data = defaults::initialize(&fields, &["en-US"]);
//! assert_eq!(data, json!({"title": {"en-US": ""}, "gallery": []}));
//!
//! let mut visited = Vec::new();
//! walk::walk(&fields, &data, |field, _value| visited.push(field.field_type.to_string()));
//! assert_eq!(visited, vec!["i18n", "array"]);
//! ```
//!
//! ## Modules
//!
//! - [`path`] - Path string syntax
//! - [`schema`] - Field definitions, normalization and schema lookup
//! - [`data`] - Data lookup, leaf enumeration, comparison and copy
//! - [`defaults`] - Initial data for a schema level
//! - [`walk`] - Schema-driven traversal
//! - [`interface`] - Interface document loading

#[macro_use]
extern crate log;

/// Path string syntax.
pub mod path;

/// Field schema trees and lookup.
pub mod schema;

/// Schema-unaware operations on data trees.
pub mod data;

pub mod defaults;

pub mod walk;

/// Interface documents (locales plus sections).
pub mod interface;

mod error;

pub use error::SchemaError;
pub use interface::{DocumentFormat, InterfaceDocument};
pub use serde_json::Value;
