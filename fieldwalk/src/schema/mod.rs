//! Field schema trees.
//!
//! - [`types`] - Type tags and their default-value classification
//! - [`field`] - Field definitions, normalization and loading
//! - [`lookup`] - Path resolution against a schema tree

/// Type tags and default-value classification.
pub mod types;

/// Field definitions and schema normalization.
pub mod field;

/// Path resolution against a schema tree.
pub mod lookup;

pub use field::{FieldDefinition, FieldTree, fields_from_value, normalize};
pub use lookup::{SchemaNode, definition_by_path, field_by_path};
pub use types::{DefaultShape, FieldKind, FieldType};
