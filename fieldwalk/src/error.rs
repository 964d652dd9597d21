use std::path::PathBuf;

/// Errors raised while loading schemas and interface documents.
///
/// Path resolution and traversal never fail; they report missing data as
/// `None` instead.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported document extension: {0:?}")]
    UnsupportedFormat(String),

    #[error("unexpected shape at {path:?}: expected {expected}, got {actual}")]
    InvalidShape {
        path: String,
        expected: String,
        actual: String,
    },
}
