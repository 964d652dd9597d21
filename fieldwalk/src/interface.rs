//! Interface documents: the field schema together with its locales.
//!
//! An interface document is what an editor loads before any data exists. It
//! is stored as JSON, TOML or YAML and looks like:
//!
//! ```yaml
//! locales:
//!   en-US: English (US)
//!   fr-FR: Français
//! global:
//!   copyright: "© Example {{version}}"
//! sections:
//!   home:
//!     type: group
//!     fields:
//!       title: { type: i18n }
//!       gallery:
//!         type: array
//!         fields:
//!           image: { type: image }
//! ```
//!
//! Missing keys are filled from a built-in default structure, a document
//! without locales gets `en-US`, and every field gets a `type`.

use std::{fs, path::Path};

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::{
    defaults,
    error::SchemaError,
    schema::{self, FieldDefinition, FieldTree},
};

const DEFAULT_LOCALE: (&str, &str) = ("en-US", "English (US)");
const VERSION_PLACEHOLDER: &str = "{{version}}";

/// Storage format of an interface document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Toml,
    Yaml,
}

impl DocumentFormat {
    /// Pick the format from a file extension.
    pub fn from_extension(ext: &str) -> Result<Self, SchemaError> {
        match ext {
            "json" => Ok(Self::Json),
            "toml" | "tml" => Ok(Self::Toml),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(SchemaError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Pick the format from a file path's extension.
    pub fn from_path(path: &Path) -> Result<Self, SchemaError> {
        let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("");
        Self::from_extension(ext)
    }

    /// Parse `content` into a raw JSON value. Blank content is an empty
    /// mapping.
    pub fn parse_raw(self, content: &str) -> Result<Value, SchemaError> {
        if content.trim().is_empty() {
            return Ok(Value::Object(Map::new()));
        }
        let value = match self {
            Self::Json => serde_json::from_str(content)?,
            Self::Toml => {
                let v: toml::Value = toml::from_str(content)?;
                serde_json::to_value(v)?
            }
            Self::Yaml => serde_yaml::from_str(content)?,
        };
        Ok(value)
    }
}

/// Settings shared by every section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GlobalSettings {
    /// Footer notice; the first `{{version}}` is replaced on load.
    #[serde(default)]
    pub copyright: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A loaded interface document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct InterfaceDocument {
    /// Locale code to display name, in declaration order.
    #[serde(default)]
    pub locales: IndexMap<String, String>,
    #[serde(default)]
    pub global: GlobalSettings,
    /// Top-level field schema; each section is a field grouping sub-fields.
    #[serde(default)]
    pub sections: FieldTree,
    /// Any other top-level keys, kept as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for InterfaceDocument {
    fn default() -> Self {
        Self {
            locales: IndexMap::from([(DEFAULT_LOCALE.0.to_string(), DEFAULT_LOCALE.1.to_string())]),
            global: GlobalSettings::default(),
            sections: FieldTree::new(),
            extra: Map::new(),
        }
    }
}

impl InterfaceDocument {
    /// Parse a document, merging it over the default structure.
    ///
    /// `version` replaces the first `{{version}}` in `global.copyright`.
    pub fn parse(
        content: &str,
        format: DocumentFormat,
        version: &str,
    ) -> Result<Self, SchemaError> {
        let raw = format.parse_raw(content)?;
        Self::from_raw(raw, version)
    }

    /// Like [`InterfaceDocument::parse`], but falls back to the default
    /// document when the content cannot be used.
    pub fn parse_or_default(content: &str, format: DocumentFormat, version: &str) -> Self {
        match Self::parse(content, format, version) {
            Ok(doc) => doc,
            Err(e) => {
                warn!("interface document unusable, using defaults: {e}");
                Self::default()
            }
        }
    }

    /// Read and parse a document, picking the format from the extension.
    pub fn load(path: impl AsRef<Path>, version: &str) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let format = DocumentFormat::from_path(path)?;
        let content = fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loading interface document {} as {format:?}", path.display());
        Self::parse(&content, format, version)
    }

    /// Build a document from an already-parsed raw value.
    pub fn from_raw(raw: Value, version: &str) -> Result<Self, SchemaError> {
        let raw = match raw {
            Value::Null => Value::Object(Map::new()),
            Value::Object(_) => raw,
            other => {
                return Err(SchemaError::InvalidShape {
                    path: String::new(),
                    expected: "mapping".into(),
                    actual: other.to_string(),
                });
            }
        };

        let mut merged = merge(default_structure(), raw);
        if let Some(sections) = merged.get_mut("sections") {
            *sections = match sections.take() {
                Value::Null => Value::Object(Map::new()),
                raw => schema::normalize(raw),
            };
        }

        let mut doc: InterfaceDocument = serde_json::from_value(merged)?;
        if doc.locales.is_empty() {
            doc.locales
                .insert(DEFAULT_LOCALE.0.to_string(), DEFAULT_LOCALE.1.to_string());
        }
        doc.global.copyright = doc.global.copyright.replacen(VERSION_PLACEHOLDER, version, 1);

        debug!(
            "interface document: {} locales, {} sections",
            doc.locales.len(),
            doc.sections.len()
        );
        Ok(doc)
    }

    /// Locale codes in declaration order.
    pub fn locale_codes(&self) -> Vec<&str> {
        self.locales.keys().map(String::as_str).collect()
    }

    pub fn section(&self, name: &str) -> Option<&FieldDefinition> {
        self.sections.get(name)
    }

    /// Initial data for one section's fields.
    pub fn initialize_section(&self, name: &str) -> Option<Value> {
        let section = self.section(name)?;
        Some(defaults::new_element(section, &self.locale_codes()))
    }

    /// Initial data for every section, keyed by section name.
    pub fn initialize_all(&self) -> Value {
        let locales = self.locale_codes();
        let data: Map<String, Value> = self
            .sections
            .iter()
            .map(|(name, section)| (name.clone(), defaults::new_element(section, &locales)))
            .collect();
        Value::Object(data)
    }

    /// JSON Schema describing the document format.
    pub fn json_schema() -> Result<Value, SchemaError> {
        let schema = schemars::schema_for!(InterfaceDocument);
        Ok(serde_json::to_value(&schema)?)
    }
}

fn default_structure() -> Value {
    json!({
        "locales": {},
        "global": {"copyright": ""},
        "sections": {}
    })
}

/// Deep-merge `overlay` onto `base`: mappings merge key by key, lists are
/// concatenated, anything else in `overlay` wins.
fn merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base), Value::Object(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(existing) => *existing = merge(existing.take(), value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
            Value::Object(base)
        }
        (Value::Array(mut base), Value::Array(overlay)) => {
            base.extend(overlay);
            Value::Array(base)
        }
        (_, overlay) => overlay,
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::schema::FieldKind;

    const YAML_DOC: &str = r#"
locales:
  en-US: English (US)
  fr-FR: Français
global:
  copyright: "© Example {{version}}"
  theme: dark
sections:
  home:
    type: group
    fields:
      title: { type: i18n }
      hero: { label: Hero }
      gallery:
        type: array
        fields:
          image: { type: image }
          caption: { type: "i18n:wysiwyg" }
"#;

    #[test]
    fn test_parse_yaml() {
        let doc = InterfaceDocument::parse(YAML_DOC, DocumentFormat::Yaml, "1.2.3").unwrap();
        assert_eq!(doc.locale_codes(), vec!["en-US", "fr-FR"]);
        assert_eq!(doc.global.copyright, "© Example 1.2.3");
        assert_eq!(doc.global.extra["theme"], "dark");

        let home = doc.section("home").unwrap();
        assert_eq!(home.field("hero").unwrap().field_type.kind, FieldKind::Unknown);
        assert!(home.field("gallery").unwrap().field_type.is_plain_array());
    }

    #[test]
    fn test_default_locale() {
        let doc = InterfaceDocument::parse(r#"{"sections": {}}"#, DocumentFormat::Json, "1").unwrap();
        assert_eq!(doc.locale_codes(), vec!["en-US"]);
        assert_eq!(doc.locales["en-US"], "English (US)");
        assert_eq!(doc.global.copyright, "");
    }

    #[test]
    fn test_blank_content_is_default() {
        let doc = InterfaceDocument::parse("  \n", DocumentFormat::Json, "1").unwrap();
        assert_eq!(doc, InterfaceDocument::default());
    }

    #[test]
    fn test_empty_sections_key() {
        let doc = InterfaceDocument::parse("sections:\n", DocumentFormat::Yaml, "1").unwrap();
        assert!(doc.sections.is_empty());
    }

    #[test]
    fn test_parse_toml() {
        let content = r#"
[locales]
de-DE = "Deutsch"

[sections.about]
type = "group"

[sections.about.fields.body]
type = "markdown"
"#;
        let doc = InterfaceDocument::parse(content, DocumentFormat::Toml, "1").unwrap();
        assert_eq!(doc.locale_codes(), vec!["de-DE"]);
        assert_eq!(
            doc.initialize_section("about"),
            Some(json!({"body": ""}))
        );
    }

    #[test]
    fn test_scalar_document_falls_back() {
        assert!(matches!(
            InterfaceDocument::parse("just a string", DocumentFormat::Yaml, "1"),
            Err(SchemaError::InvalidShape { .. })
        ));
        let doc = InterfaceDocument::parse_or_default("just a string", DocumentFormat::Yaml, "1");
        assert_eq!(doc, InterfaceDocument::default());

        let doc = InterfaceDocument::parse_or_default("{not json", DocumentFormat::Json, "1");
        assert_eq!(doc, InterfaceDocument::default());
    }

    #[test]
    fn test_initialize_all() {
        let doc = InterfaceDocument::parse(YAML_DOC, DocumentFormat::Yaml, "1").unwrap();
        assert_eq!(
            doc.initialize_all(),
            json!({
                "home": {
                    "title": {"en-US": "", "fr-FR": ""},
                    "hero": null,
                    "gallery": []
                }
            })
        );
        assert_eq!(doc.initialize_section("missing"), None);
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(DocumentFormat::from_path(Path::new("a/b.yml")).unwrap(), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path(Path::new("x.toml")).unwrap(), DocumentFormat::Toml);
        assert!(matches!(
            DocumentFormat::from_path(Path::new("x.ini")),
            Err(SchemaError::UnsupportedFormat(ext)) if ext == "ini"
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(YAML_DOC.as_bytes()).unwrap();
        let doc = InterfaceDocument::load(file.path(), "9").unwrap();
        assert_eq!(doc.global.copyright, "© Example 9");

        let err = InterfaceDocument::load("/definitely/missing.json", "9").unwrap_err();
        assert!(matches!(err, SchemaError::Io { .. }));
    }

    #[test]
    fn test_only_first_version_placeholder_replaced() {
        let doc = InterfaceDocument::parse(
            r#"{"global": {"copyright": "v{{version}} ({{version}})"}}"#,
            DocumentFormat::Json,
            "2.0",
        )
        .unwrap();
        assert_eq!(doc.global.copyright, "v2.0 ({{version}})");
    }

    #[test]
    fn test_merge_rules() {
        let merged = merge(
            json!({"a": {"x": 1, "y": 2}, "l": [1], "s": "base"}),
            json!({"a": {"y": 3}, "l": [2], "s": "over"}),
        );
        assert_eq!(merged, json!({"a": {"x": 1, "y": 3}, "l": [1, 2], "s": "over"}));
    }

    #[test]
    fn test_json_schema_mentions_sections() {
        let schema = InterfaceDocument::json_schema().unwrap();
        assert!(schema["properties"]["sections"].is_object());
    }
}
