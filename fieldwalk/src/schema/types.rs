use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

const LOCALIZED_TAG: &str = "i18n";
const LOCALIZED_PREFIX: &str = "i18n:";

/// Known field type families.
///
/// Tags outside the known set are kept verbatim in [`FieldKind::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Plain single-line text (`text`).
    Text,
    /// Bare localized string (`i18n`).
    I18n,
    /// Rich text (`wysiwyg`).
    Wysiwyg,
    /// Markdown source (`markdown`).
    Markdown,
    /// Date string (`date`).
    Date,
    /// Generic uploaded file (`file`).
    File,
    /// Uploaded image (`image`).
    Image,
    /// Uploaded video (`video`).
    Video,
    /// Dropdown selection (`select`).
    Select,
    /// Checkbox group (`checkbox`).
    Checkbox,
    /// Radio group (`radio`).
    Radio,
    /// Repeating group of sub-fields (`array`).
    Array,
    /// Missing type, filled in during normalization (`unknown`).
    Unknown,
    /// Any other tag.
    Other(String),
}

impl FieldKind {
    /// Parse a bare (non-prefixed) type tag.
    pub fn parse(tag: &str) -> Self {
        match tag {
            "text" => FieldKind::Text,
            "i18n" => FieldKind::I18n,
            "wysiwyg" => FieldKind::Wysiwyg,
            "markdown" => FieldKind::Markdown,
            "date" => FieldKind::Date,
            "file" => FieldKind::File,
            "image" => FieldKind::Image,
            "video" => FieldKind::Video,
            "select" => FieldKind::Select,
            "checkbox" => FieldKind::Checkbox,
            "radio" => FieldKind::Radio,
            "array" => FieldKind::Array,
            "unknown" => FieldKind::Unknown,
            other => FieldKind::Other(other.to_string()),
        }
    }

    /// The bare tag string.
    pub fn as_str(&self) -> &str {
        match self {
            FieldKind::Text => "text",
            FieldKind::I18n => "i18n",
            FieldKind::Wysiwyg => "wysiwyg",
            FieldKind::Markdown => "markdown",
            FieldKind::Date => "date",
            FieldKind::File => "file",
            FieldKind::Image => "image",
            FieldKind::Video => "video",
            FieldKind::Select => "select",
            FieldKind::Checkbox => "checkbox",
            FieldKind::Radio => "radio",
            FieldKind::Array => "array",
            FieldKind::Unknown => "unknown",
            FieldKind::Other(s) => s,
        }
    }

    /// Classify this kind into the shape of its initial value.
    ///
    /// `multiple` only matters for the select/checkbox/radio family.
    pub fn default_shape(&self, multiple: bool) -> DefaultShape {
        match self {
            FieldKind::Array => DefaultShape::Collection,
            FieldKind::Select | FieldKind::Checkbox | FieldKind::Radio if multiple => {
                DefaultShape::Collection
            }
            FieldKind::File | FieldKind::Image | FieldKind::Video => DefaultShape::File,
            FieldKind::I18n | FieldKind::Wysiwyg | FieldKind::Markdown | FieldKind::Date => {
                DefaultShape::Text
            }
            _ => DefaultShape::Opaque,
        }
    }
}

/// A parsed field type tag: a kind plus the `i18n` marker.
///
/// `"i18n:date"` parses to a localized [`FieldKind::Date`], and the bare
/// `"i18n"` tag is a localized [`FieldKind::I18n`]. Printing gives the
/// canonical tag, which is the original one except that `"i18n:i18n"` prints
/// as `"i18n"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct FieldType {
    /// Whether values are kept per locale.
    pub localized: bool,
    /// The bare type family.
    pub kind: FieldKind,
}

impl FieldType {
    pub fn new(kind: FieldKind) -> Self {
        Self {
            localized: false,
            kind,
        }
    }

    pub fn i18n(kind: FieldKind) -> Self {
        Self {
            localized: true,
            kind,
        }
    }

    /// Parse a full type tag, including any `i18n:` prefix.
    pub fn parse(tag: &str) -> Self {
        if tag == LOCALIZED_TAG {
            return Self::i18n(FieldKind::I18n);
        }
        match tag.strip_prefix(LOCALIZED_PREFIX) {
            Some(bare) => Self::i18n(FieldKind::parse(bare)),
            None => Self::new(FieldKind::parse(tag)),
        }
    }

    /// True only for the exact `array` tag; `i18n:array` does not count.
    ///
    /// The walker expands per element only for this tag.
    pub fn is_plain_array(&self) -> bool {
        !self.localized && self.kind == FieldKind::Array
    }
}

impl Default for FieldType {
    fn default() -> Self {
        Self::new(FieldKind::Unknown)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.localized, &self.kind) {
            (true, FieldKind::I18n) => f.write_str(LOCALIZED_TAG),
            (true, kind) => write!(f, "{LOCALIZED_PREFIX}{}", kind.as_str()),
            (false, kind) => f.write_str(kind.as_str()),
        }
    }
}

impl From<String> for FieldType {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<FieldType> for String {
    fn from(value: FieldType) -> Self {
        value.to_string()
    }
}

/// Shape of the value a freshly initialized field starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultShape {
    /// An empty list.
    Collection,
    /// `null` until a file is attached.
    File,
    /// An empty string.
    Text,
    /// `null`.
    Opaque,
}

impl DefaultShape {
    pub fn value(self) -> Value {
        match self {
            DefaultShape::Collection => Value::Array(Vec::new()),
            DefaultShape::Text => Value::String(String::new()),
            DefaultShape::File | DefaultShape::Opaque => Value::Null,
        }
    }
}
