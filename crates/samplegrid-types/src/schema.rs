use crate::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;

/// Key of the identifying field every record carries
pub const SAMPLE_ID_KEY: &str = "sample_id";

/// Key of the free-text description shown in a card header
pub const CONTENT_KEY: &str = "content";

/// Fields shown in the compact card preview (rendered in schema order)
pub const PREVIEW_KEYS: [&str; 4] = ["market_sector", "material", "code_color", "dims"];

/// Input kind of a field.
///
/// Only `select` is special; any other declared type (`number`, `date`, ...)
/// is read as free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Select,
}

impl<'de> Deserialize<'de> for FieldKind {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let kind = String::deserialize(deserializer)?;
        Ok(match kind.as_str() {
            "select" => FieldKind::Select,
            _ => FieldKind::Text,
        })
    }
}

/// One entry of the schema registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub key: String,
    pub label: String,
    #[serde(rename = "type", default = "default_kind")]
    pub kind: FieldKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

fn default_kind() -> FieldKind {
    FieldKind::Text
}

impl FieldDefinition {
    pub fn text(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind: FieldKind::Text,
            options: Vec::new(),
        }
    }

    pub fn select<I, S>(key: impl Into<String>, label: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            key: key.into(),
            label: label.into(),
            kind: FieldKind::Select,
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_select(&self) -> bool {
        self.kind == FieldKind::Select
    }

    pub fn is_preview(&self) -> bool {
        PREVIEW_KEYS.contains(&self.key.as_str())
    }

    /// Check a submitted value against this field's options.
    ///
    /// Empty values are always accepted; only `sample_id` is mandatory and that
    /// is enforced at the record level.
    pub fn accepts(&self, value: &str) -> bool {
        match self.kind {
            FieldKind::Text => true,
            FieldKind::Select => value.is_empty() || self.options.iter().any(|o| o == value),
        }
    }
}

/// Ordered, validated list of field definitions.
///
/// Drives both card previews and form generation. Built once at startup and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<FieldDefinition>", into = "Vec<FieldDefinition>")]
pub struct Schema {
    fields: Vec<FieldDefinition>,
}

impl Schema {
    pub fn new(fields: Vec<FieldDefinition>) -> Result<Self> {
        let mut seen = HashSet::new();

        for field in &fields {
            if field.key.trim().is_empty() {
                return Err(Error::InvalidSchema("field key must not be empty".to_string()));
            }
            if !seen.insert(field.key.as_str()) {
                return Err(Error::InvalidSchema(format!(
                    "duplicate field key '{}'",
                    field.key
                )));
            }
            match field.kind {
                FieldKind::Select if field.options.is_empty() => {
                    return Err(Error::InvalidSchema(format!(
                        "select field '{}' declares no options",
                        field.key
                    )));
                }
                FieldKind::Text if !field.options.is_empty() => {
                    return Err(Error::InvalidSchema(format!(
                        "text field '{}' must not declare options",
                        field.key
                    )));
                }
                _ => {}
            }
        }

        if !seen.contains(SAMPLE_ID_KEY) {
            return Err(Error::InvalidSchema(format!(
                "schema must define a '{}' field",
                SAMPLE_ID_KEY
            )));
        }

        Ok(Self { fields })
    }

    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    pub fn field(&self, key: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.key == key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.field(key).is_some()
    }

    /// Fields in the preview set, in registry order
    pub fn preview_fields(&self) -> impl Iterator<Item = &FieldDefinition> {
        self.fields.iter().filter(|f| f.is_preview())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl TryFrom<Vec<FieldDefinition>> for Schema {
    type Error = Error;

    fn try_from(fields: Vec<FieldDefinition>) -> Result<Self> {
        Schema::new(fields)
    }
}

impl From<Schema> for Vec<FieldDefinition> {
    fn from(schema: Schema) -> Self {
        schema.fields
    }
}
