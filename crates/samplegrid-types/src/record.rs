use crate::schema::{SAMPLE_ID_KEY, Schema};
use crate::{Error, Result};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Unique identifier of a sample record (never empty)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SampleId(String);

impl SampleId {
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(Error::MissingSampleId);
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SampleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for SampleId {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        SampleId::new(s)
    }
}

impl TryFrom<&str> for SampleId {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        SampleId::new(s)
    }
}

impl From<SampleId> for String {
    fn from(id: SampleId) -> Self {
        id.0
    }
}

impl AsRef<str> for SampleId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A single sample record.
///
/// The identifier is held separately from the open map of remaining fields.
/// On the wire a record is one flat JSON object with `sample_id` alongside the
/// other keys.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "BTreeMap<String, Value>")]
pub struct Record {
    sample_id: SampleId,
    fields: BTreeMap<String, String>,
}

impl Record {
    pub fn new(sample_id: SampleId) -> Self {
        Self {
            sample_id,
            fields: BTreeMap::new(),
        }
    }

    /// Build a record from submitted form values, validated against the schema.
    ///
    /// Every key must be defined by the schema and select values must be one of
    /// the declared options. Empty values are kept as-is; `sample_id` is trimmed
    /// and must not end up empty.
    pub fn from_submission<I, K, V>(schema: &Schema, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut sample_id = None;
        let mut fields = BTreeMap::new();

        for (key, value) in values {
            let key = key.into();
            let value = value.into();

            let Some(field) = schema.field(&key) else {
                return Err(Error::UnknownField(key));
            };

            if key == SAMPLE_ID_KEY {
                sample_id = Some(SampleId::new(value.trim())?);
                continue;
            }

            if !field.accepts(&value) {
                return Err(Error::InvalidOption { key, value });
            }
            fields.insert(key, value);
        }

        let sample_id = sample_id.ok_or(Error::MissingSampleId)?;
        Ok(Self { sample_id, fields })
    }

    /// Builder-style setter for fields other than `sample_id`.
    ///
    /// The identifier is fixed by [`Record::new`]; use [`Record::set`] to replace it.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        debug_assert_ne!(key, SAMPLE_ID_KEY, "use Record::set to replace the identifier");
        if key != SAMPLE_ID_KEY {
            self.fields.insert(key, value.into());
        }
        self
    }

    /// Set a field; setting `sample_id` replaces the identifier and fails when empty
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Result<()> {
        let key = key.into();
        let value = value.into();
        if key == SAMPLE_ID_KEY {
            self.sample_id = SampleId::new(value)?;
            return Ok(());
        }
        self.fields.insert(key, value);
        Ok(())
    }

    pub fn sample_id(&self) -> &SampleId {
        &self.sample_id
    }

    /// Look up a value by key, including `sample_id`
    pub fn get(&self, key: &str) -> Option<&str> {
        if key == SAMPLE_ID_KEY {
            return Some(self.sample_id.as_str());
        }
        self.fields.get(key).map(String::as_str)
    }

    /// Value for `key`, or `None` when the key is absent or the value is empty
    pub fn non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    /// All key/value pairs, `sample_id` first, remaining keys in sorted order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        std::iter::once((SAMPLE_ID_KEY, self.sample_id.as_str())).chain(
            self.fields
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str())),
        )
    }

    /// All values in the same order as [`Record::entries`]
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries().map(|(_, v)| v)
    }

    /// Number of fields, counting `sample_id`
    pub fn field_count(&self) -> usize {
        self.fields.len() + 1
    }
}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.field_count()))?;
        for (key, value) in self.entries() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl TryFrom<BTreeMap<String, Value>> for Record {
    type Error = String;

    fn try_from(raw: BTreeMap<String, Value>) -> std::result::Result<Self, String> {
        let mut sample_id = None;
        let mut fields = BTreeMap::new();

        for (key, value) in raw {
            let text = match value {
                Value::Null => continue,
                Value::String(s) => s,
                Value::Bool(b) => b.to_string(),
                Value::Number(n) => number_text(&n),
                Value::Array(_) | Value::Object(_) => {
                    return Err(format!("field '{}' must be a scalar value", key));
                }
            };

            if key == SAMPLE_ID_KEY {
                sample_id = Some(SampleId::new(text).map_err(|e| e.to_string())?);
            } else {
                fields.insert(key, text);
            }
        }

        let sample_id = sample_id.ok_or_else(|| Error::MissingSampleId.to_string())?;
        Ok(Self { sample_id, fields })
    }
}

/// Whole-valued floats print without a fraction (`12.0` reads as `12`)
fn number_text(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        _ => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldDefinition;

    fn schema() -> Schema {
        Schema::new(vec![
            FieldDefinition::text("sample_id", "Sample ID"),
            FieldDefinition::text("material", "Material"),
            FieldDefinition::select("market_sector", "Sector", ["Automotive", "Medical"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_serializes_as_flat_object() {
        let record = Record::new(SampleId::new("S1").unwrap()).with_field("material", "steel");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, serde_json::json!({"sample_id": "S1", "material": "steel"}));
    }

    #[test]
    fn test_deserialize_coerces_scalars() {
        let json = r#"{"sample_id": 42, "dims": 10.5, "fragile": true, "notes": null}"#;
        let record: Record = serde_json::from_str(json).unwrap();

        assert_eq!(record.sample_id().as_str(), "42");
        assert_eq!(record.get("dims"), Some("10.5"));
        assert_eq!(record.get("fragile"), Some("true"));
        assert_eq!(record.get("notes"), None);
    }

    #[test]
    fn test_whole_floats_read_without_fraction() {
        let json = r#"{"sample_id": 7.0, "thickness": 12.0, "weight": -3.0, "ratio": 0.25}"#;
        let record: Record = serde_json::from_str(json).unwrap();

        assert_eq!(record.sample_id().as_str(), "7");
        assert_eq!(record.get("thickness"), Some("12"));
        assert_eq!(record.get("weight"), Some("-3"));
        assert_eq!(record.get("ratio"), Some("0.25"));
    }

    #[test]
    fn test_set_replaces_identifier_and_rejects_empty() {
        let mut record = Record::new(SampleId::new("S1").unwrap());

        record.set("sample_id", "S2").unwrap();
        assert_eq!(record.sample_id().as_str(), "S2");

        assert_eq!(record.set("sample_id", ""), Err(Error::MissingSampleId));
        assert_eq!(record.sample_id().as_str(), "S2");

        record.set("material", "steel").unwrap();
        assert_eq!(record.get("material"), Some("steel"));
    }

    #[test]
    fn test_deserialize_requires_sample_id() {
        let json = r#"{"material": "steel"}"#;
        assert!(serde_json::from_str::<Record>(json).is_err());
    }

    #[test]
    fn test_deserialize_rejects_nested_values() {
        let json = r#"{"sample_id": "S1", "dims": [1, 2]}"#;
        assert!(serde_json::from_str::<Record>(json).is_err());
    }

    #[test]
    fn test_from_submission_validates_against_schema() {
        let schema = schema();

        let record = Record::from_submission(
            &schema,
            [("sample_id", "  S9 "), ("material", "glass"), ("market_sector", "Medical")],
        )
        .unwrap();
        assert_eq!(record.sample_id().as_str(), "S9");
        assert_eq!(record.get("market_sector"), Some("Medical"));

        let unknown = Record::from_submission(&schema, [("sample_id", "S9"), ("color", "red")]);
        assert_eq!(unknown.unwrap_err(), Error::UnknownField("color".to_string()));

        let bad_option =
            Record::from_submission(&schema, [("sample_id", "S9"), ("market_sector", "Toys")]);
        assert!(matches!(bad_option, Err(Error::InvalidOption { .. })));

        let missing = Record::from_submission(&schema, [("sample_id", "   ")]);
        assert_eq!(missing.unwrap_err(), Error::MissingSampleId);
    }

    #[test]
    fn test_entries_start_with_sample_id() {
        let record = Record::new(SampleId::new("S1").unwrap())
            .with_field("material", "steel")
            .with_field("content", "bracket");
        let keys: Vec<&str> = record.entries().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["sample_id", "content", "material"]);
    }
}
