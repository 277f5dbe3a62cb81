use crate::form::FormDraft;
use samplegrid_types::{Record, Schema};
use std::fmt;

/// Why a form submission was refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// `sample_id` left blank
    MissingSampleId,

    /// Another record already uses this `sample_id`
    DuplicateSampleId(String),

    /// Values don't fit the schema
    InvalidRecord(samplegrid_types::Error),
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionError::MissingSampleId => write!(f, "Sample ID is required"),
            SubmissionError::DuplicateSampleId(id) => {
                write!(f, "Sample ID '{}' already exists", id)
            }
            SubmissionError::InvalidRecord(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for SubmissionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SubmissionError::InvalidRecord(err) => Some(err),
            _ => None,
        }
    }
}

impl From<samplegrid_types::Error> for SubmissionError {
    fn from(err: samplegrid_types::Error) -> Self {
        match err {
            samplegrid_types::Error::MissingSampleId => SubmissionError::MissingSampleId,
            other => SubmissionError::InvalidRecord(other),
        }
    }
}

/// Turn the draft into a record ready for insertion.
///
/// Rejects blank or already-used identifiers. Nothing is mutated; the caller
/// commits the returned record.
pub fn validate_submission<'a, I>(
    draft: &FormDraft,
    schema: &Schema,
    existing: I,
) -> Result<Record, SubmissionError>
where
    I: IntoIterator<Item = &'a Record>,
{
    let record = Record::from_submission(schema, draft.values())?;

    let id = record.sample_id();
    if existing.into_iter().any(|r| r.sample_id() == id) {
        return Err(SubmissionError::DuplicateSampleId(id.to_string()));
    }

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use samplegrid_types::{FieldDefinition, RecordCollection, SampleId};

    fn schema() -> Schema {
        Schema::new(vec![
            FieldDefinition::text("sample_id", "Sample ID"),
            FieldDefinition::text("material", "Material"),
        ])
        .unwrap()
    }

    fn existing() -> RecordCollection {
        vec![Record::new(SampleId::new("S1").unwrap()).with_field("material", "steel")].into()
    }

    #[test]
    fn test_accepts_new_identifier() {
        let mut draft = FormDraft::from_schema(&schema());
        draft.set("sample_id", "S2").unwrap();
        draft.set("material", "glass").unwrap();

        let record = validate_submission(&draft, &schema(), &existing()).unwrap();
        assert_eq!(record.sample_id().as_str(), "S2");
        assert_eq!(record.get("material"), Some("glass"));
    }

    #[test]
    fn test_rejects_duplicate_identifier() {
        let mut draft = FormDraft::from_schema(&schema());
        draft.set("sample_id", "S1").unwrap();

        let err = validate_submission(&draft, &schema(), &existing()).unwrap_err();
        assert_eq!(err, SubmissionError::DuplicateSampleId("S1".to_string()));
        assert_eq!(err.to_string(), "Sample ID 'S1' already exists");
    }

    #[test]
    fn test_rejects_blank_identifier() {
        let draft = FormDraft::from_schema(&schema());
        let err = validate_submission(&draft, &schema(), &existing()).unwrap_err();
        assert_eq!(err, SubmissionError::MissingSampleId);
    }

    #[test]
    fn test_identifier_is_trimmed_before_duplicate_check() {
        let mut draft = FormDraft::from_schema(&schema());
        draft.set("sample_id", " S1 ").unwrap();
        let err = validate_submission(&draft, &schema(), &existing()).unwrap_err();
        assert!(matches!(err, SubmissionError::DuplicateSampleId(_)));
    }
}
