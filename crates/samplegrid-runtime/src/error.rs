use samplegrid_engine::SubmissionError;
use std::fmt;

/// Result type for samplegrid-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// JSON (de)serialization failed
    Json(serde_json::Error),

    /// config.toml could not be parsed
    TomlDe(toml::de::Error),

    /// config.toml could not be written
    TomlSer(toml::ser::Error),

    /// Configuration error
    Config(String),

    /// Schema or seed data could not be loaded
    Catalog(String),

    /// Persisted slot holds data that is not a record collection
    MalformedState { slot: String, message: String },

    /// Insert refused because the identifier is taken
    DuplicateSampleId(String),

    /// Slot key contains characters outside [A-Za-z0-9_.-]
    InvalidSlotKey(String),

    /// Form submission refused
    Submission(SubmissionError),

    /// Record/schema type error
    Types(samplegrid_types::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Json(err) => write!(f, "JSON error: {}", err),
            Error::TomlDe(err) => write!(f, "Failed to parse config: {}", err),
            Error::TomlSer(err) => write!(f, "Failed to write config: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Catalog(msg) => write!(f, "Catalog error: {}", msg),
            Error::MalformedState { slot, message } => write!(
                f,
                "Stored records in slot '{}' are malformed ({}). Fix or remove the slot, or set on_malformed = \"reseed\" in config.toml",
                slot, message
            ),
            Error::DuplicateSampleId(id) => write!(f, "Sample ID '{}' already exists", id),
            Error::InvalidSlotKey(key) => write!(f, "Invalid storage slot key '{}'", key),
            Error::Submission(err) => write!(f, "{}", err),
            Error::Types(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::TomlDe(err) => Some(err),
            Error::TomlSer(err) => Some(err),
            Error::Submission(err) => Some(err),
            Error::Types(err) => Some(err),
            Error::Config(_)
            | Error::Catalog(_)
            | Error::MalformedState { .. }
            | Error::DuplicateSampleId(_)
            | Error::InvalidSlotKey(_) => None,
        }
    }
}

impl Error {
    /// True when the error is a refused duplicate, whichever layer caught it
    pub fn is_duplicate(&self) -> bool {
        matches!(
            self,
            Error::DuplicateSampleId(_) | Error::Submission(SubmissionError::DuplicateSampleId(_))
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::TomlDe(err)
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::TomlSer(err)
    }
}

impl From<SubmissionError> for Error {
    fn from(err: SubmissionError) -> Self {
        Error::Submission(err)
    }
}

impl From<samplegrid_types::Error> for Error {
    fn from(err: samplegrid_types::Error) -> Self {
        Error::Types(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_state_message_suggests_reseed() {
        let err = Error::MalformedState {
            slot: "msp_samples".to_string(),
            message: "expected value at line 1 column 1".to_string(),
        };
        let msg = err.to_string();

        assert!(msg.contains("msp_samples"));
        assert!(msg.contains("on_malformed = \"reseed\""));
    }

    #[test]
    fn test_duplicate_detection_across_layers() {
        assert!(Error::DuplicateSampleId("S1".to_string()).is_duplicate());
        assert!(
            Error::Submission(SubmissionError::DuplicateSampleId("S1".to_string())).is_duplicate()
        );
        assert!(!Error::Submission(SubmissionError::MissingSampleId).is_duplicate());
    }
}
