use std::fmt;

/// Result type for samplegrid-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Schema definition violates a registry rule
    InvalidSchema(String),

    /// Record has no (or an empty) sample_id
    MissingSampleId,

    /// Record carries a key the schema does not define
    UnknownField(String),

    /// Select field value outside the declared options
    InvalidOption { key: String, value: String },

    /// Form control index past the end of the form
    NoSuchControl(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSchema(msg) => write!(f, "Invalid schema: {}", msg),
            Error::MissingSampleId => write!(f, "Record is missing a sample_id"),
            Error::UnknownField(key) => write!(f, "Unknown field '{}'", key),
            Error::InvalidOption { key, value } => {
                write!(f, "'{}' is not a valid option for field '{}'", value, key)
            }
            Error::NoSuchControl(index) => write!(f, "No form control at position {}", index),
        }
    }
}

impl std::error::Error for Error {}
