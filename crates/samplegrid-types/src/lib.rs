pub mod collection;
pub mod error;
pub mod record;
pub mod schema;

pub use collection::RecordCollection;
pub use error::{Error, Result};
pub use record::{Record, SampleId};
pub use schema::{
    CONTENT_KEY, FieldDefinition, FieldKind, PREVIEW_KEYS, SAMPLE_ID_KEY, Schema,
};
