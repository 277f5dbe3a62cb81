// Engine - pure grid logic (filtering, card projection, form generation)
// Sits between the record types and the runtime/CLI layers; never touches storage

pub mod filter;
pub mod form;
pub mod grid;
pub mod submission;

pub use filter::{filter_records, record_matches};
pub use form::{ControlDescriptor, ControlKind, FormDraft, generate_form};
pub use grid::{
    CONTENT_PLACEHOLDER, Card, CardRow, EMPTY_NOTICE, GridView, VALUE_PLACEHOLDER, project_card,
    project_detail, project_grid,
};
pub use submission::{SubmissionError, validate_submission};
