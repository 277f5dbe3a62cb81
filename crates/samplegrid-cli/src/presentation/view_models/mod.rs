pub mod catalog;
pub mod common;
pub mod records;
pub mod result;
pub mod system;

pub use catalog::{FormViewModel, SchemaViewModel};
pub use common::{Guidance, StatusBadge, StatusLevel};
pub use records::{AddResultViewModel, GridViewModel, RecordDetailViewModel};
pub use result::{CommandResultViewModel, CreateView, RenderOptions};
pub use system::{
    ExportResultViewModel, GuidanceViewModel, InitResultViewModel, StoreOrigin,
};
