pub mod catalog;
pub mod records;
pub mod system;

pub use catalog::{present_form, present_schema};
pub use records::{present_add_result, present_grid, present_record_detail};
pub use system::{present_export_result, present_guidance, present_init_result};
