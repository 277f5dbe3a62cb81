pub mod card;
pub mod catalog;
pub mod records;
pub mod system;
