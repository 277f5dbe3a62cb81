pub mod add;
pub mod browse;
pub mod export;
pub mod form;
pub mod guidance;
pub mod init;
pub mod list;
pub mod schema;
pub mod show;
