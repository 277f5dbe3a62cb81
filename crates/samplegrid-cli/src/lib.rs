// NOTE: samplegrid Architecture Rationale
//
// Why a single JSON slot (not a database)?
// - The whole collection is small and always rewritten as one unit
// - A flat JSON array stays hand-editable and diffable
// - Trade-off: every insert rewrites the file, acceptable at this scale
//
// Why is uniqueness checked only on insert?
// - Seed and hand-edited data may legitimately carry duplicates
// - Rejecting them at load would lock users out of their own data
// - Trade-off: `show` returns the first match when duplicates exist

mod args;
mod commands;
pub mod context;
mod handlers;
mod logging;
pub mod presentation;
mod tui;

pub use args::{Cli, Commands, ExportFormat, LogLevel, OutputFormat};
pub use commands::run;
