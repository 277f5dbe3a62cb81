//! # Presentation Layer
//!
//! User-facing output for the CLI, organised as a small MVVM pipeline.
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json --> stdout
//!  (Controller)    (Converter)        (Data)           (Driver)   ==(Text)==> [ View ] --> stdout
//!                                                                               (Layout)
//! ```
//!
//! ## Rules
//!
//! ### 1. ViewModels hold raw data
//! Counts stay numbers and paths stay paths. Text layout belongs to the views,
//! so `--format json` is a stable API for scripts.
//!
//! ### 2. JSON output is always the full ViewModel
//! Terminal width and colour only affect the text views.
//!
//! ### 3. Presenters are pure
//! They map engine/runtime values into ViewModels and attach the status badge
//! and follow-up suggestions. No IO.
//!
//! The interactive `browse` command draws the same engine projections with
//! ratatui; see `crate::tui`.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{CommandResultViewModel, CreateView, RenderOptions};
