//! Testing infrastructure for samplegrid integration tests.
//!
//! - `TestWorld`: isolated data directory plus a configured CLI command
//! - `fixtures`: small schema and seed catalogs
//! - `assertions`: checks over the CLI's JSON output and the stored slot

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
