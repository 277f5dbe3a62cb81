//! Runtime layer: owns the record store, its durable slot and the workspace
//! configuration. The CLI talks to [`SampleGrid`]; tests can swap in
//! [`storage::MemorySlotStorage`].

pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod storage;
pub mod store;

pub use catalog::Catalog;
pub use client::SampleGrid;
pub use config::{CatalogConfig, Config, StorageConfig, expand_tilde, resolve_workspace_path};
pub use error::{Error, Result};
pub use storage::{FileSlotStorage, MemorySlotStorage, SlotStorage};
pub use store::{DEFAULT_SLOT, LoadSource, MalformedStatePolicy, RecordStore};
