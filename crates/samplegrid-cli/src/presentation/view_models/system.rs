use serde::Serialize;
use std::path::PathBuf;

/// Where the records shown by `init` came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreOrigin {
    Persisted,
    Seeded,
    Reseeded,
}

#[derive(Debug, Clone, Serialize)]
pub struct InitResultViewModel {
    pub data_dir: PathBuf,
    pub config_path: PathBuf,
    pub config_created: bool,
    pub slot: String,
    pub slot_path: PathBuf,
    pub origin: StoreOrigin,
    pub record_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct GuidanceViewModel {
    pub data_dir: PathBuf,
    pub config_exists: bool,
    pub store_exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_count: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportResultViewModel {
    pub path: PathBuf,
    pub format: String,
    pub record_count: usize,
    pub columns: Vec<String>,
}
