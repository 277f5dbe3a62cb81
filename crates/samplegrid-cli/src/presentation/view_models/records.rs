use samplegrid_engine::{Card, GridView};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct GridViewModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    pub total: usize,
    pub matched: usize,
    #[serde(flatten)]
    pub view: GridView,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecordDetailViewModel {
    pub card: Card,
}

#[derive(Debug, Clone, Serialize)]
pub struct AddResultViewModel {
    pub card: Card,
    pub total: usize,
}
