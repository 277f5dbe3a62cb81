use crate::Result;
use crate::catalog::Catalog;
use crate::config::{Config, StorageConfig};
use crate::storage::{FileSlotStorage, SlotStorage};
use crate::store::{LoadSource, RecordStore};
use samplegrid_engine::{
    ControlDescriptor, FormDraft, GridView, filter_records, generate_form, project_grid,
    validate_submission,
};
use samplegrid_types::{Record, RecordCollection, Schema};
use std::path::Path;

/// One open grid: schema, loaded record store and the active search query.
///
/// Everything the UI touches goes through this value; there is no ambient state.
pub struct SampleGrid<S = FileSlotStorage> {
    schema: Schema,
    store: RecordStore<S>,
    query: String,
}

impl SampleGrid<FileSlotStorage> {
    /// Open the grid stored under `data_dir`, reading `config.toml` if present
    pub fn open(data_dir: &Path) -> Result<Self> {
        let config = Config::load_from(&Config::path_in(data_dir))?;
        Self::open_with_config(&config, data_dir)
    }

    pub fn open_with_config(config: &Config, data_dir: &Path) -> Result<Self> {
        let catalog = Catalog::load(&config.catalog, data_dir)?;
        let storage = FileSlotStorage::new(Config::store_dir(data_dir));
        Self::with_storage(catalog, storage, &config.storage)
    }
}

impl<S: SlotStorage> SampleGrid<S> {
    /// Build over an arbitrary slot backend and load (or seed) the records
    pub fn with_storage(catalog: Catalog, storage: S, config: &StorageConfig) -> Result<Self> {
        let Catalog { schema, seed } = catalog;
        let mut store =
            RecordStore::new(storage, config.slot.clone(), seed).with_policy(config.on_malformed);
        store.load()?;

        Ok(Self {
            schema,
            store,
            query: String::new(),
        })
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn records(&self) -> &RecordCollection {
        self.store.records()
    }

    pub fn store(&self) -> &RecordStore<S> {
        &self.store
    }

    pub fn load_source(&self) -> Option<LoadSource> {
        self.store.last_load()
    }

    pub fn get(&self, id: &str) -> Option<&Record> {
        self.store.get(id)
    }

    pub fn controls(&self) -> Vec<ControlDescriptor> {
        generate_form(&self.schema)
    }

    /// Fresh draft with every control at its default
    pub fn form(&self) -> FormDraft {
        FormDraft::new(self.controls())
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Records matching `query`, leaving the active query alone
    pub fn search(&self, query: &str) -> Vec<&Record> {
        filter_records(self.store.records(), query)
    }

    /// Records matching the active query
    pub fn visible(&self) -> Vec<&Record> {
        self.search(&self.query)
    }

    /// Card projection of the records matching the active query
    pub fn grid(&self) -> GridView {
        project_grid(self.visible(), &self.schema)
    }

    /// Validate the draft and commit it as the newest record.
    ///
    /// On success the active query is cleared so the next `grid()` shows the
    /// full collection with the new record first. On failure nothing changes.
    pub fn submit(&mut self, draft: &FormDraft) -> Result<Record> {
        let record = validate_submission(draft, &self.schema, self.store.records())?;
        self.store.insert(record.clone())?;
        self.query.clear();
        Ok(record)
    }
}
