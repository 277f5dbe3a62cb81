use crate::storage::SlotStorage;
use crate::{Error, Result};
use samplegrid_types::{Record, RecordCollection};
use serde::{Deserialize, Serialize};

/// Slot name used when the configuration doesn't override it
pub const DEFAULT_SLOT: &str = "msp_samples";

/// What `load` does when the slot holds something that isn't a record list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedStatePolicy {
    /// Refuse to start; the slot is left untouched
    #[default]
    Fail,
    /// Copy the bad payload to `<slot>.corrupt` and start over from seed data
    Reseed,
}

/// How a `load` obtained its records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    Persisted,
    Seeded,
    Reseeded,
}

/// Owner of the authoritative record collection and its durable slot.
///
/// Single writer: every mutation goes through `insert`, which persists the whole
/// collection before returning.
pub struct RecordStore<S> {
    storage: S,
    slot: String,
    seed: RecordCollection,
    policy: MalformedStatePolicy,
    records: RecordCollection,
    last_load: Option<LoadSource>,
}

impl<S: SlotStorage> RecordStore<S> {
    pub fn new(storage: S, slot: impl Into<String>, seed: RecordCollection) -> Self {
        Self {
            storage,
            slot: slot.into(),
            seed,
            policy: MalformedStatePolicy::default(),
            records: RecordCollection::new(),
            last_load: None,
        }
    }

    pub fn with_policy(mut self, policy: MalformedStatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Read the slot into memory, seeding it on first use.
    ///
    /// An absent slot is filled with a copy of the seed data and written back
    /// immediately, so later loads read the stored copy rather than the seed.
    pub fn load(&mut self) -> Result<&RecordCollection> {
        let source = match self.storage.read(&self.slot)? {
            Some(raw) => match serde_json::from_str::<RecordCollection>(&raw) {
                Ok(records) => {
                    tracing::debug!(slot = %self.slot, count = records.len(), "loaded records");
                    self.records = records;
                    LoadSource::Persisted
                }
                Err(err) => match self.policy {
                    MalformedStatePolicy::Fail => {
                        return Err(Error::MalformedState {
                            slot: self.slot.clone(),
                            message: err.to_string(),
                        });
                    }
                    MalformedStatePolicy::Reseed => {
                        let backup = format!("{}.corrupt", self.slot);
                        self.storage.write(&backup, &raw)?;
                        tracing::warn!(
                            slot = %self.slot,
                            backup = %backup,
                            error = %err,
                            "stored records are malformed, reseeding"
                        );
                        self.seed_slot()?;
                        LoadSource::Reseeded
                    }
                },
            },
            None => {
                self.seed_slot()?;
                LoadSource::Seeded
            }
        };

        self.last_load = Some(source);
        Ok(&self.records)
    }

    fn seed_slot(&mut self) -> Result<()> {
        self.records = self.seed.clone();
        self.save()?;
        tracing::info!(slot = %self.slot, count = self.records.len(), "seeded record store");
        Ok(())
    }

    /// Overwrite the slot with the full in-memory collection
    pub fn save(&mut self) -> Result<()> {
        let payload = serde_json::to_string_pretty(&self.records)?;
        self.storage.write(&self.slot, &payload)
    }

    /// Prepend a record and persist.
    ///
    /// Refuses identifiers already present without touching memory or the slot.
    /// A failed write is rolled back so memory keeps matching the slot.
    pub fn insert(&mut self, record: Record) -> Result<()> {
        let id = record.sample_id().clone();
        if self.records.contains_id(id.as_str()) {
            return Err(Error::DuplicateSampleId(id.to_string()));
        }

        self.records.prepend(record);
        if let Err(err) = self.save() {
            self.records.remove_first();
            return Err(err);
        }

        tracing::info!(slot = %self.slot, sample_id = %id, total = self.records.len(), "record added");
        Ok(())
    }

    pub fn records(&self) -> &RecordCollection {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&Record> {
        self.records.find(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_id(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn slot(&self) -> &str {
        &self.slot
    }

    pub fn last_load(&self) -> Option<LoadSource> {
        self.last_load
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemorySlotStorage;
    use samplegrid_types::SampleId;

    fn record(id: &str, material: &str) -> Record {
        Record::new(SampleId::new(id).unwrap()).with_field("material", material)
    }

    fn seed() -> RecordCollection {
        vec![record("S1", "steel")].into()
    }

    #[test]
    fn test_first_load_seeds_and_persists() -> Result<()> {
        let mut store = RecordStore::new(MemorySlotStorage::new(), DEFAULT_SLOT, seed());

        let loaded = store.load()?.clone();
        assert_eq!(loaded, seed());
        assert_eq!(store.last_load(), Some(LoadSource::Seeded));
        assert_eq!(store.storage().write_count(), 1);
        assert!(store.storage().get(DEFAULT_SLOT).is_some());
        Ok(())
    }

    #[test]
    fn test_reload_reads_stored_copy_not_seed() -> Result<()> {
        let mut store = RecordStore::new(MemorySlotStorage::new(), DEFAULT_SLOT, seed());
        store.load()?;
        store.insert(record("S2", "glass"))?;

        let storage = store.into_storage();
        let mut reopened = RecordStore::new(storage, DEFAULT_SLOT, seed());
        let ids: Vec<String> = reopened.load()?.ids().map(|id| id.to_string()).collect();

        assert_eq!(ids, vec!["S2", "S1"]);
        assert_eq!(reopened.last_load(), Some(LoadSource::Persisted));
        Ok(())
    }

    #[test]
    fn test_duplicate_insert_changes_nothing() -> Result<()> {
        let mut store = RecordStore::new(MemorySlotStorage::new(), DEFAULT_SLOT, seed());
        store.load()?;
        let writes_before = store.storage().write_count();
        let before = store.records().clone();

        let err = store.insert(record("S1", "glass")).unwrap_err();

        assert!(matches!(err, Error::DuplicateSampleId(id) if id == "S1"));
        assert_eq!(store.records(), &before);
        assert_eq!(store.storage().write_count(), writes_before);
        Ok(())
    }

    #[test]
    fn test_malformed_state_fails_by_default() {
        let storage = MemorySlotStorage::new().with_slot(DEFAULT_SLOT, "{not json");
        let mut store = RecordStore::new(storage, DEFAULT_SLOT, seed());

        let err = store.load().unwrap_err();
        assert!(matches!(err, Error::MalformedState { .. }));
        assert_eq!(store.storage().write_count(), 0);
    }

    #[test]
    fn test_malformed_state_reseeds_when_configured() -> Result<()> {
        let storage = MemorySlotStorage::new().with_slot(DEFAULT_SLOT, "{not json");
        let mut store = RecordStore::new(storage, DEFAULT_SLOT, seed())
            .with_policy(MalformedStatePolicy::Reseed);

        assert_eq!(store.load()?, &seed());
        assert_eq!(store.last_load(), Some(LoadSource::Reseeded));
        assert_eq!(store.storage().get("msp_samples.corrupt"), Some("{not json"));
        Ok(())
    }

    #[test]
    fn test_record_without_sample_id_is_malformed() {
        let storage = MemorySlotStorage::new().with_slot(DEFAULT_SLOT, r#"[{"material": "x"}]"#);
        let mut store = RecordStore::new(storage, DEFAULT_SLOT, seed());
        assert!(matches!(store.load(), Err(Error::MalformedState { .. })));
    }

    #[test]
    fn test_save_then_load_round_trips() -> Result<()> {
        let collection: RecordCollection = vec![
            record("A", "steel").with_field("content", "Bracket"),
            record("B", "").with_field("dims", "10x10"),
            record("A", "duplicate from import"),
        ]
        .into();

        let mut store = RecordStore::new(MemorySlotStorage::new(), DEFAULT_SLOT, collection.clone());
        store.load()?;
        store.save()?;

        let mut reopened = RecordStore::new(store.into_storage(), DEFAULT_SLOT, seed());
        assert_eq!(reopened.load()?, &collection);
        Ok(())
    }
}
