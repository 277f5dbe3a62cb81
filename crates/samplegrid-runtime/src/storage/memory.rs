use super::{SlotStorage, validate_slot_key};
use crate::Result;
use std::collections::HashMap;

/// In-process slots; counts writes so callers can assert nothing was persisted
#[derive(Debug, Clone, Default)]
pub struct MemorySlotStorage {
    slots: HashMap<String, String>,
    writes: usize,
}

impl MemorySlotStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a slot without counting it as a write
    pub fn with_slot(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.slots.insert(key.into(), value.into());
        self
    }

    pub fn write_count(&self) -> usize {
        self.writes
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }
}

impl SlotStorage for MemorySlotStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        validate_slot_key(key)?;
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        validate_slot_key(key)?;
        self.slots.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}
