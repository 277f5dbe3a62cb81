mod fs;
mod memory;

pub use fs::FileSlotStorage;
pub use memory::MemorySlotStorage;

use crate::{Error, Result};

/// Durable key-value store holding whole-value slots.
///
/// Each write replaces the slot's previous value entirely.
pub trait SlotStorage {
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<S: SlotStorage + ?Sized> SlotStorage for Box<S> {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }
}

/// Slot keys double as file names, so keep them to a safe alphabet
pub fn validate_slot_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));

    if valid {
        Ok(())
    } else {
        Err(Error::InvalidSlotKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_key_alphabet() {
        assert!(validate_slot_key("msp_samples").is_ok());
        assert!(validate_slot_key("msp_samples.corrupt").is_ok());
        assert!(validate_slot_key("").is_err());
        assert!(validate_slot_key("../escape").is_err());
        assert!(validate_slot_key("a/b").is_err());
        assert!(validate_slot_key(".hidden").is_err());
    }
}
