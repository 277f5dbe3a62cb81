use super::{SlotStorage, validate_slot_key};
use crate::Result;
use std::path::{Path, PathBuf};

/// Directory-backed slots: slot `k` lives in `<root>/k.json`
#[derive(Debug, Clone)]
pub struct FileSlotStorage {
    root: PathBuf,
}

impl FileSlotStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl SlotStorage for FileSlotStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        validate_slot_key(key)?;

        match std::fs::read_to_string(self.slot_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        validate_slot_key(key)?;
        std::fs::create_dir_all(&self.root)?;

        // Write beside the target, then rename over it
        let target = self.slot_path(key);
        let tmp = self.root.join(format!(".{}.json.tmp", key));
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, &target)?;

        tracing::debug!(slot = key, path = %target.display(), bytes = value.len(), "slot written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_slot_reads_none() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let storage = FileSlotStorage::new(temp_dir.path().join("store"));
        assert_eq!(storage.read("msp_samples")?, None);
        Ok(())
    }

    #[test]
    fn test_write_creates_directory_and_replaces() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let mut storage = FileSlotStorage::new(temp_dir.path().join("store"));

        storage.write("msp_samples", "[1]")?;
        storage.write("msp_samples", "[2]")?;

        assert_eq!(storage.read("msp_samples")?.as_deref(), Some("[2]"));
        assert!(storage.slot_path("msp_samples").exists());
        assert!(!temp_dir.path().join("store/.msp_samples.json.tmp").exists());
        Ok(())
    }

    #[test]
    fn test_rejects_path_like_keys() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let mut storage = FileSlotStorage::new(temp_dir.path());
        assert!(storage.write("../outside", "x").is_err());
        assert!(storage.read("a/b").is_err());
        Ok(())
    }
}
