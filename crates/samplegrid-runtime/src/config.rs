use crate::store::{DEFAULT_SLOT, MalformedStatePolicy};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolve the workspace data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. SAMPLEGRID_PATH environment variable (with tilde expansion)
/// 3. System data directory (recommended default)
/// 4. ~/.samplegrid (fallback for systems without standard data directory)
pub fn resolve_workspace_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    // Priority 1: Explicit path
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    // Priority 2: SAMPLEGRID_PATH environment variable
    if let Ok(env_path) = std::env::var("SAMPLEGRID_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    // Priority 3: System data directory
    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("samplegrid"));
    }

    // Priority 4: ~/.samplegrid
    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".samplegrid"));
    }

    Err(Error::Config(
        "Could not determine workspace path: no HOME directory or system data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_slot")]
    pub slot: String,
    #[serde(default)]
    pub on_malformed: MalformedStatePolicy,
}

fn default_slot() -> String {
    DEFAULT_SLOT.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            slot: default_slot(),
            on_malformed: MalformedStatePolicy::default(),
        }
    }
}

/// Optional replacements for the built-in schema and seed data.
/// Relative paths are resolved against the data directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join("config.toml")
    }

    pub fn store_dir(data_dir: &Path) -> PathBuf {
        data_dir.join("store")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.storage.slot, "msp_samples");
        assert_eq!(config.storage.on_malformed, MalformedStatePolicy::Fail);
        assert!(config.catalog.schema.is_none());
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.storage.on_malformed = MalformedStatePolicy::Reseed;
        config.catalog.seed = Some(PathBuf::from("seed.json"));

        config.save_to(&config_path)?;
        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);

        Ok(())
    }

    #[test]
    fn test_partial_config_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[storage]\non_malformed = \"reseed\"\n")?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.storage.slot, "msp_samples");
        assert_eq!(config.storage.on_malformed, MalformedStatePolicy::Reseed);
        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert_eq!(config, Config::default());

        Ok(())
    }

    #[test]
    fn test_explicit_path_wins() -> Result<()> {
        let path = resolve_workspace_path(Some("/tmp/samplegrid-data"))?;
        assert_eq!(path, PathBuf::from("/tmp/samplegrid-data"));
        Ok(())
    }
}
