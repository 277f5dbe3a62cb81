//! TestWorld pattern for declarative integration test setup.
//!
//! Each world owns a temporary data directory, so tests never see the
//! user's real records and can run in parallel.

use anyhow::Result;
use assert_cmd::Command;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use samplegrid_testing::TestWorld;
///
/// let world = TestWorld::new().with_fixture_catalog();
///
/// let result = world.run(&["list", "--format", "json"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".samplegrid");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            env_vars: HashMap::new(),
        }
    }

    /// Get the data directory path (.samplegrid).
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Get the temp directory root.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.toml")
    }

    /// File backing the default `msp_samples` slot
    pub fn slot_path(&self) -> PathBuf {
        self.slot_path_for("msp_samples")
    }

    pub fn slot_path_for(&self, slot: &str) -> PathBuf {
        self.data_dir.join("store").join(format!("{}.json", slot))
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Write `config.toml` verbatim.
    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(self.config_path(), toml).expect("Failed to write config");
        self
    }

    /// Write a file relative to the data directory.
    pub fn with_file(self, name: &str, content: &str) -> Self {
        std::fs::write(self.data_dir.join(name), content).expect("Failed to write file");
        self
    }

    /// Replace the built-in catalog with the one-record fixture catalog.
    pub fn with_fixture_catalog(self) -> Self {
        self.with_file("schema.json", fixtures::SCHEMA_JSON)
            .with_file("seed.json", fixtures::SEED_JSON)
            .with_config(fixtures::CATALOG_CONFIG_TOML)
    }

    /// Put raw content in the default slot, as if written by an earlier run.
    pub fn with_slot(self, content: &str) -> Self {
        let path = self.slot_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create store dir");
        }
        std::fs::write(path, content).expect("Failed to write slot");
        self
    }

    /// Raw text of the default slot.
    pub fn read_slot(&self) -> Result<String> {
        Ok(std::fs::read_to_string(self.slot_path())?)
    }

    /// Default slot parsed as JSON.
    pub fn slot_json(&self) -> Result<Value> {
        Ok(serde_json::from_str(&self.read_slot()?)?)
    }

    /// Configure a CLI command with this test environment's settings.
    ///
    /// The caller must provide the base command (e.g., from `cargo_bin_cmd!("samplegrid")`).
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir").arg(self.data_dir());

        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("SAMPLEGRID_PATH");
        cmd.env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute a command using the project's binary and return the result.
    ///
    /// # Note
    /// This method uses `Command::cargo_bin()` which requires the binary to be
    /// built; cargo test does that for the CLI crate's integration tests.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("samplegrid")
            .map_err(|e| anyhow::anyhow!("Failed to find samplegrid binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    /// Run with `--format json` and parse stdout.
    pub fn run_json(&self, args: &[&str]) -> Result<Value> {
        let mut full: Vec<&str> = args.to_vec();
        full.extend(["--format", "json"]);

        let result = self.run(&full)?;
        if !result.success() {
            anyhow::bail!("{:?} failed: {}", args, result.stderr);
        }
        result.json()
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
