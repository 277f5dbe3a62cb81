use crate::args::OutputFormat;
use crate::presentation::{CommandResultViewModel, ConsoleRenderer, CreateView, Renderer};
use anyhow::Result;
use samplegrid_runtime::{Catalog, Config, SampleGrid};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Resolved global options shared by every handler
pub struct ExecutionContext {
    data_dir: PathBuf,
    pub format: OutputFormat,
}

impl ExecutionContext {
    pub fn new(data_dir: PathBuf, format: OutputFormat) -> Self {
        Self { data_dir, format }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_path(&self) -> PathBuf {
        Config::path_in(&self.data_dir)
    }

    pub fn config(&self) -> Result<Config> {
        Ok(Config::load_from(&self.config_path())?)
    }

    /// Schema and seed only; the record store is not touched
    pub fn catalog(&self) -> Result<Catalog> {
        let config = self.config()?;
        Ok(Catalog::load(&config.catalog, &self.data_dir)?)
    }

    /// Load the record store, seeding it on first use
    pub fn open_grid(&self) -> Result<SampleGrid> {
        Ok(SampleGrid::open(&self.data_dir)?)
    }

    /// Render a view model using the configured format
    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let renderer = ConsoleRenderer::new(self.format == OutputFormat::Json);
        renderer.render(view_model)
    }
}
