use std::fmt;

use crate::presentation::view_models::{
    CreateView, ExportResultViewModel, GuidanceViewModel, InitResultViewModel, RenderOptions,
    StoreOrigin,
};

impl CreateView for InitResultViewModel {
    fn create_view<'a>(&'a self, _options: RenderOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(InitResultView { data: self })
    }
}

struct InitResultView<'a> {
    data: &'a InitResultViewModel,
}

impl<'a> fmt::Display for InitResultView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config_state = if self.data.config_created {
            "created"
        } else {
            "existing"
        };
        let origin = match self.data.origin {
            StoreOrigin::Persisted => "loaded from slot",
            StoreOrigin::Seeded => "seeded",
            StoreOrigin::Reseeded => "reseeded, bad payload kept as .corrupt",
        };

        writeln!(f, "Data directory: {}", self.data.data_dir.display())?;
        writeln!(
            f,
            "Config:         {} ({})",
            self.data.config_path.display(),
            config_state
        )?;
        writeln!(
            f,
            "Store:          {} [{}]",
            self.data.slot_path.display(),
            self.data.slot
        )?;
        writeln!(f, "Records:        {} ({})", self.data.record_count, origin)?;
        Ok(())
    }
}

impl CreateView for GuidanceViewModel {
    fn create_view<'a>(&'a self, _options: RenderOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(GuidanceView { data: self })
    }
}

struct GuidanceView<'a> {
    data: &'a GuidanceViewModel,
}

impl<'a> fmt::Display for GuidanceView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "samplegrid - material sample records\n")?;
        writeln!(f, "Data directory: {}", self.data.data_dir.display())?;

        if !self.data.store_exists {
            writeln!(f, "No record store yet.")?;
        } else if let Some(count) = self.data.record_count {
            writeln!(f, "{} record(s) stored.", count)?;
        } else {
            writeln!(f, "The record store could not be read.")?;
        }

        Ok(())
    }
}

impl CreateView for ExportResultViewModel {
    fn create_view<'a>(&'a self, _options: RenderOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(ExportResultView { data: self })
    }
}

struct ExportResultView<'a> {
    data: &'a ExportResultViewModel,
}

impl<'a> fmt::Display for ExportResultView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Format:  {}", self.data.format)?;
        writeln!(f, "Columns: {}", self.data.columns.join(", "))?;
        Ok(())
    }
}
