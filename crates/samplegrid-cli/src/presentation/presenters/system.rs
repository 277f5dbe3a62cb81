use crate::args::hints::cmd;
use crate::presentation::view_models::{
    CommandResultViewModel, ExportResultViewModel, Guidance, GuidanceViewModel,
    InitResultViewModel, StatusBadge, StoreOrigin,
};
use samplegrid_runtime::LoadSource;
use std::path::PathBuf;

pub struct InitSummary {
    pub data_dir: PathBuf,
    pub config_path: PathBuf,
    pub config_created: bool,
    pub slot: String,
    pub slot_path: PathBuf,
    pub load_source: Option<LoadSource>,
    pub record_count: usize,
}

pub fn present_init_result(summary: InitSummary) -> CommandResultViewModel<InitResultViewModel> {
    let origin = match summary.load_source {
        Some(LoadSource::Seeded) => StoreOrigin::Seeded,
        Some(LoadSource::Reseeded) => StoreOrigin::Reseeded,
        Some(LoadSource::Persisted) | None => StoreOrigin::Persisted,
    };

    let badge = match origin {
        StoreOrigin::Seeded => {
            StatusBadge::success(format!("Seeded {} record(s)", summary.record_count))
        }
        StoreOrigin::Reseeded => StatusBadge::warning(format!(
            "Stored records were malformed; reseeded {} record(s)",
            summary.record_count
        )),
        StoreOrigin::Persisted => StatusBadge::success(format!(
            "Loaded {} stored record(s)",
            summary.record_count
        )),
    };

    let content = InitResultViewModel {
        data_dir: summary.data_dir,
        config_path: summary.config_path,
        config_created: summary.config_created,
        slot: summary.slot,
        slot_path: summary.slot_path,
        origin,
        record_count: summary.record_count,
    };

    CommandResultViewModel::new(content)
        .with_badge(badge)
        .with_suggestion(Guidance::new("Browse the records").with_command(cmd::LIST))
        .with_suggestion(Guidance::new("Open the interactive grid").with_command(cmd::BROWSE))
}

pub fn present_guidance(content: GuidanceViewModel) -> CommandResultViewModel<GuidanceViewModel> {
    let mut result = CommandResultViewModel::new(content);

    if !result.content.store_exists {
        result = result.with_suggestion(
            Guidance::new("Create the config and seed the store").with_command(cmd::INIT),
        );
    } else {
        result = result
            .with_suggestion(Guidance::new("List records").with_command(cmd::LIST))
            .with_suggestion(Guidance::new("Filter records").with_command(cmd::SEARCH))
            .with_suggestion(Guidance::new("Show one record").with_command(cmd::SHOW))
            .with_suggestion(Guidance::new("Add a record").with_command(cmd::ADD))
            .with_suggestion(Guidance::new("Interactive grid").with_command(cmd::BROWSE))
            .with_suggestion(Guidance::new("Export to CSV").with_command(cmd::EXPORT));
    }

    result
}

pub fn present_export_result(
    content: ExportResultViewModel,
) -> CommandResultViewModel<ExportResultViewModel> {
    let label = format!(
        "Exported {} record(s) to {}",
        content.record_count,
        content.path.display()
    );
    CommandResultViewModel::new(content).with_badge(StatusBadge::success(label))
}
