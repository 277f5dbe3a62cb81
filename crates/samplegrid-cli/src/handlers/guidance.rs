use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::view_models::GuidanceViewModel;
use anyhow::Result;
use samplegrid_runtime::{Config, FileSlotStorage};

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let config_exists = ctx.config_path().exists();
    let slot = ctx
        .config()
        .map(|c| c.storage.slot)
        .unwrap_or_else(|_| samplegrid_runtime::DEFAULT_SLOT.to_string());
    let store_exists = FileSlotStorage::new(Config::store_dir(ctx.data_dir()))
        .slot_path(&slot)
        .exists();

    // Only read an existing store; guidance must not seed one
    let record_count = if store_exists {
        ctx.open_grid().ok().map(|grid| grid.records().len())
    } else {
        None
    };

    let view_model = presenters::present_guidance(GuidanceViewModel {
        data_dir: ctx.data_dir().to_path_buf(),
        config_exists,
        store_exists,
        record_count,
    });
    ctx.render(view_model)
}
