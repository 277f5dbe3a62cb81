use crate::context::ExecutionContext;
use crate::presentation::presenters::{self, system::InitSummary};
use anyhow::Result;
use samplegrid_runtime::{Config, FileSlotStorage, SampleGrid};

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let config_path = ctx.config_path();
    let config_created = !config_path.exists();
    let config = Config::load_from(&config_path)?;

    if config_created {
        config.save_to(&config_path)?;
        tracing::info!(path = %config_path.display(), "wrote default config");
    }

    let grid = SampleGrid::open_with_config(&config, ctx.data_dir())?;
    let slot_path = FileSlotStorage::new(Config::store_dir(ctx.data_dir()))
        .slot_path(&config.storage.slot);

    let view_model = presenters::present_init_result(InitSummary {
        data_dir: ctx.data_dir().to_path_buf(),
        config_path,
        config_created,
        slot: config.storage.slot.clone(),
        slot_path,
        load_source: grid.load_source(),
        record_count: grid.records().len(),
    });
    ctx.render(view_model)
}
