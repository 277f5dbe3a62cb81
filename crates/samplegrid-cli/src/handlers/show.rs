use crate::context::ExecutionContext;
use crate::presentation::presenters;
use anyhow::{Result, anyhow};
use samplegrid_engine::project_detail;

pub fn handle(ctx: &ExecutionContext, sample_id: &str) -> Result<()> {
    let grid = ctx.open_grid()?;
    let record = grid
        .get(sample_id)
        .ok_or_else(|| anyhow!("Sample ID '{}' not found", sample_id))?;

    let card = project_detail(record, grid.schema());
    ctx.render(presenters::present_record_detail(card))
}
