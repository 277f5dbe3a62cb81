use crate::context::ExecutionContext;
use crate::presentation::presenters;
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let catalog = ctx.catalog()?;
    ctx.render(presenters::present_schema(&catalog.schema))
}
