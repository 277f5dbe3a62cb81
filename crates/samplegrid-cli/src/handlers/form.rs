use crate::context::ExecutionContext;
use crate::presentation::presenters;
use anyhow::Result;
use samplegrid_engine::generate_form;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let catalog = ctx.catalog()?;
    ctx.render(presenters::present_form(generate_form(&catalog.schema)))
}
