use crate::context::ExecutionContext;
use crate::presentation::presenters;
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext, query: Option<&str>) -> Result<()> {
    let mut grid = ctx.open_grid()?;
    if let Some(query) = query {
        grid.set_query(query);
    }

    let view = grid.grid();
    let view_model = presenters::present_grid(view, grid.records().len(), query);
    ctx.render(view_model)
}
