use crate::context::ExecutionContext;
use crate::tui;
use anyhow::{Result, bail};
use is_terminal::IsTerminal;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        bail!("'browse' needs an interactive terminal; use 'samplegrid list' instead");
    }

    let grid = ctx.open_grid()?;
    tui::run(grid)
}
