use crate::context::ExecutionContext;
use crate::presentation::presenters;
use anyhow::{Result, bail};
use samplegrid_engine::project_detail;
use samplegrid_types::SAMPLE_ID_KEY;

/// Fill the generated form from the command line and submit it.
///
/// Fields not given keep their form defaults, so select fields get their
/// first option just as in the interactive form.
pub fn handle(ctx: &ExecutionContext, sample_id: String, set: Vec<(String, String)>) -> Result<()> {
    if let Some((key, _)) = set.iter().find(|(key, _)| key == SAMPLE_ID_KEY) {
        bail!(
            "'{}' is given as the positional SAMPLE_ID, not with --set",
            key
        );
    }

    let mut grid = ctx.open_grid()?;

    let mut draft = grid.form();
    draft.set(SAMPLE_ID_KEY, sample_id)?;
    for (key, value) in set {
        draft.set(&key, value)?;
    }

    let record = grid.submit(&draft)?;

    let card = project_detail(&record, grid.schema());
    ctx.render(presenters::present_add_result(card, grid.records().len()))
}
