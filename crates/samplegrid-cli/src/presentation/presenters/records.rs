use crate::args::hints::{cmd, fmt};
use crate::presentation::view_models::{
    AddResultViewModel, CommandResultViewModel, GridViewModel, Guidance, RecordDetailViewModel,
    StatusBadge,
};
use samplegrid_engine::{Card, GridView};

pub fn present_grid(
    view: GridView,
    total: usize,
    query: Option<&str>,
) -> CommandResultViewModel<GridViewModel> {
    let query = query.filter(|q| !q.is_empty());
    let matched = view.cards().len();

    let content = GridViewModel {
        query: query.map(str::to_string),
        total,
        matched,
        view,
    };

    let mut result = CommandResultViewModel::new(content);

    match query {
        Some(q) if matched == 0 => {
            result = result
                .with_badge(StatusBadge::warning(format!("No records match '{}'", q)))
                .with_suggestion(Guidance::new("Show every record").with_command(cmd::LIST));
        }
        Some(q) => {
            result = result.with_badge(StatusBadge::info(format!(
                "{} of {} record(s) match '{}'",
                matched, total, q
            )));
        }
        None if total == 0 => {
            result = result
                .with_badge(StatusBadge::info("Store is empty"))
                .with_suggestion(Guidance::new("Add the first record").with_command(cmd::ADD));
        }
        None => {
            result = result.with_badge(StatusBadge::info(format!("{} record(s)", total)));
        }
    }

    result
}

pub fn present_record_detail(card: Card) -> CommandResultViewModel<RecordDetailViewModel> {
    CommandResultViewModel::new(RecordDetailViewModel { card })
}

pub fn present_add_result(card: Card, total: usize) -> CommandResultViewModel<AddResultViewModel> {
    let label = format!("Added {} ({} records)", card.sample_id, total);
    let show = fmt::show(&card.sample_id);

    CommandResultViewModel::new(AddResultViewModel { card, total })
        .with_badge(StatusBadge::success(label))
        .with_suggestion(Guidance::new("View the full record").with_command(show))
        .with_suggestion(Guidance::new("List records, newest first").with_command(cmd::LIST))
}
