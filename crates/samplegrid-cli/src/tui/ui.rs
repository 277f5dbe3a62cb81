use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Wrap},
};
use samplegrid_engine::{Card, GridView};
use samplegrid_runtime::SlotStorage;

use super::app::{AppState, EntryForm, Mode};
use crate::presentation::views::card::grid_geometry;

const CARD_GAP: u16 = 2;
const MODAL_WIDTH: u16 = 64;

pub(crate) fn draw<S: SlotStorage>(f: &mut Frame, state: &mut AppState<S>) {
    let [search_area, grid_area, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(f.area());

    render_search(f, search_area, state);
    render_grid(f, grid_area, state);
    render_footer(f, footer_area, state);

    state.modal_area = match &state.mode {
        Mode::Entry(entry) => Some(render_entry(f, entry)),
        Mode::Browse => None,
    };
}

fn render_search<S: SlotStorage>(f: &mut Frame, area: Rect, state: &AppState<S>) {
    let focused = !state.is_entry_open();
    let border = if focused { Color::Cyan } else { Color::DarkGray };

    let mut spans = vec![Span::raw(state.grid.query().to_string())];
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(Color::Cyan)));
    }

    let search = Paragraph::new(Line::from(spans)).block(
        Block::bordered()
            .title(" Search ")
            .border_style(Style::default().fg(border)),
    );
    f.render_widget(search, area);
}

fn render_grid<S: SlotStorage>(f: &mut Frame, area: Rect, state: &mut AppState<S>) {
    let cards = match state.grid.grid() {
        GridView::Empty { notice } => {
            let empty = Paragraph::new(notice)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray));
            f.render_widget(empty, area);
            return;
        }
        GridView::Cards { cards } => cards,
    };

    let (card_width, per_row) = grid_geometry(area.width as usize);
    let card_width = (card_width as u16).min(area.width);
    let card_height = cards
        .iter()
        .map(|c| c.rows.len() as u16 + 3)
        .max()
        .unwrap_or(3);

    let total_rows = cards.len().div_ceil(per_row);
    let visible_rows = ((area.height / card_height.max(1)) as usize).max(1);
    state.scroll = state.scroll.min(total_rows.saturating_sub(visible_rows));

    for (row_index, row) in cards
        .chunks(per_row)
        .skip(state.scroll)
        .take(visible_rows)
        .enumerate()
    {
        let y = area.y + row_index as u16 * card_height;
        let height = card_height.min(area.bottom().saturating_sub(y));
        if height == 0 {
            break;
        }

        for (col_index, card) in row.iter().enumerate() {
            let x = area.x + col_index as u16 * (card_width + CARD_GAP);
            let card_area = Rect::new(x, y, card_width, height);
            f.render_widget(card_widget(card), card_area);
        }
    }
}

fn card_widget(card: &Card) -> Paragraph<'_> {
    let mut lines = vec![Line::styled(
        card.content.as_str(),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    for row in &card.rows {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}: ", row.label),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw(row.value.as_str()),
        ]));
    }

    let title = Span::styled(
        format!(" {} ", card.sample_id),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    );
    Paragraph::new(lines).block(Block::bordered().title(title))
}

fn render_footer<S: SlotStorage>(f: &mut Frame, area: Rect, state: &AppState<S>) {
    let counts = format!(
        " {}/{} records ",
        state.grid.visible().len(),
        state.grid.records().len()
    );

    let message = match (&state.mode, &state.status) {
        (Mode::Browse, Some(status)) => {
            Span::styled(status.clone(), Style::default().fg(Color::Green))
        }
        (Mode::Browse, None) => Span::styled(
            "type to search · ↑↓ scroll · Ctrl+N new record · Esc clear/quit",
            Style::default().fg(Color::DarkGray),
        ),
        (Mode::Entry(_), _) => Span::styled(
            "Tab next field · ←→ change option · Enter save · Esc cancel",
            Style::default().fg(Color::DarkGray),
        ),
    };

    let footer = Line::from(vec![
        Span::styled(counts, Style::default().add_modifier(Modifier::REVERSED)),
        Span::raw(" "),
        message,
    ]);
    f.render_widget(Paragraph::new(footer), area);
}

fn render_entry(f: &mut Frame, entry: &EntryForm) -> Rect {
    let controls = entry.draft.controls();
    let area = centered(f.area(), MODAL_WIDTH, controls.len() as u16 + 2);

    let label_width = controls
        .iter()
        .map(|c| c.label.chars().count() + 1)
        .max()
        .unwrap_or(0);

    let lines: Vec<Line> = controls
        .iter()
        .enumerate()
        .map(|(index, control)| {
            let focused = index == entry.focus;
            let value = entry.draft.value_at(index).unwrap_or_default();

            let label = if control.required {
                format!("{}*", control.label)
            } else {
                control.label.clone()
            };
            let shown = if control.is_choice() {
                format!("‹ {} ›", value)
            } else if focused {
                format!("{}▏", value)
            } else {
                value.to_string()
            };

            let style = if focused {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(format!("{:<width$} ", label, width = label_width), style),
                Span::styled(shown, style),
            ])
        })
        .collect();

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines).block(
            Block::bordered()
                .title(" New record ")
                .border_style(Style::default().fg(Color::Cyan)),
        ),
        area,
    );

    if let Some(notice) = &entry.notice {
        let width = (notice.chars().count() as u16 + 4).max(24);
        let notice_area = centered(f.area(), width, 5);
        f.render_widget(Clear, notice_area);
        f.render_widget(
            Paragraph::new(vec![
                Line::from(notice.as_str()),
                Line::from(""),
                Line::styled("press any key", Style::default().fg(Color::DarkGray)),
            ])
            .wrap(Wrap { trim: true })
            .block(
                Block::bordered()
                    .title(" Cannot save ")
                    .border_style(Style::default().fg(Color::Red)),
            ),
            notice_area,
        );
    }

    area
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
