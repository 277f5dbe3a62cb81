use std::fmt;

use crate::presentation::formatters::pad;
use samplegrid_engine::Card;

pub const CARD_WIDTH: usize = 36;
const MIN_CARD_WIDTH: usize = 20;
const GAP: usize = 2;

/// Card width and cards per row for a terminal `total_width` columns wide
pub fn grid_geometry(total_width: usize) -> (usize, usize) {
    let card_width = CARD_WIDTH.min(total_width).max(MIN_CARD_WIDTH);
    let per_row = ((total_width + GAP) / (card_width + GAP)).max(1);
    (card_width, per_row)
}

/// Box-drawn lines for one card, each exactly `width` chars wide
pub fn card_lines(card: &Card, width: usize) -> Vec<String> {
    let width = width.max(MIN_CARD_WIDTH);
    let inner = width - 4;
    let rule = "─".repeat(width - 2);

    let mut lines = vec![
        format!("┌{}┐", rule),
        format!("│ {} │", pad(&card.sample_id, inner)),
        format!("│ {} │", pad(&card.content, inner)),
    ];

    if !card.rows.is_empty() {
        lines.push(format!("├{}┤", rule));

        let label_width = card
            .rows
            .iter()
            .map(|r| r.label.chars().count())
            .max()
            .unwrap_or(0)
            .min(inner / 2);
        let value_width = inner - label_width - 1;

        for row in &card.rows {
            lines.push(format!(
                "│ {} {} │",
                pad(&row.label, label_width),
                pad(&row.value, value_width)
            ));
        }
    }

    lines.push(format!("└{}┘", rule));
    lines
}

pub fn write_card_grid(f: &mut fmt::Formatter, cards: &[Card], total_width: usize) -> fmt::Result {
    let (card_width, per_row) = grid_geometry(total_width);
    let blank = " ".repeat(card_width);
    let gap = " ".repeat(GAP);

    for (i, chunk) in cards.chunks(per_row).enumerate() {
        if i > 0 {
            writeln!(f)?;
        }

        let rendered: Vec<Vec<String>> = chunk.iter().map(|c| card_lines(c, card_width)).collect();
        let height = rendered.iter().map(Vec::len).max().unwrap_or(0);

        for line in 0..height {
            let parts: Vec<&str> = rendered
                .iter()
                .map(|lines| lines.get(line).map(String::as_str).unwrap_or(&blank))
                .collect();
            writeln!(f, "{}", parts.join(&gap).trim_end())?;
        }
    }

    Ok(())
}
