use std::fmt;

use super::card::{card_lines, write_card_grid};
use crate::presentation::view_models::{
    AddResultViewModel, CreateView, GridViewModel, RecordDetailViewModel, RenderOptions,
};
use samplegrid_engine::GridView;

const DETAIL_WIDTH: usize = 60;

impl CreateView for GridViewModel {
    fn create_view<'a>(&'a self, options: RenderOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(CardGridView {
            data: self,
            width: options.width,
        })
    }
}

struct CardGridView<'a> {
    data: &'a GridViewModel,
    width: usize,
}

impl<'a> fmt::Display for CardGridView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.data.view {
            GridView::Empty { notice } => writeln!(f, "{}", notice),
            GridView::Cards { cards } => write_card_grid(f, cards, self.width),
        }
    }
}

impl CreateView for RecordDetailViewModel {
    fn create_view<'a>(&'a self, options: RenderOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(DetailView {
            card: &self.card,
            width: options.width.min(DETAIL_WIDTH),
        })
    }
}

impl CreateView for AddResultViewModel {
    fn create_view<'a>(&'a self, options: RenderOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(DetailView {
            card: &self.card,
            width: options.width.min(DETAIL_WIDTH),
        })
    }
}

struct DetailView<'a> {
    card: &'a samplegrid_engine::Card,
    width: usize,
}

impl<'a> fmt::Display for DetailView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in card_lines(self.card, self.width) {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grid_prints_notice() {
        let vm = GridViewModel {
            query: Some("zzz".to_string()),
            total: 3,
            matched: 0,
            view: GridView::Empty {
                notice: "No records found.".to_string(),
            },
        };

        let text = vm.create_view(RenderOptions::default()).to_string();
        assert_eq!(text, "No records found.\n");
    }
}
