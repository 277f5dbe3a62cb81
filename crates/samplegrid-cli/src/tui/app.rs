use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use samplegrid_engine::FormDraft;
use samplegrid_runtime::{SampleGrid, SlotStorage};

/// The entry modal: a draft of the generated form plus which control has focus
pub(crate) struct EntryForm {
    pub draft: FormDraft,
    pub focus: usize,
    /// Blocking error shown over the form; the next key or click dismisses it
    pub notice: Option<String>,
}

pub(crate) enum EntryAction {
    Stay,
    Cancel,
    Submit,
}

impl EntryForm {
    fn new(draft: FormDraft) -> Self {
        Self {
            draft,
            focus: 0,
            notice: None,
        }
    }

    fn focused_is_choice(&self) -> bool {
        self.draft
            .controls()
            .get(self.focus)
            .is_some_and(|c| c.is_choice())
    }

    fn move_focus(&mut self, forward: bool) {
        let len = self.draft.controls().len();
        if len == 0 {
            return;
        }
        self.focus = if forward {
            (self.focus + 1) % len
        } else {
            (self.focus + len - 1) % len
        };
    }

    fn edit_text(&mut self, edit: impl FnOnce(&mut String)) {
        let mut value = self
            .draft
            .value_at(self.focus)
            .unwrap_or_default()
            .to_string();
        edit(&mut value);
        if let Err(err) = self.draft.set_at(self.focus, value) {
            self.notice = Some(err.to_string());
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> EntryAction {
        if self.notice.take().is_some() {
            return EntryAction::Stay;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let choice = self.focused_is_choice();

        match key.code {
            KeyCode::Esc => return EntryAction::Cancel,
            KeyCode::Enter => return EntryAction::Submit,
            KeyCode::Tab | KeyCode::Down => self.move_focus(true),
            KeyCode::BackTab | KeyCode::Up => self.move_focus(false),
            KeyCode::Left if choice => self.draft.cycle_at(self.focus, -1),
            KeyCode::Right | KeyCode::Char(' ') if choice => self.draft.cycle_at(self.focus, 1),
            KeyCode::Backspace if !choice => self.edit_text(|v| {
                v.pop();
            }),
            KeyCode::Char(c) if !choice && !ctrl => self.edit_text(|v| v.push(c)),
            _ => {}
        }

        EntryAction::Stay
    }
}

pub(crate) enum Mode {
    Browse,
    Entry(EntryForm),
}

pub(crate) struct AppState<S: SlotStorage> {
    pub grid: SampleGrid<S>,
    pub mode: Mode,
    /// Card rows scrolled past; clamped while drawing
    pub scroll: usize,
    pub status: Option<String>,
    /// Where the entry modal was last drawn, for click-outside detection
    pub modal_area: Option<Rect>,
    pub should_quit: bool,
}

impl<S: SlotStorage> AppState<S> {
    pub fn new(grid: SampleGrid<S>) -> Self {
        Self {
            grid,
            mode: Mode::Browse,
            scroll: 0,
            status: None,
            modal_area: None,
            should_quit: false,
        }
    }

    pub fn is_entry_open(&self) -> bool {
        matches!(self.mode, Mode::Entry(_))
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        let action = match &mut self.mode {
            Mode::Entry(entry) => Some(entry.handle_key(key)),
            Mode::Browse => None,
        };

        let Some(action) = action else {
            self.handle_browse_key(key);
            return;
        };

        match action {
            EntryAction::Stay => {}
            EntryAction::Cancel => self.close_entry(),
            EntryAction::Submit => self.submit_entry(),
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('n') if ctrl => self.open_entry(),
            KeyCode::F(2) | KeyCode::Insert => self.open_entry(),
            KeyCode::Esc => {
                if self.grid.query().is_empty() {
                    self.should_quit = true;
                } else {
                    self.set_query(String::new());
                }
            }
            KeyCode::Backspace => {
                let mut query = self.grid.query().to_string();
                query.pop();
                self.set_query(query);
            }
            KeyCode::Up => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Down => self.scroll += 1,
            KeyCode::Char(c) if !ctrl => {
                let mut query = self.grid.query().to_string();
                query.push(c);
                self.set_query(query);
            }
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return;
        }

        let Mode::Entry(entry) = &mut self.mode else {
            return;
        };
        if entry.notice.take().is_some() {
            return;
        }

        let inside = self
            .modal_area
            .is_some_and(|area| contains(area, mouse.column, mouse.row));
        if !inside {
            self.close_entry();
        }
    }

    fn set_query(&mut self, query: String) {
        self.grid.set_query(query);
        self.scroll = 0;
        self.status = None;
    }

    fn open_entry(&mut self) {
        self.mode = Mode::Entry(EntryForm::new(self.grid.form()));
        self.status = None;
    }

    fn close_entry(&mut self) {
        self.mode = Mode::Browse;
        self.modal_area = None;
    }

    fn submit_entry(&mut self) {
        let Mode::Entry(entry) = &self.mode else {
            return;
        };

        match self.grid.submit(&entry.draft) {
            Ok(record) => {
                self.status = Some(format!("Added {}", record.sample_id()));
                self.scroll = 0;
                self.close_entry();
            }
            Err(err) => {
                tracing::warn!(error = %err, "submission refused");
                if let Mode::Entry(entry) = &mut self.mode {
                    entry.notice = Some(err.to_string());
                }
            }
        }
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use samplegrid_runtime::{Catalog, MemorySlotStorage, StorageConfig};

    fn app() -> AppState<MemorySlotStorage> {
        let grid = SampleGrid::with_storage(
            Catalog::builtin().unwrap(),
            MemorySlotStorage::new(),
            &StorageConfig::default(),
        )
        .unwrap();
        AppState::new(grid)
    }

    fn press(app: &mut AppState<MemorySlotStorage>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut AppState<MemorySlotStorage>, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_text(app: &mut AppState<MemorySlotStorage>, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn entry(app: &AppState<MemorySlotStorage>) -> &EntryForm {
        match &app.mode {
            Mode::Entry(entry) => entry,
            Mode::Browse => panic!("entry form is not open"),
        }
    }

    fn click(app: &mut AppState<MemorySlotStorage>, column: u16, row: u16) {
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
    }

    #[test]
    fn test_typing_filters_live() {
        let mut app = app();
        type_text(&mut app, "ALUMIN");

        assert_eq!(app.grid.query(), "ALUMIN");
        let ids: Vec<String> = app.grid.visible().iter().map(|r| r.sample_id().to_string()).collect();
        assert_eq!(ids, vec!["MSP-0002"]);

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.grid.query(), "ALUMI");
    }

    #[test]
    fn test_escape_clears_search_then_quits() {
        let mut app = app();
        type_text(&mut app, "pbt");

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.grid.query(), "");
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_from_entry_form() {
        let mut app = app();
        ctrl(&mut app, 'n');
        ctrl(&mut app, 'c');
        assert!(app.should_quit);
    }

    #[test]
    fn test_submit_adds_record_first_and_clears_search() {
        let mut app = app();
        type_text(&mut app, "steel");
        ctrl(&mut app, 'n');
        assert!(app.is_entry_open());

        type_text(&mut app, "MSP-0005");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Bezel");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "glass");
        press(&mut app, KeyCode::Enter);

        assert!(!app.is_entry_open());
        assert_eq!(app.grid.query(), "");
        assert_eq!(app.status.as_deref(), Some("Added MSP-0005"));

        let added = &app.grid.records()[0];
        assert_eq!(added.sample_id().as_str(), "MSP-0005");
        assert_eq!(added.get("content"), Some("Bezel"));
        assert_eq!(added.get("market_sector"), Some("Consumer Electronics"));
        assert_eq!(added.get("material"), Some("glass"));
        assert_eq!(added.get("finish"), Some("Matte"));
    }

    #[test]
    fn test_duplicate_keeps_form_open_with_blocking_notice() {
        let mut app = app();
        press(&mut app, KeyCode::F(2));
        type_text(&mut app, "MSP-0001");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "again");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.grid.records().len(), 4);
        assert_eq!(app.grid.store().storage().write_count(), 1);
        assert_eq!(
            entry(&app).notice.as_deref(),
            Some("Sample ID 'MSP-0001' already exists")
        );

        // First key only dismisses the notice
        press(&mut app, KeyCode::Char('x'));
        assert!(entry(&app).notice.is_none());
        assert_eq!(entry(&app).draft.value("sample_id"), Some("MSP-0001"));
        assert_eq!(entry(&app).draft.value("content"), Some("again"));
    }

    #[test]
    fn test_blank_sample_id_is_refused() {
        let mut app = app();
        press(&mut app, KeyCode::Insert);
        press(&mut app, KeyCode::Enter);

        assert_eq!(entry(&app).notice.as_deref(), Some("Sample ID is required"));
        assert_eq!(app.grid.records().len(), 4);
    }

    #[test]
    fn test_reopened_form_starts_from_defaults() {
        let mut app = app();
        ctrl(&mut app, 'n');
        type_text(&mut app, "draft");
        press(&mut app, KeyCode::Esc);
        assert!(!app.is_entry_open());

        ctrl(&mut app, 'n');
        assert_eq!(entry(&app).draft.value("sample_id"), Some(""));
        assert_eq!(entry(&app).draft.value("market_sector"), Some("Automotive"));
        assert_eq!(entry(&app).focus, 0);
    }

    #[test]
    fn test_choice_fields_cycle_and_ignore_typing() {
        let mut app = app();
        ctrl(&mut app, 'n');
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(entry(&app).focus, 2);

        press(&mut app, KeyCode::Left);
        assert_eq!(entry(&app).draft.value("market_sector"), Some("Architecture"));
        press(&mut app, KeyCode::Char('z'));
        assert_eq!(entry(&app).draft.value("market_sector"), Some("Architecture"));
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(entry(&app).draft.value("market_sector"), Some("Automotive"));

        press(&mut app, KeyCode::BackTab);
        assert_eq!(entry(&app).focus, 1);
    }

    #[test]
    fn test_click_outside_modal_closes_it() {
        let mut app = app();
        ctrl(&mut app, 'n');
        app.modal_area = Some(Rect::new(10, 5, 40, 12));

        click(&mut app, 20, 8);
        assert!(app.is_entry_open());

        click(&mut app, 2, 2);
        assert!(!app.is_entry_open());
        assert!(app.modal_area.is_none());
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut app = app();
        app.handle_key(KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(app.grid.query(), "");
    }
}
