//! Interactive grid for the `browse` command.
//!
//! `AppState` is a plain state machine fed key and mouse events; `ui::draw`
//! paints it. Only `run` touches the real terminal.

mod app;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use samplegrid_runtime::{SampleGrid, SlotStorage};
use std::io;
use std::time::Duration;

use app::AppState;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

pub fn run<S: SlotStorage>(grid: SampleGrid<S>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    ctrlc::set_handler(move || {
        restore_terminal();
        std::process::exit(0);
    })?;

    let mut app = AppState::new(grid);
    let result = event_loop(&mut terminal, &mut app);

    restore_terminal();
    terminal.show_cursor()?;
    result
}

fn event_loop<B: Backend, S: SlotStorage>(
    terminal: &mut Terminal<B>,
    app: &mut AppState<S>,
) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }
    }

    tracing::debug!(records = app.grid.records().len(), "browse session ended");
    Ok(())
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}
