use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::Write;

use super::traits::Renderer;
use crate::presentation::view_models::{CommandResultViewModel, CreateView, RenderOptions};

pub struct ConsoleRenderer {
    json_mode: bool,
    color: bool,
    options: RenderOptions,
}

impl ConsoleRenderer {
    /// Colour and card width follow the attached terminal
    pub fn new(json_mode: bool) -> Self {
        let width = terminal_size::terminal_size()
            .map(|(terminal_size::Width(w), _)| w as usize)
            .unwrap_or(RenderOptions::default().width);

        Self {
            json_mode,
            color: std::io::stdout().is_terminal(),
            options: RenderOptions { width },
        }
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn write_to<T, W>(&self, out: &mut W, result: &CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
        W: Write,
    {
        if self.json_mode {
            writeln!(out, "{}", serde_json::to_string_pretty(result)?)?;
            return Ok(());
        }

        if let Some(badge) = &result.badge {
            if self.color {
                writeln!(out, "{} {}", badge.icon(), badge.label.bold())?;
            } else {
                writeln!(out, "{} {}", badge.icon(), badge.label)?;
            }
            writeln!(out)?;
        }

        write!(out, "{}", result.content.create_view(self.options))?;

        if !result.suggestions.is_empty() {
            writeln!(out)?;
            if self.color {
                writeln!(out, "{}", "💡 Tips:".yellow().bold())?;
            } else {
                writeln!(out, "💡 Tips:")?;
            }
            for tip in &result.suggestions {
                write!(out, "  • {}", tip.description)?;
                if let Some(cmd) = &tip.command {
                    if self.color {
                        write!(out, ": {}", cmd.cyan())?;
                    } else {
                        write!(out, ": {}", cmd)?;
                    }
                }
                writeln!(out)?;
            }
        }

        Ok(())
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out, &result)?;
        out.flush()?;
        Ok(())
    }
}
