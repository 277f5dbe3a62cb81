use serde::Serialize;
use std::fmt;

use super::common::{Guidance, StatusBadge};

/// Layout hints for text views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Columns available for one line of output
    pub width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { width: 80 }
    }
}

/// Implemented by every ViewModel that has a text rendering
pub trait CreateView {
    fn create_view<'a>(&'a self, options: RenderOptions) -> Box<dyn fmt::Display + 'a>;
}

#[derive(Debug, Serialize)]
pub struct CommandResultViewModel<T>
where
    T: Serialize,
{
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<StatusBadge>,

    pub content: T,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<Guidance>,
}

impl<T> CommandResultViewModel<T>
where
    T: Serialize,
{
    pub fn new(content: T) -> Self {
        Self {
            badge: None,
            content,
            suggestions: Vec::new(),
        }
    }

    pub fn with_badge(mut self, badge: StatusBadge) -> Self {
        self.badge = Some(badge);
        self
    }

    pub fn with_suggestion(mut self, guide: Guidance) -> Self {
        self.suggestions.push(guide);
        self
    }
}
