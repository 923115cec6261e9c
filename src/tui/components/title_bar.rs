//! # TitleBar Component
//!
//! Top status line showing which view is active and a short status note
//! (e.g. the live score while playing).
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! TitleBar is purely presentational: it receives all data as props and has
//! no internal state.
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new("Snake".to_string(), "Score 3".to_string());
//! title_bar.render(frame, area);
//! ```
//!
//! ## Conditional Formatting
//!
//! 1. **Status present**: `"Portal · Snake | Score 3 · Best 5"`
//! 2. **Default**: `"Portal · Snake"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Top status bar component.
pub struct TitleBar {
    /// Title of the active view (e.g. "Portfolio")
    pub view_title: String,
    /// Status note, empty for none
    pub status_message: String,
}

impl TitleBar {
    pub fn new(view_title: String, status_message: String) -> Self {
        Self {
            view_title,
            status_message,
        }
    }

    fn text(&self) -> String {
        if self.status_message.is_empty() {
            format!("Portal · {}", self.view_title)
        } else {
            format!("Portal · {} | {}", self.view_title, self.status_message)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD);
        frame.render_widget(Line::from(Span::styled(self.text(), style)), area);
    }
}
