//! # TUI Components
//!
//! One component per view, plus the title bar.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Receive everything they draw as borrowed props and keep no state:
//! - `TitleBar`: top line with the active view and a status note
//! - `HomeMenu`: banner, greeting and the navigation menu
//! - `AboutPanel`: the about/welcome page
//! - `SnakeBoard`: board, stats panel and the game-over overlay
//!
//! ### Stateful Components
//!
//! - `CatalogList`: scrollable record cards. Scroll position lives in
//!   `CatalogListState` inside `TuiState`; the cursor itself lives in the
//!   core `ListBrowser`.
//!
//! Components never touch core state mutably. They render what they are
//! given.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file, shared layout helpers)
//! ├── title_bar.rs     (Top status line)
//! ├── home.rs          (Home menu)
//! ├── about.rs         (About page)
//! ├── catalog_list.rs  (Project / server cards)
//! └── snake_board.rs   (Game board)
//! ```

use ratatui::layout::{Constraint, Flex, Layout, Rect};
use unicode_width::UnicodeWidthStr;

mod about;
mod catalog_list;
mod home;
mod snake_board;
mod title_bar;

pub use about::AboutPanel;
pub use catalog_list::{CatalogList, CatalogListState};
pub use home::HomeMenu;
pub use snake_board::SnakeBoard;
pub use title_bar::TitleBar;

/// Truncate a string to fit within `max_width` terminal columns, adding
/// "..." if needed.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > max_width - 3 {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

/// A `width` × `height` rect centered in `outer`, clamped to fit.
pub fn centered_fixed(width: u16, height: u16, outer: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(outer.height))])
        .flex(Flex::Center)
        .areas(outer);
    let [area] = Layout::horizontal([Constraint::Length(width.min(outer.width))])
        .flex(Flex::Center)
        .areas(row);
    area
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("short", 10), "short");
        assert_eq!(truncate_str("a longer string", 8), "a lon...");
        assert_eq!(truncate_str("abcdef", 2), "..");
    }

    #[test]
    fn test_truncate_str_counts_wide_chars() {
        // Each CJK char is two columns wide.
        assert_eq!(truncate_str("日本語テキスト", 7), "日本...");
    }

    #[test]
    fn test_centered_fixed_clamps_to_outer() {
        let outer = Rect::new(0, 0, 20, 10);
        assert_eq!(centered_fixed(10, 4, outer), Rect::new(5, 3, 10, 4));
        assert_eq!(centered_fixed(50, 50, outer), outer);
    }
}
