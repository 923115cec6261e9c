//! # Session State
//!
//! Everything one terminal session owns. Presentation state (layout caches,
//! scroll offsets) lives in the `tui` module.
//!
//! ```text
//! ViewController
//! ├── view: View                     // which screen is active
//! ├── menu_cursor: usize             // highlighted home menu entry
//! ├── content: Content               // menu, about page, quote
//! ├── browser: ListBrowser<Record>   // owns the records; persists across views
//! ├── game: Option<GameEngine>       // Some only while in View::Game
//! ├── game_settings: GameSettings    // board size + tick cadence
//! ├── terminal_size: (u16, u16)      // layout hint from resize events
//! └── next_epoch: u64                // tick-chain token for the next engine
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::time::Duration;

use crate::core::browser::ListBrowser;
use crate::core::config::ResolvedConfig;
use crate::core::content::{Content, MenuEntry, Record};
use crate::core::game::GameEngine;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    About,
    ListBrowse,
    Game,
}

/// Board size and tick cadence for every engine the controller builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    pub board_width: u16,
    pub board_height: u16,
    pub tick_interval: Duration,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            board_width: crate::core::config::DEFAULT_BOARD_WIDTH,
            board_height: crate::core::config::DEFAULT_BOARD_HEIGHT,
            tick_interval: Duration::from_millis(crate::core::config::DEFAULT_TICK_MS),
        }
    }
}

pub struct ViewController {
    pub view: View,
    pub menu_cursor: usize,
    pub content: Content,
    pub browser: ListBrowser<Record>,
    pub game: Option<GameEngine>,
    pub game_settings: GameSettings,
    /// Last size reported by the terminal. Advisory only: rendering lays out
    /// against the real frame area and nothing in the core depends on it.
    pub terminal_size: (u16, u16),
    next_epoch: u64,
}

impl ViewController {
    /// Takes the records out of `content`; from here on the browser is
    /// their only owner.
    pub fn new(mut content: Content, game_settings: GameSettings) -> Self {
        let browser = ListBrowser::new(std::mem::take(&mut content.records));
        Self {
            view: View::Home,
            menu_cursor: 0,
            content,
            browser,
            game: None,
            game_settings,
            terminal_size: (0, 0),
            next_epoch: 1,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        let content = Content::new(
            config.catalog,
            config.projects.clone(),
            config.servers.clone(),
        );
        Self::new(content, config.game)
    }

    pub fn menu(&self) -> &[MenuEntry] {
        &self.content.menu
    }

    pub fn selected_entry(&self) -> Option<&MenuEntry> {
        self.content.menu.get(self.menu_cursor)
    }

    /// Hand out a tick-chain token no earlier engine of this session used.
    pub fn issue_epoch(&mut self) -> u64 {
        let epoch = self.next_epoch;
        self.next_epoch += 1;
        epoch
    }
}
