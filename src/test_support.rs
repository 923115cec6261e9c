//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::core::content::Content;
use crate::core::game::GameEngine;
use crate::core::state::{GameSettings, View, ViewController};

/// A deterministic engine on a `width` × `height` board (epoch 1).
pub fn seeded_engine(width: u16, height: u16) -> GameEngine {
    GameEngine::new(width, height, 1, StdRng::seed_from_u64(42))
}

/// Creates a controller at Home with default content and settings.
pub fn test_controller() -> ViewController {
    ViewController::new(Content::default(), GameSettings::default())
}

/// Creates a controller already in the Game view with a seeded engine.
pub fn test_controller_in_game() -> ViewController {
    let mut controller = test_controller();
    let settings = controller.game_settings;
    controller.menu_cursor = 2;
    controller.view = View::Game;
    let epoch = controller.issue_epoch();
    controller.game = Some(GameEngine::new(
        settings.board_width,
        settings.board_height,
        epoch,
        StdRng::seed_from_u64(42),
    ));
    controller
}
