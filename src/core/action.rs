//! # Actions
//!
//! Everything that can happen in a session becomes an `Action`.
//! User presses Enter? That's `Action::Key(Key::Select)`.
//! The game timer fires? That's `Action::Tick(epoch)`.
//!
//! `update()` takes the current state and an action, mutates the state and
//! returns an `Effect` telling the host loop what to do next. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Global keys are checked first (terminate, quit, back). Whatever is left is
//! routed to exactly one consumer: the home menu, the list browser or the
//! snake engine.

use std::time::Duration;

use log::{debug, info, trace};

use crate::core::game::{Direction, GameCommand, GameEngine, TickOutcome};
use crate::core::state::{View, ViewController};

/// Logical keys. Aliases (hjkl, wasd, Space) are resolved by the input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Select,
    /// Esc: back to Home; no-op at Home.
    Back,
    /// `q`: back to Home; ends the session at Home.
    Quit,
    /// Ctrl+C: ends the session from anywhere.
    Terminate,
}

impl Key {
    fn as_direction(self) -> Option<Direction> {
        match self {
            Key::Up => Some(Direction::Up),
            Key::Down => Some(Direction::Down),
            Key::Left => Some(Direction::Left),
            Key::Right => Some(Direction::Right),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Key(Key),
    /// A scheduled tick for the engine instance with this epoch.
    Tick(u64),
    Resize(u16, u16),
}

/// What the host loop must do after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// Deliver `Action::Tick(epoch)` once, `after` from now. Replaces any
    /// tick already pending.
    ScheduleTick { epoch: u64, after: Duration },
}

pub fn update(state: &mut ViewController, action: Action) -> Effect {
    match action {
        Action::Key(key) => handle_key(state, key),
        Action::Tick(epoch) => handle_tick(state, epoch),
        Action::Resize(width, height) => {
            debug!("Terminal resized to {}x{}", width, height);
            state.terminal_size = (width, height);
            Effect::None
        }
    }
}

fn handle_key(state: &mut ViewController, key: Key) -> Effect {
    match key {
        Key::Terminate => return Effect::Quit,
        Key::Quit if state.view == View::Home => return Effect::Quit,
        Key::Quit | Key::Back if state.view != View::Home => {
            go_home(state);
            return Effect::None;
        }
        _ => {}
    }

    match state.view {
        View::Home => handle_menu_key(state, key),
        View::ListBrowse => {
            state.browser.handle_key(key);
            if let Some(record) = state.browser.selected() {
                trace!("Browsing {} ({})", record.name(), state.browser.cursor());
            }
            Effect::None
        }
        View::Game => handle_game_key(state, key),
        View::About => Effect::None,
    }
}

fn go_home(state: &mut ViewController) {
    info!("Leaving {:?} for Home", state.view);
    // Dropping the engine ends its tick chain: nothing reschedules it and a
    // tick already in flight carries a stale epoch.
    state.game = None;
    state.view = View::Home;
}

fn handle_menu_key(state: &mut ViewController, key: Key) -> Effect {
    match key {
        Key::Up => {
            state.menu_cursor = state.menu_cursor.saturating_sub(1);
            Effect::None
        }
        Key::Down => {
            if state.menu_cursor + 1 < state.content.menu.len() {
                state.menu_cursor += 1;
            }
            Effect::None
        }
        Key::Select => match state.selected_entry().map(|entry| entry.target) {
            Some(target) => enter_view(state, target),
            None => Effect::None,
        },
        _ => Effect::None,
    }
}

fn enter_view(state: &mut ViewController, target: View) -> Effect {
    info!("Entering {:?}", target);
    state.view = target;
    if target != View::Game {
        return Effect::None;
    }

    let settings = state.game_settings;
    let epoch = state.issue_epoch();
    let engine =
        GameEngine::with_random_seed(settings.board_width, settings.board_height, epoch);
    state.game = Some(engine);
    schedule_tick(state, epoch)
}

fn handle_game_key(state: &mut ViewController, key: Key) -> Effect {
    let Some(engine) = state.game.as_mut() else {
        return Effect::None;
    };
    let command = match key {
        Key::Select => GameCommand::Restart,
        other => match other.as_direction() {
            Some(direction) => GameCommand::Turn(direction),
            None => return Effect::None,
        },
    };
    if engine.handle_input(command) {
        let epoch = engine.epoch();
        return schedule_tick(state, epoch);
    }
    Effect::None
}

fn handle_tick(state: &mut ViewController, epoch: u64) -> Effect {
    if state.view != View::Game {
        trace!("Dropping tick {} outside the game view", epoch);
        return Effect::None;
    }
    let Some(engine) = state.game.as_mut() else {
        return Effect::None;
    };
    if engine.epoch() != epoch {
        trace!("Dropping stale tick {} (live epoch {})", epoch, engine.epoch());
        return Effect::None;
    }

    match engine.handle_tick() {
        TickOutcome::Continue => schedule_tick(state, epoch),
        TickOutcome::Ended => Effect::None,
    }
}

fn schedule_tick(state: &ViewController, epoch: u64) -> Effect {
    Effect::ScheduleTick {
        epoch,
        after: state.game_settings.tick_interval,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::game::{Cell, Lifecycle};
    use crate::test_support::{test_controller, test_controller_in_game};

    fn press(state: &mut ViewController, key: Key) -> Effect {
        update(state, Action::Key(key))
    }

    #[test]
    fn test_terminate_quits_from_every_view() {
        for view in [View::Home, View::About, View::ListBrowse, View::Game] {
            let mut state = test_controller();
            state.view = view;
            assert_eq!(press(&mut state, Key::Terminate), Effect::Quit);
        }
    }

    #[test]
    fn test_quit_at_home_ends_session() {
        let mut state = test_controller();
        assert_eq!(press(&mut state, Key::Quit), Effect::Quit);
    }

    #[test]
    fn test_back_at_home_is_noop() {
        let mut state = test_controller();
        state.menu_cursor = 1;
        assert_eq!(press(&mut state, Key::Back), Effect::None);
        assert_eq!(state.view, View::Home);
        assert_eq!(state.menu_cursor, 1);
    }

    #[test]
    fn test_quit_and_back_return_home() {
        for key in [Key::Quit, Key::Back] {
            let mut state = test_controller();
            state.view = View::About;
            assert_eq!(press(&mut state, key), Effect::None);
            assert_eq!(state.view, View::Home);
        }
    }

    #[test]
    fn test_menu_cursor_clamps() {
        let mut state = test_controller();
        press(&mut state, Key::Up);
        assert_eq!(state.menu_cursor, 0);
        for _ in 0..10 {
            press(&mut state, Key::Down);
        }
        assert_eq!(state.menu_cursor, state.menu().len() - 1);
    }

    #[test]
    fn test_select_enters_about_without_tick() {
        let mut state = test_controller();
        assert_eq!(press(&mut state, Key::Select), Effect::None);
        assert_eq!(state.view, View::About);
        assert!(state.game.is_none());
    }

    #[test]
    fn test_about_ignores_navigation() {
        let mut state = test_controller();
        press(&mut state, Key::Select);
        press(&mut state, Key::Down);
        press(&mut state, Key::Select);
        assert_eq!(state.view, View::About);
        assert_eq!(state.menu_cursor, 0);
    }

    #[test]
    fn test_entering_game_builds_engine_and_arms_tick() {
        let mut state = test_controller();
        state.menu_cursor = 2;
        let effect = press(&mut state, Key::Select);

        let engine = state.game.as_ref().expect("engine built on entry");
        assert_eq!(state.view, View::Game);
        assert_eq!(
            effect,
            Effect::ScheduleTick {
                epoch: engine.epoch(),
                after: state.game_settings.tick_interval,
            }
        );
    }

    #[test]
    fn test_each_game_entry_takes_the_next_epoch() {
        let mut state = test_controller();
        state.menu_cursor = 2;
        press(&mut state, Key::Select);
        assert_eq!(state.game.as_ref().map(|g| g.epoch()), Some(1));

        press(&mut state, Key::Back);
        press(&mut state, Key::Select);
        assert_eq!(state.game.as_ref().map(|g| g.epoch()), Some(2));
    }

    #[test]
    fn test_browser_cursor_survives_round_trip() {
        let mut state = test_controller();
        state.menu_cursor = 1;
        press(&mut state, Key::Select);
        assert_eq!(state.view, View::ListBrowse);
        press(&mut state, Key::Down);
        press(&mut state, Key::Down);
        assert_eq!(state.browser.cursor(), 2);
        // The menu cursor does not move while browsing.
        assert_eq!(state.menu_cursor, 1);

        press(&mut state, Key::Back);
        press(&mut state, Key::Select);
        assert_eq!(state.view, View::ListBrowse);
        assert_eq!(state.browser.cursor(), 2);
    }

    #[test]
    fn test_game_keys_reach_only_the_engine() {
        let mut state = test_controller_in_game();
        let cursor_before = state.menu_cursor;
        press(&mut state, Key::Up);
        assert_eq!(state.menu_cursor, cursor_before);
        assert_eq!(
            state.game.as_ref().map(|g| g.pending_direction()),
            Some(Direction::Up)
        );
    }

    #[test]
    fn test_tick_advances_and_reschedules() {
        let mut state = test_controller_in_game();
        let epoch = state.game.as_ref().map(|g| g.epoch()).unwrap();
        let head_before = state.game.as_ref().map(|g| g.head()).unwrap();

        let effect = update(&mut state, Action::Tick(epoch));
        assert!(matches!(effect, Effect::ScheduleTick { epoch: e, .. } if e == epoch));
        let head_after = state.game.as_ref().map(|g| g.head()).unwrap();
        assert_eq!(head_after, Cell::new(head_before.x + 1, head_before.y));
    }

    #[test]
    fn test_leaving_game_discards_engine_and_drops_its_ticks() {
        let mut state = test_controller_in_game();
        let epoch = state.game.as_ref().map(|g| g.epoch()).unwrap();

        press(&mut state, Key::Back);
        assert!(state.game.is_none());
        assert_eq!(update(&mut state, Action::Tick(epoch)), Effect::None);
    }

    #[test]
    fn test_reentering_game_starts_fresh_and_ignores_old_epoch() {
        let mut state = test_controller_in_game();
        let old_epoch = state.game.as_ref().map(|g| g.epoch()).unwrap();
        update(&mut state, Action::Tick(old_epoch));

        press(&mut state, Key::Back);
        state.menu_cursor = 2;
        press(&mut state, Key::Select);
        let engine = state.game.as_ref().unwrap();
        assert_ne!(engine.epoch(), old_epoch);
        assert_eq!(engine.score(), 0);

        let head = engine.head();
        assert_eq!(update(&mut state, Action::Tick(old_epoch)), Effect::None);
        assert_eq!(state.game.as_ref().unwrap().head(), head);
    }

    #[test]
    fn test_game_over_stops_chain_and_select_restarts() {
        let mut state = test_controller_in_game();
        let epoch = state.game.as_ref().map(|g| g.epoch()).unwrap();

        // Run right until the wall.
        let mut ticks = 0;
        while update(&mut state, Action::Tick(epoch)) != Effect::None {
            ticks += 1;
            assert!(ticks < 1000, "game never ended");
        }
        assert_eq!(
            state.game.as_ref().map(|g| g.lifecycle()),
            Some(Lifecycle::GameOver)
        );
        // Further ticks stay dead.
        assert_eq!(update(&mut state, Action::Tick(epoch)), Effect::None);

        let effect = press(&mut state, Key::Select);
        assert!(matches!(effect, Effect::ScheduleTick { epoch: e, .. } if e == epoch));
        assert_eq!(
            state.game.as_ref().map(|g| g.lifecycle()),
            Some(Lifecycle::Playing)
        );
    }

    #[test]
    fn test_resize_only_records_hint() {
        let mut state = test_controller_in_game();
        let head = state.game.as_ref().map(|g| g.head());
        assert_eq!(update(&mut state, Action::Resize(120, 40)), Effect::None);
        assert_eq!(state.terminal_size, (120, 40));
        assert_eq!(state.game.as_ref().map(|g| g.head()), head);
    }
}
