//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the views,
//! translates keyboard events into `core::action::Action` values and hosts
//! the game's tick scheduler.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! One event at a time, each processed to completion:
//!
//! - Block on terminal input until the pending tick is due (or up to
//!   `IDLE_POLL` when no tick is pending).
//! - Feed each key/resize through `update()` and act on its `Effect`.
//! - If the tick deadline has passed, deliver exactly one `Action::Tick`.
//! - Redraw only when something changed.
//!
//! There is no free-running timer. A tick is pending only because the last
//! `update()` asked for one, so the chain stops as soon as the game ends or
//! the player leaves the game view.

mod component;
mod components;
mod event;
mod scheduler;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::ViewController;
use crate::tui::components::CatalogListState;
use crate::tui::event::{poll_event_immediate, poll_event_timeout};
use crate::tui::scheduler::TickScheduler;

/// How long to block on input when no tick is pending.
const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core session logic)
pub struct TuiState {
    pub catalog_list: CatalogListState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            catalog_list: CatalogListState::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), Hide)?;
        info!("Terminal modes enabled (hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
    }
}

/// Applies an effect to the scheduler. Returns `true` when the session ends.
fn apply_effect(effect: Effect, scheduler: &mut TickScheduler) -> bool {
    match effect {
        Effect::None => false,
        Effect::Quit => true,
        Effect::ScheduleTick { epoch, after } => {
            scheduler.arm(epoch, Instant::now() + after);
            false
        }
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut state = ViewController::from_config(&config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new()
        .and_then(|_guard| event_loop(&mut terminal, &mut state, &mut tui));

    debug!("Event loop finished, restoring terminal");
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut ViewController,
    tui: &mut TuiState,
) -> std::io::Result<()> {
    let mut scheduler = TickScheduler::default();

    let size = terminal.size()?;
    update(state, Action::Resize(size.width, size.height));

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, state, tui))?;
            needs_redraw = false;
        }

        let timeout = scheduler
            .time_until_due(Instant::now())
            .unwrap_or(IDLE_POLL);

        // Process first event + drain ALL pending input before the tick
        let mut pending_input = poll_event_timeout(timeout)?;
        while let Some(action) = pending_input {
            needs_redraw = true;
            if apply_effect(update(state, action), &mut scheduler) {
                return Ok(());
            }
            pending_input = poll_event_immediate()?;
        }

        if let Some(epoch) = scheduler.take_due(Instant::now()) {
            needs_redraw = true;
            if apply_effect(update(state, Action::Tick(epoch)), &mut scheduler) {
                return Ok(());
            }
        }
    }
}
