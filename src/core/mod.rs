//! # Core Session Logic
//!
//! The view controller and the snake engine it hosts.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • ViewController       │
//!                    │  • Action / Effect      │
//!                    │  • update() (reducer)   │
//!                    │  • GameEngine           │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                  ┌─────────────┴─────────────┐
//!                  ▼                           ▼
//!           ┌────────────┐              ┌────────────┐
//!           │    TUI     │              │   Tests    │
//!           │  Adapter   │              │ (drive     │
//!           │ (ratatui)  │              │  update()) │
//!           └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `ViewController`, all session state in one place
//! - [`action`]: `Action`, `Effect` and the `update()` reducer
//! - [`game`]: the tick-driven snake engine
//! - [`browser`]: bounded cursor over the content list
//! - [`content`]: menu, records and about page
//! - [`config`]: config file + env + CLI resolution

pub mod action;
pub mod browser;
pub mod config;
pub mod content;
pub mod game;
pub mod state;
