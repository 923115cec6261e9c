//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.portal/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::content::{Catalog, Project, Server};
use crate::core::state::GameSettings;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PortalConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub servers: Vec<Server>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub catalog: Option<Catalog>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GameConfig {
    pub board_width: Option<u16>,
    pub board_height: Option<u16>,
    pub tick_ms: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BOARD_WIDTH: u16 = 60;
pub const DEFAULT_BOARD_HEIGHT: u16 = 25;
pub const DEFAULT_TICK_MS: u64 = 120;

pub const MIN_BOARD_WIDTH: u16 = 8;
pub const MIN_BOARD_HEIGHT: u16 = 6;
pub const MIN_TICK_MS: u64 = 20;

pub const MAX_BOARD_WIDTH: u16 = 200;
pub const MAX_BOARD_HEIGHT: u16 = 100;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub catalog: Catalog,
    pub game: GameSettings,
    pub projects: Vec<Project>,
    pub servers: Vec<Server>,
}

/// Values taken from the command line (None = not specified).
#[derive(Debug, Default, Clone, Copy)]
pub struct CliOverrides {
    pub catalog: Option<Catalog>,
    pub tick_ms: Option<u64>,
    pub board: Option<(u16, u16)>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.portal/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".portal").join("config.toml"))
}

/// Load config from `~/.portal/config.toml`.
pub fn load_config() -> Result<PortalConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(PortalConfig::default())
        }
    }
}

/// Load config from an explicit path.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `PortalConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config_from(path: &Path) -> Result<PortalConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(PortalConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: PortalConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Portal Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# catalog = "portfolio"              # "portfolio" or "servers"

# [game]
# board_width = 60                   # 8..=200
# board_height = 25                  # 6..=100
# tick_ms = 120                      # Or set PORTAL_TICK_MS env var

# [[projects]]
# name = "My Project"
# description = "What it does"
# tech = ["Rust"]
# url = "https://example.net"
# status = "Live"
# emoji = "🟢"

# [[servers]]
# name = "Main Server"
# host = "ssh example.net"
# description = "The homelab box"
# icon = "🖥"
# tag = "homelab"
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &PortalConfig, cli: CliOverrides) -> ResolvedConfig {
    // Catalog: CLI → env → config → default
    let catalog = cli
        .catalog
        .or_else(|| {
            std::env::var("PORTAL_CATALOG")
                .ok()
                .and_then(|s| Catalog::parse(&s))
        })
        .or(config.general.catalog)
        .unwrap_or_default();

    // Tick cadence: CLI → env → config → default
    let tick_ms = cli
        .tick_ms
        .or_else(|| {
            std::env::var("PORTAL_TICK_MS")
                .ok()
                .and_then(|s| s.trim().parse().ok())
        })
        .or(config.game.tick_ms)
        .unwrap_or(DEFAULT_TICK_MS);

    // Board: CLI → config → default
    let (board_width, board_height) = cli.board.unwrap_or((
        config.game.board_width.unwrap_or(DEFAULT_BOARD_WIDTH),
        config.game.board_height.unwrap_or(DEFAULT_BOARD_HEIGHT),
    ));

    let game = GameSettings {
        board_width: board_width.clamp(MIN_BOARD_WIDTH, MAX_BOARD_WIDTH),
        board_height: board_height.clamp(MIN_BOARD_HEIGHT, MAX_BOARD_HEIGHT),
        tick_interval: Duration::from_millis(tick_ms.max(MIN_TICK_MS)),
    };
    if game.board_width != board_width || game.board_height != board_height {
        warn!(
            "Board {}x{} out of range, using {}x{}",
            board_width, board_height, game.board_width, game.board_height
        );
    }

    ResolvedConfig {
        catalog,
        game,
        projects: config.projects.clone(),
        servers: config.servers.clone(),
    }
}

/// Parse a `WIDTHxHEIGHT` board size such as `40x20`.
pub fn parse_board_size(s: &str) -> Result<(u16, u16), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let width = w.trim().parse().map_err(|e| format!("bad width '{w}': {e}"))?;
    let height = h.trim().parse().map_err(|e| format!("bad height '{h}': {e}"))?;
    Ok((width, height))
}
