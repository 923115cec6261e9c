use clap::Parser;
use portal::core::config::{CliOverrides, PortalConfig, load_config, parse_board_size, resolve};
use portal::core::content::Catalog;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "portal", about = "Terminal portfolio with a built-in snake game")]
struct Args {
    /// What the browse view lists
    #[arg(short, long, value_enum)]
    catalog: Option<Catalog>,

    /// Milliseconds between snake moves
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Board size as WIDTHxHEIGHT (e.g. 40x20)
    #[arg(long, value_parser = parse_board_size)]
    board: Option<(u16, u16)>,

    /// Log verbosity written to portal.log
    #[arg(long, default_value = "debug")]
    log_level: LevelFilter,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to portal.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("portal.log") {
        let _ = WriteLogger::init(args.log_level, log_config, log_file);
    }

    let file_config = load_config().unwrap_or_else(|e| {
        log::warn!("{e}, falling back to defaults");
        PortalConfig::default()
    });
    let config = resolve(
        &file_config,
        CliOverrides {
            catalog: args.catalog,
            tick_ms: args.tick_ms,
            board: args.board,
        },
    );

    log::info!(
        "Portal starting up: catalog {:?}, board {}x{}, tick {:?}",
        config.catalog,
        config.game.board_width,
        config.game.board_height,
        config.game.tick_interval
    );

    portal::tui::run(config)
}
