//! # Supply Console Library
//!
//! Interactive console for the supply tracker. `main.rs` only parses
//! arguments and calls [`run`]; everything else lives here so it can be
//! tested.
//!
//! ## Module Organization
//! ```text
//! supply_console/
//! ├── lib.rs       ◄─── You are here (startup & logging)
//! ├── config.rs    ◄─── TOML config + env overrides
//! ├── state.rs     ◄─── Shared ledger handle
//! ├── commands.rs  ◄─── One function per menu action
//! ├── render.rs    ◄─── Tables and one-line reports
//! ├── menu.rs      ◄─── inquire prompts and the menu loop
//! └── error.rs     ◄─── AppError
//! ```
//!
//! ## Startup Sequence
//! 1. Load config (file, then environment)
//! 2. Initialize tracing (stderr, so it never mixes with menu output)
//! 3. Seed the ledger
//! 4. Run the main menu

pub mod commands;
pub mod config;
pub mod error;
pub mod menu;
pub mod render;
pub mod state;

use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::ConsoleConfig;
use crate::error::{AppError, AppResult};
use crate::menu::Console;

/// Runs the console until the user exits.
///
/// Returns [`AppError::Interrupted`] on Ctrl-C; the caller decides how to
/// exit on that.
pub fn run(config_path: Option<PathBuf>) -> AppResult<()> {
    let config = ConsoleConfig::load(config_path)?;
    init_tracing(&config.log.filter)?;

    info!(
        seed = config.seed.enabled,
        max_suggestions = config.search.max_suggestions,
        "Supply console starting"
    );

    let console = Console::new(config);
    console.run()
}

/// Initializes the tracing subscriber.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=supply_core=trace` - Show every search probe
/// - Default: the configured filter (`warn,supply=info`)
fn init_tracing(default_filter: &str) -> AppResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .map_err(|err| AppError::Logging(err.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| AppError::Logging(err.to_string()))
}
