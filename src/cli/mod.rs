//! cli
//!
//! Command-line interface layer for gitsim.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Set up logging and load configuration
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to a
//! handler that drives a [`crate::session::RepositorySession`]. Simulated
//! repository state never outlives the process.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use anyhow::{Context as _, Result};

use crate::core::config::Config;
use crate::ui::{logging, output};

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let verbosity = output::Verbosity::from_flags(cli.quiet, cli.debug);

    if let Err(err) = logging::init(cli.debug) {
        output::warn(format!("logging disabled: {}", err), verbosity);
    }

    let loaded = Config::load(cli.config.as_deref()).context("Failed to load config")?;
    for warning in &loaded.warnings {
        output::warn(
            format!("{}: {}", warning.path.display(), warning.message),
            verbosity,
        );
    }

    let ctx = commands::Context {
        config: loaded.config,
        config_path: cli.config.clone(),
        verbosity,
    };

    commands::dispatch(cli.command, &ctx)
}
