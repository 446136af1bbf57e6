//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Validates command-specific arguments
//! 2. Drives a [`RepositorySession`](crate::session::RepositorySession)
//! 3. Formats and displays output through [`crate::ui::output`]
//!
//! Handlers never touch a snapshot directly; every change goes through
//! the session.

mod completion;
mod config_cmd;
mod repl;
mod run;

pub use completion::completion;
pub use repl::repl;
pub use run::run;

use std::path::PathBuf;

use anyhow::Result;

use super::args::{Command, ConfigAction};
use crate::core::config::Config;
use crate::ui::output::Verbosity;

/// Settings shared by every handler.
#[derive(Debug, Clone)]
pub struct Context {
    pub config: Config,
    /// The `--config` flag, if given.
    pub config_path: Option<PathBuf>,
    pub verbosity: Verbosity,
}

/// Dispatch a parsed command to its handler.
pub fn dispatch(command: Option<Command>, ctx: &Context) -> Result<()> {
    match command.unwrap_or(Command::Repl) {
        Command::Repl => repl(ctx),
        Command::Run { lines, file, json } => run(ctx, &lines, file.as_deref(), json),
        Command::Config { action } => match action {
            ConfigAction::Show => config_cmd::show(ctx),
            ConfigAction::Path => config_cmd::path(ctx),
        },
        Command::Completion { shell } => completion(shell),
    }
}
