//! run command - Execute command lines and print the transcript

use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result};

use super::Context;
use crate::session::RepositorySession;
use crate::ui::output::{self, Verbosity};

/// Run `lines`, then the lines of `file`, against a fresh session.
pub fn run(ctx: &Context, lines: &[String], file: Option<&Path>, json: bool) -> Result<()> {
    let mut script: Vec<String> = lines.to_vec();
    if let Some(path) = file {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        script.extend(script_lines(&contents));
    }

    let mut session = RepositorySession::from_config(&ctx.config);
    for line in &script {
        if ctx.verbosity == Verbosity::Debug {
            println!("{}", output::format_command(&session.prompt(), line));
        }
        if let Some(response) = session.execute(line) {
            output::response(&response, ctx.verbosity);
        }
    }

    if json {
        let snapshot = session
            .to_json()
            .context("Failed to serialize repository snapshot")?;
        println!("{}", snapshot);
    }

    Ok(())
}

/// Command lines of a script file; blank lines and `#` comments are skipped.
fn script_lines(contents: &str) -> impl Iterator<Item = String> + '_ {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
}
