//! repl command - Interactive simulated terminal

use std::io::{self, BufRead, Write};

use anyhow::{Context as _, Result};

use super::Context;
use crate::session::RepositorySession;
use crate::ui::output::{self, Verbosity};

/// Words that end the session.
const EXIT_WORDS: [&str; 2] = ["exit", "quit"];

/// Run the interactive loop on stdin until `exit` or end of input.
pub fn repl(ctx: &Context) -> Result<()> {
    let mut session = RepositorySession::from_config(&ctx.config);
    let stdin = io::stdin();
    run_loop(&mut session, stdin.lock(), ctx.verbosity)
}

fn run_loop(
    session: &mut RepositorySession,
    input: impl BufRead,
    verbosity: Verbosity,
) -> Result<()> {
    if verbosity != Verbosity::Quiet {
        println!("Type 'help' for available commands, 'exit' to leave.");
    }

    let mut lines = input.lines();
    loop {
        if verbosity != Verbosity::Quiet {
            print!("{}", session.prompt());
            io::stdout().flush().context("Failed to flush stdout")?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read from stdin")?;
        if EXIT_WORDS.contains(&line.trim()) {
            break;
        }

        if let Some(response) = session.execute(&line) {
            output::response(&response, verbosity);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_at_exit() {
        let mut session = RepositorySession::deterministic();
        let input = "git init\ntouch a.txt\nexit\ngit add .\n".as_bytes();
        run_loop(&mut session, input, Verbosity::Quiet).unwrap();

        let snapshot = session.snapshot();
        assert_eq!(snapshot.history.len(), 2);
        assert!(snapshot.staged.is_empty());
    }

    #[test]
    fn stops_at_end_of_input() {
        let mut session = RepositorySession::deterministic();
        run_loop(&mut session, "git init\n\n".as_bytes(), Verbosity::Quiet).unwrap();
        assert!(session.snapshot().initialized);
        assert_eq!(session.snapshot().history.len(), 1);
    }
}
