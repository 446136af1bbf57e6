//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! The terminal transcript goes to stdout and respects the quiet flag.
//! Command failures are part of the transcript, so they are printed even
//! in quiet mode, on stderr. When `--json` is enabled the final snapshot
//! is printed as JSON after the transcript.

use std::fmt::Display;

use crate::session::Response;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - only failures
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - echo commands with their prompt
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Print a message (respects quiet mode).
pub fn print(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Print a warning message (respects quiet mode).
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("warning: {}", message);
    }
}

/// Print a command's response.
///
/// Empty output (from `clear`) prints nothing.
pub fn response(response: &Response, verbosity: Verbosity) {
    if response.output.is_empty() {
        return;
    }
    if response.is_error {
        eprintln!("{}", response.output);
    } else {
        print(&response.output, verbosity);
    }
}

/// A transcript line: the prompt followed by the command.
pub fn format_command(prompt: &str, command: &str) -> String {
    format!("{}{}", prompt, command)
}

/// Format a list of items.
pub fn format_list<T: Display>(items: &[T], prefix: &str) -> String {
    items
        .iter()
        .map(|item| format!("{}{}", prefix, item))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_flags() {
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(false, true), Verbosity::Debug);
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
    }

    #[test]
    fn formats() {
        assert_eq!(format_command("user@computer:~$ ", "git init"), "user@computer:~$ git init");
        assert_eq!(format_list(&["a", "b"], "  "), "  a\n  b");
    }
}
