//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--config <path>`: Use this config file
//! - `--debug`: Enable debug logging and echo commands in transcripts
//! - `--quiet` / `-q`: Print only failures

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// gitsim - an in-memory Git simulator for learning version control
#[derive(Parser, Debug)]
#[command(name = "gitsim")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Use this config file instead of searching for one
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Print only command failures
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Defaults to `repl` when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start an interactive simulated terminal
    #[command(
        name = "repl",
        long_about = "Start an interactive simulated terminal.\n\n\
            Reads one command per line from stdin and prints the response, \
            showing a prompt that tracks the current branch or detached HEAD. \
            The repository lives only in memory and is gone when the session ends.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Start a session (same as running gitsim with no command)
    gitsim repl

    # Inside the session
    user@computer:~$ git init
    user@repo:(main)$ git add .
    user@repo:(main)$ git commit -m \"Initial commit\"

Type 'help' for the list of simulated commands, 'exit' to leave."
    )]
    Repl,

    /// Run command lines and print the transcript
    #[command(
        name = "run",
        long_about = "Run simulated command lines in order against a fresh repository.\n\n\
            Lines given as arguments run first, then lines from --file. Each \
            response is printed as it is produced; failures go to stderr. With \
            --json the final repository snapshot is printed as JSON.",
        after_help = "\
WORKFLOW EXAMPLES:
    # A quick scenario
    gitsim run 'git init' 'git add .' 'git commit -m first' 'git log'

    # Replay a script, one command per line
    gitsim run --file lesson.txt

    # Inspect the resulting state
    gitsim run --json 'git init' 'git checkout -b feature'"
    )]
    Run {
        /// Command lines to execute
        #[arg(value_name = "LINE")]
        lines: Vec<String>,

        /// Read additional command lines from a file
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,

        /// Print the final snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// Inspect configuration
    #[command(
        name = "config",
        long_about = "Inspect configuration.\n\n\
            Configuration is read from --config, $GITSIM_CONFIG, \
            $XDG_CONFIG_HOME/gitsim/config.toml, or ~/.gitsim/config.toml, \
            whichever exists first.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Show the effective configuration with defaults filled in
    gitsim config show

    # Show where configuration is searched for
    gitsim config path"
    )]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        long_about = "Generate shell completion scripts for tab-completion.\n\n\
            Outputs a completion script for the specified shell. Add the output \
            to your shell's configuration to enable tab-completion for gitsim commands.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Bash (add to ~/.bashrc)
    gitsim completion bash >> ~/.bashrc

    # Zsh (add to ~/.zshrc)
    gitsim completion zsh >> ~/.zshrc

    # Fish
    gitsim completion fish > ~/.config/fish/completions/gitsim.fish"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug, Clone, Copy)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config search path, marking the file in use
    Path,
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_repl() {
        let cli = Cli::try_parse_from(["gitsim"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn run_collects_lines_and_flags() {
        let cli =
            Cli::try_parse_from(["gitsim", "-q", "run", "--json", "git init", "git status"])
                .unwrap();
        assert!(cli.quiet);
        match cli.command {
            Some(Command::Run { lines, json, file }) => {
                assert_eq!(lines, vec!["git init", "git status"]);
                assert!(json);
                assert!(file.is_none());
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn global_config_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["gitsim", "config", "show", "--config", "x.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
    }
}
