//! interpreter::error
//!
//! Failures a command line can produce. The `Display` text of each variant
//! is exactly what the terminal shows.

use thiserror::Error;

/// Why a command was rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("fatal: not a git repository (or any of the parent directories): .git")]
    NotARepository,

    #[error("usage: git <command> [<args>]")]
    GitUsage,

    #[error("git: '{0}' is not a git command. See 'git --help'.")]
    UnknownSubcommand(String),

    #[error("Nothing specified, nothing added.\nMaybe you wanted to say 'git add .'?")]
    NothingSpecified,

    #[error("pathspec '{0}' did not match any files")]
    PathspecNoMatch(String),

    #[error("nothing to commit, working tree clean")]
    NothingToCommit,

    #[error("usage: git commit -m \"commit message\"")]
    CommitUsage,

    #[error("Aborting commit due to empty commit message.")]
    EmptyCommitMessage,

    #[error("fatal: A branch named '{0}' already exists.")]
    BranchExists(String),

    #[error("fatal: '{0}' is not a valid branch name.")]
    InvalidBranchName(String),

    #[error("error: pathspec '{0}' did not match any file(s) known to git")]
    UnknownRevision(String),

    #[error("usage: git checkout <branch> or git checkout -b <branch>")]
    CheckoutUsage,

    #[error("usage: git merge <branch>")]
    MergeUsage,

    #[error("merge: {0} - not something we can merge")]
    NotMergeable(String),

    #[error("fatal: your current branch does not have any commits yet")]
    NoCommitsYet,

    #[error("fatal: ambiguous argument 'HEAD~1': unknown revision")]
    AmbiguousParent,

    #[error("usage: git reset --hard HEAD~1")]
    ResetUsage,

    #[error("usage: touch <filename>")]
    TouchUsage,

    #[error("{command}: '{name}' is not a valid file name")]
    InvalidFileName { command: &'static str, name: String },

    #[error("Command not found: {0}. Type 'help' for available commands.")]
    NotFound(String),
}
