//! store::action
//!
//! The closed vocabulary of state transitions.
//!
//! Every mutation of a [`Snapshot`](super::state::Snapshot) is expressed as
//! exactly one [`Action`]. Actions carry already-validated values; deciding
//! whether an action is *sensible* is the interpreter's job.

use serde::{Deserialize, Serialize};

use crate::core::types::{BranchName, CommitId, FileName};

/// Which files a stage action covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pathspec {
    /// Every working-directory file at the time the action is applied.
    All,
    /// The listed files.
    Files(Vec<FileName>),
}

/// How far `reset` rewinds besides moving HEAD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResetMode {
    Soft,
    Mixed,
    Hard,
}

/// Revision a reset moves to. Only the first parent of HEAD is supported.
pub const RESET_TARGET_PARENT: &str = "HEAD~1";

/// A state transition applied by the reducer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Create the repository with its default branch and seed file.
    Initialize,

    /// Add an untracked file to the working directory.
    CreateFile { name: FileName },

    /// Mark a working-directory file as modified.
    ModifyFile { name: FileName },

    /// Move files from the working directory into the staging area.
    Stage { paths: Pathspec },

    /// Record the staging area as a new commit on HEAD.
    Commit { message: String },

    /// Attach HEAD to a branch.
    Checkout { branch: BranchName },

    /// Detach HEAD at the commit matching an id prefix.
    CheckoutCommit { prefix: String },

    /// Create a branch without switching to it.
    CreateBranch {
        name: BranchName,
        from: Option<CommitId>,
    },

    /// Merge a branch into the current one with a two-parent commit.
    Merge { branch: BranchName },

    /// Move HEAD and the current branch back.
    Reset { mode: ResetMode, target: String },

    /// Append an entry to the command log.
    RecordHistory {
        command: String,
        output: String,
        error: bool,
    },

    /// Discard everything and return to the uninitialized state.
    ResetAll,
}

impl Action {
    /// Short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Initialize => "initialize",
            Action::CreateFile { .. } => "create_file",
            Action::ModifyFile { .. } => "modify_file",
            Action::Stage { .. } => "stage",
            Action::Commit { .. } => "commit",
            Action::Checkout { .. } => "checkout",
            Action::CheckoutCommit { .. } => "checkout_commit",
            Action::CreateBranch { .. } => "create_branch",
            Action::Merge { .. } => "merge",
            Action::Reset { .. } => "reset",
            Action::RecordHistory { .. } => "record_history",
            Action::ResetAll => "reset_all",
        }
    }

    /// `reset --hard HEAD~1`.
    pub fn hard_reset_one() -> Self {
        Action::Reset {
            mode: ResetMode::Hard,
            target: RESET_TARGET_PARENT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_type_tag() {
        let json = serde_json::to_value(Action::Merge {
            branch: BranchName::new("feature").unwrap(),
        })
        .unwrap();
        assert_eq!(json["type"], "merge");
        assert_eq!(json["branch"], "feature");
    }

    #[test]
    fn hard_reset_targets_first_parent() {
        assert_eq!(
            Action::hard_reset_one(),
            Action::Reset {
                mode: ResetMode::Hard,
                target: "HEAD~1".into()
            }
        );
    }
}
