//! store::state
//!
//! The repository snapshot and the entities it holds.
//!
//! A [`Snapshot`] is a plain value: the reducer never mutates one in place,
//! it builds the next snapshot from the previous one. Presentation layers
//! read snapshots through the accessors here and may serialize them to JSON.
//!
//! # Invariants
//!
//! - Commits are append-only; their order is creation order
//! - Commit ids are unique
//! - Every non-empty branch pointer names an existing commit
//! - A file name lives in the working directory or the staging area, never both

use serde::{Deserialize, Serialize};

use crate::core::types::{BranchName, Color, CommitId, FileName, FileStatus, UtcTimestamp};

/// A file entry in the working directory or staging area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub name: FileName,
    pub status: FileStatus,
}

impl FileEntry {
    /// Create a file entry.
    pub fn new(name: FileName, status: FileStatus) -> Self {
        Self { name, status }
    }

    /// Create an untracked file entry.
    pub fn untracked(name: FileName) -> Self {
        Self::new(name, FileStatus::Untracked)
    }
}

/// An immutable commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub id: CommitId,
    pub message: String,
    pub author: String,
    pub timestamp: UtcTimestamp,
    /// Branch that was current when the commit was made.
    ///
    /// `None` for commits made with a detached HEAD.
    pub branch: Option<BranchName>,
    /// Parent ids, mainline first. Empty for a root commit.
    pub parents: Vec<CommitId>,
    /// The staged set this commit captured. Empty for merge commits.
    pub changes: Vec<FileEntry>,
    pub is_merge: bool,
}

impl Commit {
    /// The mainline parent, if any.
    pub fn parent(&self) -> Option<&CommitId> {
        self.parents.first()
    }

    /// The merged-in parent of a merge commit.
    pub fn merged_parent(&self) -> Option<&CommitId> {
        if self.is_merge {
            self.parents.get(1)
        } else {
            None
        }
    }

    /// Whether this is a root commit.
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }
}

/// A branch pointer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub name: BranchName,
    /// Commit the branch points at; `None` until its first commit.
    pub commit: Option<CommitId>,
    pub color: Color,
}

/// One entry of the terminal command log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub command: String,
    pub output: String,
    pub error: bool,
    pub timestamp: UtcTimestamp,
}

/// The whole simulated repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub initialized: bool,
    pub commits: Vec<Commit>,
    pub branches: Vec<Branch>,
    /// Current branch; `None` while detached or before `init`.
    pub current_branch: Option<BranchName>,
    /// The commit the next operation builds on.
    pub head: Option<CommitId>,
    pub detached_head: bool,
    pub staged: Vec<FileEntry>,
    pub working_dir: Vec<FileEntry>,
    pub history: Vec<HistoryEntry>,
}

impl Snapshot {
    /// The pristine, uninitialized repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a commit by its full id.
    pub fn commit(&self, id: &CommitId) -> Option<&Commit> {
        self.commits.iter().find(|c| &c.id == id)
    }

    /// Resolve a commit id prefix.
    ///
    /// The earliest-created match wins when several commits share the prefix.
    pub fn resolve_prefix(&self, prefix: &str) -> Option<&Commit> {
        self.commits.iter().find(|c| c.id.matches_prefix(prefix))
    }

    /// Look up a branch by name.
    pub fn branch(&self, name: &str) -> Option<&Branch> {
        self.branches.iter().find(|b| b.name.as_str() == name)
    }

    /// The commit HEAD points at.
    pub fn head_commit(&self) -> Option<&Commit> {
        self.head.as_ref().and_then(|id| self.commit(id))
    }

    /// The current branch, when attached.
    pub fn current(&self) -> Option<&Branch> {
        self.current_branch
            .as_ref()
            .and_then(|name| self.branch(name.as_str()))
    }

    /// Whether `name` is the current (attached) branch.
    pub fn is_current(&self, name: &str) -> bool {
        !self.detached_head
            && self
                .current_branch
                .as_ref()
                .is_some_and(|b| b.as_str() == name)
    }

    /// Find a file in the working directory.
    pub fn working_file(&self, name: &str) -> Option<&FileEntry> {
        self.working_dir.iter().find(|f| f.name == *name)
    }

    /// Find a file in the staging area.
    pub fn staged_file(&self, name: &str) -> Option<&FileEntry> {
        self.staged.iter().find(|f| f.name == *name)
    }

    /// Abbreviated HEAD id, or an empty string when HEAD is unborn.
    pub fn head_abbrev(&self) -> &str {
        self.head.as_ref().map(CommitId::abbrev).unwrap_or("")
    }

    /// The last `n` commits, oldest first.
    pub fn recent_commits(&self, n: usize) -> &[Commit] {
        &self.commits[self.commits.len().saturating_sub(n)..]
    }

    /// The last `n` command log entries, oldest first.
    pub fn recent_history(&self, n: usize) -> &[HistoryEntry] {
        &self.history[self.history.len().saturating_sub(n)..]
    }
}
