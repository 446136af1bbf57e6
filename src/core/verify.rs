//! core::verify
//!
//! Invariant checks over a repository snapshot.
//!
//! # Checks
//!
//! - Commit ids are unique
//! - Every parent id and every non-empty branch pointer names a known commit
//! - Non-merge commits have at most one parent; merges have exactly two
//! - The commit graph is acyclic
//! - Branch names are unique
//! - No file is both staged and in the working directory
//! - A detached HEAD points at a commit and has no current branch
//!
//! # Invariants
//!
//! - Never mutates the snapshot
//! - Deterministic: the same snapshot yields the same errors in the same order

use std::collections::HashSet;

use thiserror::Error;

use super::graph::CommitGraph;
use crate::store::state::Snapshot;

/// A violated snapshot invariant.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VerifyError {
    #[error("duplicate commit id: {0}")]
    DuplicateCommit(String),

    #[error("commit {commit} has unknown parent {parent}")]
    DanglingParent { commit: String, parent: String },

    #[error("commit {commit} has {count} parents but merge flag is {is_merge}")]
    ParentCountMismatch {
        commit: String,
        count: usize,
        is_merge: bool,
    },

    #[error("cycle detected in commit graph at {0}")]
    CycleDetected(String),

    #[error("duplicate branch name: {0}")]
    DuplicateBranch(String),

    #[error("branch {branch} points at unknown commit {commit}")]
    DanglingBranch { branch: String, commit: String },

    #[error("HEAD points at unknown commit {0}")]
    DanglingHead(String),

    #[error("file {0} is both staged and in the working directory")]
    FileInBothAreas(String),

    #[error("detached HEAD must point at a commit and have no current branch")]
    InconsistentDetachedHead,
}

/// Result of verification.
#[derive(Debug)]
pub struct VerifyResult {
    /// Whether verification passed
    pub ok: bool,
    /// Errors found during verification
    pub errors: Vec<VerifyError>,
}

impl VerifyResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            ok: true,
            errors: vec![],
        }
    }

    /// Create a failed result with errors.
    pub fn failure(errors: Vec<VerifyError>) -> Self {
        Self { ok: false, errors }
    }
}

/// Check every snapshot invariant.
pub fn verify(snapshot: &Snapshot) -> VerifyResult {
    let mut errors = Vec::new();
    let graph = CommitGraph::from_commits(&snapshot.commits);

    let mut ids = HashSet::new();
    for commit in &snapshot.commits {
        if !ids.insert(&commit.id) {
            errors.push(VerifyError::DuplicateCommit(commit.id.to_string()));
        }

        let count = commit.parents.len();
        let shape_ok = if commit.is_merge { count == 2 } else { count <= 1 };
        if !shape_ok {
            errors.push(VerifyError::ParentCountMismatch {
                commit: commit.id.to_string(),
                count,
                is_merge: commit.is_merge,
            });
        }

        for parent in &commit.parents {
            if !graph.contains(parent) {
                errors.push(VerifyError::DanglingParent {
                    commit: commit.id.to_string(),
                    parent: parent.to_string(),
                });
            }
        }
    }

    if let Some(id) = graph.find_cycle() {
        errors.push(VerifyError::CycleDetected(id.to_string()));
    }

    let mut names = HashSet::new();
    for branch in &snapshot.branches {
        if !names.insert(&branch.name) {
            errors.push(VerifyError::DuplicateBranch(branch.name.to_string()));
        }
        if let Some(commit) = &branch.commit {
            if !graph.contains(commit) {
                errors.push(VerifyError::DanglingBranch {
                    branch: branch.name.to_string(),
                    commit: commit.to_string(),
                });
            }
        }
    }

    if let Some(head) = &snapshot.head {
        if !graph.contains(head) {
            errors.push(VerifyError::DanglingHead(head.to_string()));
        }
    }

    for file in &snapshot.staged {
        if snapshot.working_file(file.name.as_str()).is_some() {
            errors.push(VerifyError::FileInBothAreas(file.name.to_string()));
        }
    }

    if snapshot.detached_head && (snapshot.head.is_none() || snapshot.current_branch.is_some()) {
        errors.push(VerifyError::InconsistentDetachedHead);
    }

    if errors.is_empty() {
        VerifyResult::success()
    } else {
        VerifyResult::failure(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{BranchName, Color, CommitId, FileName, UtcTimestamp};
    use crate::store::state::{Branch, Commit, FileEntry};

    fn id(s: &str) -> CommitId {
        CommitId::new(s).unwrap()
    }

    fn commit(hex: &str, parents: &[&str], is_merge: bool) -> Commit {
        Commit {
            id: id(hex),
            message: String::new(),
            author: "User".into(),
            timestamp: UtcTimestamp::now(),
            branch: None,
            parents: parents.iter().map(|p| id(p)).collect(),
            changes: vec![],
            is_merge,
        }
    }

    fn branch(name: &str, commit: Option<&str>) -> Branch {
        Branch {
            name: BranchName::new(name).unwrap(),
            commit: commit.map(id),
            color: Color::new("#10B981").unwrap(),
        }
    }

    #[test]
    fn empty_snapshot_passes() {
        assert!(verify(&Snapshot::new()).ok);
    }

    #[test]
    fn dangling_branch_pointer_reported() {
        let snapshot = Snapshot {
            commits: vec![commit("aaaa", &[], false)],
            branches: vec![branch("main", Some("bbbb"))],
            ..Snapshot::new()
        };
        let result = verify(&snapshot);
        assert!(!result.ok);
        assert_eq!(
            result.errors,
            vec![VerifyError::DanglingBranch {
                branch: "main".into(),
                commit: "bbbb".into()
            }]
        );
    }

    #[test]
    fn merge_shape_enforced() {
        let snapshot = Snapshot {
            commits: vec![commit("aaaa", &[], false), commit("bbbb", &["aaaa"], true)],
            ..Snapshot::new()
        };
        assert!(matches!(
            verify(&snapshot).errors.as_slice(),
            [VerifyError::ParentCountMismatch { count: 1, .. }]
        ));
    }

    #[test]
    fn duplicate_ids_and_dangling_parents() {
        let snapshot = Snapshot {
            commits: vec![commit("aaaa", &[], false), commit("aaaa", &["cccc"], false)],
            ..Snapshot::new()
        };
        let errors = verify(&snapshot).errors;
        assert!(errors.contains(&VerifyError::DuplicateCommit("aaaa".into())));
        assert!(errors.contains(&VerifyError::DanglingParent {
            commit: "aaaa".into(),
            parent: "cccc".into()
        }));
    }

    #[test]
    fn file_in_both_areas_reported() {
        let name = FileName::new("a.txt").unwrap();
        let snapshot = Snapshot {
            staged: vec![FileEntry::untracked(name.clone())],
            working_dir: vec![FileEntry::untracked(name)],
            ..Snapshot::new()
        };
        assert_eq!(
            verify(&snapshot).errors,
            vec![VerifyError::FileInBothAreas("a.txt".into())]
        );
    }

    #[test]
    fn detached_without_head_reported() {
        let snapshot = Snapshot {
            detached_head: true,
            ..Snapshot::new()
        };
        assert_eq!(
            verify(&snapshot).errors,
            vec![VerifyError::InconsistentDetachedHead]
        );
    }
}
