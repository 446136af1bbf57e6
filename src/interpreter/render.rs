//! interpreter::render
//!
//! Read-only textual reports over a snapshot: status, log, branch list,
//! the help screen, and the shell prompt.

use std::collections::HashSet;

use crate::core::graph::CommitGraph;
use crate::core::types::FileStatus;
use crate::store::state::{Commit, Snapshot};

/// Fixed `help` output.
pub const HELP: &str = "\
Available commands:
git init              - Initialize a new Git repository
git add <file>        - Add file to staging area
git add .             - Add all files to staging area
git commit -m \"msg\"   - Commit staged changes
git checkout <branch> - Switch branches
git checkout -b <br>  - Create and switch to new branch
git branch [name]     - List branches or create new branch
git merge <branch>    - Merge a branch
git status            - Show repository status
git log               - Show commit history
git reset --hard HEAD~1 - Reset to previous commit
touch <file>          - Create a new file
echo \"text\" > <file>  - Modify a file
clear                 - Clear terminal and reset
help                  - Show this help message";

/// Whether HEAD should be shown as a bare commit rather than a branch.
///
/// A commit made while detached clears the store's detached flag but leaves
/// no current branch, so both conditions count.
pub fn shows_detached(snapshot: &Snapshot) -> bool {
    snapshot.detached_head || snapshot.current_branch.is_none()
}

/// Branch label used in commit summaries.
pub fn head_label(snapshot: &Snapshot) -> String {
    match &snapshot.current_branch {
        Some(branch) if !shows_detached(snapshot) => branch.to_string(),
        _ => "detached HEAD".to_string(),
    }
}

/// Output of `git status`.
pub fn status(snapshot: &Snapshot) -> String {
    let header = if shows_detached(snapshot) {
        format!("HEAD detached at {}", snapshot.head_abbrev())
    } else {
        format!("On branch {}", head_label(snapshot))
    };

    let mut sections = Vec::new();

    if !snapshot.staged.is_empty() {
        let lines: Vec<String> = snapshot
            .staged
            .iter()
            .map(|f| format!("  {}: {}", f.status, f.name))
            .collect();
        sections.push(format!("Changes to be committed:\n{}", lines.join("\n")));
    }

    let unstaged: Vec<String> = snapshot
        .working_dir
        .iter()
        .filter(|f| matches!(f.status, FileStatus::Modified | FileStatus::Deleted))
        .map(|f| format!("  {}: {}", f.status, f.name))
        .collect();
    if !unstaged.is_empty() {
        sections.push(format!(
            "Changes not staged for commit:\n{}",
            unstaged.join("\n")
        ));
    }

    let untracked: Vec<String> = snapshot
        .working_dir
        .iter()
        .filter(|f| matches!(f.status, FileStatus::Untracked | FileStatus::Added))
        .map(|f| format!("  {}", f.name))
        .collect();
    if !untracked.is_empty() {
        sections.push(format!("Untracked files:\n{}", untracked.join("\n")));
    }

    if sections.is_empty() {
        format!("{}\n\nnothing to commit, working tree clean", header)
    } else {
        format!("{}\n\n{}", header, sections.join("\n"))
    }
}

/// Output of `git log`, most recent first.
///
/// With a detached HEAD only the mainline chain from HEAD is listed.
pub fn log(snapshot: &Snapshot) -> String {
    let visible: Vec<&Commit> = if shows_detached(snapshot) {
        let graph = CommitGraph::from_commits(&snapshot.commits);
        let reachable: HashSet<_> = snapshot
            .head
            .as_ref()
            .map(|head| graph.first_parent_chain(head))
            .unwrap_or_default()
            .into_iter()
            .collect();
        snapshot
            .commits
            .iter()
            .filter(|c| reachable.contains(&c.id))
            .collect()
    } else {
        snapshot.commits.iter().collect()
    };

    visible
        .iter()
        .rev()
        .map(|c| log_entry(c))
        .collect::<Vec<_>>()
        .join("\n")
}

fn log_entry(commit: &Commit) -> String {
    let mut entry = format!("commit {}\n", commit.id);
    if commit.is_merge {
        let parents: Vec<&str> = commit.parents.iter().map(|p| p.abbrev()).collect();
        entry.push_str(&format!("Merge: {}\n", parents.join(" ")));
    }
    entry.push_str(&format!(
        "Author: {}\nDate:   {}\n\n    {}\n",
        commit.author,
        commit.timestamp.git_date(),
        commit.message
    ));
    entry
}

/// Output of `git branch` with no arguments.
pub fn branch_list(snapshot: &Snapshot) -> String {
    let mut lines = Vec::with_capacity(snapshot.branches.len() + 1);
    if shows_detached(snapshot) {
        lines.push(format!("* (HEAD detached at {})", snapshot.head_abbrev()));
    }
    for branch in &snapshot.branches {
        let marker = if snapshot.is_current(branch.name.as_str()) {
            "* "
        } else {
            "  "
        };
        lines.push(format!("{}{}", marker, branch.name));
    }
    lines.join("\n")
}

/// The shell prompt shown before each command.
pub fn prompt(snapshot: &Snapshot) -> String {
    if !snapshot.initialized {
        return "user@computer:~$ ".to_string();
    }
    match &snapshot.current_branch {
        Some(branch) if !shows_detached(snapshot) => format!("user@repo:({})$ ", branch),
        _ => format!("user@repo:(({}))$ ", snapshot.head_abbrev()),
    }
}
