//! store::reducer
//!
//! The pure transition function over snapshots.
//!
//! [`apply`] never fails. An action that does not fit the current state
//! (unknown branch, empty staging area, reset past the root) leaves the
//! snapshot unchanged; the interpreter validates beforehand so it can say
//! *why* nothing happened.

use tracing::debug;

use crate::core::types::{BranchName, CommitId, FileName, FileStatus};

use super::action::{Action, Pathspec, ResetMode, RESET_TARGET_PARENT};
use super::env::Environment;
use super::state::{Branch, Commit, FileEntry, HistoryEntry, Snapshot};

/// Apply one action, producing the next snapshot.
pub fn apply(snapshot: &Snapshot, action: &Action, env: &mut dyn Environment) -> Snapshot {
    let next = match action {
        Action::Initialize => Some(initialize(snapshot, env)),
        Action::CreateFile { name } => create_file(snapshot, name),
        Action::ModifyFile { name } => modify_file(snapshot, name),
        Action::Stage { paths } => stage(snapshot, paths),
        Action::Commit { message } => commit(snapshot, message, env),
        Action::Checkout { branch } => checkout(snapshot, branch),
        Action::CheckoutCommit { prefix } => checkout_commit(snapshot, prefix),
        Action::CreateBranch { name, from } => create_branch(snapshot, name, from.as_ref(), env),
        Action::Merge { branch } => merge(snapshot, branch, env),
        Action::Reset { mode, target } => reset(snapshot, *mode, target),
        Action::RecordHistory {
            command,
            output,
            error,
        } => Some(record_history(snapshot, command, output, *error, env)),
        Action::ResetAll => Some(Snapshot::new()),
    };

    match next {
        Some(next) => {
            debug!(action = action.kind(), "applied");
            next
        }
        None => {
            debug!(action = action.kind(), "no-op");
            snapshot.clone()
        }
    }
}

fn initialize(snapshot: &Snapshot, env: &dyn Environment) -> Snapshot {
    let settings = env.settings();
    Snapshot {
        initialized: true,
        commits: Vec::new(),
        branches: vec![Branch {
            name: settings.default_branch.clone(),
            commit: None,
            color: settings.color_for(0),
        }],
        current_branch: Some(settings.default_branch.clone()),
        head: None,
        detached_head: false,
        staged: Vec::new(),
        working_dir: vec![FileEntry::untracked(settings.seed_file.clone())],
        history: snapshot.history.clone(),
    }
}

fn create_file(snapshot: &Snapshot, name: &FileName) -> Option<Snapshot> {
    let exists = snapshot.working_file(name.as_str()).is_some()
        || snapshot.staged_file(name.as_str()).is_some();
    if exists {
        return None;
    }

    let mut next = snapshot.clone();
    next.working_dir.push(FileEntry::untracked(name.clone()));
    Some(next)
}

fn modify_file(snapshot: &Snapshot, name: &FileName) -> Option<Snapshot> {
    let index = snapshot.working_dir.iter().position(|f| &f.name == name)?;

    let mut next = snapshot.clone();
    next.working_dir[index].status = FileStatus::Modified;
    Some(next)
}

fn stage(snapshot: &Snapshot, paths: &Pathspec) -> Option<Snapshot> {
    let names: Vec<FileName> = match paths {
        Pathspec::All => snapshot.working_dir.iter().map(|f| f.name.clone()).collect(),
        Pathspec::Files(files) => files.clone(),
    };

    let mut next = snapshot.clone();
    let mut moved = false;
    for name in &names {
        let Some(index) = next.working_dir.iter().position(|f| &f.name == name) else {
            continue;
        };
        let entry = next.working_dir.remove(index);
        next.staged.retain(|f| f.name != entry.name);
        next.staged
            .push(FileEntry::new(entry.name, entry.status.staged()));
        moved = true;
    }

    moved.then_some(next)
}

fn commit(snapshot: &Snapshot, message: &str, env: &mut dyn Environment) -> Option<Snapshot> {
    if snapshot.staged.is_empty() {
        return None;
    }

    let id = env.next_commit_id(snapshot);
    let branch = attached_branch(snapshot);
    let new_commit = Commit {
        id: id.clone(),
        message: message.to_string(),
        author: env.settings().author.clone(),
        timestamp: env.now(),
        branch: branch.clone(),
        parents: snapshot.head.iter().cloned().collect(),
        changes: snapshot.staged.clone(),
        is_merge: false,
    };

    let mut next = snapshot.clone();
    next.commits.push(new_commit);
    next.head = Some(id.clone());
    next.staged.clear();
    next.detached_head = false;
    advance_branch(&mut next, branch.as_ref(), id);
    Some(next)
}

fn checkout(snapshot: &Snapshot, name: &BranchName) -> Option<Snapshot> {
    let target = snapshot.branch(name.as_str())?;

    let mut next = snapshot.clone();
    next.head = target.commit.clone();
    next.current_branch = Some(name.clone());
    next.detached_head = false;
    Some(next)
}

fn checkout_commit(snapshot: &Snapshot, prefix: &str) -> Option<Snapshot> {
    let target = snapshot.resolve_prefix(prefix)?;

    let mut next = snapshot.clone();
    next.head = Some(target.id.clone());
    next.detached_head = true;
    next.current_branch = None;
    Some(next)
}

fn create_branch(
    snapshot: &Snapshot,
    name: &BranchName,
    from: Option<&CommitId>,
    env: &dyn Environment,
) -> Option<Snapshot> {
    if snapshot.branch(name.as_str()).is_some() {
        return None;
    }
    let start = match from {
        Some(id) => Some(snapshot.commit(id)?.id.clone()),
        None => snapshot.head.clone(),
    };

    let mut next = snapshot.clone();
    next.branches.push(Branch {
        name: name.clone(),
        commit: start,
        color: env.settings().color_for(snapshot.branches.len()),
    });
    Some(next)
}

fn merge(snapshot: &Snapshot, name: &BranchName, env: &mut dyn Environment) -> Option<Snapshot> {
    let source = snapshot.branch(name.as_str())?;
    if snapshot.current_branch.as_ref() == Some(name) {
        return None;
    }
    let mainline = snapshot.head.clone()?;
    let theirs = source.commit.clone()?;

    let id = env.next_commit_id(snapshot);
    let branch = attached_branch(snapshot);
    let into = branch.as_ref().map(BranchName::as_str).unwrap_or("HEAD");
    let merge_commit = Commit {
        id: id.clone(),
        message: format!("Merge branch '{}' into {}", name, into),
        author: env.settings().author.clone(),
        timestamp: env.now(),
        branch: branch.clone(),
        parents: vec![mainline, theirs],
        changes: Vec::new(),
        is_merge: true,
    };

    let mut next = snapshot.clone();
    next.commits.push(merge_commit);
    next.head = Some(id.clone());
    advance_branch(&mut next, branch.as_ref(), id);
    Some(next)
}

fn reset(snapshot: &Snapshot, mode: ResetMode, target: &str) -> Option<Snapshot> {
    if target != RESET_TARGET_PARENT {
        return None;
    }
    let parent = snapshot.head_commit()?.parent()?.clone();
    let branch = attached_branch(snapshot);

    let mut next = snapshot.clone();
    next.head = Some(parent.clone());
    advance_branch(&mut next, branch.as_ref(), parent);
    if mode == ResetMode::Hard {
        next.staged.clear();
        next.working_dir.clear();
    }
    Some(next)
}

fn record_history(
    snapshot: &Snapshot,
    command: &str,
    output: &str,
    error: bool,
    env: &dyn Environment,
) -> Snapshot {
    let mut next = snapshot.clone();
    next.history.push(HistoryEntry {
        command: command.to_string(),
        output: output.to_string(),
        error,
        timestamp: env.now(),
    });
    next
}

/// The branch HEAD is attached to, if any.
fn attached_branch(snapshot: &Snapshot) -> Option<BranchName> {
    if snapshot.detached_head {
        None
    } else {
        snapshot.current_branch.clone()
    }
}

/// Point `branch` (when present) at `id`.
fn advance_branch(snapshot: &mut Snapshot, branch: Option<&BranchName>, id: CommitId) {
    if let Some(name) = branch {
        if let Some(b) = snapshot.branches.iter_mut().find(|b| &b.name == name) {
            b.commit = Some(id);
        }
    }
}
