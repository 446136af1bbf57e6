//! session
//!
//! One simulated terminal: a snapshot, the environment it draws ids and
//! time from, and the command log policy.
//!
//! # Example
//!
//! ```
//! use gitsim::session::RepositorySession;
//!
//! let mut session = RepositorySession::deterministic();
//! assert_eq!(session.prompt(), "user@computer:~$ ");
//!
//! let response = session.execute("git init").unwrap();
//! assert!(!response.is_error);
//! assert_eq!(session.prompt(), "user@repo:(main)$ ");
//! ```

use tracing::{debug, debug_span};

use crate::core::config::{Config, RepoSettings, DEFAULT_HISTORY_LIMIT};
use crate::core::graph::CommitGraph;
use crate::core::types::{BranchName, Color};
use crate::core::verify::{self, VerifyResult};
use crate::interpreter::{self, render};
use crate::store::{
    apply, Action, Commit, Environment, FixedEnvironment, HistoryEntry, Snapshot,
    SystemEnvironment,
};

/// What the terminal shows after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// The trimmed command line.
    pub command: String,
    pub output: String,
    pub is_error: bool,
}

/// Drawing position of one branch in a commit graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchLane<'a> {
    pub branch: &'a BranchName,
    pub lane: usize,
    pub color: &'a Color,
}

/// An owned repository plus the environment that feeds its reducer.
pub struct RepositorySession {
    snapshot: Snapshot,
    env: Box<dyn Environment>,
    history_limit: usize,
}

impl RepositorySession {
    /// Create a session over a pristine snapshot.
    pub fn new(env: Box<dyn Environment>, history_limit: usize) -> Self {
        Self {
            snapshot: Snapshot::new(),
            env,
            history_limit: history_limit.max(1),
        }
    }

    /// Create a session shaped by loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        let settings = config.repo_settings();
        let env: Box<dyn Environment> = if config.deterministic_ids() {
            Box::new(FixedEnvironment::new(settings))
        } else {
            Box::new(SystemEnvironment::new(settings))
        };
        Self::new(env, config.history_limit())
    }

    /// A session with default settings and sequential commit ids.
    pub fn deterministic() -> Self {
        Self::new(
            Box::new(FixedEnvironment::new(RepoSettings::default())),
            DEFAULT_HISTORY_LIMIT,
        )
    }

    /// Run one command line.
    ///
    /// Returns `None` for blank input, which changes nothing. Otherwise the
    /// planned actions are applied once each, in order, and the line is
    /// appended to the command log unless the command suppresses it.
    pub fn execute(&mut self, line: &str) -> Option<Response> {
        let command = line.trim();
        let _span = debug_span!("execute", command).entered();

        let plan = interpreter::interpret(&self.snapshot, command)?;
        for action in &plan.actions {
            self.dispatch(action);
        }

        if plan.record {
            self.dispatch(&Action::RecordHistory {
                command: command.to_string(),
                output: plan.response.clone(),
                error: plan.is_error,
            });
        }

        debug!(
            actions = plan.actions.len(),
            error = plan.is_error,
            "command finished"
        );

        Some(Response {
            command: command.to_string(),
            output: plan.response,
            is_error: plan.is_error,
        })
    }

    /// Apply a single action to the snapshot.
    pub fn dispatch(&mut self, action: &Action) {
        self.snapshot = apply(&self.snapshot, action, self.env.as_mut());
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// The shell prompt for the current state.
    pub fn prompt(&self) -> String {
        render::prompt(&self.snapshot)
    }

    pub fn history_limit(&self) -> usize {
        self.history_limit
    }

    /// The most recent commits, oldest first, capped at the history limit.
    pub fn recent_commits(&self) -> &[Commit] {
        self.snapshot.recent_commits(self.history_limit)
    }

    /// The most recent command log entries, oldest first.
    pub fn recent_history(&self) -> &[HistoryEntry] {
        self.snapshot.recent_history(self.history_limit)
    }

    /// Commits reachable from HEAD through any parent, in creation order.
    ///
    /// Graph renderers use this to highlight the checked-out history,
    /// including commits merged in from other branches.
    pub fn head_ancestry(&self) -> Vec<&Commit> {
        let Some(head) = self.snapshot.head.as_ref() else {
            return Vec::new();
        };
        let reachable = CommitGraph::from_commits(&self.snapshot.commits).ancestors(head);
        self.snapshot
            .commits
            .iter()
            .filter(|c| reachable.contains(&c.id))
            .collect()
    }

    /// Lane per branch in creation order.
    pub fn branch_lanes(&self) -> Vec<BranchLane<'_>> {
        self.snapshot
            .branches
            .iter()
            .enumerate()
            .map(|(lane, b)| BranchLane {
                branch: &b.name,
                lane,
                color: &b.color,
            })
            .collect()
    }

    /// Lane a commit is drawn in: its branch's lane, or 0.
    pub fn commit_lane(&self, commit: &Commit) -> usize {
        commit
            .branch
            .as_ref()
            .and_then(|name| self.snapshot.branches.iter().position(|b| &b.name == name))
            .unwrap_or(0)
    }

    /// Check the snapshot invariants.
    pub fn verify(&self) -> VerifyResult {
        verify::verify(&self.snapshot)
    }

    /// The snapshot as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.snapshot)
    }
}

impl Default for RepositorySession {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with(lines: &[&str]) -> RepositorySession {
        let mut session = RepositorySession::deterministic();
        for line in lines {
            session.execute(line);
        }
        session
    }

    #[test]
    fn blank_input_changes_nothing() {
        let mut session = RepositorySession::deterministic();
        assert!(session.execute("   ").is_none());
        assert_eq!(session.snapshot(), &Snapshot::new());
    }

    #[test]
    fn every_command_is_logged_once() {
        let session = session_with(&["git status", "git init", "  touch a.txt  "]);
        let history = &session.snapshot().history;
        assert_eq!(history.len(), 3);
        assert!(history[0].error);
        assert_eq!(history[2].command, "touch a.txt");
        assert_eq!(history[2].output, "Created file: a.txt");
    }

    #[test]
    fn clear_wipes_log_and_repository() {
        let mut session = session_with(&["git init", "touch a.txt"]);
        let response = session.execute("clear").unwrap();
        assert_eq!(response.output, "");
        assert_eq!(session.snapshot(), &Snapshot::new());
    }

    #[test]
    fn checkout_new_branch_applies_each_action_once() {
        let session = session_with(&[
            "git init",
            "git add .",
            "git commit -m one",
            "git checkout -b feature",
        ]);
        let snapshot = session.snapshot();
        assert_eq!(snapshot.branches.len(), 2);
        assert!(snapshot.is_current("feature"));
        assert_eq!(session.prompt(), "user@repo:(feature)$ ");
    }

    #[test]
    fn lanes_follow_branch_order() {
        let session = session_with(&[
            "git init",
            "git add .",
            "git commit -m one",
            "git checkout -b feature",
            "touch f.txt",
            "git add f.txt",
            "git commit -m two",
        ]);
        let lanes = session.branch_lanes();
        assert_eq!(lanes.len(), 2);
        assert_eq!(lanes[1].branch.as_str(), "feature");
        assert_eq!(lanes[1].lane, 1);

        let last = session.snapshot().commits.last().unwrap();
        assert_eq!(session.commit_lane(last), 1);
        assert!(session.verify().ok);
    }

    #[test]
    fn head_ancestry_includes_merged_history() {
        let mut session = session_with(&[
            "git init",
            "git add .",
            "git commit -m one",
            "git checkout -b feature",
            "touch f.txt",
            "git add f.txt",
            "git commit -m side",
            "git checkout main",
            "touch m.txt",
            "git add m.txt",
            "git commit -m mainline",
        ]);
        let ids = |s: &RepositorySession| {
            s.head_ancestry()
                .iter()
                .map(|c| c.id.abbrev().to_string())
                .collect::<Vec<_>>()
        };
        assert_eq!(ids(&session), vec!["0000001", "0000003"]);

        session.execute("git merge feature");
        assert_eq!(
            ids(&session),
            vec!["0000001", "0000002", "0000003", "0000004"]
        );
    }

    #[test]
    fn head_ancestry_is_empty_without_commits() {
        let session = session_with(&["git init"]);
        assert!(session.head_ancestry().is_empty());
    }

    #[test]
    fn recent_history_is_capped() {
        let mut session = RepositorySession::new(Box::new(FixedEnvironment::default()), 2);
        for line in ["help", "help", "help"] {
            session.execute(line);
        }
        assert_eq!(session.recent_history().len(), 2);
        assert_eq!(session.snapshot().history.len(), 3);
    }

    #[test]
    fn empty_palette_session_initializes() {
        let settings = RepoSettings {
            palette: vec![],
            ..RepoSettings::default()
        };
        let mut session = RepositorySession::new(
            Box::new(FixedEnvironment::new(settings)),
            DEFAULT_HISTORY_LIMIT,
        );
        let response = session.execute("git init").unwrap();
        assert!(!response.is_error);
        assert!(session.verify().ok);
    }

    #[test]
    fn json_contains_snapshot_fields() {
        let session = session_with(&["git init"]);
        let json = session.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["initialized"], true);
        assert_eq!(value["current_branch"], "main");
        assert_eq!(value["working_dir"][0]["status"], "untracked");
    }
}
