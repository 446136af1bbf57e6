//! store::env
//!
//! Where the reducer gets the values it cannot compute from its inputs.
//!
//! Commit ids and timestamps are not functions of the previous snapshot,
//! so the reducer draws them from an [`Environment`]. Production sessions
//! use [`SystemEnvironment`]; tests and reproducible demos use
//! [`FixedEnvironment`].

use crate::core::config::RepoSettings;
use crate::core::ids;
use crate::core::types::{CommitId, UtcTimestamp};

use super::state::Snapshot;

/// Source of ids, time, and repository settings for the reducer.
pub trait Environment {
    /// A commit id not yet used in `snapshot`.
    fn next_commit_id(&mut self, snapshot: &Snapshot) -> CommitId;

    /// The current time.
    fn now(&self) -> UtcTimestamp;

    /// Settings that shape new repositories and commits.
    fn settings(&self) -> &RepoSettings;
}

/// Random ids and wall-clock time.
#[derive(Debug, Clone, Default)]
pub struct SystemEnvironment {
    settings: RepoSettings,
}

impl SystemEnvironment {
    pub fn new(settings: RepoSettings) -> Self {
        Self { settings }
    }
}

impl Environment for SystemEnvironment {
    fn next_commit_id(&mut self, snapshot: &Snapshot) -> CommitId {
        ids::unique_commit_id(ids::random_commit_id, |id| snapshot.commit(id).is_some())
    }

    fn now(&self) -> UtcTimestamp {
        UtcTimestamp::now()
    }

    fn settings(&self) -> &RepoSettings {
        &self.settings
    }
}

/// Sequential ids and a frozen clock.
#[derive(Debug, Clone)]
pub struct FixedEnvironment {
    settings: RepoSettings,
    counter: u64,
    time: UtcTimestamp,
}

impl FixedEnvironment {
    /// Sequential ids starting at `0000001`, time frozen at creation.
    pub fn new(settings: RepoSettings) -> Self {
        Self::at(settings, UtcTimestamp::now())
    }

    /// Sequential ids with the clock frozen at `time`.
    pub fn at(settings: RepoSettings, time: UtcTimestamp) -> Self {
        Self {
            settings,
            counter: 0,
            time,
        }
    }
}

impl Default for FixedEnvironment {
    fn default() -> Self {
        Self::new(RepoSettings::default())
    }
}

impl Environment for FixedEnvironment {
    fn next_commit_id(&mut self, snapshot: &Snapshot) -> CommitId {
        let counter = &mut self.counter;
        ids::unique_commit_id(
            || {
                *counter += 1;
                ids::sequential_commit_id(*counter)
            },
            |id| snapshot.commit(id).is_some(),
        )
    }

    fn now(&self) -> UtcTimestamp {
        self.time
    }

    fn settings(&self) -> &RepoSettings {
        &self.settings
    }
}
