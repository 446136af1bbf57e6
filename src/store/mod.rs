//! store
//!
//! The repository state store: the only owner and mutator of the
//! simulated repository.
//!
//! # Modules
//!
//! - [`state`] - Snapshot and entity types
//! - [`action`] - The closed set of state transitions
//! - [`reducer`] - The pure `apply(snapshot, action)` function
//! - [`env`] - Id, clock, and settings source for the reducer
//!
//! # Invariants
//!
//! - `apply` never panics and never fails; inapplicable actions are no-ops
//! - Commits are never removed except by `ResetAll`
//! - A file name is never both staged and in the working directory

pub mod action;
pub mod env;
pub mod reducer;
pub mod state;

pub use action::{Action, Pathspec, ResetMode};
pub use env::{Environment, FixedEnvironment, SystemEnvironment};
pub use reducer::apply;
pub use state::{Branch, Commit, FileEntry, HistoryEntry, Snapshot};
