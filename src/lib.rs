//! gitsim - an in-memory Git simulator for learning version control
//!
//! gitsim keeps a whole repository in memory and drives it from a small
//! terminal dialect: `git init/add/commit/checkout/branch/merge/status/log/reset`
//! plus `touch`, `echo ... > file`, `clear`, and `help`. Nothing is written
//! to disk.
//!
//! # Architecture
//!
//! - [`store`] - Snapshot state and the pure `apply` reducer
//! - [`interpreter`] - Command lines to responses and store actions
//! - [`session`] - One terminal: snapshot, environment, command log
//! - [`core`] - Domain types, commit graph, verification, configuration
//! - [`cli`] - Command-line interface (REPL, batch run)
//! - [`ui`] - Output and logging
//!
//! # Correctness Invariants
//!
//! 1. Every state change is one `Action` applied by the reducer
//! 2. An inapplicable action leaves the snapshot unchanged
//! 3. Commits are never rewritten or removed, only hidden by moving refs
//! 4. A file is never both staged and in the working directory

pub mod cli;
pub mod core;
pub mod interpreter;
pub mod session;
pub mod store;
pub mod ui;
