//! core
//!
//! Domain types and pure helpers shared by the store and the interpreter.
//!
//! # Modules
//!
//! - [`types`] - Strong types: CommitId, BranchName, FileName, etc.
//! - [`ids`] - Commit id generation
//! - [`graph`] - Commit DAG queries
//! - [`verify`] - Snapshot invariant checks
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Strong typing keeps malformed names and ids out of the store
//! - Nothing in this module mutates a snapshot

pub mod config;
pub mod graph;
pub mod ids;
pub mod types;
pub mod verify;
