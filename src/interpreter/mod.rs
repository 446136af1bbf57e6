//! interpreter
//!
//! The command interpreter: turns one terminal line into a response and
//! the store actions that realize it.
//!
//! # Modules
//!
//! - [`parse`] - Tokens to a closed [`Command`](parse::Command) enum
//! - [`error`] - [`CommandError`], whose text is what the terminal prints
//! - [`render`] - Status, log, branch list, help, and prompt text
//! - [`exec`] - Validation and action planning
//!
//! # Invariants
//!
//! - Interpretation reads a snapshot and never mutates it
//! - Every failure is a value; nothing here panics on user input

pub mod error;
pub mod exec;
pub mod parse;
pub mod render;

pub use error::CommandError;
pub use exec::{interpret, Interpretation};
