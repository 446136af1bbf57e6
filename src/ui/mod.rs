//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`output`] - Transcript and message printing
//! - [`logging`] - Diagnostic logging setup
//!
//! # Design
//!
//! All printing goes through this module so quiet mode and the
//! stdout/stderr split are handled in one place.

pub mod logging;
pub mod output;
