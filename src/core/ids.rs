//! core::ids
//!
//! Commit identifier generation.
//!
//! Simulated commits have no content to hash, so identifiers are derived
//! from fresh randomness: a v4 UUID is hashed with SHA-256 and the first
//! [`CommitId::SHORT_LEN`] hex characters are kept. Callers re-roll on
//! collision, which keeps ids unique within a session.

use sha2::{Digest, Sha256};
use uuid::Uuid;

use super::types::CommitId;

/// Produce a random 7-character commit id.
pub fn random_commit_id() -> CommitId {
    let digest = Sha256::digest(Uuid::new_v4().as_bytes());
    let mut hex = hex::encode(digest);
    hex.truncate(CommitId::SHORT_LEN);
    CommitId::from_generated(hex)
}

/// Produce the `n`th sequential commit id (`0000001`, `0000002`, ...).
///
/// Deterministic ids make transcripts reproducible in tests and demos.
pub fn sequential_commit_id(n: u64) -> CommitId {
    CommitId::from_generated(format!("{:07x}", n))
}

/// Generate ids with `next` until one is not already `taken`.
pub fn unique_commit_id(
    mut next: impl FnMut() -> CommitId,
    taken: impl Fn(&CommitId) -> bool,
) -> CommitId {
    loop {
        let candidate = next();
        if !taken(&candidate) {
            return candidate;
        }
        tracing::debug!(id = %candidate, "commit id collision, re-rolling");
    }
}
