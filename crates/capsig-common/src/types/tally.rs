//! Tally - per-candidate-value vote record
//!
//! Each candidate value voted on gets its own `Tally`, created lazily on
//! the first sign and kept for the lifetime of the ledger (no pruning).
//! The affirmative count is derived from the voter map so it can never
//! drift from the set of active flags.

use crate::types::signer_id::SignerId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A candidate (or confirmed) maximum-cap value
///
/// The gate only ever compares and stores these; integer semantics match
/// the original ledger, which rejects fractional amounts.
pub type CapValue = u128;

/// A single recorded vote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteEntry {
    /// When the vote was cast (Unix milliseconds)
    pub signed_at: i64,
}

/// Vote record for one candidate value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Tally {
    /// Signers with an active vote, keyed by identity
    voters: HashMap<SignerId, VoteEntry>,
}

impl Tally {
    /// Empty tally for a value seen for the first time
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of active affirmative votes
    #[inline]
    pub fn count(&self) -> u8 {
        self.voters.len() as u8
    }

    /// Whether this signer currently has an active vote
    pub fn has_signed(&self, signer: &SignerId) -> bool {
        self.voters.contains_key(signer)
    }

    /// Record a vote. Returns false if the signer already has one.
    pub fn record(&mut self, signer: SignerId) -> bool {
        if self.voters.contains_key(&signer) {
            return false;
        }
        self.voters.insert(
            signer,
            VoteEntry {
                signed_at: chrono::Utc::now().timestamp_millis(),
            },
        );
        true
    }

    /// Clear a vote. Returns false if the signer had none to clear.
    pub fn clear(&mut self, signer: &SignerId) -> bool {
        self.voters.remove(signer).is_some()
    }

    /// Identities with an active vote, in unspecified order
    pub fn voters(&self) -> impl Iterator<Item = &SignerId> {
        self.voters.keys()
    }
}
