//! Ledger confirmation status
//!
//! The status is an explicit one-way latch: `NotConfirmed` at construction,
//! flipped to `Confirmed` exactly once when a candidate value reaches the
//! required confirmations. It is stored as its own field rather than
//! inferred from the cap, which is ambiguous when the initial cap happens
//! to equal a later confirmed value.

use serde::{Deserialize, Serialize};

/// Confirmation state of the voting ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// No candidate value has reached threshold yet
    NotConfirmed,
    /// A candidate value reached threshold; the cap is final
    Confirmed,
}

impl Status {
    /// Whether the ledger has finalized a cap
    #[inline]
    pub fn is_confirmed(&self) -> bool {
        matches!(self, Status::Confirmed)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::NotConfirmed => write!(f, "not_confirmed"),
            Status::Confirmed => write!(f, "confirmed"),
        }
    }
}
