//! CapVotingLedger - threshold vote state machine
//!
//! A fixed signer roster votes on candidate maximum-cap values. Each
//! candidate value is tallied independently; the first value to collect
//! `threshold` distinct votes becomes the confirmed cap and the ledger
//! latches to `Confirmed` permanently. Votes can be revoked before (or
//! after) confirmation, but revocation never moves the cap or the latch.
//!
//! Every rejected call leaves the ledger exactly as it was.

use capsig_common::{CapValue, LedgerError, SignerId, Status, Tally};
use std::collections::{HashMap, HashSet};

/// Threshold vote state machine over candidate cap values
///
/// Roster and threshold are fixed at construction; the only mutations are
/// vote flags, their derived counts, and the single finalization that sets
/// `max_cap`.
#[derive(Debug, Clone)]
pub struct CapVotingLedger {
    /// Roster of authorized signers, immutable after construction
    signers: HashSet<SignerId>,

    /// Distinct votes required on one value to finalize it
    threshold: u8,

    /// Confirmed cap; holds the initial value until finalization
    max_cap: CapValue,

    /// Per-candidate-value tallies, created lazily on first vote
    tallies: HashMap<CapValue, Tally>,

    /// One-way confirmation latch
    status: Status,
}

impl CapVotingLedger {
    /// Create a ledger with a fixed roster, threshold, and initial cap
    ///
    /// Fails fast on an empty roster, a duplicate signer, or a threshold
    /// outside `1..=|signers|`.
    pub fn new(
        signers: Vec<SignerId>,
        threshold: u8,
        initial_cap: CapValue,
    ) -> Result<Self, LedgerError> {
        if signers.is_empty() {
            return Err(LedgerError::EmptyRoster);
        }

        let mut roster = HashSet::with_capacity(signers.len());
        for signer in signers {
            if !roster.insert(signer.clone()) {
                return Err(LedgerError::DuplicateSigner { signer });
            }
        }

        if threshold == 0 || threshold as usize > roster.len() {
            return Err(LedgerError::InvalidThreshold {
                threshold,
                signers: roster.len(),
            });
        }

        Ok(Self {
            signers: roster,
            threshold,
            max_cap: initial_cap,
            tallies: HashMap::new(),
            status: Status::NotConfirmed,
        })
    }

    /// Cast a vote for a candidate value
    ///
    /// Finalizes when the value's tally reaches threshold: `max_cap` is set
    /// to the value and the status latches to `Confirmed`. Once confirmed,
    /// further votes are rejected outright. Returns the post-call status.
    pub fn sign_value(
        &mut self,
        value: CapValue,
        signer: &SignerId,
    ) -> Result<Status, LedgerError> {
        if !self.is_signer(signer) {
            return Err(LedgerError::NotASigner {
                signer: signer.clone(),
            });
        }

        if self.status.is_confirmed() {
            return Err(LedgerError::AlreadyConfirmed {
                max_cap: self.max_cap,
            });
        }

        let tally = self.tallies.entry(value).or_default();
        if !tally.record(signer.clone()) {
            return Err(LedgerError::AlreadySigned {
                signer: signer.clone(),
                value,
            });
        }

        if tally.count() >= self.threshold {
            self.max_cap = value;
            self.status = Status::Confirmed;
        }

        Ok(self.status)
    }

    /// Revoke an active vote for a candidate value
    ///
    /// Allowed after confirmation; the cap and the latch are untouched
    /// even when the revoked vote is one that triggered finalization.
    pub fn revoke_sign(&mut self, value: CapValue, signer: &SignerId) -> Result<(), LedgerError> {
        if !self.is_signer(signer) {
            return Err(LedgerError::NotASigner {
                signer: signer.clone(),
            });
        }

        let cleared = self
            .tallies
            .get_mut(&value)
            .is_some_and(|tally| tally.clear(signer));

        if !cleared {
            return Err(LedgerError::NotYetSigned {
                signer: signer.clone(),
                value,
            });
        }

        Ok(())
    }

    /// Whether `amount` meets or exceeds the confirmed cap
    ///
    /// Rejects with `NotYetConfirmed` until a value has been finalized.
    pub fn is_max_cap_reached(&self, amount: CapValue) -> Result<bool, LedgerError> {
        if !self.status.is_confirmed() {
            return Err(LedgerError::NotYetConfirmed);
        }
        Ok(amount >= self.max_cap)
    }

    /// The confirmed cap (initial value until finalization)
    #[inline]
    pub fn max_cap(&self) -> CapValue {
        self.max_cap
    }

    /// Distinct votes required to finalize a value
    #[inline]
    pub fn num_confirmations_required(&self) -> u8 {
        self.threshold
    }

    /// Whether an identity is in the roster
    pub fn is_signer(&self, signer: &SignerId) -> bool {
        self.signers.contains(signer)
    }

    /// Current affirmative-vote count for a value (0 if never voted on)
    pub fn sign_count(&self, value: CapValue) -> u8 {
        self.tallies.get(&value).map_or(0, Tally::count)
    }

    /// Whether a signer currently has an active vote for a value
    pub fn signs(&self, value: CapValue, signer: &SignerId) -> bool {
        self.tallies
            .get(&value)
            .is_some_and(|tally| tally.has_signed(signer))
    }

    /// Current confirmation status
    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Roster size
    pub fn signer_count(&self) -> usize {
        self.signers.len()
    }
}

impl std::fmt::Display for CapVotingLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "CapVotingLedger(signers={}, threshold={}, status={}, max_cap={})",
            self.signers.len(),
            self.threshold,
            self.status,
            self.max_cap
        )
    }
}
