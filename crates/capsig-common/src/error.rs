//! Error types for the CapSig threshold gate
//!
//! Provides a unified error type and the ledger's precondition taxonomy.
//! Every variant corresponds to a rejected call that left the ledger
//! untouched; there are no partial mutations to report.

use crate::types::signer_id::SignerId;
use crate::types::tally::CapValue;
use thiserror::Error;

/// Result type alias using CapSigError
pub type Result<T> = std::result::Result<T, CapSigError>;

/// Unified error type for CapSig operations
#[derive(Debug, Error)]
pub enum CapSigError {
    // Ledger precondition failures
    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    // Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Precondition failures raised by the voting ledger
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Not a signer: {signer}")]
    NotASigner { signer: SignerId },

    #[error("Signer {signer} already signed value {value}")]
    AlreadySigned { signer: SignerId, value: CapValue },

    #[error("Signer {signer} has no active sign for value {value}")]
    NotYetSigned { signer: SignerId, value: CapValue },

    #[error("No value has been confirmed yet")]
    NotYetConfirmed,

    #[error("Ledger already confirmed with max cap {max_cap}")]
    AlreadyConfirmed { max_cap: CapValue },

    #[error("Signer roster must not be empty")]
    EmptyRoster,

    #[error("Duplicate signer in roster: {signer}")]
    DuplicateSigner { signer: SignerId },

    #[error("Invalid threshold: {threshold} of {signers} signers")]
    InvalidThreshold { threshold: u8, signers: usize },
}

// Implement From for common external error types
impl From<serde_json::Error> for CapSigError {
    fn from(err: serde_json::Error) -> Self {
        CapSigError::Serialization(err.to_string())
    }
}

impl From<anyhow::Error> for CapSigError {
    fn from(err: anyhow::Error) -> Self {
        CapSigError::Internal(err.to_string())
    }
}
