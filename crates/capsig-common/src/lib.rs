//! # CapSig Common
//!
//! Shared types and errors for the CapSig threshold gate.
//!
//! ## Core Types
//!
//! - [`SignerId`]: identity of a roster member authorized to vote
//! - [`CapValue`]: a candidate (or confirmed) maximum-cap value
//! - [`Tally`]: per-candidate-value vote record
//! - [`Status`]: the one-way `NotConfirmed` -> `Confirmed` latch
//!
//! ## Errors
//!
//! - [`LedgerError`]: precondition failures on sign/revoke/query calls
//! - [`CapSigError`]: unified error type for the workspace

pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{CapSigError, LedgerError, Result};
pub use types::{
    signer_id::SignerId,
    status::Status,
    tally::{CapValue, Tally, VoteEntry},
};

/// CapSig version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Smallest threshold a roster can be configured with
pub const MIN_THRESHOLD: u8 = 1;
