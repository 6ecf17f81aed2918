//! # CapSig Ledger
//!
//! Threshold vote state machine and service for the CapSig gate.
//!
//! ## Components
//!
//! - **Ledger**: [`CapVotingLedger`], the per-value tally and one-way
//!   confirmation latch
//! - **Service**: [`CapVoteService`], the shared async handle with
//!   structured logging and event broadcast
//! - **Config**: [`CapSigConfig`], environment-driven deployment parameters
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │                     CapSig                       │
//! ├──────────────────────────────────────────────────┤
//! │  ┌────────────────┐      ┌─────────────────────┐ │
//! │  │ CapVoteService │──────│   CapVotingLedger   │ │
//! │  │ (RwLock+events)│      │ (tallies + latch)   │ │
//! │  └────────────────┘      └─────────────────────┘ │
//! └──────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod ledger;
pub mod service;

pub use config::CapSigConfig;
pub use ledger::CapVotingLedger;
pub use service::{CapVoteService, LedgerEvent};

use capsig_common::Result;

/// CapSig gate instance
///
/// Bundles the deployment configuration with the running vote service.
pub struct CapSig {
    config: CapSigConfig,
    service: CapVoteService,
}

impl CapSig {
    /// Create a gate from a configuration
    pub fn new(config: CapSigConfig) -> Result<Self> {
        let ledger = config.build_ledger()?;
        let service = CapVoteService::new(ledger);
        Ok(Self { config, service })
    }

    /// The vote service handle
    pub fn service(&self) -> &CapVoteService {
        &self.service
    }

    /// The configuration this gate was built from
    pub fn config(&self) -> &CapSigConfig {
        &self.config
    }
}
