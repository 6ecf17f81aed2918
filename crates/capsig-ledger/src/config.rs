//! CapSig configuration

use crate::ledger::CapVotingLedger;
use anyhow::{bail, Result};
use capsig_common::{CapValue, SignerId};
use serde::{Deserialize, Serialize};

/// CapSig deployment configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapSigConfig {
    /// Roster of signer identities
    pub signers: Vec<String>,
    /// Distinct votes required to finalize a value
    pub threshold: u8,
    /// Cap value the ledger starts with
    pub initial_cap: CapValue,
}

impl Default for CapSigConfig {
    fn default() -> Self {
        Self {
            signers: vec![
                "acct:signer-0".to_string(),
                "acct:signer-1".to_string(),
                "acct:signer-2".to_string(),
            ],
            threshold: 2,
            initial_cap: 0,
        }
    }
}

impl CapSigConfig {
    /// Load configuration from environment and .env file
    pub fn load() -> Result<Self> {
        // Try to load .env file
        let _ = dotenvy::dotenv();

        let mut cfg = Self::default();

        if let Ok(signers) = std::env::var("CAPSIG_SIGNERS") {
            let parsed: Vec<String> = signers
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            if parsed.is_empty() {
                bail!("CAPSIG_SIGNERS set but contains no identities");
            }
            cfg.signers = parsed;
        }

        if let Ok(val) = std::env::var("CAPSIG_THRESHOLD") {
            cfg.threshold = val
                .parse()
                .map_err(|_| anyhow::anyhow!("CAPSIG_THRESHOLD is not a valid count: {val}"))?;
        }

        if let Ok(val) = std::env::var("CAPSIG_INITIAL_CAP") {
            cfg.initial_cap = val
                .parse()
                .map_err(|_| anyhow::anyhow!("CAPSIG_INITIAL_CAP is not a valid cap: {val}"))?;
        }

        Ok(cfg)
    }

    /// Build the voting ledger this configuration describes
    ///
    /// Roster and threshold validation happens in the ledger constructor.
    pub fn build_ledger(&self) -> capsig_common::Result<CapVotingLedger> {
        let signers = self
            .signers
            .iter()
            .map(|s| SignerId::new(s.clone()))
            .collect();
        Ok(CapVotingLedger::new(
            signers,
            self.threshold,
            self.initial_cap,
        )?)
    }
}
