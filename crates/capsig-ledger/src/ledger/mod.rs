//! Ledger module - the cap voting state machine

pub mod cap_ledger;

pub use cap_ledger::CapVotingLedger;
