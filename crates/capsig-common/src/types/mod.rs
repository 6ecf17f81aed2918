//! Core data types for the CapSig threshold gate

pub mod signer_id;
pub mod status;
pub mod tally;
