//! SignerId - identity of a roster member
//!
//! Signers are opaque account identifiers supplied once at construction.
//! The gate never interprets the string beyond equality; authentication of
//! the caller behind an identity belongs to the surrounding runtime.

use serde::{Deserialize, Serialize};

/// Opaque identity of a signer in the roster
///
/// Wraps the account string so roster membership and vote flags key on a
/// dedicated type rather than bare strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignerId(String);

impl SignerId {
    /// Create a signer identity from an account string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The underlying account string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SignerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for SignerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for SignerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
