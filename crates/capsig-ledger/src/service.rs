//! Cap vote service
//!
//! Async wrapper around [`CapVotingLedger`]:
//! 1. Serializes state-changing calls through a write lock
//! 2. Instruments sign/revoke with structured logging
//! 3. Broadcasts ledger events to in-process subscribers
//!
//! The ledger itself is synchronous; the service is the shared handle the
//! rest of a process votes through.

use crate::ledger::CapVotingLedger;
use capsig_common::{CapValue, Result, SignerId, Status};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};
use tracing::{debug, info, instrument};

/// Capacity of the event broadcast channel
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Ledger activity, broadcast after each successful mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "event")]
pub enum LedgerEvent {
    /// A signer cast a vote for a candidate value
    Signed {
        value: CapValue,
        signer: SignerId,
        count: u8,
    },
    /// A signer revoked an active vote
    Revoked {
        value: CapValue,
        signer: SignerId,
        count: u8,
    },
    /// A candidate value reached threshold; the cap is final
    Finalized { max_cap: CapValue },
}

/// Shared async handle to a [`CapVotingLedger`]
pub struct CapVoteService {
    ledger: Arc<RwLock<CapVotingLedger>>,
    events: broadcast::Sender<LedgerEvent>,
}

impl CapVoteService {
    /// Wrap a ledger in a shared service handle
    pub fn new(ledger: CapVotingLedger) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            ledger: Arc::new(RwLock::new(ledger)),
            events,
        }
    }

    /// Subscribe to ledger events
    ///
    /// Only events emitted after the call are observed.
    pub fn subscribe(&self) -> broadcast::Receiver<LedgerEvent> {
        self.events.subscribe()
    }

    /// Cast a vote for a candidate value
    #[instrument(skip(self))]
    pub async fn sign_value(&self, value: CapValue, signer: &SignerId) -> Result<Status> {
        let mut ledger = self.ledger.write().await;
        let status = ledger.sign_value(value, signer)?;
        let count = ledger.sign_count(value);

        debug!(%signer, value, count, "Vote recorded");
        self.emit(LedgerEvent::Signed {
            value,
            signer: signer.clone(),
            count,
        });

        if status.is_confirmed() {
            info!(max_cap = value, "Cap finalized");
            self.emit(LedgerEvent::Finalized { max_cap: value });
        }

        Ok(status)
    }

    /// Revoke an active vote for a candidate value
    #[instrument(skip(self))]
    pub async fn revoke_sign(&self, value: CapValue, signer: &SignerId) -> Result<()> {
        let mut ledger = self.ledger.write().await;
        ledger.revoke_sign(value, signer)?;
        let count = ledger.sign_count(value);

        debug!(%signer, value, count, "Vote revoked");
        self.emit(LedgerEvent::Revoked {
            value,
            signer: signer.clone(),
            count,
        });

        Ok(())
    }

    /// The confirmed cap (initial value until finalization)
    pub async fn max_cap(&self) -> CapValue {
        self.ledger.read().await.max_cap()
    }

    /// Distinct votes required to finalize a value
    pub async fn num_confirmations_required(&self) -> u8 {
        self.ledger.read().await.num_confirmations_required()
    }

    /// Whether an identity is in the roster
    pub async fn is_signer(&self, signer: &SignerId) -> bool {
        self.ledger.read().await.is_signer(signer)
    }

    /// Current affirmative-vote count for a value
    pub async fn sign_count(&self, value: CapValue) -> u8 {
        self.ledger.read().await.sign_count(value)
    }

    /// Whether a signer currently has an active vote for a value
    pub async fn signs(&self, value: CapValue, signer: &SignerId) -> bool {
        self.ledger.read().await.signs(value, signer)
    }

    /// Current confirmation status
    pub async fn status(&self) -> Status {
        self.ledger.read().await.status()
    }

    /// Whether `amount` meets or exceeds the confirmed cap
    pub async fn is_max_cap_reached(&self, amount: CapValue) -> Result<bool> {
        Ok(self.ledger.read().await.is_max_cap_reached(amount)?)
    }

    fn emit(&self, event: LedgerEvent) {
        // send only fails when no subscriber is listening
        let _ = self.events.send(event);
    }
}

impl Clone for CapVoteService {
    fn clone(&self) -> Self {
        Self {
            ledger: Arc::clone(&self.ledger),
            events: self.events.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use capsig_common::{CapSigError, LedgerError};

    fn service(threshold: u8) -> CapVoteService {
        let signers = vec![
            SignerId::from("acct:alice"),
            SignerId::from("acct:bob"),
            SignerId::from("acct:carol"),
        ];
        CapVoteService::new(CapVotingLedger::new(signers, threshold, 0).unwrap())
    }

    #[tokio::test]
    async fn test_sign_and_query() {
        let service = service(3);
        let alice = SignerId::from("acct:alice");

        let status = service.sign_value(100, &alice).await.unwrap();
        assert_eq!(status, Status::NotConfirmed);
        assert!(service.signs(100, &alice).await);
        assert_eq!(service.sign_count(100).await, 1);
    }

    #[tokio::test]
    async fn test_error_propagation() {
        let service = service(3);
        let mallory = SignerId::from("acct:mallory");

        let result = service.sign_value(100, &mallory).await;
        assert!(matches!(
            result,
            Err(CapSigError::Ledger(LedgerError::NotASigner { .. }))
        ));
    }

    #[tokio::test]
    async fn test_events_broadcast() {
        let service = service(2);
        let mut events = service.subscribe();

        let alice = SignerId::from("acct:alice");
        let bob = SignerId::from("acct:bob");

        service.sign_value(100, &alice).await.unwrap();
        service.sign_value(100, &bob).await.unwrap();

        assert_eq!(
            events.recv().await.unwrap(),
            LedgerEvent::Signed {
                value: 100,
                signer: alice,
                count: 1,
            }
        );
        assert_eq!(
            events.recv().await.unwrap(),
            LedgerEvent::Signed {
                value: 100,
                signer: bob,
                count: 2,
            }
        );
        assert_eq!(
            events.recv().await.unwrap(),
            LedgerEvent::Finalized { max_cap: 100 }
        );
    }

    #[tokio::test]
    async fn test_concurrent_signs_serialize() {
        let service = service(3);
        let signers = ["acct:alice", "acct:bob", "acct:carol"];

        let handles: Vec<_> = signers
            .iter()
            .map(|name| {
                let service = service.clone();
                let signer = SignerId::from(*name);
                tokio::spawn(async move { service.sign_value(100, &signer).await })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(service.sign_count(100).await, 3);
        assert_eq!(service.status().await, Status::Confirmed);
        assert_eq!(service.max_cap().await, 100);
    }
}
