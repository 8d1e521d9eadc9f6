//! # Wallet Store
//!
//! Connection status, account, wallet handle and current chain, shared between the
//! connector (the only writer) and any number of readers.
//!
//! The store is a cheap `Clone` handle over a `tokio::sync::watch` channel:
//! - readers call [`Store::snapshot`] or [`Store::subscribe`] to follow changes
//! - every mutation is one atomic write, seen by subscribers as a single change
//! - status transitions go through `begin_*` / `abort_*` / `complete_*`, where
//!   `begin_*` is a compare-and-set so two concurrent connects cannot both start
//!
//! ```text
//!                 begin_connect            complete_connect
//! Disconnected ─────────────▶ Connecting ─────────────────▶ Connected
//!      ▲                          │ abort_connect               │ begin_disconnect
//!      └──────────────────────────┘                             ▼
//!      ◀───────────────────────────────────────────────── Disconnecting
//!                 complete_disconnect       abort_disconnect ──▶ Connected
//! ```

use crate::error::{AppError, Result};
use crate::model::{Chain, ConnectionStatus, Wallet};
use std::fmt;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;

/// Snapshot of the wallet store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreState {
    pub status: ConnectionStatus,
    pub address: Option<String>,
    pub wallet: Option<Wallet>,
    pub current_chain: Option<Chain>,
}

impl StoreState {
    pub fn is_connected(&self) -> bool {
        self.status == ConnectionStatus::Connected
    }
}

/// Shared wallet state handle.
#[derive(Clone)]
pub struct Store {
    inner: Arc<watch::Sender<StoreState>>,
}

impl Store {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(StoreState::default());
        Self { inner: Arc::new(tx) }
    }

    pub fn snapshot(&self) -> StoreState {
        self.inner.borrow().clone()
    }

    pub fn status(&self) -> ConnectionStatus {
        self.inner.borrow().status
    }

    pub fn address(&self) -> Option<String> {
        self.inner.borrow().address.clone()
    }

    pub fn wallet(&self) -> Option<Wallet> {
        self.inner.borrow().wallet.clone()
    }

    pub fn current_chain(&self) -> Option<Chain> {
        self.inner.borrow().current_chain.clone()
    }

    /// Receiver that is notified after every write.
    pub fn subscribe(&self) -> watch::Receiver<StoreState> {
        self.inner.subscribe()
    }

    /// Move `Disconnected` → `Connecting`, or fail without touching the store.
    pub fn begin_connect(&self) -> Result<()> {
        self.compare_and_set(|status| match status {
            ConnectionStatus::Disconnected => Ok(ConnectionStatus::Connecting),
            ConnectionStatus::Connected => Err(AppError::UserAlreadyConnected),
            other => Err(AppError::TransitionInProgress(other)),
        })
    }

    /// Connection failed: back to `Disconnected` with every field cleared,
    /// including anything wallet events wrote while connecting.
    pub fn abort_connect(&self) {
        self.inner.send_replace(StoreState::default());
        debug!("Connect aborted, store reset to disconnected");
    }

    /// Provider accepted the connection: publish status, account and wallet together.
    pub fn complete_connect(&self, address: String, wallet: Wallet) {
        self.inner.send_modify(|state| {
            state.status = ConnectionStatus::Connected;
            state.address = Some(address);
            state.wallet = Some(wallet);
        });
    }

    /// Move `Connected` → `Disconnecting`, or fail without touching the store.
    pub fn begin_disconnect(&self) -> Result<()> {
        self.compare_and_set(|status| match status {
            ConnectionStatus::Connected => Ok(ConnectionStatus::Disconnecting),
            ConnectionStatus::Disconnected => Err(AppError::UserAlreadyDisconnected),
            other => Err(AppError::TransitionInProgress(other)),
        })
    }

    /// Provider refused the disconnection: back to `Connected`, nothing else changes.
    pub fn abort_disconnect(&self) {
        self.inner.send_modify(|state| state.status = ConnectionStatus::Connected);
        debug!("Disconnect aborted, status reverted to connected");
    }

    /// Provider dropped the connection: clear everything.
    pub fn complete_disconnect(&self) {
        self.inner.send_replace(StoreState::default());
    }

    /// Overwrite the current account. No status check.
    pub fn set_address(&self, address: String) {
        self.inner.send_modify(|state| state.address = Some(address));
    }

    pub fn set_current_chain(&self, chain: Chain) {
        self.inner.send_modify(|state| state.current_chain = Some(chain));
    }

    fn compare_and_set<F>(&self, transition: F) -> Result<()>
    where
        F: FnOnce(ConnectionStatus) -> Result<ConnectionStatus>,
    {
        let mut outcome = Ok(());
        self.inner.send_if_modified(|state| match transition(state.status) {
            Ok(next) => {
                debug!(from = %state.status, to = %next, "Store status transition");
                state.status = next;
                true
            }
            Err(err) => {
                outcome = Err(err);
                false
            }
        });
        outcome
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Store").field(&*self.inner.borrow()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wallet() -> Wallet {
        Wallet {
            address: "fuel1abc".to_string(),
            provider_url: None,
        }
    }

    #[test]
    fn test_store_starts_disconnected() {
        let store = Store::new();
        assert_eq!(store.snapshot(), StoreState::default());
        assert_eq!(store.status(), ConnectionStatus::Disconnected);
    }

    #[test]
    fn test_begin_connect_is_exclusive() {
        let store = Store::new();
        store.begin_connect().unwrap();
        assert_eq!(store.status(), ConnectionStatus::Connecting);

        assert_eq!(
            store.begin_connect(),
            Err(AppError::TransitionInProgress(ConnectionStatus::Connecting))
        );
        assert_eq!(store.status(), ConnectionStatus::Connecting);
    }

    #[test]
    fn test_connect_cycle() {
        let store = Store::new();
        store.begin_connect().unwrap();
        store.complete_connect("fuel1abc".to_string(), wallet());

        let state = store.snapshot();
        assert!(state.is_connected());
        assert_eq!(state.address.as_deref(), Some("fuel1abc"));
        assert_eq!(state.wallet, Some(wallet()));

        assert_eq!(store.begin_connect(), Err(AppError::UserAlreadyConnected));
        assert_eq!(store.snapshot(), state);
    }

    #[test]
    fn test_disconnect_rules() {
        let store = Store::new();
        assert_eq!(store.begin_disconnect(), Err(AppError::UserAlreadyDisconnected));

        store.begin_connect().unwrap();
        assert_eq!(
            store.begin_disconnect(),
            Err(AppError::TransitionInProgress(ConnectionStatus::Connecting))
        );
        store.abort_connect();
        assert_eq!(store.status(), ConnectionStatus::Disconnected);
    }

    #[test]
    fn test_abort_connect_clears_event_writes() {
        let store = Store::new();
        store.begin_connect().unwrap();
        store.set_address("fuel1evt".to_string());
        store.set_current_chain(Chain::new("beta-1", "https://x"));

        store.abort_connect();

        assert_eq!(store.snapshot(), StoreState::default());
    }

    #[test]
    fn test_abort_disconnect_keeps_fields() {
        let store = Store::new();
        store.begin_connect().unwrap();
        store.complete_connect("fuel1abc".to_string(), wallet());
        store.set_current_chain(Chain::new("beta-3", "https://beta-3.fuel.network/graphql"));
        let before = store.snapshot();

        store.begin_disconnect().unwrap();
        assert_eq!(store.status(), ConnectionStatus::Disconnecting);
        store.abort_disconnect();
        assert_eq!(store.snapshot(), before);

        store.begin_disconnect().unwrap();
        store.complete_disconnect();
        assert_eq!(store.snapshot(), StoreState::default());
    }

    #[test]
    fn test_subscribers_see_changes() {
        let store = Store::new();
        let mut rx = store.subscribe();
        assert!(!rx.has_changed().unwrap());

        store.set_address("0xABC".to_string());
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().address.as_deref(), Some("0xABC"));

        // rejected transitions are not published
        store.begin_disconnect().unwrap_err();
        assert!(!rx.has_changed().unwrap());
    }
}
