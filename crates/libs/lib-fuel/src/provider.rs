//! # Wallet Provider Capability
//!
//! The injected wallet is an externally owned object. The connector only sees it
//! through [`WalletProvider`], and only borrows it through a [`ProviderSlot`]
//! that starts empty when the wallet has not been injected yet and is filled
//! later by the host's injection announcement.
//!
//! Browser execution is single-threaded, so the capability traits are `?Send`.

use async_trait::async_trait;
use lib_core::{ProviderError, Wallet};
use serde::Deserialize;
use std::fmt;
use std::rc::Rc;
use tokio::sync::watch;
use tracing::info;

use crate::types::string_or_number;

/// Events the connector listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderEventKind {
    /// The selected account changed inside the wallet.
    CurrentAccount,
    /// The wallet switched network.
    Network,
}

impl ProviderEventKind {
    /// Name of the event in the wallet's `events` table.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderEventKind::CurrentAccount => "currentAccount",
            ProviderEventKind::Network => "network",
        }
    }
}

/// Network payload of a [`ProviderEventKind::Network`] event.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChainConfig {
    /// Network id; wallets send it either as a string or as a number.
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    pub url: String,
}

impl ChainConfig {
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
        }
    }
}

/// An event emitted by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderEvent {
    CurrentAccount(String),
    Network(ChainConfig),
}

impl ProviderEvent {
    pub fn kind(&self) -> ProviderEventKind {
        match self {
            ProviderEvent::CurrentAccount(_) => ProviderEventKind::CurrentAccount,
            ProviderEvent::Network(_) => ProviderEventKind::Network,
        }
    }
}

/// Handle returned by [`WalletProvider::on`], used to remove that listener again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// Callback registered on the provider.
pub type EventHandler = Rc<dyn Fn(ProviderEvent)>;

/// Operations the injected wallet exposes.
#[async_trait(?Send)]
pub trait WalletProvider {
    /// Ask the wallet for a connection (may prompt the user).
    async fn connect(&self) -> Result<(), ProviderError>;

    /// Drop the connection.
    async fn disconnect(&self) -> Result<(), ProviderError>;

    /// Currently selected account.
    async fn current_account(&self) -> Result<String, ProviderError>;

    /// Wallet handle for an account.
    async fn get_wallet(&self, account: &str) -> Result<Wallet, ProviderError>;

    /// Register `handler` for events of `kind`.
    fn on(&self, kind: ProviderEventKind, handler: EventHandler) -> ListenerId;

    /// Remove a listener previously registered with [`WalletProvider::on`].
    fn remove_listener(&self, kind: ProviderEventKind, id: ListenerId);
}

type SharedProvider = Option<Rc<dyn WalletProvider>>;

/// Late-binding holder for the optional provider handle.
///
/// Cloning the slot shares it, so the injection listener can keep a clone and fill
/// the same slot the connector reads from.
#[derive(Clone)]
pub struct ProviderSlot {
    inner: Rc<watch::Sender<SharedProvider>>,
}

impl ProviderSlot {
    pub fn new(provider: SharedProvider) -> Self {
        let (tx, _rx) = watch::channel(provider);
        Self { inner: Rc::new(tx) }
    }

    pub fn empty() -> Self {
        Self::new(None)
    }

    pub fn get(&self) -> SharedProvider {
        self.inner.borrow().clone()
    }

    pub fn is_ready(&self) -> bool {
        self.inner.borrow().is_some()
    }

    /// Store the provider once the host announces it was injected.
    pub fn set(&self, provider: Rc<dyn WalletProvider>) {
        self.inner.send_replace(Some(provider));
        info!("Wallet provider is available");
    }

    /// Receiver notified when the provider becomes available.
    pub fn subscribe(&self) -> watch::Receiver<SharedProvider> {
        self.inner.subscribe()
    }

    /// Wait until a provider is available and return it.
    pub async fn ready(&self) -> SharedProvider {
        let mut rx = self.inner.subscribe();
        let provider = rx.wait_for(Option::is_some).await.ok()?;
        provider.clone()
    }
}

impl Default for ProviderSlot {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for ProviderSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderSlot")
            .field("ready", &self.is_ready())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NullProvider;

    #[async_trait(?Send)]
    impl WalletProvider for NullProvider {
        async fn connect(&self) -> Result<(), ProviderError> {
            Ok(())
        }
        async fn disconnect(&self) -> Result<(), ProviderError> {
            Ok(())
        }
        async fn current_account(&self) -> Result<String, ProviderError> {
            Ok("fuel1null".to_string())
        }
        async fn get_wallet(&self, account: &str) -> Result<Wallet, ProviderError> {
            Ok(Wallet {
                address: account.to_string(),
                provider_url: None,
            })
        }
        fn on(&self, _kind: ProviderEventKind, _handler: EventHandler) -> ListenerId {
            ListenerId(0)
        }
        fn remove_listener(&self, _kind: ProviderEventKind, _id: ListenerId) {}
    }

    #[test]
    fn test_chain_config_accepts_string_or_number_id() {
        let from_str: ChainConfig =
            serde_json::from_str(r#"{"id":"4","url":"https://x"}"#).unwrap();
        let from_num: ChainConfig = serde_json::from_str(r#"{"id":4,"url":"https://x"}"#).unwrap();
        let without_id: ChainConfig = serde_json::from_str(r#"{"url":"https://x"}"#).unwrap();

        assert_eq!(from_str, ChainConfig::new("4", "https://x"));
        assert_eq!(from_num, from_str);
        assert_eq!(without_id.id, "");
    }

    #[test]
    fn test_event_kind_names() {
        assert_eq!(ProviderEventKind::CurrentAccount.as_str(), "currentAccount");
        assert_eq!(ProviderEventKind::Network.as_str(), "network");
        assert_eq!(
            ProviderEvent::CurrentAccount("0xABC".to_string()).kind(),
            ProviderEventKind::CurrentAccount
        );
    }

    #[test]
    fn test_slot_starts_empty() {
        let slot = ProviderSlot::empty();
        assert!(!slot.is_ready());
        assert!(slot.get().is_none());
    }

    #[tokio::test]
    async fn test_slot_ready_after_late_injection() {
        let slot = ProviderSlot::empty();
        let rx = slot.subscribe();

        let injector = slot.clone();
        injector.set(Rc::new(NullProvider));

        assert!(rx.has_changed().unwrap());
        assert!(slot.is_ready());
        let provider = slot.ready().await.expect("provider injected");
        assert_eq!(provider.current_account().await.unwrap(), "fuel1null");
    }
}
