//! # Injected Wallet Connector
//!
//! Connector for a wallet the browser extension injects into the page. The
//! provider may be injected after the app has loaded, so the handle lives in a
//! [`ProviderSlot`] that the host fills when it announces the injection.
//!
//! ## Lifecycle
//!
//! - `connect`: provider present → `begin_connect` → provider connect → listeners
//!   → account + wallet → `complete_connect`. Any provider failure rolls the store
//!   back to `disconnected` and returns the provider's error as-is.
//! - `disconnect`: provider present → `begin_disconnect` → provider disconnect →
//!   listeners removed → `complete_disconnect`. A provider failure rolls the store
//!   back to `connected`.
//!
//! Wallet events arrive outside any caller. Their handler applies the update
//! and logs-and-skips a network the application has not configured.

use async_trait::async_trait;
use lib_core::chains::chain_name_for_id;
use lib_core::{AppError, Chain, Result, Store};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info, warn};

use crate::client::Client;
use crate::connectors::Connector;
use crate::provider::{
    ChainConfig, EventHandler, ListenerId, ProviderEvent, ProviderEventKind, ProviderSlot,
    WalletProvider,
};

/// Applies wallet events to the store and the configuration client.
#[derive(Clone)]
struct EventSink {
    store: Store,
    client: Client,
}

impl EventSink {
    fn account_changed(&self, account: String) {
        debug!(account = %account, "Wallet account changed");
        self.store.set_address(account);
    }

    fn chain_changed(&self, config: ChainConfig) -> Result<Chain> {
        let name = chain_name_for_id(&config.id);
        if !self.client.is_chain_configured(name) {
            return Err(AppError::ChainNotConfigured(name.to_string()));
        }

        let chain = Chain::new(name, config.url);
        self.store.set_current_chain(chain.clone());
        self.client.set_default_provider(&chain);
        info!(chain = %chain.name, "Wallet network changed");
        Ok(chain)
    }

    fn dispatch(&self, event: ProviderEvent) {
        match event {
            ProviderEvent::CurrentAccount(account) => self.account_changed(account),
            ProviderEvent::Network(config) => {
                let id = config.id.clone();
                if let Err(err) = self.chain_changed(config) {
                    warn!(network_id = %id, error = %err, "Ignoring wallet network change");
                }
            }
        }
    }

    fn handler(&self) -> EventHandler {
        let sink = self.clone();
        Rc::new(move |event| sink.dispatch(event))
    }
}

/// Listener ids registered on the provider while connected.
#[derive(Debug, Clone, Copy)]
struct Listeners {
    account: ListenerId,
    network: ListenerId,
}

/// Connector for the browser-injected wallet.
pub struct InjectedConnector {
    provider: ProviderSlot,
    sink: EventSink,
    listeners: RefCell<Option<Listeners>>,
}

impl InjectedConnector {
    /// Build a connector. `provider` is `None` when the wallet has not been injected yet.
    pub fn new(provider: Option<Rc<dyn WalletProvider>>, store: Store, client: Client) -> Self {
        Self::with_slot(ProviderSlot::new(provider), store, client)
    }

    /// Build a connector reading from an existing slot.
    pub fn with_slot(provider: ProviderSlot, store: Store, client: Client) -> Self {
        Self {
            provider,
            sink: EventSink { store, client },
            listeners: RefCell::new(None),
        }
    }

    /// Slot the host fills when the wallet is injected late.
    pub fn provider_slot(&self) -> ProviderSlot {
        self.provider.clone()
    }

    pub fn store(&self) -> &Store {
        &self.sink.store
    }

    pub fn client(&self) -> &Client {
        &self.sink.client
    }

    fn subscribe(&self, provider: &Rc<dyn WalletProvider>) {
        self.unsubscribe(provider);

        let handler = self.sink.handler();
        let listeners = Listeners {
            account: provider.on(ProviderEventKind::CurrentAccount, Rc::clone(&handler)),
            network: provider.on(ProviderEventKind::Network, handler),
        };
        *self.listeners.borrow_mut() = Some(listeners);
    }

    fn unsubscribe(&self, provider: &Rc<dyn WalletProvider>) {
        let listeners = self.listeners.borrow_mut().take();
        if let Some(listeners) = listeners {
            provider.remove_listener(ProviderEventKind::CurrentAccount, listeners.account);
            provider.remove_listener(ProviderEventKind::Network, listeners.network);
        }
    }

    async fn finish_connect(&self, provider: &Rc<dyn WalletProvider>) -> Result<()> {
        let account = provider.current_account().await?;
        let wallet = provider.get_wallet(&account).await?;
        info!(account = %account, "Wallet connected");
        self.sink.store.complete_connect(account, wallet);
        Ok(())
    }
}

#[async_trait(?Send)]
impl Connector for InjectedConnector {
    fn is_ready(&self) -> bool {
        self.provider.is_ready()
    }

    fn get_provider(&self) -> Option<Rc<dyn WalletProvider>> {
        self.provider.get()
    }

    async fn connect(&self) -> Result<()> {
        let provider = self.get_provider().ok_or(AppError::ProviderNotDefined)?;
        self.sink.store.begin_connect()?;

        if let Err(err) = provider.connect().await {
            warn!(error = %err, "Wallet refused connection");
            self.sink.store.abort_connect();
            return Err(err.into());
        }

        // Events arriving before the account is read may repoint the client.
        let previous_default = self.sink.client.default_chain();
        self.subscribe(&provider);

        if let Err(err) = self.finish_connect(&provider).await {
            warn!(error = %err, "Could not read the connected account");
            self.unsubscribe(&provider);
            if let Some(chain) = previous_default {
                self.sink.client.set_default_provider(&chain);
            }
            self.sink.store.abort_connect();
            return Err(err);
        }
        Ok(())
    }

    async fn disconnect(&self) -> Result<()> {
        let provider = self.get_provider().ok_or(AppError::ProviderNotDefined)?;
        self.sink.store.begin_disconnect()?;

        if let Err(err) = provider.disconnect().await {
            warn!(error = %err, "Wallet refused disconnection");
            self.sink.store.abort_disconnect();
            return Err(err.into());
        }

        self.unsubscribe(&provider);
        self.sink.store.complete_disconnect();
        info!("Wallet disconnected");
        Ok(())
    }

    fn on_account_changed(&self, account: String) {
        self.sink.account_changed(account);
    }

    fn on_chain_changed(&self, config: ChainConfig) -> Result<Chain> {
        self.sink.chain_changed(config)
    }
}
