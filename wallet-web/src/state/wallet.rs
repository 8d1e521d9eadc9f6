//! Wallet state management
//!
//! The context owns the injected connector and mirrors every store change into a
//! Leptos signal, so components re-render on connect, account and network events.

use leptos::prelude::*;
use leptos::task::spawn_local;
use lib_core::{AppError, Chain, Config, Store, StoreState};
use lib_fuel::{Client, Connector, InjectedConnector, ProviderSlot};
use std::rc::Rc;

use crate::services::fuel::detect_injected_provider;

/// Global wallet context
#[derive(Clone, Copy)]
pub struct WalletContext {
    connector: StoredValue<Rc<InjectedConnector>, LocalStorage>,
    /// Latest store snapshot.
    pub state: RwSignal<StoreState>,
    /// Whether the wallet extension has been injected.
    pub ready: RwSignal<bool>,
    /// Error of the last connect/disconnect attempt, cleared on the next one.
    pub last_error: RwSignal<Option<AppError>>,
}

impl WalletContext {
    pub fn new(connector: InjectedConnector) -> Self {
        let store = connector.store().clone();
        let slot = connector.provider_slot();

        let ctx = Self {
            state: RwSignal::new(store.snapshot()),
            ready: RwSignal::new(slot.is_ready()),
            last_error: RwSignal::new(None),
            connector: StoredValue::new_local(Rc::new(connector)),
        };
        ctx.mirror_store(store);
        ctx.watch_provider(slot);
        ctx
    }

    fn mirror_store(&self, store: Store) {
        let state = self.state;
        spawn_local(async move {
            let mut rx = store.subscribe();
            loop {
                let snapshot = rx.borrow_and_update().clone();
                if state.try_set(snapshot).is_some() {
                    // Signal disposed with its owner.
                    break;
                }
                if rx.changed().await.is_err() {
                    break;
                }
            }
        });
    }

    fn watch_provider(&self, slot: ProviderSlot) {
        let ready = self.ready;
        spawn_local(async move {
            if slot.ready().await.is_some() {
                ready.try_set(true);
            }
        });
    }

    pub fn connector(&self) -> Rc<InjectedConnector> {
        self.connector.get_value()
    }

    pub fn client(&self) -> Client {
        self.connector.with_value(|connector| connector.client().clone())
    }

    pub fn store(&self) -> Store {
        self.connector.with_value(|connector| connector.store().clone())
    }

    pub fn is_connected(&self) -> bool {
        self.state.with(|state| state.is_connected())
    }

    pub fn address(&self) -> Option<String> {
        self.state.with(|state| state.address.clone())
    }

    pub fn current_chain(&self) -> Option<Chain> {
        self.state.with(|state| state.current_chain.clone())
    }

    /// Start a connection; the outcome lands in `state` or `last_error`.
    pub fn connect(&self) {
        let connector = self.connector();
        let last_error = self.last_error;
        last_error.set(None);
        spawn_local(async move {
            if let Err(err) = connector.connect().await {
                if err.is_precondition() {
                    log::debug!("Wallet connect skipped: {}", err);
                } else {
                    log::warn!("Wallet connection failed: {}", err);
                }
                last_error.try_set(Some(err));
            }
        });
    }

    pub fn disconnect(&self) {
        let connector = self.connector();
        let last_error = self.last_error;
        last_error.set(None);
        spawn_local(async move {
            if let Err(err) = connector.disconnect().await {
                if err.is_precondition() {
                    log::debug!("Wallet disconnect skipped: {}", err);
                } else {
                    log::warn!("Wallet disconnection failed: {}", err);
                }
                last_error.try_set(Some(err));
            }
        });
    }
}

/// Build the connector for the injected wallet and provide it as context.
pub fn provide_wallet_context(config: Config) -> Result<WalletContext, AppError> {
    let client = Client::http(config)?;
    let slot = ProviderSlot::empty();
    detect_injected_provider(&slot);

    let context = WalletContext::new(InjectedConnector::with_slot(slot, Store::new(), client));
    provide_context(context);
    Ok(context)
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}
