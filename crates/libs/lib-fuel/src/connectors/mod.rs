//! # Connectors
//!
//! A connector owns the link between the application's [`Store`](lib_core::Store)
//! and a wallet provider: it runs the connect/disconnect lifecycle and forwards
//! wallet events into the store.

pub mod injected;

pub use injected::InjectedConnector;

use async_trait::async_trait;
use lib_core::{Chain, Result};
use std::rc::Rc;

use crate::provider::{ChainConfig, WalletProvider};

/// Wallet connector operations.
#[async_trait(?Send)]
pub trait Connector {
    /// Whether the provider handle is present.
    fn is_ready(&self) -> bool;

    /// The provider handle, if injected.
    fn get_provider(&self) -> Option<Rc<dyn WalletProvider>>;

    /// Connect the wallet and start listening to its events.
    async fn connect(&self) -> Result<()>;

    /// Disconnect the wallet and stop listening to its events.
    async fn disconnect(&self) -> Result<()>;

    /// The wallet selected another account.
    fn on_account_changed(&self, account: String);

    /// The wallet switched network. Returns the chain now in use.
    fn on_chain_changed(&self, config: ChainConfig) -> Result<Chain>;
}
