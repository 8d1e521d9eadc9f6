//! # Configuration Client
//!
//! Holds the application's chain allow-list and the current default endpoint
//! that block queries go to. The connector consults it when the wallet switches
//! network and repoints it at the new chain.

use lib_core::{AppError, Chain, Config, Result};
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;
use tracing::info;

use crate::chain::{ChainProvider, ChainProviderFactory};
use crate::graphql::HttpProviderFactory;

struct ClientState {
    chains: Vec<Chain>,
    default_chain: Option<Chain>,
}

/// Cheap `Clone` handle shared by the connector, its event listeners and the queries.
#[derive(Clone)]
pub struct Client {
    state: Arc<RwLock<ClientState>>,
    factory: Arc<dyn ChainProviderFactory>,
}

impl Client {
    /// Build a client from a validated configuration.
    pub fn new(config: Config, factory: Arc<dyn ChainProviderFactory>) -> Result<Self> {
        config.validate()?;

        let default_chain = config.chain(&config.default_chain).cloned();
        Ok(Self {
            state: Arc::new(RwLock::new(ClientState {
                chains: config.chains,
                default_chain,
            })),
            factory,
        })
    }

    /// Client whose chain providers talk GraphQL over HTTP.
    pub fn http(config: Config) -> Result<Self> {
        Self::new(config, Arc::new(HttpProviderFactory::new()))
    }

    /// Whether `name` is in the chain allow-list.
    pub fn is_chain_configured(&self, name: &str) -> bool {
        self.state.read().chains.iter().any(|chain| chain.name == name)
    }

    pub fn chains(&self) -> Vec<Chain> {
        self.state.read().chains.clone()
    }

    pub fn chain(&self, name: &str) -> Option<Chain> {
        self.state
            .read()
            .chains
            .iter()
            .find(|chain| chain.name == name)
            .cloned()
    }

    /// Repoint the default endpoint at `chain`.
    pub fn set_default_provider(&self, chain: &Chain) {
        self.state.write().default_chain = Some(chain.clone());
        info!(chain = %chain.name, url = %chain.url, "Default provider changed");
    }

    pub fn default_chain(&self) -> Option<Chain> {
        self.state.read().default_chain.clone()
    }

    /// Chain provider for the current default endpoint.
    pub fn default_provider(&self) -> Result<Box<dyn ChainProvider>> {
        let chain = self.default_chain().ok_or(AppError::ProviderNotDefined)?;
        Ok(self.factory.provider_for(&chain))
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("Client")
            .field("chains", &state.chains)
            .field("default_chain", &state.default_chain)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> Client {
        let config = Config::new(
            vec![
                Chain::new("beta-1", "https://node-beta-1.fuel.network/graphql"),
                Chain::new("localhost", "http://localhost:4000/graphql"),
            ],
            "beta-1",
        );
        Client::http(config).unwrap()
    }

    #[test]
    fn test_is_chain_configured() {
        let client = client();
        assert!(client.is_chain_configured("beta-1"));
        assert!(client.is_chain_configured("localhost"));
        assert!(!client.is_chain_configured("beta-3"));
    }

    #[test]
    fn test_initial_default_provider() {
        let client = client();
        assert_eq!(
            client.default_chain(),
            Some(Chain::new("beta-1", "https://node-beta-1.fuel.network/graphql"))
        );
        let provider = client.default_provider().unwrap();
        assert_eq!(provider.url(), "https://node-beta-1.fuel.network/graphql");
    }

    #[test]
    fn test_set_default_provider_is_shared_by_clones() {
        let client = client();
        let other = client.clone();

        other.set_default_provider(&Chain::new("localhost", "http://127.0.0.1:4000/graphql"));

        let provider = client.default_provider().unwrap();
        assert_eq!(provider.url(), "http://127.0.0.1:4000/graphql");
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = Config::new(vec![], "beta-1");
        assert!(matches!(Client::http(config), Err(AppError::Config(_))));
    }
}
