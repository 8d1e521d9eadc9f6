//! Configured chains together with the chain the wallet is on.

use lib_core::{Chain, Store};

use crate::client::Client;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainsView {
    pub chains: Vec<Chain>,
    pub current_chain: Option<Chain>,
}

pub fn chains_view(client: &Client, store: &Store) -> ChainsView {
    ChainsView {
        chains: client.chains(),
        current_chain: store.current_chain(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_core::Config;

    #[test]
    fn test_chains_view() {
        let client = Client::http(Config::default()).unwrap();
        let store = Store::new();

        let view = chains_view(&client, &store);
        assert_eq!(view.chains.len(), 4);
        assert_eq!(view.current_chain, None);

        store.set_current_chain(Chain::new("beta-3", "https://beta-3.fuel.network/graphql"));
        assert_eq!(
            chains_view(&client, &store).current_chain.map(|c| c.name),
            Some("beta-3".to_string())
        );
    }
}
