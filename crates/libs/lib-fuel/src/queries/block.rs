//! # Block Queries
//!
//! Look up a block by id or height on the current default chain.
//!
//! Both queries check, in order: a default provider is configured
//! (`ProviderNotDefined`), an id or height was given (`BlockNotFound`), the node
//! returned a block (`BlockNotFound`).

use lib_core::{AppError, Result};
use tracing::debug;

use crate::client::Client;
use crate::types::{Block, BlockRef, BlockWithTransactions};

/// Fetch a block with its transaction ids.
pub async fn fetch_block(client: &Client, id_or_height: Option<&str>) -> Result<Block> {
    let provider = client.default_provider()?;
    let block_ref = id_or_height
        .and_then(BlockRef::parse)
        .ok_or(AppError::BlockNotFound)?;

    debug!(url = provider.url(), block = %block_ref, "Fetching block");
    provider
        .get_block(&block_ref)
        .await?
        .ok_or(AppError::BlockNotFound)
}

/// Fetch a block with its full transactions.
pub async fn fetch_block_with_transactions(
    client: &Client,
    id_or_height: Option<&str>,
) -> Result<BlockWithTransactions> {
    let provider = client.default_provider()?;
    let block_ref = id_or_height
        .and_then(BlockRef::parse)
        .ok_or(AppError::BlockNotFound)?;

    debug!(url = provider.url(), block = %block_ref, "Fetching block with transactions");
    provider
        .get_block_with_transactions(&block_ref)
        .await?
        .ok_or(AppError::BlockNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::{ChainProvider, ChainProviderFactory};
    use crate::types::Transaction;
    use async_trait::async_trait;
    use lib_core::{Chain, Config, ProviderError};
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn sample_block() -> Block {
        Block {
            id: "0xabc".to_string(),
            height: 42,
            time: "4611686020108779339".to_string(),
            transaction_ids: vec!["0xt1".to_string()],
        }
    }

    struct MockChain {
        url: String,
        requests: Arc<Mutex<Vec<(String, BlockRef)>>>,
    }

    #[async_trait(?Send)]
    impl ChainProvider for MockChain {
        fn url(&self) -> &str {
            &self.url
        }

        async fn get_block(
            &self,
            block: &BlockRef,
        ) -> std::result::Result<Option<Block>, ProviderError> {
            self.requests.lock().push((self.url.clone(), block.clone()));
            Ok(match block {
                BlockRef::Height(42) => Some(sample_block()),
                BlockRef::Id(id) if id == "0xabc" => Some(sample_block()),
                BlockRef::Id(id) if id == "0xbroken" => {
                    return Err(ProviderError::Transport("connection refused".to_string()))
                }
                _ => None,
            })
        }

        async fn get_block_with_transactions(
            &self,
            block: &BlockRef,
        ) -> std::result::Result<Option<BlockWithTransactions>, ProviderError> {
            Ok(self.get_block(block).await?.map(|b| BlockWithTransactions {
                id: b.id,
                height: b.height.to_string(),
                time: b.time,
                transaction_ids: b.transaction_ids.clone(),
                transactions: b
                    .transaction_ids
                    .into_iter()
                    .map(|id| Transaction {
                        id,
                        raw_payload: None,
                    })
                    .collect(),
            }))
        }
    }

    #[derive(Default)]
    struct MockFactory {
        requests: Arc<Mutex<Vec<(String, BlockRef)>>>,
    }

    impl ChainProviderFactory for MockFactory {
        fn provider_for(&self, chain: &Chain) -> Box<dyn ChainProvider> {
            Box::new(MockChain {
                url: chain.url.clone(),
                requests: Arc::clone(&self.requests),
            })
        }
    }

    fn client() -> (Client, Arc<Mutex<Vec<(String, BlockRef)>>>) {
        let factory = MockFactory::default();
        let requests = Arc::clone(&factory.requests);
        (Client::new(Config::default(), Arc::new(factory)).unwrap(), requests)
    }

    #[tokio::test]
    async fn test_fetch_block_by_height_string() {
        let (client, requests) = client();

        let block = fetch_block(&client, Some("42")).await.unwrap();

        assert_eq!(block, sample_block());
        assert_eq!(
            requests.lock().as_slice(),
            &[(
                "https://beta-3.fuel.network/graphql".to_string(),
                BlockRef::Height(42)
            )]
        );
    }

    #[tokio::test]
    async fn test_fetch_block_by_id() {
        let (client, _) = client();
        let block = fetch_block(&client, Some("0xabc")).await.unwrap();
        assert_eq!(block.height, 42);
    }

    #[tokio::test]
    async fn test_fetch_block_without_id() {
        let (client, requests) = client();

        assert_eq!(fetch_block(&client, None).await, Err(AppError::BlockNotFound));
        assert_eq!(fetch_block(&client, Some("")).await, Err(AppError::BlockNotFound));
        assert!(requests.lock().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_missing_block() {
        let (client, _) = client();
        assert_eq!(
            fetch_block(&client, Some("7")).await,
            Err(AppError::BlockNotFound)
        );
    }

    #[tokio::test]
    async fn test_fetch_block_transport_error_passes_through() {
        let (client, _) = client();
        assert_eq!(
            fetch_block(&client, Some("0xbroken")).await,
            Err(AppError::Provider(ProviderError::Transport(
                "connection refused".to_string()
            )))
        );
    }

    #[tokio::test]
    async fn test_fetch_follows_default_provider() {
        let (client, requests) = client();
        client.set_default_provider(&Chain::new("beta-1", "https://x"));

        fetch_block(&client, Some("42")).await.unwrap();

        assert_eq!(requests.lock()[0].0, "https://x");
    }

    #[tokio::test]
    async fn test_fetch_block_with_transactions() {
        let (client, _) = client();

        let block = fetch_block_with_transactions(&client, Some("42")).await.unwrap();

        assert_eq!(block.height, "42");
        assert_eq!(block.transactions.len(), 1);
        assert_eq!(block.transactions[0].id, "0xt1");
        assert_eq!(
            fetch_block_with_transactions(&client, None).await,
            Err(AppError::BlockNotFound)
        );
    }
}
