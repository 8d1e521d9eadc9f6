//! # Chain Provider Capability
//!
//! Read access to a node, used by the block queries. The configuration client
//! builds one for its current default endpoint through a [`ChainProviderFactory`].

use async_trait::async_trait;
use lib_core::{Chain, ProviderError};

use crate::types::{Block, BlockRef, BlockWithTransactions};

/// Block queries against one node endpoint.
#[async_trait(?Send)]
pub trait ChainProvider {
    /// Endpoint this provider talks to.
    fn url(&self) -> &str;

    /// Fetch a block; `Ok(None)` when the node has no such block.
    async fn get_block(&self, block: &BlockRef) -> Result<Option<Block>, ProviderError>;

    /// Fetch a block including its transactions.
    async fn get_block_with_transactions(
        &self,
        block: &BlockRef,
    ) -> Result<Option<BlockWithTransactions>, ProviderError>;
}

/// Builds a [`ChainProvider`] for a chain endpoint.
pub trait ChainProviderFactory: Send + Sync {
    fn provider_for(&self, chain: &Chain) -> Box<dyn ChainProvider>;
}
