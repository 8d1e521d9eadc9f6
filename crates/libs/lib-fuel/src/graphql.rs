//! # GraphQL Chain Provider
//!
//! [`ChainProvider`] over a Fuel node's GraphQL endpoint, using `reqwest`
//! (fetch-based when compiled to wasm).
//!
//! Only the `block` query is issued:
//!
//! ```text
//! POST {url}
//! { "query": "query Block($height: U32, $id: BlockId) { block(...) { ... } }",
//!   "variables": { "height": "42" } }
//! ```

use async_trait::async_trait;
use lib_core::{Chain, ProviderError};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::chain::{ChainProvider, ChainProviderFactory};
use crate::types::{string_or_number, Block, BlockRef, BlockWithTransactions, Transaction};

const BLOCK_QUERY: &str = r#"query Block($height: U32, $id: BlockId) {
  block(height: $height, id: $id) {
    id
    height
    header { time }
    transactions { id }
  }
}"#;

const BLOCK_WITH_TRANSACTIONS_QUERY: &str = r#"query BlockWithTransactions($height: U32, $id: BlockId) {
  block(height: $height, id: $id) {
    id
    height
    header { time }
    transactions { id rawPayload }
  }
}"#;

#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    data: Option<BlockData>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct BlockData {
    block: Option<RawBlock>,
}

#[derive(Debug, Deserialize)]
struct RawBlock {
    id: String,
    #[serde(deserialize_with = "string_or_number")]
    height: String,
    header: RawHeader,
    #[serde(default)]
    transactions: Vec<RawTransaction>,
}

#[derive(Debug, Deserialize)]
struct RawHeader {
    time: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTransaction {
    id: String,
    #[serde(default)]
    raw_payload: Option<String>,
}

impl RawBlock {
    fn into_block(self) -> Result<Block, ProviderError> {
        let height = self.height.parse::<u64>().map_err(|_| {
            ProviderError::Decode(format!("Block height is not a number: {}", self.height))
        })?;

        Ok(Block {
            id: self.id,
            height,
            time: self.header.time,
            transaction_ids: self.transactions.into_iter().map(|tx| tx.id).collect(),
        })
    }

    fn into_block_with_transactions(self) -> BlockWithTransactions {
        let transaction_ids = self.transactions.iter().map(|tx| tx.id.clone()).collect();
        let transactions = self
            .transactions
            .into_iter()
            .map(|tx| Transaction {
                id: tx.id,
                raw_payload: tx.raw_payload,
            })
            .collect();

        BlockWithTransactions {
            id: self.id,
            height: self.height,
            time: self.header.time,
            transaction_ids,
            transactions,
        }
    }
}

/// Decode a GraphQL `block` response body.
fn decode_block_response(body: &str) -> Result<Option<RawBlock>, ProviderError> {
    let response: GraphqlResponse = serde_json::from_str(body)?;

    if !response.errors.is_empty() {
        let messages: Vec<&str> = response.errors.iter().map(|e| e.message.as_str()).collect();
        return Err(ProviderError::Decode(messages.join("; ")));
    }

    let data = response
        .data
        .ok_or_else(|| ProviderError::Decode("Response has neither data nor errors".to_string()))?;
    Ok(data.block)
}

fn block_variables(block: &BlockRef) -> serde_json::Value {
    match block {
        BlockRef::Height(height) => json!({ "height": height.to_string() }),
        BlockRef::Id(id) => json!({ "id": id }),
    }
}

/// GraphQL client for one node endpoint.
#[derive(Debug, Clone)]
pub struct HttpChainProvider {
    http: reqwest::Client,
    url: String,
}

impl HttpChainProvider {
    pub fn new(http: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }

    async fn query_block(
        &self,
        query: &str,
        block: &BlockRef,
    ) -> Result<Option<RawBlock>, ProviderError> {
        debug!(url = %self.url, block = %block, "Querying block");

        let response = self
            .http
            .post(&self.url)
            .json(&json!({ "query": query, "variables": block_variables(block) }))
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Transport(format!(
                "HTTP {} from {}",
                status, self.url
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;
        decode_block_response(&body)
    }
}

#[async_trait(?Send)]
impl ChainProvider for HttpChainProvider {
    fn url(&self) -> &str {
        &self.url
    }

    async fn get_block(&self, block: &BlockRef) -> Result<Option<Block>, ProviderError> {
        self.query_block(BLOCK_QUERY, block)
            .await?
            .map(RawBlock::into_block)
            .transpose()
    }

    async fn get_block_with_transactions(
        &self,
        block: &BlockRef,
    ) -> Result<Option<BlockWithTransactions>, ProviderError> {
        Ok(self
            .query_block(BLOCK_WITH_TRANSACTIONS_QUERY, block)
            .await?
            .map(RawBlock::into_block_with_transactions))
    }
}

/// Builds [`HttpChainProvider`]s sharing one `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct HttpProviderFactory {
    http: reqwest::Client,
}

impl HttpProviderFactory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ChainProviderFactory for HttpProviderFactory {
    fn provider_for(&self, chain: &Chain) -> Box<dyn ChainProvider> {
        Box::new(HttpChainProvider::new(self.http.clone(), chain.url.clone()))
    }
}
