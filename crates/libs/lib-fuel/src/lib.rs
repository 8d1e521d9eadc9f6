//! # Fuel Wallet Connector Library
//!
//! Talks to a browser-injected Fuel wallet and queries chain data for the front-end.
//!
//! ## Module Overview
//!
//! ```text
//! lib-fuel/
//! ├── provider.rs    - WalletProvider capability, events, late-binding ProviderSlot
//! ├── chain.rs       - ChainProvider capability (block queries against a node)
//! ├── graphql.rs     - reqwest-backed ChainProvider for the node's GraphQL API
//! ├── client.rs      - Configuration client: chain allow-list + default endpoint
//! ├── types.rs       - Block / transaction models, BlockRef
//! ├── connectors/    - Connector trait and the injected-wallet connector
//! └── queries/       - Block and chain queries used by the UI hooks
//! ```

pub mod chain;
pub mod client;
pub mod connectors;
pub mod graphql;
pub mod provider;
pub mod queries;
pub mod types;

// Re-export commonly used types
pub use chain::{ChainProvider, ChainProviderFactory};
pub use client::Client;
pub use connectors::{Connector, InjectedConnector};
pub use provider::{
    ChainConfig, EventHandler, ListenerId, ProviderEvent, ProviderEventKind, ProviderSlot,
    WalletProvider,
};
pub use types::{Block, BlockRef, BlockWithTransactions, Transaction};
