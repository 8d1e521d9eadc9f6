//! # Core Library
//!
//! Errors, configuration, the chain table and the shared wallet store.

pub mod chains;
pub mod config;
pub mod error;
pub mod model;
pub mod store;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ProviderError, Result};
pub use model::{Chain, ConnectionStatus, Wallet};
pub use store::{Store, StoreState};
