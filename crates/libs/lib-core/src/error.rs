//! # Centralized Error Handling
//!
//! This module defines the error type [`AppError`] shared by the connector, the
//! configuration client and the block queries. It follows the `thiserror` pattern.
//!
//! ## Error Categories
//!
//! 1. **Precondition Errors** - raised before any state is touched
//!    - [`ProviderNotDefined`](AppError::ProviderNotDefined)
//!    - [`UserAlreadyConnected`](AppError::UserAlreadyConnected)
//!    - [`UserAlreadyDisconnected`](AppError::UserAlreadyDisconnected)
//!    - [`TransitionInProgress`](AppError::TransitionInProgress)
//!
//! 2. **Chain Errors**
//!    - [`ChainNotConfigured`](AppError::ChainNotConfigured)
//!    - [`BlockNotFound`](AppError::BlockNotFound)
//!
//! 3. **Provider Errors** - [`Provider`](AppError::Provider) wraps a
//!    [`ProviderError`] transparently, so callers see the provider's own message.
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{AppError, Result};
//!
//! fn require_id(id: Option<&str>) -> Result<&str> {
//!     id.ok_or(AppError::BlockNotFound)
//! }
//!
//! assert!(require_id(None).is_err());
//! ```

use crate::model::ConnectionStatus;
use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Error type covering connector, client and query failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    /// No injected wallet provider is available (yet).
    #[error("Provider is not defined")]
    ProviderNotDefined,

    /// `connect()` was called while the store already reports `connected`.
    #[error("User is already connected")]
    UserAlreadyConnected,

    /// `disconnect()` was called while the store already reports `disconnected`.
    #[error("User is already disconnected")]
    UserAlreadyDisconnected,

    /// A connect or disconnect is still awaiting the provider.
    #[error("Connection change already in progress (status: {0})")]
    TransitionInProgress(ConnectionStatus),

    /// The network reported by the provider is not in the application's chain list.
    #[error("Chain is not configured: {0}")]
    ChainNotConfigured(String),

    /// No block id/height was given, or the chain returned no block.
    #[error("Block not found")]
    BlockNotFound,

    /// Configuration error during startup or environment loading.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failure reported by the injected provider or the chain endpoint, passed through as-is.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl AppError {
    /// Whether this error was raised by a precondition check (no state was mutated).
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            AppError::ProviderNotDefined
                | AppError::UserAlreadyConnected
                | AppError::UserAlreadyDisconnected
                | AppError::TransitionInProgress(_)
        )
    }
}

/// Errors produced by a wallet provider or a chain endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The provider refused the request (user declined, wallet locked, ...).
    #[error("{0}")]
    Rejected(String),

    /// The provider went away or does not implement the call.
    #[error("Provider unavailable: {0}")]
    Unavailable(String),

    /// HTTP failure talking to a chain endpoint.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The provider answered with a payload we could not decode.
    #[error("Decode error: {0}")]
    Decode(String),
}

/// Convert `serde_json::Error` to `ProviderError`.
impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        ProviderError::Decode(format!("JSON error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_is_transparent() {
        let err: AppError = ProviderError::Rejected("User rejected the request".to_string()).into();
        assert_eq!(err.to_string(), "User rejected the request");
        assert!(!err.is_precondition());
    }

    #[test]
    fn test_precondition_errors() {
        assert!(AppError::ProviderNotDefined.is_precondition());
        assert!(AppError::UserAlreadyConnected.is_precondition());
        assert!(AppError::TransitionInProgress(ConnectionStatus::Connecting).is_precondition());
        assert!(!AppError::ChainNotConfigured("beta-1".to_string()).is_precondition());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            AppError::ChainNotConfigured("beta-2".to_string()).to_string(),
            "Chain is not configured: beta-2"
        );
        assert_eq!(
            AppError::TransitionInProgress(ConnectionStatus::Disconnecting).to_string(),
            "Connection change already in progress (status: disconnecting)"
        );
    }
}
