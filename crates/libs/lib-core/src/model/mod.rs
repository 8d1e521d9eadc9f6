//! # Domain Models
//!
//! Plain data types shared by the store, the connector and the queries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Wallet connection status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    /// No wallet connected
    #[default]
    Disconnected,
    /// Waiting for the provider to accept a connection
    Connecting,
    /// Wallet connected
    Connected,
    /// Waiting for the provider to drop the connection
    Disconnecting,
}

impl ConnectionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionStatus::Disconnected => "disconnected",
            ConnectionStatus::Connecting => "connecting",
            ConnectionStatus::Connected => "connected",
            ConnectionStatus::Disconnecting => "disconnecting",
        }
    }

    /// A connect or disconnect is awaiting the provider.
    pub fn is_transient(&self) -> bool {
        matches!(self, ConnectionStatus::Connecting | ConnectionStatus::Disconnecting)
    }
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A chain the application can talk to: a known network name and its GraphQL endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chain {
    pub name: String,
    pub url: String,
}

impl Chain {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Wallet handle returned by the provider for an account.
///
/// This is the locked (read-only) view of the wallet: no key material ever
/// leaves the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub address: String,
    #[serde(default)]
    pub provider_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&ConnectionStatus::Disconnecting).unwrap();
        assert_eq!(json, "\"disconnecting\"");
        assert_eq!(ConnectionStatus::default(), ConnectionStatus::Disconnected);
    }

    #[test]
    fn test_transient_status() {
        assert!(ConnectionStatus::Connecting.is_transient());
        assert!(ConnectionStatus::Disconnecting.is_transient());
        assert!(!ConnectionStatus::Connected.is_transient());
        assert!(!ConnectionStatus::Disconnected.is_transient());
    }

    #[test]
    fn test_wallet_from_provider_payload() {
        let wallet: Wallet = serde_json::from_str(
            r#"{"address":"fuel1abc","providerUrl":"https://beta-3.fuel.network/graphql"}"#,
        )
        .unwrap();
        assert_eq!(wallet.address, "fuel1abc");
        assert_eq!(
            wallet.provider_url.as_deref(),
            Some("https://beta-3.fuel.network/graphql")
        );

        let bare: Wallet = serde_json::from_str(r#"{"address":"fuel1abc"}"#).unwrap();
        assert_eq!(bare.provider_url, None);
    }
}
