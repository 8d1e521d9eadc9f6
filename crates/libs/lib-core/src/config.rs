//! # Application Configuration
//!
//! The chain allow-list and the chain the configuration client starts on.
//!
//! [`Config::from_env`] reads the variables below; in the browser none are set, so
//! it yields the built-in chains:
//!
//! | Variable | Format | Default |
//! |----------|--------|---------|
//! | `FUEL_CHAINS` | `name=url` pairs separated by `,` | built-in chains |
//! | `FUEL_DEFAULT_CHAIN` | chain name | `beta-3` |
//!
//! ```rust
//! use lib_core::config::Config;
//!
//! let config = Config::default();
//! assert!(config.validate().is_ok());
//! assert!(config.chain("beta-3").is_some());
//! ```

use crate::chains::{known_chains, DEFAULT_CHAIN};
use crate::error::{AppError, Result};
use crate::model::Chain;
use lib_utils::envs::get_env;
use lib_utils::validation::{validate_http_url, validate_not_empty};
use std::collections::HashSet;

pub const ENV_CHAINS: &str = "FUEL_CHAINS";
pub const ENV_DEFAULT_CHAIN: &str = "FUEL_DEFAULT_CHAIN";

/// Chains the application accepts, and the one it starts on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Allow-listed chains. A wallet network outside this list is rejected.
    pub chains: Vec<Chain>,

    /// Name of the chain used as the initial default endpoint.
    pub default_chain: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chains: known_chains(),
            default_chain: DEFAULT_CHAIN.to_string(),
        }
    }
}

impl Config {
    pub fn new(chains: Vec<Chain>, default_chain: impl Into<String>) -> Self {
        Self {
            chains,
            default_chain: default_chain.into(),
        }
    }

    /// Load configuration from environment variables (and `.env` when present).
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(get_env(ENV_CHAINS).ok(), get_env(ENV_DEFAULT_CHAIN).ok())
    }

    /// Build a validated configuration from raw variable values.
    ///
    /// Unset or blank values fall back to the built-in chains and `beta-3`.
    pub fn from_vars(chains: Option<String>, default_chain: Option<String>) -> Result<Self> {
        let chains = match chains.filter(|raw| !raw.trim().is_empty()) {
            Some(raw) => parse_chain_list(&raw)?,
            None => known_chains(),
        };
        let default_chain = default_chain
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_CHAIN.to_string());

        let config = Self { chains, default_chain };
        config.validate()?;
        Ok(config)
    }

    /// Validate the chain list and the default chain.
    pub fn validate(&self) -> Result<()> {
        if self.chains.is_empty() {
            return Err(AppError::Config("At least one chain must be configured".to_string()));
        }

        let mut seen = HashSet::new();
        for chain in &self.chains {
            validate_not_empty(&chain.name, "Chain name").map_err(AppError::Config)?;
            validate_http_url(&chain.url, &format!("URL of chain '{}'", chain.name))
                .map_err(AppError::Config)?;
            if !seen.insert(chain.name.as_str()) {
                return Err(AppError::Config(format!("Chain '{}' is configured twice", chain.name)));
            }
        }

        if self.chain(&self.default_chain).is_none() {
            return Err(AppError::Config(format!(
                "Default chain '{}' is not in the chain list",
                self.default_chain
            )));
        }

        Ok(())
    }

    pub fn chain(&self, name: &str) -> Option<&Chain> {
        self.chains.iter().find(|chain| chain.name == name)
    }
}

/// Parse a `name=url,name=url` chain list. Blank entries are skipped.
pub fn parse_chain_list(raw: &str) -> Result<Vec<Chain>> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (name, url) = entry
                .split_once('=')
                .ok_or_else(|| AppError::Config(format!("Expected name=url, got '{}'", entry)))?;
            Ok(Chain::new(name.trim(), url.trim()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.default_chain, "beta-3");
    }

    #[test]
    fn test_parse_chain_list() {
        let chains = parse_chain_list(
            " beta-1=https://node-beta-1.fuel.network/graphql, ,localhost = http://127.0.0.1:4000/graphql",
        )
        .unwrap();
        assert_eq!(
            chains,
            vec![
                Chain::new("beta-1", "https://node-beta-1.fuel.network/graphql"),
                Chain::new("localhost", "http://127.0.0.1:4000/graphql"),
            ]
        );
    }

    #[test]
    fn test_parse_chain_list_rejects_malformed_entry() {
        let err = parse_chain_list("beta-1").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_from_vars_defaults() {
        assert_eq!(Config::from_vars(None, None).unwrap(), Config::default());
        assert_eq!(
            Config::from_vars(Some("  ".to_string()), Some("".to_string())).unwrap(),
            Config::default()
        );
    }

    #[test]
    fn test_from_vars_explicit_list() {
        let config = Config::from_vars(
            Some("localhost=http://127.0.0.1:4000/graphql,beta-1=https://x".to_string()),
            Some("beta-1".to_string()),
        )
        .unwrap();

        assert_eq!(config.chains.len(), 2);
        assert_eq!(config.default_chain, "beta-1");
        assert_eq!(config.chain("localhost").map(|c| c.url.as_str()), Some("http://127.0.0.1:4000/graphql"));
    }

    #[test]
    fn test_from_vars_rejects_bad_values() {
        let malformed = Config::from_vars(Some("beta-1".to_string()), None);
        assert!(matches!(malformed, Err(AppError::Config(_))));

        let unknown_default = Config::from_vars(
            Some("beta-1=https://x".to_string()),
            Some("beta-3".to_string()),
        );
        assert_eq!(
            unknown_default,
            Err(AppError::Config(
                "Default chain 'beta-3' is not in the chain list".to_string()
            ))
        );

        // the built-in default must be listed too
        let missing_builtin_default = Config::from_vars(Some("beta-1=https://x".to_string()), None);
        assert!(matches!(missing_builtin_default, Err(AppError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_bad_configs() {
        let empty = Config::new(vec![], "beta-3");
        assert!(empty.validate().is_err());

        let missing_default = Config::new(vec![Chain::new("beta-1", "https://x")], "beta-3");
        assert!(missing_default.validate().is_err());

        let bad_url = Config::new(vec![Chain::new("beta-1", "ftp://x")], "beta-1");
        assert!(bad_url.validate().is_err());

        let duplicate = Config::new(
            vec![Chain::new("beta-1", "https://x"), Chain::new("beta-1", "https://y")],
            "beta-1",
        );
        assert_eq!(
            duplicate.validate(),
            Err(AppError::Config("Chain 'beta-1' is configured twice".to_string()))
        );
    }
}
