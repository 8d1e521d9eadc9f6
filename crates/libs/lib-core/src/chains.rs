//! # Known Chains
//!
//! Static table mapping the network id reported by the wallet to a chain name,
//! plus the built-in endpoints for those names.

use crate::model::Chain;

pub const BETA_1: &str = "beta-1";
pub const BETA_2: &str = "beta-2";
pub const BETA_3: &str = "beta-3";
pub const LOCALHOST: &str = "localhost";

/// Chain selected when the configuration does not name one.
pub const DEFAULT_CHAIN: &str = BETA_3;

const KNOWN_CHAINS: &[(&str, &str)] = &[
    (BETA_1, "https://node-beta-1.fuel.network/graphql"),
    (BETA_2, "https://node-beta-2.fuel.network/graphql"),
    (BETA_3, "https://beta-3.fuel.network/graphql"),
    (LOCALHOST, "http://localhost:4000/graphql"),
];

/// Map a provider network id to a chain name.
///
/// Unknown ids fall back to [`LOCALHOST`].
pub fn chain_name_for_id(id: &str) -> &'static str {
    match id.trim() {
        "4" => BETA_1,
        "2" => BETA_2,
        "1" => BETA_3,
        _ => LOCALHOST,
    }
}

/// All built-in chains.
pub fn known_chains() -> Vec<Chain> {
    KNOWN_CHAINS
        .iter()
        .map(|(name, url)| Chain::new(*name, *url))
        .collect()
}
