//! # Chain Data Types
//!
//! Blocks as returned by the block queries, and [`BlockRef`], the parsed form of
//! the "id or height" the UI passes in.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A block addressed either by height or by id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BlockRef {
    Height(u64),
    Id(String),
}

impl BlockRef {
    /// Parse user input: blank → `None`, a decimal number → height, anything else → id.
    ///
    /// ```rust
    /// use lib_fuel::types::BlockRef;
    ///
    /// assert_eq!(BlockRef::parse("42"), Some(BlockRef::Height(42)));
    /// assert_eq!(BlockRef::parse("0x1f"), Some(BlockRef::Id("0x1f".to_string())));
    /// assert_eq!(BlockRef::parse("  "), None);
    /// ```
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        match raw.parse::<u64>() {
            Ok(height) => Some(BlockRef::Height(height)),
            Err(_) => Some(BlockRef::Id(raw.to_string())),
        }
    }
}

impl From<u64> for BlockRef {
    fn from(height: u64) -> Self {
        BlockRef::Height(height)
    }
}

impl fmt::Display for BlockRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockRef::Height(height) => write!(f, "height {}", height),
            BlockRef::Id(id) => write!(f, "id {}", id),
        }
    }
}

/// Block header data with transaction ids only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub id: String,
    pub height: u64,
    /// TAI64 timestamp as reported by the node.
    pub time: String,
    pub transaction_ids: Vec<String>,
}

/// A transaction inside a [`BlockWithTransactions`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    /// Hex-encoded transaction bytes, when the node returns them.
    pub raw_payload: Option<String>,
}

/// Block with its full transactions. The height is kept as a string for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockWithTransactions {
    pub id: String,
    pub height: String,
    pub time: String,
    pub transaction_ids: Vec<String>,
    pub transactions: Vec<Transaction>,
}

/// Deserialize a field that may arrive as a JSON string or number into a `String`.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(u64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Int(value) => value.to_string(),
        Raw::Float(value) => value.to_string(),
    })
}
