//! # Address Formatting
//!
//! Shortens wallet addresses (`fuel1...` bech32 or `0x...` hex) for display:
//! - [`format_address`] - first N and last M characters joined with an ellipsis
//! - [`truncate_address`] - [`format_address`] with the default 6/4 split
//!
//! ```rust
//! use lib_utils::format::format_address;
//!
//! let address = "fuel1qxz7ztv9z4hj2mnf3e8a9t6xlwd3p0hyrgq2gsmy5s6mh0vc2d0qk8fnnw";
//! assert_eq!(format_address(address, 6, 4), "fuel1q...fnnw");
//! ```

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// Addresses too short to shorten meaningfully are returned as-is.
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let char_count = address.chars().count();
    if char_count <= prefix_len + suffix_len {
        return address.to_string();
    }

    let prefix: String = address.chars().take(prefix_len).collect();
    let suffix: String = address.chars().skip(char_count - suffix_len).collect();

    format!("{}...{}", prefix, suffix)
}

/// Shorten an address with the default 6-character prefix and 4-character suffix.
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}
