//! # Utilities Library
//!
//! Shared utility functions for environment variables, address formatting, and validation.

pub mod envs;
pub mod format;
pub mod validation;

// Re-export commonly used functions
pub use envs::get_env;
pub use format::{format_address, truncate_address};
pub use validation::{validate_http_url, validate_not_empty};
