//! # Environment Variables
//!
//! Utilities for reading environment variables.

use std::env;

/// Get an environment variable by name.
pub fn get_env(name: &'static str) -> Result<String, Error> {
    env::var(name).map_err(|_| Error::MissingEnv(name))
}

// region:    --- Error
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    MissingEnv(&'static str),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_env() {
        assert_eq!(
            get_env("LIB_UTILS_TEST_SURELY_UNSET_VAR"),
            Err(Error::MissingEnv("LIB_UTILS_TEST_SURELY_UNSET_VAR"))
        );
    }
}
