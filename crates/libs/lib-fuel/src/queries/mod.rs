//! # Queries
//!
//! Thin data-fetching wrappers the UI hooks call. No caching or retry here: each
//! call goes straight to the configuration client's default chain provider.

pub mod block;
pub mod chains;
pub mod latest;

pub use block::{fetch_block, fetch_block_with_transactions};
pub use chains::{chains_view, ChainsView};
pub use latest::{LatestRequest, RequestTicket};

use lib_core::{AppError, Result};

/// State of a query as seen by a hook.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryState<T> {
    /// Disabled: nothing to fetch yet.
    Idle,
    Loading,
    Success(T),
    Error(AppError),
}

impl<T> QueryState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, QueryState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, QueryState::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, QueryState::Error(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            QueryState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&AppError> {
        match self {
            QueryState::Error(err) => Some(err),
            _ => None,
        }
    }
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        QueryState::Idle
    }
}

impl<T> From<Result<T>> for QueryState<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(data) => QueryState::Success(data),
            Err(err) => QueryState::Error(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_state_accessors() {
        let idle: QueryState<u32> = QueryState::default();
        assert!(idle.is_idle());
        assert_eq!(idle.data(), None);

        let ok: QueryState<u32> = Ok(7).into();
        assert!(ok.is_success());
        assert_eq!(ok.data(), Some(&7));

        let failed: QueryState<u32> = Err(AppError::BlockNotFound).into();
        assert!(failed.is_error());
        assert_eq!(failed.error(), Some(&AppError::BlockNotFound));
        assert!(!failed.is_loading());
    }
}
