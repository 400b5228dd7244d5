// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SearchError>;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Search engine unavailable: {0}")]
    EngineUnavailable(String),

    #[error("Search engine request timed out after {seconds}s")]
    EngineTimeout { seconds: u64 },

    #[error("Search engine response could not be decoded: {0}")]
    EngineResponse(String),

    #[error("Stale response discarded: request {request} superseded by {latest}")]
    StaleResponse { request: u64, latest: u64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SearchError {
    /// A single failed engine call is terminal for that search attempt and is
    /// reported to the caller, never collapsed into an empty result set.
    pub fn is_engine_failure(&self) -> bool {
        matches!(
            self,
            SearchError::EngineUnavailable(_)
                | SearchError::EngineTimeout { .. }
                | SearchError::EngineResponse(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_failure_classification() {
        assert!(SearchError::EngineUnavailable("refused".into()).is_engine_failure());
        assert!(SearchError::EngineTimeout { seconds: 10 }.is_engine_failure());
        assert!(!SearchError::Config("bad".into()).is_engine_failure());
        assert!(
            !SearchError::StaleResponse {
                request: 1,
                latest: 2
            }
            .is_engine_failure()
        );
    }

    #[test]
    fn test_display_messages() {
        let err = SearchError::EngineTimeout { seconds: 10 };
        assert_eq!(
            err.to_string(),
            "Search engine request timed out after 10s"
        );
    }
}
