use jobfinder_core::{JobRecord, RequestId};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    SearchCompleted {
        request_id: RequestId,
        result: Result<Vec<JobRecord>, SearchError>,
    },
}

/// Why a search request produced no result list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("invalid endpoint {url:?}: {message}")]
    InvalidEndpoint { url: String, message: String },
    #[error("could not encode request: {0}")]
    Encode(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("http status {status}: {detail}")]
    HttpStatus { status: u16, detail: String },
    #[error("response too large (max {max_bytes}, actual {actual:?})")]
    TooLarge { max_bytes: u64, actual: Option<u64> },
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl SearchError {
    /// True when the backend answered with success but the body was unusable.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            SearchError::MalformedResponse(_) | SearchError::TooLarge { .. }
        )
    }
}
