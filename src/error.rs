//! Error types for Pexels video searches.

use reqwest::StatusCode;

/// Broad category of a search failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Network failure or non-success HTTP status
    Transport,
    /// Response body did not match the expected JSON shape
    Parse,
    /// Anything else (invalid request parameters)
    Unexpected,
}

/// Failure of a single search request.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Pexels API error ({status}): {body}")]
    Status { status: StatusCode, body: String },

    #[error("failed to parse search response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid search request: {0}")]
    InvalidRequest(String),
}

impl SearchError {
    /// Map the error onto its broad category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SearchError::Request(_) | SearchError::Status { .. } => ErrorKind::Transport,
            SearchError::Parse(_) => ErrorKind::Parse,
            SearchError::InvalidRequest(_) => ErrorKind::Unexpected,
        }
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let status = SearchError::Status {
            status: StatusCode::UNAUTHORIZED,
            body: String::new(),
        };
        assert_eq!(status.kind(), ErrorKind::Transport);

        let parse = SearchError::from(serde_json::from_str::<u32>("nope").unwrap_err());
        assert_eq!(parse.kind(), ErrorKind::Parse);

        let invalid = SearchError::InvalidRequest("per_page must be positive".to_string());
        assert_eq!(invalid.kind(), ErrorKind::Unexpected);
    }

    #[test]
    fn test_status_error_message() {
        let err = SearchError::Status {
            status: StatusCode::UNAUTHORIZED,
            body: "Unauthorized".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Pexels API error (401 Unauthorized): Unauthorized"
        );
    }
}
