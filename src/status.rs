//! Status reporting for search outcomes.
//!
//! Prints a colour-coded line on stderr and mirrors it to the log.

use crate::error::{ErrorKind, SearchError};
use crossterm::style::Stylize;

/// Severity of a status message, which selects its colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Error,
}

/// Outcome of a search, as reported to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// At least one video matched
    Found {
        count: usize,
        query: String,
        min_duration: u64,
    },
    /// The request succeeded but nothing matched
    NotFound { query: String },
    /// The request failed
    Failed { kind: ErrorKind, message: String },
}

impl Status {
    /// Build the status for a successful search.
    pub fn for_results(query: &str, min_duration: u64, count: usize) -> Self {
        if count == 0 {
            Status::NotFound {
                query: query.to_string(),
            }
        } else {
            Status::Found {
                count,
                query: query.to_string(),
                min_duration,
            }
        }
    }

    /// Build the status for a failed search.
    pub fn for_error(error: &SearchError) -> Self {
        Status::Failed {
            kind: error.kind(),
            message: error.to_string(),
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Status::Found { .. } => Severity::Success,
            Status::NotFound { .. } => Severity::Warning,
            Status::Failed { .. } => Severity::Error,
        }
    }

    /// Human-readable status line.
    pub fn message(&self) -> String {
        match self {
            Status::Found {
                count,
                query,
                min_duration,
            } => format!(
                "Found {} videos for query \"{}\" with minimum duration of {} seconds.",
                count, query, min_duration
            ),
            Status::NotFound { query } => format!(
                "No videos found for query \"{}\" with the specified criteria.",
                query
            ),
            Status::Failed { kind, message } => match kind {
                ErrorKind::Transport => format!("Error during request: {}", message),
                ErrorKind::Parse => format!("Error processing JSON response: {}", message),
                ErrorKind::Unexpected => format!("An unexpected error occurred: {}", message),
            },
        }
    }

    /// Print the status on stderr and log it.
    pub fn emit(&self) {
        let message = self.message();
        tracing::debug!(severity = ?self.severity(), "{}", message);

        let styled = match self.severity() {
            Severity::Success => message.as_str().green(),
            Severity::Warning => message.as_str().yellow(),
            Severity::Error => message.as_str().red(),
        };
        eprintln!("{}", styled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_found_message() {
        let status = Status::for_results("forest", 10, 3);
        assert_eq!(status.severity(), Severity::Success);
        assert_eq!(
            status.message(),
            "Found 3 videos for query \"forest\" with minimum duration of 10 seconds."
        );
    }

    #[test]
    fn test_not_found_message() {
        let status = Status::for_results("forest", 10, 0);
        assert_eq!(status.severity(), Severity::Warning);
        assert_eq!(
            status.message(),
            "No videos found for query \"forest\" with the specified criteria."
        );
    }

    #[test]
    fn test_failed_message() {
        let error = SearchError::Status {
            status: StatusCode::UNAUTHORIZED,
            body: "Unauthorized".to_string(),
        };
        let status = Status::for_error(&error);
        assert_eq!(status.severity(), Severity::Error);
        assert!(status.message().starts_with("Error during request: "));

        let parse = SearchError::from(serde_json::from_str::<u32>("{").unwrap_err());
        assert!(
            Status::for_error(&parse)
                .message()
                .starts_with("Error processing JSON response: ")
        );
    }
}
