//! Error types for the Asana gateway.

use thiserror::Error;

/// Default wait hint applied when a 429 response carries no usable
/// `Retry-After` header.
pub const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Errors that can occur when talking to the Asana API.
#[derive(Debug, Error)]
pub enum Error {
    /// The provided token contains characters that cannot form a header value.
    #[error("invalid token format")]
    InvalidToken,

    /// An HTTP request failed before a classified response was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to parse a response from the API.
    #[error("failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// The API rejected the credentials (HTTP 401/403). Not retryable.
    #[error("authentication failed: {message}")]
    Auth {
        /// The error message from the API.
        message: String,
    },

    /// The API rate limit was hit (HTTP 429). Retryable after the hint.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Suggested wait in seconds, from the `Retry-After` header.
        retry_after_secs: u64,
    },

    /// A resource was not found (HTTP 404).
    #[error("not found: {message} ({path})")]
    NotFound {
        /// The request path that produced the 404.
        path: String,
        /// The error message from the API.
        message: String,
    },

    /// The API returned another error response.
    #[error("API error (status {status}): {message}")]
    Api {
        /// The HTTP status code.
        status: u16,
        /// The error message from the API.
        message: String,
    },
}

impl Error {
    /// Whether the caller may usefully retry the failed operation.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::RateLimited { .. })
    }

    /// Suggested wait before retrying, when the error is retryable.
    pub fn retry_after_secs(&self) -> Option<u64> {
        match self {
            Error::RateLimited { retry_after_secs } => Some(*retry_after_secs),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limited_is_retryable() {
        let error = Error::RateLimited {
            retry_after_secs: 30,
        };
        assert!(error.is_retryable());
        assert_eq!(error.retry_after_secs(), Some(30));
    }

    #[test]
    fn test_other_errors_are_not_retryable() {
        let auth = Error::Auth {
            message: "bad token".to_string(),
        };
        let api = Error::Api {
            status: 500,
            message: "server error".to_string(),
        };
        assert!(!auth.is_retryable());
        assert!(!api.is_retryable());
        assert_eq!(api.retry_after_secs(), None);
    }

    #[test]
    fn test_not_found_display_names_path() {
        let error = Error::NotFound {
            path: "/tasks/999".to_string(),
            message: "task: Unknown object: 999".to_string(),
        };
        let rendered = error.to_string();
        assert!(rendered.contains("/tasks/999"));
        assert!(rendered.contains("Unknown object"));
    }
}
