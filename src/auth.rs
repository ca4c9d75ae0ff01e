//! Per-request tenant credential extraction.
//!
//! Credentials live for exactly one inbound request: a presence check on a
//! single header, no transformation, no caching.

use axum::http::HeaderMap;
use thiserror::Error;

/// Header carrying the tenant's Asana personal access token.
pub const TOKEN_HEADER: &str = "X-Asana-Access-Token";

/// Bearer token scoped to a single inbound request.
#[derive(Clone)]
pub struct Credentials {
    token: String,
}

impl Credentials {
    /// The raw access token.
    pub fn token(&self) -> &str {
        &self.token
    }
}

// Keep tokens out of debug logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials").field("token", &"***").finish()
    }
}

/// The required credential header was absent or empty.
#[derive(Debug, Error)]
#[error("missing required header X-Asana-Access-Token")]
pub struct MissingCredentials;

/// Extract the tenant token from inbound headers. Fails closed when the
/// header is absent, unreadable, or empty.
pub fn extract_credentials(headers: &HeaderMap) -> Result<Credentials, MissingCredentials> {
    headers
        .get(TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| Credentials {
            token: token.to_string(),
        })
        .ok_or(MissingCredentials)
}
