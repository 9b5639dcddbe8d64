//! Fetch failures.
//!
//! Every variant collapses into one user-facing message; the typed error is
//! only kept for logs.

use thiserror::Error;

/// Message shown for any non-cancellation failure.
pub const GENERIC_FETCH_ERROR: &str = "Could not fetch data";

#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, TLS, timeout or body read failure.
    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-2xx status.
    #[error("'{url}' responded with {status} {reason}")]
    Status {
        url: String,
        status: u16,
        reason: String,
    },

    /// Response body was not the expected JSON.
    #[error("Failed to decode response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// User-facing message. The cause is intentionally dropped.
    pub fn user_message(&self) -> &'static str {
        GENERIC_FETCH_ERROR
    }

    pub fn url(&self) -> &str {
        match self {
            FetchError::Transport { url, .. }
            | FetchError::Status { url, .. }
            | FetchError::Decode { url, .. } => url,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            FetchError::Transport { source, .. } => source.status().map(|s| s.as_u16()),
            FetchError::Decode { .. } => None,
        }
    }
}
