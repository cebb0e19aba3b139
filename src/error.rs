//! Error types for the PagerDuty client.
//!
//! Every fallible operation in this crate returns [`PagerDutyError`]. API
//! failures keep the original HTTP status code and the raw response body so
//! callers can diagnose what the server actually said.

use thiserror::Error;

/// Convenience result alias used across the crate.
pub type Result<T> = std::result::Result<T, PagerDutyError>;

/// Unified error type for all client operations.
#[derive(Debug, Error)]
pub enum PagerDutyError {
    /// The requested resource does not exist (HTTP 404).
    ///
    /// Kept distinct from [`PagerDutyError::BadRequest`] so callers can
    /// special-case "resource absent" from "request malformed".
    #[error("resource not found (HTTP {status}): {body}")]
    NotFound {
        /// HTTP status code (always 404).
        status: u16,
        /// Raw response body, verbatim.
        body: String,
    },

    /// The API rejected the request (4xx other than 404).
    #[error("bad request (HTTP {status}): {body}")]
    BadRequest {
        /// HTTP status code.
        status: u16,
        /// Raw response body, verbatim.
        body: String,
    },

    /// Any other non-success status (5xx, or a 3xx the transport did not
    /// resolve).
    #[error("unknown API error (HTTP {status}): {body}")]
    UnknownError {
        /// HTTP status code.
        status: u16,
        /// Raw response body, verbatim.
        body: String,
    },

    /// A success response carried a non-empty body that is not valid JSON.
    /// Carries the unparsed text.
    #[error("invalid response body: {0}")]
    InvalidResponse(String),

    /// A caller-supplied header entry does not form a valid HTTP header.
    #[error("invalid headers: {0}")]
    InvalidHeaders(String),

    /// Query parameters that cannot be normalized unambiguously.
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Transport-level failure: DNS, connect, timeout, or body read.
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// Invalid or missing client configuration.
    #[error("configuration error: {0}")]
    ConfigurationError(String),
}

impl PagerDutyError {
    /// HTTP status code for the status-carrying variants, `None` otherwise.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::NotFound { status, .. }
            | Self::BadRequest { status, .. }
            | Self::UnknownError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether this error is the 404 "resource absent" case.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<reqwest::Error> for PagerDutyError {
    fn from(err: reqwest::Error) -> Self {
        Self::HttpError(err.to_string())
    }
}
