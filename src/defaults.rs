//! Default Configuration Values
//!
//! This module centralizes the default values used throughout the client.
//! Having defaults in one place makes them easier to maintain, document, and
//! adjust.

use std::time::Duration;

/// Wire-level constants for the PagerDuty REST API.
pub mod api {
    /// Versioned media type sent in the `Accept` header.
    ///
    /// PagerDuty selects the API version from this value, so it must be sent
    /// on every request.
    pub const MEDIA_TYPE: &str = "application/vnd.pagerduty+json;version=2";

    /// Base URL of the hosted API.
    pub const BASE_URL: &str = "https://api.pagerduty.com";
}

/// HTTP client default configurations
pub mod http {
    use super::*;

    /// Default request timeout for HTTP requests
    ///
    /// The API answers interactively; 30 seconds covers slow list endpoints
    /// plus network latency and proxy delays.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Default connection timeout for establishing HTTP connections
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Default User-Agent string for HTTP requests
    pub const USER_AGENT: &str = concat!("pagerduty-client/", env!("CARGO_PKG_VERSION"));
}
