//! Client configuration.
//!
//! [`Config`] holds the credentials and transport settings for a
//! [`Client`](crate::client::Client). The preferred way to supply it is
//! explicitly at construction; [`configure`] installs an optional
//! process-wide default for convenience callers (set once at startup,
//! read-only afterwards).

use std::env;
use std::sync::OnceLock;

use secrecy::{ExposeSecret, SecretString};

use crate::defaults;
use crate::error::{PagerDutyError, Result};
use crate::http::HttpConfig;

/// How the API key is rendered into the `Authorization` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthScheme {
    /// `Token token=<api_key>` — the REST API key scheme.
    #[default]
    Token,
    /// `Basic <api_key>` — for pre-encoded basic credentials.
    Basic,
}

/// PagerDuty client configuration.
///
/// # Example
/// ```rust
/// use pagerduty_client::Config;
///
/// let config = Config::new("your-api-key")
///     .with_base_url("https://api.eu.pagerduty.com");
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// API key (securely stored)
    pub api_key: SecretString,

    /// Base URL for the API, without a trailing slash
    pub base_url: String,

    /// Authorization scheme used with the API key
    pub auth_scheme: AuthScheme,

    /// HTTP configuration
    pub http: HttpConfig,
}

impl Config {
    /// Create a configuration for the hosted API with the given API key.
    pub fn new<S: Into<String>>(api_key: S) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            base_url: defaults::api::BASE_URL.to_string(),
            auth_scheme: AuthScheme::default(),
            http: HttpConfig::default(),
        }
    }

    /// Create a configuration from the environment.
    ///
    /// Reads `PAGERDUTY_API_KEY` (required) and `PAGERDUTY_BASE_URL`
    /// (optional).
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("PAGERDUTY_API_KEY").map_err(|_| {
            PagerDutyError::ConfigurationError("PAGERDUTY_API_KEY is not set".to_string())
        })?;
        let mut config = Self::new(api_key);
        if let Ok(base_url) = env::var("PAGERDUTY_BASE_URL") {
            config = config.with_base_url(base_url);
        }
        Ok(config)
    }

    /// Set the base URL. A trailing slash is stripped so URL joining always
    /// produces a single separator.
    pub fn with_base_url<S: Into<String>>(mut self, url: S) -> Self {
        let url = url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Set the authorization scheme.
    pub fn with_auth_scheme(mut self, scheme: AuthScheme) -> Self {
        self.auth_scheme = scheme;
        self
    }

    /// Set the HTTP configuration.
    pub fn with_http_config(mut self, http: HttpConfig) -> Self {
        self.http = http;
        self
    }

    /// Get the authorization header value for API requests.
    pub fn auth_header(&self) -> String {
        match self.auth_scheme {
            AuthScheme::Token => format!("Token token={}", self.api_key.expose_secret()),
            AuthScheme::Basic => format!("Basic {}", self.api_key.expose_secret()),
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.expose_secret().is_empty() {
            return Err(PagerDutyError::ConfigurationError(
                "API key cannot be empty".to_string(),
            ));
        }

        if self.base_url.is_empty() {
            return Err(PagerDutyError::ConfigurationError(
                "Base URL cannot be empty".to_string(),
            ));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(PagerDutyError::ConfigurationError(
                "Base URL must start with http:// or https://".to_string(),
            ));
        }

        Ok(())
    }
}

static GLOBAL_CONFIG: OnceLock<Config> = OnceLock::new();

/// Install the process-wide default configuration.
///
/// Can be called at most once, before any
/// [`Client::from_global`](crate::client::Client::from_global) call.
/// Subsequent calls fail with [`PagerDutyError::ConfigurationError`].
pub fn configure(config: Config) -> Result<()> {
    config.validate()?;
    GLOBAL_CONFIG.set(config).map_err(|_| {
        PagerDutyError::ConfigurationError(
            "process-wide configuration is already set".to_string(),
        )
    })
}

/// The process-wide default configuration, if one was installed.
pub fn global_config() -> Option<&'static Config> {
    GLOBAL_CONFIG.get()
}
