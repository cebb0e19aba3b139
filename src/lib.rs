//! pagerduty-client
//!
//! Request-execution core for the PagerDuty REST API v2: authenticated
//! headers, query-parameter normalization, a pluggable transport, and
//! response classification into a small typed error taxonomy.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use pagerduty_client::{Client, Config, QueryParams};
//!
//! # async fn run() -> pagerduty_client::Result<()> {
//! let client = Client::new(Config::new("your-api-key"))?;
//!
//! // Sequence-valued parameters go on the wire as `statuses[]=triggered,acknowledged`.
//! let incidents = client
//!     .get(
//!         "incidents",
//!         QueryParams::from([("statuses", vec!["triggered", "acknowledged"])]),
//!     )
//!     .await?;
//!
//! if let Some(body) = incidents {
//!     println!("{body}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Outcomes
//!
//! Every call returns `Result<Option<serde_json::Value>>`:
//! `Ok(Some(value))` for a decoded JSON body, `Ok(None)` for an empty body
//! (distinct from JSON `null`), or a [`PagerDutyError`] that keeps the
//! original status code and response text.
//!
//! # Testability
//!
//! The network sits behind the [`Transport`] trait; hand
//! [`Client::with_transport`] an in-memory implementation to exercise the
//! whole pipeline without I/O.

#![deny(unsafe_code)]

pub mod client;
pub mod config;
pub mod defaults;
pub mod endpoint;
pub mod error;
pub mod headers;
pub mod http;
pub mod params;
pub mod response;
pub mod transport;

pub use client::{ApiRequest, Client};
pub use config::{AuthScheme, Config, configure, global_config};
pub use endpoint::Endpoint;
pub use error::{PagerDutyError, Result};
pub use http::{HttpConfig, HttpConfigBuilder};
pub use params::{QueryParams, QueryValue};
pub use transport::{ReqwestTransport, Transport, TransportRequest, TransportResponse};

// Re-exported so callers don't need a direct reqwest dependency for verbs.
pub use reqwest::Method;
