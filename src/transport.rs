//! HTTP transport abstraction.
//!
//! The pipeline never talks to the network directly; it hands a fully built
//! [`TransportRequest`] to a [`Transport`] and gets back the raw response
//! descriptor. Production code uses [`ReqwestTransport`]; tests substitute an
//! in-memory implementation that observes the request and returns a canned
//! response.

use async_trait::async_trait;
use reqwest::Method;
use reqwest::header::HeaderMap;
use serde_json::Value;

use crate::error::{PagerDutyError, Result};
use crate::http::{HttpConfig, build_http_client};

/// Transport-level request data: everything needed to perform one call.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// HTTP verb.
    pub method: Method,
    /// Full URL (base URL already joined with the endpoint path).
    pub url: String,
    /// Normalized query parameters, in order.
    pub query: Vec<(String, String)>,
    /// Effective header set.
    pub headers: HeaderMap,
    /// JSON payload; serialized to a string just before sending.
    pub body: Option<Value>,
}

/// Raw response descriptor: status, body text, and headers as received,
/// before any classification.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body text, verbatim.
    pub text: String,
    /// Response headers, kept for diagnostic use.
    pub headers: HeaderMap,
}

/// A pluggable "send" operation.
///
/// This is the one seam between the pipeline and the network: implement it
/// over a real HTTP client in production, or return synthetic responses in
/// tests without any I/O.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse>;
}

/// Production transport over a shared `reqwest::Client`.
///
/// Redirects follow reqwest's default policy (up to 10 hops), so 3xx
/// statuses are normally resolved before a response is handed back. A client
/// configured with redirects disabled will surface them, and they classify
/// as [`PagerDutyError::UnknownError`](crate::error::PagerDutyError).
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport from HTTP configuration.
    pub fn new(config: &HttpConfig) -> Result<Self> {
        Ok(Self {
            client: build_http_client(config)?,
        })
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse> {
        let TransportRequest {
            method,
            url,
            query,
            headers,
            body,
        } = request;

        let mut builder = self.client.request(method, url.as_str()).headers(headers);
        if !query.is_empty() {
            builder = builder.query(&query);
        }
        if let Some(body) = body {
            let payload = serde_json::to_string(&body).map_err(|e| {
                PagerDutyError::HttpError(format!("failed to serialize request body: {e}"))
            })?;
            builder = builder.body(payload);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let text = response.text().await?;

        Ok(TransportResponse {
            status,
            text,
            headers,
        })
    }
}
