//! The request/response pipeline.
//!
//! [`Client`] owns the configuration and a [`Transport`], and
//! [`Client::request`] runs the five pipeline stages in order: build headers,
//! normalize query parameters, invoke the transport, classify the status,
//! decode the body. Resource layers describe one call with [`ApiRequest`] or
//! use the verb helpers.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;
use tracing::debug;

use crate::config::{self, Config};
use crate::error::{PagerDutyError, Result};
use crate::headers;
use crate::params::{QueryParams, QueryValue};
use crate::response;
use crate::transport::{ReqwestTransport, Transport, TransportRequest};

/// One request intent, constructed fresh per call.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// HTTP verb.
    pub method: Method,
    /// Endpoint path relative to the base URL.
    pub path: String,
    /// Query parameters, normalized before sending.
    pub params: QueryParams,
    /// Optional JSON payload.
    pub body: Option<Value>,
    /// Headers merged over the default set; these win on collision.
    pub extra_headers: HashMap<String, String>,
    /// Full replacement for the default header set, when present.
    pub header_override: Option<HashMap<String, String>>,
}

impl ApiRequest {
    /// Create a request intent for `method` and `path`.
    pub fn new<S: Into<String>>(method: Method, path: S) -> Self {
        Self {
            method,
            path: path.into(),
            params: QueryParams::new(),
            body: None,
            extra_headers: HashMap::new(),
            header_override: None,
        }
    }

    /// Add one query parameter.
    pub fn with_param<K: Into<String>, V: Into<QueryValue>>(mut self, key: K, value: V) -> Self {
        self.params.insert(key, value);
        self
    }

    /// Replace the query parameters.
    pub fn with_params(mut self, params: QueryParams) -> Self {
        self.params = params;
        self
    }

    /// Attach a JSON body.
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Add a header on top of the default set (wins on collision).
    pub fn with_header<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.extra_headers.insert(name.into(), value.into());
        self
    }

    /// Replace the default header set entirely.
    pub fn with_header_override(mut self, headers: HashMap<String, String>) -> Self {
        self.header_override = Some(headers);
        self
    }
}

/// Client for the PagerDuty REST API.
///
/// Cheap to clone and safe to share across tasks: each call builds its own
/// header map and normalized parameter list, and the transport is behind an
/// `Arc`.
#[derive(Clone)]
pub struct Client {
    config: Config,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Create a client with the production HTTP transport.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let transport = ReqwestTransport::new(&config.http)?;
        Ok(Self {
            config,
            transport: Arc::new(transport),
        })
    }

    /// Create a client over a custom [`Transport`].
    pub fn with_transport(config: Config, transport: Arc<dyn Transport>) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, transport })
    }

    /// Create a client from the process-wide configuration installed with
    /// [`configure`](crate::config::configure).
    pub fn from_global() -> Result<Self> {
        let config = config::global_config().cloned().ok_or_else(|| {
            PagerDutyError::ConfigurationError(
                "no process-wide configuration installed; call configure() first".to_string(),
            )
        })?;
        Self::new(config)
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Execute one API request and decode the outcome.
    ///
    /// Returns `Ok(Some(value))` for a JSON body, `Ok(None)` when the
    /// response had no body, and a typed error otherwise. Header and
    /// parameter problems fail before any network I/O.
    pub async fn request(&self, request: ApiRequest) -> Result<Option<Value>> {
        let ApiRequest {
            method,
            path,
            params,
            body,
            extra_headers,
            header_override,
        } = request;

        let request_headers =
            headers::build_headers(&self.config, header_override.as_ref(), &extra_headers)?;
        let query = params.normalize()?;
        let url = format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );

        debug!(%method, %url, "dispatching API request");
        let response = self
            .transport
            .execute(TransportRequest {
                method,
                url,
                query,
                headers: request_headers,
                body,
            })
            .await?;
        debug!(status = response.status, "received API response");

        response::handle_response(response)
    }

    /// `GET` a path with query parameters.
    pub async fn get(&self, path: &str, params: QueryParams) -> Result<Option<Value>> {
        self.request(ApiRequest::new(Method::GET, path).with_params(params))
            .await
    }

    /// `POST` a JSON body to a path.
    pub async fn post(&self, path: &str, body: Value) -> Result<Option<Value>> {
        self.request(ApiRequest::new(Method::POST, path).with_body(body))
            .await
    }

    /// `PUT` a JSON body to a path.
    pub async fn put(&self, path: &str, body: Value) -> Result<Option<Value>> {
        self.request(ApiRequest::new(Method::PUT, path).with_body(body))
            .await
    }

    /// `DELETE` a path.
    pub async fn delete(&self, path: &str) -> Result<Option<Value>> {
        self.request(ApiRequest::new(Method::DELETE, path)).await
    }
}
