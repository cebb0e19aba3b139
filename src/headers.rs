//! Header construction for API requests.
//!
//! Every call carries three default headers: the versioned `Accept` media
//! type, the `Authorization` credential string, and a JSON `Content-Type`.
//! Callers can merge additional headers on top (theirs win on collision) or
//! replace the default set entirely. All header problems surface as
//! [`PagerDutyError::InvalidHeaders`] before any network I/O happens.

use std::collections::HashMap;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};

use crate::config::Config;
use crate::defaults;
use crate::error::{PagerDutyError, Result};

/// Build the effective header set for one call.
///
/// `header_override`, when given, replaces the default set; `extra_headers`
/// are merged afterwards and take precedence on key collision.
pub fn build_headers(
    config: &Config,
    header_override: Option<&HashMap<String, String>>,
    extra_headers: &HashMap<String, String>,
) -> Result<HeaderMap> {
    let mut headers = match header_override {
        Some(map) => override_headers(map)?,
        None => default_headers(config)?,
    };
    merge_extra(&mut headers, extra_headers)?;
    Ok(headers)
}

/// The default header set: `Accept`, `Authorization`, `Content-Type`.
pub fn default_headers(config: &Config) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(defaults::api::MEDIA_TYPE));
    let auth = HeaderValue::from_str(&config.auth_header()).map_err(|_| {
        PagerDutyError::InvalidHeaders("authorization value is not a valid header".to_string())
    })?;
    headers.insert(AUTHORIZATION, auth);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

/// Build a header set from a caller-supplied replacement map.
pub fn override_headers(entries: &HashMap<String, String>) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    insert_entries(&mut headers, entries)?;
    Ok(headers)
}

/// Merge caller-supplied headers into `headers`; the caller's values win.
pub fn merge_extra(headers: &mut HeaderMap, extra: &HashMap<String, String>) -> Result<()> {
    insert_entries(headers, extra)
}

fn insert_entries(headers: &mut HeaderMap, entries: &HashMap<String, String>) -> Result<()> {
    for (name, value) in entries {
        let parsed_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
            PagerDutyError::InvalidHeaders(format!("invalid header name '{name}'"))
        })?;
        let parsed_value = HeaderValue::from_str(value).map_err(|_| {
            PagerDutyError::InvalidHeaders(format!("invalid value for header '{name}'"))
        })?;
        headers.insert(parsed_name, parsed_value);
    }
    Ok(())
}
