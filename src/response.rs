//! Response classification and body decoding.
//!
//! Exactly one outcome per response: a decoded JSON value, the no-content
//! marker for an empty body, or a typed error that keeps the original status
//! code and body text verbatim.

use serde_json::Value;

use crate::error::{PagerDutyError, Result};
use crate::transport::TransportResponse;

/// Classify a status code, then decode the body on success.
pub fn handle_response(response: TransportResponse) -> Result<Option<Value>> {
    classify_status(response.status, &response.text)?;
    decode_body(&response.text)
}

/// Map a status code to the error taxonomy.
///
/// 404 is kept distinct from the generic 4xx bucket so callers can
/// special-case "resource absent" from "request malformed". Anything outside
/// 2xx that is not a 4xx (5xx, or an unresolved 3xx) is an unknown API error.
pub fn classify_status(status: u16, body: &str) -> Result<()> {
    match status {
        404 => Err(PagerDutyError::NotFound {
            status,
            body: body.to_string(),
        }),
        400..=499 => Err(PagerDutyError::BadRequest {
            status,
            body: body.to_string(),
        }),
        200..=299 => Ok(()),
        _ => Err(PagerDutyError::UnknownError {
            status,
            body: body.to_string(),
        }),
    }
}

/// Decode a successful response body.
///
/// An empty body is a legitimate outcome (DELETE, some PUTs) and returns
/// `Ok(None)` — distinct from `Ok(Some(Value::Null))`, which is a present
/// body containing JSON `null`.
pub fn decode_body(text: &str) -> Result<Option<Value>> {
    if text.is_empty() {
        return Ok(None);
    }
    match serde_json::from_str(text) {
        Ok(value) => Ok(Some(value)),
        Err(_) => Err(PagerDutyError::InvalidResponse(text.to_string())),
    }
}
