//! CORS headers and response builders shared by the handler.

use std::collections::BTreeMap;

use serde_json::json;
use tracing::error;

use crate::core::messages;
use crate::core::models::{ApiBody, ResponseEnvelope};
use crate::errors::ContactError;

pub const ALLOW_METHODS: &str = "POST, OPTIONS";
pub const ALLOW_HEADERS: &str =
    "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token,X-Requested-With";

/// Headers attached to every response. The caller's Origin is echoed back;
/// requests without one get a wildcard.
#[must_use]
pub fn cors_headers(origin: Option<&str>) -> BTreeMap<String, String> {
    BTreeMap::from([
        ("Content-Type".to_string(), "application/json".to_string()),
        (
            "Access-Control-Allow-Origin".to_string(),
            origin.unwrap_or("*").to_string(),
        ),
        (
            "Access-Control-Allow-Methods".to_string(),
            ALLOW_METHODS.to_string(),
        ),
        (
            "Access-Control-Allow-Headers".to_string(),
            ALLOW_HEADERS.to_string(),
        ),
    ])
}

/// Returns a 200 with no body for CORS preflight.
#[must_use]
pub fn preflight(headers: BTreeMap<String, String>) -> ResponseEnvelope {
    envelope(200, headers, String::new())
}

fn envelope(status_code: u16, headers: BTreeMap<String, String>, body: String) -> ResponseEnvelope {
    ResponseEnvelope {
        status_code,
        headers,
        body,
        is_base64_encoded: false,
    }
}

/// Generic server-error body, built without going through `ApiBody`.
#[must_use]
pub fn server_error_body() -> String {
    json!({ "success": false, "error": messages::SERVER_ERROR }).to_string()
}

/// Serializes `body` under `status_code`. If serialization fails the caller
/// gets a 500 with the generic server-error body instead.
#[must_use]
pub fn json_response(
    status_code: u16,
    headers: BTreeMap<String, String>,
    body: &ApiBody,
) -> ResponseEnvelope {
    match serde_json::to_string(body) {
        Ok(body) => envelope(status_code, headers, body),
        Err(e) => {
            error!(error = %e, "Failed to serialize response body");
            envelope(500, headers, server_error_body())
        }
    }
}

#[must_use]
pub fn ok_response(headers: BTreeMap<String, String>, message: &str) -> ResponseEnvelope {
    json_response(200, headers, &ApiBody::ok(message))
}

#[must_use]
pub fn err_response(headers: BTreeMap<String, String>, error: &ContactError) -> ResponseEnvelope {
    json_response(
        error.status_code(),
        headers,
        &ApiBody::failure(error.public_message()),
    )
}
