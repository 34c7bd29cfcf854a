use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;

use crate::core::models::{SubmissionRequest, ValidSubmission};
use crate::errors::ContactError;

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

pub fn get_header_value<'a>(headers: &'a Value, name: &str) -> Option<&'a str> {
    if let Some(v) = headers.get(name).and_then(|s| s.as_str()) {
        return Some(v);
    }
    headers.as_object().and_then(|map| {
        map.iter().find_map(|(k, v)| {
            if k.eq_ignore_ascii_case(name) {
                v.as_str()
            } else {
                None
            }
        })
    })
}

/// HTTP method for payload v2 (HTTP API, function URL) or v1 (REST API).
pub fn request_method(payload: &Value) -> Option<&str> {
    v_str(payload, &["requestContext", "http", "method"])
        .or_else(|| v_str(payload, &["httpMethod"]))
}

pub fn request_origin(payload: &Value) -> Option<&str> {
    payload
        .get("headers")
        .and_then(|headers| get_header_value(headers, "Origin"))
        .filter(|origin| !origin.is_empty())
}

pub fn source_ip(payload: &Value) -> Option<&str> {
    v_str(payload, &["requestContext", "http", "sourceIp"])
        .or_else(|| v_str(payload, &["requestContext", "identity", "sourceIp"]))
}

/// Returns the raw request body, decoding it when API Gateway base64-encoded
/// it. A missing body reads as an empty JSON object.
///
/// # Errors
///
/// Returns an error if the body is base64-flagged but not valid base64/UTF-8.
pub fn extract_body(payload: &Value) -> Result<String, ContactError> {
    let Some(body) = payload.get("body").and_then(|b| b.as_str()) else {
        return Ok("{}".to_string());
    };
    if body.is_empty() {
        return Ok("{}".to_string());
    }

    let encoded = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    if !encoded {
        return Ok(body.to_string());
    }

    let bytes = STANDARD.decode(body)?;
    String::from_utf8(bytes)
        .map_err(|e| ContactError::ParseError(format!("body is not UTF-8: {e}")))
}

/// Parses the JSON body. Non-object values (`5`, `"x"`, `[]`) carry no
/// fields and read as an empty form; `null` is rejected.
///
/// # Errors
///
/// Returns a parse error if the body is not JSON or is `null`.
pub fn parse_submission(body: &str) -> Result<SubmissionRequest, ContactError> {
    match serde_json::from_str::<Value>(body)? {
        Value::Null => Err(ContactError::ParseError("body is null".to_string())),
        fields @ Value::Object(_) => Ok(serde_json::from_value(fields)?),
        _ => Ok(SubmissionRequest::default()),
    }
}

/// Loose truthiness used for every form field.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn present(field: Option<&Value>) -> bool {
    field.is_some_and(is_truthy)
}

/// Text of a field that already passed the truthiness check, or `None` when
/// the field is falsy. A truthy non-string cannot be rendered as text.
fn text_field(field: Option<Value>, name: &str) -> Result<Option<String>, ContactError> {
    match field {
        Some(Value::String(s)) if !s.is_empty() => Ok(Some(s)),
        Some(value) if is_truthy(&value) => Err(ContactError::ParseError(format!(
            "{name} must be a string"
        ))),
        _ => Ok(None),
    }
}

fn required_text(field: Option<Value>, name: &str) -> Result<String, ContactError> {
    text_field(field, name)?
        .ok_or_else(|| ContactError::Validation(format!("missing fields: {name}")))
}

/// Checks that every required field is present and truthy, then converts the
/// text fields.
///
/// # Errors
///
/// Returns `ContactError::Validation` naming the missing fields, or a parse
/// error when a present field holds a non-string value.
pub fn validate_submission(request: SubmissionRequest) -> Result<ValidSubmission, ContactError> {
    let missing: Vec<&str> = [
        ("name", present(request.name.as_ref())),
        ("email", present(request.email.as_ref())),
        ("message", present(request.message.as_ref())),
        ("cf-turnstile-response", present(request.captcha_token.as_ref())),
        ("privacy_policy", present(request.privacy_accepted.as_ref())),
    ]
    .into_iter()
    .filter_map(|(field, ok)| (!ok).then_some(field))
    .collect();

    if !missing.is_empty() {
        return Err(ContactError::Validation(format!(
            "missing fields: {}",
            missing.join(", ")
        )));
    }

    Ok(ValidSubmission {
        name: required_text(request.name, "name")?,
        email: required_text(request.email, "email")?,
        subject: text_field(request.subject, "subject")?,
        message: required_text(request.message, "message")?,
        captcha_token: required_text(request.captcha_token, "cf-turnstile-response")?,
    })
}
