use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Contact form payload as posted by the browser. Fields are kept as raw
/// JSON so any falsy value (`""`, `false`, `0`, `null`) reads as missing.
#[derive(Debug, Default, Deserialize)]
pub struct SubmissionRequest {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
    #[serde(default)]
    pub subject: Option<Value>,
    #[serde(default)]
    pub message: Option<Value>,
    #[serde(rename = "cf-turnstile-response", default)]
    pub captcha_token: Option<Value>,
    // Checkboxes arrive as `true`, `"on"` or `1` depending on the form script.
    #[serde(rename = "privacy_policy", default)]
    pub privacy_accepted: Option<Value>,
}

/// A submission that passed the required-field check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSubmission {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub captcha_token: String,
}

/// JSON body of every non-preflight response.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiBody {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

impl ApiBody {
    #[must_use]
    pub fn ok(message: &str) -> Self {
        Self {
            success: true,
            message: Some(message.to_string()),
            error: None,
        }
    }

    #[must_use]
    pub fn failure(error: &str) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.to_string()),
        }
    }
}

/// Lambda proxy response understood by API Gateway and function URLs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResponseEnvelope {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
    #[serde(rename = "isBase64Encoded", default)]
    pub is_base64_encoded: bool,
}

/// Structured send request handed to the email collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub from: String,
    pub to: Vec<String>,
    pub reply_to: Vec<String>,
    pub subject: String,
    pub html: String,
    pub text: String,
}
