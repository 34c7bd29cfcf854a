use thiserror::Error;

use crate::core::messages;

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("Submission failed validation: {0}")]
    Validation(String),

    #[error("Captcha verification rejected the token: {0:?}")]
    CaptchaRejected(Vec<String>),

    #[error("Failed to parse request: {0}")]
    ParseError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Failed to interact with AWS services: {0}")]
    AwsError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl ContactError {
    /// HTTP status returned to the browser for this failure.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            ContactError::Validation(_) => 422,
            ContactError::CaptchaRejected(_) => 403,
            ContactError::ParseError(_)
            | ContactError::HttpError(_)
            | ContactError::AwsError(_)
            | ContactError::ConfigError(_) => 500,
        }
    }

    /// Message shown to the submitter. Internal detail never leaks here.
    #[must_use]
    pub fn public_message(&self) -> &'static str {
        match self {
            ContactError::Validation(_) => messages::MISSING_FIELDS,
            ContactError::CaptchaRejected(_) => messages::CAPTCHA_FAILED,
            _ => messages::SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for ContactError {
    fn from(error: reqwest::Error) -> Self {
        ContactError::HttpError(error.to_string())
    }
}

impl From<serde_json::Error> for ContactError {
    fn from(error: serde_json::Error) -> Self {
        ContactError::ParseError(error.to_string())
    }
}

impl From<base64::DecodeError> for ContactError {
    fn from(error: base64::DecodeError) -> Self {
        ContactError::ParseError(format!("invalid base64 body: {error}"))
    }
}

impl From<anyhow::Error> for ContactError {
    fn from(error: anyhow::Error) -> Self {
        ContactError::AwsError(error.to_string())
    }
}
