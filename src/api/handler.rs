//! Contact form Lambda handler.
//!
//! One invocation runs the whole pipeline:
//! - CORS headers (always) and OPTIONS preflight
//! - Body extraction, JSON parsing and required-field validation
//! - Turnstile verification
//! - Email composition and delivery through SES
//!
//! Every step returns `Result<_, ContactError>`; the handler maps the error
//! kind onto the response status once, so failures never escape the invocation.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info, warn};

use super::{helpers, parsing};
use crate::clients::{CaptchaVerifier, EmailSender, SesEmailSender, TurnstileClient};
use crate::core::compose::compose_email;
use crate::core::config::AppConfig;
use crate::core::messages;
use crate::core::models::ResponseEnvelope;
use crate::errors::ContactError;

pub struct ContactHandler {
    config: AppConfig,
    captcha: Box<dyn CaptchaVerifier>,
    mailer: Box<dyn EmailSender>,
}

impl ContactHandler {
    pub fn new(
        config: AppConfig,
        captcha: Box<dyn CaptchaVerifier>,
        mailer: Box<dyn EmailSender>,
    ) -> Self {
        Self {
            config,
            captcha,
            mailer,
        }
    }

    /// Builds the handler with the production Turnstile and SES clients.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub async fn from_config(config: AppConfig) -> Result<Self, ContactError> {
        let captcha = TurnstileClient::new(&config)?;
        let mailer = SesEmailSender::new(&config).await;
        Ok(Self::new(config, Box::new(captcha), Box::new(mailer)))
    }

    /// Turns one API Gateway / function URL event into a proxy response.
    pub async fn handle(&self, payload: &Value) -> ResponseEnvelope {
        let headers = helpers::cors_headers(parsing::request_origin(payload));

        if parsing::request_method(payload) == Some("OPTIONS") {
            return helpers::preflight(headers);
        }

        match self.process(payload).await {
            Ok(message_id) => {
                info!(message_id = message_id.as_deref().unwrap_or(""), "Contact message sent");
                helpers::ok_response(headers, messages::SENT)
            }
            Err(e) => {
                match &e {
                    ContactError::Validation(detail) => {
                        info!(detail = %detail, "Rejected incomplete submission");
                    }
                    ContactError::CaptchaRejected(codes) => {
                        warn!(error_codes = ?codes, "Captcha fail");
                    }
                    _ => error!(error = %e, "Handler error"),
                }
                helpers::err_response(headers, &e)
            }
        }
    }

    async fn process(&self, payload: &Value) -> Result<Option<String>, ContactError> {
        let body = parsing::extract_body(payload)?;
        let submission = parsing::validate_submission(parsing::parse_submission(&body)?)?;

        let outcome = self
            .captcha
            .verify(&submission.captcha_token, parsing::source_ip(payload))
            .await?;
        if !outcome.success {
            return Err(ContactError::CaptchaRejected(outcome.error_codes));
        }

        let email = compose_email(&self.config, &submission);
        self.mailer.send(&email).await
    }
}

/// Lambda handler for the contact endpoint. Always answers with `Ok`.
#[tracing::instrument(level = "info", skip_all, fields(request_id = %event.context.request_id))]
pub async fn function_handler(
    handler: &ContactHandler,
    event: LambdaEvent<Value>,
) -> Result<ResponseEnvelope, Error> {
    Ok(handler.handle(&event.payload).await)
}
