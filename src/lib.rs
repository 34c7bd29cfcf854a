//! Contact form backend - a Lambda that forwards website contact-form
//! submissions to a mailbox.
//!
//! A single API Lambda handles the form's POST (and the browser's CORS
//! preflight), checks the Cloudflare Turnstile token, and sends the message
//! through Amazon SES with the submitter as reply-to.
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda behind API Gateway or a function URL
//! - Cloudflare Turnstile siteverify (reqwest) for captcha checks
//! - SES v2 (aws-sdk-sesv2) for delivery
//! - Tokio for async runtime
//!
//! Both providers sit behind traits so the handler can run against fakes.
//!
//! # Example
//!
//! ```no_run
//! use contact_form::api::ContactHandler;
//! use contact_form::core::config::{AppConfig, Environment};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     contact_form::setup_logging();
//!
//!     let config = AppConfig {
//!         aws_region: "eu-west-1".to_string(),
//!         sender_email: "noreply@example.com".to_string(),
//!         recipient_email: "inbox@example.com".to_string(),
//!         cloudflare_secret_key: "dummy_secret".to_string(),
//!         environment: Environment::Dev,
//!         turnstile_verify_url: contact_form::core::config::TURNSTILE_VERIFY_URL.to_string(),
//!     };
//!     let handler = ContactHandler::from_config(config).await?;
//!
//!     let event = serde_json::json!({
//!         "requestContext": { "http": { "method": "POST" } },
//!         "headers": { "origin": "https://example.com" },
//!         "body": r#"{"name":"Jan","email":"jan@example.com","message":"Hej","cf-turnstile-response":"tok","privacy_policy":true}"#
//!     });
//!     let response = handler.handle(&event).await;
//!     println!("{} {}", response.status_code, response.body);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod clients;
pub mod core;
pub mod errors;

pub use errors::ContactError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration, filtered by `RUST_LOG` (default `info`).
/// It should be called once at process start.
///
/// # Example
///
/// ```
/// contact_form::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
