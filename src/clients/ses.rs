use anyhow::Context;
use async_trait::async_trait;
use aws_sdk_sesv2::Client as SesClient;
use aws_sdk_sesv2::config::Region;
use aws_sdk_sesv2::types::{Body, Content, Destination, EmailContent, Message};

use crate::core::config::AppConfig;
use crate::core::models::OutboundEmail;
use crate::errors::ContactError;

#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Hands the email to the provider and returns its message id, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be assembled or the provider
    /// refuses it.
    async fn send(&self, email: &OutboundEmail) -> Result<Option<String>, ContactError>;
}

pub struct SesEmailSender {
    client: SesClient,
}

impl SesEmailSender {
    pub async fn new(config: &AppConfig) -> Self {
        let shared_config = aws_config::from_env()
            .region(Region::new(config.aws_region.clone()))
            .load()
            .await;
        Self {
            client: SesClient::new(&shared_config),
        }
    }
}

fn utf8_content(data: &str) -> anyhow::Result<Content> {
    Content::builder()
        .data(data)
        .charset("UTF-8")
        .build()
        .context("ses content")
}

/// # Errors
///
/// Returns an error if a required SES content field cannot be built.
pub fn build_email_content(email: &OutboundEmail) -> anyhow::Result<EmailContent> {
    let body = Body::builder()
        .html(utf8_content(&email.html)?)
        .text(utf8_content(&email.text)?)
        .build();
    let message = Message::builder()
        .subject(utf8_content(&email.subject)?)
        .body(body)
        .build();

    Ok(EmailContent::builder().simple(message).build())
}

#[async_trait]
impl EmailSender for SesEmailSender {
    async fn send(&self, email: &OutboundEmail) -> Result<Option<String>, ContactError> {
        let content = build_email_content(email)?;
        let destination = Destination::builder()
            .set_to_addresses(Some(email.to.clone()))
            .build();

        let resp = self
            .client
            .send_email()
            .from_email_address(&email.from)
            .destination(destination)
            .set_reply_to_addresses(Some(email.reply_to.clone()))
            .content(content)
            .send()
            .await
            .map_err(|e| ContactError::AwsError(format!("ses send_email: {e}")))?;

        Ok(resp.message_id().map(ToString::to_string))
    }
}
