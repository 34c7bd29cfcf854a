//! Builds the outgoing email from a validated submission.
//!
//! Everything user-supplied that ends up in the HTML part or the subject goes
//! through [`escape_html`]. The reply-to header and the plain-text part carry
//! the raw values.

use super::config::{AppConfig, Environment};
use super::messages;
use super::models::{OutboundEmail, ValidSubmission};

/// Escapes the five HTML-significant characters to entities.
#[must_use]
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

#[must_use]
pub fn compose_subject(submission: &ValidSubmission, environment: Environment) -> String {
    let prefix = match environment {
        Environment::Dev => messages::DEV_SUBJECT_PREFIX,
        Environment::Production => "",
    };
    let topic = submission
        .subject
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or(&submission.name);

    format!("{prefix}{}{}", messages::SUBJECT_LABEL, escape_html(topic))
}

#[must_use]
pub fn compose_html(submission: &ValidSubmission) -> String {
    let message = escape_html(&submission.message).replace('\n', "<br>");
    format!(
        "<h2>{}</h2><p>{}: {} ({})</p><hr><p>{}</p>",
        messages::HTML_HEADING,
        messages::HTML_FROM_LABEL,
        escape_html(&submission.name),
        escape_html(&submission.email),
        message
    )
}

#[must_use]
pub fn compose_email(config: &AppConfig, submission: &ValidSubmission) -> OutboundEmail {
    OutboundEmail {
        from: config.sender_email.clone(),
        to: vec![config.recipient_email.clone()],
        reply_to: vec![submission.email.clone()],
        subject: compose_subject(submission, config.environment),
        html: compose_html(submission),
        text: submission.message.clone(),
    }
}
