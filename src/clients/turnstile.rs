//! Cloudflare Turnstile siteverify client.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::core::config::AppConfig;
use crate::errors::ContactError;

/// Decoded siteverify reply. A reply without `success` counts as a rejection.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct CaptchaOutcome {
    #[serde(default)]
    pub success: bool,
    #[serde(rename = "error-codes", default)]
    pub error_codes: Vec<String>,
    #[serde(default)]
    pub hostname: Option<String>,
}

#[async_trait]
pub trait CaptchaVerifier: Send + Sync {
    /// Asks the provider whether `token` is genuine.
    ///
    /// # Errors
    ///
    /// Returns an error only when the provider could not be reached or its
    /// reply could not be decoded. A rejected token is an `Ok` outcome with
    /// `success == false`.
    async fn verify(
        &self,
        token: &str,
        remote_ip: Option<&str>,
    ) -> Result<CaptchaOutcome, ContactError>;
}

pub struct TurnstileClient {
    http: Client,
    secret: String,
    verify_url: String,
}

impl TurnstileClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &AppConfig) -> Result<Self, ContactError> {
        let http = Client::builder().timeout(Duration::from_secs(10)).build()?;
        Ok(Self {
            http,
            secret: config.cloudflare_secret_key.clone(),
            verify_url: config.turnstile_verify_url.clone(),
        })
    }
}

#[async_trait]
impl CaptchaVerifier for TurnstileClient {
    async fn verify(
        &self,
        token: &str,
        remote_ip: Option<&str>,
    ) -> Result<CaptchaOutcome, ContactError> {
        let mut form = vec![("secret", self.secret.as_str()), ("response", token)];
        if let Some(ip) = remote_ip {
            form.push(("remoteip", ip));
        }

        let response = self.http.post(&self.verify_url).form(&form).send().await?;
        debug!(status = %response.status(), "Turnstile siteverify responded");

        let outcome = response.json::<CaptchaOutcome>().await?;
        Ok(outcome)
    }
}
