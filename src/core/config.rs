use std::env;

pub const DEFAULT_AWS_REGION: &str = "eu-west-1";
pub const TURNSTILE_VERIFY_URL: &str = "https://challenges.cloudflare.com/turnstile/v0/siteverify";

/// Deployment stage; dev deployments tag outgoing subjects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Dev,
    Production,
}

impl Environment {
    #[must_use]
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("dev") => Environment::Dev,
            _ => Environment::Production,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub aws_region: String,
    pub sender_email: String,
    pub recipient_email: String,
    pub cloudflare_secret_key: String,
    pub environment: Environment,
    pub turnstile_verify_url: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            aws_region: env::var("AWS_REGION").unwrap_or_else(|_| DEFAULT_AWS_REGION.to_string()),
            sender_email: env::var("SENDER_EMAIL").map_err(|e| format!("SENDER_EMAIL: {}", e))?,
            recipient_email: env::var("RECIPIENT_EMAIL")
                .map_err(|e| format!("RECIPIENT_EMAIL: {}", e))?,
            cloudflare_secret_key: env::var("CLOUDFLARE_SECRET_KEY")
                .map_err(|e| format!("CLOUDFLARE_SECRET_KEY: {}", e))?,
            environment: Environment::from_tag(env::var("ENV_TYPE").ok().as_deref()),
            turnstile_verify_url: env::var("TURNSTILE_VERIFY_URL")
                .unwrap_or_else(|_| TURNSTILE_VERIFY_URL.to_string()),
        })
    }
}
