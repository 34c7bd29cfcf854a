use std::sync::Arc;

use contact_form::ContactError;
use contact_form::api::{ContactHandler, function_handler};
use contact_form::core::config::AppConfig;
use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Error> {
    contact_form::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        ContactError::ConfigError(e)
    })?;
    info!(
        region = %config.aws_region,
        environment = ?config.environment,
        "Contact form Lambda starting"
    );

    let handler = Arc::new(ContactHandler::from_config(config).await?);

    run(service_fn(move |event: LambdaEvent<Value>| {
        let handler = Arc::clone(&handler);
        async move { function_handler(&handler, event).await }
    }))
    .await
}
