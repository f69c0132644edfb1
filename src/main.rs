use std::sync::Arc;

use anyhow::Context;
use lambda_runtime::{service_fn, LambdaEvent};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use delete_handler::config::{config, AppConfig};
use delete_handler::database::{dynamo_client, DynamoStore};
use delete_handler::handlers::{function_handler, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so local runs pick up TABLE_NAME, DYNAMODB_ENDPOINT_URL, etc.
    let _ = dotenvy::dotenv();

    // Initialize configuration (this loads the config singleton)
    let config = config();
    config.validate().context("invalid configuration")?;

    init_tracing(config);
    tracing::info!("Starting delete-handler in {:?} mode", config.environment);
    tracing::debug!("Resolved configuration: {:?}", config);

    let client = dynamo_client(&config.store).await;
    let state = AppState::new(Arc::new(DynamoStore::new(client)), config);
    let state = &state;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        function_handler(state, event).await
    }))
    .await
    .map_err(|e| anyhow::anyhow!("lambda runtime error: {}", e))
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_new(&config.logging.filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.logging.with_target)
        // CloudWatch log lines carry no color codes
        .with_ansi(false);

    if config.logging.with_time {
        builder.init();
    } else {
        builder.without_time().init();
    }
}
