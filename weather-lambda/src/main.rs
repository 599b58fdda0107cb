//! Serverless entry point: `{"params": {"area": "..."}}` in, raw YQL JSON out.
//!
//! The HTTP client and config are built once per cold start and shared by
//! every warm invocation.

use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;
use tracing_subscriber::EnvFilter;
use weather_core::{Config, WeatherSource, YqlClient, handle_event};

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_logging();

    let config = Config::default();
    let client = YqlClient::new();

    let config = &config;
    let client = &client;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        function_handler(client, config, event).await
    }))
    .await
}

async fn function_handler(
    source: &dyn WeatherSource,
    config: &Config,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    tracing::debug!(request_id = %event.context.request_id, "invocation received");

    Ok(handle_event(source, config, event.payload).await?)
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .without_time()
        .init();
}
