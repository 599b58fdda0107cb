use serde_json::Value;

use crate::{
    config::Config,
    decode::decode,
    error::{Result, WeatherError},
    model::{HandlerEvent, QueryRequest},
    query::request_url,
    source::WeatherSource,
};

/// Query builder, fetcher and decoder run back to back for one request.
pub async fn lookup(
    source: &dyn WeatherSource,
    config: &Config,
    request: &QueryRequest,
) -> Result<Value> {
    let url = request_url(&config.endpoint, request)?;
    let body = source.fetch_text(&url).await?;
    decode(&body)
}

/// Serverless entry: read `params.area` from the event and return the decoded response.
pub async fn handle_event(
    source: &dyn WeatherSource,
    config: &Config,
    event: Value,
) -> Result<Value> {
    let event: HandlerEvent = serde_json::from_value(event).map_err(WeatherError::InvalidEvent)?;
    tracing::info!(area = %event.params.area, "handling weather lookup");

    let request = QueryRequest::new(event.params.area, config.units);
    lookup(source, config, &request).await
}
