//! Turns a [`QueryRequest`] into the YQL text and the final fetch URL.
//!
//! The location is interpolated into the query verbatim. Nothing here escapes
//! it, so a location containing `"` can rewrite the `text="..."` clause. That
//! is logged, not rejected.

use reqwest::Url;

use crate::{
    error::{Result, WeatherError},
    model::{QueryRequest, Units},
};

/// Output-format suffix appended after the query parameter.
pub const OUTPUT_FORMAT: &str = "json";

/// Build the YQL query text for a location and unit clause.
pub fn build_query_text(location: &str, units: Units) -> String {
    if location.contains('"') {
        tracing::warn!(location, "location contains a double quote; it is embedded unescaped");
    }

    format!(
        "select * from weather.forecast where woeid in \
         (select woeid from geo.places(1) where text=\"{location}\") and u=\"{units}\""
    )
}

/// Append `q=<query text>&format=json` to the endpoint, form-urlencoded.
pub fn build_url(endpoint: &str, query_text: &str) -> Result<Url> {
    let mut url = Url::parse(endpoint).map_err(|e| WeatherError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason: e.to_string(),
    })?;

    url.query_pairs_mut()
        .append_pair("q", query_text)
        .append_pair("format", OUTPUT_FORMAT);

    Ok(url)
}

/// Query text and URL for a full request in one step.
pub fn request_url(endpoint: &str, request: &QueryRequest) -> Result<Url> {
    let text = build_query_text(&request.location, request.units);
    build_url(endpoint, &text)
}
