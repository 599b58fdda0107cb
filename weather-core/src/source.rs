use async_trait::async_trait;
use reqwest::{Client, Url};
use std::fmt::Debug;

use crate::error::{Result, WeatherError};

/// Something that can answer a fully built weather URL with a text body.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    async fn fetch_text(&self, url: &Url) -> Result<String>;
}

/// Live source: one GET per call against the YQL endpoint. No retries.
#[derive(Debug, Clone, Default)]
pub struct YqlClient {
    http: Client,
}

impl YqlClient {
    pub fn new() -> Self {
        Self { http: Client::new() }
    }
}

#[async_trait]
impl WeatherSource for YqlClient {
    async fn fetch_text(&self, url: &Url) -> Result<String> {
        tracing::debug!(%url, "sending weather request");

        let res = self.http.get(url.clone()).send().await?;

        let status = res.status();
        let bytes = res.bytes().await?;
        tracing::debug!(%status, bytes = bytes.len(), "weather response received");

        if !status.is_success() {
            let body = String::from_utf8_lossy(&bytes);
            return Err(WeatherError::Status { status, body: truncate_body(&body) });
        }

        String::from_utf8(bytes.to_vec()).map_err(WeatherError::Encoding)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
