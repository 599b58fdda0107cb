use reqwest::StatusCode;

/// Everything that can go wrong between building a query and handing back JSON.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Invalid weather endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("Failed to reach the weather endpoint")]
    Transport(#[from] reqwest::Error),

    #[error("Weather request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Weather response body is not valid UTF-8")]
    Encoding(#[source] std::string::FromUtf8Error),

    #[error("Failed to parse weather response JSON")]
    Decode(#[source] serde_json::Error),

    #[error("Failed to render weather JSON")]
    Render(#[source] serde_json::Error),

    #[error("Handler event `params.area` is missing or not a string, number or boolean")]
    InvalidEvent(#[source] serde_json::Error),
}

pub type Result<T, E = WeatherError> = std::result::Result<T, E>;
