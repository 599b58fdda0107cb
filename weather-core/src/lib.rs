//! Core library for the YQL weather lookup.
//!
//! This crate defines:
//! - Query building (YQL text and fetch URL)
//! - The fetcher, behind the [`WeatherSource`] trait
//! - JSON decoding and pretty rendering
//! - The serverless handler flow
//! - Configuration
//!
//! It is used by `weather-cli` and `weather-lambda`.

pub mod config;
pub mod decode;
pub mod error;
pub mod handler;
pub mod model;
pub mod query;
pub mod source;

pub use config::Config;
pub use decode::{decode, render_pretty};
pub use error::WeatherError;
pub use handler::{handle_event, lookup};
pub use model::{HandlerEvent, QueryRequest, Units};
pub use query::{build_query_text, build_url};
pub use source::{WeatherSource, YqlClient};

pub use reqwest::Url;
pub use serde_json;
