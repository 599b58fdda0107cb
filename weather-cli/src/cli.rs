use std::io::Write;

use anyhow::Context;
use clap::Parser;
use weather_core::{Config, Units, YqlClient, lookup, render_pretty};
use weather_core::serde_json::Value;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Print the YQL weather forecast as JSON")]
pub struct Cli {
    /// Location name; defaults to the configured location ("jaeju").
    pub location: Option<String>,

    /// Temperature units, "c" or "f"; defaults to the configured units.
    #[arg(long, value_parser = parse_units)]
    pub units: Option<Units>,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let mut config = Config::load()?;
        if let Some(units) = self.units {
            config.units = units;
        }

        let request = config.request_for(self.location.as_deref());
        tracing::debug!(location = %request.location, units = %request.units, "looking up weather");

        let value = lookup(&YqlClient::new(), &config, &request)
            .await
            .with_context(|| format!("Weather lookup for '{}' failed", request.location))?;

        emit(&value, std::io::stdout().lock())
    }
}

/// Write one pretty-printed JSON document followed by a newline.
fn emit(value: &Value, mut out: impl Write) -> anyhow::Result<()> {
    writeln!(out, "{}", render_pretty(value)?).context("Failed to write to stdout")?;
    out.flush().context("Failed to write to stdout")
}

fn parse_units(s: &str) -> anyhow::Result<Units> {
    Units::try_from(s)
}
