use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use serde_json::Value;

/// Place queried when the caller does not name one.
pub const DEFAULT_LOCATION: &str = "jaeju";

/// Temperature unit clause of the query (`u="c"` / `u="f"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Units {
    #[default]
    #[serde(rename = "c")]
    Celsius,
    #[serde(rename = "f")]
    Fahrenheit,
}

impl Units {
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Celsius => "c",
            Units::Fahrenheit => "f",
        }
    }
}

impl std::fmt::Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Units {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "c" | "celsius" => Ok(Units::Celsius),
            "f" | "fahrenheit" => Ok(Units::Fahrenheit),
            _ => Err(anyhow::anyhow!("Unknown units '{value}'. Supported units: c, f.")),
        }
    }
}

/// One lookup, alive for a single invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    pub location: String,
    pub units: Units,
}

impl QueryRequest {
    pub fn new(location: impl Into<String>, units: Units) -> Self {
        Self { location: location.into(), units }
    }
}

impl Default for QueryRequest {
    fn default() -> Self {
        Self::new(DEFAULT_LOCATION, Units::default())
    }
}

/// Payload delivered by the serverless host: `{"params": {"area": "..."}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct HandlerEvent {
    pub params: HandlerParams,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HandlerParams {
    /// Strings are taken as-is; numbers and booleans by their JSON text.
    #[serde(deserialize_with = "area_text")]
    pub area: String,
}

fn area_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        v @ (Value::Number(_) | Value::Bool(_)) => Ok(v.to_string()),
        other => Err(D::Error::custom(format!(
            "expected a string, number or boolean area, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn units_as_str_roundtrip() {
        for units in [Units::Celsius, Units::Fahrenheit] {
            let parsed = Units::try_from(units.as_str()).expect("roundtrip should succeed");
            assert_eq!(units, parsed);
        }
    }

    #[test]
    fn unknown_units_error() {
        let err = Units::try_from("kelvin").unwrap_err();
        assert!(err.to_string().contains("Unknown units"));
    }

    #[test]
    fn default_request_is_jaeju_in_celsius() {
        let req = QueryRequest::default();
        assert_eq!(req.location, "jaeju");
        assert_eq!(req.units, Units::Celsius);
    }

    #[test]
    fn handler_event_ignores_extra_fields() {
        let event: HandlerEvent = serde_json::from_value(serde_json::json!({
            "params": { "area": "seoul", "lang": "ko" },
            "stage": "prod"
        }))
        .expect("event should deserialize");

        assert_eq!(event.params.area, "seoul");
    }

    #[test]
    fn numeric_area_uses_its_json_text() {
        let event: HandlerEvent =
            serde_json::from_value(serde_json::json!({"params": {"area": 63101}})).unwrap();
        assert_eq!(event.params.area, "63101");

        let event: HandlerEvent =
            serde_json::from_value(serde_json::json!({"params": {"area": 2.5}})).unwrap();
        assert_eq!(event.params.area, "2.5");
    }

    #[test]
    fn null_or_compound_area_is_rejected() {
        for area in [serde_json::json!(null), serde_json::json!(["seoul"])] {
            let res: Result<HandlerEvent, _> =
                serde_json::from_value(serde_json::json!({"params": {"area": area}}));
            assert!(res.is_err());
        }
    }
}
