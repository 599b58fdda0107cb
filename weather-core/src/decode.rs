use serde::Serialize;
use serde_json::{
    Serializer, Value,
    ser::{Formatter, PrettyFormatter},
};
use std::io;

use crate::error::{Result, WeatherError};

/// Parse a response body as JSON. Malformed input is an error, never a default.
pub fn decode(body: &str) -> Result<Value> {
    serde_json::from_str(body).map_err(WeatherError::Decode)
}

/// Render with 4-space indentation, `,` and `: ` separators, keys sorted.
///
/// Non-ASCII characters are written as `\uXXXX` escapes (surrogate pairs
/// outside the BMP), so the output is pure ASCII.
pub fn render_pretty(value: &Value) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = AsciiPretty(PrettyFormatter::with_indent(b"    "));
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser).map_err(WeatherError::Render)?;

    // Everything written above is ASCII.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Pretty layout with every non-ASCII char escaped.
struct AsciiPretty<'a>(PrettyFormatter<'a>);

impl Formatter for AsciiPretty<'_> {
    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.0.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.0.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut start = 0;
        for (i, c) in fragment.char_indices() {
            if c.is_ascii() {
                continue;
            }
            writer.write_all(fragment[start..i].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = i + c.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const CANNED: &str = r#"{
        "query": {
            "count": 1,
            "lang": "en-US",
            "results": {
                "channel": {
                    "units": {"temperature": "C"},
                    "item": {"condition": {"code": "28", "temp": "12", "text": "Mostly Cloudy"}}
                }
            }
        }
    }"#;

    #[test]
    fn decodes_canned_response() {
        let value = decode(CANNED).expect("canned body is valid JSON");

        assert_eq!(value["query"]["count"], json!(1));
        assert_eq!(
            value["query"]["results"]["channel"]["item"]["condition"]["text"],
            json!("Mostly Cloudy")
        );
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        let err = decode("{not json").unwrap_err();
        assert!(matches!(err, WeatherError::Decode(_)));
    }

    #[test]
    fn empty_body_is_a_decode_error() {
        assert!(decode("").is_err());
    }

    #[test]
    fn pretty_output_uses_four_spaces_and_sorted_keys() {
        let value = json!({"b": [1, 2], "a": {"z": null, "y": "x"}});
        let out = render_pretty(&value).unwrap();

        let expected = "{\n    \"a\": {\n        \"y\": \"x\",\n        \"z\": null\n    },\n    \
                        \"b\": [\n        1,\n        2\n    ]\n}";
        assert_eq!(out, expected);
    }

    #[test]
    fn pretty_output_escapes_non_ascii() {
        let value = json!({"city": "서울", "sky": "🌧 rain", "plain": "jaeju"});
        let out = render_pretty(&value).unwrap();

        assert!(out.is_ascii());
        assert!(out.contains(r#""city": "\uc11c\uc6b8""#));
        assert!(out.contains(r#""sky": "\ud83c\udf27 rain""#));
        assert!(out.contains(r#""plain": "jaeju""#));
        assert_eq!(decode(&out).unwrap(), value);
    }

    #[test]
    fn pretty_output_parses_back_to_input() {
        let value = decode(CANNED).unwrap();
        let out = render_pretty(&value).unwrap();

        assert_eq!(decode(&out).unwrap(), value);
    }
}
