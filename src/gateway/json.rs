//! JSON body encoding.
//!
//! Bodies use the separators gateway clients already see from this endpoint:
//! `", "` between items and `": "` between key and value, everything else
//! compact. Non-ASCII text is written as raw UTF-8.

use std::io;

use serde::ser::Error as _;
use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};

#[derive(Debug, Default, Clone, Copy)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Serialize `value` with [`SpacedFormatter`].
pub fn to_string<T>(value: &T) -> serde_json::Result<String>
where
    T: ?Sized + Serialize,
{
    let mut buf = Vec::with_capacity(128);
    let mut ser = Serializer::with_formatter(&mut buf, SpacedFormatter);
    value.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(serde_json::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_separators() {
        let body = to_string(&json!({"error": "Method not allowed"})).unwrap();
        assert_eq!(body, r#"{"error": "Method not allowed"}"#);
    }

    #[test]
    fn test_nested_values() {
        let body = to_string(&json!({"a": [1, 2, 3], "b": {}})).unwrap();
        assert_eq!(body, r#"{"a": [1, 2, 3], "b": {}}"#);
    }

    #[test]
    fn test_unicode_not_escaped() {
        let body = to_string(&json!({"response": "Привет"})).unwrap();
        assert_eq!(body, r#"{"response": "Привет"}"#);
    }

    #[test]
    fn test_output_parses_back() {
        let original = json!({"response": "x \"quoted\"", "tokens_used": 120});
        let body = to_string(&original).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed, original);
    }
}
