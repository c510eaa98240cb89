//! JSON pretty-printing and raw byte rendering.

use std::borrow::Cow;

use serde_json::Value;

/// Render a JSON value with 2-space indentation.
pub fn pretty_json(value: &Value) -> String {
    // Serializing a `Value` to a string cannot fail.
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Render raw bytes as text, replacing invalid UTF-8 sequences.
pub fn bytes_as_text(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}
