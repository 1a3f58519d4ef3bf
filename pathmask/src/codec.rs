//! Document boundary: JSON text in, JSON text out.
//!
//! Decoding always materializes the whole document. Object keys are kept in
//! decode order in memory; [`KeyOrder`] decides how they are emitted.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{MaskError, Result};

/// Order of object keys in encoded output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyOrder {
    /// Keys appear in the order they had in the input document.
    #[default]
    Preserve,
    /// Keys of every object are sorted lexicographically.
    Sorted,
}

impl KeyOrder {
    /// Reorders the objects of `value` in place.
    pub fn apply(self, value: &mut Value) {
        if self == Self::Sorted {
            value.sort_all_objects();
        }
    }
}

/// Decodes a complete JSON document. Trailing non-whitespace is rejected.
pub fn decode(text: &str) -> Result<Value> {
    serde_json::from_str(text).map_err(MaskError::Decode)
}

/// Encodes `value` as compact JSON.
pub fn encode(mut value: Value, order: KeyOrder) -> Result<String> {
    order.apply(&mut value);
    serde_json::to_string(&value).map_err(MaskError::Encode)
}

/// Encodes `value` as indented JSON.
pub fn encode_pretty(mut value: Value, order: KeyOrder) -> Result<String> {
    order.apply(&mut value);
    serde_json::to_string_pretty(&value).map_err(MaskError::Encode)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{KeyOrder, decode, encode, encode_pretty};

    #[test]
    fn rejects_invalid_documents() {
        assert!(decode("not json").unwrap_err().is_decode());
        assert!(decode("{\"a\":1} trailing").unwrap_err().is_decode());
        assert!(decode("").unwrap_err().is_decode());
    }

    #[test]
    fn preserves_decode_order_by_default() {
        let value = decode(r#"{"b":1,"a":{"z":true,"y":null}}"#).unwrap();
        assert_eq!(
            encode(value, KeyOrder::default()).unwrap(),
            r#"{"b":1,"a":{"z":true,"y":null}}"#
        );
    }

    #[test]
    fn sorts_keys_recursively_on_request() {
        let value = decode(r#"{"b":1,"a":[{"z":true,"y":null}]}"#).unwrap();
        assert_eq!(
            encode(value, KeyOrder::Sorted).unwrap(),
            r#"{"a":[{"y":null,"z":true}],"b":1}"#
        );
    }

    #[test]
    fn pretty_output_is_indented() {
        let text = encode_pretty(json!({"a": [1]}), KeyOrder::Preserve).unwrap();
        assert_eq!(text, "{\n  \"a\": [\n    1\n  ]\n}");
    }

    #[test]
    fn key_order_deserializes_from_snake_case() {
        let order: KeyOrder = serde_json::from_str("\"sorted\"").unwrap();
        assert_eq!(order, KeyOrder::Sorted);
    }
}
