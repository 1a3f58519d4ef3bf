//! Masked documents handed to logging adapters.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::{codec::KeyOrder, error::Result};

/// A JSON tree that has already been through a mask operation.
///
/// Only [`crate::Masker::mask_json`] creates one, so a `MaskedJson` in a log
/// statement cannot carry the unmasked input. `Display` writes compact JSON.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaskedJson(Value);

impl MaskedJson {
    pub(crate) fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> Value {
        self.0
    }

    /// Encodes the masked tree as compact JSON.
    pub fn to_json_string(&self) -> Result<String> {
        crate::codec::encode(self.0.clone(), KeyOrder::Preserve)
    }
}

impl fmt::Display for MaskedJson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Serialize for MaskedJson {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl From<MaskedJson> for Value {
    fn from(masked: MaskedJson) -> Self {
        masked.0
    }
}
