//! Mask functions: what a matched node is replaced with.
//!
//! The walker treats a [`MaskFunction`] as opaque. It is handed the original,
//! unmasked value of the matched node and returns the replacement for the
//! whole subtree.
//!
//! - [`FixedMask`]: a constant string, `"[REDACTED]"` by default
//! - [`TextMask`]: partial masking of scalar text (keep last 4, email local part, ...)
//! - any `Fn(&Value) -> Value` closure
//!
//! ```rust
//! use pathmask::{FixedMask, MaskFunction, TextMask};
//! use serde_json::json;
//!
//! assert_eq!(FixedMask::default().mask(&json!(42)), json!("[REDACTED]"));
//! assert_eq!(TextMask::keep_last(4).mask(&json!("4111111111111111")), json!("************1111"));
//!
//! let encoded_len = |original: &serde_json::Value| json!(original.to_string().len());
//! assert_eq!(encoded_len.mask(&json!("secret")), json!(8));
//! ```

mod text;

use std::borrow::Cow;

use serde_json::Value;
pub use text::{MASK_CHAR, TextMask};

/// Default replacement string.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

/// Produces the replacement for a masked node from its original value.
pub trait MaskFunction {
    /// Returns the value substituted for `original`.
    fn mask(&self, original: &Value) -> Value;
}

impl<F> MaskFunction for F
where
    F: Fn(&Value) -> Value,
{
    fn mask(&self, original: &Value) -> Value {
        self(original)
    }
}

/// Replaces every masked value with the same string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedMask {
    replacement: Cow<'static, str>,
}

impl FixedMask {
    pub fn new<R>(replacement: R) -> Self
    where
        R: Into<Cow<'static, str>>,
    {
        Self {
            replacement: replacement.into(),
        }
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }
}

impl Default for FixedMask {
    fn default() -> Self {
        Self::new(REDACTED_PLACEHOLDER)
    }
}

impl MaskFunction for FixedMask {
    fn mask(&self, _original: &Value) -> Value {
        Value::String(self.replacement.clone().into_owned())
    }
}
