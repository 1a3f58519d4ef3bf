//! Mask operations: decode, walk, encode.
//!
//! A [`Masker`] holds the caller's configuration (mask function, observer,
//! output format). The paths to mask are supplied per call, as in
//! [`Masker::mask`], or as a prebuilt [`RuleSet`]. A masker carries no mutable
//! state, so one instance can serve concurrent callers when its mask function
//! and observer are `Sync`.
//!
//! ```rust
//! use pathmask::{KeyOrder, Masker, TextMask};
//!
//! let masker = Masker::builder()
//!     .mask_fn(TextMask::keep_last(4))
//!     .key_order(KeyOrder::Sorted)
//!     .build();
//!
//! let masked = masker.mask(r#"{"pan":"4111111111111111","brand":"visa"}"#, ["$.pan"])?;
//! assert_eq!(masked, r#"{"brand":"visa","pan":"************1111"}"#);
//! # Ok::<(), pathmask::MaskError>(())
//! ```

use std::borrow::Cow;

use serde::Deserialize;
use serde_json::Value;

use crate::{
    codec::{self, KeyOrder},
    error::{MaskError, Result},
    mask::{FixedMask, MaskFunction},
    observer::{MaskObserver, NoopObserver},
    output::MaskedJson,
    path::JsonPath,
    rules::RuleSet,
    tracing::TracingObserver,
    walk::Walker,
};

/// Masks every value at the given paths with `"[REDACTED]"`.
///
/// Shorthand for `Masker::new().mask(document, paths)`.
pub fn mask<I, S>(document: &str, paths: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Masker::new().mask(document, paths)
}

/// A configured mask operation.
pub struct Masker<F = FixedMask, O = NoopObserver> {
    mask_fn: F,
    observer: O,
    debug_logging: bool,
    key_order: KeyOrder,
    pretty: bool,
}

impl Masker {
    /// A masker with the default configuration: `"[REDACTED]"`, no tracing,
    /// keys in decode order, compact output.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> MaskerBuilder {
        MaskerBuilder::default()
    }
}

impl Default for Masker {
    fn default() -> Self {
        Self::new()
    }
}

impl<F, O> Masker<F, O>
where
    F: MaskFunction,
    O: MaskObserver,
{
    /// Masks `document` at every path in `paths`.
    ///
    /// The rule set is built for this call only. On error nothing derived from
    /// `document` is returned.
    pub fn mask<I, S>(&self, document: &str, paths: I) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mask_with_rules(document, &RuleSet::new(paths))
    }

    /// Masks `document` with a prebuilt rule set.
    pub fn mask_with_rules(&self, document: &str, rules: &RuleSet) -> Result<String> {
        let value = codec::decode(document)?;
        let masked = self.mask_value(value, rules);
        if self.pretty {
            codec::encode_pretty(masked, self.key_order)
        } else {
            codec::encode(masked, self.key_order)
        }
    }

    /// Masks an already decoded tree. Key order is left as decoded.
    pub fn mask_value(&self, value: Value, rules: &RuleSet) -> Value {
        let root = JsonPath::root();
        if self.debug_logging {
            let observer = (&self.observer, TracingObserver);
            Walker::new(rules, &self.mask_fn, observer).walk(value, &root)
        } else {
            Walker::new(rules, &self.mask_fn, &self.observer).walk(value, &root)
        }
    }

    /// Masks a tree for a logging adapter, applying the configured key order.
    pub fn mask_json(&self, value: Value, rules: &RuleSet) -> MaskedJson {
        let mut masked = self.mask_value(value, rules);
        self.key_order.apply(&mut masked);
        MaskedJson::new(masked)
    }

    pub fn key_order(&self) -> KeyOrder {
        self.key_order
    }

    pub fn debug_logging(&self) -> bool {
        self.debug_logging
    }
}

/// Builder for [`Masker`].
///
/// Each option can be set in any order; `mask_fn`, `placeholder` and
/// `observer` change the builder's type, the others do not.
pub struct MaskerBuilder<F = FixedMask, O = NoopObserver> {
    mask_fn: F,
    observer: O,
    debug_logging: bool,
    key_order: KeyOrder,
    pretty: bool,
}

impl Default for MaskerBuilder {
    fn default() -> Self {
        Self {
            mask_fn: FixedMask::default(),
            observer: NoopObserver,
            debug_logging: false,
            key_order: KeyOrder::default(),
            pretty: false,
        }
    }
}

impl<F, O> MaskerBuilder<F, O> {
    /// Replaces every masked value with `placeholder`.
    pub fn placeholder<P>(self, placeholder: P) -> MaskerBuilder<FixedMask, O>
    where
        P: Into<Cow<'static, str>>,
    {
        self.mask_fn(FixedMask::new(placeholder))
    }

    /// Replaces every masked value with the output of `mask_fn`.
    pub fn mask_fn<G: MaskFunction>(self, mask_fn: G) -> MaskerBuilder<G, O> {
        MaskerBuilder {
            mask_fn,
            observer: self.observer,
            debug_logging: self.debug_logging,
            key_order: self.key_order,
            pretty: self.pretty,
        }
    }

    /// Sends walk events to `observer`, in addition to tracing output when
    /// debug logging is on.
    pub fn observer<P: MaskObserver>(self, observer: P) -> MaskerBuilder<F, P> {
        MaskerBuilder {
            mask_fn: self.mask_fn,
            observer,
            debug_logging: self.debug_logging,
            key_order: self.key_order,
            pretty: self.pretty,
        }
    }

    /// Traces every visited path and masking decision through `tracing`.
    ///
    /// Has no effect on the masked output.
    #[must_use]
    pub fn debug_logging(mut self, enabled: bool) -> Self {
        self.debug_logging = enabled;
        self
    }

    #[must_use]
    pub fn key_order(mut self, key_order: KeyOrder) -> Self {
        self.key_order = key_order;
        self
    }

    /// Emits indented JSON instead of compact JSON.
    #[must_use]
    pub fn pretty(mut self, enabled: bool) -> Self {
        self.pretty = enabled;
        self
    }

    pub fn build(self) -> Masker<F, O> {
        Masker {
            mask_fn: self.mask_fn,
            observer: self.observer,
            debug_logging: self.debug_logging,
            key_order: self.key_order,
            pretty: self.pretty,
        }
    }
}

/// Declarative masker configuration, e.g. loaded from a pipeline config file.
///
/// ```rust
/// let config = pathmask::MaskerConfig::from_json(
///     r#"{"paths": ["$.user.email"], "placeholder": "***", "key_order": "sorted"}"#,
/// )?;
/// let masked = config.mask(r#"{"user":{"name":"ana","email":"ana@example.com"}}"#)?;
/// assert_eq!(masked, r#"{"user":{"email":"***","name":"ana"}}"#);
/// # Ok::<(), pathmask::MaskError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MaskerConfig {
    /// Canonical paths to mask.
    pub paths: RuleSet,
    /// Replacement string; `"[REDACTED]"` when absent.
    pub placeholder: Option<String>,
    pub key_order: KeyOrder,
    pub pretty: bool,
    pub debug_logging: bool,
}

impl MaskerConfig {
    /// Parses a configuration from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(MaskError::Config)
    }

    /// Builds the masker this configuration describes.
    pub fn masker(&self) -> Masker {
        let builder = Masker::builder()
            .debug_logging(self.debug_logging)
            .key_order(self.key_order)
            .pretty(self.pretty);
        match &self.placeholder {
            Some(placeholder) => builder.placeholder(placeholder.clone()).build(),
            None => builder.build(),
        }
    }

    /// Masks `document` with this configuration's paths.
    pub fn mask(&self, document: &str) -> Result<String> {
        self.masker().mask_with_rules(document, &self.paths)
    }
}
