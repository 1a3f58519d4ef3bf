//! Partial masking of scalar text.
//!
//! A [`TextMask`] hides some characters of a value and leaves the rest
//! readable, which keeps masked logs useful for correlation (the last four
//! digits of a card, the domain of an email address).
//!
//! Strings are masked by content; numbers and booleans by their JSON text.
//! Values without a textual form (null, objects, arrays) and empty strings are
//! replaced with the placeholder. All counts are in Unicode scalar values.

use std::borrow::Cow;

use serde_json::Value;

use super::{MaskFunction, REDACTED_PLACEHOLDER};

/// Default character used to hide masked characters.
pub const MASK_CHAR: char = '*';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Span {
    /// Leading and trailing characters left visible; the middle is hidden.
    Keep { prefix: usize, suffix: usize },
    /// Leading and trailing characters hidden; the middle is left visible.
    Hide { prefix: usize, suffix: usize },
    /// Leading characters of the local part left visible; the domain is kept.
    EmailLocal { prefix: usize },
}

/// Masks part of a value's text.
///
/// ```rust
/// use pathmask::TextMask;
///
/// assert_eq!(TextMask::keep_last(4).apply_to("sk_live_abc123def456"), "****************f456");
/// assert_eq!(TextMask::email_local(2).apply_to("alice@example.com"), "al***@example.com");
/// assert_eq!(TextMask::mask_first(3).with_mask_char('#').apply_to("secret"), "###ret");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextMask {
    span: Span,
    mask_char: char,
    placeholder: Cow<'static, str>,
}

impl TextMask {
    fn with_span(span: Span) -> Self {
        Self {
            span,
            mask_char: MASK_CHAR,
            placeholder: Cow::Borrowed(REDACTED_PLACEHOLDER),
        }
    }

    /// Keeps the first `prefix` characters visible.
    #[must_use]
    pub fn keep_first(prefix: usize) -> Self {
        Self::with_span(Span::Keep { prefix, suffix: 0 })
    }

    /// Keeps the last `suffix` characters visible.
    #[must_use]
    pub fn keep_last(suffix: usize) -> Self {
        Self::with_span(Span::Keep { prefix: 0, suffix })
    }

    /// Keeps `prefix` leading and `suffix` trailing characters visible.
    ///
    /// When the two spans cover the whole value it is left unchanged.
    #[must_use]
    pub fn keep_both(prefix: usize, suffix: usize) -> Self {
        Self::with_span(Span::Keep { prefix, suffix })
    }

    /// Hides the first `prefix` characters.
    #[must_use]
    pub fn mask_first(prefix: usize) -> Self {
        Self::with_span(Span::Hide { prefix, suffix: 0 })
    }

    /// Hides the last `suffix` characters.
    #[must_use]
    pub fn mask_last(suffix: usize) -> Self {
        Self::with_span(Span::Hide { prefix: 0, suffix })
    }

    /// Hides `prefix` leading and `suffix` trailing characters.
    ///
    /// When the two spans cover the whole value every character is hidden.
    #[must_use]
    pub fn mask_both(prefix: usize, suffix: usize) -> Self {
        Self::with_span(Span::Hide { prefix, suffix })
    }

    /// Keeps the first `prefix` characters of an email's local part and the
    /// whole domain. Text without `@` is treated like [`TextMask::keep_first`].
    #[must_use]
    pub fn email_local(prefix: usize) -> Self {
        Self::with_span(Span::EmailLocal { prefix })
    }

    #[must_use]
    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        self.mask_char = mask_char;
        self
    }

    /// Replacement for values that have no text to mask.
    #[must_use]
    pub fn with_placeholder<P>(mut self, placeholder: P) -> Self
    where
        P: Into<Cow<'static, str>>,
    {
        self.placeholder = placeholder.into();
        self
    }

    /// Masks `text`. Empty text becomes the placeholder.
    #[must_use]
    pub fn apply_to(&self, text: &str) -> String {
        if text.is_empty() {
            return self.placeholder.clone().into_owned();
        }

        match self.span {
            Span::Keep { prefix, suffix } => self.keep(text, prefix, suffix),
            Span::Hide { prefix, suffix } => {
                let mut chars: Vec<char> = text.chars().collect();
                let total = chars.len();
                if prefix.saturating_add(suffix) >= total {
                    chars.fill(self.mask_char);
                } else {
                    chars[..prefix].fill(self.mask_char);
                    chars[total - suffix..].fill(self.mask_char);
                }
                chars.into_iter().collect()
            }
            Span::EmailLocal { prefix } => match text.split_once('@') {
                Some((local, domain)) => {
                    let mut masked = self.keep(local, prefix, 0);
                    masked.push('@');
                    masked.push_str(domain);
                    masked
                }
                None => self.keep(text, prefix, 0),
            },
        }
    }

    fn keep(&self, text: &str, prefix: usize, suffix: usize) -> String {
        let mut chars: Vec<char> = text.chars().collect();
        let total = chars.len();
        if prefix.saturating_add(suffix) < total {
            chars[prefix..total - suffix].fill(self.mask_char);
        }
        chars.into_iter().collect()
    }
}

impl MaskFunction for TextMask {
    fn mask(&self, original: &Value) -> Value {
        let text: Cow<'_, str> = match original {
            Value::String(text) => Cow::Borrowed(text.as_str()),
            Value::Number(number) => Cow::Owned(number.to_string()),
            Value::Bool(flag) => Cow::Owned(flag.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => {
                return Value::String(self.placeholder.clone().into_owned());
            }
        };
        Value::String(self.apply_to(&text))
    }
}
