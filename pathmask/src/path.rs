//! Traversal paths and their canonical form.
//!
//! A concrete path names one node of one document, e.g. `$.jobs[3].name`.
//! Rules are written against the canonical form, where every array index is
//! collapsed to `[]` (`$.jobs[].name`), so one rule covers every element.

use std::{borrow::Cow, fmt};

/// Sentinel naming the document root.
pub const ROOT: &str = "$";

/// Concrete path of a node, built one segment at a time during a walk.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct JsonPath(String);

impl JsonPath {
    /// The path of the document root (`$`).
    #[must_use]
    pub fn root() -> Self {
        Self(ROOT.to_owned())
    }

    /// Path of the object field `name` below `self`.
    #[must_use]
    pub fn field(&self, name: &str) -> Self {
        let mut path = String::with_capacity(self.0.len() + 1 + name.len());
        path.push_str(&self.0);
        path.push('.');
        path.push_str(name);
        Self(path)
    }

    /// Path of the array element at `index` below `self`.
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}[{index}]", self.0))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical form of this path, used for rule lookup.
    pub fn canonical(&self) -> Cow<'_, str> {
        canonicalize(&self.0)
    }
}

impl Default for JsonPath {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for JsonPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<JsonPath> for String {
    fn from(path: JsonPath) -> Self {
        path.0
    }
}

/// Replaces every bracketed decimal index (`[0]`, `[42]`) with `[]`.
///
/// Every other character is kept as is, including brackets that do not
/// enclose at least one ASCII digit. The function is total and idempotent, and
/// borrows its input when there is nothing to replace.
///
/// ```rust
/// use pathmask::canonicalize;
///
/// assert_eq!(canonicalize("$.jobs[12].tags[0]"), "$.jobs[].tags[]");
/// assert_eq!(canonicalize("$.jobs[].name"), "$.jobs[].name");
/// ```
pub fn canonicalize(path: &str) -> Cow<'_, str> {
    let bytes = path.as_bytes();
    let mut canonical: Option<String> = None;
    let mut copied = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        if bytes[pos] == b'[' {
            let digits = bytes[pos + 1..]
                .iter()
                .take_while(|byte| byte.is_ascii_digit())
                .count();
            let close = pos + 1 + digits;
            if digits > 0 && bytes.get(close) == Some(&b']') {
                let out = canonical.get_or_insert_with(|| String::with_capacity(path.len()));
                out.push_str(&path[copied..pos]);
                out.push_str("[]");
                pos = close + 1;
                copied = pos;
                continue;
            }
        }
        pos += 1;
    }

    match canonical {
        Some(mut out) => {
            out.push_str(&path[copied..]);
            Cow::Owned(out)
        }
        None => Cow::Borrowed(path),
    }
}
