//! The set of canonical paths to mask.

use std::collections::HashSet;

use serde::Deserialize;

use crate::path::{JsonPath, canonicalize};

/// Canonical path patterns whose nodes must be masked.
///
/// Patterns use `[]` for "any element of this array" and are stored verbatim.
/// Lookups are always made with a canonical path, so a pattern carrying a
/// literal index (e.g. `$.items[0]`) never matches anything.
///
/// A `RuleSet` deserializes from a plain list of strings:
///
/// ```rust
/// let rules: pathmask::RuleSet = serde_json::from_str(r#"["$.password", "$.cards[].pan"]"#)?;
/// assert!(rules.contains("$.cards[].pan"));
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    patterns: HashSet<String>,
}

impl RuleSet {
    /// Builds a rule set; duplicate patterns collapse.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        patterns.into_iter().collect()
    }

    /// Exact membership test on a canonical path.
    pub fn contains(&self, canonical: &str) -> bool {
        self.patterns.contains(canonical)
    }

    /// Canonicalizes a concrete path, then tests membership.
    pub fn matches(&self, path: &JsonPath) -> bool {
        self.contains(&path.canonical())
    }

    /// Like [`RuleSet::matches`], for a path given as a string.
    pub fn matches_str(&self, path: &str) -> bool {
        self.contains(&canonicalize(path))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Iterates the patterns in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for RuleSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            patterns: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for RuleSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.patterns.extend(iter.into_iter().map(Into::into));
    }
}
