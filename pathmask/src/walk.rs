//! Depth-first traversal that substitutes masked subtrees.

use serde_json::Value;

use crate::{mask::MaskFunction, observer::MaskObserver, path::JsonPath, rules::RuleSet};

/// Walks a decoded tree and masks every node whose canonical path is a rule.
///
/// The walk consumes its input and builds the output bottom-up, so no node of
/// the result aliases the input. Masking a node replaces its whole subtree:
/// descendants of a masked node are never visited nor looked up.
pub struct Walker<'a, F: ?Sized, O> {
    rules: &'a RuleSet,
    mask: &'a F,
    observer: O,
}

impl<'a, F, O> Walker<'a, F, O>
where
    F: MaskFunction + ?Sized,
    O: MaskObserver,
{
    pub fn new(rules: &'a RuleSet, mask: &'a F, observer: O) -> Self {
        Self {
            rules,
            mask,
            observer,
        }
    }

    /// Masks `value`, which sits at `path` in its document.
    ///
    /// Object fields keep their keys and their order; arrays keep their
    /// length. Scalars and nulls not matched by a rule are returned unchanged.
    #[must_use]
    pub fn walk(&self, value: Value, path: &JsonPath) -> Value {
        let canonical = path.canonical();
        self.observer.visited(path.as_str(), &canonical);

        if self.rules.contains(&canonical) {
            self.observer.masked(path.as_str(), &canonical);
            return self.mask.mask(&value);
        }

        match value {
            Value::Object(fields) => Value::Object(
                fields
                    .into_iter()
                    .map(|(key, child)| {
                        let child = self.walk(child, &path.field(&key));
                        (key, child)
                    })
                    .collect(),
            ),
            Value::Array(items) => Value::Array(
                items
                    .into_iter()
                    .enumerate()
                    .map(|(index, item)| self.walk(item, &path.index(index)))
                    .collect(),
            ),
            leaf => leaf,
        }
    }
}
