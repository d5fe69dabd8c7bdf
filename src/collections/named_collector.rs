// -----------------------------------------------------------------------------
// src/collections/named_collector.rs
// -----------------------------------------------------------------------------

#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// A labelled, insertion-ordered collection of text items.
///
/// The name is fixed at construction and has no setter. Items are only ever
/// appended: there is no deduplication, sorting or removal, so [`items`]
/// always reflects the exact order of the append calls.
///
/// ### Display
/// Formats as a report block, one line per item:
///
/// ```text
/// Items in test:
///   - item_0
///   - item_1
/// ```
///
/// ### Serialization
/// With the `json` feature, serializes to `{"name": "...", "items": [...]}`.
///
/// ### Examples
/// ```rust
/// use named_collector::NamedCollector;
///
/// let mut collector = NamedCollector::new("test");
/// collector.add_item("item_0");
/// collector.add_item("item_1");
/// assert_eq!(collector.items(), ["item_0", "item_1"]);
/// assert_eq!(collector.name(), "test");
/// ```
///
/// [`items`]: NamedCollector::items
#[derive(Debug, Default, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct NamedCollector {
    name: String,
    items: Vec<String>,
}

// Core API
impl NamedCollector {
    /// Creates an empty collector with the given name. Any name is accepted,
    /// including the empty string.
    #[inline]
    pub fn new(name: impl Into<String>) -> Self {
        NamedCollector {
            name: name.into(),
            items: Vec::new(),
        }
    }

    /// Returns the collector's name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends an item to the end of the sequence.
    #[inline]
    pub fn add_item(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }

    /// Returns a new instance with an item appended to the end.
    #[inline]
    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.add_item(item);
        self
    }

    /// Returns every item added so far, in insertion order.
    #[inline]
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Consumes the collector, returning its items in insertion order.
    #[inline]
    pub fn into_items(self) -> Vec<String> {
        self.items
    }

    /// Returns the number of items.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if no items have been added.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns an iterator over the items in insertion order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.items.iter()
    }
}

impl fmt::Display for NamedCollector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Items in {}:", self.name)?;
        for item in &self.items {
            writeln!(f, "  - {item}")?;
        }
        Ok(())
    }
}

impl<S: Into<String>> Extend<S> for NamedCollector {
    #[inline]
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.items.extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for NamedCollector {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a NamedCollector {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// Unnamed collector from a stream of items
impl<S: Into<String>> FromIterator<S> for NamedCollector {
    #[inline]
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut collector = NamedCollector::default();
        collector.extend(iter);
        collector
    }
}

impl From<NamedCollector> for Vec<String> {
    #[inline]
    fn from(value: NamedCollector) -> Self {
        value.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_is_empty() {
        let collector = NamedCollector::new("test");
        assert_eq!(collector.name(), "test");
        assert!(collector.is_empty());
        assert_eq!(collector.items(), Vec::<String>::new().as_slice());
    }

    #[test]
    fn test_add_item_grows_by_one() {
        let mut collector = NamedCollector::new("test");
        collector.add_item("a");
        assert_eq!(collector.len(), 1);
        collector.add_item(String::from("b"));
        assert_eq!(collector.len(), 2);
        assert_eq!(collector.items(), ["a", "b"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let collector = NamedCollector::new("dupes")
            .with_item("x")
            .with_item("x")
            .with_item("y")
            .with_item("x");
        assert_eq!(collector.items(), ["x", "x", "y", "x"]);
    }

    #[test]
    fn test_no_sorting_applied() {
        let collector = NamedCollector::new("order")
            .with_item("zeta")
            .with_item("alpha")
            .with_item("mu");
        assert_eq!(collector.items(), ["zeta", "alpha", "mu"]);
    }

    #[test]
    fn test_append_keeps_name() {
        let mut collector = NamedCollector::new("fixed");
        for i in 0..10 {
            collector.add_item(format!("item_{i}"));
        }
        assert_eq!(collector.name(), "fixed");
    }

    #[test]
    fn test_display_block() {
        let collector = NamedCollector::new("test")
            .with_item("item_0")
            .with_item("item_1");
        assert_eq!(
            collector.to_string(),
            "Items in test:\n  - item_0\n  - item_1\n"
        );
    }

    #[test]
    fn test_display_empty_name() {
        let collector = NamedCollector::new("");
        assert_eq!(collector.to_string(), "Items in :\n");
    }

    #[test]
    fn test_extend_and_iterators() {
        let mut collector = NamedCollector::new("ext");
        collector.extend(["one", "two"]);
        collector.extend(vec![String::from("three")]);

        let borrowed: Vec<&String> = (&collector).into_iter().collect();
        assert_eq!(borrowed, vec!["one", "two", "three"]);

        let owned: Vec<String> = collector.into_iter().collect();
        assert_eq!(owned, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_from_iterator_has_empty_name() {
        let collector: NamedCollector = ["b", "a"].into_iter().collect();
        assert_eq!(collector.name(), "");
        assert_eq!(collector.items(), ["b", "a"]);
        let items: Vec<String> = collector.into();
        assert_eq!(items, vec!["b", "a"]);
    }
}
