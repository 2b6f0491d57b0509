//! Ordered attribute map for URN key/value pairs.

use std::fmt;

/// Attribute key/value pairs from a URN.
///
/// Pairs keep their insertion order, which is the order they appear in the
/// source string or the order they were composed in. Keys are unique:
/// inserting an existing key overwrites its value in place without moving
/// the pair.
///
/// Stored text is exactly what appears between the separators of the URN
/// string. The map itself never encodes or decodes anything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Attributes {
    pairs: Vec<(String, String)>,
}

impl Attributes {
    /// Creates an empty attribute map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value for a key, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if the key is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Inserts a pair, overwriting the value in place if the key exists.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(index) = self.position(&key) {
            self.pairs[index].1 = value;
        } else {
            self.pairs.push((key, value));
        }
    }

    /// Removes a pair by key, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.position(key)?;
        let (_, value) = self.pairs.remove(index);
        Some(value)
    }

    /// Returns true if there are no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns an iterator over the pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Position of a key in the insertion order.
    pub(crate) fn position(&self, key: &str) -> Option<usize> {
        self.pairs.iter().position(|(k, _)| k == key)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Self::new();
        for (key, value) in iter {
            attributes.insert(key, value);
        }
        attributes
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Attributes {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs: Vec<String> = self
            .pairs
            .iter()
            .map(|(k, v)| format!("{k}:{v}"))
            .collect();
        write!(f, "{}", pairs.join(":"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty() {
        let attributes = Attributes::new();
        assert!(attributes.is_empty());
        assert_eq!(attributes.len(), 0);
    }

    #[test]
    fn insert_and_get() {
        let mut attributes = Attributes::new();
        attributes.insert("vendor", "foo");
        assert_eq!(attributes.get("vendor"), Some("foo"));
        assert_eq!(attributes.get("missing"), None);
    }

    #[test]
    fn insert_existing_key_overwrites_in_place() {
        let mut attributes = Attributes::new();
        attributes.insert("a", "1");
        attributes.insert("b", "2");
        attributes.insert("a", "3");

        let items: Vec<_> = attributes.iter().collect();
        assert_eq!(items, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn remove_returns_value() {
        let mut attributes = Attributes::new();
        attributes.insert("a", "1");
        attributes.insert("b", "2");

        assert_eq!(attributes.remove("a"), Some("1".to_string()));
        assert_eq!(attributes.get("a"), None);
        assert_eq!(attributes.len(), 1);
    }

    #[test]
    fn remove_missing_returns_none() {
        let mut attributes = Attributes::new();
        attributes.insert("a", "1");
        assert_eq!(attributes.remove("z"), None);
        assert_eq!(attributes.len(), 1);
    }

    #[test]
    fn contains_key() {
        let mut attributes = Attributes::new();
        attributes.insert("a", "1");
        assert!(attributes.contains_key("a"));
        assert!(!attributes.contains_key("b"));
    }

    #[test]
    fn iter_preserves_insertion_order() {
        let mut attributes = Attributes::new();
        attributes.insert("z", "1");
        attributes.insert("a", "2");
        attributes.insert("m", "3");

        let keys: Vec<_> = attributes.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn from_iterator_applies_last_write_wins() {
        let attributes: Attributes =
            [("k", "v1"), ("other", "x"), ("k", "v2")].into_iter().collect();

        assert_eq!(attributes.len(), 2);
        assert_eq!(attributes.get("k"), Some("v2"));

        let keys: Vec<_> = attributes.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["k", "other"]);
    }

    #[test]
    fn extend_merges_pairs() {
        let mut attributes: Attributes = [("a", "1")].into_iter().collect();
        attributes.extend([("a", "2"), ("b", "3")]);

        assert_eq!(attributes.get("a"), Some("2"));
        assert_eq!(attributes.get("b"), Some("3"));
    }

    #[test]
    fn display_joins_with_separators() {
        let attributes: Attributes = [("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(attributes.to_string(), "a:1:b:2");
    }

    #[test]
    fn display_empty_is_empty_string() {
        assert_eq!(Attributes::new().to_string(), "");
    }
}
