//! Insertion-ordered record of named values.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::Value;

/// An ordered name → value map.
///
/// Records are the shape of every descriptor handed to the builders, and of
/// the `statics` and enum `functions` sub-records. Iteration follows insertion
/// order; re-setting a name replaces its value in place.
#[derive(Clone, Default)]
pub struct Record {
    /// Maps name to slot index.
    index: FxHashMap<String, usize>,
    /// Entries in insertion order.
    entries: Vec<(String, Value)>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`Record::set`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Set a field, returning the previous value if the name was present.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let name = name.into();
        let value = value.into();
        match self.index.get(&name) {
            Some(&slot) => Some(std::mem::replace(&mut self.entries[slot].1, value)),
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, value));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.index.get(name).map(|&slot| &self.entries[slot].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Iterate over names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(k, v)| (k, v)))
            .finish()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (name, value) in iter {
            record.set(name, value);
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_insertion_order() {
        let record = Record::new()
            .with("construct", Value::Void)
            .with("b", 2)
            .with("a", 1);

        let names: Vec<_> = record.names().collect();
        assert_eq!(names, vec!["construct", "b", "a"]);
    }

    #[test]
    fn set_replaces_in_place() {
        let mut record = Record::new().with("x", 1).with("y", 2);
        let previous = record.set("x", 10);

        assert_eq!(previous, Some(Value::Int(1)));
        assert_eq!(record.len(), 2);
        assert_eq!(record.get("x"), Some(&Value::Int(10)));
        assert_eq!(record.names().next(), Some("x"));
    }

    #[test]
    fn lookup_missing() {
        let record = Record::new();
        assert!(record.is_empty());
        assert!(record.get("nope").is_none());
        assert!(!record.contains("nope"));
    }

    #[test]
    fn collect_from_pairs() {
        let record: Record = [("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(record.get("b"), Some(&Value::Int(2)));
    }
}
