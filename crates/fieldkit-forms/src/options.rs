//! Ordered option storage for select-style fields.

use serde::{Deserialize, Serialize};

/// A single selectable option: submitted value plus display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionEntry {
    pub value: String,
    pub label: String,
}

/// An ordered set of options with unique values.
///
/// Insertion order is preserved. Inserting a value that is already present
/// replaces its label in place rather than appending a duplicate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionSet {
    entries: Vec<OptionEntry>,
}

impl OptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an option, replacing the label of an existing value in place.
    pub fn insert(&mut self, value: impl Into<String>, label: impl Into<String>) {
        let value = value.into();
        let label = label.into();
        match self.entries.iter_mut().find(|e| e.value == value) {
            Some(entry) => entry.label = label,
            None => self.entries.push(OptionEntry { value, label }),
        }
    }

    /// Look up the display label for a value.
    pub fn label(&self, value: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.value == value)
            .map(|e| e.label.as_str())
    }

    pub fn contains(&self, value: &str) -> bool {
        self.entries.iter().any(|e| e.value == value)
    }

    /// Keep only the options the predicate accepts.
    pub fn retain(&mut self, mut keep: impl FnMut(&OptionEntry) -> bool) {
        self.entries.retain(|e| keep(e));
    }

    /// Option values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &OptionEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V: Into<String>, L: Into<String>> FromIterator<(V, L)> for OptionSet {
    fn from_iter<T: IntoIterator<Item = (V, L)>>(iter: T) -> Self {
        let mut set = OptionSet::new();
        for (value, label) in iter {
            set.insert(value, label);
        }
        set
    }
}
