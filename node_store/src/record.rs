//! Raw attribute records

use attr_types::AttrValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The raw attribute storage owned by one node
///
/// Keys are composite `"view:attribute"` strings; values are typed. The
/// record is created with provider-supplied defaults when its node is
/// created and destroyed with the node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributeRecord {
    entries: BTreeMap<String, AttrValue>,
}

impl AttributeRecord {
    /// Creates an empty record
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Gets a value by composite key
    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.entries.get(key)
    }

    /// Sets a value, replacing any previous one
    pub fn set(&mut self, key: impl Into<String>, value: AttrValue) {
        self.entries.insert(key.into(), value);
    }

    /// Removes a value, returning it if it was present
    pub fn remove(&mut self, key: &str) -> Option<AttrValue> {
        self.entries.remove(key)
    }

    /// Iterates the stored composite keys in order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of stored attributes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing is stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
