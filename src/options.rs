use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Options shared by every stage of a sanitize run.
///
/// A single instance is handed to each stage in turn, so a change made by an
/// early stage is visible to every later one. When the caller passes no
/// options, the run gets a fresh empty set.
///
/// # Example
///
/// ```rust
/// use entity_sanitizers::prelude::{SanitizeOptions, Value};
///
/// let mut options = SanitizeOptions::new();
/// options.insert("locale", "en");
/// assert_eq!(options.get("locale"), Some(&Value::Text("en".to_string())));
/// ```
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SanitizeOptions {
    options: BTreeMap<String, Value>,
}

impl SanitizeOptions {
    /// Creates an empty options set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the option value for `key`, if set.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }

    /// Sets `key` to `value`, returning the previous value if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.options.insert(key.into(), value.into())
    }

    /// Removes `key`, returning its value if it was set.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.options.remove(key)
    }

    /// Checks whether `key` is set.
    pub fn contains(&self, key: &str) -> bool {
        self.options.contains_key(key)
    }

    /// Returns the number of set options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Checks whether no option is set.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Iterates over the set options in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.options.iter()
    }
}

impl From<BTreeMap<String, Value>> for SanitizeOptions {
    fn from(options: BTreeMap<String, Value>) -> Self {
        Self { options }
    }
}
