//! Per-field validation error map

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

/// Field name to human-readable error message.
///
/// A key is present if and only if the most recent validation of that field
/// failed; passing fields never appear. Setting `None` or an empty message
/// removes the key, which keeps the presence invariant without a separate
/// clear step at every call site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Errors(HashMap<String, String>);

impl Errors {
    /// Creates an empty error map.
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Returns the error message for a field, if present.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(|s| s.as_str())
    }

    /// Sets or clears a field's error. `None` and `""` both remove the entry.
    pub fn set(&mut self, field: impl Into<String>, message: Option<String>) {
        let field = field.into();
        match message {
            Some(message) if !message.is_empty() => {
                self.0.insert(field, message);
            }
            _ => {
                self.0.remove(&field);
            }
        }
    }

    /// Removes a field's error.
    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }

    /// Removes all errors.
    pub fn clear_all(&mut self) {
        self.0.clear();
    }

    /// Returns `true` if a field currently has an error.
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Number of fields with errors.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no field has an error.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over all field/message pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Returns `true` if the map contains at least one error.
pub fn has_errors(errors: &Errors) -> bool {
    !errors.is_empty()
}
