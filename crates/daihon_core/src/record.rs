//! Loosely typed parameter records collected from user input.

use crate::Choice;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

/// A single user-supplied field value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Free text or an option id
    Text(String),
    /// Whole number (page counts)
    Number(i64),
    /// On/off switch
    Flag(bool),
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Number(i64::from(value))
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

/// Field name to value mapping for one generation request.
///
/// Keys are unique and unordered. Blank text counts as absent, so the typed
/// parameters see `None` and the template default applies.
///
/// # Examples
///
/// ```
/// use daihon_core::{Genre, ParameterRecord};
///
/// let record = ParameterRecord::new()
///     .with("genre", "mystery")
///     .with("title", "   ")
///     .with("pages", 24u32);
///
/// assert_eq!(record.choice::<Genre>("genre"), Some(Genre::Mystery));
/// assert_eq!(record.text("title"), None);
/// assert_eq!(record.number("pages"), Some(24));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterRecord {
    fields: HashMap<String, FieldValue>,
}

impl ParameterRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field, consuming and returning the record.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts or replaces a field.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Raw access to a field.
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// Number of fields present.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no field is present.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Free-text value, verbatim, or `None` when absent or blank.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.fields.get(key)? {
            FieldValue::Text(s) if s.trim().is_empty() => None,
            FieldValue::Text(s) => Some(s.clone()),
            FieldValue::Number(n) => Some(n.to_string()),
            FieldValue::Flag(b) => Some(b.to_string()),
        }
    }

    /// Numeric value; text is parsed when possible.
    pub fn number(&self, key: &str) -> Option<i64> {
        match self.fields.get(key)? {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(s) if s.trim().is_empty() => None,
            FieldValue::Text(s) => match s.trim().parse() {
                Ok(n) => Some(n),
                Err(_) => {
                    warn!(field = key, value = %s, "Non-numeric value, falling back to default");
                    None
                }
            },
            FieldValue::Flag(_) => None,
        }
    }

    /// Boolean value; accepts `true`/`false`/`yes`/`no`/`1`/`0` text.
    pub fn flag(&self, key: &str) -> Option<bool> {
        match self.fields.get(key)? {
            FieldValue::Flag(b) => Some(*b),
            FieldValue::Number(n) => Some(*n != 0),
            FieldValue::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "1" => Some(true),
                "false" | "no" | "0" => Some(false),
                _ => None,
            },
        }
    }

    /// Enumerated option, parsed leniently.
    pub fn choice<C: Choice>(&self, key: &str) -> Option<C> {
        self.text(key).and_then(|raw| C::parse_lenient(&raw))
    }
}

impl<K, V> FromIterator<(K, V)> for ParameterRecord
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}
