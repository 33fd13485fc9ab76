//! Raw form input
//!
//! The presentation layer hands the workflow a bag of primitives keyed by
//! field name. Nothing here is validated; that is the job of
//! [`crate::validation`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{FieldError, Result};

/// A single primitive read from a form widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Text(String),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

/// Field values of one form submission, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawFields(BTreeMap<String, FieldValue>);

impl RawFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object of field name → string or integer
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read form input saved as a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Overlay `other` on top of these fields
    pub fn merge(mut self, other: RawFields) -> Self {
        self.0.extend(other.0);
        self
    }

    /// Builder-style insert
    pub fn with(mut self, name: &str, value: impl Into<FieldValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: &str, value: impl Into<FieldValue>) {
        self.0.insert(name.to_string(), value.into());
    }

    /// Insert only when a value is present (optional CLI flags)
    pub fn set_opt(&mut self, name: &str, value: Option<impl Into<FieldValue>>) {
        if let Some(value) = value {
            self.set(name, value);
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    /// Textual form of a field; "" when absent.
    pub fn text(&self, name: &str) -> String {
        self.0.get(name).map(|v| v.to_string()).unwrap_or_default()
    }

    /// Free text, `None` when absent or blank
    pub fn optional_text(&self, name: &str) -> Option<String> {
        let text = self.text(name);
        if text.trim().is_empty() { None } else { Some(text) }
    }

    /// Integer value of a field. Numeric strings are accepted so that plain
    /// text inputs work as well as number widgets.
    pub fn integer(&self, name: &str) -> std::result::Result<Option<i64>, FieldError> {
        match self.0.get(name) {
            None => Ok(None),
            Some(FieldValue::Integer(n)) => Ok(Some(*n)),
            Some(FieldValue::Text(s)) if s.trim().is_empty() => Ok(None),
            Some(FieldValue::Text(s)) => s.trim().parse::<i64>().map(Some).map_err(|_| {
                FieldError::NotAnInteger {
                    field: name.to_string(),
                    value: s.clone(),
                }
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
