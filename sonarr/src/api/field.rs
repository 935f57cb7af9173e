//! Name-addressed field records exchanged with the Sonarr API
//!
//! Notification, indexer, download client and import list payloads carry
//! their provider-specific settings as a list of `{name, value}` pairs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Loosely typed value as it comes off the wire
///
/// Every JSON number is read as f64, whatever the field's real type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Number(f64),
    String(String),
    List(Vec<FieldValue>),
}

impl FieldValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Bool(_) => "bool",
            FieldValue::Number(_) => "number",
            FieldValue::String(_) => "string",
            FieldValue::List(_) => "list",
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(value: Vec<T>) -> Self {
        FieldValue::List(value.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::String(s) => f.write_str(s),
            FieldValue::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
        }
    }
}

/// A field returned by the API
///
/// Sonarr sends unset settings with a null value or none at all.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FieldOutput {
    pub name: String,
    #[serde(default)]
    pub value: Option<FieldValue>,
}

impl FieldOutput {
    pub fn new(name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    pub fn absent(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }
}

/// Typed value sent back to the API
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldInputValue {
    String(String),
    Bool(bool),
    Int64(i64),
    Float64(f64),
    StringList(Vec<String>),
    IntList(Vec<i64>),
}

/// A field sent to the API on create or update
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldInput {
    pub name: String,
    pub value: FieldInputValue,
}

impl FieldInput {
    pub fn new(name: impl Into<String>, value: FieldInputValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}
