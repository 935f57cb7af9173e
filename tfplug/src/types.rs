//! Core type system for tfplug
//!
//! This module provides the loosely typed configuration value (`Dynamic`),
//! the state container built on top of it (`DynamicValue`), attribute paths
//! and diagnostics.

use crate::error::{Result, TfplugError};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::fmt;

/// Largest integer magnitude an f64 number holds exactly (2^53 - 1)
const MAX_EXACT_INT: u64 = (1 << 53) - 1;

/// Dynamic represents Terraform values that can be of any type
/// This is the raw form of configuration and state data before it is
/// decoded into a typed wrapper value
#[derive(Debug, Clone, PartialEq)]
pub enum Dynamic {
    /// Explicit null value
    Null,
    /// Boolean value
    Bool(bool),
    /// Number value (all numbers are f64 to match Terraform)
    Number(f64),
    /// String value
    String(String),
    /// List of values (ordered, allows duplicates)
    List(Vec<Dynamic>),
    /// Map of string keys to values (objects are represented as Maps)
    Map(HashMap<String, Dynamic>),
    /// Value not yet known (during planning)
    Unknown,
}

impl Dynamic {
    pub fn as_string(&self) -> Option<&String> {
        match self {
            Dynamic::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Dynamic::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Dynamic::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Dynamic::Null)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Dynamic::Unknown)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Dynamic::Null => "null",
            Dynamic::Bool(_) => "bool",
            Dynamic::Number(_) => "number",
            Dynamic::String(_) => "string",
            Dynamic::List(_) => "list",
            Dynamic::Map(_) => "map",
            Dynamic::Unknown => "unknown",
        }
    }
}

impl From<&str> for Dynamic {
    fn from(value: &str) -> Self {
        Dynamic::String(value.to_string())
    }
}

impl<'de> Deserialize<'de> for Dynamic {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(Dynamic::from(value))
    }
}

impl From<serde_json::Value> for Dynamic {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Dynamic::Null,
            Value::Bool(b) => Dynamic::Bool(b),
            Value::Number(n) => Dynamic::Number(n.as_f64().unwrap_or_default()),
            Value::String(s) if s == "__unknown__" => Dynamic::Unknown,
            Value::String(s) => Dynamic::String(s),
            Value::Array(items) => Dynamic::List(items.into_iter().map(Dynamic::from).collect()),
            Value::Object(map) => Dynamic::Map(
                map.into_iter()
                    .map(|(k, v)| (k, Dynamic::from(v)))
                    .collect(),
            ),
        }
    }
}

/// DynamicValue wraps Dynamic and provides path based access
/// This is what configuration and state are carried in
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicValue {
    pub value: Dynamic,
}

impl DynamicValue {
    pub fn new(value: Dynamic) -> Self {
        Self { value }
    }

    pub fn null() -> Self {
        Self {
            value: Dynamic::Null,
        }
    }

    pub fn unknown() -> Self {
        Self {
            value: Dynamic::Unknown,
        }
    }

    pub fn object() -> Self {
        Self {
            value: Dynamic::Map(HashMap::new()),
        }
    }

    pub fn decode_json(data: &[u8]) -> Result<Self> {
        let value = serde_json::from_slice(data)?;
        Ok(Self { value })
    }

    /// Raw access to whatever sits at `path`
    pub fn get_attribute(&self, path: &AttributePath) -> Result<&Dynamic> {
        self.navigate_path(path)
    }

    pub fn get_string(&self, path: &AttributePath) -> Result<String> {
        let value = self.navigate_path(path)?;
        value
            .as_string()
            .cloned()
            .ok_or_else(|| TfplugError::TypeMismatch {
                expected: "string".to_string(),
                actual: value.type_name().to_string(),
            })
    }

    pub fn get_number(&self, path: &AttributePath) -> Result<f64> {
        let value = self.navigate_path(path)?;
        value.as_number().ok_or_else(|| TfplugError::TypeMismatch {
            expected: "number".to_string(),
            actual: value.type_name().to_string(),
        })
    }

    /// Stores an int64 at `path`, reporting failures as diagnostics on the path
    ///
    /// Numbers are carried as f64, so integers beyond 2^53 - 1 in magnitude
    /// are refused rather than silently rounded.
    pub fn set_int64(&mut self, path: &AttributePath, value: i64) -> Diagnostics {
        let mut diags = Diagnostics::new();

        if value.unsigned_abs() > MAX_EXACT_INT {
            diags.add_attribute_error(
                path.clone(),
                "Value Conversion Error",
                format!(
                    "{} cannot be stored exactly; integers must be within ±{}",
                    value, MAX_EXACT_INT
                ),
            );
            return diags;
        }

        if let Err(e) = self.set_attribute(path, Dynamic::Number(value as f64)) {
            diags.add_attribute_error(path.clone(), "Value Conversion Error", e.to_string());
        }
        diags
    }

    pub fn is_null(&self) -> bool {
        self.value.is_null()
    }

    pub fn is_unknown(&self) -> bool {
        self.value.is_unknown()
    }

    /// Sets `new_value` at `path`, creating intermediate objects as needed
    pub fn set_attribute(&mut self, path: &AttributePath, new_value: Dynamic) -> Result<()> {
        let Some((last, parents)) = path.steps.split_last() else {
            self.value = new_value;
            return Ok(());
        };

        if !matches!(self.value, Dynamic::Map(_)) {
            self.value = Dynamic::Map(HashMap::new());
        }

        let mut current = &mut self.value;
        for (idx, step) in parents.iter().enumerate() {
            current = match (current, step) {
                (Dynamic::Map(m), AttributePathStep::AttributeName(name))
                | (Dynamic::Map(m), AttributePathStep::ElementKeyString(name)) => m
                    .entry(name.clone())
                    .or_insert_with(|| match path.steps.get(idx + 1) {
                        Some(AttributePathStep::ElementKeyInt(_)) => Dynamic::List(Vec::new()),
                        _ => Dynamic::Map(HashMap::new()),
                    }),
                (Dynamic::List(l), AttributePathStep::ElementKeyInt(i)) => {
                    let len = l.len();
                    usize::try_from(*i)
                        .ok()
                        .and_then(|i| l.get_mut(i))
                        .ok_or_else(|| {
                            TfplugError::InvalidPath(format!(
                                "list index {} out of bounds (len {})",
                                i, len
                            ))
                        })?
                }
                (_, step) => {
                    return Err(TfplugError::InvalidPath(format!(
                        "cannot step into {:?}",
                        step
                    )))
                }
            };
        }

        match (current, last) {
            (Dynamic::Map(m), AttributePathStep::AttributeName(name))
            | (Dynamic::Map(m), AttributePathStep::ElementKeyString(name)) => {
                m.insert(name.clone(), new_value);
                Ok(())
            }
            (Dynamic::List(l), AttributePathStep::ElementKeyInt(i)) => {
                let len = l.len();
                let slot = usize::try_from(*i)
                    .ok()
                    .and_then(|i| l.get_mut(i))
                    .ok_or_else(|| {
                        TfplugError::InvalidPath(format!(
                            "list index {} out of bounds (len {})",
                            i, len
                        ))
                    })?;
                *slot = new_value;
                Ok(())
            }
            (_, step) => Err(TfplugError::InvalidPath(format!(
                "cannot set {:?} on a non-container value",
                step
            ))),
        }
    }

    fn navigate_path<'a>(&'a self, path: &AttributePath) -> Result<&'a Dynamic> {
        let mut current = &self.value;

        for step in &path.steps {
            current = match (current, step) {
                (Dynamic::Map(m), AttributePathStep::AttributeName(name))
                | (Dynamic::Map(m), AttributePathStep::ElementKeyString(name)) => m
                    .get(name)
                    .ok_or_else(|| TfplugError::AttributeNotFound(name.clone()))?,
                (Dynamic::List(l), AttributePathStep::ElementKeyInt(idx)) => usize::try_from(*idx)
                    .ok()
                    .and_then(|i| l.get(i))
                    .ok_or_else(|| {
                        TfplugError::InvalidPath(format!("list index {} out of bounds", idx))
                    })?,
                (_, step) => {
                    return Err(TfplugError::InvalidPath(format!(
                        "cannot step into {:?}",
                        step
                    )))
                }
            };
        }

        Ok(current)
    }
}

impl Default for DynamicValue {
    fn default() -> Self {
        Self::object()
    }
}

/// AttributePath represents a path to an attribute within a DynamicValue
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttributePath {
    pub steps: Vec<AttributePathStep>,
}

impl AttributePath {
    pub fn new(name: &str) -> Self {
        Self {
            steps: vec![AttributePathStep::AttributeName(name.to_string())],
        }
    }

    /// The empty path, addressing the root of a value
    pub fn root() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn attribute(mut self, name: &str) -> Self {
        self.steps
            .push(AttributePathStep::AttributeName(name.to_string()));
        self
    }

    pub fn index(mut self, idx: i64) -> Self {
        self.steps.push(AttributePathStep::ElementKeyInt(idx));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl fmt::Display for AttributePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            match step {
                AttributePathStep::AttributeName(name) if i == 0 => write!(f, "{}", name)?,
                AttributePathStep::AttributeName(name) => write!(f, ".{}", name)?,
                AttributePathStep::ElementKeyString(key) => write!(f, "[{:?}]", key)?,
                AttributePathStep::ElementKeyInt(idx) => write!(f, "[{}]", idx)?,
            }
        }
        Ok(())
    }
}

/// Individual step in an AttributePath
#[derive(Debug, Clone, PartialEq)]
pub enum AttributePathStep {
    /// Access attribute by name in object/map
    AttributeName(String),
    /// Access element by string key (for maps)
    ElementKeyString(String),
    /// Access element by integer index (for lists)
    ElementKeyInt(i64),
}

/// Diagnostic represents a warning or error from the provider
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub severity: DiagnosticSeverity,
    pub summary: String,
    pub detail: String,
    pub attribute: Option<AttributePath>,
}

impl Diagnostic {
    pub fn error(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity: DiagnosticSeverity::Error,
            summary: summary.into(),
            detail: detail.into(),
            attribute: None,
        }
    }

    pub fn with_attribute(mut self, path: AttributePath) -> Self {
        self.attribute = Some(path);
        self
    }
}

/// Severity level for diagnostics
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DiagnosticSeverity {
    Error,
    Warning,
}

/// Diagnostics collects the errors and warnings produced by an operation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, summary: impl Into<String>, detail: Option<impl Into<String>>) {
        let detail = detail.map(Into::into).unwrap_or_default();
        self.push(Diagnostic::error(summary, detail));
    }

    pub fn add_attribute_error(
        &mut self,
        path: AttributePath,
        summary: impl Into<String>,
        detail: impl Into<String>,
    ) {
        self.push(Diagnostic::error(summary, detail).with_attribute(path));
    }

    /// Routes a diagnostic by severity
    pub fn push(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            DiagnosticSeverity::Warning => self.warnings.push(diagnostic),
            DiagnosticSeverity::Error => self.errors.push(diagnostic),
        }
    }

    pub fn append(&mut self, other: Diagnostics) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }
}

/// Config represents configuration values
pub type Config = DynamicValue;

/// State represents resource state values
pub type State = DynamicValue;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dynamic_value_string_access() {
        let mut dv = DynamicValue::object();
        dv.set_attribute(&AttributePath::new("name"), Dynamic::from("test"))
            .unwrap();

        let result = dv.get_string(&AttributePath::new("name")).unwrap();
        assert_eq!(result, "test");
    }

    #[test]
    fn dynamic_value_nested_access() {
        let mut dv = DynamicValue::object();
        let path = AttributePath::new("config").attribute("endpoint");
        dv.set_attribute(&path, Dynamic::from("https://example.com"))
            .unwrap();

        let result = dv.get_string(&path).unwrap();
        assert_eq!(result, "https://example.com");
    }

    #[test]
    fn set_int64_stores_a_number() {
        let mut dv = DynamicValue::null();
        assert!(dv.set_int64(&AttributePath::new("id"), 42).is_empty());

        assert_eq!(dv.get_number(&AttributePath::new("id")).unwrap(), 42.0);
    }

    #[test]
    fn set_int64_refuses_values_f64_cannot_hold() {
        let mut dv = DynamicValue::object();
        let path = AttributePath::new("id");

        assert!(dv.set_int64(&path, 9_007_199_254_740_991).is_empty());
        assert!(dv.set_int64(&path, -9_007_199_254_740_991).is_empty());

        let diags = dv.set_int64(&path, 9_007_199_254_740_993);
        assert_eq!(diags.errors.len(), 1);
        assert_eq!(diags.errors[0].summary, "Value Conversion Error");
        assert_eq!(diags.errors[0].attribute, Some(path.clone()));
        assert_eq!(dv.get_number(&path).unwrap(), -9_007_199_254_740_991.0);

        assert!(dv.set_int64(&path, i64::MIN).has_errors());
    }

    #[test]
    fn set_int64_reports_unreachable_path() {
        let mut dv = DynamicValue::object();
        dv.set_attribute(&AttributePath::new("id"), Dynamic::from("x"))
            .unwrap();

        let path = AttributePath::new("id").attribute("nested");
        let diags = dv.set_int64(&path, 1);
        assert_eq!(diags.errors.len(), 1);
        assert_eq!(diags.errors[0].attribute, Some(path));
    }

    #[test]
    fn empty_path_replaces_the_root() {
        let mut dv = DynamicValue::object();
        dv.set_attribute(&AttributePath::root(), Dynamic::Bool(true))
            .unwrap();

        assert_eq!(dv.value, Dynamic::Bool(true));
    }

    #[test]
    fn get_reports_type_mismatch() {
        let mut dv = DynamicValue::object();
        dv.set_attribute(&AttributePath::new("flag"), Dynamic::Bool(true))
            .unwrap();

        let err = dv.get_string(&AttributePath::new("flag")).unwrap_err();
        assert!(matches!(err, TfplugError::TypeMismatch { .. }));
    }

    #[test]
    fn decode_json_maps_unknown_marker() {
        let dv = DynamicValue::decode_json(br#"{"name":"x","id":"__unknown__","n":3}"#).unwrap();

        assert_eq!(dv.get_string(&AttributePath::new("name")).unwrap(), "x");
        assert!(dv
            .get_attribute(&AttributePath::new("id"))
            .unwrap()
            .is_unknown());
        assert_eq!(dv.get_number(&AttributePath::new("n")).unwrap(), 3.0);
    }

    #[test]
    fn attribute_path_display() {
        let path = AttributePath::new("tags").index(2);
        assert_eq!(path.to_string(), "tags[2]");
        assert!(AttributePath::root().is_empty());
    }

    #[test]
    fn diagnostics_route_by_severity() {
        let mut diags = Diagnostics::new();
        diags.add_error("broken", Some("detail"));
        diags.push(Diagnostic {
            severity: DiagnosticSeverity::Warning,
            summary: "careful".to_string(),
            detail: String::new(),
            attribute: None,
        });

        assert!(diags.has_errors());
        assert_eq!(diags.errors.len(), 1);
        assert_eq!(diags.warnings.len(), 1);
        assert_eq!(diags.errors[0].detail, "detail");
        assert_eq!(diags.len(), 2);
    }

    #[test]
    fn append_keeps_both_collections() {
        let mut diags = Diagnostics::new();
        diags.add_error("first", None::<String>);

        let mut other = Diagnostics::new();
        other.add_attribute_error(AttributePath::new("id"), "second", "detail");
        diags.append(other);

        assert_eq!(diags.errors.len(), 2);
        assert_eq!(diags.errors[1].summary, "second");
    }
}
