//! Presence-tracked attribute values
//!
//! Every attribute Terraform hands to a provider is in one of three states:
//! known with a value, unknown (only during planning) or null. `Value<T>`
//! carries that state for the scalar kinds and `SetValue` does the same for
//! homogeneous sets, whose element type is fixed at construction.

use crate::attribute_type::{AttributeType, ElementType};
use crate::error::{Result, TfplugError};
use crate::types::Dynamic;

/// A scalar attribute value together with its presence state
#[derive(Debug, Clone, PartialEq)]
pub enum Value<T> {
    Null,
    Unknown,
    Known(T),
}

pub type StringValue = Value<String>;
pub type BoolValue = Value<bool>;
pub type Int64Value = Value<i64>;
pub type Float64Value = Value<f64>;

impl<T> Value<T> {
    pub fn null() -> Self {
        Value::Null
    }

    pub fn unknown() -> Self {
        Value::Unknown
    }

    pub fn known(value: impl Into<T>) -> Self {
        Value::Known(value.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Value::Unknown)
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Value::Known(_))
    }

    /// The payload, only present when the value is known
    pub fn value(&self) -> Option<&T> {
        match self {
            Value::Known(v) => Some(v),
            _ => None,
        }
    }
}

impl<T> Default for Value<T> {
    fn default() -> Self {
        Value::Null
    }
}

impl<T> From<Option<T>> for Value<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Value::Known)
    }
}

/// Decodes a raw configuration value into a typed wrapper
pub trait FromDynamic: Sized {
    fn from_dynamic(value: &Dynamic) -> Result<Self>;
}

fn decode_presence<T>(
    value: &Dynamic,
    expected: &str,
    decode: impl FnOnce(&Dynamic) -> Option<T>,
) -> Result<Value<T>> {
    match value {
        Dynamic::Null => Ok(Value::Null),
        Dynamic::Unknown => Ok(Value::Unknown),
        other => decode(other)
            .map(Value::Known)
            .ok_or_else(|| TfplugError::TypeMismatch {
                expected: expected.to_string(),
                actual: other.type_name().to_string(),
            }),
    }
}

fn integral(n: f64) -> Option<i64> {
    (n.fract() == 0.0 && n >= i64::MIN as f64 && n <= i64::MAX as f64).then_some(n as i64)
}

impl FromDynamic for StringValue {
    fn from_dynamic(value: &Dynamic) -> Result<Self> {
        decode_presence(value, "string", |v| v.as_string().cloned())
    }
}

impl FromDynamic for BoolValue {
    fn from_dynamic(value: &Dynamic) -> Result<Self> {
        decode_presence(value, "bool", Dynamic::as_bool)
    }
}

impl FromDynamic for Int64Value {
    fn from_dynamic(value: &Dynamic) -> Result<Self> {
        decode_presence(value, "int64", |v| v.as_number().and_then(integral))
    }
}

impl FromDynamic for Float64Value {
    fn from_dynamic(value: &Dynamic) -> Result<Self> {
        decode_presence(value, "float64", Dynamic::as_number)
    }
}

/// A single set element
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    String(StringValue),
    Bool(BoolValue),
    Int64(Int64Value),
    Float64(Float64Value),
}

impl ScalarValue {
    pub fn element_type(&self) -> ElementType {
        match self {
            ScalarValue::String(_) => ElementType::String,
            ScalarValue::Bool(_) => ElementType::Bool,
            ScalarValue::Int64(_) => ElementType::Int64,
            ScalarValue::Float64(_) => ElementType::Float64,
        }
    }

    pub fn as_string(&self) -> Option<&StringValue> {
        match self {
            ScalarValue::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_int64(&self) -> Option<&Int64Value> {
        match self {
            ScalarValue::Int64(v) => Some(v),
            _ => None,
        }
    }

    fn decode(element_type: ElementType, value: &Dynamic) -> Result<Self> {
        Ok(match element_type {
            ElementType::String => ScalarValue::String(StringValue::from_dynamic(value)?),
            ElementType::Bool => ScalarValue::Bool(BoolValue::from_dynamic(value)?),
            ElementType::Int64 => ScalarValue::Int64(Int64Value::from_dynamic(value)?),
            ElementType::Float64 => ScalarValue::Float64(Float64Value::from_dynamic(value)?),
        })
    }
}

impl From<StringValue> for ScalarValue {
    fn from(value: StringValue) -> Self {
        ScalarValue::String(value)
    }
}

impl From<BoolValue> for ScalarValue {
    fn from(value: BoolValue) -> Self {
        ScalarValue::Bool(value)
    }
}

impl From<Int64Value> for ScalarValue {
    fn from(value: Int64Value) -> Self {
        ScalarValue::Int64(value)
    }
}

impl From<Float64Value> for ScalarValue {
    fn from(value: Float64Value) -> Self {
        ScalarValue::Float64(value)
    }
}

/// An unordered, homogeneous collection of scalar values
///
/// Elements keep insertion order internally but equality ignores it.
#[derive(Debug, Clone)]
pub struct SetValue {
    element_type: ElementType,
    elements: Value<Vec<ScalarValue>>,
}

impl SetValue {
    /// Builds a known set, rejecting elements of the wrong type
    pub fn new(element_type: ElementType, elements: Vec<ScalarValue>) -> Result<Self> {
        if let Some(bad) = elements.iter().find(|e| e.element_type() != element_type) {
            return Err(TfplugError::ElementTypeMismatch {
                expected: element_type.to_string(),
                actual: bad.element_type().to_string(),
            });
        }

        Ok(Self {
            element_type,
            elements: Value::Known(elements),
        })
    }

    pub fn null(element_type: ElementType) -> Self {
        Self {
            element_type,
            elements: Value::Null,
        }
    }

    pub fn unknown(element_type: ElementType) -> Self {
        Self {
            element_type,
            elements: Value::Unknown,
        }
    }

    pub fn empty(element_type: ElementType) -> Self {
        Self {
            element_type,
            elements: Value::Known(Vec::new()),
        }
    }

    pub fn strings<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            element_type: ElementType::String,
            elements: Value::Known(
                values
                    .into_iter()
                    .map(|s| ScalarValue::String(Value::Known(s.into())))
                    .collect(),
            ),
        }
    }

    pub fn int64s<I>(values: I) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        Self {
            element_type: ElementType::Int64,
            elements: Value::Known(
                values
                    .into_iter()
                    .map(|n| ScalarValue::Int64(Value::Known(n)))
                    .collect(),
            ),
        }
    }

    /// Decodes a raw list into a set of `element_type`
    pub fn from_dynamic(element_type: ElementType, value: &Dynamic) -> Result<Self> {
        match value {
            Dynamic::Null => Ok(Self::null(element_type)),
            Dynamic::Unknown => Ok(Self::unknown(element_type)),
            Dynamic::List(items) => {
                let elements = items
                    .iter()
                    .map(|item| ScalarValue::decode(element_type, item))
                    .collect::<Result<Vec<_>>>()?;
                Self::new(element_type, elements)
            }
            other => Err(TfplugError::TypeMismatch {
                expected: format!("set of {}", element_type),
                actual: other.type_name().to_string(),
            }),
        }
    }

    pub fn element_type(&self) -> ElementType {
        self.element_type
    }

    pub fn attribute_type(&self) -> AttributeType {
        AttributeType::Set(self.element_type)
    }

    pub fn is_null(&self) -> bool {
        self.elements.is_null()
    }

    pub fn is_unknown(&self) -> bool {
        self.elements.is_unknown()
    }

    /// Elements of a known set; null and unknown sets have none
    pub fn elements(&self) -> &[ScalarValue] {
        self.elements.value().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.elements().len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements().is_empty()
    }
}

impl PartialEq for SetValue {
    fn eq(&self, other: &Self) -> bool {
        if self.element_type != other.element_type {
            return false;
        }

        match (&self.elements, &other.elements) {
            (Value::Null, Value::Null) | (Value::Unknown, Value::Unknown) => true,
            (Value::Known(a), Value::Known(b)) => same_multiset(a, b),
            _ => false,
        }
    }
}

fn same_multiset(a: &[ScalarValue], b: &[ScalarValue]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut taken = vec![false; b.len()];
    a.iter().all(|x| {
        let slot = b
            .iter()
            .enumerate()
            .position(|(i, y)| !taken[i] && x == y);
        match slot {
            Some(i) => {
                taken[i] = true;
                true
            }
            None => false,
        }
    })
}
