//! Record -> API input
//!
//! Null, unknown and empty-set fields produce no input at all. Sonarr treats
//! a missing field as "leave unchanged", so the provider must never send a
//! placeholder for a value the user did not configure.

use super::{find_declared, find_field, to_api, FieldError, FieldRef, Fielded};
use crate::api::{FieldInput, FieldInputValue};
use tfplug::{AttributeType, ElementType, SetValue};

// `declared` is the record's spelling, which the name table is keyed on
fn input(declared: &str, value: FieldInputValue) -> Option<FieldInput> {
    Some(FieldInput::new(to_api(declared), value))
}

pub fn read_string<R: Fielded + ?Sized>(
    name: &str,
    record: &R,
) -> Result<Option<FieldInput>, FieldError> {
    match find_declared(record, name)? {
        (declared, FieldRef::String(v)) => Ok(v
            .value()
            .and_then(|s| input(declared, FieldInputValue::String(s.clone())))),
        (_, other) => Err(FieldError::kind_mismatch(
            name,
            AttributeType::String,
            other.attribute_type(),
        )),
    }
}

pub fn read_bool<R: Fielded + ?Sized>(
    name: &str,
    record: &R,
) -> Result<Option<FieldInput>, FieldError> {
    match find_declared(record, name)? {
        (declared, FieldRef::Bool(v)) => Ok(v
            .value()
            .and_then(|b| input(declared, FieldInputValue::Bool(*b)))),
        (_, other) => Err(FieldError::kind_mismatch(
            name,
            AttributeType::Bool,
            other.attribute_type(),
        )),
    }
}

pub fn read_int64<R: Fielded + ?Sized>(
    name: &str,
    record: &R,
) -> Result<Option<FieldInput>, FieldError> {
    match find_declared(record, name)? {
        (declared, FieldRef::Int64(v)) => Ok(v
            .value()
            .and_then(|n| input(declared, FieldInputValue::Int64(*n)))),
        (_, other) => Err(FieldError::kind_mismatch(
            name,
            AttributeType::Int64,
            other.attribute_type(),
        )),
    }
}

pub fn read_float64<R: Fielded + ?Sized>(
    name: &str,
    record: &R,
) -> Result<Option<FieldInput>, FieldError> {
    match find_declared(record, name)? {
        (declared, FieldRef::Float64(v)) => Ok(v
            .value()
            .and_then(|n| input(declared, FieldInputValue::Float64(*n)))),
        (_, other) => Err(FieldError::kind_mismatch(
            name,
            AttributeType::Float64,
            other.attribute_type(),
        )),
    }
}

fn known_set<'r, R: Fielded + ?Sized>(
    name: &str,
    record: &'r R,
    element_type: ElementType,
) -> Result<Option<(&'static str, &'r SetValue)>, FieldError> {
    match find_declared(record, name)? {
        (declared, FieldRef::Set(set)) if set.element_type() == element_type => {
            Ok((!set.is_empty()).then_some((declared, set)))
        }
        (_, other) => Err(FieldError::kind_mismatch(
            name,
            AttributeType::Set(element_type),
            other.attribute_type(),
        )),
    }
}

/// Element order follows the set's internal order and is not guaranteed
pub fn read_string_set<R: Fielded + ?Sized>(
    name: &str,
    record: &R,
) -> Result<Option<FieldInput>, FieldError> {
    let Some((declared, set)) = known_set(name, record, ElementType::String)? else {
        return Ok(None);
    };

    let values = set
        .elements()
        .iter()
        .filter_map(|e| e.as_string().and_then(|v| v.value()).cloned())
        .collect();

    Ok(input(declared, FieldInputValue::StringList(values)))
}

pub fn read_int_set<R: Fielded + ?Sized>(
    name: &str,
    record: &R,
) -> Result<Option<FieldInput>, FieldError> {
    let Some((declared, set)) = known_set(name, record, ElementType::Int64)? else {
        return Ok(None);
    };

    let values = set
        .elements()
        .iter()
        .filter_map(|e| e.as_int64().and_then(|v| v.value()).copied())
        .collect();

    Ok(input(declared, FieldInputValue::IntList(values)))
}

/// Harvests every present field of the record, in declaration order
pub fn read_fields<R: Fielded + ?Sized>(record: &R) -> Result<Vec<FieldInput>, FieldError> {
    let mut inputs = Vec::new();

    for &name in record.field_names() {
        let kind = find_field(record, name)?.attribute_type();
        let read = match kind {
            AttributeType::String => read_string(name, record)?,
            AttributeType::Bool => read_bool(name, record)?,
            AttributeType::Int64 => read_int64(name, record)?,
            AttributeType::Float64 => read_float64(name, record)?,
            AttributeType::Set(ElementType::String) => read_string_set(name, record)?,
            AttributeType::Set(ElementType::Int64) => read_int_set(name, record)?,
            kind => {
                return Err(FieldError::Unsupported {
                    name: name.to_string(),
                    kind,
                })
            }
        };

        match read {
            Some(input) => inputs.push(input),
            None => tracing::debug!("omitting absent field {}", name),
        }
    }

    Ok(inputs)
}
