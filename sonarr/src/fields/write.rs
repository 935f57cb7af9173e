//! API output -> record

use super::{find_field, find_field_mut, to_local, FieldError, FieldMut, Fielded};
use crate::api::{FieldOutput, FieldValue};
use tfplug::{
    AttributeType, BoolValue, ElementType, Float64Value, Int64Value, SetValue, StringValue,
};

fn unexpected(name: &str, expected: &'static str, actual: &FieldValue) -> FieldError {
    FieldError::UnexpectedPayload {
        name: name.to_string(),
        expected,
        actual: actual.type_name(),
    }
}

fn payload<'o>(name: &str, output: &'o FieldOutput) -> Result<&'o FieldValue, FieldError> {
    output
        .value
        .as_ref()
        .ok_or_else(|| FieldError::Absent(name.to_string()))
}

fn number(name: &str, value: &FieldValue) -> Result<f64, FieldError> {
    match value {
        FieldValue::Number(n) => Ok(*n),
        other => Err(unexpected(name, "number", other)),
    }
}

fn list<'v>(name: &str, value: &'v FieldValue) -> Result<&'v [FieldValue], FieldError> {
    match value {
        FieldValue::List(items) => Ok(items),
        other => Err(unexpected(name, "list", other)),
    }
}

/// Stores the payload's textual form; Sonarr is loose about which fields it
/// returns as strings
pub fn write_string<R: Fielded + ?Sized>(
    output: &FieldOutput,
    record: &mut R,
) -> Result<(), FieldError> {
    let name = to_local(&output.name);
    let value = payload(name, output)?.to_string();

    match find_field_mut(record, name)? {
        FieldMut::String(slot) => *slot = StringValue::known(value),
        other => {
            return Err(FieldError::kind_mismatch(
                name,
                AttributeType::String,
                other.attribute_type(),
            ))
        }
    }

    tracing::debug!("wrote string field {}", name);
    Ok(())
}

/// Anything other than a boolean payload is stored as `false`
pub fn write_bool<R: Fielded + ?Sized>(
    output: &FieldOutput,
    record: &mut R,
) -> Result<(), FieldError> {
    let name = to_local(&output.name);
    let value = match payload(name, output)? {
        FieldValue::Bool(b) => *b,
        other => {
            tracing::warn!(
                "field {} returned a {} payload, storing false",
                name,
                other.type_name()
            );
            false
        }
    };

    match find_field_mut(record, name)? {
        FieldMut::Bool(slot) => *slot = BoolValue::known(value),
        other => {
            return Err(FieldError::kind_mismatch(
                name,
                AttributeType::Bool,
                other.attribute_type(),
            ))
        }
    }

    tracing::debug!("wrote bool field {}", name);
    Ok(())
}

/// Truncates the transport's f64 toward zero
pub fn write_int64<R: Fielded + ?Sized>(
    output: &FieldOutput,
    record: &mut R,
) -> Result<(), FieldError> {
    let name = to_local(&output.name);
    let value = number(name, payload(name, output)?)? as i64;

    match find_field_mut(record, name)? {
        FieldMut::Int64(slot) => *slot = Int64Value::known(value),
        other => {
            return Err(FieldError::kind_mismatch(
                name,
                AttributeType::Int64,
                other.attribute_type(),
            ))
        }
    }

    tracing::debug!("wrote int64 field {}", name);
    Ok(())
}

pub fn write_float64<R: Fielded + ?Sized>(
    output: &FieldOutput,
    record: &mut R,
) -> Result<(), FieldError> {
    let name = to_local(&output.name);
    let value = number(name, payload(name, output)?)?;

    match find_field_mut(record, name)? {
        FieldMut::Float64(slot) => *slot = Float64Value::known(value),
        other => {
            return Err(FieldError::kind_mismatch(
                name,
                AttributeType::Float64,
                other.attribute_type(),
            ))
        }
    }

    tracing::debug!("wrote float64 field {}", name);
    Ok(())
}

pub fn write_string_set<R: Fielded + ?Sized>(
    output: &FieldOutput,
    record: &mut R,
) -> Result<(), FieldError> {
    let name = to_local(&output.name);
    let items = list(name, payload(name, output)?)?;
    let value = SetValue::strings(items.iter().map(ToString::to_string));

    match find_field_mut(record, name)? {
        FieldMut::Set(slot) if slot.element_type() == ElementType::String => *slot = value,
        other => {
            return Err(FieldError::kind_mismatch(
                name,
                AttributeType::Set(ElementType::String),
                other.attribute_type(),
            ))
        }
    }

    tracing::debug!("wrote string set field {} ({} elements)", name, items.len());
    Ok(())
}

pub fn write_int_set<R: Fielded + ?Sized>(
    output: &FieldOutput,
    record: &mut R,
) -> Result<(), FieldError> {
    let name = to_local(&output.name);
    let items = list(name, payload(name, output)?)?
        .iter()
        .map(|item| number(name, item).map(|n| n as i64))
        .collect::<Result<Vec<_>, _>>()?;
    let count = items.len();

    match find_field_mut(record, name)? {
        FieldMut::Set(slot) if slot.element_type() == ElementType::Int64 => {
            *slot = SetValue::int64s(items)
        }
        other => {
            return Err(FieldError::kind_mismatch(
                name,
                AttributeType::Set(ElementType::Int64),
                other.attribute_type(),
            ))
        }
    }

    tracing::debug!("wrote int set field {} ({} elements)", name, count);
    Ok(())
}

/// Writes every output onto the record, choosing the writer from the kind of
/// the matching field
///
/// Outputs with no matching field are skipped: Sonarr returns settings the
/// provider does not model. Outputs without a value are skipped too, leaving
/// the field as it was.
pub fn write_fields<R: Fielded + ?Sized>(
    outputs: &[FieldOutput],
    record: &mut R,
) -> Result<(), FieldError> {
    for output in outputs {
        let name = to_local(&output.name);
        if output.value.is_none() {
            tracing::debug!("skipping field {} with no value", output.name);
            continue;
        }

        let kind = match find_field(&*record, name) {
            Ok(field) => field.attribute_type(),
            Err(FieldError::NotFound(_)) => {
                tracing::debug!("skipping unmapped field {}", output.name);
                continue;
            }
            Err(e) => return Err(e),
        };

        match kind {
            AttributeType::String => write_string(output, record)?,
            AttributeType::Bool => write_bool(output, record)?,
            AttributeType::Int64 => write_int64(output, record)?,
            AttributeType::Float64 => write_float64(output, record)?,
            AttributeType::Set(ElementType::String) => write_string_set(output, record)?,
            AttributeType::Set(ElementType::Int64) => write_int_set(output, record)?,
            kind => {
                return Err(FieldError::Unsupported {
                    name: name.to_string(),
                    kind,
                })
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Record {
        str_: StringValue,
        flag: BoolValue,
        count: Int64Value,
        ratio: Float64Value,
        channels: SetValue,
        field_tags: SetValue,
        seed_time: Int64Value,
    }

    crate::fielded!(Record {
        str_ as "Str",
        flag as "Flag",
        count as "Count",
        ratio as "seedRatio",
        channels as "Channels",
        field_tags as "fieldTags",
        seed_time as "seedTime",
    });

    fn record() -> Record {
        Record {
            str_: StringValue::null(),
            flag: BoolValue::null(),
            count: Int64Value::unknown(),
            ratio: Float64Value::null(),
            channels: SetValue::null(ElementType::String),
            field_tags: SetValue::null(ElementType::Int64),
            seed_time: Int64Value::null(),
        }
    }

    #[test]
    fn string_writer_stores_known_value() {
        let mut r = record();
        write_string(&FieldOutput::new("str", "hello"), &mut r).unwrap();

        assert_eq!(r.str_, StringValue::known("hello"));
        assert!(r.flag.is_null());
        assert!(r.count.is_unknown());
    }

    #[test]
    fn string_writer_stringifies_other_payloads() {
        let mut r = record();

        write_string(&FieldOutput::new("str", 8989.0), &mut r).unwrap();
        assert_eq!(r.str_, StringValue::known("8989"));

        write_string(&FieldOutput::new("str", true), &mut r).unwrap();
        assert_eq!(r.str_, StringValue::known("true"));
    }

    #[test]
    fn bool_writer_defaults_to_false_for_non_booleans() {
        let mut r = record();

        write_bool(&FieldOutput::new("flag", true), &mut r).unwrap();
        assert_eq!(r.flag, BoolValue::known(true));

        write_bool(&FieldOutput::new("flag", "true"), &mut r).unwrap();
        assert_eq!(r.flag, BoolValue::known(false));
    }

    #[test]
    fn int64_writer_truncates_toward_zero() {
        let mut r = record();

        write_int64(&FieldOutput::new("count", 50.0), &mut r).unwrap();
        assert_eq!(r.count, Int64Value::known(50));

        write_int64(&FieldOutput::new("count", -2.9), &mut r).unwrap();
        assert_eq!(r.count, Int64Value::known(-2));
    }

    #[test]
    fn int64_writer_rejects_string_payload() {
        let mut r = record();
        let err = write_int64(&FieldOutput::new("count", "5"), &mut r).unwrap_err();

        assert_eq!(
            err,
            FieldError::UnexpectedPayload {
                name: "count".to_string(),
                expected: "number",
                actual: "string",
            }
        );
        assert!(r.count.is_unknown());
    }

    #[test]
    fn float64_writer_uses_translated_name() {
        let mut r = record();
        write_float64(&FieldOutput::new("seedCriteria.seedRatio", 1.5), &mut r).unwrap();

        assert_eq!(r.ratio, Float64Value::known(1.5));
    }

    #[test]
    fn int_set_writer_reads_number_list() {
        let mut r = record();
        write_int_set(&FieldOutput::new("tags", vec![1.0, 2.0]), &mut r).unwrap();

        assert_eq!(r.field_tags, SetValue::int64s([1, 2]));
    }

    #[test]
    fn string_set_writer_stringifies_elements() {
        let mut r = record();
        let output = FieldOutput {
            name: "channels".to_string(),
            value: Some(FieldValue::List(vec![
                FieldValue::from("a"),
                FieldValue::Number(2.0),
            ])),
        };
        write_string_set(&output, &mut r).unwrap();

        assert_eq!(r.channels, SetValue::strings(["a", "2"]));
    }

    #[test]
    fn empty_list_keeps_declared_element_type() {
        let mut r = record();
        write_int_set(&FieldOutput::new("tags", Vec::<f64>::new()), &mut r).unwrap();

        assert_eq!(r.field_tags, SetValue::empty(ElementType::Int64));
        assert!(!r.field_tags.is_null());
    }

    #[test]
    fn writer_rejects_kind_mismatch() {
        let mut r = record();

        let err = write_bool(&FieldOutput::new("str", true), &mut r).unwrap_err();
        assert_eq!(
            err,
            FieldError::KindMismatch {
                name: "str".to_string(),
                expected: AttributeType::Bool,
                actual: AttributeType::String,
            }
        );

        let err = write_string_set(&FieldOutput::new("tags", vec!["a"]), &mut r).unwrap_err();
        assert!(matches!(err, FieldError::KindMismatch { .. }));
    }

    #[test]
    fn writer_rejects_absent_value() {
        let mut r = record();

        assert_eq!(
            write_string(&FieldOutput::absent("str"), &mut r),
            Err(FieldError::Absent("str".to_string()))
        );
        assert_eq!(
            write_bool(&FieldOutput::absent("flag"), &mut r),
            Err(FieldError::Absent("flag".to_string()))
        );
        assert!(r.str_.is_null());
        assert!(r.flag.is_null());
    }

    #[test]
    fn write_fields_skips_unset_settings() {
        let mut r = Record {
            count: Int64Value::known(9),
            ..record()
        };
        let outputs: Vec<FieldOutput> = serde_json::from_str(
            r#"[
                {"name":"str","value":"x"},
                {"name":"count","value":null},
                {"name":"tags"}
            ]"#,
        )
        .unwrap();

        write_fields(&outputs, &mut r).unwrap();

        assert_eq!(r.str_, StringValue::known("x"));
        assert_eq!(r.count, Int64Value::known(9));
        assert!(r.field_tags.is_null());
    }

    #[test]
    fn writer_reports_unknown_field() {
        let mut r = record();
        let err = write_string(&FieldOutput::new("apiKey", "x"), &mut r).unwrap_err();

        assert_eq!(err, FieldError::NotFound("apiKey".to_string()));
    }

    #[test]
    fn write_fields_dispatches_by_field_kind() {
        let mut r = record();
        let outputs: Vec<FieldOutput> = serde_json::from_str(
            r#"[
                {"name":"str","value":"x"},
                {"name":"flag","value":true},
                {"name":"count","value":3},
                {"name":"seedCriteria.seedTime","value":60},
                {"name":"tags","value":[4]},
                {"name":"unmodelled","value":"ignored"}
            ]"#,
        )
        .unwrap();

        write_fields(&outputs, &mut r).unwrap();

        assert_eq!(r.str_, StringValue::known("x"));
        assert_eq!(r.flag, BoolValue::known(true));
        assert_eq!(r.count, Int64Value::known(3));
        assert_eq!(r.seed_time, Int64Value::known(60));
        assert_eq!(r.field_tags, SetValue::int64s([4]));
        assert!(r.ratio.is_null());
    }
}
