//! End-to-end marshaling scenarios over a notification-like record

#![allow(clippy::disallowed_methods)] // Allow unwrap() in tests for clarity

use sonarr::api::{FieldInput, FieldInputValue, FieldOutput};
use sonarr::{
    read_fields, read_string, read_string_set, string_lowercase, write_fields, write_int64,
    write_int_set, write_string,
};
use tfplug::{
    AttributePath, BoolValue, DiagnosticSeverity, Dynamic, ElementType, Float64Value,
    Int64Value, SetValue, StringValue, Validator, ValidatorRequest, ValidatorResponse,
};

#[derive(Debug)]
struct Notification {
    str_: StringValue,
    in_: Int64Value,
    set: SetValue,
    field_tags: StringValue,
    on_grab: BoolValue,
    seed_ratio: Float64Value,
    channels: SetValue,
}

sonarr::fielded!(Notification {
    str_ as "Str",
    in_ as "In",
    set as "Set",
    field_tags as "fieldTags",
    on_grab as "onGrab",
    seed_ratio as "seedRatio",
    channels,
});

impl Default for Notification {
    fn default() -> Self {
        Self {
            str_: StringValue::null(),
            in_: Int64Value::null(),
            set: SetValue::null(ElementType::Int64),
            field_tags: StringValue::null(),
            on_grab: BoolValue::null(),
            seed_ratio: Float64Value::null(),
            channels: SetValue::null(ElementType::String),
        }
    }
}

#[test]
fn string_output_lands_in_string_field() {
    let mut record = Notification::default();

    write_string(&FieldOutput::new("str", "hello"), &mut record).unwrap();

    assert_eq!(record.str_, StringValue::known("hello"));
    assert!(record.in_.is_null());
    assert!(record.set.is_null());
}

#[test]
fn transport_float_becomes_int64() {
    let mut record = Notification::default();

    write_int64(&FieldOutput::new("in", 50.0), &mut record).unwrap();

    assert_eq!(record.in_, Int64Value::known(50));
}

#[test]
fn number_list_becomes_int_set() {
    let mut record = Notification::default();

    write_int_set(&FieldOutput::new("set", vec![1.0, 2.0]), &mut record).unwrap();

    assert_eq!(record.set, SetValue::int64s([2, 1]));
    assert_eq!(record.set.element_type(), ElementType::Int64);
}

#[test]
fn null_string_produces_no_input() {
    let record = Notification::default();

    assert_eq!(read_string("str", &record).unwrap(), None);
}

#[test]
fn reader_translates_local_name() {
    let record = Notification {
        field_tags: StringValue::known("x"),
        ..Notification::default()
    };

    assert_eq!(
        read_string("fieldTags", &record).unwrap(),
        Some(FieldInput::new(
            "tags",
            FieldInputValue::String("x".to_string())
        ))
    );
}

#[test]
fn lowercase_validator_scenarios() {
    let validator = string_lowercase();
    let check = |value: Dynamic| {
        let request = ValidatorRequest::new(AttributePath::new("name"), value);
        let mut response = ValidatorResponse::default();
        validator.validate(&request, &mut response);
        response.diagnostics
    };

    assert!(check(Dynamic::from("abc")).is_empty());
    assert!(check(Dynamic::Unknown).is_empty());

    let diags = check(Dynamic::from("Abc"));
    assert_eq!(diags.errors.len(), 1);
    assert_eq!(diags.errors[0].severity, DiagnosticSeverity::Error);
    assert_eq!(diags.errors[0].summary, "Invalid String Content");
}

#[test]
fn api_payload_round_trips_through_record() {
    let outputs: Vec<FieldOutput> = serde_json::from_str(
        r#"[
            {"name":"onGrab","value":true},
            {"name":"seedCriteria.seedRatio","value":1.5},
            {"name":"channels","value":["general","alerts"]},
            {"name":"tags","value":"weekly"},
            {"name":"webhookUrl","value":"https://example.com"}
        ]"#,
    )
    .unwrap();

    let mut record = Notification::default();
    write_fields(&outputs, &mut record).unwrap();

    assert_eq!(record.on_grab, BoolValue::known(true));
    assert_eq!(record.seed_ratio, Float64Value::known(1.5));
    assert_eq!(record.field_tags, StringValue::known("weekly"));
    assert_eq!(record.channels, SetValue::strings(["alerts", "general"]));

    let inputs = read_fields(&record).unwrap();
    let names: Vec<&str> = inputs.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["tags", "onGrab", "seedCriteria.seedRatio", "channels"]
    );

    let json = serde_json::to_value(&inputs[2]).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"name": "seedCriteria.seedRatio", "value": 1.5})
    );
}

#[test]
fn empty_set_is_not_sent() {
    let mut record = Notification::default();
    write_fields(
        &[FieldOutput::new("channels", Vec::<&str>::new())],
        &mut record,
    )
    .unwrap();

    assert!(!record.channels.is_null());
    assert_eq!(read_string_set("channels", &record).unwrap(), None);
}
