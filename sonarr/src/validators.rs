//! Attribute validators shared by resource schemas
//!
//! All validators skip null and unknown values: presence is the schema's
//! business, and an unknown value cannot be checked until apply.

use regex::Regex;
use std::sync::OnceLock;
use tfplug::validator::decode_config_value;
use tfplug::{Int64Value, StringValue, Validator, ValidatorRequest, ValidatorResponse};

const INVALID_STRING: &str = "Invalid String Content";
const INVALID_INT64: &str = "Invalid Int64 Content";
const UPPERCASE_MESSAGE: &str = "String cannot contains uppercase values";

/// Accepts a string only if it is one of `members`
#[derive(Debug, Clone)]
pub struct StringMatch {
    members: Vec<String>,
}

pub fn string_match<I, S>(members: I) -> StringMatch
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    StringMatch {
        members: members.into_iter().map(Into::into).collect(),
    }
}

impl Validator for StringMatch {
    fn description(&self) -> String {
        format!("string must be one of {:?}", self.members)
    }

    fn markdown_description(&self) -> String {
        self.description()
    }

    fn validate(&self, request: &ValidatorRequest, response: &mut ValidatorResponse) {
        let Some(StringValue::Known(value)) = decode_config_value(request, response) else {
            return;
        };

        if !self.members.contains(&value) {
            response.diagnostics.add_attribute_error(
                request.path.clone(),
                INVALID_STRING,
                self.description(),
            );
        }
    }
}

/// Accepts an integer only if it is one of `members`
#[derive(Debug, Clone)]
pub struct IntMatch {
    members: Vec<i64>,
}

pub fn int_match(members: impl IntoIterator<Item = i64>) -> IntMatch {
    IntMatch {
        members: members.into_iter().collect(),
    }
}

impl Validator for IntMatch {
    fn description(&self) -> String {
        format!("number must be one of {:?}", self.members)
    }

    fn markdown_description(&self) -> String {
        self.description()
    }

    fn validate(&self, request: &ValidatorRequest, response: &mut ValidatorResponse) {
        let Some(Int64Value::Known(value)) = decode_config_value(request, response) else {
            return;
        };

        if !self.members.contains(&value) {
            response.diagnostics.add_attribute_error(
                request.path.clone(),
                INVALID_INT64,
                self.description(),
            );
        }
    }
}

/// Rejects strings containing uppercase ASCII letters
#[derive(Debug, Clone, Copy, Default)]
pub struct StringLowercase;

pub fn string_lowercase() -> StringLowercase {
    StringLowercase
}

fn no_uppercase() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^A-Z]*$").expect("lowercase pattern is valid"))
}

impl Validator for StringLowercase {
    fn description(&self) -> String {
        UPPERCASE_MESSAGE.to_string()
    }

    fn markdown_description(&self) -> String {
        self.description()
    }

    fn validate(&self, request: &ValidatorRequest, response: &mut ValidatorResponse) {
        let Some(StringValue::Known(value)) = decode_config_value(request, response) else {
            return;
        };

        if !no_uppercase().is_match(&value) {
            response.diagnostics.add_attribute_error(
                request.path.clone(),
                INVALID_STRING,
                UPPERCASE_MESSAGE,
            );
        }
    }
}
