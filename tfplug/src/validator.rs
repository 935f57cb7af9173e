//! Attribute validation envelope
//!
//! Validators run at plan time, once per attribute. The host hands each one
//! the raw configuration value and collects whatever diagnostics it emits.

use crate::context::Context;
use crate::types::{AttributePath, Diagnostic, Diagnostics, Dynamic};
use crate::values::FromDynamic;

#[derive(Debug, Clone)]
pub struct ValidatorRequest {
    pub context: Context,
    pub path: AttributePath,
    pub config_value: Dynamic,
}

impl ValidatorRequest {
    pub fn new(path: AttributePath, config_value: Dynamic) -> Self {
        Self {
            context: Context::new(),
            path,
            config_value,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ValidatorResponse {
    pub diagnostics: Diagnostics,
}

pub trait Validator: Send + Sync {
    /// Plain-text description used in generated docs
    fn description(&self) -> String;

    fn markdown_description(&self) -> String;

    fn validate(&self, request: &ValidatorRequest, response: &mut ValidatorResponse);
}

/// Decodes the request's config value, recording a diagnostic on failure
pub fn decode_config_value<T: FromDynamic>(
    request: &ValidatorRequest,
    response: &mut ValidatorResponse,
) -> Option<T> {
    match T::from_dynamic(&request.config_value) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!("failed to decode {}: {}", request.path, e);
            response.diagnostics.push(
                Diagnostic::error(
                    "Value Conversion Error",
                    format!("An unexpected error was encountered trying to convert the attribute value. {}", e),
                )
                .with_attribute(request.path.clone()),
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::Int64Value;

    struct EvenNumberValidator;

    impl Validator for EvenNumberValidator {
        fn description(&self) -> String {
            "number must be even".to_string()
        }

        fn markdown_description(&self) -> String {
            self.description()
        }

        fn validate(&self, request: &ValidatorRequest, response: &mut ValidatorResponse) {
            let Some(value) = decode_config_value::<Int64Value>(request, response) else {
                return;
            };
            if let Some(n) = value.value() {
                if n % 2 != 0 {
                    response.diagnostics.add_attribute_error(
                        request.path.clone(),
                        "Invalid Int64 Content",
                        format!("Got {}, which is odd", n),
                    );
                }
            }
        }
    }

    fn run(config_value: Dynamic) -> ValidatorResponse {
        let request = ValidatorRequest::new(AttributePath::new("count"), config_value);
        let mut response = ValidatorResponse::default();
        EvenNumberValidator.validate(&request, &mut response);
        response
    }

    #[test]
    fn custom_validator_runs_custom_logic() {
        assert!(run(Dynamic::Number(4.0)).diagnostics.is_empty());
        assert_eq!(run(Dynamic::Number(3.0)).diagnostics.errors.len(), 1);
    }

    #[test]
    fn decode_failure_is_reported_on_the_attribute() {
        let response = run(Dynamic::String("four".to_string()));

        assert_eq!(response.diagnostics.errors.len(), 1);
        let diag = &response.diagnostics.errors[0];
        assert_eq!(diag.summary, "Value Conversion Error");
        assert_eq!(diag.attribute, Some(AttributePath::new("count")));
    }
}
