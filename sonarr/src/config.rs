//! Provider configuration

use serde::Deserialize;
use tfplug::{AttributePath, Config, Diagnostics, FromDynamic, Int64Value, StringValue, Value};

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

/// Connection settings for a Sonarr instance
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProviderConfig {
    pub url: String,
    pub api_key: String,
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl ProviderConfig {
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: api_key.into(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }

    /// Reads `url`, `api_key` and the optional `timeout` from the provider
    /// block, reporting every unusable attribute at once
    pub fn from_config(config: &Config) -> Result<Self, Diagnostics> {
        let mut diags = Diagnostics::new();

        let url = required_string(config, "url", "Sonarr URL", &mut diags);
        let api_key = required_string(config, "api_key", "Sonarr API key", &mut diags);

        let timeout_path = AttributePath::new("timeout");
        let timeout_seconds = match decode::<Int64Value>(config, &timeout_path, &mut diags) {
            Some(Value::Known(t)) if t > 0 => t as u64,
            Some(Value::Known(t)) => {
                diags.add_attribute_error(
                    timeout_path,
                    "Invalid Timeout",
                    format!("timeout must be a positive number of seconds, got {}", t),
                );
                DEFAULT_TIMEOUT_SECONDS
            }
            _ => DEFAULT_TIMEOUT_SECONDS,
        };

        match (url, api_key) {
            (Some(url), Some(api_key)) if !diags.has_errors() => Ok(Self {
                url,
                api_key,
                timeout_seconds,
            }),
            _ => Err(diags),
        }
    }
}

fn decode<T: FromDynamic + Default>(
    config: &Config,
    path: &AttributePath,
    diags: &mut Diagnostics,
) -> Option<T> {
    let Ok(raw) = config.get_attribute(path) else {
        return Some(T::default());
    };

    match T::from_dynamic(raw) {
        Ok(value) => Some(value),
        Err(e) => {
            diags.add_attribute_error(path.clone(), "Value Conversion Error", e.to_string());
            None
        }
    }
}

fn required_string(
    config: &Config,
    name: &str,
    label: &str,
    diags: &mut Diagnostics,
) -> Option<String> {
    let path = AttributePath::new(name);

    match decode::<StringValue>(config, &path, diags)? {
        Value::Known(value) if !value.is_empty() => Some(value),
        Value::Unknown => {
            diags.add_attribute_error(
                path,
                format!("Unknown {}", label),
                format!(
                    "The provider cannot create the Sonarr API client as there is an unknown configuration value for the {}.",
                    label
                ),
            );
            None
        }
        _ => {
            diags.add_attribute_error(
                path,
                format!("Missing {}", label),
                format!("The provider requires `{}` to be set.", name),
            );
            None
        }
    }
}
