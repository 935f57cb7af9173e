//! Error vocabulary shared by resources and data sources

use crate::api::ApiError;
use crate::fields::FieldError;
use thiserror::Error;
use tfplug::ProviderData;

pub const CLIENT_ERROR: &str = "Client Error";
pub const RESOURCE_ERROR: &str = "Resource Error";
pub const DATA_SOURCE_ERROR: &str = "Data Source Error";
pub const UNEXPECTED_IMPORT_IDENTIFIER: &str = "Unexpected Import Identifier";
pub const UNEXPECTED_RESOURCE_CONFIGURE_TYPE: &str = "Unexpected Resource Configure Type";
pub const UNEXPECTED_DATA_SOURCE_CONFIGURE_TYPE: &str = "Unexpected DataSource Configure Type";

pub const CREATE: &str = "create";
pub const READ: &str = "read";
pub const UPDATE: &str = "update";
pub const DELETE: &str = "delete";
pub const LIST: &str = "list";

#[derive(Debug, Error)]
pub enum Error {
    #[error("data source not found: no {kind} with {field} '{search}'")]
    DataNotFound {
        kind: String,
        field: String,
        search: String,
    },

    #[error(transparent)]
    Field(#[from] FieldError),

    #[error("Sonarr API error: {0}")]
    Api(#[from] ApiError),
}

impl Error {
    /// True for lookups that found nothing, which callers usually treat as
    /// "remove from state" rather than a failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::DataNotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

pub fn not_found_error(kind: &str, field: &str, search: &str) -> Error {
    Error::DataNotFound {
        kind: kind.to_string(),
        field: field.to_string(),
        search: search.to_string(),
    }
}

pub fn wrong_client(expected: &str, provider_data: &ProviderData) -> String {
    format!(
        "Expected {}, got: {}. Please report this issue to the provider developers.",
        expected,
        provider_data.type_name()
    )
}

/// Formats a failed API call for display, appending the response body when
/// the error chain carries one
pub fn client_error(action: &str, name: &str, err: &(dyn std::error::Error + 'static)) -> String {
    let body = std::iter::successors(Some(err), |e| e.source())
        .filter_map(|e| e.downcast_ref::<ApiError>())
        .find_map(ApiError::body);

    match body {
        Some(body) => format!(
            "Unable to {} {}, got error: {}\nDetails:\n{}",
            action, name, err, body
        ),
        None => format!("Unable to {} {}, got error: {}", action, name, err),
    }
}
