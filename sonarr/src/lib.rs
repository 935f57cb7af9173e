//! Helper utilities for the Terraform Sonarr provider
//!
//! Resources and data sources lean on these for the repetitive parts of
//! talking to Sonarr: moving dynamic `{name, value}` settings on and off
//! typed records, validating attributes, picking the API client out of the
//! configure request, and parsing numeric import IDs.

pub mod api;
pub mod config;
pub mod configure;
pub mod errors;
pub mod fields;
pub mod import;
pub mod languages;
pub mod validators;

pub use api::Client;
pub use config::ProviderConfig;
pub use configure::{data_source_configure, resource_configure};
pub use errors::{client_error, not_found_error, wrong_client, Error, Result};
pub use fields::{
    read_bool, read_fields, read_float64, read_int64, read_int_set, read_string,
    read_string_set, write_bool, write_fields, write_float64, write_int64, write_int_set,
    write_string, write_string_set, FieldError, Fielded,
};
pub use import::import_int_id;
pub use languages::{language_id, LANGUAGES};
pub use validators::{int_match, string_lowercase, string_match};
