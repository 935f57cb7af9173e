//! tfplug - Terraform Plugin Framework for Rust
//!
//! The framework surface provider helpers build on: presence-tracked
//! attribute values, diagnostics, attribute paths, and the validator,
//! configure and import envelopes.

// Core modules
pub mod attribute_type;
pub mod context;
pub mod error;
pub mod types;
pub mod values;

// Provider API modules
pub mod data_source;
pub mod provider;
pub mod resource;

// Helper modules
pub mod validator;

// Re-exports for convenience
pub use attribute_type::{AttributeType, ElementType};
pub use context::Context;
pub use error::{Result, TfplugError};
pub use provider::ProviderData;
pub use types::{
    AttributePath, Config, Diagnostic, DiagnosticSeverity, Diagnostics, Dynamic, DynamicValue,
    State,
};
pub use validator::{Validator, ValidatorRequest, ValidatorResponse};
pub use values::{
    BoolValue, Float64Value, FromDynamic, Int64Value, ScalarValue, SetValue, StringValue, Value,
};
