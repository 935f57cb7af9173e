//! Resource request and response envelopes
//!
//! Only the envelopes resource helpers work with live here: configure and
//! import. The host owns dispatching them.

use crate::context::Context;
use crate::provider::ProviderData;
use crate::types::{Diagnostics, State};

/// Called immediately after the factory creates the resource
/// Use this to pick up the API client the provider configured
#[derive(Debug, Clone, Default)]
pub struct ConfigureResourceRequest {
    /// Data from the provider's configure step, None until it has run
    pub provider_data: Option<ProviderData>,
}

#[derive(Debug, Clone, Default)]
pub struct ConfigureResourceResponse {
    pub diagnostics: Diagnostics,
}

/// Sent during "terraform import"
#[derive(Debug, Clone)]
pub struct ImportResourceStateRequest {
    pub context: Context,
    pub type_name: String,
    pub id: String,
}

impl ImportResourceStateRequest {
    pub fn new(type_name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            context: Context::new(),
            type_name: type_name.into(),
            id: id.into(),
        }
    }
}

/// The imported state, populated by the resource's import handler
#[derive(Debug, Clone, Default)]
pub struct ImportResourceStateResponse {
    pub state: State,
    pub diagnostics: Diagnostics,
}
