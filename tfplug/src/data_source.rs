//! DataSource request and response envelopes

use crate::provider::ProviderData;
use crate::types::Diagnostics;

/// Called immediately after the factory creates the data source
#[derive(Debug, Clone, Default)]
pub struct ConfigureDataSourceRequest {
    pub provider_data: Option<ProviderData>,
}

#[derive(Debug, Clone, Default)]
pub struct ConfigureDataSourceResponse {
    pub diagnostics: Diagnostics,
}
