//! Picking the API client out of the provider-data carrier

use crate::api::Client;
use crate::errors::{
    wrong_client, UNEXPECTED_DATA_SOURCE_CONFIGURE_TYPE, UNEXPECTED_RESOURCE_CONFIGURE_TYPE,
};
use std::sync::Arc;
use tfplug::data_source::{ConfigureDataSourceRequest, ConfigureDataSourceResponse};
use tfplug::resource::{ConfigureResourceRequest, ConfigureResourceResponse};
use tfplug::{Diagnostics, ProviderData};

fn extract_client(
    provider_data: Option<&ProviderData>,
    summary: &str,
    diagnostics: &mut Diagnostics,
) -> Option<Arc<Client>> {
    // None until the provider itself has been configured
    let data = provider_data?;

    let client = data.downcast::<Client>();
    if client.is_none() {
        diagnostics.add_error(
            summary,
            Some(wrong_client(std::any::type_name::<Client>(), data)),
        );
    }
    client
}

pub fn resource_configure(
    request: &ConfigureResourceRequest,
    response: &mut ConfigureResourceResponse,
) -> Option<Arc<Client>> {
    extract_client(
        request.provider_data.as_ref(),
        UNEXPECTED_RESOURCE_CONFIGURE_TYPE,
        &mut response.diagnostics,
    )
}

pub fn data_source_configure(
    request: &ConfigureDataSourceRequest,
    response: &mut ConfigureDataSourceResponse,
) -> Option<Arc<Client>> {
    extract_client(
        request.provider_data.as_ref(),
        UNEXPECTED_DATA_SOURCE_CONFIGURE_TYPE,
        &mut response.diagnostics,
    )
}
