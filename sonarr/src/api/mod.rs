//! Sonarr API boundary
//!
//! The helpers only need the field record types, the client error and a
//! client handle to pass through the provider-data carrier.

mod error;
mod field;

pub use error::ApiError;
pub use field::{FieldInput, FieldInputValue, FieldOutput, FieldValue};

use crate::config::ProviderConfig;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

const API_KEY_HEADER: &str = "X-Api-Key";

/// Sonarr API client
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemStatus {
    pub app_name: String,
    pub version: String,
}

impl Client {
    pub fn new(config: &ProviderConfig) -> Result<Self, ApiError> {
        if !config.url.starts_with("http://") && !config.url.starts_with("https://") {
            return Err(ApiError::InvalidUrl(config.url.clone()));
        }

        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(&config.api_key)
            .map_err(|_| ApiError::Parse("api key is not a valid header value".to_string()))?;
        headers.insert(API_KEY_HEADER, key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                base_url: config.url.trim_end_matches('/').to_string(),
            }),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    pub async fn system_status(&self) -> Result<SystemStatus, ApiError> {
        self.get("/api/v3/system/status").await
    }

    async fn get<T: for<'de> Deserialize<'de>>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.inner.base_url, path);
        tracing::debug!("GET request to: {}", url);

        let response = self.inner.http.get(&url).send().await?;
        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ApiError::Authentication);
        }

        let body = response.text().await?;
        if !status.is_success() {
            tracing::error!("API error response: {}", body);
            return Err(ApiError::Response {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse response: {}, body: {}", e, body);
            ApiError::Parse(e.to_string())
        })
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.inner.base_url)
            .finish_non_exhaustive()
    }
}
