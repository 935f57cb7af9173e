use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API returned error (HTTP {status})")]
    Response { status: u16, body: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Authentication failed")]
    Authentication,

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Response body returned alongside an error status, if any was captured
    pub fn body(&self) -> Option<&str> {
        match self {
            ApiError::Response { body, .. } if !body.is_empty() => Some(body),
            _ => None,
        }
    }
}
