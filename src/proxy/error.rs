//! Error handling for the proxy module

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProxyError {
    /// The response body was not the JSON document we expected
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The proxy answered with a non-success status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },
}

impl ProxyError {
    pub async fn from_response(response: reqwest::Response) -> ProxyError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        ProxyError::Http { status, message }
    }

    /// HTTP status carried by the error, if the proxy answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ProxyError::Http { status, .. } => Some(*status),
            ProxyError::Reqwest(e) => e.status().map(|s| s.as_u16()),
            ProxyError::Decode(_) => None,
        }
    }
}
