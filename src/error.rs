//! Host error type.
//!
//! ERROR HANDLING
//! ==============
//! Startup failures (`Config`, `Leptos`, `HttpClientBuild`, `Bind`, `Serve`)
//! abort `main`. Request failures on `/api/search` are turned into a status
//! code and a short text body through `IntoResponse`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("http client build failed: {0}")]
    HttpClientBuild(#[source] reqwest::Error),
    #[error("search backend not configured")]
    BackendNotConfigured,
    #[error("search backend request failed: {0}")]
    Upstream(#[source] reqwest::Error),
    #[error("search backend returned status {0}")]
    UpstreamStatus(u16),
    #[error("search backend returned an invalid body: {0}")]
    UpstreamParse(#[from] serde_json::Error),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

impl HostError {
    /// HTTP status reported to the browser for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BackendNotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            Self::Upstream(_) | Self::UpstreamStatus(_) | Self::UpstreamParse(_) => StatusCode::BAD_GATEWAY,
            Self::Config(_) | Self::Leptos(_) | Self::HttpClientBuild(_) | Self::Bind { .. } | Self::Serve(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for HostError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(error = %self, status = status.as_u16(), "request failed");
        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
