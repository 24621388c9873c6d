//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the parsed host config and one pooled HTTP client for the search
//! backend, built once with the configured timeouts.

use std::sync::Arc;
use std::time::Duration;

use crate::config::HostConfig;
use crate::error::HostError;

/// Clone is required by Axum; the config is Arc-wrapped and `reqwest::Client`
/// is a cheap handle.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<HostConfig>,
    pub http: reqwest::Client,
}

impl AppState {
    /// # Errors
    ///
    /// Returns [`HostError::HttpClientBuild`] if the TLS backend cannot be
    /// initialized.
    pub fn new(config: HostConfig) -> Result<Self, HostError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(HostError::HttpClientBuild)?;
        Ok(Self { config: Arc::new(config), http })
    }
}
