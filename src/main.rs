mod config;
mod error;
mod routes;
mod state;

use crate::config::HostConfig;
use crate::error::HostError;

#[tokio::main]
async fn main() -> Result<(), HostError> {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt::init();
    if let Err(e) = dotenv {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    let config = HostConfig::from_env()?;
    let port = config.port;
    match config.search_backend_url.as_deref() {
        Some(url) => tracing::info!(backend = url, "search backend configured"),
        None => tracing::warn!("SEARCH_BACKEND_URL not set; /api/search disabled"),
    }

    let state = state::AppState::new(config)?;
    let app = routes::app(state)?;

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| HostError::Bind { addr: addr.clone(), source })?;

    tracing::info!(%port, "pillfinder listening");
    axum::serve(listener, app).await.map_err(HostError::Serve)
}
