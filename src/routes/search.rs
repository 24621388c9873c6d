//! `/api/search` forwarding endpoint.
//!
//! The browser sends its own result-page query string; the host passes it
//! through unchanged to the search backend and only checks that the reply is
//! a well-formed result page before handing it back.

use axum::Json;
use axum::extract::{RawQuery, State};
use reqwest::header::ACCEPT;

use client::net::types::SearchResults;

use crate::error::HostError;
use crate::state::AppState;

/// Forward `query` to `<SEARCH_BACKEND_URL>/search` and return the parsed
/// result page.
///
/// # Errors
///
/// - [`HostError::BackendNotConfigured`] when no backend URL is set.
/// - [`HostError::Upstream`] / [`HostError::UpstreamStatus`] when the backend
///   is unreachable or answers with a non-success status.
/// - [`HostError::UpstreamParse`] when the body is not a result page.
pub async fn search(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<SearchResults>, HostError> {
    let base = state
        .config
        .search_backend_url
        .as_deref()
        .ok_or(HostError::BackendNotConfigured)?;
    let url = backend_search_url(base, query.as_deref());

    let resp = state
        .http
        .get(&url)
        .header(ACCEPT, "application/json")
        .send()
        .await
        .map_err(HostError::Upstream)?;
    let status = resp.status();
    if !status.is_success() {
        return Err(HostError::UpstreamStatus(status.as_u16()));
    }
    let body = resp.bytes().await.map_err(HostError::Upstream)?;
    let results = parse_results(&body)?;

    tracing::debug!(
        total = results.total_count,
        rows = results.results.len(),
        page = results.page,
        "search forwarded"
    );
    Ok(Json(results))
}

pub(crate) fn backend_search_url(base: &str, query: Option<&str>) -> String {
    match query.map(|q| q.trim_start_matches('?')).filter(|q| !q.is_empty()) {
        Some(q) => format!("{base}/search?{q}"),
        None => format!("{base}/search"),
    }
}

pub(crate) fn parse_results(body: &[u8]) -> Result<SearchResults, HostError> {
    Ok(serde_json::from_slice(body)?)
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;
