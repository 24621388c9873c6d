//! REST helper for loading result pages from the host.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stub returning an error, since results are only loaded
//! in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a `Result` with a display string instead of panics so a failed
//! fetch degrades to a text message in place of the result grid.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::SearchResults;

#[cfg(any(test, feature = "hydrate"))]
fn search_endpoint(query: &str) -> String {
    let query = query.strip_prefix('?').unwrap_or(query);
    if query.is_empty() {
        "/api/search".to_owned()
    } else {
        format!("/api/search?{query}")
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn search_failed_message(status: u16) -> String {
    format!("search request failed: {status}")
}

/// Fetch one page of results for the raw result-page `query` from
/// `/api/search`.
///
/// # Errors
///
/// Returns an error string if the request fails, the host responds with a
/// non-OK status, or the body is not a result page.
pub async fn fetch_results(query: String) -> Result<SearchResults, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = search_endpoint(&query);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(search_failed_message(resp.status()));
        }
        resp.json::<SearchResults>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err("not available on server".to_owned())
    }
}
