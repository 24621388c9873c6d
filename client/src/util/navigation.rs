//! URL builders for search navigation and the browser navigation hook.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every user action that changes search results performs a full page
//! navigation to a freshly built URL, never a partial update. The builders
//! are pure so they can be tested without a browser; `navigate_to` is the
//! only hydrate-gated piece.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use std::ops::RangeInclusive;

use crate::util::query::QueryParams;

/// Path of the server-rendered result page.
pub const SEARCH_PATH: &str = "/search";

/// Join `path` and `params`, omitting the `?` when there are no params.
pub fn with_query(path: &str, params: &QueryParams) -> String {
    if params.is_empty() {
        path.to_owned()
    } else {
        format!("{path}?{params}")
    }
}

/// Result page URL for `params`.
pub fn search_url(params: &QueryParams) -> String {
    with_query(SEARCH_PATH, params)
}

/// Result page URL for a submitted form, with blank entries stripped.
pub fn submit_url(mut entries: QueryParams) -> String {
    entries.retain_non_empty();
    search_url(&entries)
}

/// Result page URL after the sort control changes: `sort` is set and the
/// pagination cursor is dropped so the listing restarts at page one.
pub fn sort_change_url(current_query: &str, sort: &str) -> String {
    let mut params = QueryParams::parse(current_query);
    params.set("sort", sort);
    params.delete("page");
    search_url(&params)
}

/// Result page URL for page `page`, keeping every other parameter.
pub fn page_url(current_query: &str, page: u32) -> String {
    let mut params = QueryParams::parse(current_query);
    params.set("page", page.to_string());
    search_url(&params)
}

/// URL of the current page with one applied value removed.
pub fn remove_term_url(pathname: &str, current_query: &str, key: &str, term: &str) -> String {
    let mut params = QueryParams::parse(current_query);
    params.remove_value(key, term);
    with_query(pathname, &params)
}

/// Page numbers to link around `current`, at most `width` wide and clamped
/// to `1..=total`. Empty when there is at most one page.
pub fn page_window(current: u32, total: u32, width: u32) -> RangeInclusive<u32> {
    if total <= 1 || width == 0 {
        return RangeInclusive::new(1, 0);
    }
    let current = current.clamp(1, total);
    let width = width.min(total);
    let start = current
        .saturating_sub(width / 2)
        .max(1)
        .min(total - width + 1);
    start..=start + width - 1
}

/// Navigate the browser to `url` with a full page load.
pub fn navigate_to(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        log::debug!("navigating to {url}");
        if let Err(e) = window.location().set_href(url) {
            leptos::logging::warn!("navigation to {url} failed: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}
