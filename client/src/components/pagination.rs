//! Page links for the result page.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::util::navigation::{page_url, page_window};

/// Number of page links shown around the current page.
const PAGE_WINDOW: u32 = 5;

/// Page links keeping every current parameter and setting `page`.
///
/// Links are `rel="external"` so the router performs a full page load.
#[component]
pub fn Pagination(current: u32, total: u32) -> impl IntoView {
    let search = use_location().search;
    let link = move |page: u32| page_url(&search.get_untracked(), page);

    let prev = (current > 1).then(|| {
        let href = link(current - 1);
        view! { <a class="pagination__link" rel="external" href=href>"이전"</a> }
    });
    let next = (current < total).then(|| {
        let href = link(current + 1);
        view! { <a class="pagination__link" rel="external" href=href>"다음"</a> }
    });

    view! {
        <nav class="pagination">
            {prev}
            {page_window(current, total, PAGE_WINDOW)
                .map(|page| {
                    let href = link(page);
                    view! {
                        <a
                            class="pagination__link"
                            class=("pagination__link--active", move || page == current)
                            rel="external"
                            href=href
                        >
                            {page}
                        </a>
                    }
                })
                .collect_view()}
            {next}
        </nav>
    }
}
