//! Search result page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Results are loaded in the browser from `/api/search` with the page's own
//! query string. Applied terms, sort order and pagination all rewrite the URL
//! and reload the page; nothing is patched in place.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::applied_terms_bar::AppliedTermsBar;
use crate::components::image_modal::ImageModal;
use crate::components::pagination::Pagination;
use crate::components::result_card::ResultCard;
use crate::components::sort_select::SortSelect;
use crate::net::types::SearchResults;
use crate::state::modal::ImageModalState;

#[component]
pub fn SearchResultsPage() -> impl IntoView {
    let search = use_location().search;
    let modal = RwSignal::new(ImageModalState::default());
    provide_context(modal);

    let results = LocalResource::new(move || crate::net::api::fetch_results(search.get()));

    view! {
        <div class="results-page">
            <header class="results-page__header">
                <a href="/" rel="external" class="results-page__home">"새 검색"</a>
                <SortSelect/>
            </header>

            <AppliedTermsBar/>

            <Suspense fallback=move || {
                view! { <p id="loading-indicator" class="results-page__loading">"검색 중..."</p> }
            }>
                {move || {
                    results
                        .get()
                        .map(|outcome| match outcome {
                            Ok(page) => view! { <ResultsGrid page=page/> }.into_any(),
                            Err(e) => {
                                leptos::logging::warn!("result fetch failed: {e}");
                                view! {
                                    <p class="results-page__error">"검색 결과를 불러오지 못했습니다."</p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>

            <ImageModal/>
        </div>
    }
}

#[component]
fn ResultsGrid(page: SearchResults) -> impl IntoView {
    let count_label = format!("검색 결과 {}건", page.total_count);
    let current = page.page;
    let total = page.total_pages;
    let has_pagination = page.has_pagination();
    let rows = page.results;

    let body = if rows.is_empty() {
        view! { <p class="results-page__empty">"검색 결과가 없습니다."</p> }.into_any()
    } else {
        view! {
            <div id="results-container" class="results-page__grid">
                {rows
                    .into_iter()
                    .map(|medicine| view! { <ResultCard medicine=medicine/> })
                    .collect_view()}
            </div>
        }
            .into_any()
    };

    view! {
        <p class="results-page__count">{count_label}</p>
        {body}
        <Show when=move || has_pagination>
            <Pagination current=current total=total/>
        </Show>
    }
}
