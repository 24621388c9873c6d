//! Result-page chips for the terms already applied to the current URL.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::search_terms::{TermChip, applied_chips};
use crate::util::navigation::{navigate_to, remove_term_url};

/// Applied product-name / manufacturer / side-effect terms.
///
/// Removing one rebuilds the full parameter list without that value and
/// navigates to the resulting URL.
#[component]
pub fn AppliedTermsBar() -> impl IntoView {
    let location = use_location();
    let pathname = location.pathname;
    let search = location.search;

    let chips = move || applied_chips(&search.get());

    view! {
        <Show when=move || !chips().is_empty()>
            <div id="searchTermsContainer" class="applied-terms">
                <span class="applied-terms__title">"검색 조건"</span>
                {move || {
                    chips()
                        .into_iter()
                        .map(|chip| {
                            let TermChip { category, term } = chip;
                            let display = term.clone();
                            let on_remove = move |_| {
                                let url = remove_term_url(
                                    &pathname.get_untracked(),
                                    &search.get_untracked(),
                                    category.param(),
                                    &term,
                                );
                                navigate_to(&url);
                            };
                            view! {
                                <span class="applied-term">
                                    <span class="term-type">{category.label()}</span>
                                    {display}
                                    <button
                                        type="button"
                                        class="remove-term"
                                        data-type=category.param()
                                        title="조건 삭제"
                                        on:click=on_remove
                                    >
                                        "×"
                                    </button>
                                </span>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </Show>
    }
}
