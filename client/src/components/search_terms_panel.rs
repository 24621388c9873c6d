//! Selected search-term chips with per-chip removal.

use leptos::prelude::*;

use crate::state::search_terms::{SearchTermSet, TermChip};

/// Chip list for the page's `SearchTermSet`.
///
/// Hidden while every category is empty. Otherwise the whole list is rebuilt
/// from `SearchTermSet::chips` whenever the set changes.
#[component]
pub fn SearchTermsPanel() -> impl IntoView {
    let terms = expect_context::<RwSignal<SearchTermSet>>();
    let has_terms = move || !terms.with(SearchTermSet::is_empty);

    view! {
        <Show when=has_terms>
            <div id="selectedTermsContainer" class="selected-terms">
                <div id="selectedTermsList" class="selected-terms__list">
                    {move || {
                        terms
                            .with(SearchTermSet::chips)
                            .into_iter()
                            .map(|chip| view! { <SelectedTermChip chip=chip terms=terms/> })
                            .collect_view()
                    }}
                </div>
            </div>
        </Show>
    }
}

/// One chip. The remove button carries the category and exact value.
#[component]
fn SelectedTermChip(chip: TermChip, terms: RwSignal<SearchTermSet>) -> impl IntoView {
    let TermChip { category, term } = chip;
    let display = term.clone();
    let data_term = term.clone();

    let on_remove = move |_| {
        terms.update(|t| {
            t.remove(category, &term);
        });
    };

    view! {
        <div class="selected-term">
            <span class="term-type">{category.label()}</span>
            {display}
            <button
                type="button"
                class="selected-term__remove"
                data-type=category.param()
                data-term=data_term
                title="삭제"
                on:click=on_remove
            >
                "×"
            </button>
        </div>
    }
}
