//! Home page: search-term builder and the shape/color quick search.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns its `SearchTermSet`, seeded from the current URL so a user
//! coming back from a result page sees the terms they searched with. Both
//! search actions leave the page with a full navigation to `/search`.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::color_selector::ColorSwatches;
use crate::components::search_terms_panel::SearchTermsPanel;
use crate::components::shape_selector::ShapeGrid;
use crate::components::term_entry_modal::TermEntryModal;
use crate::state::filters::BasicFilters;
use crate::state::search_terms::{SearchTermSet, TermCategory};
use crate::util::navigation::{navigate_to, search_url, submit_url};

#[component]
pub fn HomePage() -> impl IntoView {
    let search = use_location().search;
    let terms = RwSignal::new(SearchTermSet::from_query(&search.get_untracked()));
    provide_context(terms);

    let open_dialog = RwSignal::new(None::<TermCategory>);
    let close_dialog = Callback::new(move |()| open_dialog.set(None));

    let on_search = move |_| {
        let params = terms.with_untracked(SearchTermSet::to_query_params);
        navigate_to(&search_url(&params));
    };
    let on_clear = move |_| {
        terms.update(|t| {
            t.clear();
        });
    };

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1>"의약품 검색"</h1>
                <a href="/advanced" class="home-page__advanced-link">"고급 검색"</a>
            </header>

            <section class="term-builder">
                <h2>"검색 조건"</h2>
                <div class="term-builder__buttons">
                    {TermCategory::ALL
                        .into_iter()
                        .map(|category| {
                            view! {
                                <button
                                    type="button"
                                    class="btn term-builder__add"
                                    data-type=category.param()
                                    on:click=move |_| open_dialog.set(Some(category))
                                >
                                    {format!("+ {}", category.label())}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <SearchTermsPanel/>

                <div class="term-builder__actions">
                    <button id="clearButton" type="button" class="btn" on:click=on_clear>
                        "초기화"
                    </button>
                    <button id="searchButton" type="button" class="btn btn--primary" on:click=on_search>
                        "검색"
                    </button>
                </div>
            </section>

            <BasicShapeSearch/>

            {move || {
                open_dialog
                    .get()
                    .map(|category| view! { <TermEntryModal category=category on_close=close_dialog/> })
            }}
        </div>
    }
}

/// Quick search by pill shape and a single color.
#[component]
fn BasicShapeSearch() -> impl IntoView {
    let filters = RwSignal::new(BasicFilters::default());

    let active_shape = Signal::derive(move || filters.with(|f| f.drug_shape.clone()));
    let active_color = Signal::derive(move || filters.with(|f| f.color_class1.clone()));
    let pick_shape = Callback::new(move |shape: String| filters.update(|f| f.select_shape(&shape)));
    let pick_color = Callback::new(move |color: String| filters.update(|f| f.select_color(&color)));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let entries = filters.with_untracked(BasicFilters::form_entries);
        navigate_to(&submit_url(entries));
    };
    let on_reset = move |_| filters.update(BasicFilters::reset);

    view! {
        <section class="shape-search">
            <h2>"모양으로 찾기"</h2>
            <form class="shape-search__form" action="/search" on:submit=on_submit>
                <label class="form-label" for="item_name">"제품명"</label>
                <input
                    id="item_name"
                    class="form-input"
                    type="text"
                    name="item_name"
                    prop:value=move || filters.with(|f| f.item_name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        filters.update(|f| f.item_name = value);
                    }
                />

                <h3>"모양"</h3>
                <ShapeGrid active=active_shape on_pick=pick_shape/>
                <input
                    id="drug_shape"
                    type="hidden"
                    name="drug_shape"
                    prop:value=move || active_shape.get().unwrap_or_default()
                />

                <h3>"색상"</h3>
                <ColorSwatches active=active_color on_pick=pick_color/>
                <input
                    id="color_class1"
                    type="hidden"
                    name="color_class1"
                    prop:value=move || active_color.get().unwrap_or_default()
                />

                <div class="shape-search__actions">
                    <button type="button" class="btn" on:click=on_reset>
                        "초기화"
                    </button>
                    <button type="submit" class="btn btn--primary">
                        "검색"
                    </button>
                </div>
            </form>
        </section>
    }
}
