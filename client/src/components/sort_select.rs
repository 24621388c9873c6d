//! Result ordering control.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::util::catalog::SORT_OPTIONS;
use crate::util::navigation::{navigate_to, sort_change_url};
use crate::util::query::QueryParams;

/// Sort dropdown. A change rewrites `sort`, drops `page`, and navigates.
#[component]
pub fn SortSelect() -> impl IntoView {
    let search = use_location().search;
    let current = move || {
        QueryParams::parse(&search.get())
            .get("sort")
            .unwrap_or_default()
            .to_owned()
    };

    let on_change = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        navigate_to(&sort_change_url(&search.get_untracked(), &value));
    };

    view! {
        <label class="sort-select">
            <span class="sort-select__label">"정렬"</span>
            <select id="sort-results" class="form-select" on:change=on_change>
                {SORT_OPTIONS
                    .iter()
                    .map(|option| {
                        let value = option.value;
                        view! {
                            <option value=value selected=move || current() == value>
                                {option.label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}
