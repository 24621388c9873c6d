//! Color pickers: single-choice swatches for the basic form and repeated
//! checkboxes for the advanced form.

use leptos::prelude::*;

use crate::state::filters::AdvancedFilters;
use crate::util::catalog::COLORS;

/// Single-choice swatches writing `color_class1`.
#[component]
pub fn ColorSwatches(active: Signal<Option<String>>, on_pick: Callback<String>) -> impl IntoView {
    view! {
        <div class="color-grid">
            {COLORS
                .iter()
                .map(|color| {
                    let value = color.value;
                    view! {
                        <button
                            type="button"
                            class="color-item"
                            class:active=move || active.with(|a| a.as_deref() == Some(value))
                            data-color=value
                            title=value
                            on:click=move |_| on_pick.run(value.to_owned())
                        >
                            <span class="color-item__swatch" style:background=color.swatch></span>
                            <span class="color-item__label">{value}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Repeated `color` checkboxes, checked state held in `filters.colors`.
#[component]
pub fn ColorCheckboxes(filters: RwSignal<AdvancedFilters>) -> impl IntoView {
    view! {
        <div class="color-grid color-grid--checkboxes">
            {COLORS
                .iter()
                .map(|color| {
                    let value = color.value;
                    view! {
                        <label class="color-option">
                            <input
                                type="checkbox"
                                class="color-checkbox"
                                name="color"
                                value=value
                                prop:checked=move || filters.with(|f| f.is_color_checked(value))
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    filters.update(|f| f.toggle_color(value, checked));
                                }
                            />
                            <span class="color-option__swatch" style:background=color.swatch></span>
                            <span class="color-option__label">{value}</span>
                        </label>
                    }
                })
                .collect_view()}
        </div>
    }
}
