//! Pill shape grid shared by the basic and advanced forms.

use leptos::prelude::*;

use crate::util::catalog::SHAPES;

/// Clickable shape tiles. At most one tile is active, the one equal to
/// `active`; clicking a tile reports its value through `on_pick`.
#[component]
pub fn ShapeGrid(active: Signal<Option<String>>, on_pick: Callback<String>) -> impl IntoView {
    view! {
        <div class="shape-grid">
            {SHAPES
                .iter()
                .map(|shape| {
                    let value = shape.value;
                    view! {
                        <button
                            type="button"
                            class="shape-item"
                            class:active=move || active.with(|a| a.as_deref() == Some(value))
                            data-shape=value
                            on:click=move |_| on_pick.run(value.to_owned())
                        >
                            <img src=shape.image alt=value/>
                            <span class="shape-item__label">{value}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
