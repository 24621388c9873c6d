//! Advanced search page: product, manufacturer, shape, colors and imprint.
//!
//! The form is prefilled from the current URL and submits by rebuilding the
//! query string with only the non-empty entries.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::color_selector::ColorCheckboxes;
use crate::components::manufacturer_select::ManufacturerField;
use crate::components::shape_selector::ShapeGrid;
use crate::state::filters::AdvancedFilters;
use crate::util::navigation::{navigate_to, submit_url};

#[component]
pub fn AdvancedSearchPage() -> impl IntoView {
    let search = use_location().search;
    let filters = RwSignal::new(AdvancedFilters::from_query(&search.get_untracked()));

    let pending_shape = Signal::derive(move || filters.with(|f| f.pending_shape.clone()));
    let pick_shape = Callback::new(move |shape: String| filters.update(|f| f.pick_shape(&shape)));
    let on_confirm_shape = move |_| {
        filters.update(|f| {
            f.confirm_shape();
        });
    };
    let preview_image = move || filters.with(AdvancedFilters::preview_image);
    let preview_alt = move || filters.with(|f| f.drug_shape.clone().unwrap_or_else(|| "원형".to_owned()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let entries = filters.with_untracked(AdvancedFilters::form_entries);
        navigate_to(&submit_url(entries));
    };
    let on_reset = move |_| filters.update(AdvancedFilters::reset);

    view! {
        <div class="advanced-page">
            <header class="advanced-page__header">
                <h1>"고급 검색"</h1>
                <a href="/" class="advanced-page__home-link">"기본 검색"</a>
            </header>

            <form id="advancedSearchForm" class="advanced-form" action="/search" on:submit=on_submit>
                <TextField filters=filters id="item_name" label="제품명" field=TextFieldKind::ItemName/>
                <ManufacturerField filters=filters/>

                <fieldset class="advanced-form__shape">
                    <legend>"모양"</legend>
                    <div class="advanced-form__shape-preview">
                        <img id="selectedShapeImg" src=preview_image alt=preview_alt/>
                        <input
                            id="drug_shape"
                            type="hidden"
                            name="drug_shape"
                            prop:value=move || filters.with(|f| f.drug_shape.clone().unwrap_or_default())
                        />
                    </div>
                    <ShapeGrid active=pending_shape on_pick=pick_shape/>
                    <button id="selectShapeBtn" type="button" class="btn" on:click=on_confirm_shape>
                        "모양 선택"
                    </button>
                </fieldset>

                <fieldset class="advanced-form__colors">
                    <legend>"색상"</legend>
                    <ColorCheckboxes filters=filters/>
                </fieldset>

                <TextField filters=filters id="print_front" label="앞면 각인" field=TextFieldKind::PrintFront/>
                <TextField filters=filters id="print_back" label="뒷면 각인" field=TextFieldKind::PrintBack/>

                <div class="advanced-form__actions">
                    <button type="button" class="btn" on:click=on_reset>
                        "초기화"
                    </button>
                    <button type="submit" class="btn btn--primary">
                        "검색"
                    </button>
                </div>
            </form>
        </div>
    }
}

/// Plain text fields of the advanced form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TextFieldKind {
    ItemName,
    PrintFront,
    PrintBack,
}

impl TextFieldKind {
    fn slot(self, filters: &mut AdvancedFilters) -> &mut String {
        match self {
            Self::ItemName => &mut filters.item_name,
            Self::PrintFront => &mut filters.print_front,
            Self::PrintBack => &mut filters.print_back,
        }
    }

    fn value(self, filters: &AdvancedFilters) -> String {
        match self {
            Self::ItemName => filters.item_name.clone(),
            Self::PrintFront => filters.print_front.clone(),
            Self::PrintBack => filters.print_back.clone(),
        }
    }
}

#[component]
fn TextField(
    filters: RwSignal<AdvancedFilters>,
    id: &'static str,
    label: &'static str,
    field: TextFieldKind,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label class="form-label" for=id>{label}</label>
            <input
                id=id
                class="form-input"
                type="text"
                name=id
                prop:value=move || filters.with(|f| field.value(f))
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    filters.update(|f| *field.slot(f) = value);
                }
            />
        </div>
    }
}
