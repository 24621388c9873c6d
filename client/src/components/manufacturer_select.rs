//! Manufacturer free-text field with a dropdown of common manufacturers.

use leptos::prelude::*;

use crate::state::filters::AdvancedFilters;
use crate::util::catalog::MANUFACTURERS;

/// `entp_name` input kept in sync with the manufacturer dropdown.
///
/// Picking a real option copies it into the text field; the placeholder
/// option leaves whatever was typed.
#[component]
pub fn ManufacturerField(filters: RwSignal<AdvancedFilters>) -> impl IntoView {
    let choice = move || filters.with(|f| f.entp_choice.clone());

    view! {
        <div class="manufacturer-field">
            <label class="form-label" for="entp_name">"제조사"</label>
            <div class="manufacturer-field__row">
                <input
                    id="entp_name"
                    class="form-input"
                    type="text"
                    name="entp_name"
                    placeholder="제조사명"
                    prop:value=move || filters.with(|f| f.entp_name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        filters.update(|f| f.entp_name = value);
                    }
                />
                <select
                    id="entp_name_select"
                    class="form-select"
                    prop:value=choice
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        filters.update(|f| f.choose_manufacturer(&value));
                    }
                >
                    <option value="" selected=move || choice().is_empty()>
                        "직접 입력"
                    </option>
                    {MANUFACTURERS
                        .iter()
                        .map(|name| {
                            let name = *name;
                            view! {
                                <option value=name selected=move || choice() == name>
                                    {name}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
        </div>
    }
}
