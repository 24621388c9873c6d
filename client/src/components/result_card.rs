//! One medicine card in the result grid.

use leptos::prelude::*;

use crate::net::types::MedicineSummary;
use crate::state::modal::ImageModalState;

/// Result card with thumbnail, manufacturer, shape/color badges and a
/// detail link. Clicking the thumbnail opens the page's image modal.
#[component]
pub fn ResultCard(medicine: MedicineSummary) -> impl IntoView {
    let modal = expect_context::<RwSignal<ImageModalState>>();

    let detail_path = medicine.detail_path();
    let thumbnail = match medicine.image().map(str::to_owned) {
        Some(url) => {
            let open_url = url.clone();
            let alt = medicine.item_name.clone();
            view! {
                <img
                    class="result-card__thumb"
                    src=url
                    alt=alt
                    on:click=move |_| {
                        modal.update(|m| {
                            m.open(&open_url);
                        });
                    }
                />
            }
                .into_any()
        }
        None => view! { <div class="result-card__no-image">"이미지 없음"</div> }.into_any(),
    };
    let shape_badge = medicine
        .drug_shape
        .clone()
        .map(|shape| view! { <span class="badge">{shape}</span> });
    let color_badge = medicine
        .color_class1
        .clone()
        .map(|color| view! { <span class="badge">{color}</span> });

    let matched_product = medicine.matched_product;
    let matched_manufacturer = medicine.matched_manufacturer;
    let matched_side_effect = medicine.matched_side_effect;
    let MedicineSummary { item_name, entp_name, .. } = medicine;

    view! {
        <div class="result-card">
            <div class="result-card__image">{thumbnail}</div>
            <div class="result-card__body">
                <h5 class="result-card__title" class=("result-card__title--matched", move || matched_product)>
                    {item_name}
                </h5>
                <p class="result-card__maker" class=("result-card__maker--matched", move || matched_manufacturer)>
                    {entp_name}
                </p>
                <p class="result-card__badges">
                    {shape_badge}
                    {color_badge}
                    <Show when=move || matched_side_effect>
                        <span class="badge badge--warning">"부작용 일치"</span>
                    </Show>
                </p>
                <a class="btn btn--primary result-card__detail" rel="external" href=detail_path>
                    "상세 정보"
                </a>
            </div>
        </div>
    }
}
