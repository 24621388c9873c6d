//! Full-size image overlay for result thumbnails.

use leptos::prelude::*;

use crate::state::modal::ImageModalState;

/// Overlay showing the page's `ImageModalState` image.
///
/// Closed by the close button, a backdrop click, or Escape.
#[component]
pub fn ImageModal() -> impl IntoView {
    let modal = expect_context::<RwSignal<ImageModalState>>();

    let close = move || modal.update(ImageModalState::close);
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            close();
        }
    };
    let image_url = move || modal.with(|m| m.image_url.clone().unwrap_or_default());

    view! {
        <Show when=move || modal.with(ImageModalState::is_open)>
            <div id="imageModal" class="image-modal" on:click=move |_| close() on:keydown=on_keydown tabindex="0">
                <div class="image-modal__body" on:click=move |ev| ev.stop_propagation()>
                    <button
                        type="button"
                        class="image-modal__close"
                        title="닫기"
                        on:click=move |_| close()
                        autofocus=true
                    >
                        "✕"
                    </button>
                    <img id="modalImage" class="image-modal__image" src=image_url alt="의약품 이미지"/>
                </div>
            </div>
        </Show>
    }
}
