//! Modal dialog for adding one search term to a category.

use leptos::prelude::*;

use crate::state::search_terms::{SearchTermSet, TermCategory};

/// Text entry dialog for `category`.
///
/// The Add button and the Enter key both add the trimmed input to the page's
/// `SearchTermSet`, clear the input, and close the dialog. Empty or repeated
/// input is ignored by the set itself.
#[component]
pub fn TermEntryModal(category: TermCategory, on_close: Callback<()>) -> impl IntoView {
    let terms = expect_context::<RwSignal<SearchTermSet>>();
    let draft = RwSignal::new(String::new());

    let submit = Callback::new(move |()| {
        let value = draft.get_untracked();
        terms.update(|t| {
            t.add(category, &value);
        });
        draft.set(String::new());
        on_close.run(());
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            ev.prevent_default();
            submit.run(());
        }
        "Escape" => {
            ev.prevent_default();
            on_close.run(());
        }
        _ => {}
    };

    let title = format!("{} 추가", category.label());
    let placeholder = format!("{}을(를) 입력하세요", category.label());

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog term-entry" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <label class="dialog__label">
                    {category.label()}
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder=placeholder
                        prop:value=move || draft.get()
                        on:input=move |ev| draft.set(event_target_value(&ev))
                        on:keydown=on_keydown
                        autofocus=true
                    />
                </label>
                <div class="dialog__actions">
                    <button type="button" class="btn" on:click=move |_| on_close.run(())>
                        "취소"
                    </button>
                    <button type="button" class="btn btn--primary" on:click=move |_| submit.run(())>
                        "추가"
                    </button>
                </div>
            </div>
        </div>
    }
}
