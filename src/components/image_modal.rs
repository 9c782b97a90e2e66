//! Image Modal Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::PageStateStoreFields;

/// Full-screen overlay for the selected gallery image.
///
/// Backdrop and close button dismiss it; clicks on the image itself don't.
#[component]
pub fn ImageModal() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let selected = move || store.modal().with(|modal| modal.current().cloned());

    view! {
        <Show when=move || store.modal().with(|modal| modal.is_open())>
            <div class="modal-backdrop" on:click=move |_| ctx.close_modal()>
                <button
                    class="modal-close"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        ctx.close_modal();
                    }
                >
                    "✕"
                </button>
                {move || selected().map(|image| view! {
                    <img
                        class="modal-image"
                        src=image.path
                        alt=image.title
                        on:click=|ev| ev.stop_propagation()
                    />
                })}
            </div>
        </Show>
    }
}
