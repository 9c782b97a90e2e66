//! Petal Layer Component

use leptos::prelude::*;

use crate::store::{use_page_store, PageStateStoreFields};

#[component]
pub fn PetalLayer() -> impl IntoView {
    let store = use_page_store();
    let petals = store.petals().get_untracked();

    view! {
        <div class="petal-layer" aria-hidden="true">
            {petals
                .into_iter()
                .map(|petal| view! { <span class="petal" style=petal.style()></span> })
                .collect_view()}
        </div>
    }
}
