//! Music Toggle Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::PageStateStoreFields;

/// Floating play/pause button plus the looping `<audio>` element it controls
#[component]
pub fn MusicToggle() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let src = ctx.invite.with_value(|invite| invite.music.clone());

    view! {
        <audio node_ref=ctx.audio src=src prop:loop=true preload="auto"></audio>
        <button
            class=move || if store.playback().get().is_playing() { "music-toggle playing" } else { "music-toggle" }
            title=move || store.playback().get().label()
            on:click=move |_| ctx.toggle_music()
        >
            {move || if store.playback().get().is_playing() { "❚❚" } else { "♪" }}
        </button>
    }
}
