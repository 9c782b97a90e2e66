//! Hero Section Component

use leptos::prelude::*;

use crate::context::use_app_context;

const BACKGROUND_IMAGE: u32 = 0;
const BANNER_LANDSCAPE: u32 = 1;
const BANNER_PORTRAIT: u32 = 2;

#[component]
pub fn Hero() -> impl IntoView {
    let ctx = use_app_context();
    let title = ctx.invite.with_value(|invite| invite.title.clone());
    let background = format!("background-image: url('{}');", ctx.get_image(BACKGROUND_IMAGE));

    view! {
        <header id="home" class="hero" style=background>
            <img class="hero-banner landscape" src=ctx.get_image(BANNER_LANDSCAPE) alt="" />
            <img class="hero-banner portrait" src=ctx.get_image(BANNER_PORTRAIT) alt="" />
            <div class="hero-text">
                <p class="hero-kicker">"Together with their families"</p>
                <h1 class="hero-title">{title}</h1>
                <button class="hero-cta" on:click=move |_| ctx.scroll_to("event")>
                    "View Events"
                </button>
            </div>
        </header>
    }
}
