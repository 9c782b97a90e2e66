//! Navigation Bar Component

use leptos::prelude::*;

use crate::context::use_app_context;

/// (section id, label) in page order
pub const NAV_SECTIONS: [(&str, &str); 5] = [
    ("home", "Home"),
    ("countdown", "Countdown"),
    ("event", "Events"),
    ("gallery", "Gallery"),
    ("contact", "Contact"),
];

/// Sticky top bar with one smooth-scroll button per section
#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <nav class="nav-bar">
            {NAV_SECTIONS
                .iter()
                .map(|&(id, label)| {
                    view! {
                        <button class="nav-link" on:click=move |_| ctx.scroll_to(id)>
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
