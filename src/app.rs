//! Wedding Invitation App
//!
//! Loads the bundled invitation, wires page-level listeners and lays out the
//! sections.

use leptos::ev;
use leptos::html::Audio;
use leptos::prelude::*;

use crate::components::{
    ContactSection, CountdownPanel, EventSection, Footer, GallerySection, Hero, ImageModal, MusicToggle, NavBar,
    PetalLayer,
};
use crate::context::AppContext;
use crate::dom;
use crate::models::InviteData;
use crate::petals::{self, PETAL_COUNT};
use crate::store::{PageState, PageStateStoreFields, PageStore};

#[component]
pub fn App() -> impl IntoView {
    match InviteData::bundled() {
        Ok(invite) => view! { <InvitePage invite=invite /> }.into_any(),
        Err(e) => {
            log::error!("invitation data rejected: {}", e);
            view! { <p class="invite-error">"This invitation could not be loaded."</p> }.into_any()
        }
    }
}

/// Latch reveal flags for sections the viewport has reached
fn on_scroll(store: PageStore) {
    let Ok(scroll_bottom) = dom::scroll_bottom() else {
        return;
    };
    let mut flags = store.reveal().get_untracked();
    let revealed = flags.observe(scroll_bottom, |section| dom::section_top(section.id()).ok());
    if !revealed.is_empty() {
        log::debug!("revealed {:?}", revealed);
        store.reveal().set(flags);
    }
}

#[component]
fn InvitePage(invite: InviteData) -> impl IntoView {
    let target_ms = match invite.event_at() {
        Ok(at) => dom::local_epoch_ms(&at),
        Err(e) => {
            log::warn!("{}", e);
            0.0
        }
    };

    let store = PageStore::new(PageState::new(petals::generate(PETAL_COUNT, js_sys::Math::random)));
    let audio = NodeRef::<Audio>::new();
    let ctx = AppContext::new(invite, store, audio);
    provide_context(store);
    provide_context(ctx);

    let scroll = window_event_listener(ev::scroll, move |_| on_scroll(store));
    let keydown = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && store.modal().with_untracked(|modal| modal.is_open()) {
            ctx.close_modal();
        }
    });
    on_cleanup(move || {
        scroll.remove();
        keydown.remove();
    });

    log::info!("invitation mounted");

    view! {
        <div class="invite-page">
            <PetalLayer />
            <NavBar />
            <Hero />
            <CountdownPanel target_ms=target_ms />
            <EventSection />
            <GallerySection />
            <ContactSection />
            <Footer />
            <ImageModal />
            <MusicToggle />
        </div>
    }
}
