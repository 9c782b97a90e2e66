//! Event Section Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::reveal::Section;
use crate::store::PageStateStoreFields;

#[component]
pub fn EventSection() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let invite = ctx.invite.get_value();

    let section_class = move || {
        if store.reveal().get().is_revealed(Section::Event) {
            "event-section reveal revealed"
        } else {
            "event-section reveal"
        }
    };

    view! {
        <section id=Section::Event.id() class=section_class>
            <h2>"Events"</h2>
            <div class="venue-cards">
                <div class="venue-card">
                    <h3>"Wedding"</h3>
                    <p class="venue-date">{invite.venue_date}</p>
                    <p class="venue-place">{invite.venue}</p>
                </div>
                <div class="venue-card">
                    <h3>"Reception"</h3>
                    <p class="venue-date">{invite.venue2_date}</p>
                    <p class="venue-place">{invite.venue2}</p>
                </div>
            </div>
        </section>
    }
}
