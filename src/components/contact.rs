//! Contact and Footer Components

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn ContactSection() -> impl IntoView {
    let ctx = use_app_context();
    let (contact, href) = ctx
        .invite
        .with_value(|invite| (invite.contact.clone(), invite.contact_href()));

    view! {
        <section id="contact" class="contact-section">
            <h2>"Contact"</h2>
            <a class="contact-link" href=href>{contact}</a>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_app_context();
    let title = ctx.invite.with_value(|invite| invite.title.clone());

    view! {
        <footer class="footer">
            <p>{title}</p>
            <p class="footer-note">"We look forward to celebrating with you."</p>
        </footer>
    }
}
