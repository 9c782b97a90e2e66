//! Gallery Section Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::reveal::Section;
use crate::store::PageStateStoreFields;

/// Thumbnail grid; clicking a thumbnail opens it in the modal
#[component]
pub fn GallerySection() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let images = ctx.invite.with_value(|invite| invite.images.clone());

    let section_class = move || {
        if store.reveal().get().is_revealed(Section::Gallery) {
            "gallery-section reveal revealed"
        } else {
            "gallery-section reveal"
        }
    };

    view! {
        <section id=Section::Gallery.id() class=section_class>
            <h2>"Gallery"</h2>
            <div class="gallery-grid">
                <For
                    each=move || images.clone()
                    key=|image| image.id
                    children=move |image| {
                        let path = image.path.clone();
                        let alt = image.title.clone();
                        let caption = (!image.title.is_empty()).then(|| image.title.clone());
                        view! {
                            <figure class="gallery-item" on:click=move |_| ctx.open_modal(image.clone())>
                                <img src=path alt=alt loading="lazy" />
                                {caption.map(|text| view! { <figcaption>{text}</figcaption> })}
                            </figure>
                        }
                    }
                />
            </div>
        </section>
    }
}
