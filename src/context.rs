//! Application Context
//!
//! Invitation data, page store and the audio element, provided via Leptos
//! Context API together with the page actions that touch the browser.

use leptos::html::Audio;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;

use crate::dom;
use crate::media::PlaybackCommand;
use crate::models::{ImageKey, InviteData, InviteImage};
use crate::store::{PageStateStoreFields, PageStore};

#[derive(Clone, Copy)]
pub struct AppContext {
    /// Static invitation record
    pub invite: StoredValue<InviteData>,
    /// Page UI state
    pub store: PageStore,
    /// Background music element
    pub audio: NodeRef<Audio>,
}

impl AppContext {
    pub fn new(invite: InviteData, store: PageStore, audio: NodeRef<Audio>) -> Self {
        Self {
            invite: StoredValue::new(invite),
            store,
            audio,
        }
    }

    /// Image path by id, "" when unknown
    pub fn get_image(&self, id: impl Into<ImageKey>) -> String {
        let key = id.into();
        self.invite.with_value(|invite| invite.get_image(key).to_string())
    }

    pub fn open_modal(&self, image: InviteImage) {
        log::debug!("opening image {}", image.id);
        self.store.modal().write().open(image);
        self.sync_scroll_lock();
    }

    pub fn close_modal(&self) {
        self.store.modal().write().close();
        self.sync_scroll_lock();
    }

    fn sync_scroll_lock(&self) {
        let locked = self.store.modal().with_untracked(|modal| modal.scroll_locked());
        if let Err(e) = dom::set_page_scroll_locked(locked) {
            log::debug!("scroll lock not applied: {}", e);
        }
    }

    /// Flip the playback flag and send play/pause to the audio element.
    /// A rejected play request is swallowed; the flag is left as flipped.
    pub fn toggle_music(&self) {
        let Some(audio) = self.audio.get_untracked() else {
            log::debug!("music toggle ignored: no audio element");
            return;
        };

        let command = self.store.playback().write().toggle();
        match command {
            PlaybackCommand::Play => match audio.play() {
                Ok(promise) => spawn_local(async move {
                    if let Err(e) = JsFuture::from(promise).await {
                        log::debug!("play rejected: {:?}", e);
                    }
                }),
                Err(e) => log::debug!("play failed: {:?}", e),
            },
            PlaybackCommand::Pause => {
                if let Err(e) = audio.pause() {
                    log::debug!("pause failed: {:?}", e);
                }
            }
        }
    }

    pub fn scroll_to(&self, section_id: &str) {
        if let Err(e) = dom::scroll_to(section_id) {
            log::debug!("scroll to #{} skipped: {}", section_id, e);
        }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
