//! Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::countdown::Countdown;
use crate::gallery::ModalSelection;
use crate::media::Playback;
use crate::petals::Petal;
use crate::reveal::RevealFlags;

/// Mutable UI state of the invitation page
#[derive(Clone, Debug, Default, Store)]
pub struct PageState {
    /// Time left until the event
    pub countdown: Countdown,
    /// Decorative petals, fixed after startup
    pub petals: Vec<Petal>,
    /// Enlarged gallery image
    pub modal: ModalSelection,
    /// Background music flag
    pub playback: Playback,
    /// Scroll-triggered entrance latches
    pub reveal: RevealFlags,
}

impl PageState {
    pub fn new(petals: Vec<Petal>) -> Self {
        Self {
            petals,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type PageStore = Store<PageState>;

/// Get the page store from context
pub fn use_page_store() -> PageStore {
    expect_context::<PageStore>()
}
