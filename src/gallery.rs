//! Gallery Modal State

use crate::models::InviteImage;

/// Image currently shown enlarged, if any. Page scrolling is locked for as
/// long as one is open.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModalSelection {
    image: Option<InviteImage>,
}

impl ModalSelection {
    pub fn open(&mut self, image: InviteImage) {
        self.image = Some(image);
    }

    pub fn close(&mut self) {
        self.image = None;
    }

    pub fn current(&self) -> Option<&InviteImage> {
        self.image.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.image.is_some()
    }

    pub fn scroll_locked(&self) -> bool {
        self.is_open()
    }
}
