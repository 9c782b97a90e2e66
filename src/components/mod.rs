//! UI Components
//!
//! Sections of the invitation page.

mod nav_bar;
mod hero;
mod countdown_panel;
mod event_section;
mod gallery_section;
mod image_modal;
mod petal_layer;
mod music_toggle;
mod contact;

pub use nav_bar::NavBar;
pub use hero::Hero;
pub use countdown_panel::CountdownPanel;
pub use event_section::EventSection;
pub use gallery_section::GallerySection;
pub use image_modal::ImageModal;
pub use petal_layer::PetalLayer;
pub use music_toggle::MusicToggle;
pub use contact::{ContactSection, Footer};
