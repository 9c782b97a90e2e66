//! Wedding Invitation Frontend Entry Point

mod app;
mod components;
mod context;
mod countdown;
mod dom;
mod error;
mod gallery;
mod media;
mod models;
mod petals;
mod reveal;
mod store;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if console_logger::init(level).is_err() {
        web_sys::console::warn_1(&"logger already initialised".into());
    }

    mount_to_body(App);
}
