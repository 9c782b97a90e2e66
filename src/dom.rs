//! Browser Helpers
//!
//! Thin wrappers over `web_sys`. Missing elements come back as
//! `InviteError::ElementMissing`; callers treat that as a no-op.

use chrono::{Datelike, NaiveDateTime, Timelike};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window};

use crate::error::{InviteError, InviteResult};

pub fn window() -> InviteResult<Window> {
    web_sys::window().ok_or(InviteError::NoWindow)
}

fn document() -> InviteResult<Document> {
    window()?.document().ok_or(InviteError::NoWindow)
}

pub fn element_by_id(id: &str) -> InviteResult<Element> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| InviteError::missing(id))
}

/// Current time, ms since the epoch
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Epoch ms of a wall-clock time in the viewer's timezone
pub fn local_epoch_ms(at: &NaiveDateTime) -> f64 {
    js_sys::Date::new_with_year_month_day_hr_min_sec(
        at.year() as u32,
        at.month0() as i32,
        at.day() as i32,
        at.hour() as i32,
        at.minute() as i32,
        at.second() as i32,
    )
    .get_time()
}

/// Window scroll offset plus viewport height
pub fn scroll_bottom() -> InviteResult<f64> {
    let win = window()?;
    let scroll_y = win.scroll_y()?;
    let height = win.inner_height()?.as_f64().unwrap_or(0.0);
    Ok(scroll_y + height)
}

pub fn section_top(id: &str) -> InviteResult<f64> {
    let el = element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| InviteError::missing(id))?;
    Ok(f64::from(el.offset_top()))
}

/// Smooth-scroll so the section's top meets the viewport top
pub fn scroll_to(id: &str) -> InviteResult<()> {
    let el = element_by_id(id)?;
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    el.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

/// Toggle `overflow: hidden` on `<body>`
pub fn set_page_scroll_locked(locked: bool) -> InviteResult<()> {
    let body = document()?.body().ok_or_else(|| InviteError::missing("body"))?;
    let style = body.style();
    if locked {
        style.set_property("overflow", "hidden")?;
    } else {
        style.remove_property("overflow")?;
    }
    Ok(())
}
