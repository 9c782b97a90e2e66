//! Countdown Panel Component
//!
//! Owns the one-second interval that drives the countdown. The interval
//! clears itself once the event starts and is cleared on unmount otherwise.

use leptos::leptos_dom::helpers::IntervalHandle;
use leptos::prelude::*;

use crate::countdown::{CountdownTask, TICK_INTERVAL};
use crate::dom;
use crate::store::{use_page_store, PageStateStoreFields, PageStore};

fn start_countdown(store: PageStore, target_ms: i64) {
    let task = StoredValue::new(CountdownTask::new(target_ms));
    let handle = StoredValue::new(None::<IntervalHandle>);

    let update = move || {
        let now = dom::now_ms() as i64;
        if let Some(countdown) = task.try_update_value(|t| t.on_tick(now)).flatten() {
            if countdown.is_zero() {
                log::info!("countdown reached zero");
            }
            store.countdown().set(countdown);
        }
        if !task.with_value(CountdownTask::is_active) {
            if let Some(h) = handle.get_value() {
                h.clear();
                handle.set_value(None);
            }
        }
    };

    update();
    if task.with_value(CountdownTask::is_active) {
        match set_interval_with_handle(update, TICK_INTERVAL) {
            Ok(h) => handle.set_value(Some(h)),
            Err(e) => log::warn!("countdown interval not started: {:?}", e),
        }
    }

    on_cleanup(move || {
        task.update_value(CountdownTask::stop);
        if let Some(h) = handle.get_value() {
            h.clear();
        }
    });
}

#[component]
pub fn CountdownPanel(
    /// Event instant, ms since the epoch
    target_ms: f64,
) -> impl IntoView {
    let store = use_page_store();
    start_countdown(store, target_ms as i64);

    let unit = move |value: Signal<String>, label: &'static str| {
        view! {
            <div class="countdown-unit">
                <span class="countdown-value">{move || value.get()}</span>
                <span class="countdown-label">{label}</span>
            </div>
        }
    };

    view! {
        <section id="countdown" class="countdown-section">
            <h2>"Counting Down"</h2>
            <div class="countdown">
                {unit(Signal::derive(move || store.countdown().get().days), "Days")}
                {unit(Signal::derive(move || store.countdown().get().hours), "Hours")}
                {unit(Signal::derive(move || store.countdown().get().minutes), "Minutes")}
                {unit(Signal::derive(move || store.countdown().get().seconds), "Seconds")}
            </div>
        </section>
    }
}
