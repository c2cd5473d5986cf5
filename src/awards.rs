//! Keyboard and click affordances for clickable award badges.
//!
//! Awards become focusable buttons: Enter and Space activate them exactly
//! like a pointer click, and activation answers with a brief opacity pulse.

#[cfg(test)]
#[path = "awards_test.rs"]
mod awards_test;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::Document;

use crate::consts::{OPEN_LINK_DELAY_MS, PULSE_RESTORE_MS};
use crate::dom;
use crate::error::InitError;

/// Whether a key activates a button-like control.
#[must_use]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

/// Make every clickable award focusable and wire its activation handlers.
pub fn init(document: &Document) -> Result<(), InitError> {
    for award in dom::query_all(document, ".clickable-award") {
        dom::set_attr(&award, "tabindex", "0");
        dom::set_attr(&award, "role", "button");

        {
            let award = award.clone();
            dom::listen(&award.clone(), "keydown", move |event| {
                let Some(key_event) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
                    return;
                };
                if is_activation_key(&key_event.key()) {
                    event.prevent_default();
                    award.click();
                }
            });
        }

        let pulsed = award.clone();
        dom::listen(&award, "click", move |_event| {
            dom::set_style(&pulsed, "opacity", "0.7");
            let restored = pulsed.clone();
            Timeout::new(PULSE_RESTORE_MS, move || {
                dom::set_style(&restored, "opacity", "1");
            })
            .forget();
        });
    }
    Ok(())
}

/// Open an award or certification link in a new browsing context.
///
/// Exported to the page so award markup can invoke it directly. The short
/// delay lets the activation pulse render before the context switch; the
/// new context gets neither an opener nor a referrer.
#[wasm_bindgen]
pub fn open_award(url: String) {
    Timeout::new(OPEN_LINK_DELAY_MS, move || {
        let Some(window) = web_sys::window() else {
            return;
        };
        if window
            .open_with_url_and_target_and_features(&url, "_blank", "noopener,noreferrer")
            .is_err()
        {
            log::warn!("failed to open award link");
        }
    })
    .forget();
}
