//! Smooth in-page anchor navigation.
//!
//! Clicks on fragment links are intercepted; the target position is the
//! element's offset minus the current header height, so content lands below
//! the fixed header. An unresolved fragment still suppresses the default
//! jump but scrolls nowhere.

#[cfg(test)]
#[path = "anchors_test.rs"]
mod anchors_test;

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::dom;
use crate::error::InitError;

/// The fragment identifier of an in-page href, if it has a non-empty one.
#[must_use]
pub fn fragment(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() { None } else { Some(id) }
}

/// Scroll destination for a target at `target_top` under a fixed header.
#[must_use]
pub fn target_scroll_top(target_top: f64, header_height: f64) -> f64 {
    target_top - header_height
}

/// Intercept every in-page anchor for animated scrolling.
pub fn init(window: &Window, document: &Document) -> Result<(), InitError> {
    let header = dom::by_id(document, "header")?;
    for anchor in dom::query_all(document, "a[href^='#']") {
        let window = window.clone();
        let document = document.clone();
        let header = header.clone();
        let anchor_el = anchor.clone();
        dom::listen(&anchor, "click", move |event| {
            event.prevent_default();
            let Some(href) = anchor_el.get_attribute("href") else {
                return;
            };
            let Some(id) = fragment(&href) else {
                return;
            };
            let Some(target) = document.get_element_by_id(id) else {
                return;
            };
            let Some(target) = target.dyn_ref::<HtmlElement>() else {
                return;
            };
            let top = target_scroll_top(
                f64::from(target.offset_top()),
                f64::from(header.offset_height()),
            );
            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        });
    }
    Ok(())
}
