//! Reading-progress bar and header translucency, driven by scroll position.
//!
//! Scroll handling is animation-frame-gated: an in-flight flag suppresses
//! scheduling until the previous frame's computation has run, so at most one
//! update is pending at any time.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::consts::SCROLL_THRESHOLD_PX;
use crate::dom;
use crate::error::InitError;
use crate::theme::{self, Theme};

/// Percentage of the scrollable range that has been scrolled, clamped to
/// `0..=100`. A non-scrollable page reads as 0.
#[must_use]
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let range = scroll_height - viewport_height;
    if range <= 0.0 {
        return 0.0;
    }
    (scroll_y / range * 100.0).clamp(0.0, 100.0)
}

/// Wire the scroll listener driving the progress bar and header styling.
pub fn init(window: &Window, document: &Document) -> Result<(), InitError> {
    let progress_bar = dom::by_id(document, "progressBar")?;
    let header = dom::by_id(document, "header")?;
    let root = document.document_element().ok_or(InitError::NoRootElement)?;
    let body = document.body().ok_or(InitError::NoBody)?;

    let ticking = Rc::new(Cell::new(false));
    let frame: Rc<Closure<dyn FnMut()>> = Rc::new(Closure::new({
        let window = window.clone();
        let ticking = Rc::clone(&ticking);
        move || {
            update(&window, &root, &body, &progress_bar, &header);
            ticking.set(false);
        }
    }));

    let window = window.clone();
    let window_for_handler = window.clone();
    dom::listen(&window, "scroll", move |_event| {
        if ticking.get() {
            return;
        }
        ticking.set(true);
        let callback: &js_sys::Function = frame.as_ref().as_ref().unchecked_ref();
        if window_for_handler.request_animation_frame(callback).is_err() {
            ticking.set(false);
        }
    });
    Ok(())
}

fn update(
    window: &Window,
    root: &Element,
    body: &HtmlElement,
    progress_bar: &HtmlElement,
    header: &HtmlElement,
) {
    let scroll_y = dom::scroll_y(window);
    let percent = scroll_progress(
        scroll_y,
        f64::from(body.scroll_height()),
        dom::viewport_height(window),
    );
    dom::set_style(progress_bar, "width", &format!("{percent}%"));

    let current = Theme::parse(root.get_attribute("data-theme").as_deref());
    let past = scroll_y > SCROLL_THRESHOLD_PX;
    dom::set_style(header, "background", theme::header_background(current, past));
    if past {
        dom::add_class(header, "scrolled");
    } else {
        dom::remove_class(header, "scrolled");
    }
}
