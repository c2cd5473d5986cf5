//! Shared `web-sys` helpers for the controller bridges.
//!
//! Pure decision logic lives in each controller module; everything that
//! touches the document funnels through these helpers, so the `Result`s of
//! DOM setters (whose only failure mode is an exotic JS exception) are
//! absorbed with a logged diagnostic in exactly one place.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, Window,
};

use crate::error::InitError;

/// Look up a required element by id.
pub fn by_id(document: &Document, id: &'static str) -> Result<HtmlElement, InitError> {
    let Some(element) = document.get_element_by_id(id) else {
        return Err(InitError::MissingElement(id));
    };
    match element.dyn_into::<HtmlElement>() {
        Ok(element) => Ok(element),
        Err(_) => Err(InitError::MissingElement(id)),
    }
}

/// All elements matching `selector`, skipping non-HTML nodes.
#[must_use]
pub fn query_all(document: &Document, selector: &str) -> Vec<HtmlElement> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(_) => {
            log::warn!("invalid selector `{selector}`");
            return Vec::new();
        }
    };
    let mut elements = Vec::with_capacity(list.length() as usize);
    for index in 0..list.length() {
        if let Some(node) = list.get(index) {
            if let Ok(element) = node.dyn_into::<HtmlElement>() {
                elements.push(element);
            }
        }
    }
    elements
}

/// Attach an event listener for the lifetime of the page.
///
/// The closure is leaked; listeners here are installed once at boot and are
/// never detached.
pub fn listen<F>(target: &EventTarget, kind: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    if target
        .add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("failed to attach `{kind}` listener");
    }
    callback.forget();
}

/// Create a viewport-intersection watcher that calls `on_enter` with each
/// target element as it crosses into view.
pub fn intersection_observer<F>(
    threshold: f64,
    root_margin: &str,
    mut on_enter: F,
) -> Result<IntersectionObserver, InitError>
where
    F: FnMut(Element) + 'static,
{
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    options.set_root_margin(root_margin);

    let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if entry.is_intersecting() {
                on_enter(entry.target());
            }
        }
    });
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|_| InitError::Observer)?;
    callback.forget();
    Ok(observer)
}

/// Reference equality between two DOM handles.
#[must_use]
pub fn same_node(a: &Element, b: &Element) -> bool {
    let a: &JsValue = a.as_ref();
    let b: &JsValue = b.as_ref();
    a == b
}

/// Set one inline style property.
pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if element.style().set_property(property, value).is_err() {
        log::warn!("failed to set style `{property}`");
    }
}

/// Remove one inline style property.
pub fn clear_style(element: &HtmlElement, property: &str) {
    if element.style().remove_property(property).is_err() {
        log::warn!("failed to clear style `{property}`");
    }
}

/// Set an attribute.
pub fn set_attr(element: &Element, name: &str, value: &str) {
    if element.set_attribute(name, value).is_err() {
        log::warn!("failed to set attribute `{name}`");
    }
}

/// Add a presentation class.
pub fn add_class(element: &Element, class: &str) {
    if element.class_list().add_1(class).is_err() {
        log::warn!("failed to add class `{class}`");
    }
}

/// Remove a presentation class.
pub fn remove_class(element: &Element, class: &str) {
    if element.class_list().remove_1(class).is_err() {
        log::warn!("failed to remove class `{class}`");
    }
}

/// Current vertical scroll offset.
#[must_use]
pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or_default()
}

/// Current viewport height.
#[must_use]
pub fn viewport_height(window: &Window) -> f64 {
    window
        .inner_height()
        .map_or(0.0, |value| value.as_f64().unwrap_or_default())
}
