//! Transient on-screen notifications.
//!
//! A standalone utility: no other controller calls it, but the page can.
//! A notice slides in from the right edge, holds for three seconds, slides
//! back out, and is removed from the document once the transition ends.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::consts::{NOTICE_REMOVE_MS, NOTICE_SLIDE_IN_MS, NOTICE_VISIBLE_MS};
use crate::dom;

/// Visual flavor of a notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NoticeKind {
    #[default]
    Info,
    Error,
}

impl NoticeKind {
    /// Accent color behind the message text.
    #[must_use]
    pub fn accent(self) -> &'static str {
        match self {
            Self::Info => "#51cf66",
            Self::Error => "#ff6b6b",
        }
    }

    /// Class-name suffix, matching the page's stylesheet hooks.
    #[must_use]
    pub fn class_suffix(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Error => "error",
        }
    }
}

/// Show a transient message in the top-right corner.
pub fn show(document: &Document, message: &str, kind: NoticeKind) {
    let Some(body) = document.body() else {
        log::warn!("notification dropped: document has no body");
        return;
    };
    let notice = match document.create_element("div") {
        Ok(element) => match element.dyn_into::<HtmlElement>() {
            Ok(notice) => notice,
            Err(_) => return,
        },
        Err(_) => {
            log::warn!("notification dropped: element creation failed");
            return;
        }
    };
    notice.set_class_name(&format!("notification notification-{}", kind.class_suffix()));
    notice.set_text_content(Some(message));
    for (property, value) in [
        ("position", "fixed"),
        ("top", "100px"),
        ("right", "20px"),
        ("background", kind.accent()),
        ("color", "white"),
        ("padding", "1rem 2rem"),
        ("border-radius", "8px"),
        ("z-index", "1000"),
        ("transform", "translateX(100%)"),
        ("transition", "transform 0.3s ease"),
    ] {
        dom::set_style(&notice, property, value);
    }
    if body.append_child(&notice).is_err() {
        log::warn!("notification dropped: could not attach to body");
        return;
    }

    // Attach off-screen, then transition in on the next tick.
    let slide_in = notice.clone();
    Timeout::new(NOTICE_SLIDE_IN_MS, move || {
        dom::set_style(&slide_in, "transform", "translateX(0)");
    })
    .forget();

    Timeout::new(NOTICE_VISIBLE_MS, move || {
        dom::set_style(&notice, "transform", "translateX(100%)");
        Timeout::new(NOTICE_REMOVE_MS, move || {
            if body.contains(Some(notice.as_ref())) && body.remove_child(&notice).is_err() {
                log::warn!("failed to remove notification");
            }
        })
        .forget();
    })
    .forget();
}
