//! Light/dark theme: persisted preference, document attribute, toggle icon,
//! and the shared `(theme, scrolled)` header style table.
//!
//! The preference lives under one localStorage key and mirrors into the
//! `data-theme` attribute on the document root. Persist happens before the
//! attribute write, so the stored value and the attribute agree after every
//! toggle.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use crate::consts::{SCROLL_THRESHOLD_PX, THEME_SETTLE_MS};
use crate::dom;
use crate::error::InitError;

/// localStorage key holding the preference.
pub const STORAGE_KEY: &str = "theme";

/// The two supported themes. Anything unrecognized reads as dark.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Parse a stored or attribute value; missing or invalid means dark.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    /// The other theme.
    #[must_use]
    pub fn flip(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Attribute/storage representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Toggle-control glyph: moon while dark, sun while light.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Dark => "\u{1f319}",
            Self::Light => "\u{2600}\u{fe0f}",
        }
    }
}

/// Header background for every `(theme, past scroll threshold)` pair.
///
/// This table is the single source for both the theme toggle and the scroll
/// handler.
#[must_use]
pub fn header_background(theme: Theme, past_threshold: bool) -> &'static str {
    match (theme, past_threshold) {
        (Theme::Dark, false) => "rgba(0, 0, 0, 0.8)",
        (Theme::Dark, true) => "rgba(0, 0, 0, 0.95)",
        (Theme::Light, false) => "rgba(255, 255, 255, 0.95)",
        (Theme::Light, true) => "rgba(255, 255, 255, 0.98)",
    }
}

/// Wire the theme toggle: apply the persisted preference and attach the
/// click handler.
pub fn init(window: &Window, document: &Document) -> Result<(), InitError> {
    let toggle = dom::by_id(document, "themeToggle")?;
    let root = document.document_element().ok_or(InitError::NoRootElement)?;
    let header = document
        .get_element_by_id("header")
        .and_then(|element| element.dyn_ref::<HtmlElement>().cloned());

    let theme = load(window);
    dom::set_attr(&root, "data-theme", theme.as_str());
    update_icon(&toggle, theme);
    log::info!("theme initialized: {}", theme.as_str());

    let window = window.clone();
    let toggle_for_handler = toggle.clone();
    dom::listen(&toggle, "click", move |_event| {
        let current = Theme::parse(root.get_attribute("data-theme").as_deref());
        let next = current.flip();
        persist(&window, next);
        dom::set_attr(&root, "data-theme", next.as_str());
        update_icon(&toggle_for_handler, next);
        log::info!("theme toggled: {} -> {}", current.as_str(), next.as_str());

        if let Some(header) = header.clone() {
            let window = window.clone();
            Timeout::new(THEME_SETTLE_MS, move || {
                let past = dom::scroll_y(&window) > SCROLL_THRESHOLD_PX;
                dom::set_style(&header, "background", header_background(next, past));
            })
            .forget();
        }
    });
    Ok(())
}

fn load(window: &Window) -> Theme {
    let stored = match window.local_storage() {
        Ok(Some(storage)) => match storage.get_item(STORAGE_KEY) {
            Ok(value) => value,
            Err(_) => None,
        },
        _ => None,
    };
    Theme::parse(stored.as_deref())
}

fn persist(window: &Window, theme: Theme) {
    match window.local_storage() {
        Ok(Some(storage)) => {
            if storage.set_item(STORAGE_KEY, theme.as_str()).is_err() {
                log::warn!("failed to persist theme preference");
            }
        }
        _ => log::warn!("localStorage unavailable; theme preference not persisted"),
    }
}

fn update_icon(toggle: &HtmlElement, theme: Theme) {
    if let Ok(Some(icon)) = toggle.query_selector(".theme-icon") {
        icon.set_text_content(Some(theme.icon()));
    }
}
