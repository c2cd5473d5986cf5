//! Category filtering of project cards.
//!
//! Filter buttons have radio semantics: exactly one carries the `active`
//! class. Matching cards re-enter layout immediately and fade in a beat
//! later; non-matching cards fade out first and leave layout once the
//! transition has finished.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{Document, HtmlElement};

use crate::consts::{CARD_FADE_IN_DELAY_MS, CARD_HIDE_DELAY_MS};
use crate::dom;
use crate::error::InitError;

/// A selected filter: the `all` sentinel or one category key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProjectFilter {
    All,
    Category(String),
}

impl ProjectFilter {
    /// Parse a `data-filter` attribute value; missing reads as `all`.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None | Some("all") => Self::All,
            Some(key) => Self::Category(key.to_owned()),
        }
    }

    /// Whether a card with the given category stays visible.
    #[must_use]
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Category(key) => key == category,
        }
    }
}

/// Wire the filter buttons over the project cards.
pub fn init(document: &Document) -> Result<(), InitError> {
    let buttons = Rc::new(dom::query_all(document, ".filter-btn"));
    let cards = Rc::new(dom::query_all(document, ".project-card"));

    for button in buttons.iter() {
        let buttons = Rc::clone(&buttons);
        let cards = Rc::clone(&cards);
        let button_el = button.clone();
        dom::listen(button, "click", move |_event| {
            let selected = ProjectFilter::parse(button_el.get_attribute("data-filter").as_deref());
            for other in buttons.iter() {
                dom::remove_class(other, "active");
            }
            dom::add_class(&button_el, "active");
            for card in cards.iter() {
                transition_card(card, &selected);
            }
        });
    }
    Ok(())
}

fn transition_card(card: &HtmlElement, selected: &ProjectFilter) {
    let category = card.get_attribute("data-category").unwrap_or_default();
    if selected.matches(&category) {
        dom::set_style(card, "display", "block");
        let card = card.clone();
        Timeout::new(CARD_FADE_IN_DELAY_MS, move || {
            dom::set_style(&card, "opacity", "1");
            dom::set_style(&card, "transform", "scale(1)");
        })
        .forget();
    } else {
        dom::set_style(card, "opacity", "0");
        dom::set_style(card, "transform", "scale(0.8)");
        let card = card.clone();
        Timeout::new(CARD_HIDE_DELAY_MS, move || {
            dom::set_style(&card, "display", "none");
        })
        .forget();
    }
}
