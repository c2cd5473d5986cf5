//! Entrance animations: elements get their animation class and a staggered
//! transition delay at boot, then a `visible` class on first intersection.
//!
//! The transition is one-way and idempotent: once revealed, an element is
//! never un-revealed, so nothing unobserves on exit.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use web_sys::Document;

use crate::consts::{EXPERIENCE_STAGGER_MS, OBSERVER_BOTTOM_MARGIN, REVEAL_STAGGER_MS, REVEAL_THRESHOLD};
use crate::dom;
use crate::error::InitError;

/// One group of elements sharing an entrance animation.
#[derive(Debug)]
pub struct RevealGroup {
    /// Selector collecting the group's elements.
    pub selector: &'static str,
    /// Animation class applied at boot.
    pub animation_class: &'static str,
    /// Per-index transition-delay step.
    pub stagger_step_ms: u32,
}

/// The four disjoint reveal groups.
pub const REVEAL_GROUPS: &[RevealGroup] = &[
    RevealGroup {
        selector: "section > .container > *",
        animation_class: "fade-in",
        stagger_step_ms: REVEAL_STAGGER_MS,
    },
    RevealGroup {
        selector: ".project-card",
        animation_class: "scale-in",
        stagger_step_ms: REVEAL_STAGGER_MS,
    },
    RevealGroup {
        selector: ".experience-card",
        animation_class: "slide-in-left",
        stagger_step_ms: EXPERIENCE_STAGGER_MS,
    },
    RevealGroup {
        selector: ".award-card",
        animation_class: "fade-in",
        stagger_step_ms: REVEAL_STAGGER_MS,
    },
];

/// CSS transition-delay value for the element at `index` within its group.
#[must_use]
pub fn transition_delay(index: usize, step_ms: u32) -> String {
    let delay = u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(step_ms);
    format!("{delay}ms")
}

/// Register every reveal group with a shared intersection watcher.
pub fn init(document: &Document) -> Result<(), InitError> {
    let observer = dom::intersection_observer(REVEAL_THRESHOLD, OBSERVER_BOTTOM_MARGIN, |element| {
        dom::add_class(&element, "visible");
    })?;

    for group in REVEAL_GROUPS {
        for (index, element) in dom::query_all(document, group.selector).iter().enumerate() {
            dom::add_class(element, group.animation_class);
            dom::set_style(
                element,
                "transition-delay",
                &transition_delay(index, group.stagger_step_ms),
            );
            observer.observe(element);
        }
    }
    Ok(())
}
