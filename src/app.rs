//! Boot sequence: resolve the browser handles once, then initialize every
//! controller in order, fail-soft.
//!
//! A controller that cannot find its required elements logs a diagnostic and
//! is skipped; the rest of the page keeps working.

use web_sys::{Document, Window};

use crate::error::InitError;
use crate::{anchors, awards, counters, filter, menu, progress, reveal, theme};

/// Wire every controller to the document.
pub fn boot() {
    let Some(window) = web_sys::window() else {
        log::error!("{}", InitError::NoWindow);
        return;
    };
    let Some(document) = window.document() else {
        log::error!("{}", InitError::NoDocument);
        return;
    };
    attach_controllers(&window, &document);
}

fn attach_controllers(window: &Window, document: &Document) {
    let outcomes: [(&str, Result<(), InitError>); 8] = [
        ("reveal", reveal::init(document)),
        ("progress", progress::init(window, document)),
        ("theme", theme::init(window, document)),
        ("filter", filter::init(document)),
        ("counters", counters::init(document)),
        ("anchors", anchors::init(window, document)),
        ("awards", awards::init(document)),
        ("menu", menu::init(window, document)),
    ];

    let total = outcomes.len();
    let mut attached = 0_usize;
    for (name, outcome) in outcomes {
        match outcome {
            Ok(()) => attached += 1,
            Err(error) => log::warn!("{name} controller skipped: {error}"),
        }
    }
    log::info!("page effects ready: {attached} of {total} controllers attached");
}
