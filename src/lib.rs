//! # pagefx
//!
//! WebAssembly enhancement layer for a static portfolio page. The page ships
//! fully rendered; this crate attaches to the existing document at module
//! start and wires up every interactive behavior: scroll-triggered reveals,
//! the reading-progress bar, the persisted light/dark theme, project
//! filtering, counting-up statistics, smooth anchor navigation, award
//! affordances, and the mobile menu.
//!
//! Each feature module splits into a pure, natively-testable core (state
//! machines, math, branch tables) and a thin `web-sys` bridge that owns DOM
//! lookups, listeners, and timers.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | Boot sequence; initializes every controller fail-soft |
//! | [`anchors`] | Smooth in-page anchor navigation |
//! | [`awards`] | Keyboard/click affordances for award badges |
//! | [`counters`] | Counting-up statistics display |
//! | [`filter`] | Category filtering of project cards |
//! | [`menu`] | Mobile hamburger menu and dismissal gestures |
//! | [`notify`] | Transient on-screen notifications |
//! | [`progress`] | Scroll progress bar and header translucency |
//! | [`reveal`] | Entrance animations on first visibility |
//! | [`theme`] | Light/dark preference, persistence, header style table |
//! | [`dom`] | Shared `web-sys` helpers |
//! | [`error`] | Controller initialization failures |
//! | [`consts`] | Shared timing and threshold constants |

pub mod anchors;
pub mod app;
pub mod awards;
pub mod consts;
pub mod counters;
pub mod dom;
pub mod error;
pub mod filter;
pub mod menu;
pub mod notify;
pub mod progress;
pub mod reveal;
pub mod theme;

use wasm_bindgen::prelude::wasm_bindgen;

/// Module entry point: set up diagnostics, then wire the page.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
    app::boot();
}
