//! Mobile hamburger menu: open/close state machine, dismissal gestures, and
//! the scroll lock held while the menu is open.
//!
//! `MenuCore` is the single writer of the open flag. The bridge feeds it
//! typed events (hamburger click, link click, outside press, orientation
//! change, Escape, classified swipe) and mirrors the returned effect into the
//! `active` classes on the nav container and hamburger plus the body scroll
//! lock. Touch coordinates accumulate in a `TouchTrack`; the gesture is
//! classified from end-minus-start deltas on release.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, KeyboardEvent, Node, TouchEvent, Window};

use crate::consts::{
    LINK_BIND_DELAY_MS, ORIENTATION_SETTLE_MS, SWIPE_RIGHT_MAX_DRIFT_PX, SWIPE_RIGHT_MIN_PX,
    SWIPE_UP_MAX_DRIFT_PX, SWIPE_UP_MIN_PX,
};
use crate::dom;
use crate::error::InitError;

/// A touch gesture classified from end-minus-start deltas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// At least 50px toward the top of the screen, under 100px of drift.
    Up,
    /// At least 100px to the right, under 50px of drift.
    Right,
    /// Anything else; never dismisses the menu.
    Other,
}

impl Swipe {
    /// Classify a finished gesture. `dx` and `dy` are end minus start, in
    /// screen coordinates (y grows downward).
    #[must_use]
    pub fn classify(dx: f64, dy: f64) -> Self {
        if -dy >= SWIPE_UP_MIN_PX && dx.abs() < SWIPE_UP_MAX_DRIFT_PX {
            Self::Up
        } else if dx >= SWIPE_RIGHT_MIN_PX && dy.abs() < SWIPE_RIGHT_MAX_DRIFT_PX {
            Self::Right
        } else {
            Self::Other
        }
    }

    /// Whether this gesture dismisses an open menu.
    #[must_use]
    pub fn dismisses(self) -> bool {
        matches!(self, Self::Up | Self::Right)
    }
}

/// Coordinates accumulated over one touch gesture.
#[derive(Debug, Clone, Copy)]
pub struct TouchTrack {
    start_x: f64,
    start_y: f64,
    current_x: f64,
    current_y: f64,
}

impl TouchTrack {
    /// Begin tracking at the first contact point.
    #[must_use]
    pub fn begin(x: f64, y: f64) -> Self {
        Self { start_x: x, start_y: y, current_x: x, current_y: y }
    }

    /// Record the latest contact point.
    pub fn update(&mut self, x: f64, y: f64) {
        self.current_x = x;
        self.current_y = y;
    }

    /// Classify the finished gesture.
    #[must_use]
    pub fn finish(self) -> Swipe {
        Swipe::classify(self.current_x - self.start_x, self.current_y - self.start_y)
    }
}

/// One interaction reported by the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// The hamburger control was activated.
    ToggleRequested,
    /// A nav or social link inside the menu was activated.
    LinkActivated,
    /// A press landed somewhere on the page; the flags say where.
    PressedAt {
        /// The press landed on (or inside) the hamburger control.
        on_hamburger: bool,
        /// The press landed inside the menu.
        in_menu: bool,
    },
    /// The device orientation changed (settle delay already elapsed).
    OrientationChanged,
    /// The Escape key was pressed.
    EscapePressed,
    /// A touch gesture finished.
    SwipeEnded(Swipe),
}

/// What the bridge must mirror into the document after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEffect {
    /// Add the `active` classes and lock body scrolling.
    Open,
    /// Remove the `active` classes and release the scroll lock.
    Close,
    /// Close, then return keyboard focus to the hamburger.
    CloseAndRefocus,
    /// Nothing changed.
    None,
}

/// Open/closed state for the mobile menu.
#[derive(Debug, Clone, Copy, Default)]
pub struct MenuCore {
    open: bool,
}

impl MenuCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Advance the state machine and report what the document should do.
    pub fn apply(&mut self, event: MenuEvent) -> MenuEffect {
        match event {
            MenuEvent::ToggleRequested => {
                self.open = !self.open;
                if self.open { MenuEffect::Open } else { MenuEffect::Close }
            }
            MenuEvent::LinkActivated | MenuEvent::OrientationChanged => self.close(),
            MenuEvent::PressedAt { on_hamburger, in_menu } => {
                if on_hamburger || in_menu {
                    MenuEffect::None
                } else {
                    self.close()
                }
            }
            MenuEvent::EscapePressed => {
                if self.open {
                    self.open = false;
                    MenuEffect::CloseAndRefocus
                } else {
                    MenuEffect::None
                }
            }
            MenuEvent::SwipeEnded(swipe) => {
                if swipe.dismisses() { self.close() } else { MenuEffect::None }
            }
        }
    }

    fn close(&mut self) -> MenuEffect {
        if self.open {
            self.open = false;
            MenuEffect::Close
        } else {
            MenuEffect::None
        }
    }
}

/// Social/profile links shown inside the menu on mobile layouts.
const SOCIAL_LINKS_HTML: &str = r#"
<div class="mobile-social-links">
    <a href="https://www.linkedin.com/in/jdoe-dev/" target="_blank" aria-label="LinkedIn" title="LinkedIn Profile">
        <i class="fab fa-linkedin"></i>
    </a>
    <a href="https://github.com/jdoe-dev" target="_blank" aria-label="GitHub" title="GitHub Profile">
        <i class="fab fa-github"></i>
    </a>
    <a href="https://leetcode.com/jdoe-dev/" target="_blank" aria-label="LeetCode" title="LeetCode Profile" class="mobile-leetcode">
        <img src="assets/icons/leet-code.svg" alt="LeetCode" class="mobile-platform-icon">
    </a>
    <a href="https://auth.geeksforgeeks.org/user/jdoe-dev/" target="_blank" aria-label="GeeksforGeeks" title="GeeksforGeeks Profile" class="mobile-gfg">
        <img src="assets/icons/geeks-for-geeks.svg" alt="GeeksforGeeks" class="mobile-platform-icon">
    </a>
    <a href="mailto:jdoe.dev@gmail.com" aria-label="Email" title="Send Email">
        <i class="fas fa-envelope"></i>
    </a>
</div>
"#;

type SharedCore = Rc<RefCell<MenuCore>>;

/// Wire the hamburger menu: classes, scroll lock, dismissal gestures, and the
/// one-time social-link injection.
pub fn init(window: &Window, document: &Document) -> Result<(), InitError> {
    let hamburger = dom::by_id(document, "hamburger")?;
    let menu = dom::by_id(document, "navMenu")?;
    let body = document.body().ok_or(InitError::NoBody)?;

    inject_social_links(&menu);

    let core: SharedCore = Rc::new(RefCell::new(MenuCore::new()));

    // Hamburger toggles.
    {
        let core = Rc::clone(&core);
        let hamburger = hamburger.clone();
        let menu = menu.clone();
        let body = body.clone();
        dom::listen(&hamburger.clone(), "click", move |_event| {
            let effect = core.borrow_mut().apply(MenuEvent::ToggleRequested);
            mirror(effect, &hamburger, &menu, &body);
        });
    }

    // Close on any nav/social link; deferred so injected links are included.
    {
        let core = Rc::clone(&core);
        let document = document.clone();
        let hamburger = hamburger.clone();
        let menu = menu.clone();
        let body = body.clone();
        Timeout::new(LINK_BIND_DELAY_MS, move || {
            for link in dom::query_all(&document, ".nav-link, .mobile-social-links a") {
                let core = Rc::clone(&core);
                let hamburger = hamburger.clone();
                let menu = menu.clone();
                let body = body.clone();
                dom::listen(&link, "click", move |_event| {
                    let effect = core.borrow_mut().apply(MenuEvent::LinkActivated);
                    mirror(effect, &hamburger, &menu, &body);
                });
            }
        })
        .forget();
    }

    // Close on a press outside both the hamburger and the menu.
    {
        let core = Rc::clone(&core);
        let hamburger = hamburger.clone();
        let menu = menu.clone();
        let body = body.clone();
        dom::listen(document, "click", move |event| {
            let target = event.target().and_then(|t| t.dyn_ref::<Node>().cloned());
            let on_hamburger = target.as_ref().is_some_and(|node| hamburger.contains(Some(node)));
            let in_menu = target.as_ref().is_some_and(|node| menu.contains(Some(node)));
            let effect = core.borrow_mut().apply(MenuEvent::PressedAt { on_hamburger, in_menu });
            mirror(effect, &hamburger, &menu, &body);
        });
    }

    // Close after an orientation change settles.
    {
        let core = Rc::clone(&core);
        let hamburger = hamburger.clone();
        let menu = menu.clone();
        let body = body.clone();
        dom::listen(window, "orientationchange", move |_event| {
            let core = Rc::clone(&core);
            let hamburger = hamburger.clone();
            let menu = menu.clone();
            let body = body.clone();
            Timeout::new(ORIENTATION_SETTLE_MS, move || {
                let effect = core.borrow_mut().apply(MenuEvent::OrientationChanged);
                mirror(effect, &hamburger, &menu, &body);
            })
            .forget();
        });
    }

    // Escape closes and returns focus to the hamburger.
    {
        let core = Rc::clone(&core);
        let hamburger = hamburger.clone();
        let menu = menu.clone();
        let body = body.clone();
        dom::listen(document, "keydown", move |event| {
            let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if key_event.key() == "Escape" {
                let effect = core.borrow_mut().apply(MenuEvent::EscapePressed);
                mirror(effect, &hamburger, &menu, &body);
            }
        });
    }

    // Touch tracking over the whole document; only an open menu reacts.
    let track: Rc<Cell<Option<TouchTrack>>> = Rc::new(Cell::new(None));
    {
        let track = Rc::clone(&track);
        dom::listen(document, "touchstart", move |event| {
            if let Some((x, y)) = touch_point(&event) {
                track.set(Some(TouchTrack::begin(x, y)));
            }
        });
    }
    {
        let track = Rc::clone(&track);
        dom::listen(document, "touchmove", move |event| {
            if let Some((x, y)) = touch_point(&event) {
                if let Some(mut current) = track.get() {
                    current.update(x, y);
                    track.set(Some(current));
                }
            }
        });
    }
    dom::listen(document, "touchend", move |_event| {
        let Some(finished) = track.take() else {
            return;
        };
        let effect = core.borrow_mut().apply(MenuEvent::SwipeEnded(finished.finish()));
        mirror(effect, &hamburger, &menu, &body);
    });

    Ok(())
}

fn mirror(effect: MenuEffect, hamburger: &HtmlElement, menu: &HtmlElement, body: &HtmlElement) {
    match effect {
        MenuEffect::Open => {
            dom::add_class(menu, "active");
            dom::add_class(hamburger, "active");
            dom::set_style(body, "overflow", "hidden");
        }
        MenuEffect::Close | MenuEffect::CloseAndRefocus => {
            dom::remove_class(menu, "active");
            dom::remove_class(hamburger, "active");
            dom::clear_style(body, "overflow");
            if effect == MenuEffect::CloseAndRefocus && hamburger.focus().is_err() {
                log::warn!("failed to focus hamburger");
            }
        }
        MenuEffect::None => {}
    }
}

fn inject_social_links(menu: &HtmlElement) {
    if matches!(menu.query_selector(".mobile-social-links"), Ok(Some(_))) {
        return;
    }
    if menu.insert_adjacent_html("beforeend", SOCIAL_LINKS_HTML).is_err() {
        log::warn!("failed to inject social links into the menu");
    }
}

fn touch_point(event: &Event) -> Option<(f64, f64)> {
    let touch_event = event.dyn_ref::<TouchEvent>()?;
    let touch = touch_event.touches().get(0)?;
    Some((f64::from(touch.client_x()), f64::from(touch.client_y())))
}
