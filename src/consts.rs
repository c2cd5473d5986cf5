//! Shared timing and threshold constants.

// ── Scrolling ───────────────────────────────────────────────────

/// Scroll offset past which the header switches to its condensed styling.
pub const SCROLL_THRESHOLD_PX: f64 = 100.0;

// ── Viewport observation ────────────────────────────────────────

/// Bottom margin shared by both intersection watchers; elements count as
/// visible only once they clear the lowest 50px of the viewport.
pub const OBSERVER_BOTTOM_MARGIN: &str = "0px 0px -50px 0px";

/// Visibility fraction that triggers an entrance reveal.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Visibility fraction that triggers a stat counter.
pub const COUNTER_THRESHOLD: f64 = 0.3;

// ── Entrance reveals ────────────────────────────────────────────

/// Per-index transition-delay step for most reveal groups.
pub const REVEAL_STAGGER_MS: u32 = 100;

/// Per-index transition-delay step for experience cards.
pub const EXPERIENCE_STAGGER_MS: u32 = 200;

// ── Stat counters ───────────────────────────────────────────────

/// Period of the count-up tick.
pub const COUNTER_TICK_MS: u32 = 150;

/// Per-index delay before a counter starts animating.
pub const COUNTER_STAGGER_MS: u32 = 200;

/// One-shot sweep that animates counters the intersection watcher missed.
pub const COUNTER_FALLBACK_MS: u32 = 3_000;

// ── Project filter ──────────────────────────────────────────────

/// Delay between un-hiding a card and starting its fade-in transition.
pub const CARD_FADE_IN_DELAY_MS: u32 = 10;

/// Delay before a faded-out card is removed from layout; must outlast the
/// fade transition.
pub const CARD_HIDE_DELAY_MS: u32 = 300;

// ── Theme ───────────────────────────────────────────────────────

/// Delay before recomputing the header background after a theme switch,
/// letting the attribute-driven stylesheet settle.
pub const THEME_SETTLE_MS: u32 = 10;

// ── Awards ──────────────────────────────────────────────────────

/// How long an activated award stays dimmed.
pub const PULSE_RESTORE_MS: u32 = 200;

/// Delay before opening an award link, letting the pulse render first.
pub const OPEN_LINK_DELAY_MS: u32 = 100;

// ── Mobile menu ─────────────────────────────────────────────────

/// Deferral before binding close handlers to nav links, so injected links
/// are included.
pub const LINK_BIND_DELAY_MS: u32 = 100;

/// Settle delay after an orientation change before closing the menu.
pub const ORIENTATION_SETTLE_MS: u32 = 100;

/// Minimum upward displacement for a swipe-up dismissal.
pub const SWIPE_UP_MIN_PX: f64 = 50.0;

/// Maximum horizontal drift allowed in a swipe-up dismissal.
pub const SWIPE_UP_MAX_DRIFT_PX: f64 = 100.0;

/// Minimum rightward displacement for a rightward-swipe dismissal.
pub const SWIPE_RIGHT_MIN_PX: f64 = 100.0;

/// Maximum vertical drift allowed in a rightward-swipe dismissal.
pub const SWIPE_RIGHT_MAX_DRIFT_PX: f64 = 50.0;

// ── Notifications ───────────────────────────────────────────────

/// Delay between attaching a notification and starting its slide-in.
pub const NOTICE_SLIDE_IN_MS: u32 = 10;

/// How long a notification stays on screen.
pub const NOTICE_VISIBLE_MS: u32 = 3_000;

/// Delay between the slide-out and removal from the document; must outlast
/// the slide transition.
pub const NOTICE_REMOVE_MS: u32 = 300;
