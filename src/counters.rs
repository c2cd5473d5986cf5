//! Counting-up statistics display.
//!
//! Each `.stat-number` element carries a `data-target` integer and renders
//! `"0"` until triggered. The count-up is a recurring tick owned by an
//! explicit registry mapping element index to timer handle; starting an
//! animation always cancels any prior timer for that element first, so two
//! ticks can never race on the same element.

#[cfg(test)]
#[path = "counters_test.rs"]
mod counters_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use web_sys::{Document, HtmlElement};

use crate::consts::{
    COUNTER_FALLBACK_MS, COUNTER_STAGGER_MS, COUNTER_THRESHOLD, COUNTER_TICK_MS,
    OBSERVER_BOTTOM_MARGIN,
};
use crate::dom;
use crate::error::InitError;

/// Outcome of one count-up tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Still counting; render this value.
    Running(u32),
    /// Target reached; render the display form and stop the timer.
    Done,
}

/// Count-up state for one element.
///
/// The element renders `"0"` before the first tick; ticks then render
/// `1, 2, ..., target - 1` followed by the display form.
#[derive(Clone, Copy, Debug)]
pub struct CounterAnim {
    target: u32,
    current: u32,
}

impl CounterAnim {
    #[must_use]
    pub fn new(target: u32) -> Self {
        Self { target, current: 0 }
    }

    /// Advance one tick.
    pub fn tick(&mut self) -> Step {
        self.current = self.current.saturating_add(1);
        if self.current >= self.target {
            Step::Done
        } else {
            Step::Running(self.current)
        }
    }
}

/// Final rendering once the target is reached.
#[must_use]
pub fn display_form(target: u32) -> String {
    match target {
        3 => "3+".to_owned(),
        1 => "1+".to_owned(),
        other => other.to_string(),
    }
}

/// Parse a `data-target` attribute value.
#[must_use]
pub fn parse_target(raw: Option<&str>) -> Option<u32> {
    match raw?.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => None,
    }
}

/// Delay before the counter at `index` starts animating.
#[must_use]
pub fn stagger_delay_ms(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(step_ms)
}

type TimerMap = Rc<RefCell<HashMap<usize, Interval>>>;

/// Register every stat counter with an intersection watcher plus the
/// one-shot fallback sweep.
pub fn init(document: &Document) -> Result<(), InitError> {
    let stats = Rc::new(dom::query_all(document, ".stat-number"));
    log::info!("stat counters: {} found", stats.len());
    if stats.is_empty() {
        return Ok(());
    }

    let timers: TimerMap = Rc::new(RefCell::new(HashMap::new()));
    for element in stats.iter() {
        element.set_text_content(Some("0"));
    }

    let observer = {
        let stats = Rc::clone(&stats);
        let timers = Rc::clone(&timers);
        dom::intersection_observer(COUNTER_THRESHOLD, OBSERVER_BOTTOM_MARGIN, move |target| {
            let Some(index) = stats.iter().position(|el| dom::same_node(el, &target)) else {
                return;
            };
            schedule(&timers, &stats[index], index);
        })?
    };
    for element in stats.iter() {
        observer.observe(element);
    }

    // Some browsers never report elements already in view at load; sweep once
    // and animate anything still sitting at "0".
    let stats = Rc::clone(&stats);
    Timeout::new(COUNTER_FALLBACK_MS, move || {
        for (index, element) in stats.iter().enumerate() {
            if element.text_content().as_deref() == Some("0") {
                schedule(&timers, element, index);
            }
        }
    })
    .forget();
    Ok(())
}

fn schedule(timers: &TimerMap, element: &HtmlElement, index: usize) {
    let timers = Rc::clone(timers);
    let element = element.clone();
    Timeout::new(stagger_delay_ms(index, COUNTER_STAGGER_MS), move || {
        start(&timers, &element, index);
    })
    .forget();
}

fn start(timers: &TimerMap, element: &HtmlElement, index: usize) {
    let target = match parse_target(element.get_attribute("data-target").as_deref()) {
        Some(target) => target,
        None => {
            log::warn!("stat counter {index} has a missing or malformed data-target; counting to 0");
            0
        }
    };
    log::info!("starting counter animation toward {target}");

    // cancel-before-start: dropping the previous handle clears its timer.
    timers.borrow_mut().remove(&index);
    element.set_text_content(Some("0"));

    let mut anim = CounterAnim::new(target);
    let tick = {
        let timers = Rc::clone(timers);
        let element = element.clone();
        Interval::new(COUNTER_TICK_MS, move || match anim.tick() {
            Step::Running(value) => element.set_text_content(Some(&value.to_string())),
            Step::Done => {
                element.set_text_content(Some(&display_form(target)));
                timers.borrow_mut().remove(&index);
            }
        })
    };
    timers.borrow_mut().insert(index, tick);
}
