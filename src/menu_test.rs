use super::*;

fn open_menu() -> MenuCore {
    let mut core = MenuCore::new();
    assert_eq!(core.apply(MenuEvent::ToggleRequested), MenuEffect::Open);
    core
}

// =============================================================
// Hamburger toggling
// =============================================================

#[test]
fn starts_closed() {
    assert!(!MenuCore::new().is_open());
}

#[test]
fn toggle_opens_then_closes() {
    let mut core = MenuCore::new();
    assert_eq!(core.apply(MenuEvent::ToggleRequested), MenuEffect::Open);
    assert!(core.is_open());
    assert_eq!(core.apply(MenuEvent::ToggleRequested), MenuEffect::Close);
    assert!(!core.is_open());
}

// =============================================================
// Forced closes
// =============================================================

#[test]
fn link_activation_closes_an_open_menu() {
    let mut core = open_menu();
    assert_eq!(core.apply(MenuEvent::LinkActivated), MenuEffect::Close);
    assert!(!core.is_open());
}

#[test]
fn link_activation_on_a_closed_menu_does_nothing() {
    let mut core = MenuCore::new();
    assert_eq!(core.apply(MenuEvent::LinkActivated), MenuEffect::None);
}

#[test]
fn outside_press_closes_an_open_menu() {
    let mut core = open_menu();
    let press = MenuEvent::PressedAt { on_hamburger: false, in_menu: false };
    assert_eq!(core.apply(press), MenuEffect::Close);
    assert!(!core.is_open());
}

#[test]
fn press_on_the_hamburger_is_left_to_the_toggle_handler() {
    let mut core = open_menu();
    let press = MenuEvent::PressedAt { on_hamburger: true, in_menu: false };
    assert_eq!(core.apply(press), MenuEffect::None);
    assert!(core.is_open());
}

#[test]
fn press_inside_the_menu_keeps_it_open() {
    let mut core = open_menu();
    let press = MenuEvent::PressedAt { on_hamburger: false, in_menu: true };
    assert_eq!(core.apply(press), MenuEffect::None);
    assert!(core.is_open());
}

#[test]
fn orientation_change_closes_an_open_menu() {
    let mut core = open_menu();
    assert_eq!(core.apply(MenuEvent::OrientationChanged), MenuEffect::Close);
}

#[test]
fn escape_closes_and_requests_refocus() {
    let mut core = open_menu();
    assert_eq!(core.apply(MenuEvent::EscapePressed), MenuEffect::CloseAndRefocus);
    assert!(!core.is_open());
}

#[test]
fn escape_on_a_closed_menu_does_nothing() {
    let mut core = MenuCore::new();
    assert_eq!(core.apply(MenuEvent::EscapePressed), MenuEffect::None);
}

#[test]
fn every_dismissal_path_ends_closed() {
    let dismissals = [
        MenuEvent::LinkActivated,
        MenuEvent::PressedAt { on_hamburger: false, in_menu: false },
        MenuEvent::OrientationChanged,
        MenuEvent::EscapePressed,
        MenuEvent::SwipeEnded(Swipe::Up),
        MenuEvent::SwipeEnded(Swipe::Right),
    ];
    for dismissal in dismissals {
        let mut core = open_menu();
        let effect = core.apply(dismissal);
        assert_ne!(effect, MenuEffect::None, "event {dismissal:?}");
        assert!(!core.is_open(), "event {dismissal:?}");
    }
}

// =============================================================
// Swipe classification
// =============================================================

#[test]
fn upward_swipe_dismisses() {
    assert_eq!(Swipe::classify(0.0, -80.0), Swipe::Up);
    assert_eq!(Swipe::classify(-40.0, -50.0), Swipe::Up);
}

#[test]
fn rightward_swipe_dismisses() {
    assert_eq!(Swipe::classify(100.0, 0.0), Swipe::Right);
    assert_eq!(Swipe::classify(180.0, 30.0), Swipe::Right);
}

#[test]
fn short_movements_do_not_dismiss() {
    assert_eq!(Swipe::classify(0.0, -49.0), Swipe::Other);
    assert_eq!(Swipe::classify(99.0, 0.0), Swipe::Other);
    assert_eq!(Swipe::classify(0.0, 0.0), Swipe::Other);
}

#[test]
fn too_much_drift_does_not_dismiss() {
    // Enough upward travel, but drifting a full swipe-width sideways.
    assert_eq!(Swipe::classify(100.0, -60.0), Swipe::Other);
    // Enough rightward travel, but drifting a full swipe-height vertically.
    assert_eq!(Swipe::classify(120.0, 50.0), Swipe::Other);
}

#[test]
fn downward_and_leftward_swipes_never_dismiss() {
    assert_eq!(Swipe::classify(0.0, 200.0), Swipe::Other);
    assert_eq!(Swipe::classify(-200.0, 0.0), Swipe::Other);
}

#[test]
fn only_up_and_right_dismiss() {
    assert!(Swipe::Up.dismisses());
    assert!(Swipe::Right.dismisses());
    assert!(!Swipe::Other.dismisses());
}

#[test]
fn swipe_on_a_closed_menu_does_nothing() {
    let mut core = MenuCore::new();
    assert_eq!(core.apply(MenuEvent::SwipeEnded(Swipe::Up)), MenuEffect::None);
}

// =============================================================
// Touch tracking
// =============================================================

#[test]
fn track_accumulates_to_a_swipe() {
    let mut track = TouchTrack::begin(200.0, 600.0);
    track.update(210.0, 400.0);
    track.update(220.0, 300.0);
    assert_eq!(track.finish(), Swipe::Up);
}

#[test]
fn track_without_movement_is_not_a_swipe() {
    assert_eq!(TouchTrack::begin(100.0, 100.0).finish(), Swipe::Other);
}

#[test]
fn track_uses_the_last_position_not_the_largest() {
    // Swipe out and back again lands near the start.
    let mut track = TouchTrack::begin(100.0, 500.0);
    track.update(100.0, 200.0);
    track.update(100.0, 490.0);
    assert_eq!(track.finish(), Swipe::Other);
}
