use super::*;

// =============================================================
// Group definitions
// =============================================================

#[test]
fn there_are_four_disjoint_groups() {
    assert_eq!(REVEAL_GROUPS.len(), 4);
    for (i, a) in REVEAL_GROUPS.iter().enumerate() {
        for b in &REVEAL_GROUPS[i + 1..] {
            assert_ne!(a.selector, b.selector);
        }
    }
}

#[test]
fn experience_cards_use_the_slow_stagger() {
    let experience = REVEAL_GROUPS
        .iter()
        .find(|group| group.selector == ".experience-card")
        .expect("experience group");
    assert_eq!(experience.stagger_step_ms, 200);
    assert_eq!(experience.animation_class, "slide-in-left");
}

#[test]
fn remaining_groups_use_the_fast_stagger() {
    for group in REVEAL_GROUPS {
        if group.selector != ".experience-card" {
            assert_eq!(group.stagger_step_ms, 100, "group {}", group.selector);
        }
    }
}

#[test]
fn project_cards_scale_in() {
    let cards = REVEAL_GROUPS
        .iter()
        .find(|group| group.selector == ".project-card")
        .expect("project card group");
    assert_eq!(cards.animation_class, "scale-in");
}

// =============================================================
// Stagger arithmetic
// =============================================================

#[test]
fn first_element_has_no_delay() {
    assert_eq!(transition_delay(0, 100), "0ms");
}

#[test]
fn delay_scales_with_index() {
    assert_eq!(transition_delay(1, 100), "100ms");
    assert_eq!(transition_delay(3, 100), "300ms");
    assert_eq!(transition_delay(3, 200), "600ms");
}

#[test]
fn huge_index_saturates_instead_of_overflowing() {
    let delay = transition_delay(usize::MAX, 200);
    assert!(delay.ends_with("ms"));
}
