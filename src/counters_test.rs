use super::*;

// =============================================================
// Tick sequence
// =============================================================

#[test]
fn counts_through_every_intermediate_value() {
    let mut anim = CounterAnim::new(5);
    let mut rendered = vec!["0".to_owned()];
    loop {
        match anim.tick() {
            Step::Running(value) => rendered.push(value.to_string()),
            Step::Done => {
                rendered.push(display_form(5));
                break;
            }
        }
    }
    assert_eq!(rendered, ["0", "1", "2", "3", "4", "5"]);
}

#[test]
fn target_of_one_finishes_on_the_first_tick() {
    let mut anim = CounterAnim::new(1);
    assert_eq!(anim.tick(), Step::Done);
    assert_eq!(display_form(1), "1+");
}

#[test]
fn target_of_zero_finishes_on_the_first_tick() {
    let mut anim = CounterAnim::new(0);
    assert_eq!(anim.tick(), Step::Done);
    assert_eq!(display_form(0), "0");
}

#[test]
fn done_is_stable_under_extra_ticks() {
    let mut anim = CounterAnim::new(2);
    while anim.tick() != Step::Done {}
    assert_eq!(anim.tick(), Step::Done);
    assert_eq!(anim.tick(), Step::Done);
}

#[test]
fn tick_count_equals_target() {
    let mut anim = CounterAnim::new(7);
    let mut ticks = 0;
    while anim.tick() != Step::Done {
        ticks += 1;
    }
    // target - 1 running ticks, then the done tick.
    assert_eq!(ticks, 6);
}

// =============================================================
// Display form
// =============================================================

#[test]
fn three_and_one_render_with_a_plus() {
    assert_eq!(display_form(3), "3+");
    assert_eq!(display_form(1), "1+");
}

#[test]
fn other_targets_render_plain() {
    assert_eq!(display_form(0), "0");
    assert_eq!(display_form(4), "4");
    assert_eq!(display_form(12), "12");
}

// =============================================================
// Target parsing
// =============================================================

#[test]
fn parses_plain_integers() {
    assert_eq!(parse_target(Some("12")), Some(12));
    assert_eq!(parse_target(Some("0")), Some(0));
}

#[test]
fn tolerates_surrounding_whitespace() {
    assert_eq!(parse_target(Some(" 7 ")), Some(7));
}

#[test]
fn rejects_missing_or_malformed_values() {
    assert_eq!(parse_target(None), None);
    assert_eq!(parse_target(Some("")), None);
    assert_eq!(parse_target(Some("many")), None);
    assert_eq!(parse_target(Some("-3")), None);
    assert_eq!(parse_target(Some("3.5")), None);
}

// =============================================================
// Stagger
// =============================================================

#[test]
fn stagger_grows_by_index() {
    assert_eq!(stagger_delay_ms(0, 200), 0);
    assert_eq!(stagger_delay_ms(1, 200), 200);
    assert_eq!(stagger_delay_ms(4, 200), 800);
}

#[test]
fn stagger_saturates_on_huge_indices() {
    assert_eq!(stagger_delay_ms(usize::MAX, 200), u32::MAX);
}
