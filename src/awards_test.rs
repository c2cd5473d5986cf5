use super::*;

// =============================================================
// Activation keys
// =============================================================

#[test]
fn enter_activates() {
    assert!(is_activation_key("Enter"));
}

#[test]
fn space_activates() {
    assert!(is_activation_key(" "));
}

#[test]
fn other_keys_do_not_activate() {
    for key in ["Escape", "Tab", "a", "Spacebar", "ArrowDown", ""] {
        assert!(!is_activation_key(key), "key {key:?}");
    }
}
