use super::*;

// =============================================================
// Parsing
// =============================================================

#[test]
fn all_sentinel_parses_to_all() {
    assert_eq!(ProjectFilter::parse(Some("all")), ProjectFilter::All);
}

#[test]
fn missing_attribute_parses_to_all() {
    assert_eq!(ProjectFilter::parse(None), ProjectFilter::All);
}

#[test]
fn category_keys_parse_verbatim() {
    assert_eq!(
        ProjectFilter::parse(Some("web")),
        ProjectFilter::Category("web".to_owned())
    );
    assert_eq!(
        ProjectFilter::parse(Some("machine-learning")),
        ProjectFilter::Category("machine-learning".to_owned())
    );
}

// =============================================================
// Matching
// =============================================================

#[test]
fn all_matches_every_category() {
    let filter = ProjectFilter::All;
    for category in ["web", "ml", "", "anything"] {
        assert!(filter.matches(category));
    }
}

#[test]
fn category_matches_only_its_own_key() {
    let filter = ProjectFilter::parse(Some("web"));
    assert!(filter.matches("web"));
    assert!(!filter.matches("ml"));
    assert!(!filter.matches(""));
}

#[test]
fn matching_is_case_sensitive() {
    let filter = ProjectFilter::parse(Some("web"));
    assert!(!filter.matches("Web"));
}

#[test]
fn empty_key_is_a_real_category() {
    // An empty data-filter is not the all sentinel.
    let filter = ProjectFilter::parse(Some(""));
    assert_eq!(filter, ProjectFilter::Category(String::new()));
    assert!(filter.matches(""));
    assert!(!filter.matches("web"));
}
