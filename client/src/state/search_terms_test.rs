use super::*;

fn chip(category: TermCategory, term: &str) -> TermChip {
    TermChip {
        category,
        term: term.to_owned(),
    }
}

// =============================================================
// TermCategory
// =============================================================

#[test]
fn category_params_match_query_contract() {
    assert_eq!(TermCategory::ProductName.param(), "product_name");
    assert_eq!(TermCategory::Manufacturer.param(), "manufacturer");
    assert_eq!(TermCategory::SideEffect.param(), "side_effect");
}

#[test]
fn category_from_param_round_trips_every_variant() {
    for category in TermCategory::ALL {
        assert_eq!(TermCategory::from_param(category.param()), Some(category));
    }
    assert_eq!(TermCategory::from_param("product_names"), None);
}

#[test]
fn category_labels_are_distinct() {
    assert_ne!(TermCategory::ProductName.label(), TermCategory::Manufacturer.label());
    assert_ne!(TermCategory::Manufacturer.label(), TermCategory::SideEffect.label());
}

// =============================================================
// add
// =============================================================

#[test]
fn add_trims_and_appends() {
    let mut set = SearchTermSet::new();
    assert!(set.add(TermCategory::ProductName, "  Aspirin "));
    assert_eq!(set.terms(TermCategory::ProductName), ["Aspirin"]);
}

#[test]
fn add_duplicate_is_idempotent() {
    let mut set = SearchTermSet::new();
    assert!(set.add(TermCategory::Manufacturer, "Pfizer"));
    let after_first = set.clone();
    assert!(!set.add(TermCategory::Manufacturer, "Pfizer"));
    assert!(!set.add(TermCategory::Manufacturer, " Pfizer  "));
    assert_eq!(set, after_first);
}

#[test]
fn add_whitespace_only_never_changes_state() {
    let mut set = SearchTermSet::new();
    for category in TermCategory::ALL {
        assert!(!set.add(category, "   "));
        assert!(!set.add(category, ""));
        assert!(!set.add(category, "\t\n"));
    }
    assert!(set.is_empty());
}

#[test]
fn add_same_term_in_different_categories_is_allowed() {
    let mut set = SearchTermSet::new();
    assert!(set.add(TermCategory::ProductName, "X"));
    assert!(set.add(TermCategory::Manufacturer, "X"));
    assert_eq!(set.len(), 2);
}

#[test]
fn add_preserves_insertion_order() {
    let mut set = SearchTermSet::new();
    set.add(TermCategory::SideEffect, "두통");
    set.add(TermCategory::SideEffect, "구역");
    set.add(TermCategory::SideEffect, "발진");
    assert_eq!(set.terms(TermCategory::SideEffect), ["두통", "구역", "발진"]);
}

// =============================================================
// remove / clear
// =============================================================

#[test]
fn remove_absent_term_leaves_state_unchanged() {
    let mut set = SearchTermSet::from_query("product_name=A");
    let before = set.clone();
    assert!(!set.remove(TermCategory::ProductName, "B"));
    assert!(!set.remove(TermCategory::Manufacturer, "A"));
    assert_eq!(set, before);
}

#[test]
fn remove_requires_exact_match() {
    let mut set = SearchTermSet::from_query("product_name=Aspirin");
    assert!(!set.remove(TermCategory::ProductName, "aspirin"));
    assert!(set.remove(TermCategory::ProductName, "Aspirin"));
    assert!(set.is_empty());
}

#[test]
fn add_then_remove_hides_container() {
    let mut set = SearchTermSet::new();
    set.add(TermCategory::Manufacturer, "Pfizer");
    assert!(!set.is_empty());
    set.remove(TermCategory::Manufacturer, "Pfizer");
    assert!(set.is_empty());
    assert!(set.chips().is_empty());
}

#[test]
fn clear_empties_every_category() {
    let mut set = SearchTermSet::from_query("product_name=A&manufacturer=X&side_effect=Nausea");
    assert!(set.clear());
    assert!(set.is_empty());
    for category in TermCategory::ALL {
        assert!(set.terms(category).is_empty());
    }
    assert!(!set.clear());
}

// =============================================================
// URL sync
// =============================================================

#[test]
fn from_query_reads_repeated_params() {
    let set = SearchTermSet::from_query("?product_name=A&product_name=B&manufacturer=X");
    assert_eq!(set.terms(TermCategory::ProductName), ["A", "B"]);
    assert_eq!(set.terms(TermCategory::Manufacturer), ["X"]);
    assert!(set.terms(TermCategory::SideEffect).is_empty());
}

#[test]
fn from_query_round_trips_through_query_params() {
    let source = QueryParams::parse("product_name=A&product_name=B&manufacturer=X");
    let set = SearchTermSet::from_query(&source.to_string());
    assert_eq!(set.to_query_params(), source);
}

#[test]
fn from_query_applies_add_semantics() {
    let set = SearchTermSet::from_query("product_name=A&product_name=+A+&product_name=&side_effect=%20");
    assert_eq!(set.terms(TermCategory::ProductName), ["A"]);
    assert!(set.terms(TermCategory::SideEffect).is_empty());
}

#[test]
fn from_query_ignores_unrelated_and_malformed_params() {
    let set = SearchTermSet::from_query("q=foo&&=bar&product_names=A&sort=name_asc");
    assert!(set.is_empty());
}

#[test]
fn init_from_query_merges_into_existing_set() {
    let mut set = SearchTermSet::new();
    set.add(TermCategory::ProductName, "A");
    assert!(set.init_from_query("product_name=A&product_name=B"));
    assert_eq!(set.terms(TermCategory::ProductName), ["A", "B"]);
    assert!(!set.init_from_query("product_name=B"));
}

#[test]
fn to_query_params_uses_category_order() {
    let mut set = SearchTermSet::new();
    set.add(TermCategory::SideEffect, "Nausea");
    set.add(TermCategory::ProductName, "A");
    set.add(TermCategory::Manufacturer, "X");
    set.add(TermCategory::ProductName, "B");
    assert_eq!(
        set.to_query_params().to_string(),
        "product_name=A&product_name=B&manufacturer=X&side_effect=Nausea"
    );
}

// =============================================================
// chips
// =============================================================

#[test]
fn page_load_with_two_params_renders_two_chips() {
    let set = SearchTermSet::from_query("?product_name=Aspirin&side_effect=Nausea");
    assert_eq!(
        set.chips(),
        vec![
            chip(TermCategory::ProductName, "Aspirin"),
            chip(TermCategory::SideEffect, "Nausea"),
        ]
    );
}

#[test]
fn chips_follow_category_then_insertion_order() {
    let set = SearchTermSet::from_query("side_effect=S&manufacturer=M&product_name=P2&product_name=P1");
    let order: Vec<(TermCategory, String)> = set.chips().into_iter().map(|c| (c.category, c.term)).collect();
    assert_eq!(
        order,
        vec![
            (TermCategory::ProductName, "P2".to_owned()),
            (TermCategory::ProductName, "P1".to_owned()),
            (TermCategory::Manufacturer, "M".to_owned()),
            (TermCategory::SideEffect, "S".to_owned()),
        ]
    );
}

// =============================================================
// applied_chips
// =============================================================

#[test]
fn applied_chips_keep_raw_values_and_skip_blanks_and_repeats() {
    let chips = applied_chips("manufacturer=X&product_name=A&product_name=A&side_effect=+&q=foo");
    assert_eq!(
        chips,
        vec![chip(TermCategory::ProductName, "A"), chip(TermCategory::Manufacturer, "X")]
    );
}

#[test]
fn applied_chips_empty_for_unrelated_query() {
    assert!(applied_chips("q=foo&page=2").is_empty());
}
