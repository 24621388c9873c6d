use super::*;

// =============================================================
// search / submit URLs
// =============================================================

#[test]
fn search_url_without_params_has_no_question_mark() {
    assert_eq!(search_url(&QueryParams::new()), "/search");
}

#[test]
fn search_url_joins_params() {
    let params = QueryParams::parse("product_name=A&manufacturer=X");
    assert_eq!(search_url(&params), "/search?product_name=A&manufacturer=X");
}

#[test]
fn submit_url_strips_blank_entries() {
    let entries: QueryParams = [
        ("item_name", ""),
        ("drug_shape", "원형"),
        ("color_class1", "   "),
        ("entp_name", "종근당"),
    ]
    .into_iter()
    .collect();
    let expected: QueryParams = [("drug_shape", "원형"), ("entp_name", "종근당")].into_iter().collect();
    assert_eq!(submit_url(entries), format!("/search?{expected}"));
}

#[test]
fn submit_url_with_only_blank_entries_goes_to_bare_search() {
    let entries: QueryParams = [("item_name", " ")].into_iter().collect();
    assert_eq!(submit_url(entries), "/search");
}

// =============================================================
// sort / page
// =============================================================

#[test]
fn sort_change_sets_sort_and_drops_page() {
    assert_eq!(sort_change_url("q=foo&page=3", "name_asc"), "/search?q=foo&sort=name_asc");
}

#[test]
fn sort_change_replaces_existing_sort_in_place() {
    assert_eq!(
        sort_change_url("?sort=name_desc&product_name=A&page=2", "name_asc"),
        "/search?sort=name_asc&product_name=A"
    );
}

#[test]
fn page_url_keeps_other_params() {
    assert_eq!(
        page_url("product_name=A&page=1&sort=name_asc", 4),
        "/search?product_name=A&page=4&sort=name_asc"
    );
    assert_eq!(page_url("", 2), "/search?page=2");
}

// =============================================================
// applied-term removal
// =============================================================

#[test]
fn remove_term_url_drops_only_matching_value() {
    assert_eq!(
        remove_term_url("/search", "product_name=A&product_name=B&manufacturer=X", "product_name", "A"),
        "/search?product_name=B&manufacturer=X"
    );
}

#[test]
fn remove_term_url_last_value_yields_bare_path() {
    assert_eq!(remove_term_url("/search", "side_effect=Nausea", "side_effect", "Nausea"), "/search");
}

#[test]
fn remove_term_url_keeps_same_value_under_other_keys() {
    assert_eq!(
        remove_term_url("/search", "product_name=X&manufacturer=X", "manufacturer", "X"),
        "/search?product_name=X"
    );
}

// =============================================================
// page_window
// =============================================================

#[test]
fn page_window_is_empty_for_single_page() {
    assert!(page_window(1, 1, 5).is_empty());
    assert!(page_window(1, 0, 5).is_empty());
}

#[test]
fn page_window_centers_on_current() {
    assert_eq!(page_window(5, 10, 5), 3..=7);
}

#[test]
fn page_window_clamps_at_edges() {
    assert_eq!(page_window(1, 10, 5), 1..=5);
    assert_eq!(page_window(10, 10, 5), 6..=10);
    assert_eq!(page_window(42, 10, 5), 6..=10);
}

#[test]
fn page_window_shrinks_to_total() {
    assert_eq!(page_window(2, 3, 5), 1..=3);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn navigate_to_is_noop_outside_browser() {
    navigate_to("/search?q=foo");
}
