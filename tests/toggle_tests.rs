#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Filter toggle tests
///
/// This test suite covers:
/// - Membership toggle of a single tag in the `i` filter set
/// - Order of kept values and pass-through of unrelated parameters
/// - Navigation targets computed from a page address
use tagfilter::{
    Address, Candidate, FILTER_KEY, FilterConfig, FilterSet, ToggleOutcome, UrlSearchParams,
    toggle_filter, toggle_filter_with_outcome,
};

fn tag(text: &str) -> Candidate {
    Candidate::new(text).unwrap()
}

fn pairs(query: &UrlSearchParams) -> Vec<(&str, &str)> {
    query.iter().collect()
}

#[test]
fn test_absent_key_appends_pair() {
    let query = UrlSearchParams::parse("page=3&sort=name");
    let next = toggle_filter(&query, FILTER_KEY, &tag("x"));
    assert_eq!(
        pairs(&next),
        vec![("page", "3"), ("sort", "name"), ("i", "x")]
    );
}

#[test]
fn test_single_pair_removed_entirely() {
    let query = UrlSearchParams::parse("i=x");
    let next = toggle_filter(&query, FILTER_KEY, &tag("x"));
    assert!(!next.has("i", None));
    assert_eq!(next.serialize(), "");
}

#[test]
fn test_remove_keeps_relative_order() {
    let query = UrlSearchParams::parse("i=a&i=b&i=c");
    let next = toggle_filter(&query, FILTER_KEY, &tag("b"));
    assert_eq!(pairs(&next), vec![("i", "a"), ("i", "c")]);
}

#[test]
fn test_add_appends_after_kept() {
    let query = UrlSearchParams::parse("i=a");
    let next = toggle_filter(&query, FILTER_KEY, &tag("z"));
    assert_eq!(pairs(&next), vec![("i", "a"), ("i", "z")]);
}

#[test]
fn test_other_keys_untouched() {
    let query = UrlSearchParams::parse("q=1&i=a&q=2&p=x&i=b");
    let next = toggle_filter(&query, FILTER_KEY, &tag("a"));
    let others: Vec<(&str, &str)> = next.iter().filter(|(k, _)| *k != "i").collect();
    assert_eq!(others, vec![("q", "1"), ("q", "2"), ("p", "x")]);
    assert_eq!(next.get_all("i"), vec!["b"]);
}

#[test]
fn test_double_toggle_restores() {
    let query = UrlSearchParams::parse("page=2&i=a&i=b");
    let once = toggle_filter(&query, FILTER_KEY, &tag("c"));
    let twice = toggle_filter(&once, FILTER_KEY, &tag("c"));
    assert_eq!(twice, query);

    let once = toggle_filter(&query, FILTER_KEY, &tag("b"));
    let twice = toggle_filter(&once, FILTER_KEY, &tag("b"));
    assert_eq!(twice, query);
}

#[test]
fn test_outcome_matches_membership() {
    let query = UrlSearchParams::parse("i=a");
    let (_, outcome) = toggle_filter_with_outcome(&query, FILTER_KEY, &tag("a"));
    assert_eq!(outcome, ToggleOutcome::Removed);
    let (next, outcome) = toggle_filter_with_outcome(&query, FILTER_KEY, &tag("b"));
    assert!(outcome.is_added());
    assert!(FilterSet::from_query(&next, FILTER_KEY).contains("b"));
}

#[test]
fn test_candidate_is_trimmed_before_matching() {
    let query = UrlSearchParams::parse("i=web+dev");
    let next = toggle_filter(&query, FILTER_KEY, &tag("  web dev\n"));
    assert!(next.is_empty());
}

#[test]
fn test_other_filter_key() {
    let query = UrlSearchParams::parse("i=a&tag=a");
    let next = toggle_filter(&query, "tag", &tag("a"));
    assert_eq!(pairs(&next), vec![("i", "a")]);
}

#[test]
fn test_address_round_trip() {
    let config = FilterConfig::default();
    let start = Address::parse("https://example.com/list?page=2&i=rust#results");

    let added = start.toggle(&config, &tag("cli"));
    assert_eq!(
        added.target(),
        "https://example.com/list?page=2&i=rust&i=cli"
    );

    let next = Address::parse(added.target());
    let removed = next.toggle(&config, &tag("rust"));
    assert_eq!(removed.target(), "https://example.com/list?page=2&i=cli");

    let cleared = Address::parse(removed.target()).toggle(&config, &tag("cli"));
    assert_eq!(cleared.target(), "https://example.com/list?page=2");
}

#[test]
fn test_address_clearing_last_param() {
    let nav = Address::parse("/list?i=rust").toggle(&FilterConfig::default(), &tag("rust"));
    assert_eq!(nav.target(), "/list");
}
