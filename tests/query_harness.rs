//! Query engine integration harness.
//!
//! # What this covers
//!
//! - **Identity**: an empty search term with the `all` filter returns every
//!   record in the original order.
//! - **Case-insensitive search**: matching folds both the term and the field
//!   values to lowercase, and ignores surrounding whitespace in the term.
//! - **AND semantics**: search term and categorical filter constrain
//!   together, never as a union.
//! - **Missing fields**: records lacking a searchable field simply don't
//!   match on it; records lacking the filter field are excluded by any
//!   non-`all` filter.
//! - **Idempotence**: filtering an already-filtered result set with the same
//!   arguments changes nothing.
//! - **Empty results are data**: zero matches produce an empty page, never an
//!   error.
//!
//! # Running
//!
//! ```sh
//! cargo test --test query_harness
//! ```

mod common;
use common::*;

use baekilha::query::{filter, paginate, run_query};
use baekilha::{Bill, BillStatus, QueryState, FILTER_ALL};
use pretty_assertions::assert_eq;

fn spec() -> baekilha::QuerySpec<'static> {
    Bill::query_spec()
}

// ---------------------------------------------------------------------------
// Identity and ordering
// ---------------------------------------------------------------------------

#[test]
fn empty_search_and_all_filter_is_identity() {
    let bills = twelve_bills();
    let out = filter(&bills, "", FILTER_ALL, &spec());
    assert_eq!(out, bills);
}

#[test]
fn whitespace_only_search_is_identity() {
    let bills = twelve_bills();
    let out = filter(&bills, "   ", FILTER_ALL, &spec());
    assert_eq!(out, bills);
}

#[test]
fn result_order_follows_input_order() {
    let bills = twelve_bills();
    let out = filter(&bills, "", "심의중", &spec());
    let ids: Vec<u32> = out.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![9, 10, 11, 12]);
}

// ---------------------------------------------------------------------------
// Search semantics
// ---------------------------------------------------------------------------

#[test]
fn search_matches_korean_title() {
    let bills = twelve_bills();
    let out = filter(&bills, "교육", FILTER_ALL, &spec());
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].title, "교육기본법 일부개정법률안");
}

#[test]
fn search_is_case_insensitive() {
    let bills = twelve_bills();
    // Bill numbers are stored as "Bill-22NNNNN"; the term is lowercased.
    let lower = filter(&bills, "bill-2200001", FILTER_ALL, &spec());
    let upper = filter(&bills, "BILL-2200001", FILTER_ALL, &spec());
    assert_eq!(lower.len(), 1);
    assert_eq!(lower, upper);
}

#[test]
fn search_trims_surrounding_whitespace() {
    let bills = twelve_bills();
    let padded = filter(&bills, "  교육  ", FILTER_ALL, &spec());
    let bare = filter(&bills, "교육", FILTER_ALL, &spec());
    assert_eq!(padded, bare);
}

#[test]
fn search_spans_all_searchable_fields() {
    let bills = twelve_bills();
    // Committee is searchable too.
    let out = filter(&bills, "국방위원회", FILTER_ALL, &spec());
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].title, "병역법 일부개정법률안");
}

// ---------------------------------------------------------------------------
// Filter semantics
// ---------------------------------------------------------------------------

#[test]
fn status_filter_partitions_evenly() {
    let bills = twelve_bills();
    for (value, expected) in [("가결", 4), ("부결", 4), ("심의중", 4)] {
        let out = filter(&bills, "", value, &spec());
        assert_eq!(out.len(), expected, "filter {value:?}");
    }
}

#[test]
fn filter_value_is_exact_not_substring() {
    let bills = twelve_bills();
    // "가" is a substring of "가결" but not an exact status value.
    assert!(filter(&bills, "", "가", &spec()).is_empty());
}

#[test]
fn search_and_filter_are_anded() {
    let bills = twelve_bills();
    let out = filter(&bills, "기획재정위원회", "가결", &spec());
    assert_eq!(out.len(), 1);
    assert_statuses!(out, BillStatus::Passed);
    assert_eq!(out[0].title, "국가재정법 일부개정법률안");
}

#[test]
fn filter_is_idempotent() {
    let bills = twelve_bills();
    let once = filter(&bills, "법", "부결", &spec());
    let twice = filter(&once, "법", "부결", &spec());
    assert_eq!(once, twice);
}

// ---------------------------------------------------------------------------
// Empty results
// ---------------------------------------------------------------------------

#[test]
fn no_match_yields_empty_page_not_error() {
    let bills = twelve_bills();
    let out = filter(&bills, "존재하지않는법률", FILTER_ALL, &spec());
    assert!(out.is_empty());

    let page = paginate(&out, 10, 1);
    assert_page!(page, items: 0, total: 0, pages: 1, current: 1);
}

#[test]
fn empty_collection_is_fine() {
    let bills: Vec<Bill> = Vec::new();
    let out = filter(&bills, "교육", "가결", &spec());
    assert!(out.is_empty());
}

// ---------------------------------------------------------------------------
// Full flow through QueryState
// ---------------------------------------------------------------------------

#[test]
fn run_query_applies_state_transitions() {
    let bills = twelve_bills();
    let mut state = QueryState::default();

    // Page 2 of the unfiltered list: 12 records / 10 per page.
    state.page_selected(2);
    let page = run_query(&bills, &state, &spec(), 10);
    assert_page!(page, items: 2, total: 12, pages: 2, current: 2);

    // Submitting a search resets to page 1 of the narrowed set.
    state.search_submitted("법률안");
    let page = run_query(&bills, &state, &spec(), 10);
    assert_eq!(page.current_page, 1);
    assert_eq!(page.total_count, 12);

    // Adding a filter narrows further, still page 1.
    state.filter_selected("부결");
    let page = run_query(&bills, &state, &spec(), 10);
    assert_page!(page, items: 4, total: 4, pages: 1, current: 1);
    assert_statuses!(page.items, BillStatus::Rejected);
}
