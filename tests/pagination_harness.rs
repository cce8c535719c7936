//! Pagination harness — page maths and the windowed control strip.
//!
//! # What this covers
//!
//! - **Partition property** (proptest): over arbitrary corpus sizes and page
//!   sizes, walking every page in order reproduces the input exactly once,
//!   with no record duplicated or dropped.
//! - **Clamping**: any requested page lands inside `1..=total_pages`; page 0
//!   and page 99 are requests, not errors.
//! - **Control strip**: the pager emits a 5-wide window centred on the
//!   current page, re-anchored at either end, with first/last shortcuts and
//!   ellipses only when pages are actually hidden.
//!
//! # Running
//!
//! ```sh
//! cargo test --test pagination_harness
//! ```

mod common;
use common::*;

use baekilha::pager::{controls, PageControl};
use baekilha::query::paginate;
use baekilha::Bill;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Scenario tests
// ---------------------------------------------------------------------------

#[test]
fn twelve_records_split_ten_two() {
    let bills = twelve_bills();
    let first = paginate(&bills, 10, 1);
    assert_page!(first, items: 10, total: 12, pages: 2, current: 1);

    let second = paginate(&bills, 10, 2);
    assert_page!(second, items: 2, total: 12, pages: 2, current: 2);
    assert_eq!(second.items[0].id, 11);
}

#[test]
fn overshoot_clamps_to_last_page() {
    let bills = twelve_bills();
    let page = paginate(&bills, 10, 99);
    assert_page!(page, items: 2, total: 12, pages: 2, current: 2);
}

#[test]
fn page_zero_clamps_to_first() {
    let bills = twelve_bills();
    let page = paginate(&bills, 10, 0);
    assert_eq!(page.current_page, 1);
    assert_eq!(page.items[0].id, 1);
}

#[test]
fn empty_input_has_one_empty_page() {
    let bills: Vec<Bill> = Vec::new();
    let page = paginate(&bills, 10, 7);
    assert_page!(page, items: 0, total: 0, pages: 1, current: 1);
}

#[test]
fn exact_multiple_has_no_trailing_page() {
    let bills = bill_corpus(20);
    let page = paginate(&bills, 10, 3);
    assert_page!(page, items: 10, total: 20, pages: 2, current: 2);
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    /// Walking all pages in order reproduces the corpus exactly.
    #[test]
    fn pages_partition_the_corpus(n in 0usize..200, page_size in 1usize..20) {
        let bills = bill_corpus(n);
        let total_pages = paginate(&bills, page_size, 1).total_pages;

        let mut walked: Vec<Bill> = Vec::new();
        for page_no in 1..=total_pages {
            let page = paginate(&bills, page_size, page_no);
            prop_assert_eq!(page.current_page, page_no);
            prop_assert!(page.items.len() <= page_size);
            // Only the last page may be short, and only when the corpus
            // isn't an exact multiple of the page size.
            if page_no < total_pages && !bills.is_empty() {
                prop_assert_eq!(page.items.len(), page_size);
            }
            walked.extend(page.items);
        }
        prop_assert_eq!(walked, bills);
    }

    /// Any requested page number lands inside the valid range.
    #[test]
    fn current_page_is_always_in_range(
        n in 0usize..200,
        page_size in 1usize..20,
        requested in 0usize..1000,
    ) {
        let bills = bill_corpus(n);
        let page = paginate(&bills, page_size, requested);
        prop_assert!(page.current_page >= 1);
        prop_assert!(page.current_page <= page.total_pages);
        prop_assert!(page.total_pages >= 1);
    }

    /// The control strip always marks exactly the current page, and page
    /// numbers within the window are strictly increasing.
    #[test]
    fn controls_mark_exactly_one_current_page(total in 2usize..40, current in 1usize..40) {
        let current = current.min(total);
        let strip = controls(total, current);

        let marked: Vec<usize> = strip
            .iter()
            .filter_map(|c| match c {
                PageControl::Page { number, current: true } => Some(*number),
                _ => None,
            })
            .collect();
        prop_assert_eq!(marked, vec![current]);

        let numbers: Vec<usize> = strip
            .iter()
            .filter_map(|c| match c {
                PageControl::Page { number, .. } => Some(*number),
                _ => None,
            })
            .collect();
        let mut sorted = numbers.clone();
        sorted.sort_unstable();
        sorted.dedup();
        prop_assert_eq!(numbers, sorted);
    }
}

// ---------------------------------------------------------------------------
// Control strip scenarios
// ---------------------------------------------------------------------------

fn numbers(strip: &[PageControl]) -> Vec<usize> {
    strip
        .iter()
        .filter_map(|c| match c {
            PageControl::Page { number, .. } => Some(*number),
            _ => None,
        })
        .collect()
}

#[test]
fn single_page_renders_no_controls() {
    assert!(controls(1, 1).is_empty());
    assert!(controls(0, 1).is_empty());
}

#[test]
fn mid_range_window_shows_first_and_last() {
    let strip = controls(12, 6);
    assert_eq!(numbers(&strip), vec![1, 4, 5, 6, 7, 8, 12]);
    assert_eq!(
        strip.iter().filter(|c| **c == PageControl::Ellipsis).count(),
        2
    );
    assert!(strip.contains(&PageControl::Prev));
    assert!(strip.contains(&PageControl::Next));
}

#[test]
fn first_page_hides_prev_button() {
    let strip = controls(12, 1);
    assert!(!strip.contains(&PageControl::Prev));
    assert!(strip.contains(&PageControl::Next));
    assert_eq!(numbers(&strip), vec![1, 2, 3, 4, 5, 12]);
}

#[test]
fn last_page_hides_next_button() {
    let strip = controls(12, 12);
    assert!(strip.contains(&PageControl::Prev));
    assert!(!strip.contains(&PageControl::Next));
    assert_eq!(numbers(&strip), vec![1, 8, 9, 10, 11, 12]);
}
