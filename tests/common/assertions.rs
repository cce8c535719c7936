//! Domain-specific assertion macros for baekilha harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear which query-engine guarantee was violated and on which page
//! of which result set.

// ---------------------------------------------------------------------------
// Page assertions
// ---------------------------------------------------------------------------

/// Assert the full shape of a `PageResult` in one line.
///
/// ```rust
/// assert_page!(page, items: 10, total: 12, pages: 2, current: 1);
/// ```
#[macro_export]
macro_rules! assert_page {
    ($page:expr, items: $items:expr, total: $total:expr, pages: $pages:expr, current: $current:expr) => {{
        let page = &$page;
        if page.items.len() != $items
            || page.total_count != $total
            || page.total_pages != $pages
            || page.current_page != $current
        {
            panic!(
                "assert_page! failed:\n  expected: items={} total={} pages={} current={}\n  actual:   items={} total={} pages={} current={}",
                $items, $total, $pages, $current,
                page.items.len(), page.total_count, page.total_pages, page.current_page
            );
        }
    }};
}

/// Assert that every bill on a page carries the expected status.
///
/// ```rust
/// assert_statuses!(page.items, BillStatus::Passed);
/// ```
#[macro_export]
macro_rules! assert_statuses {
    ($items:expr, $status:expr) => {{
        let expected: baekilha::BillStatus = $status;
        for bill in $items.iter() {
            if bill.status != expected {
                panic!(
                    "assert_statuses! failed: bill {:?} has status {:?}, expected {:?}",
                    bill.title, bill.status, expected
                );
            }
        }
    }};
}
