//! Caller-owned query state — one instance per list view.
//!
//! The engine holds no state between calls; the UI owns a [`QueryState`] per
//! view and passes it to [`run_query`](crate::query::run_query) after every
//! transition. Submitting a new search term or picking a filter jumps back to
//! page 1 so the user always sees the first page of a fresh result set.

use crate::query::FILTER_ALL;

/// Search term, active categorical filter, and current page for one view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub search_term: String,
    /// [`FILTER_ALL`] means no categorical constraint.
    pub active_filter: String,
    /// 1-based; clamped against the result set at query time.
    pub current_page: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            active_filter: FILTER_ALL.to_string(),
            current_page: 1,
        }
    }
}

impl QueryState {
    /// A new search term was submitted; reset to the first page.
    pub fn search_submitted(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.current_page = 1;
    }

    /// A filter value was picked; reset to the first page.
    pub fn filter_selected(&mut self, value: impl Into<String>) {
        self.active_filter = value.into();
        self.current_page = 1;
    }

    /// A page button was pressed; search and filter are untouched.
    /// Page 0 coerces to 1; overshoot is clamped at query time.
    pub fn page_selected(&mut self, page: usize) {
        self.current_page = page.max(1);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state() {
        let s = QueryState::default();
        assert_eq!(s.search_term, "");
        assert_eq!(s.active_filter, FILTER_ALL);
        assert_eq!(s.current_page, 1);
    }

    #[test]
    fn search_resets_page() {
        let mut s = QueryState::default();
        s.page_selected(4);
        s.search_submitted("교육");
        assert_eq!(s.search_term, "교육");
        assert_eq!(s.current_page, 1);
    }

    #[test]
    fn filter_resets_page() {
        let mut s = QueryState::default();
        s.page_selected(3);
        s.filter_selected("가결");
        assert_eq!(s.active_filter, "가결");
        assert_eq!(s.current_page, 1);
    }

    #[test]
    fn page_change_keeps_query() {
        let mut s = QueryState::default();
        s.search_submitted("예산");
        s.filter_selected("부결");
        s.page_selected(2);
        assert_eq!(s.search_term, "예산");
        assert_eq!(s.active_filter, "부결");
        assert_eq!(s.current_page, 2);
    }

    #[test]
    fn page_zero_coerces_to_one() {
        let mut s = QueryState::default();
        s.page_selected(0);
        assert_eq!(s.current_page, 1);
    }
}
