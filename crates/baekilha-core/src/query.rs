//! The list-query engine: stable filtering and clamped pagination.
//!
//! Both operations are pure functions of their inputs. There are no error
//! conditions: an out-of-range page is clamped, a query with no matches
//! yields an empty page, and unknown filter values simply match nothing.
//!
//! # Matching rules
//!
//! A record survives [`filter`] iff
//! - the search term is empty or whitespace-only, **or** its lower-cased form
//!   is a substring of the lower-cased value of at least one searchable
//!   field, **and**
//! - the active filter is [`FILTER_ALL`], **or** the record's filter field
//!   equals the selected value exactly.
//!
//! The relative order of retained records always matches the input order.

use crate::record::Record;
use crate::state::QueryState;

/// Sentinel filter value meaning "no categorical constraint".
pub const FILTER_ALL: &str = "all";

/// Which fields of a record participate in querying.
///
/// `searchable_fields` are substring-matched against the search term;
/// `filter_field` (if any) is compared for exact equality against the active
/// filter value.
#[derive(Debug, Clone, Copy)]
pub struct QuerySpec<'a> {
    pub searchable_fields: &'a [&'a str],
    pub filter_field: Option<&'a str>,
}

/// One page of filtered records, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult<R> {
    /// Contiguous slice of the filtered collection, at most `page_size` long.
    pub items: Vec<R>,
    /// Size of the *filtered* collection, not the unfiltered source.
    pub total_count: usize,
    /// At least 1, even when `total_count == 0`.
    pub total_pages: usize,
    /// Clamped into `[1, total_pages]`.
    pub current_page: usize,
}

/// Apply search and categorical filtering, preserving input order.
pub fn filter<R: Record + Clone>(
    records: &[R],
    search_term: &str,
    active_filter: &str,
    spec: &QuerySpec<'_>,
) -> Vec<R> {
    let term = search_term.trim().to_lowercase();

    records
        .iter()
        .filter(|r| matches_search(*r, &term, spec) && matches_filter(*r, active_filter, spec))
        .cloned()
        .collect()
}

fn matches_search<R: Record>(record: &R, term: &str, spec: &QuerySpec<'_>) -> bool {
    if term.is_empty() {
        return true;
    }
    spec.searchable_fields.iter().any(|name| {
        let value = record
            .field(name)
            .map(|v| v.as_text())
            .unwrap_or_default();
        value.to_lowercase().contains(term)
    })
}

fn matches_filter<R: Record>(record: &R, active_filter: &str, spec: &QuerySpec<'_>) -> bool {
    if active_filter == FILTER_ALL {
        return true;
    }
    let Some(name) = spec.filter_field else {
        // No filter field declared — a non-"all" selection can match nothing.
        return false;
    };
    match record.field(name) {
        Some(value) => value.as_text() == active_filter,
        None => false,
    }
}

/// Slice one page out of an already-filtered collection.
///
/// `page_size` must be positive; `requested_page` is clamped into
/// `[1, total_pages]` (0 coerces to 1). Never indexes out of bounds.
pub fn paginate<R: Clone>(filtered: &[R], page_size: usize, requested_page: usize) -> PageResult<R> {
    debug_assert!(page_size > 0, "page_size must be positive");
    let page_size = page_size.max(1);

    let total_count = filtered.len();
    let total_pages = total_count.div_ceil(page_size).max(1);
    let current_page = requested_page.clamp(1, total_pages);

    let start = (current_page - 1) * page_size;
    let end = (start + page_size).min(total_count);
    let items = if start < total_count {
        filtered[start..end].to_vec()
    } else {
        Vec::new()
    };

    PageResult {
        items,
        total_count,
        total_pages,
        current_page,
    }
}

/// Filter and paginate in one call, driven by the caller-owned [`QueryState`].
pub fn run_query<R: Record + Clone>(
    records: &[R],
    state: &QueryState,
    spec: &QuerySpec<'_>,
    page_size: usize,
) -> PageResult<R> {
    let filtered = filter(records, &state.search_term, &state.active_filter, spec);
    paginate(&filtered, page_size, state.current_page)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
