//! Pagination controls — the row of page buttons under a list view.
//!
//! [`controls`] computes which buttons a renderer should draw for a given
//! page position: prev/next arrows, a window of up to five numbered buttons
//! centred on the current page, and the first/last page with `…` markers when
//! the window detaches from either end. With a single page there is nothing
//! to navigate, so the control row is empty and the renderer hides it.

/// Window width of numbered page buttons.
const WINDOW: usize = 5;

/// One element of the pagination control row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    /// `‹` — go to `current_page - 1`. Present only when not on page 1.
    Prev,
    /// A numbered page button; `current` marks the highlighted one.
    Page { number: usize, current: bool },
    /// `…` — pages elided between the window and the first/last button.
    Ellipsis,
    /// `›` — go to `current_page + 1`. Present only when not on the last page.
    Next,
}

/// Compute the control row for `current_page` of `total_pages`.
///
/// `current_page` is assumed to already be clamped (see
/// [`paginate`](crate::query::paginate)); values outside `[1, total_pages]`
/// are clamped again here so the window stays well-formed.
pub fn controls(total_pages: usize, current_page: usize) -> Vec<PageControl> {
    if total_pages <= 1 {
        return Vec::new();
    }
    let current = current_page.clamp(1, total_pages);

    let mut out = Vec::new();

    if current > 1 {
        out.push(PageControl::Prev);
    }

    // Window of up to WINDOW pages centred on the current one, re-anchored
    // near the ends so the window never shrinks while pages remain.
    let mut start = current.saturating_sub(2).max(1);
    let end = (start + WINDOW - 1).min(total_pages);
    if end - start + 1 < WINDOW {
        start = end.saturating_sub(WINDOW - 1).max(1);
    }

    if start > 1 {
        out.push(PageControl::Page { number: 1, current: false });
        if start > 2 {
            out.push(PageControl::Ellipsis);
        }
    }

    for number in start..=end {
        out.push(PageControl::Page { number, current: number == current });
    }

    if end < total_pages {
        if end < total_pages - 1 {
            out.push(PageControl::Ellipsis);
        }
        out.push(PageControl::Page { number: total_pages, current: false });
    }

    if current < total_pages {
        out.push(PageControl::Next);
    }

    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
