//! Record table — the paged result list that fills the centre of the screen.
//!
//! # Navigation (when the table is focused)
//!
//! | Key | Action |
//! |-----|--------|
//! | `↑` / `k` | Move cursor up one row |
//! | `↓` / `j` | Move cursor down one row |
//! | `]` / `PageDown` | Next page |
//! | `[` / `PageUp` | Previous page |
//! | `g` | Jump back to page 1 |
//! | `Enter` | Open the detail popup for the cursor row |
//!
//! The bottom border carries the pagination strip, rendered from the
//! [`PageControl`] sequence the pager computed for the current page, plus the
//! total match count. An empty page renders a single dimmed placeholder row
//! instead of an error.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use crate::view::{CellHint, ColumnWidth, PageView};
use baekilha_core::PageControl;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Cell, Row, Table, Widget},
};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// Cursor position within the currently rendered page.
#[derive(Debug, Default)]
pub struct RecordTableState {
    /// Index of the highlighted row, relative to the page (0-based).
    pub cursor: usize,
}

impl RecordTableState {
    /// Handle a navigation event. `row_count` is the number of rows on the
    /// page being displayed; the cursor never leaves `0..row_count`.
    pub fn handle(&mut self, event: &AppEvent, row_count: usize) {
        match event {
            AppEvent::Nav(Direction::Up) => {
                self.cursor = self.cursor.saturating_sub(1);
                tracing::debug!(cursor = self.cursor, "table: cursor up");
            }
            AppEvent::Nav(Direction::Down) => {
                if self.cursor + 1 < row_count {
                    self.cursor += 1;
                }
                tracing::debug!(cursor = self.cursor, "table: cursor down");
            }
            _ => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct RecordTable<'a> {
    view: &'a PageView,
    state: &'a RecordTableState,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> RecordTable<'a> {
    pub fn new(
        view: &'a PageView,
        state: &'a RecordTableState,
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self { view, state, focused, theme }
    }

    fn cell_style(&self, hint: &CellHint, text: &str) -> Style {
        match hint {
            CellHint::Plain => Style::default(),
            CellHint::Dim => Style::default().add_modifier(Modifier::DIM),
            CellHint::Status(status) => self.theme.status_style(*status),
            CellHint::Party => self.theme.party_style(text),
            CellHint::New => self.theme.badge_new,
        }
    }
}

impl Widget for RecordTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };

        let block = Block::bordered().border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let widths: Vec<Constraint> = self
            .view
            .columns
            .iter()
            .map(|c| match c.width {
                ColumnWidth::Fixed(n) => Constraint::Length(n),
                ColumnWidth::Fill => Constraint::Fill(1),
            })
            .collect();

        let header = Row::new(
            self.view
                .columns
                .iter()
                .map(|c| Cell::from(Span::styled(c.title, Style::default().add_modifier(Modifier::BOLD)))),
        );

        let rows: Vec<Row> = if self.view.rows.is_empty() {
            vec![Row::new(vec![Cell::from(Span::styled(
                "조건에 맞는 결과가 없습니다",
                Style::default().add_modifier(Modifier::DIM),
            ))])]
        } else {
            self.view
                .rows
                .iter()
                .enumerate()
                .map(|(i, row)| {
                    let cells = row.cells.iter().map(|cell| {
                        let mut style = self.cell_style(&cell.hint, &cell.text);
                        if self.focused && i == self.state.cursor {
                            style = style.add_modifier(Modifier::REVERSED);
                        }
                        Cell::from(Span::styled(cell.text.clone(), style))
                    });
                    Row::new(cells)
                })
                .collect()
        };

        Table::new(rows, widths)
            .header(header)
            .column_spacing(1)
            .render(inner, buf);

        // Pagination strip drawn over the bottom border.
        let footer = footer_line(self.view);
        let max = area.width.saturating_sub(4);
        let x = area.x + 2;
        let y = area.bottom().saturating_sub(1);
        buf.set_line(x, y, &footer, max);
    }
}

// ---------------------------------------------------------------------------
// Footer rendering
// ---------------------------------------------------------------------------

/// Render the pagination controls and match count as one line, e.g.
/// ` ‹ 1 … 4 [5] 6 … 12 › │ 117건 `.
fn footer_line(view: &PageView) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = vec![Span::raw(" ")];

    for control in &view.controls {
        match control {
            PageControl::Prev => spans.push(Span::raw("‹ ")),
            PageControl::Next => spans.push(Span::raw("› ")),
            PageControl::Ellipsis => {
                spans.push(Span::styled("… ", Style::default().add_modifier(Modifier::DIM)))
            }
            PageControl::Page { number, current } => {
                if *current {
                    spans.push(Span::styled(
                        format!("[{number}] "),
                        Style::default().add_modifier(Modifier::BOLD),
                    ));
                } else {
                    spans.push(Span::raw(format!("{number} ")));
                }
            }
        }
    }

    if !view.controls.is_empty() {
        spans.push(Span::styled("│ ", Style::default().add_modifier(Modifier::DIM)));
    }
    spans.push(Span::styled(
        format!("{}건 ", view.total_count),
        Style::default().add_modifier(Modifier::DIM),
    ));

    Line::from(spans)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
