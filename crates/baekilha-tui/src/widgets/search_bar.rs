//! Search bar widget — text input plus the active-filter readout at the
//! bottom of the screen.
//!
//! # Editing
//!
//! - `Char(c)` inserts at the cursor.
//! - `Backspace` deletes the character before the cursor.
//! - `Nav(Left)` / `Nav(Right)` move the cursor (arrow keys while this pane
//!   is focused).
//!
//! The app shell intercepts `Enter` itself: it submits the typed text to the
//! tab's query state, which resets back to page 1.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use baekilha_core::FILTER_ALL;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct SearchBarState {
    /// The text being edited. Submitted to the query state on `Enter`.
    pub input: String,
    /// Byte offset of the cursor within `input`.
    pub cursor: usize,
}

impl SearchBarState {
    /// Handle a key event from the app shell. Only text-editing events are
    /// acted on; everything else is ignored.
    pub fn handle(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Char(c) => {
                self.input.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                tracing::debug!(input = %self.input, cursor = self.cursor, "search: char inserted");
            }
            AppEvent::Backspace => {
                if self.cursor > 0 {
                    // Walk back one char boundary
                    let prev = self.input[..self.cursor]
                        .char_indices()
                        .last()
                        .map(|(i, _)| i)
                        .unwrap_or(0);
                    self.input.remove(prev);
                    self.cursor = prev;
                    tracing::debug!(input = %self.input, cursor = self.cursor, "search: backspace");
                }
            }
            AppEvent::Nav(Direction::Left) => {
                if self.cursor > 0 {
                    self.cursor = self.input[..self.cursor]
                        .char_indices()
                        .last()
                        .map(|(i, _)| i)
                        .unwrap_or(0);
                }
            }
            AppEvent::Nav(Direction::Right) => {
                if self.cursor < self.input.len() {
                    let next = self.input[self.cursor..]
                        .char_indices()
                        .nth(1)
                        .map(|(i, _)| self.cursor + i)
                        .unwrap_or(self.input.len());
                    self.cursor = next;
                }
            }
            _ => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct SearchBar<'a> {
    state: &'a SearchBarState,
    /// The filter currently applied to the table, shown in the readout.
    active_filter: &'a str,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> SearchBar<'a> {
    pub fn new(
        state: &'a SearchBarState,
        active_filter: &'a str,
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self { state, active_filter, focused, theme }
    }

    /// Absolute terminal position of the text cursor within this widget's
    /// rendered area. Pass to `frame.set_cursor_position()` after rendering.
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        // The block adds 1-cell borders; text starts at (area.x+1, area.y+1).
        let col = self.state.input[..self.state.cursor].chars().count() as u16;
        let x = (area.x + 1 + col).min(area.right().saturating_sub(1));
        let y = area.y + 1;
        (x, y)
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };

        let block = Block::bordered()
            .title("검색")
            .border_style(border_style);

        let inner = block.inner(area);
        block.render(area, buf);

        // Split inner area: search text (fill) | filter readout (fixed width)
        let chunks = Layout::default()
            .direction(LayoutDir::Horizontal)
            .constraints([Constraint::Fill(1), Constraint::Length(24)])
            .split(inner);

        let input_line = if self.state.input.is_empty() && !self.focused {
            Line::from(Span::styled(
                "press / to search",
                Style::default().add_modifier(Modifier::DIM),
            ))
        } else {
            Line::from(self.state.input.as_str())
        };
        Paragraph::new(input_line).render(chunks[0], buf);

        // Filter readout:  filter: 가결   (f to cycle)
        let label = if self.active_filter == FILTER_ALL {
            "전체".to_string()
        } else {
            self.active_filter.to_string()
        };
        let readout = Line::from(vec![
            Span::styled("filter: ", Style::default().add_modifier(Modifier::DIM)),
            Span::styled(label, Style::default().add_modifier(Modifier::BOLD)),
        ]);
        Paragraph::new(readout).render(chunks[1], buf);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_insert_and_backspace() {
        let mut s = SearchBarState::default();
        s.handle(&AppEvent::Char('교'));
        s.handle(&AppEvent::Char('육'));
        assert_eq!(s.input, "교육");
        assert_eq!(s.cursor, "교육".len());
        s.handle(&AppEvent::Backspace);
        assert_eq!(s.input, "교");
        assert_eq!(s.cursor, "교".len());
    }

    fn typed(text: &str) -> SearchBarState {
        let mut s = SearchBarState::default();
        for c in text.chars() {
            s.handle(&AppEvent::Char(c));
        }
        s
    }

    #[test]
    fn cursor_moves_by_char_boundary() {
        let mut s = typed("교육");
        s.handle(&AppEvent::Nav(Direction::Left));
        assert_eq!(s.cursor, "교".len());
        s.handle(&AppEvent::Nav(Direction::Left));
        assert_eq!(s.cursor, 0);
        s.handle(&AppEvent::Nav(Direction::Left));
        assert_eq!(s.cursor, 0);
        s.handle(&AppEvent::Nav(Direction::Right));
        assert_eq!(s.cursor, "교".len());
    }

    #[test]
    fn mid_string_insert() {
        let mut s = typed("ab");
        s.handle(&AppEvent::Nav(Direction::Left));
        s.handle(&AppEvent::Char('x'));
        assert_eq!(s.input, "axb");
    }
}
