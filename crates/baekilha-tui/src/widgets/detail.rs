//! Detail popup — centred overlay showing every field of one record.
//!
//! Opened with `Enter` on a table row; closed with `Enter` or `Escape`.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget, Wrap},
};

pub struct DetailPopup<'a> {
    /// Label / value pairs from the row's [`RowView`](crate::view::RowView).
    fields: &'a [(String, String)],
    _theme: &'a Theme,
}

impl<'a> DetailPopup<'a> {
    pub fn new(fields: &'a [(String, String)], theme: &'a Theme) -> Self {
        Self { fields, _theme: theme }
    }
}

impl Widget for DetailPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Tall enough for the fields plus room for a wrapped body line.
        let height = (self.fields.len() as u16 + 4).min(area.height);
        let popup = centered_rect(64, height, area);
        Clear.render(popup, buf);

        let block = Block::bordered()
            .title(" 상세 (Esc to close) ")
            .border_style(Style::default().add_modifier(Modifier::BOLD));

        let inner = block.inner(popup);
        block.render(popup, buf);

        let lines: Vec<Line> = self
            .fields
            .iter()
            .map(|(label, value)| {
                Line::from(vec![
                    Span::styled(
                        format!("  {label:<8} "),
                        Style::default().add_modifier(Modifier::DIM),
                    ),
                    Span::raw(value.clone()),
                ])
            })
            .collect();

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
