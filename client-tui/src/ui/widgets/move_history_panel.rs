//! Move list and counter for the game viewer.

use crate::viewer::GameViewer;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct MoveHistoryPanel<'a> {
    pub viewer: &'a GameViewer,
}

impl Widget for MoveHistoryPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (current, total) = self.viewer.counter();

        let counter = if self.viewer.is_entering_ply() {
            format!(
                " Moves - go to: {}_ ",
                self.viewer.ply_entry().unwrap_or_default()
            )
        } else {
            format!(" Moves {current} / {total} ")
        };

        let block = Block::default()
            .title(counter)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);

        let visible = inner.height as usize;
        let items = self.viewer.cursor().items();
        let selected = current.saturating_sub(1);
        // Keep the selection inside the window.
        let first = selected.saturating_sub(visible.saturating_sub(1) / 2);

        let mut lines = Vec::new();
        for (offset, position) in items.iter().enumerate().skip(first).take(visible) {
            let san = position.san.as_deref().unwrap_or("(start)");
            let label = format!("{:>3}  {san}", offset + 1);
            let style = if offset == selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            lines.push(Line::from(Span::styled(label, style)));
        }

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
