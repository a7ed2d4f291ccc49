//! Ranked search-hit table for the Search page.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Text,
    widgets::{Block, Borders, Cell, Row, Table, Widget},
};
use search_client::SearchHit;

pub struct ResultsPanel<'a> {
    pub results: &'a [SearchHit],
    pub selected: usize,
}

impl Widget for ResultsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Similar Positions (Enter to open) ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        if self.results.is_empty() {
            let inner = block.inner(area);
            block.render(area, buf);
            buf.set_string(
                inner.x,
                inner.y,
                "No results yet - press G to search.",
                Style::default().fg(Color::DarkGray),
            );
            return;
        }

        let header = Row::new(["#", "Players", "Result", "Move", "Score"].map(|h| {
            Cell::from(Text::from(h)).style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        }))
        .height(1);

        let rows: Vec<Row> = self
            .results
            .iter()
            .enumerate()
            .map(|(i, hit)| {
                let players = match (&hit.white, &hit.black) {
                    (Some(w), Some(b)) => format!("{w} - {b}"),
                    _ => hit.game_id.clone(),
                };
                let style = if i == self.selected {
                    Style::default()
                        .fg(Color::Yellow)
                        .bg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                Row::new(vec![
                    Cell::from(format!("{}", i + 1)),
                    Cell::from(players),
                    Cell::from(hit.result.clone().unwrap_or_default()),
                    Cell::from(format!("{}", hit.move_index + 1)),
                    Cell::from(format!("{:.2}", hit.score)),
                ])
                .style(style)
            })
            .collect();

        Table::new(
            rows,
            [
                Constraint::Length(3),
                Constraint::Min(20),
                Constraint::Length(7),
                Constraint::Length(5),
                Constraint::Length(6),
            ],
        )
        .header(header)
        .block(block)
        .render(area, buf);
    }
}
