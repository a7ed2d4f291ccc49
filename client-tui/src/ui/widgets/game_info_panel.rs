//! PGN-tag metadata card for the game viewer.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use search_client::GameRecord;

pub struct GameInfoPanel<'a> {
    pub game: &'a GameRecord,
}

fn tag_line(label: &str, value: Option<&str>) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{label:<8}"),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(value.unwrap_or("N/A").to_string()),
    ])
}

fn player_line(label: &str, name: Option<&str>, elo: Option<u32>) -> Line<'static> {
    let value = match (name, elo) {
        (Some(name), Some(elo)) => format!("{name} ({elo})"),
        (Some(name), None) => name.to_string(),
        (None, _) => "N/A".to_string(),
    };
    tag_line(label, Some(&value))
}

impl Widget for GameInfoPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let game = self.game;
        let lines = vec![
            tag_line("Event", game.event.as_deref()),
            tag_line("Site", game.site.as_deref()),
            tag_line("Date", game.date.as_deref()),
            player_line("White", game.white.as_deref(), game.white_elo),
            player_line("Black", game.black.as_deref(), game.black_elo),
            tag_line("Result", game.result.as_deref()),
            tag_line("ECO", game.eco.as_deref()),
        ];

        Paragraph::new(lines)
            .block(
                Block::default()
                    .title(" Game Information ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .render(area, buf);
    }
}
