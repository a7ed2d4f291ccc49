//! Engine verdict display for the Analyze page.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use search_client::AnalysisResult;

pub struct AnalysisPanel<'a> {
    pub result: Option<&'a AnalysisResult>,
    pub error: Option<&'a str>,
    pub in_flight: bool,
}

fn field(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{label:<12}"),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(value),
    ])
}

impl Widget for AnalysisPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Analysis ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let mut lines = Vec::new();
        if self.in_flight {
            lines.push(Line::from(Span::styled(
                "Fetching analysis...",
                Style::default().fg(Color::DarkGray),
            )));
        } else if let Some(error) = self.error {
            lines.push(Line::from(Span::styled(
                error.to_string(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
        } else if let Some(result) = self.result {
            lines.push(field(
                "Best move",
                result.san.clone().unwrap_or_else(|| "N/A".to_string()),
            ));
            let eval = match (result.eval, result.mate) {
                (_, Some(mate)) => format!("mate in {mate}"),
                (Some(eval), None) => format!("{eval:+.2}"),
                (None, None) => "N/A".to_string(),
            };
            lines.push(field("Evaluation", eval));
            lines.push(field(
                "Depth",
                result
                    .depth
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "N/A".to_string()),
            ));
            lines.push(field(
                "Win chance",
                result
                    .win_chance
                    .map(|w| format!("{w:.2}%"))
                    .unwrap_or_else(|| "N/A".to_string()),
            ));
            if !result.continuation_arr.is_empty() {
                lines.push(field("Main line", result.continuation_arr.join(" ")));
            }
            if let Some(text) = &result.text {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    text.clone(),
                    Style::default().fg(Color::DarkGray),
                )));
            }
        } else {
            lines.push(Line::from(Span::styled(
                "Press G to analyze the position.",
                Style::default().fg(Color::DarkGray),
            )));
        }

        Paragraph::new(lines)
            .block(block)
            .wrap(ratatui::widgets::Wrap { trim: true })
            .render(area, buf);
    }
}
