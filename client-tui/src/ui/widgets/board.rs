//! Board renderer for a `board::Position`.

use board::{PieceColor, PieceKind, Position, Square};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Widget},
};

const SQUARE_WIDTH: u16 = 5;
const SQUARE_HEIGHT: u16 = 2;

const LIGHT_SQUARE: Color = Color::Rgb(240, 217, 181);
const DARK_SQUARE: Color = Color::Rgb(181, 136, 99);
const LIGHT_HIGHLIGHT: Color = Color::LightYellow;
const DARK_HIGHLIGHT: Color = Color::Yellow;

pub struct BoardWidget<'a> {
    pub position: &'a Position,
    /// Squares tinted as the most recently played move.
    pub highlights: &'a [Square],
    pub remove_mode: bool,
}

impl<'a> BoardWidget<'a> {
    pub fn new(position: &'a Position) -> Self {
        Self {
            position,
            highlights: &[],
            remove_mode: false,
        }
    }

    pub fn highlights(mut self, highlights: &'a [Square]) -> Self {
        self.highlights = highlights;
        self
    }

    pub fn remove_mode(mut self, remove_mode: bool) -> Self {
        self.remove_mode = remove_mode;
        self
    }
}

fn piece_glyph(kind: PieceKind) -> char {
    match kind {
        PieceKind::King => '\u{265a}',
        PieceKind::Queen => '\u{265b}',
        PieceKind::Rook => '\u{265c}',
        PieceKind::Bishop => '\u{265d}',
        PieceKind::Knight => '\u{265e}',
        PieceKind::Pawn => '\u{265f}',
    }
}

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (title, border_color) = if self.remove_mode {
            (" Board - remove mode: click square to clear ", Color::Red)
        } else {
            (" Board ", Color::Cyan)
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));
        let inner = block.inner(area);
        block.render(area, buf);

        let board_width = SQUARE_WIDTH * 8 + 2; // squares + rank labels
        let board_height = SQUARE_HEIGHT * 8 + 1; // squares + file labels
        if inner.width < board_width || inner.height < board_height {
            buf.set_string(
                inner.x,
                inner.y,
                "terminal too small for the board",
                Style::default().fg(Color::DarkGray),
            );
            return;
        }
        let offset_x = inner.x + (inner.width - board_width) / 2 + 2;
        let offset_y = inner.y + (inner.height - board_height) / 2;

        for rank in 0..8u8 {
            // Rank 8 is drawn first.
            let row = 7 - rank;
            let y = offset_y + u16::from(row) * SQUARE_HEIGHT;
            buf.set_string(
                offset_x - 2,
                y + SQUARE_HEIGHT / 2,
                format!("{}", rank + 1),
                Style::default().fg(Color::DarkGray),
            );

            for file in 0..8u8 {
                let x = offset_x + u16::from(file) * SQUARE_WIDTH;
                let Some(square) = Square::new(file, rank) else {
                    continue;
                };
                let is_light = (file + rank) % 2 == 1;
                let highlighted = self.highlights.contains(&square);
                let bg = match (highlighted, is_light) {
                    (true, true) => LIGHT_HIGHLIGHT,
                    (true, false) => DARK_HIGHLIGHT,
                    (false, true) => LIGHT_SQUARE,
                    (false, false) => DARK_SQUARE,
                };

                for dy in 0..SQUARE_HEIGHT {
                    let content = if dy == SQUARE_HEIGHT / 2 {
                        match self.position.piece_at(square) {
                            Some(piece) => {
                                let mut text = String::new();
                                let pad = (SQUARE_WIDTH as usize - 1) / 2;
                                text.push_str(&" ".repeat(pad));
                                text.push(piece_glyph(piece.kind));
                                text.push_str(&" ".repeat(SQUARE_WIDTH as usize - pad - 1));
                                text
                            }
                            None => " ".repeat(SQUARE_WIDTH as usize),
                        }
                    } else {
                        " ".repeat(SQUARE_WIDTH as usize)
                    };

                    let fg = match self.position.piece_at(square).map(|p| p.color) {
                        Some(PieceColor::White) => Color::White,
                        Some(PieceColor::Black) => Color::Black,
                        None => Color::Reset,
                    };
                    buf.set_string(
                        x,
                        y + dy,
                        content,
                        Style::default()
                            .fg(fg)
                            .bg(bg)
                            .add_modifier(Modifier::BOLD),
                    );
                }
            }
        }

        // File labels below the board.
        let label_y = offset_y + SQUARE_HEIGHT * 8;
        for file in 0..8u16 {
            let x = offset_x + file * SQUARE_WIDTH + SQUARE_WIDTH / 2;
            buf.set_string(
                x,
                label_y,
                format!("{}", (b'a' + file as u8) as char),
                Style::default().fg(Color::DarkGray),
            );
        }
    }
}
