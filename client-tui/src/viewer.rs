//! Client-side game viewing state. The full game record is fetched once and
//! then navigated entirely locally (no further server calls).

use board::{MoveListCursor, Position, Square, START_FEN};
use search_client::{GamePosition, GameRecord};

/// Navigation state for one fetched game.
pub struct GameViewer {
    /// The game record as served, including PGN tags for the info panel.
    pub game: GameRecord,
    cursor: MoveListCursor<GamePosition>,
    /// Board decoded from the FEN at the cursor (kept in sync with it).
    position: Position,
    /// Manual move-number entry buffer; None while not editing.
    ply_entry: Option<String>,
}

impl GameViewer {
    /// Build a viewer over `game`, starting at `start_index` when it is in
    /// range (e.g. the matched ply of a search hit), at the first position
    /// otherwise.
    pub fn new(game: GameRecord, start_index: Option<usize>) -> Self {
        let cursor = match start_index {
            Some(start) => MoveListCursor::with_start_index(game.positions.clone(), start),
            None => MoveListCursor::new(game.positions.clone()),
        };
        let position = cursor
            .current()
            .and_then(|p| Position::from_fen(&p.fen).ok())
            .unwrap_or_default();
        Self {
            game,
            cursor,
            position,
            ply_entry: None,
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    /// The stored FEN at the cursor, for the FEN display line.
    pub fn fen(&self) -> &str {
        self.cursor
            .current()
            .map(|p| p.fen.as_str())
            .unwrap_or(START_FEN)
    }

    pub fn cursor(&self) -> &MoveListCursor<GamePosition> {
        &self.cursor
    }

    /// One-based display counter: `(current, total)`, `(0, 0)` for a game
    /// without positions.
    pub fn counter(&self) -> (usize, usize) {
        match self.cursor.index() {
            Some(index) => (index + 1, self.cursor.len()),
            None => (0, 0),
        }
    }

    pub fn next(&mut self) {
        self.navigate(|cursor| {
            cursor.next();
        });
    }

    pub fn previous(&mut self) {
        self.navigate(|cursor| {
            cursor.previous();
        });
    }

    pub fn first(&mut self) {
        self.navigate(|cursor| {
            cursor.first();
        });
    }

    pub fn last(&mut self) {
        self.navigate(|cursor| {
            cursor.last();
        });
    }

    // --- Manual move-number entry ---

    pub fn is_entering_ply(&self) -> bool {
        self.ply_entry.is_some()
    }

    pub fn ply_entry(&self) -> Option<&str> {
        self.ply_entry.as_deref()
    }

    pub fn begin_ply_entry(&mut self) {
        self.ply_entry = Some(String::new());
    }

    pub fn push_ply_digit(&mut self, c: char) {
        if !c.is_ascii_digit() {
            return;
        }
        if let Some(buffer) = &mut self.ply_entry {
            if buffer.len() < 4 {
                buffer.push(c);
            }
        }
    }

    pub fn backspace_ply(&mut self) {
        if let Some(buffer) = &mut self.ply_entry {
            buffer.pop();
        }
    }

    pub fn cancel_ply_entry(&mut self) {
        self.ply_entry = None;
    }

    /// Apply the typed move number. Invalid entries abandon the edit with
    /// the cursor unmoved; nothing surfaces to the user.
    pub fn commit_ply_entry(&mut self) {
        let Some(text) = self.ply_entry.take() else {
            return;
        };
        let mut accepted = false;
        self.navigate(|cursor| {
            accepted = cursor.go_to_display_number(&text);
        });
        if !accepted {
            tracing::debug!(entry = %text, "move-number entry out of range; keeping current ply");
        }
    }

    /// Squares of the move that produced the current position, found by
    /// diffing the previous and current boards. None at the first position
    /// or when either FEN is not a legal game position.
    pub fn played_move_squares(&self) -> Option<(Square, Square)> {
        let index = self.cursor.index()?;
        if index == 0 {
            return None;
        }
        let prev_board: cozy_chess::Board = self.cursor.items().get(index - 1)?.fen.parse().ok()?;
        let curr_board: cozy_chess::Board = self.cursor.current()?.fen.parse().ok()?;

        let moving_side = prev_board.side_to_move();
        let mut from_sq = None;
        let mut to_sq = None;

        for sq in (0..64).map(cozy_chess::Square::index) {
            match (prev_board.color_on(sq), curr_board.color_on(sq)) {
                // Vacated by the mover.
                (Some(c), None) if c == moving_side => from_sq = Some(sq),
                // Occupied by the mover, freshly or by capture.
                (None, Some(c)) if c == moving_side => to_sq = Some(sq),
                (Some(c), Some(d)) if c != moving_side && d == moving_side => to_sq = Some(sq),
                _ => {}
            }
        }

        Some((Square::from(from_sq?), Square::from(to_sq?)))
    }

    /// Move the cursor and re-sync the decoded board. A target entry whose
    /// FEN does not decode rolls the cursor back, so the board and the
    /// counter never drift apart.
    fn navigate(&mut self, f: impl FnOnce(&mut MoveListCursor<GamePosition>)) {
        let before = self.cursor.index();
        f(&mut self.cursor);
        if self.cursor.index() == before {
            return;
        }
        match self.cursor.current().map(|p| Position::from_fen(&p.fen)) {
            Some(Ok(position)) => self.position = position,
            _ => {
                tracing::warn!(
                    index = ?self.cursor.index(),
                    game = %self.game.id,
                    "stored position has an invalid FEN; staying put"
                );
                if let Some(index) = before {
                    self.cursor.go_to(index);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(fen: &str, san: Option<&str>) -> GamePosition {
        GamePosition {
            fen: fen.to_string(),
            san: san.map(str::to_string),
        }
    }

    /// Start of a game: initial array, 1. e4, 1... e5, 2. Nf3.
    fn sample_game() -> GameRecord {
        GameRecord {
            id: "g1".to_string(),
            event: Some("Test Open".to_string()),
            site: None,
            date: None,
            white: Some("White".to_string()),
            black: Some("Black".to_string()),
            white_elo: None,
            black_elo: None,
            result: Some("1-0".to_string()),
            eco: None,
            pgn: None,
            positions: vec![
                pos(START_FEN, None),
                pos(
                    "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1",
                    Some("e4"),
                ),
                pos(
                    "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2",
                    Some("e5"),
                ),
                pos(
                    "rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2",
                    Some("Nf3"),
                ),
            ],
        }
    }

    #[test]
    fn starts_at_the_first_position() {
        let viewer = GameViewer::new(sample_game(), None);
        assert_eq!(viewer.counter(), (1, 4));
        assert_eq!(viewer.fen(), START_FEN);
    }

    #[test]
    fn honors_an_in_range_start_index() {
        let viewer = GameViewer::new(sample_game(), Some(2));
        assert_eq!(viewer.counter(), (3, 4));
    }

    #[test]
    fn out_of_range_start_index_falls_back_to_the_first_position() {
        let viewer = GameViewer::new(sample_game(), Some(42));
        assert_eq!(viewer.counter(), (1, 4));
    }

    #[test]
    fn navigation_keeps_board_and_counter_in_sync() {
        let mut viewer = GameViewer::new(sample_game(), None);
        viewer.next();
        assert_eq!(viewer.counter(), (2, 4));
        assert_eq!(viewer.position().to_fen(), viewer.fen());

        viewer.last();
        assert_eq!(viewer.counter(), (4, 4));
        viewer.next();
        assert_eq!(viewer.counter(), (4, 4));

        viewer.first();
        assert_eq!(viewer.counter(), (1, 4));
        viewer.previous();
        assert_eq!(viewer.counter(), (1, 4));
    }

    #[test]
    fn invalid_stored_fen_rolls_the_cursor_back() {
        let mut game = sample_game();
        game.positions[1].fen = "not a fen".to_string();
        let mut viewer = GameViewer::new(game, None);

        viewer.next();
        assert_eq!(viewer.counter(), (1, 4));
        assert_eq!(viewer.fen(), START_FEN);

        // Jumping over the broken entry still works.
        viewer.last();
        assert_eq!(viewer.counter(), (4, 4));
    }

    #[test]
    fn manual_entry_moves_to_a_valid_number() {
        let mut viewer = GameViewer::new(sample_game(), None);
        viewer.begin_ply_entry();
        viewer.push_ply_digit('3');
        viewer.commit_ply_entry();
        assert_eq!(viewer.counter(), (3, 4));
        assert!(!viewer.is_entering_ply());
    }

    #[test]
    fn manual_entry_reverts_silently_on_invalid_input() {
        let mut viewer = GameViewer::new(sample_game(), Some(1));
        for entry in ["0", "5", ""] {
            viewer.begin_ply_entry();
            for c in entry.chars() {
                viewer.push_ply_digit(c);
            }
            viewer.commit_ply_entry();
            assert_eq!(viewer.counter(), (2, 4), "entry {entry:?} must not move");
        }
    }

    #[test]
    fn ply_entry_accepts_only_digits() {
        let mut viewer = GameViewer::new(sample_game(), None);
        viewer.begin_ply_entry();
        viewer.push_ply_digit('x');
        viewer.push_ply_digit('2');
        assert_eq!(viewer.ply_entry(), Some("2"));
        viewer.backspace_ply();
        assert_eq!(viewer.ply_entry(), Some(""));
        viewer.cancel_ply_entry();
        assert!(!viewer.is_entering_ply());
    }

    #[test]
    fn played_move_squares_diff_consecutive_boards() {
        let mut viewer = GameViewer::new(sample_game(), None);
        assert_eq!(viewer.played_move_squares(), None);

        viewer.next();
        let (from, to) = viewer.played_move_squares().unwrap();
        assert_eq!(from, Square::parse("e2").unwrap());
        assert_eq!(to, Square::parse("e4").unwrap());

        viewer.last();
        let (from, to) = viewer.played_move_squares().unwrap();
        assert_eq!(from, Square::parse("g1").unwrap());
        assert_eq!(to, Square::parse("f3").unwrap());
    }
}
