//! Stateful contract behind every board-editing surface.
//!
//! Each surface (position search setup, analysis setup) owns exactly one
//! `BoardEditor`. The editor guarantees that the displayed position is
//! always the most recently validated state: a rejected operation leaves the
//! position untouched and records a message instead. The raw FEN input text
//! may diverge from the canonical encoding only while the user is typing.

use crate::fen::{self, DecodeError};
use crate::position::{EditError, Position};
use crate::types::{PieceKind, Square};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditorError {
    #[error("empty FEN string; can't load")]
    EmptyInput,
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Edit(#[from] EditError),
}

/// Editable board state owned by a single interactive surface.
#[derive(Debug, Clone)]
pub struct BoardEditor {
    position: Position,
    fen_input: String,
    error: Option<EditorError>,
    remove_mode: bool,
}

impl BoardEditor {
    /// Editor showing the standard starting array.
    pub fn new() -> Self {
        let position = Position::standard();
        let fen_input = position.to_fen();
        Self {
            position,
            fen_input,
            error: None,
            remove_mode: false,
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Canonical FEN of the current (always valid) position.
    pub fn fen(&self) -> String {
        self.position.to_fen()
    }

    /// Raw input text, which tracks the user's typing until the next
    /// successful submit or board edit re-canonicalizes it.
    pub fn fen_input(&self) -> &str {
        &self.fen_input
    }

    pub fn error(&self) -> Option<&EditorError> {
        self.error.as_ref()
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(|e| e.to_string())
    }

    pub fn remove_mode(&self) -> bool {
        self.remove_mode
    }

    pub fn toggle_remove_mode(&mut self) {
        self.remove_mode = !self.remove_mode;
        self.error = None;
    }

    /// Handle a drag-and-drop of the piece on `from` onto `to`. A pawn
    /// dropped on its farthest rank promotes - to `promotion_choice` when
    /// the UI supplies one, to a queen otherwise. Returns whether the drop
    /// was accepted, so rejected drops can snap back.
    pub fn on_piece_drop(
        &mut self,
        from: Square,
        to: Square,
        promotion_choice: Option<PieceKind>,
    ) -> bool {
        let Some(piece) = self.position.piece_at(from) else {
            self.reject(EditError::EmptySource(from).into());
            return false;
        };

        let result = if piece.kind == PieceKind::Pawn && to.is_back_rank_for(piece.color) {
            let kind = promotion_choice.unwrap_or(PieceKind::Queen);
            self.position.promote(from, to, piece.color, kind)
        } else {
            self.position.move_piece(from, to)
        };

        match result {
            Ok(next) => {
                self.accept(next);
                true
            }
            Err(e) => {
                self.reject(e.into());
                false
            }
        }
    }

    /// Handle a click on `square`: removes the occupant while remove mode is
    /// active, otherwise does nothing.
    pub fn on_square_click(&mut self, square: Square) {
        if !self.remove_mode {
            return;
        }
        let next = self.position.remove_piece(square);
        self.accept(next);
    }

    /// Record in-progress typing. Typing clears any stale error but does not
    /// validate - that happens on submit.
    pub fn set_fen_input(&mut self, text: impl Into<String>) {
        self.fen_input = text.into();
        self.error = None;
    }

    /// Validate and adopt a manually entered FEN string. On failure the
    /// displayed position is unchanged and the decode error is surfaced.
    pub fn submit_fen(&mut self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            self.reject(EditorError::EmptyInput);
            return false;
        }
        match fen::decode(trimmed) {
            Ok(position) => {
                self.accept(position);
                self.remove_mode = false;
                true
            }
            Err(e) => {
                self.reject(e.into());
                false
            }
        }
    }

    /// Flip the side to move.
    pub fn switch_sides(&mut self) {
        let next = self.position.toggle_side_to_move();
        self.accept(next);
    }

    /// Back to the standard starting array.
    pub fn reset(&mut self) {
        self.accept(Position::standard());
        self.remove_mode = false;
    }

    /// Down to the two kings.
    pub fn clear_board(&mut self) {
        self.accept(Position::kings_only());
        self.remove_mode = false;
    }

    fn accept(&mut self, position: Position) {
        self.position = position;
        self.fen_input = self.position.to_fen();
        self.error = None;
    }

    fn reject(&mut self, error: EditorError) {
        self.error = Some(error);
    }
}

impl Default for BoardEditor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fen::{KINGS_ONLY_FEN, START_FEN};
    use crate::types::{Piece, PieceColor};

    fn sq(s: &str) -> Square {
        Square::parse(s).unwrap()
    }

    #[test]
    fn starts_on_the_standard_array() {
        let editor = BoardEditor::new();
        assert_eq!(editor.fen(), START_FEN);
        assert_eq!(editor.fen_input(), START_FEN);
        assert!(editor.error().is_none());
        assert!(!editor.remove_mode());
    }

    #[test]
    fn drop_moves_a_piece_and_syncs_the_input_line() {
        let mut editor = BoardEditor::new();
        assert!(editor.on_piece_drop(sq("e2"), sq("e4"), None));
        assert_eq!(editor.position().piece_at(sq("e2")), None);
        assert_eq!(
            editor.position().piece_at(sq("e4")),
            Some(Piece::new(PieceKind::Pawn, PieceColor::White))
        );
        assert_eq!(editor.fen_input(), editor.fen());
        assert!(editor.error().is_none());
    }

    #[test]
    fn drop_from_an_empty_square_is_rejected() {
        let mut editor = BoardEditor::new();
        let before = editor.fen();
        assert!(!editor.on_piece_drop(sq("e5"), sq("e6"), None));
        assert_eq!(editor.fen(), before);
        assert!(matches!(
            editor.error(),
            Some(EditorError::Edit(EditError::EmptySource(_)))
        ));
    }

    #[test]
    fn pawn_reaching_the_far_rank_promotes_to_queen_by_default() {
        let mut editor = BoardEditor::new();
        editor.submit_fen("8/P3k3/8/8/8/8/8/4K3 w - - 0 1");
        assert!(editor.on_piece_drop(sq("a7"), sq("a8"), None));
        assert_eq!(
            editor.position().piece_at(sq("a8")),
            Some(Piece::new(PieceKind::Queen, PieceColor::White))
        );
    }

    #[test]
    fn promotion_honors_the_supplied_kind() {
        let mut editor = BoardEditor::new();
        editor.submit_fen("4k3/8/8/8/8/8/4p3/4K3 b - - 0 1");
        // Black pawn, so the far rank is rank 1.
        assert!(editor.on_piece_drop(sq("e2"), sq("e1"), Some(PieceKind::Rook)));
        assert_eq!(
            editor.position().piece_at(sq("e1")),
            Some(Piece::new(PieceKind::Rook, PieceColor::Black))
        );
    }

    #[test]
    fn pawn_short_of_the_far_rank_just_moves() {
        let mut editor = BoardEditor::new();
        assert!(editor.on_piece_drop(sq("e2"), sq("e3"), Some(PieceKind::Knight)));
        assert_eq!(
            editor.position().piece_at(sq("e3")),
            Some(Piece::new(PieceKind::Pawn, PieceColor::White))
        );
    }

    #[test]
    fn click_removes_only_in_remove_mode() {
        let mut editor = BoardEditor::new();
        editor.on_square_click(sq("e2"));
        assert!(editor.position().piece_at(sq("e2")).is_some());

        editor.toggle_remove_mode();
        editor.on_square_click(sq("e2"));
        assert_eq!(editor.position().piece_at(sq("e2")), None);

        // Clicking an empty square in remove mode stays a no-op.
        let before = editor.fen();
        editor.on_square_click(sq("e2"));
        assert_eq!(editor.fen(), before);
    }

    #[test]
    fn blank_submit_is_an_empty_input_error() {
        let mut editor = BoardEditor::new();
        let before = editor.fen();
        assert!(!editor.submit_fen("   "));
        assert_eq!(editor.fen(), before);
        assert!(matches!(editor.error(), Some(EditorError::EmptyInput)));
    }

    #[test]
    fn submit_is_atomic() {
        let mut editor = BoardEditor::new();

        // Failure: position unchanged, error set.
        let before = editor.fen();
        assert!(!editor.submit_fen("not a fen"));
        assert_eq!(editor.fen(), before);
        assert!(editor.error().is_some());

        // Success: position changed, error cleared.
        assert!(editor.submit_fen(KINGS_ONLY_FEN));
        assert_eq!(editor.fen(), KINGS_ONLY_FEN);
        assert!(editor.error().is_none());
    }

    #[test]
    fn submit_canonicalizes_the_input_line() {
        let mut editor = BoardEditor::new();
        assert!(editor.submit_fen("  8/8/8/4k3/8/8/8/4K3   w - - 0 1  "));
        assert_eq!(editor.fen_input(), KINGS_ONLY_FEN);
    }

    #[test]
    fn typing_clears_a_stale_error() {
        let mut editor = BoardEditor::new();
        editor.submit_fen("");
        assert!(editor.error().is_some());
        editor.set_fen_input("rnbq");
        assert!(editor.error().is_none());
        assert_eq!(editor.fen_input(), "rnbq");
    }

    #[test]
    fn switch_sides_round_trips() {
        let mut editor = BoardEditor::new();
        editor.switch_sides();
        assert_eq!(editor.position().side_to_move(), PieceColor::Black);
        editor.switch_sides();
        assert_eq!(editor.position().side_to_move(), PieceColor::White);
    }

    #[test]
    fn reset_and_clear_leave_remove_mode_off() {
        let mut editor = BoardEditor::new();
        editor.toggle_remove_mode();
        editor.reset();
        assert!(!editor.remove_mode());
        assert_eq!(editor.fen(), START_FEN);

        editor.toggle_remove_mode();
        editor.clear_board();
        assert!(!editor.remove_mode());
        assert_eq!(editor.fen(), KINGS_ONLY_FEN);
    }
}
