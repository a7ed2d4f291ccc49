//! The structured board representation behind every editing surface.
//!
//! A `Position` is an immutable value: every mutation returns a fresh,
//! well-formed `Position` and leaves the input untouched. None of the
//! operations here check chess legality - this is a free-form board editor,
//! not a move generator. Manual setup may pass through states with zero or
//! several kings; the only invariant maintained is that the value always
//! encodes to a well-formed FEN record.

use crate::types::{CastlingRights, Piece, PieceColor, PieceKind, Square};

/// A full FEN record in structured form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    /// `squares[rank][file]`, rank 0 = rank '1'.
    pub(crate) squares: [[Option<Piece>; 8]; 8],
    pub(crate) side_to_move: PieceColor,
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("no piece on {0}")]
    EmptySource(Square),
    #[error("{0} is not a valid promotion piece")]
    InvalidPromotionKind(PieceKind),
}

impl Position {
    /// The standard starting array.
    pub fn standard() -> Self {
        use PieceKind::{Bishop, King, Knight, Pawn, Queen, Rook};

        let back_rank = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];
        let mut squares = [[None; 8]; 8];
        for (file, &kind) in back_rank.iter().enumerate() {
            squares[0][file] = Some(Piece::new(kind, PieceColor::White));
            squares[1][file] = Some(Piece::new(Pawn, PieceColor::White));
            squares[6][file] = Some(Piece::new(Pawn, PieceColor::Black));
            squares[7][file] = Some(Piece::new(kind, PieceColor::Black));
        }

        Self {
            squares,
            side_to_move: PieceColor::White,
            castling: CastlingRights::all(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// The "clear board" target: white king on e1, black king on e5,
    /// nothing else.
    pub fn kings_only() -> Self {
        let mut squares = [[None; 8]; 8];
        squares[0][4] = Some(Piece::new(PieceKind::King, PieceColor::White));
        squares[4][4] = Some(Piece::new(PieceKind::King, PieceColor::Black));

        Self {
            squares,
            side_to_move: PieceColor::White,
            castling: CastlingRights::none(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, crate::fen::DecodeError> {
        crate::fen::decode(fen)
    }

    pub fn to_fen(&self) -> String {
        crate::fen::encode(self)
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.rank() as usize][square.file() as usize]
    }

    pub fn side_to_move(&self) -> PieceColor {
        self.side_to_move
    }

    pub fn castling(&self) -> CastlingRights {
        self.castling
    }

    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Iterate occupied squares.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        (0..8u8).flat_map(move |rank| {
            (0..8u8).filter_map(move |file| {
                let piece = self.squares[rank as usize][file as usize]?;
                let square = Square::new(file, rank)?;
                Some((square, piece))
            })
        })
    }

    /// Move whatever stands on `from` to `to`, overwriting any occupant
    /// (captures are implicit). Side to move and every other field are left
    /// alone - editing a board is not playing a move.
    pub fn move_piece(&self, from: Square, to: Square) -> Result<Self, EditError> {
        let piece = self.piece_at(from).ok_or(EditError::EmptySource(from))?;
        let mut next = self.clone();
        next.squares[from.rank() as usize][from.file() as usize] = None;
        next.squares[to.rank() as usize][to.file() as usize] = Some(piece);
        Ok(next)
    }

    /// Replace the source square's occupant with a freshly promoted piece on
    /// `to`. Only queen, rook, bishop and knight are accepted.
    pub fn promote(
        &self,
        from: Square,
        to: Square,
        color: PieceColor,
        kind: PieceKind,
    ) -> Result<Self, EditError> {
        if !matches!(
            kind,
            PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight
        ) {
            return Err(EditError::InvalidPromotionKind(kind));
        }
        let mut next = self.clone();
        next.squares[from.rank() as usize][from.file() as usize] = None;
        next.squares[to.rank() as usize][to.file() as usize] = Some(Piece::new(kind, color));
        Ok(next)
    }

    /// Clear a square. Removing from an empty square is a no-op, not an
    /// error.
    pub fn remove_piece(&self, square: Square) -> Self {
        let mut next = self.clone();
        next.squares[square.rank() as usize][square.file() as usize] = None;
        next
    }

    /// Flip the side to move. The typed representation always carries the
    /// field, so this cannot fail.
    pub fn toggle_side_to_move(&self) -> Self {
        let mut next = self.clone();
        next.side_to_move = self.side_to_move.opposite();
        next
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::standard()
    }
}
