//! Forsyth-Edwards Notation codec.
//!
//! Validation here is syntactic well-formedness only: six fields, ranks that
//! sum to eight files, recognized piece letters, parseable counters. Chess
//! legality (king counts, reachable castling rights) is deliberately not
//! checked - the editing surfaces rely on being able to round-trip
//! mid-setup boards.

use crate::position::Position;
use crate::types::{CastlingRights, Piece, PieceColor, Square};

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
pub const KINGS_ONLY_FEN: &str = "8/8/8/4k3/8/8/8/4K3 w - - 0 1";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("expected 6 space-separated fields, found {0}")]
    FieldCount(usize),
    #[error("expected 8 ranks in the placement field, found {0}")]
    RankCount(usize),
    #[error("rank {0} does not describe exactly 8 files")]
    RankWidth(u8),
    #[error("unrecognized piece character '{0}'")]
    InvalidPiece(char),
    #[error("side to move must be 'w' or 'b', found \"{0}\"")]
    InvalidSideToMove(String),
    #[error("invalid castling field \"{0}\"")]
    InvalidCastling(String),
    #[error("invalid en passant square \"{0}\"")]
    InvalidEnPassant(String),
    #[error("halfmove clock \"{0}\" is not a non-negative integer")]
    InvalidHalfmoveClock(String),
    #[error("fullmove number \"{0}\" is not a positive integer")]
    InvalidFullmoveNumber(String),
}

/// Parse a FEN string into a [`Position`].
pub fn decode(fen: &str) -> Result<Position, DecodeError> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() != 6 {
        return Err(DecodeError::FieldCount(fields.len()));
    }

    let squares = decode_placement(fields[0])?;

    let side_to_move = match fields[1] {
        "w" => PieceColor::White,
        "b" => PieceColor::Black,
        other => return Err(DecodeError::InvalidSideToMove(other.to_string())),
    };

    let castling = decode_castling(fields[2])?;

    let en_passant = match fields[3] {
        "-" => None,
        s => Some(Square::parse(s).ok_or_else(|| DecodeError::InvalidEnPassant(s.to_string()))?),
    };

    let halfmove_clock: u32 = fields[4]
        .parse()
        .map_err(|_| DecodeError::InvalidHalfmoveClock(fields[4].to_string()))?;

    let fullmove_number: u32 = fields[5]
        .parse()
        .map_err(|_| DecodeError::InvalidFullmoveNumber(fields[5].to_string()))?;
    if fullmove_number == 0 {
        return Err(DecodeError::InvalidFullmoveNumber(fields[5].to_string()));
    }

    Ok(Position {
        squares,
        side_to_move,
        castling,
        en_passant,
        halfmove_clock,
        fullmove_number,
    })
}

/// Serialize a [`Position`] to its canonical FEN string. Total: every value
/// the mutation operations can produce encodes, and decodes back
/// field-for-field.
pub fn encode(position: &Position) -> String {
    let mut placement = String::new();
    for rank in (0..8usize).rev() {
        let mut empty_run = 0u8;
        for file in 0..8usize {
            match position.squares[rank][file] {
                Some(piece) => {
                    if empty_run > 0 {
                        placement.push((b'0' + empty_run) as char);
                        empty_run = 0;
                    }
                    placement.push(piece.to_fen_char());
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            placement.push((b'0' + empty_run) as char);
        }
        if rank > 0 {
            placement.push('/');
        }
    }

    let side = match position.side_to_move {
        PieceColor::White => 'w',
        PieceColor::Black => 'b',
    };

    let en_passant = position
        .en_passant
        .map(|sq| sq.to_string())
        .unwrap_or_else(|| "-".to_string());

    format!(
        "{} {} {} {} {} {}",
        placement,
        side,
        encode_castling(position.castling),
        en_passant,
        position.halfmove_clock,
        position.fullmove_number
    )
}

fn decode_placement(field: &str) -> Result<[[Option<Piece>; 8]; 8], DecodeError> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err(DecodeError::RankCount(ranks.len()));
    }

    let mut squares = [[None; 8]; 8];
    for (i, rank_str) in ranks.iter().enumerate() {
        // The first listed rank is rank 8.
        let rank = 7 - i;
        let rank_label = 8 - i as u8;
        let mut file = 0usize;
        for c in rank_str.chars() {
            if let Some(run) = c.to_digit(10) {
                if run == 0 {
                    return Err(DecodeError::InvalidPiece(c));
                }
                // A run of 9 overflows the rank and is caught below.
                file += run as usize;
            } else {
                let piece = Piece::from_fen_char(c).ok_or(DecodeError::InvalidPiece(c))?;
                if file > 7 {
                    return Err(DecodeError::RankWidth(rank_label));
                }
                squares[rank][file] = Some(piece);
                file += 1;
            }
            if file > 8 {
                return Err(DecodeError::RankWidth(rank_label));
            }
        }
        if file != 8 {
            return Err(DecodeError::RankWidth(rank_label));
        }
    }
    Ok(squares)
}

fn decode_castling(field: &str) -> Result<CastlingRights, DecodeError> {
    if field == "-" {
        return Ok(CastlingRights::none());
    }
    let mut rights = CastlingRights::none();
    for c in field.chars() {
        let flag = match c {
            'K' => &mut rights.white_kingside,
            'Q' => &mut rights.white_queenside,
            'k' => &mut rights.black_kingside,
            'q' => &mut rights.black_queenside,
            _ => return Err(DecodeError::InvalidCastling(field.to_string())),
        };
        if *flag {
            // duplicate flag
            return Err(DecodeError::InvalidCastling(field.to_string()));
        }
        *flag = true;
    }
    Ok(rights)
}

fn encode_castling(rights: CastlingRights) -> String {
    if rights.is_empty() {
        return "-".to_string();
    }
    let mut out = String::new();
    if rights.white_kingside {
        out.push('K');
    }
    if rights.white_queenside {
        out.push('Q');
    }
    if rights.black_kingside {
        out.push('k');
    }
    if rights.black_queenside {
        out.push('q');
    }
    out
}
