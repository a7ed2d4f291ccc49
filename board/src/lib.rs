//! Shared board-editing core for the fenseek client.
//!
//! Every interactive surface builds on the same four pieces: the FEN codec,
//! the pure mutation operations on [`Position`], the bounded
//! [`MoveListCursor`], and the [`BoardEditor`] controller that ties them to
//! UI events. All of it is synchronous and allocation-light; nothing here
//! knows about HTTP, rendering, or chess legality.

pub mod editor;
pub mod fen;
pub mod navigator;
pub mod position;
pub mod types;

pub use editor::{BoardEditor, EditorError};
pub use fen::{DecodeError, KINGS_ONLY_FEN, START_FEN};
pub use navigator::MoveListCursor;
pub use position::{EditError, Position};
pub use types::{CastlingRights, Piece, PieceColor, PieceKind, Square};
