//! Errors used throughout the rules engine.
//!
//! Two classes of failure exist:
//! - rejected moves (`EmptyStartSquare`, `WrongTurn`, `IllegalMove`) are
//!   recoverable; the game is unchanged and play continues.
//! - `MissingKing` means the board is structurally corrupt. Normal play can
//!   never produce it; only hand-built positions can.

use thiserror::Error;

use crate::game_state::chess_types::{ChessMove, Color, Square};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// No piece stands on the requested start square.
    #[error("no piece at {0}")]
    EmptyStartSquare(Square),

    /// The piece on the start square belongs to the side not on move.
    #[error("piece at {square} is {found}, but it is {expected}'s turn")]
    WrongTurn {
        square: Square,
        expected: Color,
        found: Color,
    },

    /// The destination/promotion pair is not among the legal moves.
    #[error("move {0} is not legal in the current position")]
    IllegalMove(ChessMove),

    /// Check detection was asked about a side that has no king on the board.
    #[error("no {0} king on the board")]
    MissingKing(Color),
}

impl ChessError {
    /// True for the recoverable rejected-move class.
    pub fn is_invalid_move(&self) -> bool {
        !matches!(self, ChessError::MissingKing(_))
    }
}

pub type ChessResult<T> = Result<T, ChessError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_the_reason() {
        let err = ChessError::WrongTurn {
            square: Square::new(7, 5),
            expected: Color::White,
            found: Color::Black,
        };
        assert_eq!(err.to_string(), "piece at (7, 5) is black, but it is white's turn");
        assert_eq!(
            ChessError::MissingKing(Color::Black).to_string(),
            "no black king on the board"
        );
    }

    #[test]
    fn classification() {
        assert!(ChessError::EmptyStartSquare(Square::new(4, 4)).is_invalid_move());
        assert!(!ChessError::MissingKing(Color::White).is_invalid_move());
    }
}
