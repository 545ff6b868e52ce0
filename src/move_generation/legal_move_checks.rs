//! Attack and check detection.
//!
//! A square is attacked when any enemy geometric move ends on it. Every
//! query regenerates the enemy candidates from scratch; this is the dominant
//! cost of legality filtering.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::piece_moves::push_geometric_moves;

pub fn king_square(board: &Board, color: Color) -> ChessResult<Square> {
    board.find_king(color).ok_or_else(|| {
        tracing::warn!(%color, "check detection on a board without a king");
        ChessError::MissingKing(color)
    })
}

/// Meant for occupied squares: a pawn push onto an empty `square` also counts.
pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    let mut candidates = Vec::with_capacity(28);
    board.pieces_of(attacker_color).any(|(from, piece)| {
        candidates.clear();
        push_geometric_moves(board, from, piece, &mut candidates);
        candidates.iter().any(|mv| mv.end == square)
    })
}

pub fn is_in_check(board: &Board, color: Color) -> ChessResult<bool> {
    let king_sq = king_square(board, color)?;
    Ok(is_square_attacked(board, king_sq, color.opposite()))
}

/// Enemy pieces whose geometric moves reach `square`.
pub fn attackers_to_square(board: &Board, square: Square, attacker_color: Color) -> Vec<Square> {
    let mut candidates = Vec::with_capacity(28);
    board
        .pieces_of(attacker_color)
        .filter(|&(from, piece)| {
            candidates.clear();
            push_geometric_moves(board, from, piece, &mut candidates);
            candidates.iter().any(|mv| mv.end == square)
        })
        .map(|(from, _)| from)
        .collect()
}
