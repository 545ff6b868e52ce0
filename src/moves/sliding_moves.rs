//! Ray-casting generation for rooks, bishops and queens.
//!
//! Each direction is walked one square at a time: empty squares are recorded
//! and the walk continues, an enemy piece is recorded as a capture and ends
//! the ray, a friendly piece ends the ray without being recorded.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{ChessMove, Color, Square};

/// (d_row, d_col) orthogonal directions.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// (d_row, d_col) diagonal directions.
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),
    (1, 0),
    (0, -1),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, -1),
    (-1, 1),
];

pub fn sliding_moves(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
    out: &mut Vec<ChessMove>,
) {
    for &(d_row, d_col) in directions {
        trace_ray(board, from, color, d_row, d_col, out);
    }
}

fn trace_ray(
    board: &Board,
    from: Square,
    color: Color,
    d_row: i8,
    d_col: i8,
    out: &mut Vec<ChessMove>,
) {
    let mut cursor = from;
    while let Some(target) = cursor.offset(d_row, d_col) {
        match board.get(target) {
            None => out.push(ChessMove::new(from, target)),
            Some(piece) => {
                if piece.color != color {
                    out.push(ChessMove::new(from, target));
                }
                break;
            }
        }
        cursor = target;
    }
}
