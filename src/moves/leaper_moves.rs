//! Fixed-offset generation for kings and knights.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{ChessMove, Color, Square};

/// (d_row, d_col) for the eight adjacent squares.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// (d_row, d_col) for the eight L-shaped jumps.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Records each in-bounds offset that is empty or holds an enemy piece.
pub fn leaper_moves(
    board: &Board,
    from: Square,
    color: Color,
    offsets: &[(i8, i8)],
    out: &mut Vec<ChessMove>,
) {
    for &(d_row, d_col) in offsets {
        let Some(target) = from.offset(d_row, d_col) else {
            continue;
        };
        match board.get(target) {
            Some(piece) if piece.color == color => {}
            _ => out.push(ChessMove::new(from, target)),
        }
    }
}
