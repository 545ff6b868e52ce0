//! Geometric move generation for a single square.
//!
//! Geometric moves follow a piece's movement pattern and the current
//! occupancy but ignore check: a move returned here may leave the mover's
//! own king attacked. Legality filtering lives in
//! [`legal_move_generator`](crate::move_generation::legal_move_generator).

use crate::game_state::board::Board;
use crate::game_state::chess_types::{ChessMove, Movement, Piece, Square};
use crate::moves::leaper_moves::leaper_moves;
use crate::moves::pawn_moves::pawn_moves;
use crate::moves::sliding_moves::sliding_moves;

/// Candidate moves for whatever stands on `square`; empty when it is vacant.
pub fn geometric_moves(board: &Board, square: Square) -> Vec<ChessMove> {
    let mut out = Vec::with_capacity(28);
    if let Some(piece) = board.get(square) {
        push_geometric_moves(board, square, piece, &mut out);
    }
    out
}

/// Appends candidates for `piece` standing on `from`.
pub fn push_geometric_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<ChessMove>) {
    match piece.kind.movement() {
        Movement::Slide(directions) => sliding_moves(board, from, piece.color, directions, out),
        Movement::Leap(offsets) => leaper_moves(board, from, piece.color, offsets, out),
        Movement::Pawn => pawn_moves(board, from, piece.color, out),
    }
}

/// Checks every piece's candidates: each starts on the piece's square, stays
/// on the board and never lands on a piece of the same color.
#[cfg(test)]
pub(crate) fn assert_geometric_invariants(board: &Board) {
    use crate::game_state::chess_types::in_bounds;

    for (square, piece) in board.pieces() {
        for mv in geometric_moves(board, square) {
            assert_eq!(mv.start, square, "{mv} does not start on its piece");
            assert!(
                in_bounds(mv.end.row() as i8, mv.end.col() as i8),
                "{mv} leaves the board"
            );
            if let Some(target) = board.get(mv.end) {
                assert_ne!(target.color, piece.color, "{mv} lands on a friendly piece");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, PieceKind};

    #[test]
    fn empty_square_has_no_moves() {
        assert!(geometric_moves(&Board::standard(), Square::new(4, 4)).is_empty());
    }

    #[test]
    fn starting_position_has_twenty_candidates_per_side() {
        let board = Board::standard();
        for color in Color::ALL {
            let total: usize = board
                .pieces_of(color)
                .map(|(square, _)| geometric_moves(&board, square).len())
                .sum();
            assert_eq!(total, 20);
        }
    }

    #[test]
    fn never_targets_friendly_or_off_board_squares() {
        assert_geometric_invariants(&Board::standard());

        // Open lines, pins and captures for both colors.
        assert_geometric_invariants(&Board::from_rows([
            "r...k..r", "p.ppqpb.", "bn..pnp.", "...PN...", ".p..P...", "..N..Q.p", "PPPBBPPP",
            "R...K..R",
        ]));
        // Promotion captures on both back rows.
        assert_geometric_invariants(&Board::from_rows([
            "r...k..r", "Pppp.ppp", ".b...nbN", "nP......", "BBP.P...", "q....N..", "Pp.P..PP",
            "R..Q.RK.",
        ]));
        // Pieces packed against the edges.
        assert_geometric_invariants(&Board::from_rows([
            "Qr.....n", "Rp......", "........", "........", "........", "........", "......Pq",
            "N.....bK",
        ]));
    }

    #[test]
    fn dispatch_matches_movement_table() {
        let mut board = Board::empty();
        let d4 = Square::new(4, 4);
        board.place(d4, Piece::new(Color::White, PieceKind::Queen));
        assert_eq!(geometric_moves(&board, d4).len(), 27);
        board.place(d4, Piece::new(Color::White, PieceKind::Knight));
        assert_eq!(geometric_moves(&board, d4).len(), 8);
        board.place(d4, Piece::new(Color::White, PieceKind::King));
        assert_eq!(geometric_moves(&board, d4).len(), 8);
    }
}
