//! Board-level move application.
//!
//! `play_on_board` mutates a board in place and is used both for the
//! authoritative board inside a game and for probe copies produced by
//! `simulate_move`. Neither checks legality.

use crate::game_state::board::Board;
use crate::game_state::castling_state::CastleSide;
use crate::game_state::chess_types::{ChessMove, Piece, Square};

/// Moves the piece on `mv.start` to `mv.end`, promoting if requested, and
/// hops the rook when a king travels two columns. Returns the piece that was
/// standing on the destination, if any.
pub fn play_on_board(board: &mut Board, mv: &ChessMove) -> Option<Piece> {
    let moved = board.remove(mv.start)?;
    let placed = match mv.promotion {
        Some(kind) => Piece::new(moved.color, kind),
        None => moved,
    };
    let captured = board.get(mv.end);
    board.place(mv.end, placed);

    if mv.is_castling_by(moved.kind) {
        if let Some(side) = CastleSide::of_king_move(mv) {
            let row = mv.start.row();
            let rook_from = Square::new(row, side.rook_home_col());
            if let Some(rook) = board.remove(rook_from) {
                board.place(Square::new(row, side.rook_landing_col()), rook);
            }
        }
    }

    captured
}

/// Clone-on-probe: the position after `mv`, leaving `board` untouched.
pub fn simulate_move(board: &Board, mv: &ChessMove) -> Board {
    let mut next = board.clone();
    play_on_board(&mut next, mv);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, PieceKind};

    #[test]
    fn simulate_leaves_source_board_untouched() {
        let board = Board::standard();
        let mv = ChessMove::new(Square::new(2, 5), Square::new(4, 5));
        let next = simulate_move(&board, &mv);
        assert_eq!(board, Board::standard());
        assert!(next.is_empty(Square::new(2, 5)));
        assert_eq!(
            next.get(Square::new(4, 5)),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
    }

    #[test]
    fn capture_returns_victim() {
        let mut board = Board::empty();
        let rook = Piece::new(Color::White, PieceKind::Rook);
        let knight = Piece::new(Color::Black, PieceKind::Knight);
        board.place(Square::new(1, 1), rook);
        board.place(Square::new(6, 1), knight);
        let captured = play_on_board(&mut board, &ChessMove::new(Square::new(1, 1), Square::new(6, 1)));
        assert_eq!(captured, Some(knight));
        assert_eq!(board.get(Square::new(6, 1)), Some(rook));
        assert_eq!(board.pieces().count(), 1);
    }

    #[test]
    fn promotion_replaces_pawn() {
        let mut board = Board::empty();
        board.place(Square::new(7, 1), Piece::new(Color::White, PieceKind::Pawn));
        let mv = ChessMove::promoting(Square::new(7, 1), Square::new(8, 1), PieceKind::Knight);
        play_on_board(&mut board, &mv);
        assert_eq!(
            board.get(Square::new(8, 1)),
            Some(Piece::new(Color::White, PieceKind::Knight))
        );
        assert!(board.is_empty(Square::new(7, 1)));
    }

    #[test]
    fn castling_hops_the_rook() {
        let mut board = Board::empty();
        let king = Piece::new(Color::Black, PieceKind::King);
        let rook = Piece::new(Color::Black, PieceKind::Rook);
        board.place(Square::new(8, 5), king);
        board.place(Square::new(8, 1), rook);
        board.place(Square::new(8, 8), rook);

        play_on_board(&mut board, &ChessMove::new(Square::new(8, 5), Square::new(8, 3)));
        assert_eq!(board.get(Square::new(8, 3)), Some(king));
        assert_eq!(board.get(Square::new(8, 4)), Some(rook));
        assert!(board.is_empty(Square::new(8, 1)));
        assert_eq!(board.get(Square::new(8, 8)), Some(rook));
    }

    #[test]
    fn empty_start_is_a_no_op() {
        let mut board = Board::standard();
        let captured = play_on_board(&mut board, &ChessMove::new(Square::new(4, 4), Square::new(5, 4)));
        assert_eq!(captured, None);
        assert_eq!(board, Board::standard());
    }
}
