//! Castling eligibility derived from the move log.
//!
//! `CastlingState` is a fold over the moves played: [`CastlingState::observe`]
//! is the only state transition, flags only ever go from "unmoved" to
//! "moved", and replaying the same move list always rebuilds the same state.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{
    KINGSIDE_ROOK_HOME_COL, KING_HOME_COL, QUEENSIDE_ROOK_HOME_COL,
};
use crate::game_state::chess_types::{ChessMove, Color, Piece, PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    pub const ALL: [CastleSide; 2] = [CastleSide::Kingside, CastleSide::Queenside];

    #[inline]
    pub const fn rook_home_col(self) -> u8 {
        match self {
            CastleSide::Kingside => KINGSIDE_ROOK_HOME_COL,
            CastleSide::Queenside => QUEENSIDE_ROOK_HOME_COL,
        }
    }

    /// Column the rook jumps to once the king has castled.
    #[inline]
    pub const fn rook_landing_col(self) -> u8 {
        match self {
            CastleSide::Kingside => 6,
            CastleSide::Queenside => 4,
        }
    }

    #[inline]
    pub const fn king_landing_col(self) -> u8 {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 3,
        }
    }

    /// Columns between king and rook that must be empty.
    #[inline]
    pub const fn between_cols(self) -> &'static [u8] {
        match self {
            CastleSide::Kingside => &[6, 7],
            CastleSide::Queenside => &[2, 3, 4],
        }
    }

    /// Columns the king passes through and lands on, in travel order.
    #[inline]
    pub const fn king_path_cols(self) -> [u8; 2] {
        match self {
            CastleSide::Kingside => [6, 7],
            CastleSide::Queenside => [4, 3],
        }
    }

    /// Side of a king move that displaces the king by two columns.
    pub fn of_king_move(mv: &ChessMove) -> Option<Self> {
        match mv.col_delta() {
            2 => Some(CastleSide::Kingside),
            -2 => Some(CastleSide::Queenside),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
struct MovedFlags {
    king: bool,
    queenside_rook: bool,
    kingside_rook: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CastlingState {
    // indexed by Color::index()
    flags: [MovedFlags; 2],
}

impl CastlingState {
    /// Nothing has moved yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds eligibility by observing `moves` in order.
    pub fn from_moves<'a, I>(moves: I) -> Self
    where
        I: IntoIterator<Item = &'a ChessMove>,
    {
        moves.into_iter().fold(Self::new(), |mut state, mv| {
            state.observe(mv);
            state
        })
    }

    /// Records one applied move.
    ///
    /// A piece leaving a tracked home square disqualifies it; a move landing
    /// on a rook's home square captured (or replaced) that rook.
    pub fn observe(&mut self, mv: &ChessMove) {
        for color in Color::ALL {
            let home = color.home_row();
            let flags = &mut self.flags[color.index()];

            if mv.start.row() == home {
                match mv.start.col() {
                    KING_HOME_COL => flags.king = true,
                    QUEENSIDE_ROOK_HOME_COL => flags.queenside_rook = true,
                    KINGSIDE_ROOK_HOME_COL => flags.kingside_rook = true,
                    _ => {}
                }
            }

            if mv.end.row() == home {
                match mv.end.col() {
                    QUEENSIDE_ROOK_HOME_COL => flags.queenside_rook = true,
                    KINGSIDE_ROOK_HOME_COL => flags.kingside_rook = true,
                    _ => {}
                }
            }
        }
    }

    pub fn king_moved(&self, color: Color) -> bool {
        self.flags[color.index()].king
    }

    pub fn rook_moved(&self, color: Color, side: CastleSide) -> bool {
        let flags = &self.flags[color.index()];
        match side {
            CastleSide::Kingside => flags.kingside_rook,
            CastleSide::Queenside => flags.queenside_rook,
        }
    }

    /// Neither the king nor the rook of `side` has moved or been captured.
    pub fn has_rights(&self, color: Color, side: CastleSide) -> bool {
        !self.king_moved(color) && !self.rook_moved(color, side)
    }

    /// Rights are intact, king and rook stand on their home squares, and
    /// every square between them is empty. Attack safety is not checked here.
    pub fn can_castle(&self, color: Color, side: CastleSide, board: &Board) -> bool {
        if !self.has_rights(color, side) {
            return false;
        }

        let home = color.home_row();
        let king_in_place = board.get(Square::new(home, KING_HOME_COL))
            == Some(Piece::new(color, PieceKind::King));
        let rook_in_place = board.get(Square::new(home, side.rook_home_col()))
            == Some(Piece::new(color, PieceKind::Rook));
        if !king_in_place || !rook_in_place {
            return false;
        }

        side.between_cols()
            .iter()
            .all(|&col| board.is_empty(Square::new(home, col)))
    }

    pub fn can_castle_kingside(&self, color: Color, board: &Board) -> bool {
        self.can_castle(color, CastleSide::Kingside, board)
    }

    pub fn can_castle_queenside(&self, color: Color, board: &Board) -> bool {
        self.can_castle(color, CastleSide::Queenside, board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(r0: u8, c0: u8, r1: u8, c1: u8) -> ChessMove {
        ChessMove::new(Square::new(r0, c0), Square::new(r1, c1))
    }

    fn castling_board() -> Board {
        let mut board = Board::empty();
        for color in Color::ALL {
            let home = color.home_row();
            board.place(Square::new(home, 5), Piece::new(color, PieceKind::King));
            board.place(Square::new(home, 1), Piece::new(color, PieceKind::Rook));
            board.place(Square::new(home, 8), Piece::new(color, PieceKind::Rook));
        }
        board
    }

    #[test]
    fn fresh_state_allows_both_sides() {
        let state = CastlingState::new();
        let board = castling_board();
        for color in Color::ALL {
            assert!(state.can_castle_kingside(color, &board));
            assert!(state.can_castle_queenside(color, &board));
        }
    }

    #[test]
    fn standard_position_is_blocked() {
        let state = CastlingState::new();
        let board = Board::standard();
        assert!(!state.can_castle_kingside(Color::White, &board));
        assert!(!state.can_castle_queenside(Color::Black, &board));
    }

    #[test]
    fn king_move_clears_both_sides() {
        let mut state = CastlingState::new();
        state.observe(&mv(1, 5, 2, 5));
        assert!(!state.has_rights(Color::White, CastleSide::Kingside));
        assert!(!state.has_rights(Color::White, CastleSide::Queenside));
        assert!(state.has_rights(Color::Black, CastleSide::Kingside));
    }

    #[test]
    fn rook_move_clears_one_side() {
        let mut state = CastlingState::new();
        state.observe(&mv(8, 1, 6, 1));
        assert!(state.rook_moved(Color::Black, CastleSide::Queenside));
        assert!(!state.rook_moved(Color::Black, CastleSide::Kingside));
        assert!(!state.king_moved(Color::Black));
    }

    #[test]
    fn capture_on_rook_home_clears_that_side() {
        let mut state = CastlingState::new();
        // black bishop takes the rook on h1
        state.observe(&mv(3, 6, 1, 8));
        assert!(state.rook_moved(Color::White, CastleSide::Kingside));
        assert!(state.has_rights(Color::White, CastleSide::Queenside));
    }

    #[test]
    fn flags_never_reset() {
        let mut state = CastlingState::new();
        state.observe(&mv(1, 8, 4, 8));
        state.observe(&mv(4, 8, 1, 8));
        // rook back home, still disqualified
        assert!(state.rook_moved(Color::White, CastleSide::Kingside));
    }

    #[test]
    fn fold_matches_incremental_observation() {
        let moves = [mv(2, 5, 4, 5), mv(7, 5, 5, 5), mv(1, 8, 1, 7), mv(8, 5, 7, 5)];
        let mut incremental = CastlingState::new();
        for m in &moves {
            incremental.observe(m);
        }
        assert_eq!(CastlingState::from_moves(&moves), incremental);
        assert!(incremental.king_moved(Color::Black));
        assert!(incremental.rook_moved(Color::White, CastleSide::Kingside));
    }

    #[test]
    fn occupied_between_square_blocks() {
        let state = CastlingState::new();
        let mut board = castling_board();
        board.place(Square::new(1, 2), Piece::new(Color::White, PieceKind::Knight));
        assert!(!state.can_castle_queenside(Color::White, &board));
        assert!(state.can_castle_kingside(Color::White, &board));
    }

    #[test]
    fn missing_rook_blocks() {
        let state = CastlingState::new();
        let mut board = castling_board();
        board.remove(Square::new(8, 8));
        assert!(!state.can_castle_kingside(Color::Black, &board));
        board.place(Square::new(8, 8), Piece::new(Color::White, PieceKind::Rook));
        assert!(!state.can_castle_kingside(Color::Black, &board));
    }

    #[test]
    fn side_geometry() {
        let e1 = Square::new(1, 5);
        assert_eq!(
            CastleSide::of_king_move(&ChessMove::new(e1, Square::new(1, 7))),
            Some(CastleSide::Kingside)
        );
        assert_eq!(
            CastleSide::of_king_move(&ChessMove::new(e1, Square::new(1, 3))),
            Some(CastleSide::Queenside)
        );
        assert_eq!(CastleSide::of_king_move(&ChessMove::new(e1, Square::new(1, 6))), None);
        assert_eq!(CastleSide::Queenside.king_path_cols(), [4, 3]);
    }
}
