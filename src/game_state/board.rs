//! 8x8 piece placement grid.
//!
//! `Board` owns placement only and knows nothing about the rules. Every
//! legality probe works on a clone, so the authoritative board held by a
//! [`Game`](crate::game_state::game_state::Game) is never touched by a
//! "what if" check.

use crate::game_state::chess_rules::BACK_RANK_LAYOUT;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    // [row - 1][col - 1]
    buffer: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Board {
    /// A board with no pieces on it.
    pub fn empty() -> Self {
        Self {
            buffer: [[None; 8]; 8],
        }
    }

    /// A board holding the standard 32-piece starting layout.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        board.reset_to_starting_position();
        board
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.buffer[square.row() as usize - 1][square.col() as usize - 1]
    }

    /// Puts `piece` on `square`, replacing any previous occupant.
    #[inline]
    pub fn place(&mut self, square: Square, piece: Piece) {
        *self.at(square) = Some(piece);
    }

    /// Clears `square` and returns whatever stood there.
    #[inline]
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.at(square).take()
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    pub fn reset_to_starting_position(&mut self) {
        self.buffer = [[None; 8]; 8];
        for color in Color::ALL {
            let home = color.home_row();
            let pawns = color.pawn_start_row();
            for (idx, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
                let col = idx as u8 + 1;
                self.place(Square::new(home, col), Piece::new(color, *kind));
                self.place(Square::new(pawns, col), Piece::new(color, PieceKind::Pawn));
            }
        }
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| self.get(square).map(|piece| (square, piece)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    pub fn find_king(&self, color: Color) -> Option<Square> {
        let king = Piece::new(color, PieceKind::King);
        self.pieces()
            .find(|(_, piece)| *piece == king)
            .map(|(square, _)| square)
    }

    /// Fixture builder for tests and benches. `rows[0]` is row 8, each
    /// string lists columns 1..=8 with `KQRBNP` for White, `kqrbnp` for
    /// Black and `.` for empty.
    ///
    /// # Panics
    ///
    /// On a row that is not 8 columns long or an unknown glyph.
    #[doc(hidden)]
    pub fn from_rows(rows: [&str; 8]) -> Self {
        let mut board = Self::empty();
        for (idx, line) in rows.iter().enumerate() {
            let row = 8 - idx as u8;
            assert_eq!(line.len(), 8, "fixture row {row} must have 8 columns");
            for (col_idx, ch) in line.chars().enumerate() {
                let color = if ch.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let kind = match ch.to_ascii_lowercase() {
                    'k' => PieceKind::King,
                    'q' => PieceKind::Queen,
                    'r' => PieceKind::Rook,
                    'b' => PieceKind::Bishop,
                    'n' => PieceKind::Knight,
                    'p' => PieceKind::Pawn,
                    '.' => continue,
                    other => panic!("unknown fixture glyph {other:?}"),
                };
                board.place(Square::new(row, col_idx as u8 + 1), Piece::new(color, kind));
            }
        }
        board
    }

    #[inline]
    fn at(&mut self, square: Square) -> &mut Option<Piece> {
        &mut self.buffer[square.row() as usize - 1][square.col() as usize - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_rows_match_standard_layout() {
        let board = Board::from_rows([
            "rnbqkbnr", "pppppppp", "........", "........", "........", "........", "PPPPPPPP",
            "RNBQKBNR",
        ]);
        assert_eq!(board, Board::standard());
    }

    #[test]
    #[should_panic(expected = "unknown fixture glyph")]
    fn fixture_rows_reject_unknown_glyphs() {
        Board::from_rows([
            "rnbqkbnr", "pppppppp", "........", "...x....", "........", "........", "PPPPPPPP",
            "RNBQKBNR",
        ]);
    }

    #[test]
    fn standard_board_has_thirty_two_pieces() {
        let board = Board::standard();
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(board.pieces_of(Color::White).count(), 16);
        assert_eq!(board.pieces_of(Color::Black).count(), 16);
    }

    #[test]
    fn standard_board_layout() {
        let board = Board::standard();
        assert_eq!(
            board.get(Square::new(1, 5)),
            Some(Piece::new(Color::White, PieceKind::King))
        );
        assert_eq!(
            board.get(Square::new(8, 4)),
            Some(Piece::new(Color::Black, PieceKind::Queen))
        );
        assert_eq!(
            board.get(Square::new(1, 2)),
            Some(Piece::new(Color::White, PieceKind::Knight))
        );
        assert_eq!(
            board.get(Square::new(8, 6)),
            Some(Piece::new(Color::Black, PieceKind::Bishop))
        );
        assert_eq!(
            board.get(Square::new(8, 8)),
            Some(Piece::new(Color::Black, PieceKind::Rook))
        );
        for col in 1..=8 {
            assert_eq!(
                board.get(Square::new(2, col)),
                Some(Piece::new(Color::White, PieceKind::Pawn))
            );
            assert_eq!(
                board.get(Square::new(7, col)),
                Some(Piece::new(Color::Black, PieceKind::Pawn))
            );
            for row in 3..=6 {
                assert!(board.is_empty(Square::new(row, col)));
            }
        }
    }

    #[test]
    fn place_and_remove() {
        let mut board = Board::empty();
        let d4 = Square::new(4, 4);
        let knight = Piece::new(Color::Black, PieceKind::Knight);
        board.place(d4, knight);
        assert_eq!(board.get(d4), Some(knight));
        assert_eq!(board.remove(d4), Some(knight));
        assert_eq!(board.remove(d4), None);
        assert!(board.is_empty(d4));
    }

    #[test]
    fn reset_clears_previous_placement() {
        let mut board = Board::empty();
        board.place(Square::new(4, 4), Piece::new(Color::White, PieceKind::Queen));
        board.reset_to_starting_position();
        assert_eq!(board, Board::standard());
    }

    #[test]
    fn clone_is_independent() {
        let board = Board::standard();
        let mut copy = board.clone();
        copy.remove(Square::new(1, 5));
        assert!(board.find_king(Color::White).is_some());
        assert_eq!(copy.find_king(Color::White), None);
    }
}
