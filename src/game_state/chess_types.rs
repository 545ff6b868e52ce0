//! Core value types shared by every layer of the rules engine.
//!
//! Squares, pieces and moves are small `Copy` values with no behavior beyond
//! equality, hashing and a few coordinate helpers. Movement tables are
//! attached to [`PieceKind`] so that generators dispatch on a closed set of
//! variants instead of scattered constants.

use std::fmt;

use crate::moves::leaper_moves::{KING_OFFSETS, KNIGHT_OFFSETS};
use crate::moves::sliding_moves::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single pawn step.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Row holding the king and rooks at the start of the game.
    #[inline]
    pub const fn home_row(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 8,
        }
    }

    #[inline]
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 2,
            Color::Black => 7,
        }
    }

    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::White => 8,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("white"),
            Color::Black => f.write_str("black"),
        }
    }
}

/// How a piece kind travels across the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    /// Walk each direction until blocked.
    Slide(&'static [(i8, i8)]),
    /// Jump to each fixed offset once.
    Leap(&'static [(i8, i8)]),
    /// Forward pushes, diagonal captures and promotion.
    Pawn,
}

/// Piece kind (color is carried separately by [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    #[inline]
    pub const fn movement(self) -> Movement {
        match self {
            PieceKind::Pawn => Movement::Pawn,
            PieceKind::Knight => Movement::Leap(&KNIGHT_OFFSETS),
            PieceKind::Bishop => Movement::Slide(&BISHOP_DIRECTIONS),
            PieceKind::Rook => Movement::Slide(&ROOK_DIRECTIONS),
            PieceKind::Queen => Movement::Slide(&QUEEN_DIRECTIONS),
            PieceKind::King => Movement::Leap(&KING_OFFSETS),
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        };
        f.write_str(name)
    }
}

/// A colored piece. Pieces carry no position or history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }
}

/// Board coordinate, 1-based: row 1 is White's home row, column 1 the a-file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Builds a square from in-range coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside `1..=8`; callers constrain
    /// coordinates before reaching this point.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row >= 1 && row <= 8 && col >= 1 && col <= 8, "square out of bounds");
        Self { row, col }
    }

    /// Bounds-checked constructor used while stepping across the board.
    #[inline]
    pub const fn try_new(row: i8, col: i8) -> Option<Self> {
        if in_bounds(row, col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        Self::try_new(self.row as i8 + d_row, self.col as i8 + d_col)
    }

    /// All 64 squares, row-major from (1, 1) to (8, 8).
    pub fn all() -> impl Iterator<Item = Square> {
        (1..=8u8).flat_map(|row| (1..=8u8).map(move |col| Square { row, col }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A coordinate pair is on the board iff both parts lie in `1..=8`.
#[inline]
pub const fn in_bounds(row: i8, col: i8) -> bool {
    row >= 1 && row <= 8 && col >= 1 && col <= 8
}

/// A move request or a generated move.
///
/// Equality covers all three fields, so a quiet push and a promotion to the
/// same square are distinct moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub start: Square,
    pub end: Square,
    pub promotion: Option<PieceKind>,
}

impl ChessMove {
    #[inline]
    pub const fn new(start: Square, end: Square) -> Self {
        Self {
            start,
            end,
            promotion: None,
        }
    }

    #[inline]
    pub const fn promoting(start: Square, end: Square, promotion: PieceKind) -> Self {
        Self {
            start,
            end,
            promotion: Some(promotion),
        }
    }

    /// Horizontal displacement, end minus start.
    #[inline]
    pub const fn col_delta(&self) -> i8 {
        self.end.col as i8 - self.start.col as i8
    }

    /// A king moving two columns is a castling move.
    #[inline]
    pub const fn is_castling_by(&self, mover: PieceKind) -> bool {
        matches!(mover, PieceKind::King) && self.col_delta().abs() == 2
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)?;
        if let Some(kind) = self.promotion {
            write!(f, " = {kind}")?;
        }
        Ok(())
    }
}
