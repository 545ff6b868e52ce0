//! Canonical chess-rule constants.
//!
//! Static rule data: the back-rank layout used to reset a board, the
//! promotion targets offered to a pawn, and the home columns that castling
//! eligibility is tracked against.

use crate::game_state::chess_types::PieceKind;

/// Back-rank pieces from column 1 to column 8.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Kinds a pawn may become on the final row, in generation order.
pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
];

pub const KING_HOME_COL: u8 = 5;
pub const QUEENSIDE_ROOK_HOME_COL: u8 = 1;
pub const KINGSIDE_ROOK_HOME_COL: u8 = 8;
