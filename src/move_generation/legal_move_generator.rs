//! Legal move generation.
//!
//! Geometric candidates are played on a cloned board and dropped when the
//! mover's king is left in check. Castling is layered on top: the tracker
//! gates eligibility, then the king must not be in check, and neither the
//! square it crosses nor the square it lands on may be attacked.

use crate::chess_errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::castling_state::{CastleSide, CastlingState};
use crate::game_state::chess_rules::KING_HOME_COL;
use crate::game_state::chess_types::{ChessMove, Color, PieceKind, Square};
use crate::move_generation::legal_move_apply::simulate_move;
use crate::move_generation::legal_move_checks::{attackers_to_square, is_in_check};
use crate::moves::piece_moves::push_geometric_moves;

/// Legal moves for the piece on `square`; empty when the square is vacant.
pub fn legal_moves(
    board: &Board,
    castling: &CastlingState,
    square: Square,
) -> ChessResult<Vec<ChessMove>> {
    let Some(piece) = board.get(square) else {
        return Ok(Vec::new());
    };

    let mut candidates = Vec::with_capacity(28);
    push_geometric_moves(board, square, piece, &mut candidates);

    let mut legal = Vec::with_capacity(candidates.len() + 2);
    for mv in candidates {
        let next = simulate_move(board, &mv);
        if !is_in_check(&next, piece.color)? {
            legal.push(mv);
        }
    }

    if piece.kind == PieceKind::King && square.row() == piece.color.home_row() {
        legal.extend(castling_moves(board, castling, square, piece.color)?);
    }

    Ok(legal)
}

/// Castling moves available to the king of `color` standing on `king_from`.
pub fn castling_moves(
    board: &Board,
    castling: &CastlingState,
    king_from: Square,
    color: Color,
) -> ChessResult<Vec<ChessMove>> {
    let mut out = Vec::new();
    let home = color.home_row();
    if king_from != Square::new(home, KING_HOME_COL) {
        return Ok(out);
    }

    let mut sides = CastleSide::ALL
        .into_iter()
        .filter(|side| castling.can_castle(color, *side, board))
        .peekable();
    if sides.peek().is_none() {
        return Ok(out);
    }

    // Cannot castle out of check.
    if is_in_check(board, color)? {
        if tracing::enabled!(tracing::Level::TRACE) {
            let attackers = attackers_to_square(board, king_from, color.opposite());
            tracing::trace!(%color, ?attackers, "castling refused: king in check");
        }
        return Ok(out);
    }

    for side in sides {
        let mut path_is_safe = true;
        for col in side.king_path_cols() {
            let step = ChessMove::new(king_from, Square::new(home, col));
            let probe = simulate_move(board, &step);
            if is_in_check(&probe, color)? {
                if tracing::enabled!(tracing::Level::TRACE) {
                    let attackers = attackers_to_square(&probe, step.end, color.opposite());
                    tracing::trace!(%color, ?side, col, ?attackers, "castling refused: king path attacked");
                }
                path_is_safe = false;
                break;
            }
        }
        if path_is_safe {
            out.push(ChessMove::new(
                king_from,
                Square::new(home, side.king_landing_col()),
            ));
        }
    }

    Ok(out)
}

/// Union of `legal_moves` over every square holding a `color` piece.
pub fn all_legal_moves(
    board: &Board,
    castling: &CastlingState,
    color: Color,
) -> ChessResult<Vec<ChessMove>> {
    let mut out = Vec::with_capacity(64);
    for (square, _) in board.pieces_of(color) {
        out.extend(legal_moves(board, castling, square)?);
    }
    Ok(out)
}

/// Stops at the first piece that can move.
pub fn has_legal_move(board: &Board, castling: &CastlingState, color: Color) -> ChessResult<bool> {
    for (square, _) in board.pieces_of(color) {
        if !legal_moves(board, castling, square)?.is_empty() {
            return Ok(true);
        }
    }
    Ok(false)
}
