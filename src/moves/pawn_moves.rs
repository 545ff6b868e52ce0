//! Pawn generation: single and double pushes, diagonal captures, promotion.
//!
//! Any move landing on the final row fans out into one move per promotion
//! kind. En passant is not generated.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::PROMOTION_KINDS;
use crate::game_state::chess_types::{ChessMove, Color, Square};

pub fn pawn_moves(board: &Board, from: Square, color: Color, out: &mut Vec<ChessMove>) {
    let forward = color.forward();

    if let Some(one_step) = from.offset(forward, 0) {
        if board.is_empty(one_step) {
            if one_step.row() == color.promotion_row() {
                push_promotions(from, one_step, out);
            } else {
                out.push(ChessMove::new(from, one_step));

                if from.row() == color.pawn_start_row() {
                    if let Some(two_step) = one_step.offset(forward, 0) {
                        if board.is_empty(two_step) {
                            out.push(ChessMove::new(from, two_step));
                        }
                    }
                }
            }
        }
    }

    for d_col in [-1i8, 1i8] {
        let Some(target) = from.offset(forward, d_col) else {
            continue;
        };
        match board.get(target) {
            Some(piece) if piece.color != color => {
                if target.row() == color.promotion_row() {
                    push_promotions(from, target, out);
                } else {
                    out.push(ChessMove::new(from, target));
                }
            }
            _ => {}
        }
    }
}

fn push_promotions(from: Square, to: Square, out: &mut Vec<ChessMove>) {
    for kind in PROMOTION_KINDS {
        out.push(ChessMove::promoting(from, to, kind));
    }
}
