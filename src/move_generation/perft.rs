//! Perft: exhaustive legal-move tree walks used to validate generation.
//!
//! `perft` gathers per-leaf statistics (captures, castles, promotions,
//! checks, checkmates); `perft_nodes` only counts leaves and bulk-counts the
//! last ply, which is what the benchmark measures.

use crate::chess_errors::ChessResult;
use crate::game_state::game_state::Game;
use crate::game_state::chess_types::ChessMove;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

pub fn perft(game: &Game, depth: u8) -> ChessResult<PerftCounts> {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return Ok(counts);
    }
    perft_recurse(game, depth, &mut counts)?;
    Ok(counts)
}

fn perft_recurse(game: &Game, depth: u8, counts: &mut PerftCounts) -> ChessResult<()> {
    for mv in game.all_legal_moves(game.turn())? {
        let mut next = game.clone();
        let captured = next.commit_move(mv);

        if depth > 1 {
            perft_recurse(&next, depth - 1, counts)?;
            continue;
        }

        counts.nodes += 1;
        if captured.is_some() {
            counts.captures += 1;
        }
        if is_castle(game, &mv) {
            counts.castles += 1;
        }
        if mv.promotion.is_some() {
            counts.promotions += 1;
        }
        if next.is_in_check(next.turn())? {
            counts.checks += 1;
            if next.is_in_checkmate(next.turn())? {
                counts.checkmates += 1;
            }
        }
    }
    Ok(())
}

fn is_castle(game: &Game, mv: &ChessMove) -> bool {
    game.piece_at(mv.start)
        .is_some_and(|piece| mv.is_castling_by(piece.kind))
}

/// Leaf count only.
pub fn perft_nodes(game: &Game, depth: u8) -> ChessResult<u64> {
    if depth == 0 {
        return Ok(1);
    }
    let moves = game.all_legal_moves(game.turn())?;
    if depth == 1 {
        return Ok(moves.len() as u64);
    }
    let mut nodes = 0;
    for mv in moves {
        let mut next = game.clone();
        next.commit_move(mv);
        nodes += perft_nodes(&next, depth - 1)?;
    }
    Ok(nodes)
}
