//! The authoritative game: board, side to move, move log and castling state.
//!
//! `Game` is the only mutator of its board. Every query that needs to look
//! ahead (legality, checkmate, stalemate) probes a clone, and the single
//! mutation path is [`Game::apply_move`], which validates, plays the move,
//! appends it to the log, feeds the castling tracker and flips the turn.
//!
//! `Game` holds no locks; a host sharing one across threads must serialize
//! access to it.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::castling_state::CastlingState;
use crate::game_state::chess_types::{ChessMove, Color, Piece, Square};
use crate::move_generation::legal_move_apply::play_on_board;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::{all_legal_moves, has_legal_move, legal_moves};

/// Situation of one side, as shown to a display collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    turn: Color,
    move_log: Vec<ChessMove>,
    castling: CastlingState,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard starting position, White to move.
    pub fn new() -> Self {
        Self::from_board(Board::standard(), Color::White)
    }

    /// Hand-crafted position with an empty move log. Castling rights start
    /// intact; they only apply where king and rook actually stand at home.
    pub fn from_board(board: Board, turn: Color) -> Self {
        Self {
            board,
            turn,
            move_log: Vec::new(),
            castling: CastlingState::new(),
        }
    }

    /// Plays `moves` from the starting position, stopping at the first
    /// rejected move.
    pub fn replay<'a, I>(moves: I) -> ChessResult<Self>
    where
        I: IntoIterator<Item = &'a ChessMove>,
    {
        let mut game = Self::new();
        for mv in moves {
            game.apply_move(*mv)?;
        }
        Ok(game)
    }

    /// Read-only view; clone it before mutating.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn move_log(&self) -> &[ChessMove] {
        &self.move_log
    }

    pub fn castling_state(&self) -> &CastlingState {
        &self.castling
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.get(square)
    }

    pub fn legal_moves(&self, square: Square) -> ChessResult<Vec<ChessMove>> {
        legal_moves(&self.board, &self.castling, square)
    }

    pub fn all_legal_moves(&self, color: Color) -> ChessResult<Vec<ChessMove>> {
        all_legal_moves(&self.board, &self.castling, color)
    }

    pub fn is_in_check(&self, color: Color) -> ChessResult<bool> {
        is_in_check(&self.board, color)
    }

    pub fn is_in_checkmate(&self, color: Color) -> ChessResult<bool> {
        Ok(self.is_in_check(color)? && !has_legal_move(&self.board, &self.castling, color)?)
    }

    pub fn is_in_stalemate(&self, color: Color) -> ChessResult<bool> {
        Ok(!self.is_in_check(color)? && !has_legal_move(&self.board, &self.castling, color)?)
    }

    /// Status of the side to move.
    pub fn status(&self) -> ChessResult<GameStatus> {
        let in_check = self.is_in_check(self.turn)?;
        let can_move = has_legal_move(&self.board, &self.castling, self.turn)?;
        Ok(match (in_check, can_move) {
            (true, false) => GameStatus::Checkmate,
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check,
            (false, true) => GameStatus::Ongoing,
        })
    }

    /// Validates and plays `mv` for the side to move, returning the captured
    /// piece. A rejected move leaves the game untouched.
    pub fn apply_move(&mut self, mv: ChessMove) -> ChessResult<Option<Piece>> {
        self.validate(&mv).inspect_err(|err| {
            tracing::debug!(%mv, reason = %err, "move rejected");
        })?;
        let captured = self.commit_move(mv);
        if tracing::enabled!(tracing::Level::DEBUG) {
            if let Ok(status) = self.status() {
                if status != GameStatus::Ongoing {
                    tracing::debug!(?status, side = %self.turn, "game state changed");
                }
            }
        }
        Ok(captured)
    }

    fn validate(&self, mv: &ChessMove) -> ChessResult<()> {
        let piece = self
            .board
            .get(mv.start)
            .ok_or(ChessError::EmptyStartSquare(mv.start))?;
        if piece.color != self.turn {
            return Err(ChessError::WrongTurn {
                square: mv.start,
                expected: self.turn,
                found: piece.color,
            });
        }
        if !self.legal_moves(mv.start)?.contains(mv) {
            return Err(ChessError::IllegalMove(*mv));
        }
        Ok(())
    }

    /// Plays an already validated move.
    pub(crate) fn commit_move(&mut self, mv: ChessMove) -> Option<Piece> {
        let captured = play_on_board(&mut self.board, &mv);
        self.move_log.push(mv);
        self.castling.observe(&mv);
        self.turn = self.turn.opposite();
        tracing::debug!(%mv, ?captured, next = %self.turn, ply = self.move_log.len(), "move applied");
        captured
    }
}
