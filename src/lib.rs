//! Crate root module declarations for the chess rules engine.
//!
//! The engine validates and applies moves for a two-player game on an 8x8
//! board: piece movement, captures, promotion, castling, check, checkmate
//! and stalemate. Board state, move generation, perft validation and a
//! text renderer are exposed under stable module paths for the driver
//! binary, benches and any host application.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod castling_state;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod leaper_moves;
    pub mod pawn_moves;
    pub mod piece_moves;
    pub mod sliding_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod perft;
}

pub mod utils {
    pub mod render_game_state;
}
