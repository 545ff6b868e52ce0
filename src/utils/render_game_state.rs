//! Terminal-oriented board renderer.
//!
//! Row 8 is drawn at the top. Column numbers 1..8 frame the grid so a reader
//! can type coordinates straight back into the driver.

use crate::chess_errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::game_state::game_state::{Game, GameStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderStyle {
    #[default]
    Unicode,
    /// `KQRBNP` for White, lowercase for Black.
    Ascii,
}

impl RenderStyle {
    /// Parses `unicode` or `ascii`, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "unicode" => Some(RenderStyle::Unicode),
            "ascii" => Some(RenderStyle::Ascii),
            _ => None,
        }
    }

    fn empty_square(self) -> char {
        match self {
            RenderStyle::Unicode => '·',
            RenderStyle::Ascii => '.',
        }
    }
}

/// Render the board to a string for terminal output.
pub fn render_board(board: &Board, style: RenderStyle) -> String {
    let mut out = String::new();

    out.push_str("  1 2 3 4 5 6 7 8\n");

    for row in (1..=8u8).rev() {
        out.push(char::from(b'0' + row));
        out.push(' ');

        for col in 1..=8u8 {
            match board.get(Square::new(row, col)) {
                Some(piece) => out.push(piece_glyph(piece, style)),
                None => out.push(style.empty_square()),
            }

            if col < 8 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'0' + row));
        out.push('\n');
    }

    out.push_str("  1 2 3 4 5 6 7 8");

    out
}

/// Board plus a status line naming the side to move.
pub fn render_game(game: &Game, style: RenderStyle) -> ChessResult<String> {
    let turn = game.turn();
    let status = match game.status()? {
        GameStatus::Ongoing => format!("{turn} to move"),
        GameStatus::Check => format!("{turn} to move, in check"),
        GameStatus::Checkmate => format!("{turn} is checkmated, {} wins", turn.opposite()),
        GameStatus::Stalemate => format!("{turn} is stalemated, draw"),
    };
    Ok(format!("{}\n{status}", render_board(game.board(), style)))
}

fn piece_glyph(piece: Piece, style: RenderStyle) -> char {
    match style {
        RenderStyle::Unicode => piece_to_unicode(piece.color, piece.kind),
        RenderStyle::Ascii => piece_to_ascii(piece.color, piece.kind),
    }
}

fn piece_to_ascii(color: Color, kind: PieceKind) -> char {
    let ch = match kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match color {
        Color::White => ch.to_ascii_uppercase(),
        Color::Black => ch,
    }
}

fn piece_to_unicode(color: Color, kind: PieceKind) -> char {
    match (color, kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
