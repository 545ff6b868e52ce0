use std::io::{self, BufRead, Write};

use tracing_subscriber::EnvFilter;

use chess_rules::chess_errors::ChessError;
use chess_rules::game_state::chess_types::{ChessMove, PieceKind, Square};
use chess_rules::game_state::game_state::Game;
use chess_rules::utils::render_game_state::{render_game, RenderStyle};

enum Command {
    Quit,
    Move(ChessMove),
}

fn parse_coord(token: Option<&str>) -> Result<u8, String> {
    let token = token.ok_or("expected `row col row col [promotion]`")?;
    match token.parse::<u8>() {
        Ok(value @ 1..=8) => Ok(value),
        _ => Err(format!("`{token}` is not a coordinate between 1 and 8")),
    }
}

fn parse_promotion(token: &str) -> Result<PieceKind, String> {
    match token.to_ascii_lowercase().as_str() {
        "queen" | "q" => Ok(PieceKind::Queen),
        "rook" | "r" => Ok(PieceKind::Rook),
        "bishop" | "b" => Ok(PieceKind::Bishop),
        "knight" | "n" => Ok(PieceKind::Knight),
        other => Err(format!("`{other}` is not a promotion piece")),
    }
}

fn parse_command(line: &str) -> Result<Command, String> {
    let mut tokens = line.split_whitespace();
    let first = tokens.clone().next();
    if first.is_some_and(|t| t.eq_ignore_ascii_case("quit")) {
        return Ok(Command::Quit);
    }

    let start = Square::new(parse_coord(tokens.next())?, parse_coord(tokens.next())?);
    let end = Square::new(parse_coord(tokens.next())?, parse_coord(tokens.next())?);
    let mv = match tokens.next() {
        Some(token) => ChessMove::promoting(start, end, parse_promotion(token)?),
        None => ChessMove::new(start, end),
    };
    if let Some(extra) = tokens.next() {
        return Err(format!("unexpected trailing input `{extra}`"));
    }
    Ok(Command::Move(mv))
}

fn render_style() -> RenderStyle {
    match std::env::var("CHESS_RENDER") {
        Ok(value) => RenderStyle::from_name(&value).unwrap_or_else(|| {
            tracing::warn!(%value, "unknown CHESS_RENDER value, using unicode");
            RenderStyle::Unicode
        }),
        Err(_) => RenderStyle::Unicode,
    }
}

/// Plays `mv`, handing back the rejection reason for an invalid move.
/// Board corruption such as a missing king is passed up instead.
fn submit_move(game: &mut Game, mv: ChessMove) -> Result<Option<ChessError>, ChessError> {
    match game.apply_move(mv) {
        Ok(_) => Ok(None),
        Err(err) if err.is_invalid_move() => Ok(Some(err)),
        Err(err) => Err(err),
    }
}

fn run() -> Result<(), ChessError> {
    let style = render_style();
    let mut game = Game::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        println!("{}", render_game(&game, style)?);
        if game.status()?.is_over() {
            return Ok(());
        }

        print!("> ");
        stdout.flush().ok();

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(err)) => {
                tracing::warn!(%err, "failed to read stdin");
                return Ok(());
            }
            None => return Ok(()),
        };
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Ok(Command::Quit) => return Ok(()),
            Ok(Command::Move(mv)) => {
                if let Some(reason) = submit_move(&mut game, mv)? {
                    println!("rejected: {reason}");
                }
            }
            Err(message) => println!("{message}"),
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
