use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use connect_four_engine::ai::{choose_move, Strategy};
use connect_four_engine::config::EngineConfig;
use connect_four_engine::game::{Board, Player, COLS, ROWS};

/// Replay a position and compare the search strategies on it.
#[derive(Parser)]
#[command(name = "analyze", about = "Analyze a Connect Four position")]
struct Cli {
    /// Comma-separated columns played so far, Red first (e.g. "3,3,2")
    #[arg(long, default_value = "")]
    moves: String,

    /// Strategy to run: minimax, alphabeta, expected_minimax, or all
    #[arg(long, default_value = "all")]
    strategy: String,

    /// Override search depth
    #[arg(long)]
    depth: Option<usize>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "engine.toml")]
    config: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let strategies: Vec<Strategy> = match cli.strategy.as_str() {
        "minimax" => vec![Strategy::Minimax],
        "alphabeta" => vec![Strategy::AlphaBeta],
        "expected_minimax" => vec![Strategy::ExpectedMinimax],
        "all" => vec![Strategy::Minimax, Strategy::AlphaBeta, Strategy::ExpectedMinimax],
        other => bail!(
            "unknown strategy '{}' (expected 'minimax', 'alphabeta', 'expected_minimax', or 'all')",
            other
        ),
    };

    let config = EngineConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    let depth = cli.depth.unwrap_or(config.search.depth);
    if depth == 0 {
        bail!("depth must be >= 1");
    }

    let (mut board, to_move) = replay(&cli.moves)?;
    print_board(&board);
    println!("{} to move, searching {} plies\n", to_move.name(), depth);

    for strategy in strategies {
        let outcome = choose_move(&mut board, depth, strategy, to_move);
        match outcome.column {
            Some(col) => println!(
                "{:>16}: column {} (score {:.1}, {} nodes)",
                strategy.name(),
                col,
                outcome.score,
                outcome.nodes_expanded
            ),
            None => println!(
                "{:>16}: no move available (score {:.1})",
                strategy.name(),
                outcome.score
            ),
        }
    }

    Ok(())
}

/// Replay a comma-separated column list onto a fresh board, alternating
/// players starting with Red. Returns the board and the side to move.
fn replay(moves: &str) -> Result<(Board, Player)> {
    let mut board = Board::new();
    let mut player = Player::Red;

    for token in moves.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let col: usize = token
            .parse()
            .with_context(|| format!("invalid column '{}'", token))?;
        if col >= COLS {
            bail!("column {} out of range (0-{})", col, COLS - 1);
        }
        if board.place(col, player.to_cell()).is_none() {
            bail!("column {} is already full", col);
        }
        player = player.other();
    }

    Ok((board, player))
}

fn print_board(board: &Board) {
    use connect_four_engine::game::Cell;
    for row in 0..ROWS {
        let line: String = (0..COLS)
            .map(|col| match board.get(row, col) {
                Cell::Empty => ". ",
                Cell::Red => "R ",
                Cell::Yellow => "Y ",
            })
            .collect();
        println!("{}", line.trim_end());
    }
    println!("0 1 2 3 4 5 6");
}
