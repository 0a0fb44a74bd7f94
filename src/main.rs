//! tictactoe-engine command line.
//!
//! ## Usage
//!
//! - `tictactoe-engine` - Show a demo
//! - `tictactoe-engine protocol` - Start the text protocol on stdin/stdout
//! - `tictactoe-engine move <board> <player>` - Print the chosen index
//! - `tictactoe-engine winner <board>` - Print the winner

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tictactoe_engine::board::{Board, Marker};
use tictactoe_engine::engine::{WinRule, select_move, select_move_with, winner_with};
use tictactoe_engine::protocol::TextEngine;

/// tictactoe-engine: a one-ply tic-tac-toe move picker
#[derive(Parser)]
#[command(name = "tictactoe-engine")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the line protocol for use with a front end
    Protocol {
        /// Count columns and diagonals as winning lines
        #[arg(long)]
        all_lines: bool,
    },
    /// Choose a move for PLAYER on BOARD and print its index (-1 if none)
    Move {
        /// Nine characters over '-', 'X', 'O', row-major
        board: String,
        /// X or O
        player: String,
        /// Count columns and diagonals as winning lines
        #[arg(long)]
        all_lines: bool,
    },
    /// Print the winner of BOARD ('-' if none)
    Winner {
        /// Nine characters over '-', 'X', 'O', row-major
        board: String,
        /// Count columns and diagonals as winning lines
        #[arg(long)]
        all_lines: bool,
    },
    /// Run the reference scenarios
    Demo,
}

fn rule(all_lines: bool) -> WinRule {
    if all_lines {
        WinRule::AllLines
    } else {
        WinRule::RowsOnly
    }
}

fn parse_board(s: &str) -> Result<Board> {
    s.parse::<Board>()
        .with_context(|| format!("invalid board {s:?}"))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Protocol { all_lines }) => {
            let mut engine = TextEngine::with_rule(rule(all_lines));
            engine.run().context("protocol I/O failed")?;
        }
        Some(Commands::Move {
            board,
            player,
            all_lines,
        }) => {
            let board = parse_board(&board)?;
            let player = player
                .parse::<Marker>()
                .and_then(Marker::player)
                .with_context(|| format!("invalid player {player:?}"))?;
            println!("{}", select_move_with(&board, player, rule(all_lines)));
        }
        Some(Commands::Winner { board, all_lines }) => {
            let board = parse_board(&board)?;
            println!("{}", winner_with(&board, rule(all_lines)));
        }
        Some(Commands::Demo) | None => run_demo()?,
    }
    Ok(())
}

fn run_demo() -> Result<()> {
    println!("tictactoe-engine: one-ply move selection\n");

    for s in ["XOXOX-OXO", "XOXOXOOX-", "---------", "XO-XX-OOX", "XXXXXXXXX"] {
        let board = parse_board(s)?;
        let mv = select_move(&board, Marker::X);
        println!("{board}  X -> {mv}");
        print!("{}", board.grid());
        println!();
    }
    Ok(())
}
