//! Command-line interface for canvas_tictactoe.

use clap::{Parser, Subcommand, ValueEnum};
use tictactoe_board::Symbol;

/// Canvas tic-tac-toe - play against a random opponent in the terminal
#[derive(Parser, Debug)]
#[command(name = "canvas_tictactoe")]
#[command(about = "Tic-tac-toe on a terminal canvas against a random opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (optional)
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively on the terminal canvas
    Play {
        /// Symbol you play (X always moves first)
        #[arg(long, value_enum)]
        human_symbol: Option<SymbolArg>,

        /// Seed for the computer's random moves
        #[arg(long)]
        seed: Option<u64>,

        /// File to write logs to (the terminal is taken by the board)
        #[arg(long, default_value = "canvas_tictactoe.log")]
        log_file: std::path::PathBuf,
    },

    /// Play random-vs-random games headlessly and print JSON results
    Simulate {
        /// Number of games
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Symbol choice on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SymbolArg {
    /// Play X and move first
    X,
    /// Play O and move second
    O,
}

impl From<SymbolArg> for Symbol {
    fn from(arg: SymbolArg) -> Self {
        match arg {
            SymbolArg::X => Symbol::X,
            SymbolArg::O => Symbol::O,
        }
    }
}
