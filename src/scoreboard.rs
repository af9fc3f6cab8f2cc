//! Running tally of finished games.

use serde::{Deserialize, Serialize};
use tictactoe_board::{GameStatus, Symbol};

/// Wins per symbol and draws since the session started.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl Scoreboard {
    /// Empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a finished game. In-progress statuses are ignored.
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won {
                symbol: Symbol::X, ..
            } => self.x_wins += 1,
            GameStatus::Won {
                symbol: Symbol::O, ..
            } => self.o_wins += 1,
            GameStatus::Drawn => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }

    /// Wins for `symbol`.
    pub fn wins(&self, symbol: Symbol) -> u32 {
        match symbol {
            Symbol::X => self.x_wins,
            Symbol::O => self.o_wins,
        }
    }

    /// Drawn games.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Finished games.
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X {} · O {} · draws {}",
            self.wins(Symbol::X),
            self.wins(Symbol::O),
            self.draws
        )
    }
}
