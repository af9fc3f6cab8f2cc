//! Moves and move outcomes.

use super::line::Line;
use super::position::Position;
use super::state::GameStatus;
use super::types::{Actor, Symbol};
use serde::{Deserialize, Serialize};

/// A symbol placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The symbol placed.
    pub symbol: Symbol,
    /// Where it was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(symbol: Symbol, position: Position) -> Self {
        Self { symbol, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.symbol, self.position.label())
    }
}

/// Result of an accepted move, everything the view needs to draw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Where the symbol went.
    pub position: Position,
    /// The symbol placed.
    pub symbol: Symbol,
    /// Status after the move.
    pub status: GameStatus,
    /// Who plays next, `None` once the game is over.
    pub next_actor: Option<Actor>,
}

impl MoveOutcome {
    /// Whether this move ended the game.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// The completed line if this move won.
    pub fn winning_line(&self) -> Option<Line> {
        self.status.winning_line()
    }
}
