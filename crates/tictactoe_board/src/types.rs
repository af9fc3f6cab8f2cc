//! Core domain types for the board engine.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Symbol placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Symbol {
    /// Symbol X (always opens).
    X,
    /// Symbol O.
    O,
}

impl Symbol {
    /// Returns the other symbol.
    pub fn opponent(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }
}

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nothing placed yet.
    #[default]
    Empty,
    /// Holds a symbol until the next reset.
    Occupied(Symbol),
}

impl Cell {
    /// Returns the symbol in this cell, if any.
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(symbol) => Some(symbol),
        }
    }
}

/// 3x3 board, cells in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Sets the cell at the given position.
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }

    /// Checks if the cell at a position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }
}

/// Who is responsible for a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Actor {
    /// Moves arrive from user input.
    Human,
    /// Moves are picked at random after a delay.
    Computer,
}

/// Assignment of symbols to actors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seats {
    human: Symbol,
}

impl Seats {
    /// Human plays `human`, the computer plays the other symbol.
    pub fn new(human: Symbol) -> Self {
        Self { human }
    }

    /// Symbol owned by the human.
    pub fn human(&self) -> Symbol {
        self.human
    }

    /// Symbol owned by the computer.
    pub fn computer(&self) -> Symbol {
        self.human.opponent()
    }

    /// Actor who plays `symbol`.
    pub fn actor_for(&self, symbol: Symbol) -> Actor {
        if symbol == self.human {
            Actor::Human
        } else {
            Actor::Computer
        }
    }
}

impl Default for Seats {
    fn default() -> Self {
        Self::new(Symbol::X)
    }
}
