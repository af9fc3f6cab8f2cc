//! Game state and the board engine operations.

use super::action::{Move, MoveOutcome};
use super::error::{InvalidMove, MoveError};
use super::invariants::{EngineInvariants, InvariantSet};
use super::line::Line;
use super::position::Position;
use super::rules;
use super::types::{Actor, Board, Cell, Seats, Symbol};
use rand::Rng;
use rand::seq::IteratorRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are accepted.
    InProgress,
    /// `symbol` completed `line`.
    Won {
        /// The winning symbol.
        symbol: Symbol,
        /// The completed line.
        line: Line,
    },
    /// Board full with no line completed.
    Drawn,
}

impl GameStatus {
    /// Won or drawn.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// The winning symbol, if any.
    pub fn winner(&self) -> Option<Symbol> {
        match self {
            GameStatus::Won { symbol, .. } => Some(*symbol),
            _ => None,
        }
    }

    /// The winning line, if any.
    pub fn winning_line(&self) -> Option<Line> {
        match self {
            GameStatus::Won { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won { symbol, line } => write!(f, "{} wins via {}", symbol, line),
            GameStatus::Drawn => write!(f, "Draw"),
        }
    }
}

/// The single owned game state: board, turn, status and history.
///
/// Only [`GameState::apply_move`] mutates the board and only
/// [`GameState::reset`] clears it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_turn: Symbol,
    status: GameStatus,
    history: Vec<Move>,
    seats: Seats,
}

impl GameState {
    /// Symbol that opens every game.
    pub const STARTING_SYMBOL: Symbol = Symbol::X;

    /// New game with the human playing X.
    pub fn new() -> Self {
        Self::with_seats(Seats::default())
    }

    /// New game with the given seat assignment.
    pub fn with_seats(seats: Seats) -> Self {
        Self {
            board: Board::new(),
            current_turn: Self::STARTING_SYMBOL,
            status: GameStatus::InProgress,
            history: Vec::new(),
            seats,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Symbol whose turn it is. Flips after every accepted move, the final
    /// one included.
    pub fn current_turn(&self) -> Symbol {
        self.current_turn
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Won or drawn.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Number of accepted moves since the last reset.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Seat assignment.
    pub fn seats(&self) -> Seats {
        self.seats
    }

    /// Actor owning the current turn, `None` once terminal.
    pub fn next_actor(&self) -> Option<Actor> {
        (!self.is_terminal()).then(|| self.seats.actor_for(self.current_turn))
    }

    /// Places the current symbol at cell `index` (0-8).
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidMove`] when the index is out of range, the
    /// cell is occupied or the game is over. State is unchanged on error.
    #[instrument(skip(self), fields(turn = %self.current_turn, moves = self.history.len()))]
    pub fn apply_move(&mut self, index: usize) -> Result<MoveOutcome, MoveError> {
        if self.is_terminal() {
            return Err(InvalidMove::GameOver.into());
        }
        let position = Position::from_index(index).ok_or(InvalidMove::OutOfRange(index))?;
        if !self.board.is_empty(position) {
            return Err(InvalidMove::Occupied(position).into());
        }

        let symbol = self.current_turn;
        self.board.set(position, Cell::Occupied(symbol));
        self.history.push(Move::new(symbol, position));

        if let Some((winner, line)) = rules::winning_line(&self.board) {
            self.status = GameStatus::Won {
                symbol: winner,
                line,
            };
        } else if rules::is_full(&self.board) {
            self.status = GameStatus::Drawn;
        }
        self.current_turn = symbol.opponent();

        if cfg!(debug_assertions) {
            if let Err(violations) = EngineInvariants::check_all(self) {
                warn!(?violations, "Invariant violated after move");
            }
        }

        debug!(%position, %symbol, status = %self.status, "Move applied");
        Ok(MoveOutcome {
            position,
            symbol,
            status: self.status,
            next_actor: self.next_actor(),
        })
    }

    /// [`GameState::apply_move`] for a named position.
    pub fn place(&mut self, position: Position) -> Result<MoveOutcome, MoveError> {
        self.apply_move(position.to_index())
    }

    /// Empty cells, in index order. Evaluated lazily on each call.
    pub fn available_moves(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .into_iter()
            .filter(move |pos| self.board.is_empty(*pos))
    }

    /// Picks an empty cell uniformly at random.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NoMovesAvailable`] when the board is full or the
    /// game is over.
    #[instrument(skip(self, rng))]
    pub fn choose_random_move<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Position, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::NoMovesAvailable);
        }
        self.available_moves()
            .choose(rng)
            .ok_or(MoveError::NoMovesAvailable)
    }

    /// Clears the board and returns to the opening turn. Seats are kept.
    #[instrument(skip(self), fields(status = %self.status))]
    pub fn reset(&mut self) {
        debug!("Resetting game");
        *self = Self::with_seats(self.seats);
    }

    #[cfg(test)]
    pub(crate) fn corrupt_cell(&mut self, position: Position, cell: Cell) {
        self.board.set(position, cell);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_actor_follows_seats() {
        let mut state = GameState::with_seats(Seats::new(Symbol::O));
        assert_eq!(state.next_actor(), Some(Actor::Computer));
        let outcome = state.apply_move(4).expect("empty board accepts a move");
        assert_eq!(outcome.next_actor, Some(Actor::Human));
        assert_eq!(state.current_turn(), Symbol::O);
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let mut state = GameState::new();
        assert_eq!(
            state.apply_move(9),
            Err(MoveError::InvalidMove(InvalidMove::OutOfRange(9)))
        );
        assert_eq!(state, GameState::new());
    }

    #[test]
    fn test_reset_keeps_seats() {
        let mut state = GameState::with_seats(Seats::new(Symbol::O));
        state.apply_move(0).expect("valid move");
        state.reset();
        assert_eq!(state.seats().human(), Symbol::O);
        assert_eq!(state.move_count(), 0);
        assert_eq!(state.current_turn(), Symbol::X);
    }

    #[test]
    fn test_winning_move_still_flips_turn() {
        let mut state = GameState::new();
        for index in [0, 4, 1, 3] {
            state.apply_move(index).expect("valid move");
        }
        assert_eq!(state.current_turn(), Symbol::X);

        let outcome = state.apply_move(2).expect("winning move");

        assert!(outcome.is_terminal());
        assert_eq!(state.current_turn(), Symbol::O);
        assert_eq!(state.next_actor(), None);
    }
}
