//! Invariants of the board engine.
//!
//! Each invariant is a logical property of a [`GameState`] that must hold
//! after every accepted move and after every reset. They are checked in debug
//! builds and tested independently.

use super::rules;
use super::state::{GameState, GameStatus};
use super::types::{Board, Cell, Symbol};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<InvariantViolation> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Cells are never overwritten: replaying the history rebuilds the board.
pub struct MonotonicBoard;

impl Invariant<GameState> for MonotonicBoard {
    fn holds(state: &GameState) -> bool {
        let mut replayed = Board::new();
        for mv in state.history() {
            if !replayed.is_empty(mv.position) {
                return false;
            }
            replayed.set(mv.position, Cell::Occupied(mv.symbol));
        }
        replayed == *state.board()
    }

    fn description() -> &'static str {
        "Cells are never overwritten"
    }
}

/// X opens and symbols alternate; the turn always points past the last mover.
pub struct AlternatingTurn;

impl Invariant<GameState> for AlternatingTurn {
    fn holds(state: &GameState) -> bool {
        let history = state.history();
        let alternates = history.iter().enumerate().all(|(i, mv)| {
            let expected = if i % 2 == 0 { Symbol::X } else { Symbol::O };
            mv.symbol == expected
        });
        if !alternates {
            return false;
        }
        match history.last() {
            None => state.current_turn() == GameState::STARTING_SYMBOL,
            Some(last) => state.current_turn() == last.symbol.opponent(),
        }
    }

    fn description() -> &'static str {
        "Symbols alternate starting with X"
    }
}

/// Status agrees with the rules applied to the board.
pub struct StatusMatchesBoard;

impl Invariant<GameState> for StatusMatchesBoard {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        match state.status() {
            GameStatus::InProgress => {
                rules::winning_line(board).is_none() && !rules::is_full(board)
            }
            GameStatus::Won { symbol, line } => {
                line.positions()
                    .iter()
                    .all(|pos| board.get(*pos) == Cell::Occupied(symbol))
            }
            GameStatus::Drawn => rules::is_draw(board),
        }
    }

    fn description() -> &'static str {
        "Status matches the board"
    }
}

/// Every engine invariant.
pub type EngineInvariants = (MonotonicBoard, AlternatingTurn, StatusMatchesBoard);
