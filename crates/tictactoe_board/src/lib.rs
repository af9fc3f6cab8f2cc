//! Tic-tac-toe board engine.
//!
//! A small state machine over nine cells. [`GameState`] accepts move
//! requests by cell index, detects wins and draws, alternates turns and
//! picks uniformly random legal moves for an automated opponent.
//!
//! ```
//! use tictactoe_board::{GameState, GameStatus, Line, Symbol};
//!
//! let mut game = GameState::new();
//! for index in [0, 4, 1, 3] {
//!     game.apply_move(index).unwrap();
//! }
//! let outcome = game.apply_move(2).unwrap();
//! assert_eq!(
//!     outcome.status,
//!     GameStatus::Won { symbol: Symbol::X, line: Line::ALL[0] }
//! );
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod invariants;
mod line;
mod position;
pub mod rules;
mod state;
mod types;

pub use action::{Move, MoveOutcome};
pub use error::{InvalidMove, MoveError};
pub use invariants::{
    AlternatingTurn, EngineInvariants, Invariant, InvariantSet, InvariantViolation,
    MonotonicBoard, StatusMatchesBoard,
};
pub use line::{Line, LineKind};
pub use position::Position;
pub use state::{GameState, GameStatus};
pub use types::{Actor, Board, Cell, Seats, Symbol};
