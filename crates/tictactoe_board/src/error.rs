//! Move errors.

use super::position::Position;

/// Why a move request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidMove {
    /// Index is not in 0-8.
    #[display("cell index {} is out of range (0-8)", _0)]
    OutOfRange(usize),

    /// The cell already holds a symbol.
    #[display("{} is already occupied", _0)]
    Occupied(Position),

    /// The game is won or drawn.
    #[display("the game is already over")]
    GameOver,
}

/// Error returned by board engine operations.
///
/// Both variants are recoverable; callers handling user input ignore them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Move refused, state left unchanged.
    #[display("invalid move: {}", _0)]
    InvalidMove(InvalidMove),

    /// Random selection on a full or finished board.
    #[display("no moves available")]
    NoMovesAvailable,
}

impl std::error::Error for MoveError {}

impl From<InvalidMove> for MoveError {
    fn from(reason: InvalidMove) -> Self {
        MoveError::InvalidMove(reason)
    }
}
