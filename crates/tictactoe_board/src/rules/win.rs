//! Win detection.

use crate::{Board, Line, Symbol};
use tracing::instrument;

/// Every line held entirely by one symbol, in [`Line::ALL`] order.
///
/// A single move can complete two lines at once; both are yielded.
pub fn completed_lines(board: &Board) -> impl Iterator<Item = (Symbol, Line)> + '_ {
    Line::ALL.into_iter().filter_map(move |line| {
        let [a, b, c] = line.positions();
        let symbol = board.get(a).symbol()?;
        (board.get(b).symbol() == Some(symbol) && board.get(c).symbol() == Some(symbol))
            .then_some((symbol, line))
    })
}

/// Finds a line held entirely by one symbol.
///
/// Rows are reported before columns and columns before diagonals when a
/// single move completes two; [`completed_lines`] yields all of them.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Symbol, Line)> {
    completed_lines(board).next()
}
