//! Draw detection.

use super::win::winning_line;
use crate::{Board, Cell};
use tracing::instrument;

/// Checks if every cell is occupied.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

/// A full board with no winning line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winning_line(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Symbol};

    fn fill(pattern: [Symbol; 9]) -> Board {
        let mut board = Board::new();
        for (pos, symbol) in Position::ALL.into_iter().zip(pattern) {
            board.set(pos, Cell::Occupied(symbol));
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Position::Center, Cell::Occupied(Symbol::X));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        use Symbol::{O, X};
        // X O X / O X X / O X O
        let board = fill([X, O, X, O, X, X, O, X, O]);
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_winner_is_not_draw() {
        use Symbol::{O, X};
        // X X X / O O X / X O O
        let board = fill([X, X, X, O, O, X, X, O, O]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
