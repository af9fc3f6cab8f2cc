//! The eight winning lines.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Orientation of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    /// Horizontal.
    Row,
    /// Vertical.
    Column,
    /// Top-left to bottom-right or top-right to bottom-left.
    Diagonal,
}

/// An ordered triple of positions that wins when filled by one symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line([Position; 3]);

impl Line {
    /// All winning lines: rows, then columns, then diagonals.
    pub const ALL: [Line; 8] = [
        // Rows
        Line([Position::TopLeft, Position::TopCenter, Position::TopRight]),
        Line([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
        Line([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
        // Columns
        Line([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
        Line([Position::TopCenter, Position::Center, Position::BottomCenter]),
        Line([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
        // Diagonals
        Line([Position::TopLeft, Position::Center, Position::BottomRight]),
        Line([Position::TopRight, Position::Center, Position::BottomLeft]),
    ];

    /// Positions of this line in order.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Cell indices of this line in order.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// First position of the line.
    pub fn first(&self) -> Position {
        self.0[0]
    }

    /// Last position of the line.
    pub fn last(&self) -> Position {
        self.0[2]
    }

    /// Whether the line runs along a row, a column or a diagonal.
    pub fn kind(&self) -> LineKind {
        let (first, last) = (self.first(), self.last());
        if first.row() == last.row() {
            LineKind::Row
        } else if first.col() == last.col() {
            LineKind::Column
        } else {
            LineKind::Diagonal
        }
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.indices();
        write!(f, "({}, {}, {})", a, b, c)
    }
}
