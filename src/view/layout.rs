//! Board geometry: where the board sits in the terminal, which cell a click
//! lands in, and canvas coordinates for glyphs and the strike-through.
//!
//! Canvas space is 3x3 units with the origin at the bottom-left, so a cell's
//! row 0 is the top band `y ∈ [2, 3]`.

use ratatui::layout::Rect;
use tictactoe_board::{Line, LineKind, Position};

/// Rows reserved under the board for the status bar.
pub const STATUS_HEIGHT: u16 = 3;

/// How far the strike-through overshoots the end cells' centers, in cells.
pub const STRIKE_EXTENSION: f64 = 1.0 / 2.5;

/// Inset of an X's strokes from the cell edge, in cells.
pub const X_GAP: f64 = 0.25;

/// Radius of an O, in cells.
pub const O_RADIUS: f64 = 1.0 / 3.0;

/// Terminal areas for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// The square board.
    pub board: Rect,
    /// The status bar.
    pub status: Rect,
}

impl BoardLayout {
    /// Fits the largest square board above the status bar, centered.
    ///
    /// Terminal cells are about twice as tall as they are wide, so a square
    /// board is twice as many columns as rows. The row count is rounded down
    /// to a multiple of three so every cell gets the same size.
    pub fn compute(area: Rect) -> Self {
        let status_height = STATUS_HEIGHT.min(area.height);
        let available = area.height - status_height;
        let side = available.min(area.width / 2);
        let side = side - side % 3;

        let board = Rect {
            x: area.x + (area.width - side * 2) / 2,
            y: area.y + (available - side) / 2,
            width: side * 2,
            height: side,
        };
        let status = Rect {
            x: area.x,
            y: area.y + available,
            width: area.width,
            height: status_height,
        };
        Self { board, status }
    }

    /// Cell under terminal position (`column`, `row`), if any.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Position> {
        let b = self.board;
        if b.width == 0 || b.height == 0 {
            return None;
        }
        if column < b.x || row < b.y || column >= b.x + b.width || row >= b.y + b.height {
            return None;
        }
        let col = usize::from(column - b.x) * 3 / usize::from(b.width);
        let row = usize::from(row - b.y) * 3 / usize::from(b.height);
        Position::from_row_col(row, col)
    }
}

/// Center of a cell in canvas space.
pub fn cell_center(pos: Position) -> (f64, f64) {
    (pos.col() as f64 + 0.5, 2.5 - pos.row() as f64)
}

/// The two strokes of an X in `pos`.
pub fn x_strokes(pos: Position) -> [((f64, f64), (f64, f64)); 2] {
    let (cx, cy) = cell_center(pos);
    let r = 0.5 - X_GAP;
    [
        ((cx - r, cy + r), (cx + r, cy - r)),
        ((cx + r, cy + r), (cx - r, cy - r)),
    ]
}

/// Endpoints of the strike-through for `line`.
///
/// The stroke runs from the first cell's center to the last one's, pushed
/// out by [`STRIKE_EXTENSION`] on each axis the line travels along: rows
/// along x, columns along y, diagonals along both.
pub fn strike_endpoints(line: Line) -> ((f64, f64), (f64, f64)) {
    let (x1, y1) = cell_center(line.first());
    let (x2, y2) = cell_center(line.last());
    let (along_x, along_y) = match line.kind() {
        LineKind::Row => (true, false),
        LineKind::Column => (false, true),
        LineKind::Diagonal => (true, true),
    };
    let dx = if along_x { (x2 - x1).signum() * STRIKE_EXTENSION } else { 0.0 };
    let dy = if along_y { (y2 - y1).signum() * STRIKE_EXTENSION } else { 0.0 };
    ((x1 - dx, y1 - dy), (x2 + dx, y2 + dy))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: (f64, f64), b: (f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
    }

    #[test]
    fn test_layout_fits_narrow_terminal() {
        let layout = BoardLayout::compute(Rect::new(0, 0, 40, 40));
        // 40 columns allow at most 20 rows; rounded to 18.
        assert_eq!(layout.board, Rect::new(2, 9, 36, 18));
        assert_eq!(layout.status, Rect::new(0, 37, 40, 3));
    }

    #[test]
    fn test_layout_fits_wide_terminal() {
        let layout = BoardLayout::compute(Rect::new(0, 0, 200, 30));
        assert_eq!(layout.board.height, 27);
        assert_eq!(layout.board.width, 54);
        assert_eq!(layout.board.x, 73);
    }

    #[test]
    fn test_tiny_terminal_has_no_board() {
        let layout = BoardLayout::compute(Rect::new(0, 0, 4, 2));
        assert_eq!(layout.board.width, 0);
        assert_eq!(layout.hit_test(0, 0), None);
    }

    #[test]
    fn test_strike_extends_past_end_cells() {
        let ((x1, y1), (x2, y2)) = strike_endpoints(Line::ALL[1]);
        assert!(close((x1, y1), (0.1, 1.5)));
        assert!(close((x2, y2), (2.9, 1.5)));

        let (start, end) = strike_endpoints(Line::ALL[7]);
        assert!(close(start, (2.9, 2.9)));
        assert!(close(end, (0.1, 0.1)));
    }

    #[test]
    fn test_column_strike_extends_vertically_only() {
        // Middle column: top center (1.5, 2.5) down to bottom center (1.5, 0.5).
        let (start, end) = strike_endpoints(Line::ALL[4]);
        assert!(close(start, (1.5, 2.9)));
        assert!(close(end, (1.5, 0.1)));
    }

    #[test]
    fn test_x_strokes_cross_at_center() {
        let [a, b] = x_strokes(Position::Center);
        assert!(close(a.0, (1.25, 1.75)));
        assert!(close(a.1, (1.75, 1.25)));
        assert!(close(b.0, (1.75, 1.75)));
    }
}
