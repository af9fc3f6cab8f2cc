//! Maps terminal input to what the player meant.

use crate::view::BoardLayout;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use tictactoe_board::Position;

/// What an input event asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Place a symbol in a cell.
    Select(Position),
    /// Move the keyboard cursor.
    MoveCursor(Position),
    /// Clear the board now.
    Restart,
    /// Leave the program.
    Quit,
    /// Nothing to do.
    None,
}

/// Interprets one terminal event.
pub fn intent_for_event(event: &Event, cursor: Position, layout: &BoardLayout) -> Intent {
    match event {
        Event::Key(key) => intent_for_key(key, cursor),
        Event::Mouse(mouse) => intent_for_mouse(mouse, layout),
        _ => Intent::None,
    }
}

/// Digits pick cells 1-9, arrows move the cursor, Enter/Space pick it.
pub fn intent_for_key(key: &KeyEvent, cursor: Position) -> Intent {
    if key.kind != KeyEventKind::Press {
        return Intent::None;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Intent::Quit,
        KeyCode::Char('r') => Intent::Restart,
        KeyCode::Enter | KeyCode::Char(' ') => Intent::Select(cursor),
        KeyCode::Char(c) => c
            .to_digit(10)
            .filter(|d| (1..=9).contains(d))
            .and_then(|d| Position::from_index(d as usize - 1))
            .map_or(Intent::None, Intent::Select),
        code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
            Intent::MoveCursor(move_cursor(cursor, code))
        }
        _ => Intent::None,
    }
}

/// Left click inside the board picks the cell under the pointer.
pub fn intent_for_mouse(mouse: &MouseEvent, layout: &BoardLayout) -> Intent {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => layout
            .hit_test(mouse.column, mouse.row)
            .map_or(Intent::None, Intent::Select),
        _ => Intent::None,
    }
}

/// Moves the cursor one cell, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::layout::Rect;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digits_select_cells() {
        let cursor = Position::Center;
        assert_eq!(
            intent_for_key(&press(KeyCode::Char('1')), cursor),
            Intent::Select(Position::TopLeft)
        );
        assert_eq!(
            intent_for_key(&press(KeyCode::Char('9')), cursor),
            Intent::Select(Position::BottomRight)
        );
        assert_eq!(intent_for_key(&press(KeyCode::Char('0')), cursor), Intent::None);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Right), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Down), Position::BottomCenter);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Right), Position::BottomRight);
    }

    #[test]
    fn test_enter_selects_cursor_and_q_quits() {
        assert_eq!(
            intent_for_key(&press(KeyCode::Enter), Position::MiddleLeft),
            Intent::Select(Position::MiddleLeft)
        );
        assert_eq!(intent_for_key(&press(KeyCode::Char('q')), Position::Center), Intent::Quit);
        assert_eq!(intent_for_key(&press(KeyCode::Char('r')), Position::Center), Intent::Restart);
    }

    #[test]
    fn test_left_click_hits_cell() {
        let layout = BoardLayout::compute(Rect::new(0, 0, 40, 40));
        let click = |column, row, kind| MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };
        let down = MouseEventKind::Down(MouseButton::Left);

        // Board spans columns 2..38, rows 9..27; each cell 12x6.
        assert_eq!(
            intent_for_mouse(&click(2, 9, down), &layout),
            Intent::Select(Position::TopLeft)
        );
        assert_eq!(
            intent_for_mouse(&click(20, 18, down), &layout),
            Intent::Select(Position::Center)
        );
        assert_eq!(
            intent_for_mouse(&click(37, 26, down), &layout),
            Intent::Select(Position::BottomRight)
        );
        assert_eq!(intent_for_mouse(&click(1, 9, down), &layout), Intent::None);
        assert_eq!(
            intent_for_mouse(&click(20, 18, MouseEventKind::Moved), &layout),
            Intent::None
        );
    }
}
