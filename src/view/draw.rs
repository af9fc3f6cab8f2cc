//! Paints the board on a ratatui canvas.

use super::layout::{BoardLayout, O_RADIUS, cell_center, strike_endpoints, x_strokes};
use super::scene::Scene;
use crate::scoreboard::Scoreboard;
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Style},
    symbols::Marker,
    widgets::{
        Block, Borders, Paragraph,
        canvas::{Canvas, Circle, Context, Line as CanvasLine, Rectangle},
    },
};
use std::time::Instant;
use tictactoe_board::{Actor, Cell, GameState, GameStatus, Position, Symbol};

const GRID: Color = Color::DarkGray;
const STRIKE: Color = Color::White;
const CURSOR: Color = Color::Yellow;
const X_RGB: (u8, u8, u8) = (80, 150, 255);
const O_RGB: (u8, u8, u8) = (235, 85, 85);

/// Renders one frame and returns the layout used, for hit-testing clicks.
pub fn draw(
    frame: &mut Frame,
    state: &GameState,
    scene: &Scene,
    scoreboard: &Scoreboard,
    cursor: Position,
    now: Instant,
) -> BoardLayout {
    let layout = BoardLayout::compute(frame.area());

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, 3.0])
        .y_bounds([0.0, 3.0])
        .paint(|ctx| {
            paint_grid(ctx);
            ctx.layer();
            paint_cursor(ctx, cursor, state);
            for sprite in scene.sprites() {
                if let Cell::Occupied(symbol) = state.board().get(sprite.position) {
                    paint_symbol(ctx, sprite.position, symbol, scene.opacity(sprite, now));
                }
            }
            if !scene.strikes().is_empty() {
                ctx.layer();
            }
            for line in scene.strikes() {
                let ((x1, y1), (x2, y2)) = strike_endpoints(*line);
                ctx.draw(&CanvasLine {
                    x1,
                    y1,
                    x2,
                    y2,
                    color: STRIKE,
                });
            }
        });
    frame.render_widget(canvas, layout.board);

    let status = Paragraph::new(status_text(state, scoreboard))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout.status);

    layout
}

/// Status bar contents: turn or result, tally, keys.
pub fn status_text(state: &GameState, scoreboard: &Scoreboard) -> String {
    let headline = match state.status() {
        GameStatus::InProgress => match state.next_actor() {
            Some(Actor::Computer) => format!("Computer ({}) is thinking", state.current_turn()),
            _ => format!("Your turn ({})", state.current_turn()),
        },
        GameStatus::Won { symbol, .. } if symbol == state.seats().human() => {
            format!("You win as {}!", symbol)
        }
        GameStatus::Won { symbol, .. } => format!("Computer wins as {}", symbol),
        GameStatus::Drawn => "Draw".to_string(),
    };
    format!(
        "{}  |  {}  |  click or 1-9, arrows+enter, r restart, q quit",
        headline, scoreboard
    )
}

fn paint_grid(ctx: &mut Context) {
    for at in [1.0, 2.0] {
        ctx.draw(&CanvasLine {
            x1: at,
            y1: 0.0,
            x2: at,
            y2: 3.0,
            color: GRID,
        });
        ctx.draw(&CanvasLine {
            x1: 0.0,
            y1: at,
            x2: 3.0,
            y2: at,
            color: GRID,
        });
    }
}

fn paint_cursor(ctx: &mut Context, cursor: Position, state: &GameState) {
    if state.next_actor() != Some(Actor::Human) {
        return;
    }
    let (cx, cy) = cell_center(cursor);
    let half = 0.45;
    ctx.draw(&Rectangle {
        x: cx - half,
        y: cy - half,
        width: half * 2.0,
        height: half * 2.0,
        color: CURSOR,
    });
}

fn paint_symbol(ctx: &mut Context, position: Position, symbol: Symbol, opacity: f64) {
    match symbol {
        Symbol::X => {
            let color = faded(X_RGB, opacity);
            for ((x1, y1), (x2, y2)) in x_strokes(position) {
                ctx.draw(&CanvasLine {
                    x1,
                    y1,
                    x2,
                    y2,
                    color,
                });
            }
        }
        Symbol::O => {
            let (x, y) = cell_center(position);
            ctx.draw(&Circle {
                x,
                y,
                radius: O_RADIUS,
                color: faded(O_RGB, opacity),
            });
        }
    }
}

/// Scales a color toward black; terminals have no alpha.
fn faded((r, g, b): (u8, u8, u8), opacity: f64) -> Color {
    let scale = |c: u8| (f64::from(c) * opacity.clamp(0.0, 1.0)).round() as u8;
    Color::Rgb(scale(r), scale(g), scale(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_board::Seats;

    #[test]
    fn test_status_text_for_turns_and_results() {
        let board = Scoreboard::new();
        let mut state = GameState::with_seats(Seats::new(Symbol::X));
        assert!(status_text(&state, &board).starts_with("Your turn (X)"));

        state.apply_move(0).expect("legal");
        assert!(status_text(&state, &board).starts_with("Computer (O) is thinking"));

        for index in [3, 1, 4, 2] {
            state.apply_move(index).expect("legal");
        }
        assert!(status_text(&state, &board).starts_with("You win as X!"));
    }

    #[test]
    fn test_faded_scales_toward_black() {
        assert_eq!(faded((200, 100, 50), 0.5), Color::Rgb(100, 50, 25));
        assert_eq!(faded((200, 100, 50), 1.0), Color::Rgb(200, 100, 50));
    }
}
