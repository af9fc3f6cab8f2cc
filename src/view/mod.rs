//! Terminal canvas view.
//!
//! The view never holds game state. It keeps a [`Scene`] of sprites keyed by
//! cell, updated from controller events, and reads symbols from the board
//! when painting.

mod draw;
mod layout;
mod scene;

pub use draw::{draw, status_text};
pub use layout::{
    BoardLayout, O_RADIUS, STATUS_HEIGHT, STRIKE_EXTENSION, X_GAP, cell_center, strike_endpoints,
    x_strokes,
};
pub use scene::{Fade, Scene, Sprite};
