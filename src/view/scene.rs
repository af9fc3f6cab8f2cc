//! What is on the canvas, independent of how it is painted.
//!
//! Sprites only remember which cell they belong to. The symbol drawn there
//! is read from the board at paint time.

use crate::controller::BoardEvent;
use std::time::{Duration, Instant};
use tictactoe_board::{Line, Position};

/// Opacity ramp for newly placed symbols.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    /// Length of the ramp.
    pub duration: Duration,
    /// Opacity at placement.
    pub from: f64,
}

impl Default for Fade {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(200),
            from: 0.5,
        }
    }
}

impl Fade {
    /// Opacity `elapsed` after placement, linear from `from` to 1.0.
    pub fn opacity(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() || elapsed >= self.duration {
            return 1.0;
        }
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.from + (1.0 - self.from) * t
    }
}

/// A placed symbol on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite {
    /// Cell the sprite is drawn in.
    pub position: Position,
    /// When it appeared, for the fade-in.
    pub placed_at: Instant,
}

/// Canvas contents between frames.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    fade: Fade,
    sprites: Vec<Sprite>,
    strikes: Vec<Line>,
}

impl Scene {
    /// Empty canvas.
    pub fn new(fade: Fade) -> Self {
        Self {
            fade,
            sprites: Vec::new(),
            strikes: Vec::new(),
        }
    }

    /// Updates the canvas for one controller event.
    pub fn apply(&mut self, event: &BoardEvent, now: Instant) {
        match event {
            BoardEvent::SymbolPlaced { position, .. } => self.sprites.push(Sprite {
                position: *position,
                placed_at: now,
            }),
            BoardEvent::LineStruck { line, .. } => self.strikes.push(*line),
            BoardEvent::BoardCleared => {
                self.sprites.clear();
                self.strikes.clear();
            }
            BoardEvent::GameOver { .. } | BoardEvent::MoveIgnored { .. } => {}
        }
    }

    /// Placed sprites, oldest first.
    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    /// Completed lines to strike through.
    pub fn strikes(&self) -> &[Line] {
        &self.strikes
    }

    /// Opacity of `sprite` at `now`.
    pub fn opacity(&self, sprite: &Sprite, now: Instant) -> f64 {
        self.fade.opacity(now.saturating_duration_since(sprite.placed_at))
    }

    /// Whether any sprite is still fading in.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.sprites.iter().any(|s| self.opacity(s, now) < 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_board::{Actor, GameStatus, Symbol};

    #[test]
    fn test_fade_ramps_from_half_to_full() {
        let fade = Fade::default();
        assert_eq!(fade.opacity(Duration::ZERO), 0.5);
        assert!((fade.opacity(Duration::from_millis(100)) - 0.75).abs() < 1e-9);
        assert_eq!(fade.opacity(Duration::from_millis(200)), 1.0);
        assert_eq!(fade.opacity(Duration::from_secs(5)), 1.0);
    }

    #[test]
    fn test_fade_is_monotone() {
        let fade = Fade::default();
        let levels: Vec<f64> = (0..=25)
            .map(|ms| fade.opacity(Duration::from_millis(ms * 10)))
            .collect();
        assert!(levels.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_scene_tracks_events() {
        let now = Instant::now();
        let mut scene = Scene::new(Fade::default());
        scene.apply(
            &BoardEvent::SymbolPlaced {
                position: Position::Center,
                symbol: Symbol::X,
                actor: Actor::Human,
            },
            now,
        );
        scene.apply(
            &BoardEvent::LineStruck {
                line: Line::ALL[4],
                symbol: Symbol::X,
            },
            now,
        );
        scene.apply(&BoardEvent::GameOver { status: GameStatus::Drawn }, now);

        assert_eq!(scene.sprites().len(), 1);
        assert_eq!(scene.strikes(), &[Line::ALL[4]]);
        assert!(scene.is_animating(now));
        assert!(!scene.is_animating(now + Duration::from_millis(250)));

        scene.apply(&BoardEvent::BoardCleared, now);
        assert!(scene.sprites().is_empty());
        assert!(scene.strikes().is_empty());
    }
}
