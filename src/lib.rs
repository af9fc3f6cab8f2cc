//! Canvas tic-tac-toe - a human against a random opponent on a terminal
//! canvas.
//!
//! # Architecture
//!
//! - **Engine**: [`tictactoe_board`] holds the board state machine
//! - **Controller**: [`MatchController`] owns the game, applies commands one
//!   at a time and emits [`BoardEvent`]s for the view
//! - **Scheduler**: [`TokioScheduler`] delivers the computer's reply and the
//!   post-game reset after their delays
//! - **View**: layout, hit-testing, fade-in and painting on a ratatui canvas
//! - **Simulation**: headless random-vs-random games
//!
//! # Example
//!
//! ```
//! use canvas_tictactoe::{BoardEvent, Command, MatchController, Scheduler, Timing};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use std::time::Duration;
//! use tictactoe_board::{Seats, Symbol};
//!
//! #[derive(Default)]
//! struct Later(Vec<Command>);
//!
//! impl Scheduler for Later {
//!     fn schedule(&mut self, _delay: Duration, command: Command) {
//!         self.0.push(command);
//!     }
//!     fn cancel_all(&mut self) {
//!         self.0.clear();
//!     }
//! }
//!
//! let mut controller = MatchController::new(
//!     Seats::new(Symbol::X),
//!     Timing::default(),
//!     Later::default(),
//!     ChaCha8Rng::seed_from_u64(1),
//! );
//! let events = controller.handle(Command::CellClicked { index: 4 });
//! assert!(matches!(events[0], BoardEvent::SymbolPlaced { .. }));
//! assert_eq!(controller.scheduler().0, vec![Command::ComputerTurn { generation: 0 }]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod controller;
mod input;
mod scheduler;
mod scoreboard;
mod simulate;
pub mod view;

pub use app::run_play;
pub use cli::{Cli, Command as CliCommand, SymbolArg};
pub use config::{ConfigError, GameConfig};
pub use controller::{BoardEvent, Command, IgnoreReason, MatchController, Timing};
pub use input::{Intent, intent_for_event, intent_for_key, intent_for_mouse, move_cursor};
pub use scheduler::{Scheduler, TokioScheduler};
pub use scoreboard::Scoreboard;
pub use simulate::{GameRecord, SimulationReport, simulate};
