//! Match controller: routes input to the board engine and tells the view
//! what to draw.
//!
//! The controller owns the single [`GameState`]. Everything that changes the
//! board arrives as a [`Command`] on one event loop, so moves are applied
//! strictly one at a time. Deferred work (the computer's reply, clearing a
//! finished board) goes through a [`Scheduler`] and comes back as a command
//! stamped with the generation it was scheduled under; commands from an older
//! generation are dropped.

use crate::scheduler::Scheduler;
use crate::scoreboard::Scoreboard;
use rand::Rng;
use std::time::Duration;
use tictactoe_board::{
    Actor, GameState, GameStatus, Line, MoveError, Position, Seats, Symbol, rules,
};
use tracing::{debug, info, instrument};

/// Input to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// The human picked a cell.
    CellClicked {
        /// Cell index (0-8).
        index: usize,
    },
    /// The computer's reply is due.
    ComputerTurn {
        /// Generation the reply was scheduled under.
        generation: u64,
    },
    /// A finished board should be cleared.
    ResetDue {
        /// Generation the reset was scheduled under.
        generation: u64,
    },
    /// Start over immediately.
    Restart,
}

/// Output for the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardEvent {
    /// Draw `symbol` at `position`.
    SymbolPlaced {
        /// Cell the symbol went into.
        position: Position,
        /// Symbol to draw.
        symbol: Symbol,
        /// Who placed it.
        actor: Actor,
    },
    /// Draw a strike-through over a completed line. A move that completes
    /// two lines emits one event per line.
    LineStruck {
        /// The completed line.
        line: Line,
        /// Winning symbol.
        symbol: Symbol,
    },
    /// The game ended; the board will clear after the restart delay.
    GameOver {
        /// Won or drawn.
        status: GameStatus,
    },
    /// Remove every symbol and strike from the canvas.
    BoardCleared,
    /// A command was dropped. Not drawn.
    MoveIgnored {
        /// Why it was dropped.
        reason: IgnoreReason,
    },
}

/// Why a command had no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IgnoreReason {
    /// Human input while the computer owns the turn or after the game ended.
    #[display("not the human's turn")]
    NotHumanTurn,
    /// Scheduled before the last reset.
    #[display("stale command from generation {}", _0)]
    Stale(u64),
    /// Computer reply arrived when it could not move.
    #[display("computer cannot move now")]
    ComputerCannotMove,
    /// The engine refused the move.
    #[display("{}", _0)]
    Rejected(MoveError),
}

/// Delays the controller uses when scheduling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Delay before the computer answers.
    pub computer_delay: Duration,
    /// Delay before a finished board is cleared.
    pub restart_delay: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            computer_delay: Duration::from_millis(1000),
            restart_delay: Duration::from_millis(1000),
        }
    }
}

/// Owns the game and drives it from commands.
#[derive(Debug)]
pub struct MatchController<S, R> {
    state: GameState,
    scheduler: S,
    rng: R,
    timing: Timing,
    generation: u64,
    scoreboard: Scoreboard,
}

impl<S: Scheduler, R: Rng> MatchController<S, R> {
    /// Creates a controller for a fresh game.
    #[instrument(skip(scheduler, rng))]
    pub fn new(seats: Seats, timing: Timing, scheduler: S, rng: R) -> Self {
        info!(human = %seats.human(), "Creating match controller");
        Self {
            state: GameState::with_seats(seats),
            scheduler,
            rng,
            timing,
            generation: 0,
            scoreboard: Scoreboard::new(),
        }
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The scheduler deferred commands go through.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Finished-game tally.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Number of resets so far. Commands carry this to detect staleness.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Schedules the opening move when the computer plays X.
    pub fn start(&mut self) {
        self.schedule_computer_if_due();
    }

    /// Applies one command and returns what the view should draw.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn handle(&mut self, command: Command) -> Vec<BoardEvent> {
        match command {
            Command::CellClicked { index } => self.human_move(index),
            Command::ComputerTurn { generation } => self.computer_move(generation),
            Command::ResetDue { generation } => {
                if generation != self.generation {
                    return vec![ignored(IgnoreReason::Stale(generation))];
                }
                self.reset()
            }
            Command::Restart => {
                self.scheduler.cancel_all();
                self.reset()
            }
        }
    }

    fn human_move(&mut self, index: usize) -> Vec<BoardEvent> {
        if self.state.next_actor() != Some(Actor::Human) {
            debug!(index, "Click ignored outside the human's turn");
            return vec![ignored(IgnoreReason::NotHumanTurn)];
        }
        self.apply(index, Actor::Human)
    }

    fn computer_move(&mut self, generation: u64) -> Vec<BoardEvent> {
        if generation != self.generation {
            debug!(generation, "Dropping computer turn from an earlier game");
            return vec![ignored(IgnoreReason::Stale(generation))];
        }
        if self.state.next_actor() != Some(Actor::Computer) {
            debug!("Computer turn arrived when it could not move");
            return vec![ignored(IgnoreReason::ComputerCannotMove)];
        }
        match self.state.choose_random_move(&mut self.rng) {
            Ok(position) => {
                debug!(%position, "Computer chose a cell");
                self.apply(position.to_index(), Actor::Computer)
            }
            Err(e) => vec![ignored(IgnoreReason::Rejected(e))],
        }
    }

    fn apply(&mut self, index: usize, actor: Actor) -> Vec<BoardEvent> {
        let outcome = match self.state.apply_move(index) {
            Ok(outcome) => outcome,
            Err(e) => {
                debug!(index, error = %e, "Move rejected");
                return vec![ignored(IgnoreReason::Rejected(e))];
            }
        };

        let mut events = vec![BoardEvent::SymbolPlaced {
            position: outcome.position,
            symbol: outcome.symbol,
            actor,
        }];

        if outcome.is_terminal() {
            self.scoreboard.record(outcome.status);
            info!(status = %outcome.status, games = self.scoreboard.games(), "Game over");
            events.extend(rules::completed_lines(self.state.board()).map(|(symbol, line)| {
                BoardEvent::LineStruck { line, symbol }
            }));
            events.push(BoardEvent::GameOver {
                status: outcome.status,
            });
            self.scheduler.schedule(
                self.timing.restart_delay,
                Command::ResetDue {
                    generation: self.generation,
                },
            );
        } else {
            self.schedule_computer_if_due();
        }
        events
    }

    fn reset(&mut self) -> Vec<BoardEvent> {
        self.state.reset();
        self.generation += 1;
        info!(generation = self.generation, "Board reset");
        self.schedule_computer_if_due();
        vec![BoardEvent::BoardCleared]
    }

    fn schedule_computer_if_due(&mut self) {
        if self.state.next_actor() == Some(Actor::Computer) {
            self.scheduler.schedule(
                self.timing.computer_delay,
                Command::ComputerTurn {
                    generation: self.generation,
                },
            );
        }
    }
}

fn ignored(reason: IgnoreReason) -> BoardEvent {
    BoardEvent::MoveIgnored { reason }
}
