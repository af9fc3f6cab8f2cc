//! Headless random-vs-random games.

use crate::scoreboard::Scoreboard;
use rand::Rng;
use serde::Serialize;
use tictactoe_board::{GameState, GameStatus, Line, MoveError, Symbol};
use tracing::{debug, info, instrument};

/// One finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    /// 1-based game number.
    pub game: u32,
    /// Cell indices in play order; X moved first.
    pub moves: Vec<usize>,
    /// Winning symbol, `None` for a draw.
    pub winner: Option<Symbol>,
    /// Indices of the winning line.
    pub line: Option<[usize; 3]>,
}

/// Summary of a simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationReport {
    /// Per-game records.
    pub games: Vec<GameRecord>,
    /// Totals.
    pub tally: Scoreboard,
}

/// Plays `games` games where both sides pick uniformly random legal moves.
#[instrument(skip(rng))]
pub fn simulate<R: Rng>(games: u32, rng: &mut R) -> Result<SimulationReport, MoveError> {
    let mut state = GameState::new();
    let mut tally = Scoreboard::new();
    let mut records = Vec::with_capacity(games as usize);

    for game in 1..=games {
        state.reset();
        while !state.is_terminal() {
            let position = state.choose_random_move(rng)?;
            state.place(position)?;
        }

        let status = state.status();
        tally.record(status);
        let record = GameRecord {
            game,
            moves: state.history().iter().map(|m| m.position.to_index()).collect(),
            winner: status.winner(),
            line: status.winning_line().map(|l| l.indices()),
        };
        debug!(game, status = %status, moves = record.moves.len(), "Game finished");
        records.push(record);
    }

    info!(%tally, "Simulation finished");
    Ok(SimulationReport {
        games: records,
        tally,
    })
}

impl GameRecord {
    /// Whether the game ended without a winner.
    pub fn is_draw(&self) -> bool {
        self.winner.is_none()
    }

    /// Final status rebuilt from the record.
    pub fn status(&self) -> GameStatus {
        let line = self
            .line
            .and_then(|indices| Line::ALL.into_iter().find(|l| l.indices() == indices));
        match (self.winner, line) {
            (Some(symbol), Some(line)) => GameStatus::Won { symbol, line },
            _ => GameStatus::Drawn,
        }
    }
}
