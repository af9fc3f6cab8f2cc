//! Interactive terminal session: one event loop owning the controller.

use crate::config::GameConfig;
use crate::controller::{BoardEvent, Command, MatchController, Timing};
use crate::input::{Intent, intent_for_event};
use crate::scheduler::TokioScheduler;
use crate::view::{self, BoardLayout, Fade, Scene};
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tictactoe_board::{Position, Seats};
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

/// Frame interval while a symbol is fading in.
const FRAME: Duration = Duration::from_millis(16);

/// Input poll timeout once the canvas is still. Also bounds how late a due
/// timer command is picked up.
const IDLE_TICK: Duration = Duration::from_millis(50);

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Runs the interactive board until the player quits.
#[instrument(skip(config))]
pub async fn run_play(config: GameConfig) -> Result<()> {
    info!("Starting interactive session");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = event_loop(&mut terminal, &config).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Session ended with error");
    }
    res
}

async fn event_loop(terminal: &mut Term, config: &GameConfig) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let rng = match config.seed() {
        Some(seed) => ChaCha8Rng::seed_from_u64(*seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let timing = Timing {
        computer_delay: config.computer_delay(),
        restart_delay: config.restart_delay(),
    };
    let mut controller = MatchController::new(
        Seats::new(*config.human_symbol()),
        timing,
        TokioScheduler::new(tx.clone()),
        rng,
    );
    let mut scene = Scene::new(Fade {
        duration: config.fade_in(),
        from: *config.fade_from(),
    });
    let mut cursor = Position::Center;
    let mut layout = BoardLayout::compute(Rect::default());

    controller.start();

    loop {
        let now = Instant::now();
        terminal.draw(|f| {
            layout = view::draw(
                f,
                controller.state(),
                &scene,
                controller.scoreboard(),
                cursor,
                now,
            );
        })?;

        while let Ok(command) = rx.try_recv() {
            dispatch(&mut controller, &mut scene, command);
        }

        // Let timer tasks run between polls.
        tokio::task::yield_now().await;

        let tick = if scene.is_animating(Instant::now()) {
            FRAME
        } else {
            IDLE_TICK
        };
        if !event::poll(tick)? {
            continue;
        }
        let input = event::read()?;
        match intent_for_event(&input, cursor, &layout) {
            Intent::Quit => {
                info!("Player quit");
                return Ok(());
            }
            Intent::Restart => dispatch(&mut controller, &mut scene, Command::Restart),
            Intent::Select(position) => {
                cursor = position;
                dispatch(
                    &mut controller,
                    &mut scene,
                    Command::CellClicked {
                        index: position.to_index(),
                    },
                );
            }
            Intent::MoveCursor(position) => cursor = position,
            Intent::None => {}
        }
    }
}

fn dispatch(
    controller: &mut MatchController<TokioScheduler, ChaCha8Rng>,
    scene: &mut Scene,
    command: Command,
) {
    let now = Instant::now();
    for event in controller.handle(command) {
        if let BoardEvent::MoveIgnored { reason } = event {
            debug!(?command, %reason, "Command ignored");
            continue;
        }
        scene.apply(&event, now);
    }
}
