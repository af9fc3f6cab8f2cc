//! Canvas tic-tac-toe - command-line entry point.

use anyhow::{Context, Result};
use canvas_tictactoe::{Cli, CliCommand, GameConfig, run_play, simulate};
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::Path;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        CliCommand::Play {
            human_symbol,
            seed,
            log_file,
        } => {
            init_file_tracing(&log_file)?;
            let mut config = GameConfig::load_or_default(&cli.config)?;
            if let Some(symbol) = human_symbol {
                config = config.with_human_symbol(symbol.into());
            }
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            run_play(config).await
        }
        CliCommand::Simulate { games, seed } => {
            init_stderr_tracing();
            let config = GameConfig::load_or_default(&cli.config)?;
            run_simulation(games, seed.or(*config.seed()))
        }
    }
}

/// Plays headless games and prints one JSON object per game, then the tally.
#[instrument]
fn run_simulation(games: u32, seed: Option<u64>) -> Result<()> {
    info!("Starting simulation");
    let mut rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let report = simulate(games, &mut rng)?;
    for record in &report.games {
        println!("{}", serde_json::to_string(record)?);
    }
    println!("{}", serde_json::to_string(&report.tally)?);
    Ok(())
}

/// Logs to a file so the board owns the terminal.
fn init_file_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,canvas_tictactoe=debug")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn init_stderr_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
