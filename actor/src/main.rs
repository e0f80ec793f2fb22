//! Actor - command-line front-end for the MCTS engine
//!
//! Two modes:
//! 1. `suggest`: search one TicTacToe position and print the chosen move
//! 2. `play`: let the engine play full games against itself and report a tally

use anyhow::Result;
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::info;

mod config;
mod play;

use crate::config::{Command, Config};

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate()?;

    init_tracing(&config.log_level)?;
    info!(log_level = %config.log_level, "Tracing initialized");

    let mcts_config = config.mcts_config();
    info!(
        exploration = mcts_config.exploration,
        budget = ?mcts_config.budget(),
        seed = config.seed,
        "Search configured"
    );

    let engine = play::build_engine(&mcts_config);
    let mut rng = ChaCha20Rng::seed_from_u64(config.seed);

    match &config.command {
        Command::Suggest { board } => {
            let (state, result) = play::suggest(&engine, &mcts_config, board, &mut rng)?;
            println!("{state}");
            println!();
            println!(
                "Best move: {} after {} iterations ({} ms)",
                result.action,
                result.iterations,
                result.elapsed.as_millis()
            );
            for child in &result.children {
                println!(
                    "  {:<18} visits {:>6}  win rate {:.3}",
                    child.action.to_string(),
                    child.visits,
                    child.win_rate()
                );
            }
        }
        Command::Play { games } => {
            let tally = play::play_games(&engine, &mcts_config, *games, &mut rng, |n, game| {
                println!("Game {n}:");
                println!("{}", game.final_state);
                println!();
            })?;
            println!("{tally}");
        }
    }

    Ok(())
}
