//! Configuration for the actor binary
//!
//! Configuration is loaded from config.toml with environment variable overrides.
//! CLI arguments take highest priority, followed by env vars, then config.toml.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use engine_config::{load_config, CentralConfig};
use mcts::MctsConfig;
use once_cell::sync::Lazy;
use tracing::level_filters::LevelFilter;

// Load central config once at startup
static CENTRAL_CONFIG: Lazy<CentralConfig> = Lazy::new(load_config);

// Default value functions that read from central config
fn default_iterations() -> u32 {
    CENTRAL_CONFIG.search.iterations
}

fn default_time_ms() -> u64 {
    CENTRAL_CONFIG.search.time_budget_ms
}

fn default_exploration() -> f32 {
    CENTRAL_CONFIG.search.exploration as f32
}

fn default_seed() -> u64 {
    CENTRAL_CONFIG.search.seed
}

fn default_log_level() -> String {
    CENTRAL_CONFIG.common.log_level.clone()
}

fn default_games() -> u32 {
    CENTRAL_CONFIG.actor.games
}

#[derive(Parser, Debug, Clone)]
#[command(name = "actor")]
#[command(about = "Monte Carlo Tree Search player for TicTacToe")]
#[command(
    long_about = "Runs UCB1 Monte Carlo Tree Search with random rollouts to pick
TicTacToe moves, either for a single position or for whole self-play games.

Configuration is loaded from config.toml with environment variable overrides.
CLI arguments take highest priority."
)]
pub struct Config {
    #[command(subcommand)]
    pub command: Command,

    /// Iterations per search (ignored when --time-ms is set)
    #[arg(long, global = true, default_value_t = default_iterations())]
    pub iterations: u32,

    /// Wall-clock budget per search in milliseconds (0 to search by iterations)
    #[arg(long, global = true, default_value_t = default_time_ms())]
    pub time_ms: u64,

    /// UCB1 exploration constant
    #[arg(long, global = true, default_value_t = default_exploration())]
    pub exploration: f32,

    /// Seed for the search RNG
    #[arg(long, global = true, default_value_t = default_seed())]
    pub seed: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value_t = default_log_level())]
    pub log_level: String,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the engine's move for a position
    Suggest {
        /// Board as 9 cells of X, O or '.', row by row ('/' and spaces are ignored)
        #[arg(long)]
        board: String,
    },
    /// Let the engine play against itself
    Play {
        /// Number of games to play
        #[arg(long, default_value_t = default_games())]
        games: u32,
    },
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if !self.exploration.is_finite() || self.exploration <= 0.0 {
            return Err(anyhow!(
                "exploration must be a positive number, got {}",
                self.exploration
            ));
        }

        if self.time_ms == 0 && self.iterations == 0 {
            return Err(anyhow!(
                "iterations must be greater than 0 when no time budget is set"
            ));
        }

        if let Command::Play { games: 0 } = self.command {
            return Err(anyhow!("games must be greater than 0"));
        }

        if self.log_level.parse::<LevelFilter>().is_err() {
            return Err(anyhow!(
                "invalid log level '{}', expected one of trace, debug, info, warn, error",
                self.log_level
            ));
        }

        Ok(())
    }

    /// Search parameters for the engine.
    pub fn mcts_config(&self) -> MctsConfig {
        let config = MctsConfig::default()
            .with_exploration(self.exploration)
            .with_iterations(self.iterations);

        if self.time_ms > 0 {
            config.with_time_budget_ms(self.time_ms)
        } else {
            config
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcts::SearchBudget;
    use std::time::Duration;

    fn base_config() -> Config {
        Config {
            command: Command::Play { games: 2 },
            iterations: 100,
            time_ms: 0,
            exploration: 1.4,
            seed: 1,
            log_level: "info".into(),
        }
    }

    #[test]
    fn validate_accepts_valid_configuration() {
        let cfg = base_config();
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_non_positive_exploration() {
        let mut cfg = base_config();
        cfg.exploration = 0.0;
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("exploration"));

        cfg.exploration = f32::NAN;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_budget() {
        let mut cfg = base_config();
        cfg.iterations = 0;
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("iterations"));
    }

    #[test]
    fn validate_accepts_zero_iterations_with_time_budget() {
        let mut cfg = base_config();
        cfg.iterations = 0;
        cfg.time_ms = 20;
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_games() {
        let mut cfg = base_config();
        cfg.command = Command::Play { games: 0 };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("games"));
    }

    #[test]
    fn validate_rejects_invalid_log_level() {
        let mut cfg = base_config();
        cfg.log_level = "nope".into();
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("invalid log level"));
    }

    #[test]
    fn mcts_config_searches_by_iterations() {
        let cfg = base_config();
        let mcts = cfg.mcts_config();
        assert!((mcts.exploration - 1.4).abs() < 1e-6);
        assert_eq!(mcts.budget(), SearchBudget::Iterations(100));
    }

    #[test]
    fn mcts_config_prefers_time_budget() {
        let mut cfg = base_config();
        cfg.time_ms = 75;
        assert_eq!(
            cfg.mcts_config().budget(),
            SearchBudget::Time(Duration::from_millis(75))
        );
    }

    #[test]
    fn parses_suggest_command() {
        let cfg = Config::try_parse_from([
            "actor",
            "suggest",
            "--board",
            "XOO/X../...",
            "--iterations",
            "50",
        ])
        .unwrap();

        assert_eq!(
            cfg.command,
            Command::Suggest {
                board: "XOO/X../...".into()
            }
        );
        assert_eq!(cfg.iterations, 50);
    }

    #[test]
    fn parses_play_command_with_global_flags() {
        let cfg = Config::try_parse_from([
            "actor",
            "--seed",
            "9",
            "play",
            "--games",
            "4",
            "--time-ms",
            "30",
        ])
        .unwrap();

        assert_eq!(cfg.command, Command::Play { games: 4 });
        assert_eq!(cfg.seed, 9);
        assert_eq!(cfg.time_ms, 30);
    }
}
