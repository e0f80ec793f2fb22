//! Centralized configuration loading from config.toml.
//!
//! This crate provides the configuration structs and loading logic shared by
//! the search engine front-ends (currently the `actor` binary).
//!
//! # Configuration Priority
//!
//! Settings are loaded with the following priority (highest to lowest):
//! 1. Environment variables (`MCTS_<SECTION>_<KEY>`)
//! 2. config.toml file
//! 3. Built-in defaults (config.defaults.toml, embedded at compile time)
//!
//! Command-line flags of the binaries sit above all of these.
//!
//! # Environment Variable Override Pattern
//!
//! ```text
//! MCTS_<SECTION>_<KEY>=value
//!
//! Examples:
//!     MCTS_COMMON_LOG_LEVEL=debug
//!     MCTS_SEARCH_ITERATIONS=5000
//!     MCTS_SEARCH_TIME_BUDGET_MS=250
//!     MCTS_ACTOR_GAMES=10
//! ```

mod defaults;
mod loader;
mod structs;

pub use defaults::*;
pub use loader::{apply_env_overrides, load_config, load_from_path, CONFIG_SEARCH_PATHS};
pub use structs::*;
