//! Default configuration values loaded from config.defaults.toml.
//!
//! The defaults file is embedded at compile time so a binary never depends on
//! finding it at runtime.

use once_cell::sync::Lazy;
use serde::Deserialize;

/// The embedded defaults TOML file (loaded at compile time)
const DEFAULTS_TOML: &str = include_str!("../../../config.defaults.toml");

/// Parsed defaults structure (parsed once at first use)
static DEFAULTS: Lazy<DefaultsConfig> = Lazy::new(|| {
    toml::from_str(DEFAULTS_TOML).expect("config.defaults.toml should be valid TOML")
});

// ============================================================================
// Internal structs for parsing config.defaults.toml
// ============================================================================

#[derive(Debug, Deserialize)]
struct DefaultsConfig {
    common: CommonDefaults,
    search: SearchDefaults,
    actor: ActorDefaults,
}

#[derive(Debug, Deserialize)]
struct CommonDefaults {
    log_level: String,
}

#[derive(Debug, Deserialize)]
struct SearchDefaults {
    exploration: f64,
    iterations: u32,
    time_budget_ms: u64,
    seed: u64,
}

#[derive(Debug, Deserialize)]
struct ActorDefaults {
    games: u32,
}

// ============================================================================
// Public accessor functions
// ============================================================================

// Common
pub fn log_level() -> &'static str {
    &DEFAULTS.common.log_level
}

// Search
pub fn exploration() -> f64 {
    DEFAULTS.search.exploration
}
pub fn iterations() -> u32 {
    DEFAULTS.search.iterations
}
pub fn time_budget_ms() -> u64 {
    DEFAULTS.search.time_budget_ms
}
pub fn seed() -> u64 {
    DEFAULTS.search.seed
}

// Actor
pub fn games() -> u32 {
    DEFAULTS.actor.games
}
