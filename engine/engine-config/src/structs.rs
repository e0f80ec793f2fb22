//! Configuration struct definitions.
//!
//! All config structs with serde deserialization support and default values.

use crate::defaults;
use serde::Deserialize;

// ============================================================================
// Serde default functions (required for #[serde(default = "...")])
// ============================================================================

fn d_log_level() -> String {
    defaults::log_level().into()
}
fn d_exploration() -> f64 {
    defaults::exploration()
}
fn d_iterations() -> u32 {
    defaults::iterations()
}
fn d_time_budget_ms() -> u64 {
    defaults::time_budget_ms()
}
fn d_seed() -> u64 {
    defaults::seed()
}
fn d_games() -> u32 {
    defaults::games()
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Root configuration structure matching config.toml
#[derive(Debug, Deserialize, Default, Clone)]
pub struct CentralConfig {
    #[serde(default)]
    pub common: CommonConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub actor: ActorConfig,
}

/// Common configuration shared by all components
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CommonConfig {
    /// Default tracing filter when RUST_LOG is unset
    #[serde(default = "d_log_level")]
    pub log_level: String,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::log_level().into(),
        }
    }
}

/// Search parameters
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SearchConfig {
    /// UCB1 exploration constant
    #[serde(default = "d_exploration")]
    pub exploration: f64,
    /// Iterations per search
    #[serde(default = "d_iterations")]
    pub iterations: u32,
    /// Wall-clock budget per search; 0 searches by `iterations`
    #[serde(default = "d_time_budget_ms")]
    pub time_budget_ms: u64,
    /// Seed for the search RNG
    #[serde(default = "d_seed")]
    pub seed: u64,
}

impl SearchConfig {
    /// The time budget, if one is configured.
    pub fn time_budget(&self) -> Option<u64> {
        (self.time_budget_ms > 0).then_some(self.time_budget_ms)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            exploration: defaults::exploration(),
            iterations: defaults::iterations(),
            time_budget_ms: defaults::time_budget_ms(),
            seed: defaults::seed(),
        }
    }
}

/// Actor (self-play) configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ActorConfig {
    /// Games to play with `actor play`
    #[serde(default = "d_games")]
    pub games: u32,
}

impl Default for ActorConfig {
    fn default() -> Self {
        Self {
            games: defaults::games(),
        }
    }
}
