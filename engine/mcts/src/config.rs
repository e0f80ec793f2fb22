//! MCTS configuration parameters.

use std::time::Duration;

/// Standard UCB1 exploration constant, sqrt(2).
pub const DEFAULT_EXPLORATION: f32 = std::f32::consts::SQRT_2;

/// Configuration for Monte Carlo Tree Search.
#[derive(Debug, Clone)]
pub struct MctsConfig {
    /// Exploration constant `c` in the UCB1 formula.
    /// Higher values favor under-visited children, lower values favor
    /// the current best win rate. sqrt(2) is the textbook choice.
    pub exploration: f32,

    /// Number of iterations to run per search when searching by count.
    pub iterations: u32,

    /// Wall-clock budget per search in milliseconds.
    /// When set, it replaces the iteration count as the stopping rule.
    pub time_budget_ms: Option<u64>,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            exploration: DEFAULT_EXPLORATION,
            iterations: 1000,
            time_budget_ms: None,
        }
    }
}

impl MctsConfig {
    /// Create a fast config for testing.
    pub fn for_testing() -> Self {
        Self {
            exploration: DEFAULT_EXPLORATION,
            iterations: 300,
            time_budget_ms: None,
        }
    }

    /// Builder pattern: set exploration constant.
    pub fn with_exploration(mut self, c: f32) -> Self {
        self.exploration = c;
        self
    }

    /// Builder pattern: set number of iterations.
    pub fn with_iterations(mut self, n: u32) -> Self {
        self.iterations = n;
        self
    }

    /// Builder pattern: search by wall-clock time instead of iterations.
    pub fn with_time_budget_ms(mut self, ms: u64) -> Self {
        self.time_budget_ms = Some(ms);
        self
    }

    /// Stopping rule described by this config.
    pub fn budget(&self) -> SearchBudget {
        match self.time_budget_ms {
            Some(ms) => SearchBudget::Time(Duration::from_millis(ms)),
            None => SearchBudget::Iterations(self.iterations),
        }
    }
}

/// When a search stops. Checked only between iterations; an iteration in
/// progress always completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchBudget {
    /// Run exactly this many iterations
    Iterations(u32),
    /// Run until this much wall-clock time has elapsed
    Time(Duration),
}

impl SearchBudget {
    /// Check whether another iteration may start.
    #[inline]
    pub fn allows(&self, completed: u32, elapsed: Duration) -> bool {
        match *self {
            SearchBudget::Iterations(n) => completed < n,
            SearchBudget::Time(limit) => elapsed < limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MctsConfig::default();
        assert_eq!(config.iterations, 1000);
        assert!((config.exploration - 1.41421356).abs() < 1e-6);
        assert_eq!(config.budget(), SearchBudget::Iterations(1000));
    }

    #[test]
    fn test_builder_pattern() {
        let config = MctsConfig::default()
            .with_iterations(100)
            .with_exploration(0.5);

        assert_eq!(config.iterations, 100);
        assert!((config.exploration - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_time_budget_replaces_iterations() {
        let config = MctsConfig::for_testing().with_time_budget_ms(25);
        assert_eq!(
            config.budget(),
            SearchBudget::Time(Duration::from_millis(25))
        );
    }

    #[test]
    fn test_budget_allows() {
        let by_count = SearchBudget::Iterations(2);
        assert!(by_count.allows(1, Duration::from_secs(100)));
        assert!(!by_count.allows(2, Duration::ZERO));

        let by_time = SearchBudget::Time(Duration::from_millis(10));
        assert!(by_time.allows(1_000_000, Duration::from_millis(9)));
        assert!(!by_time.allows(0, Duration::from_millis(10)));
    }
}
