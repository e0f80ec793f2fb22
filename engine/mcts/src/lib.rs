//! Monte Carlo Tree Search (MCTS) for two-player, zero-sum, perfect-information
//! games.
//!
//! This crate provides a game-agnostic MCTS implementation that works with any
//! game implementing the `engine-core` [`GameState`](engine_core::GameState)
//! trait.
//!
//! # Overview
//!
//! Each iteration of the search consists of four phases:
//!
//! 1. **Selection**: Descend from the root with UCB1 while nodes are fully
//!    expanded
//! 2. **Expansion**: Add exactly one new child for the next untried action
//! 3. **Simulation**: Score the new leaf with a [`Rollout`] (random playout by
//!    default)
//! 4. **Backpropagation**: Credit the score to every node on the path,
//!    complementing it (`1 - s`) at each level
//!
//! After the budget is spent, the root child with the highest empirical win
//! rate is returned.
//!
//! # Usage
//!
//! ```rust
//! use games_tictactoe::{Action, State};
//! use mcts::{FlatPolicy, MctsSearch, RandomRollout};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! // X has (0,0) and (1,0); (2,0) wins
//! let state: State = "XOO / X.. / ...".parse().unwrap();
//!
//! let search = MctsSearch::new(RandomRollout::new(), 1.414, FlatPolicy::new());
//! let mut rng = ChaCha20Rng::seed_from_u64(42);
//! let action = search.search_by_iterations(state, 300, &mut rng).unwrap();
//!
//! assert_eq!(action, Action::from_row_col(2, 0));
//! ```
//!
//! # Configuration
//!
//! The [`MctsConfig`] struct controls search behavior:
//!
//! - `exploration`: UCB1 exploration constant (default: sqrt(2))
//! - `iterations`: Iterations per search (default: 1000)
//! - `time_budget_ms`: Wall-clock budget; replaces `iterations` when set
//!
//! # Strategies
//!
//! - [`Rollout`]: estimates a leaf's value. [`RandomRollout`] plays uniformly
//!   random moves to the end of the game.
//! - [`Policy`]: scores the children of a node once it is fully expanded.
//!   [`FlatPolicy`] and [`UniformPolicy`] are provided. Priors are recorded
//!   on the nodes but do not affect UCB1 selection.
//!
//! Both traits are implemented for plain closures.

pub mod config;
pub mod node;
pub mod policy;
pub mod rollout;
pub mod search;
pub mod tree;

// Re-export main types
pub use config::{MctsConfig, SearchBudget, DEFAULT_EXPLORATION};
pub use node::{MctsNode, NodeId};
pub use policy::{FlatPolicy, Policy, UniformPolicy};
pub use rollout::{RandomRollout, Rollout};
pub use search::{MctsSearch, SearchError, SearchResult};
pub use tree::{ChildStats, MctsTree, TreeStats};
