//! MCTS search implementation.
//!
//! Implements the core MCTS loop:
//! 1. Selection: descend with UCB1 until a terminal node or a node with
//!    unexpanded actions is reached
//! 2. Expansion: turn one unexpanded action into a new child
//! 3. Simulation: score the leaf with the rollout strategy
//! 4. Backpropagation: credit the score along the path, complementing it
//!    at every level

use std::time::{Duration, Instant};

use engine_core::GameState;
use rand_chacha::ChaCha20Rng;
use thiserror::Error;
use tracing::{debug, trace};

use crate::config::{MctsConfig, SearchBudget};
use crate::node::NodeId;
use crate::policy::Policy;
use crate::rollout::Rollout;
use crate::tree::{ChildStats, MctsTree, TreeStats};

/// Errors that can occur during MCTS search.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("Policy returned {actual} scores for {expected} children")]
    PolicyLengthMismatch { expected: usize, actual: usize },

    #[error("Root has no children; no iterations were completed")]
    NoChildren,

    #[error("Non-terminal state reported no legal actions")]
    NoLegalActions,
}

/// Result of an MCTS search.
#[derive(Debug, Clone)]
pub struct SearchResult<A> {
    /// Best action to take (highest root-child win rate)
    pub action: A,

    /// Number of completed iterations
    pub iterations: u32,

    /// Wall-clock time spent searching
    pub elapsed: Duration,

    /// Statistics of every root child, in expansion order
    pub children: Vec<ChildStats<A>>,

    /// Shape of the final tree
    pub tree: TreeStats,
}

/// MCTS search engine.
///
/// Holds the pluggable strategies and the exploration constant. Every search
/// call builds a fresh tree; nothing is reused between calls.
#[derive(Debug, Clone)]
pub struct MctsSearch<R, P> {
    rollout: R,
    policy: P,
    exploration: f32,
}

impl<R, P> MctsSearch<R, P> {
    /// Create a new engine from a rollout strategy, the UCB1 exploration
    /// constant and a move-prior strategy.
    pub fn new(rollout: R, exploration: f32, policy: P) -> Self {
        Self {
            rollout,
            policy,
            exploration,
        }
    }

    /// Create a new engine taking the exploration constant from `config`.
    pub fn from_config(rollout: R, policy: P, config: &MctsConfig) -> Self {
        Self::new(rollout, config.exploration, policy)
    }

    /// UCB1 exploration constant.
    pub fn exploration(&self) -> f32 {
        self.exploration
    }

    /// Run exactly `iterations` iterations and return the best action.
    pub fn search_by_iterations<S>(
        &self,
        state: S,
        iterations: u32,
        rng: &mut ChaCha20Rng,
    ) -> Result<S::Action, SearchError>
    where
        S: GameState,
        R: Rollout<S>,
        P: Policy<S>,
    {
        self.search(state, SearchBudget::Iterations(iterations), rng)
            .map(|result| result.action)
    }

    /// Search until `budget_ms` milliseconds have elapsed and return the
    /// best action. The clock is checked between iterations only.
    pub fn search_by_time_millis<S>(
        &self,
        state: S,
        budget_ms: u64,
        rng: &mut ChaCha20Rng,
    ) -> Result<S::Action, SearchError>
    where
        S: GameState,
        R: Rollout<S>,
        P: Policy<S>,
    {
        let budget = SearchBudget::Time(Duration::from_millis(budget_ms));
        self.search(state, budget, rng).map(|result| result.action)
    }

    /// Run a full search under `budget` and report the chosen action with
    /// the root statistics it was chosen from.
    pub fn search<S>(
        &self,
        state: S,
        budget: SearchBudget,
        rng: &mut ChaCha20Rng,
    ) -> Result<SearchResult<S::Action>, SearchError>
    where
        S: GameState,
        R: Rollout<S>,
        P: Policy<S>,
    {
        let mut tree = MctsTree::new(state, rng);
        let start = Instant::now();
        let mut iterations = 0u32;

        debug!(?budget, exploration = self.exploration, "MCTS search starting");

        while budget.allows(iterations, start.elapsed()) {
            self.run_iteration(&mut tree, rng)?;
            iterations += 1;
        }

        let elapsed = start.elapsed();
        let action = tree.best_action().cloned().ok_or(SearchError::NoChildren)?;
        let stats = tree.stats();

        debug!(
            iterations,
            elapsed_ms = elapsed.as_millis() as u64,
            nodes = stats.total_nodes,
            max_depth = stats.max_depth,
            ?action,
            "MCTS search complete"
        );

        Ok(SearchResult {
            action,
            iterations,
            elapsed,
            children: tree.root_children(),
            tree: stats,
        })
    }

    /// Run a single iteration (select -> simulate -> backpropagate).
    /// Returns the leaf that was simulated.
    pub fn run_iteration<S>(
        &self,
        tree: &mut MctsTree<S>,
        rng: &mut ChaCha20Rng,
    ) -> Result<NodeId, SearchError>
    where
        S: GameState,
        R: Rollout<S>,
        P: Policy<S>,
    {
        let leaf_id = self.select_leaf(tree, rng)?;

        let score = self.rollout.rollout(&tree.get(leaf_id).state, rng);
        tree.backpropagate(leaf_id, score);

        trace!(
            leaf = leaf_id.0,
            terminal = tree.get(leaf_id).is_terminal,
            score,
            nodes = tree.len(),
            "MCTS iteration complete"
        );

        Ok(leaf_id)
    }

    /// Select the node to simulate, expanding at most one new child.
    ///
    /// Terminal nodes are returned as they are. The first node on the way
    /// down that still has unexpanded actions gets one new child, which is
    /// returned. Fully expanded nodes have their children scored by the
    /// policy (once) and are descended through with UCB1.
    pub fn select_leaf<S>(
        &self,
        tree: &mut MctsTree<S>,
        rng: &mut ChaCha20Rng,
    ) -> Result<NodeId, SearchError>
    where
        S: GameState,
        P: Policy<S>,
    {
        let mut current = tree.root();

        loop {
            if tree.get(current).is_terminal {
                return Ok(current);
            }

            if let Some(child_id) = tree.expand_next(current, rng) {
                return Ok(child_id);
            }

            if !tree.get(current).priors_assigned {
                self.score_children(tree, current)?;
            }

            current = tree
                .select_child(current, self.exploration)
                .ok_or(SearchError::NoLegalActions)?;
        }
    }

    /// Ask the policy for prior scores of a node's children and store them.
    fn score_children<S>(&self, tree: &mut MctsTree<S>, node_id: NodeId) -> Result<(), SearchError>
    where
        S: GameState,
        P: Policy<S>,
    {
        let actions = tree.child_actions(node_id);
        let priors = self.policy.score(&tree.get(node_id).state, &actions);

        if priors.len() != actions.len() {
            return Err(SearchError::PolicyLengthMismatch {
                expected: actions.len(),
                actual: priors.len(),
            });
        }

        tree.assign_priors(node_id, &priors);
        Ok(())
    }
}
