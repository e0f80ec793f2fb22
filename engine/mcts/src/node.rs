//! MCTS tree node representation.
//!
//! Each node represents a game state reached by taking an action from the parent.
//! Nodes store win/visit statistics used for UCB1 selection and move extraction,
//! plus the queue of actions that have not been turned into children yet.

use std::collections::VecDeque;

use engine_core::{GameState, Winner};
use rand::seq::SliceRandom;
use rand_chacha::ChaCha20Rng;

/// Index into the node arena. Using a newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    pub const NONE: NodeId = NodeId(u32::MAX);

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    pub fn is_some(self) -> bool {
        !self.is_none()
    }
}

/// A node in the MCTS tree.
#[derive(Debug, Clone)]
pub struct MctsNode<S: GameState> {
    /// Parent node index (NONE for root)
    pub parent: NodeId,

    /// Action that led to this node from parent (None for root)
    pub action: Option<S::Action>,

    /// Game state at this node, owned by the node
    pub state: S,

    /// Sum of simulation scores credited to this node.
    /// Win rate = wins / visit_count
    pub wins: f32,

    /// Number of completed simulations whose path passed through this node
    pub visit_count: u32,

    /// Prior score from the move-prior strategy, 0.0 until the parent scores
    /// its children. Stored for inspection; UCB1 does not read it.
    pub prior: f32,

    /// Whether this state is decided or exhausted (fixed at creation)
    pub is_terminal: bool,

    /// Winner of the state, relative to it (fixed at creation)
    pub winner: Winner,

    /// Children in expansion order
    pub children: Vec<NodeId>,

    /// Legal actions not yet expanded, in shuffled order.
    /// Always empty for terminal nodes.
    pub unexpanded: VecDeque<S::Action>,

    /// Set once the move-prior strategy has scored this node's children
    pub priors_assigned: bool,
}

impl<S: GameState> MctsNode<S> {
    /// Create a new root node.
    pub fn new_root(state: S, rng: &mut ChaCha20Rng) -> Self {
        Self::create(NodeId::NONE, None, state, rng)
    }

    /// Create a new child node reached from `parent` by `action`.
    pub fn new_child(parent: NodeId, action: S::Action, state: S, rng: &mut ChaCha20Rng) -> Self {
        Self::create(parent, Some(action), state, rng)
    }

    fn create(parent: NodeId, action: Option<S::Action>, state: S, rng: &mut ChaCha20Rng) -> Self {
        let winner = state.winner();
        let is_terminal = winner.is_decided() || state.is_full();

        // Shuffle so equal-scoring siblings are not expanded in a fixed order
        let unexpanded = if is_terminal {
            VecDeque::new()
        } else {
            let mut actions = state.legal_actions();
            actions.shuffle(rng);
            VecDeque::from(actions)
        };

        Self {
            parent,
            action,
            state,
            wins: 0.0,
            visit_count: 0,
            prior: 0.0,
            is_terminal,
            winner,
            children: Vec::new(),
            unexpanded,
            priors_assigned: false,
        }
    }

    /// Empirical win rate wins / visit_count.
    /// Returns 0.0 if never visited.
    #[inline]
    pub fn win_rate(&self) -> f32 {
        if self.visit_count == 0 {
            0.0
        } else {
            self.wins / self.visit_count as f32
        }
    }

    /// UCB1 score for child selection.
    /// UCB1 = wins / visits + c * sqrt(ln(N_parent) / visits)
    ///
    /// The win rate stored in a child is already from the point of view of
    /// the player choosing among the parent's children, so no negation is
    /// needed here.
    ///
    /// Takes pre-computed ln(parent_visits) to avoid redundant log calls
    /// when comparing multiple children.
    #[inline]
    pub fn ucb_score(&self, ln_parent_visits: f32, exploration: f32) -> f32 {
        let visits = self.visit_count as f32;
        self.wins / visits + exploration * (ln_parent_visits / visits).sqrt()
    }

    /// Calculate UCB score (convenience method that computes ln internally).
    #[inline]
    pub fn ucb_score_with_parent_visits(&self, parent_visits: u32, exploration: f32) -> f32 {
        self.ucb_score((parent_visits as f32).ln(), exploration)
    }

    /// Check if every legal action has been turned into a child.
    #[inline]
    pub fn is_fully_expanded(&self) -> bool {
        self.unexpanded.is_empty()
    }

    /// Check if this is the root node.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}
