//! MCTS tree structure with arena allocation.
//!
//! The tree uses arena allocation for node storage. Nodes are stored in a
//! contiguous Vec and referenced by NodeId indices; a child's `parent` is a
//! plain index, so there are no reference cycles to manage.

use engine_core::outcome::opponent_score;
use engine_core::GameState;
use rand_chacha::ChaCha20Rng;

use crate::node::{MctsNode, NodeId};

/// MCTS tree with arena-based node storage.
#[derive(Debug)]
pub struct MctsTree<S: GameState> {
    /// Arena storing all nodes
    nodes: Vec<MctsNode<S>>,

    /// Root node index (always 0 after initialization)
    root: NodeId,
}

impl<S: GameState> MctsTree<S> {
    /// Create a new tree rooted at the given state.
    pub fn new(root_state: S, rng: &mut ChaCha20Rng) -> Self {
        let root_node = MctsNode::new_root(root_state, rng);
        Self {
            nodes: vec![root_node],
            root: NodeId(0),
        }
    }

    /// Get the root node ID.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a reference to a node by ID.
    #[inline]
    pub fn get(&self, id: NodeId) -> &MctsNode<S> {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable reference to a node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut MctsNode<S> {
        &mut self.nodes[id.0 as usize]
    }

    /// Allocate a new node and return its ID.
    fn allocate(&mut self, node: MctsNode<S>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Get the total number of nodes in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty (should never be true after construction).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get the arena slice for read access.
    #[inline]
    pub fn arena(&self) -> &[MctsNode<S>] {
        &self.nodes
    }

    /// Add a child to a parent node by applying `action` to its state.
    /// Returns the new child's NodeId.
    ///
    /// This does not touch the parent's unexpanded queue; see
    /// [`MctsTree::expand_next`] for the pop-and-expand step.
    pub fn add_child(&mut self, parent_id: NodeId, action: S::Action, rng: &mut ChaCha20Rng) -> NodeId {
        let state = self.get(parent_id).state.apply(&action);
        let child = MctsNode::new_child(parent_id, action, state, rng);
        let child_id = self.allocate(child);

        // Add to parent's children
        self.get_mut(parent_id).children.push(child_id);

        child_id
    }

    /// Pop the next unexpanded action of a node and expand it.
    /// Returns None when the node has no unexpanded actions left.
    pub fn expand_next(&mut self, node_id: NodeId, rng: &mut ChaCha20Rng) -> Option<NodeId> {
        let action = self.get_mut(node_id).unexpanded.pop_front()?;
        Some(self.add_child(node_id, action, rng))
    }

    /// Actions of a node's children, in child order.
    pub fn child_actions(&self, node_id: NodeId) -> Vec<S::Action> {
        self.get(node_id)
            .children
            .iter()
            .filter_map(|id| self.get(*id).action.clone())
            .collect()
    }

    /// Store prior scores on a node's children, positionally.
    ///
    /// `priors` must have one entry per child; the caller checks the length.
    pub fn assign_priors(&mut self, node_id: NodeId, priors: &[f32]) {
        let children = self.get(node_id).children.clone();
        for (child_id, &prior) in children.into_iter().zip(priors) {
            self.get_mut(child_id).prior = prior;
        }
        self.get_mut(node_id).priors_assigned = true;
    }

    /// Select the best child of a node using UCB1.
    /// Returns None if the node has no children.
    ///
    /// The scan starts from a score of 0 with the first child as the default
    /// and only replaces the best on a strictly greater score, so ties go to
    /// the earliest child.
    pub fn select_child(&self, node_id: NodeId, exploration: f32) -> Option<NodeId> {
        let node = self.get(node_id);
        let first = *node.children.first()?;

        // Pre-compute ln once instead of per-child comparison
        let ln_parent_visits = (node.visit_count as f32).ln();

        let mut best = first;
        let mut best_score = 0.0f32;
        for &child_id in &node.children {
            let score = self.get(child_id).ucb_score(ln_parent_visits, exploration);
            if score > best_score {
                best_score = score;
                best = child_id;
            }
        }

        Some(best)
    }

    /// Backpropagate a simulation score from a leaf to the root.
    ///
    /// The leaf is credited with `score`; the value is complemented
    /// (`1 - score`) at every step up, since consecutive levels belong to
    /// alternating players.
    pub fn backpropagate(&mut self, leaf_id: NodeId, score: f32) {
        let root = self.root;
        let mut current_id = leaf_id;
        let mut current_score = score;

        while current_id != root {
            let node = self.get_mut(current_id);
            node.wins += current_score;
            node.visit_count += 1;

            // Complement for the player one level up
            current_score = opponent_score(current_score);

            current_id = node.parent;
        }

        let root_node = self.get_mut(root);
        root_node.wins += current_score;
        root_node.visit_count += 1;
    }

    /// Get the best action from root based on empirical win rate.
    /// Returns None if root has no children.
    pub fn best_action(&self) -> Option<&S::Action> {
        let root = self.get(self.root);
        let (first, rest) = root.children.split_first()?;

        let mut best = self.get(*first);
        for &child_id in rest {
            let child = self.get(child_id);
            if child.win_rate() > best.win_rate() {
                best = child;
            }
        }

        best.action.as_ref()
    }

    /// Statistics of the root's children, in expansion order.
    pub fn root_children(&self) -> Vec<ChildStats<S::Action>> {
        self.get(self.root)
            .children
            .iter()
            .filter_map(|&id| {
                let child = self.get(id);
                child.action.clone().map(|action| ChildStats {
                    action,
                    wins: child.wins,
                    visits: child.visit_count,
                    prior: child.prior,
                })
            })
            .collect()
    }

    /// Get statistics about the tree for debugging.
    pub fn stats(&self) -> TreeStats {
        let root = self.get(self.root);
        TreeStats {
            total_nodes: self.nodes.len(),
            root_visits: root.visit_count,
            root_win_rate: root.win_rate(),
            max_depth: self.compute_max_depth(self.root, 0),
        }
    }

    fn compute_max_depth(&self, node_id: NodeId, current_depth: u32) -> u32 {
        let node = self.get(node_id);
        if node.children.is_empty() {
            return current_depth;
        }

        node.children
            .iter()
            .map(|id| self.compute_max_depth(*id, current_depth + 1))
            .max()
            .unwrap_or(current_depth)
    }
}

/// Search statistics of one root child.
#[derive(Debug, Clone, PartialEq)]
pub struct ChildStats<A> {
    pub action: A,
    pub wins: f32,
    pub visits: u32,
    pub prior: f32,
}

impl<A> ChildStats<A> {
    /// Empirical win rate, 0.0 if never visited.
    pub fn win_rate(&self) -> f32 {
        if self.visits == 0 {
            0.0
        } else {
            self.wins / self.visits as f32
        }
    }
}

/// Statistics about an MCTS tree.
#[derive(Debug, Clone)]
pub struct TreeStats {
    pub total_nodes: usize,
    pub root_visits: u32,
    pub root_win_rate: f32,
    pub max_depth: u32,
}
