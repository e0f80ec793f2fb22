//! Move-prior strategies.
//!
//! A policy assigns a prior score to each action available from a state.
//! The search asks for these scores once per node, the first time it has to
//! choose among that node's fully expanded children, and stores them on the
//! children.

use engine_core::GameState;

/// Trait for move-prior strategies.
pub trait Policy<S: GameState> {
    /// Score every action in `actions`, returning one value per action in
    /// the same order.
    fn score(&self, state: &S, actions: &[S::Action]) -> Vec<f32>;
}

impl<S, F> Policy<S> for F
where
    S: GameState,
    F: Fn(&S, &[S::Action]) -> Vec<f32>,
{
    fn score(&self, state: &S, actions: &[S::Action]) -> Vec<f32> {
        self(state, actions)
    }
}

/// Flat policy that scores every action 1.0.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatPolicy;

impl FlatPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl<S: GameState> Policy<S> for FlatPolicy {
    fn score(&self, _state: &S, actions: &[S::Action]) -> Vec<f32> {
        vec![1.0; actions.len()]
    }
}

/// Uniform policy that assigns equal probability to all actions.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformPolicy;

impl UniformPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl<S: GameState> Policy<S> for UniformPolicy {
    fn score(&self, _state: &S, actions: &[S::Action]) -> Vec<f32> {
        if actions.is_empty() {
            return Vec::new();
        }
        let prob = 1.0 / actions.len() as f32;
        vec![prob; actions.len()]
    }
}
