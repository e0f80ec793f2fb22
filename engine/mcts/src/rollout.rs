//! Rollout strategies for leaf evaluation.
//!
//! A rollout estimates the value of a leaf state as a scalar in `[0, 1]`,
//! scored for the player who made the move into that state (1.0 = that
//! player wins, 0.0 = loses, 0.5 = draw). Leaves can already be decided,
//! so every strategy has to handle terminal states.

use engine_core::outcome::{mover_score, DRAW};
use engine_core::GameState;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha20Rng;

/// Trait for leaf evaluators.
///
/// Implementations could be:
/// - RandomRollout: uniformly random playout to a terminal state
/// - A closure, for scripted or heuristic values
pub trait Rollout<S: GameState> {
    /// Estimate the value of `state` for the player who just moved into it.
    fn rollout(&self, state: &S, rng: &mut ChaCha20Rng) -> f32;
}

impl<S, F> Rollout<S> for F
where
    S: GameState,
    F: Fn(&S, &mut ChaCha20Rng) -> f32,
{
    fn rollout(&self, state: &S, rng: &mut ChaCha20Rng) -> f32 {
        self(state, rng)
    }
}

/// Random rollout evaluator that plays random moves to a terminal state.
/// Returns the game outcome as the value estimate.
#[derive(Debug, Clone, Default)]
pub struct RandomRollout {
    /// Maximum playout length; reaching it scores a draw.
    /// None plays until the game ends.
    pub max_plies: Option<u32>,
}

impl RandomRollout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap playouts at `max_plies` moves.
    pub fn with_max_plies(max_plies: u32) -> Self {
        Self {
            max_plies: Some(max_plies),
        }
    }
}

impl<S: GameState> Rollout<S> for RandomRollout {
    fn rollout(&self, state: &S, rng: &mut ChaCha20Rng) -> f32 {
        let mut board = state.clone();
        let mut plies = 0u32;

        while !board.is_terminal() {
            if self.max_plies.is_some_and(|max| plies >= max) {
                return DRAW;
            }

            let actions = board.legal_actions();
            let Some(action) = actions.choose(rng) else {
                // No moves but not reported terminal: nothing left to decide
                break;
            };
            board = board.apply(action);
            plies += 1;
        }

        mover_score(board.winner(), plies)
    }
}
