//! Shared outcome scoring for two-player zero-sum games.
//!
//! Search statistics live in `[0, 1]`: `1.0` is a win, `0.0` a loss and
//! `0.5` a draw, always from the point of view of one particular player.

use crate::state::Winner;

/// Score for a win.
pub const WIN: f32 = 1.0;

/// Score for a draw or an undecided result.
pub const DRAW: f32 = 0.5;

/// Score for a loss.
pub const LOSS: f32 = 0.0;

/// Score a finished game for the player who moved into a state `plies`
/// moves before the final one.
///
/// `final_winner` is relative to the final state. With `plies == 0` the
/// state itself is final, so `JustMoved` is a win for the scored player.
///
/// # Example
/// ```
/// use engine_core::outcome::mover_score;
/// use engine_core::Winner;
///
/// // The player who made the winning move scores a win
/// assert_eq!(mover_score(Winner::JustMoved, 0), 1.0);
///
/// // One ply earlier it was the opponent who moved
/// assert_eq!(mover_score(Winner::JustMoved, 1), 0.0);
///
/// // Draw
/// assert_eq!(mover_score(Winner::None, 5), 0.5);
/// ```
#[inline]
pub fn mover_score(final_winner: Winner, plies: u32) -> f32 {
    match final_winner.after_plies(plies) {
        Winner::None => DRAW,
        Winner::JustMoved => WIN,
        Winner::PlayerToMove => LOSS,
    }
}

/// Complement of a score: the same result seen by the opponent.
#[inline]
pub fn opponent_score(score: f32) -> f32 {
    1.0 - score
}
