//! Game state capability trait consumed by the search engine.
//!
//! The engine never looks inside a game. It only needs to enumerate moves,
//! produce successor states, and ask whether a state is decided.

use std::fmt::Debug;

/// Winner of a state, expressed relative to that state.
///
/// `JustMoved` means the player whose move produced this state has won,
/// `PlayerToMove` means the player about to move has won. The integer codes
/// (`-1`, `+1`, `0`) are the compact form used by node bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Winner {
    /// No winner yet (game ongoing, or a draw once the state is full)
    #[default]
    None,
    /// The player to move at this state has won
    PlayerToMove,
    /// The player who made the last move has won
    JustMoved,
}

impl Winner {
    /// Integer winner code: `0`, `+1` (player to move) or `-1` (just moved).
    #[inline]
    pub fn code(self) -> i8 {
        match self {
            Winner::None => 0,
            Winner::PlayerToMove => 1,
            Winner::JustMoved => -1,
        }
    }

    /// Inverse of [`Winner::code`]. Any code other than `+1`/`-1` is `None`.
    pub fn from_code(code: i8) -> Self {
        match code {
            1 => Winner::PlayerToMove,
            -1 => Winner::JustMoved,
            _ => Winner::None,
        }
    }

    /// Check if a player has won.
    #[inline]
    pub fn is_decided(self) -> bool {
        self != Winner::None
    }

    /// Swap the two players.
    #[inline]
    pub fn flip(self) -> Self {
        match self {
            Winner::None => Winner::None,
            Winner::PlayerToMove => Winner::JustMoved,
            Winner::JustMoved => Winner::PlayerToMove,
        }
    }

    /// Re-express this winner relative to a state `plies` moves earlier.
    ///
    /// Players alternate every ply, so an odd distance swaps the roles.
    pub fn after_plies(self, plies: u32) -> Self {
        if plies % 2 == 1 {
            self.flip()
        } else {
            self
        }
    }
}

/// Capability set a game position must provide to be searched.
///
/// Implementations must behave as values: [`GameState::apply`] returns a new
/// state and leaves the receiver untouched, and `Clone` produces an
/// independent copy that rollouts can play out freely.
///
/// # Example
///
/// ```rust
/// use engine_core::{GameState, Winner};
///
/// /// Take 1 or 2 stones; whoever takes the last stone wins.
/// #[derive(Debug, Clone)]
/// struct Nim(u8);
///
/// impl GameState for Nim {
///     type Action = u8;
///
///     fn legal_actions(&self) -> Vec<u8> {
///         (1..=self.0.min(2)).collect()
///     }
///
///     fn apply(&self, action: &u8) -> Self {
///         Nim(self.0 - action)
///     }
///
///     fn is_full(&self) -> bool {
///         self.0 == 0
///     }
///
///     fn winner(&self) -> Winner {
///         if self.0 == 0 { Winner::JustMoved } else { Winner::None }
///     }
/// }
///
/// let state = Nim(3);
/// assert_eq!(state.legal_actions(), vec![1, 2]);
/// assert!(!state.is_terminal());
/// assert!(state.apply(&2).apply(&1).is_terminal());
/// ```
pub trait GameState: Clone + Debug {
    /// Move type. Compared by equality only; ordering is irrelevant.
    type Action: Clone + Debug + PartialEq;

    /// All moves available to the player to move, in any order.
    fn legal_actions(&self) -> Vec<Self::Action>;

    /// Successor state after playing `action`.
    fn apply(&self, action: &Self::Action) -> Self;

    /// True when no further moves can be made (board full / exhausted).
    fn is_full(&self) -> bool;

    /// Winner of this position, relative to this position.
    fn winner(&self) -> Winner;

    /// A state is terminal once it has a winner or is exhausted.
    #[inline]
    fn is_terminal(&self) -> bool {
        self.winner().is_decided() || self.is_full()
    }
}
