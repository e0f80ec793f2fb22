//! Core traits and types for the MCTS game engine
//!
//! This crate provides the abstractions a game must implement to be searched:
//! - `GameState`: value-semantics position with legal moves and winner detection
//! - `Winner`: relative winner code (`0`, `+1` player to move, `-1` just moved)
//! - `outcome`: conversion of finished games into `[0, 1]` scores

pub mod outcome;
pub mod state;

// Re-export main types for convenience
pub use state::{GameState, Winner};
