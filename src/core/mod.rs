//! Core module - pure simulation rules with no I/O
//!
//! Board mutation, group discovery, special-tile effects, cascade expansion
//! and score/move bookkeeping all live here. Nothing in this module draws,
//! persists or blocks.

pub mod board;
pub mod cascade;
pub mod game_state;
pub mod match_finder;
pub mod move_finder;
pub mod rng;
pub mod scoring;
pub mod specials;

// Re-export commonly used types
pub use board::{Board, Tile};
pub use cascade::CascadeResolver;
pub use game_state::GameState;
pub use rng::SimpleRng;
pub use specials::{SpecialBehavior, SpecialRegistry};
