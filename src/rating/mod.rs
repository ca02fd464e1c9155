//! Rating computation and player state management
//!
//! This module provides the pure Glicko-2 update math and the player state
//! manager that records outcomes and applies rating periods.

pub mod engine;
pub mod player;

// Re-export commonly used types
pub use engine::{expected_score, g, rate};
pub use player::Glicko2Player;
