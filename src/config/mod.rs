//! Configuration management for the rating engine
//!
//! This module holds the engine parameters, the initial values assigned to
//! new players, validation, and preset configurations.

pub mod rating;

// Re-export commonly used types
pub use rating::{Glicko2Config, Glicko2Parameters};
