//! # glicko2-engine
//!
//! A Glicko-2 rating engine for competitive player skill tracking.
//!
//! The crate computes updated skill ratings from batches of match
//! outcomes. Each player carries a rating, a rating deviation expressing
//! how uncertain that rating is, and a volatility expressing how erratic
//! their results have been. Outcomes are recorded against by-value
//! opponent snapshots and applied as one atomic batch per rating period.
//!
//! ## Architecture
//!
//! - [`rating::engine`]: the pure update math (expected scores, batch
//!   aggregation, the iterative volatility solver)
//! - [`rating::player`]: [`Glicko2Player`] state management around the
//!   engine (recording outcomes, applying updates, accessors)
//! - [`config`]: engine parameters and new-player initial values
//! - [`types`]: public and internal scale representations and conversions
//!
//! ## Usage
//!
//! ```
//! use glicko2_engine::Glicko2Player;
//!
//! let mut alice = Glicko2Player::default();
//! let mut bob = Glicko2Player::default();
//!
//! // Snapshot both sides before recording so neither update can see the
//! // other's post-match state.
//! let alice_before = alice.snapshot();
//! let bob_before = bob.snapshot();
//! alice.record_win(bob_before);
//! bob.record_loss(alice_before);
//!
//! alice.apply_update()?;
//! bob.apply_update()?;
//!
//! assert!(alice.rating() > 1500.0);
//! assert!(bob.rating() < 1500.0);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod rating;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{RatingError, Result};
pub use types::*;

// Re-export key components
pub use config::{Glicko2Config, Glicko2Parameters};
pub use rating::engine::{expected_score, g, rate};
pub use rating::player::Glicko2Player;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
