//! Rating system configuration
//!
//! Algorithm parameters for the Glicko-2 engine plus the initial values
//! assigned to new players. Defaults follow Glickman's recommendations;
//! the presets trade volatility responsiveness against rating stability.

use crate::error::{RatingError, Result};
use serde::{Deserialize, Serialize};

/// Parameters consumed by the rating engine itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Glicko2Parameters {
    /// System constant constraining volatility change over time. Smaller
    /// values keep volatility, and therefore ratings, more stable.
    /// Reasonable values lie between 0.3 and 1.2.
    pub tau: f64,
    /// Convergence tolerance for the volatility solver.
    pub convergence_tolerance: f64,
    /// Iteration cap for the volatility solver; exceeding it reports
    /// divergence rather than looping forever.
    pub max_iterations: usize,
}

impl Default for Glicko2Parameters {
    fn default() -> Self {
        Self {
            tau: 0.75,
            convergence_tolerance: 1e-6,
            max_iterations: 100,
        }
    }
}

impl Glicko2Parameters {
    /// Validate that the parameters are usable by the engine.
    pub fn validate(&self) -> Result<()> {
        if !self.tau.is_finite() || self.tau <= 0.0 {
            return Err(RatingError::InvalidParameter {
                name: "tau",
                value: self.tau,
            }
            .into());
        }
        if !self.convergence_tolerance.is_finite() || self.convergence_tolerance <= 0.0 {
            return Err(RatingError::InvalidParameter {
                name: "convergence_tolerance",
                value: self.convergence_tolerance,
            }
            .into());
        }
        if self.max_iterations == 0 {
            return Err(RatingError::InvalidParameter {
                name: "max_iterations",
                value: 0.0,
            }
            .into());
        }
        Ok(())
    }
}

/// Full configuration: engine parameters plus new-player initial values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Glicko2Config {
    /// Parameters passed through to the engine.
    pub parameters: Glicko2Parameters,
    /// Rating assigned to players with no history.
    pub initial_rating: f64,
    /// Deviation assigned to players with no history.
    pub initial_deviation: f64,
    /// Volatility assigned to players with no history.
    pub initial_volatility: f64,
}

impl Default for Glicko2Config {
    fn default() -> Self {
        Self {
            parameters: Glicko2Parameters::default(),
            initial_rating: 1500.0,
            initial_deviation: 350.0,
            initial_volatility: 0.06,
        }
    }
}

impl Glicko2Config {
    /// Conservative preset: low tau for leagues where established ratings
    /// should move slowly even after surprising results.
    pub fn conservative() -> Self {
        Self {
            parameters: Glicko2Parameters {
                tau: 0.3,
                ..Glicko2Parameters::default()
            },
            ..Self::default()
        }
    }

    /// Aggressive preset: high tau so upsets shift volatility, and with it
    /// ratings, more quickly.
    pub fn aggressive() -> Self {
        Self {
            parameters: Glicko2Parameters {
                tau: 1.2,
                ..Glicko2Parameters::default()
            },
            ..Self::default()
        }
    }

    /// Validate parameters and initial values together.
    pub fn validate(&self) -> Result<()> {
        self.parameters.validate()?;
        if !self.initial_rating.is_finite() {
            return Err(RatingError::InvalidParameter {
                name: "initial_rating",
                value: self.initial_rating,
            }
            .into());
        }
        if !self.initial_deviation.is_finite() || self.initial_deviation <= 0.0 {
            return Err(RatingError::InvalidParameter {
                name: "initial_deviation",
                value: self.initial_deviation,
            }
            .into());
        }
        if !self.initial_volatility.is_finite() || self.initial_volatility <= 0.0 {
            return Err(RatingError::InvalidParameter {
                name: "initial_volatility",
                value: self.initial_volatility,
            }
            .into());
        }
        Ok(())
    }

    /// Starting rating triple for a new player under this configuration.
    pub fn initial_glicko_rating(&self) -> crate::types::GlickoRating {
        crate::types::GlickoRating {
            rating: self.initial_rating,
            deviation: self.initial_deviation,
            volatility: self.initial_volatility,
        }
    }
}
