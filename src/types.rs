//! Common types used throughout the rating engine
//!
//! Public-scale and internal-scale rating triples, the by-value opponent
//! snapshot captured when an outcome is recorded, and the single match
//! record the engine aggregates over.

use crate::error::{RatingError, Result};
use serde::{Deserialize, Serialize};

/// Conversion factor between the public Glicko scale and the internal
/// Glicko-2 scale. Derived from the ln(10)/400 logistic scaling of the
/// reference algorithm; every conversion in the crate goes through this one
/// constant.
pub const RATING_SCALE: f64 = 173.7178;

/// Center of the public rating scale.
pub const RATING_CENTER: f64 = 1500.0;

/// Rating information on the public scale, suitable for display and for
/// storage by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlickoRating {
    /// Skill estimate, centered at 1500.
    pub rating: f64,
    /// Rating deviation: uncertainty in the estimate, larger means less
    /// confidence.
    pub deviation: f64,
    /// Expected magnitude of rating fluctuation over time.
    pub volatility: f64,
}

impl Default for GlickoRating {
    fn default() -> Self {
        Self {
            rating: 1500.0,
            deviation: 350.0,
            volatility: 0.06,
        }
    }
}

impl GlickoRating {
    /// Validate that the triple is inside the algorithm's domain.
    pub fn validate(&self) -> Result<()> {
        if !self.rating.is_finite() {
            return Err(RatingError::InvalidParameter {
                name: "rating",
                value: self.rating,
            }
            .into());
        }
        if !self.deviation.is_finite() || self.deviation <= 0.0 {
            return Err(RatingError::InvalidParameter {
                name: "deviation",
                value: self.deviation,
            }
            .into());
        }
        if !self.volatility.is_finite() || self.volatility <= 0.0 {
            return Err(RatingError::InvalidParameter {
                name: "volatility",
                value: self.volatility,
            }
            .into());
        }
        Ok(())
    }
}

/// Rating information on the internal Glicko-2 scale, the representation
/// the engine computes on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaledRating {
    /// Internal-scale skill estimate, centered at 0.
    pub mu: f64,
    /// Internal-scale deviation.
    pub phi: f64,
    /// Volatility; identical on both scales.
    pub sigma: f64,
}

impl ScaledRating {
    /// Validate that the triple is inside the algorithm's domain.
    pub fn validate(&self) -> Result<()> {
        if !self.mu.is_finite() {
            return Err(RatingError::InvalidParameter {
                name: "mu",
                value: self.mu,
            }
            .into());
        }
        if !self.phi.is_finite() || self.phi <= 0.0 {
            return Err(RatingError::InvalidParameter {
                name: "phi",
                value: self.phi,
            }
            .into());
        }
        if !self.sigma.is_finite() || self.sigma <= 0.0 {
            return Err(RatingError::InvalidParameter {
                name: "sigma",
                value: self.sigma,
            }
            .into());
        }
        Ok(())
    }
}

impl From<GlickoRating> for ScaledRating {
    fn from(rating: GlickoRating) -> Self {
        Self {
            mu: (rating.rating - RATING_CENTER) / RATING_SCALE,
            phi: rating.deviation / RATING_SCALE,
            sigma: rating.volatility,
        }
    }
}

impl From<ScaledRating> for GlickoRating {
    fn from(scaled: ScaledRating) -> Self {
        Self {
            rating: RATING_SCALE * scaled.mu + RATING_CENTER,
            deviation: RATING_SCALE * scaled.phi,
            volatility: scaled.sigma,
        }
    }
}

/// An opponent's internal state captured by value at the moment an outcome
/// is recorded.
///
/// Snapshots are deliberately `Copy` and never hold a reference back to the
/// opponent: updating the opponent afterwards must not change matches
/// already recorded against their earlier state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OpponentSnapshot {
    pub mu: f64,
    pub phi: f64,
}

/// One recorded-but-not-applied outcome: an opponent snapshot plus the
/// score from the recording player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub opponent: OpponentSnapshot,
    /// 1 for a win, 0.5 for a draw, 0 for a loss.
    pub score: f64,
}

impl MatchRecord {
    /// Create a record, rejecting scores outside {0, 0.5, 1}.
    pub fn new(opponent: OpponentSnapshot, score: f64) -> Result<Self> {
        if score != 0.0 && score != 0.5 && score != 1.0 {
            return Err(RatingError::InvalidScore { score }.into());
        }
        Ok(Self { opponent, score })
    }
}
