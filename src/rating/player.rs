//! Player state management
//!
//! `Glicko2Player` owns one competitor's rating state in both scales, the
//! queue of recorded-but-unapplied match outcomes, and bookkeeping about
//! applied games. All of the math lives in [`crate::rating::engine`]; this
//! module wires outcomes in and applies results atomically.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Glicko2Config;
use crate::error::Result;
use crate::rating::engine;
use crate::types::{GlickoRating, MatchRecord, OpponentSnapshot, ScaledRating};
use crate::utils;

/// A rated competitor: current state, pending outcomes, and game history
/// counters.
///
/// The internal-scale state is the source of truth; the public-scale view
/// is always its exact conversion image, so repeated no-op updates never
/// drift the displayed rating.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Glicko2Player {
    config: Glicko2Config,
    public: GlickoRating,
    scaled: ScaledRating,
    pending: Vec<MatchRecord>,
    games_played: u64,
    created_at: DateTime<Utc>,
    last_updated: DateTime<Utc>,
}

impl Default for Glicko2Player {
    fn default() -> Self {
        let config = Glicko2Config::default();
        let scaled = ScaledRating::from(config.initial_glicko_rating());
        Self::from_parts(config, scaled)
    }
}

impl Glicko2Player {
    /// New player at the configuration's initial rating.
    pub fn new(config: Glicko2Config) -> Result<Self> {
        let initial = config.initial_glicko_rating();
        Self::with_rating(config, initial)
    }

    /// New player at a caller-chosen public-scale rating.
    pub fn with_rating(config: Glicko2Config, rating: GlickoRating) -> Result<Self> {
        config.validate()?;
        rating.validate()?;
        Ok(Self::from_parts(config, ScaledRating::from(rating)))
    }

    /// Restore a player directly from internal-scale state, for callers
    /// resuming from their own storage.
    pub fn from_scaled(config: Glicko2Config, scaled: ScaledRating) -> Result<Self> {
        config.validate()?;
        scaled.validate()?;
        Ok(Self::from_parts(config, scaled))
    }

    fn from_parts(config: Glicko2Config, scaled: ScaledRating) -> Self {
        let now = Utc::now();
        Self {
            config,
            public: GlickoRating::from(scaled),
            scaled,
            pending: Vec::new(),
            games_played: 0,
            created_at: now,
            last_updated: now,
        }
    }

    /// Record one outcome against an opponent snapshot.
    ///
    /// The score must be exactly 0 (loss), 0.5 (draw), or 1 (win); anything
    /// else is rejected without touching the queue.
    pub fn record_outcome(&mut self, opponent: OpponentSnapshot, score: f64) -> Result<()> {
        let record = MatchRecord::new(opponent, score)?;
        self.pending.push(record);
        Ok(())
    }

    /// Record a win against the opponent.
    pub fn record_win(&mut self, opponent: OpponentSnapshot) {
        self.pending.push(MatchRecord {
            opponent,
            score: 1.0,
        });
    }

    /// Record a loss against the opponent.
    pub fn record_loss(&mut self, opponent: OpponentSnapshot) {
        self.pending.push(MatchRecord {
            opponent,
            score: 0.0,
        });
    }

    /// Record a draw against the opponent.
    pub fn record_draw(&mut self, opponent: OpponentSnapshot) {
        self.pending.push(MatchRecord {
            opponent,
            score: 0.5,
        });
    }

    /// Run the rating update over every pending outcome and replace the
    /// player's state with the result.
    ///
    /// All-or-nothing: on any engine error the state and the pending queue
    /// are left exactly as they were. An empty queue runs the inactivity
    /// branch, growing the deviation while rating and volatility hold.
    pub fn apply_update(&mut self) -> Result<()> {
        let updated = engine::rate(self.scaled, &self.pending, &self.config.parameters)?;

        let applied = self.pending.len() as u64;
        self.scaled = updated;
        self.public = GlickoRating::from(updated);
        self.games_played += applied;
        self.pending.clear();
        self.last_updated = Utc::now();

        debug!(
            games = applied,
            rating = self.public.rating,
            deviation = self.public.deviation,
            volatility = self.public.volatility,
            "applied rating update"
        );
        Ok(())
    }

    /// By-value capture of the current internal state, for recording
    /// matches on other players.
    pub fn snapshot(&self) -> OpponentSnapshot {
        OpponentSnapshot {
            mu: self.scaled.mu,
            phi: self.scaled.phi,
        }
    }

    /// Current public-scale rating.
    pub fn rating(&self) -> f64 {
        self.public.rating
    }

    /// Current public-scale rating deviation.
    pub fn rating_deviation(&self) -> f64 {
        self.public.deviation
    }

    /// Current volatility.
    pub fn volatility(&self) -> f64 {
        self.public.volatility
    }

    /// Internal-scale rating.
    pub fn mu(&self) -> f64 {
        self.scaled.mu
    }

    /// Internal-scale deviation.
    pub fn phi(&self) -> f64 {
        self.scaled.phi
    }

    /// System constant in effect for this player.
    pub fn tau(&self) -> f64 {
        self.config.parameters.tau
    }

    /// Full configuration in effect for this player.
    pub fn config(&self) -> &Glicko2Config {
        &self.config
    }

    /// Full public-scale rating triple.
    pub fn glicko_rating(&self) -> GlickoRating {
        self.public
    }

    /// Full internal-scale rating triple.
    pub fn scaled_rating(&self) -> ScaledRating {
        self.scaled
    }

    /// Outcomes recorded since the last applied update.
    pub fn pending_matches(&self) -> &[MatchRecord] {
        &self.pending
    }

    /// Count of match records applied over this player's lifetime.
    pub fn games_played(&self) -> u64 {
        self.games_played
    }

    /// When this player was constructed.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// When an update was last applied.
    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    /// 95% confidence interval around the current rating.
    pub fn rating_interval(&self) -> (f64, f64) {
        utils::rating_interval(self.public.rating, self.public.deviation)
    }
}
