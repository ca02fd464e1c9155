//! Shared fixtures and builders for rating engine integration tests

use glicko2_engine::{
    Glicko2Config, Glicko2Parameters, Glicko2Player, GlickoRating, OpponentSnapshot, ScaledRating,
};
use std::sync::Once;

static TRACING: Once = Once::new();

/// Install a test subscriber once per binary; honors `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Player with default parameters at a given public rating and deviation.
pub fn player_at(rating: f64, deviation: f64) -> Glicko2Player {
    Glicko2Player::with_rating(
        Glicko2Config::default(),
        GlickoRating {
            rating,
            deviation,
            volatility: 0.06,
        },
    )
    .expect("fixture rating is valid")
}

/// Opponent snapshot at a given public rating and deviation.
pub fn snapshot_at(rating: f64, deviation: f64) -> OpponentSnapshot {
    let scaled = ScaledRating::from(GlickoRating {
        rating,
        deviation,
        volatility: 0.06,
    });
    OpponentSnapshot {
        mu: scaled.mu,
        phi: scaled.phi,
    }
}

/// Default configuration with a specific system constant.
pub fn config_with_tau(tau: f64) -> Glicko2Config {
    Glicko2Config {
        parameters: Glicko2Parameters {
            tau,
            ..Glicko2Parameters::default()
        },
        ..Glicko2Config::default()
    }
}
