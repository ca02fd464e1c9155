//! Core Glicko-2 rating computation
//!
//! Pure functions over internal-scale values: the expected-score model,
//! batch aggregation into the variance and improvement statistics, the
//! iterative volatility solver, and the full `rate` update. Nothing here
//! mutates shared state; callers own the before/after values.

use crate::config::Glicko2Parameters;
use crate::error::{RatingError, Result};
use crate::types::{MatchRecord, OpponentSnapshot, ScaledRating};
use tracing::{debug, trace, warn};

/// Pi squared, as used by the `g` weighting function.
const PI_SQUARED: f64 = std::f64::consts::PI * std::f64::consts::PI;

/// Deviation-based weighting of an opponent's influence.
///
/// `g(phi)` approaches 1 for precisely-rated opponents and falls toward 0
/// as the opponent's deviation grows, discounting noisy information.
pub fn g(phi: f64) -> f64 {
    1.0 / (1.0 + 3.0 * phi * phi / PI_SQUARED).sqrt()
}

/// Expected score of a player at `mu` against one opponent snapshot.
///
/// Logistic in the rating difference, flattened by the opponent's
/// deviation through `g`. Equal ratings give exactly 0.5.
pub fn expected_score(mu: f64, opponent: OpponentSnapshot) -> f64 {
    1.0 / (1.0 + (-g(opponent.phi) * (mu - opponent.mu)).exp())
}

/// Compute the post-period rating from the current state and a batch of
/// match records.
///
/// An empty batch runs the inactivity branch: deviation grows by the
/// volatility, mean and volatility pass through unchanged. A non-empty
/// batch runs the full update, including the volatility re-estimation.
/// The input is never mutated; errors leave the caller free to retry with
/// corrected inputs.
pub fn rate(
    current: ScaledRating,
    batch: &[MatchRecord],
    params: &Glicko2Parameters,
) -> Result<ScaledRating> {
    params.validate()?;
    current.validate()?;

    if batch.is_empty() {
        // Inactivity: uncertainty grows, skill estimate does not move.
        let phi_prime = (current.phi * current.phi + current.sigma * current.sigma).sqrt();
        return Ok(ScaledRating {
            mu: current.mu,
            phi: phi_prime,
            sigma: current.sigma,
        });
    }

    // Aggregate the batch into the estimated variance (v) and the
    // rating-improvement sum. Both are plain sums, so record order cannot
    // change the result beyond float round-off.
    let mut v_sum = 0.0;
    let mut delta_sum = 0.0;
    for record in batch {
        let g_j = g(record.opponent.phi);
        let e_j = expected_score(current.mu, record.opponent);
        v_sum += g_j * g_j * e_j * (1.0 - e_j);
        delta_sum += g_j * (record.score - e_j);
    }

    // A batch where every expected score saturates to 0 or 1 carries no
    // usable information and would otherwise divide by zero below.
    if !v_sum.is_finite() || v_sum <= 0.0 {
        return Err(RatingError::DegenerateBatch.into());
    }
    let v = 1.0 / v_sum;
    if !v.is_finite() {
        return Err(RatingError::DegenerateBatch.into());
    }
    let delta = v * delta_sum;

    let sigma_prime = solve_volatility(current.phi, current.sigma, v, delta, params)?;

    let phi_star = (current.phi * current.phi + sigma_prime * sigma_prime).sqrt();
    let phi_prime = 1.0 / (1.0 / (phi_star * phi_star) + 1.0 / v).sqrt();
    let mu_prime = current.mu + phi_prime * phi_prime * delta_sum;

    let updated = ScaledRating {
        mu: mu_prime,
        phi: phi_prime,
        sigma: sigma_prime,
    };
    if !updated.mu.is_finite() || !updated.phi.is_finite() {
        return Err(RatingError::DegenerateBatch.into());
    }

    debug!(
        matches = batch.len(),
        v, delta, new_mu = updated.mu, new_phi = updated.phi, "rating update computed"
    );

    Ok(updated)
}

/// Newton iteration for the new volatility, working on `x = ln(sigma'²)`.
///
/// Seeded at the current volatility and driven to a step size at or below
/// the configured tolerance. Bounded by `max_iterations`; exhaustion or a
/// non-finite iterate reports divergence instead of returning an
/// unconverged estimate.
fn solve_volatility(
    phi: f64,
    sigma: f64,
    v: f64,
    delta: f64,
    params: &Glicko2Parameters,
) -> Result<f64> {
    let a = (sigma * sigma).ln();
    let tau_sq = params.tau * params.tau;
    let phi_sq = phi * phi;
    let delta_sq = delta * delta;

    let mut x = a;
    for iteration in 0..params.max_iterations {
        let e_x = x.exp();
        let d = phi_sq + v + e_x;
        let h1 = -(x - a) / tau_sq - 0.5 * e_x / d + 0.5 * e_x * delta_sq / (d * d);
        let h2 = -1.0 / tau_sq - 0.5 * e_x * (phi_sq + v) / (d * d)
            + 0.5 * delta_sq * e_x * (phi_sq + v - e_x) / (d * d * d);
        let next = x - h1 / h2;

        trace!(iteration, x, next, "volatility solver step");

        if !next.is_finite() {
            warn!(iteration, x, "volatility solver produced a non-finite iterate");
            return Err(RatingError::SolverDivergence {
                iterations: iteration + 1,
            }
            .into());
        }

        let step = (next - x).abs();
        x = next;
        if step <= params.convergence_tolerance {
            let volatility = (x / 2.0).exp();
            debug!(
                iterations = iteration + 1,
                volatility, "volatility solver converged"
            );
            return Ok(volatility);
        }
    }

    warn!(
        iterations = params.max_iterations,
        "volatility solver failed to converge"
    );
    Err(RatingError::SolverDivergence {
        iterations: params.max_iterations,
    }
    .into())
}
