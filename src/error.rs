//! Error types for the rating engine
//!
//! This module defines all error types using anyhow for consistent error
//! handling throughout the crate.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific rating scenarios
#[derive(Debug, thiserror::Error)]
pub enum RatingError {
    #[error("Invalid score {score}: must be 0 (loss), 0.5 (draw), or 1 (win)")]
    InvalidScore { score: f64 },

    #[error("Invalid parameter {name} = {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("Volatility solver did not converge within {iterations} iterations")]
    SolverDivergence { iterations: usize },

    #[error("Degenerate match batch: estimated variance is zero or non-finite")]
    DegenerateBatch,
}
