//! Utility functions for working with public-scale ratings

/// Absolute difference between two ratings.
pub fn rating_difference(a: f64, b: f64) -> f64 {
    (a - b).abs()
}

/// Whether two ratings agree within a tolerance.
pub fn ratings_within_tolerance(a: f64, b: f64, tolerance: f64) -> bool {
    rating_difference(a, b) <= tolerance
}

/// 95% confidence interval implied by a rating and its deviation.
pub fn rating_interval(rating: f64, deviation: f64) -> (f64, f64) {
    let margin = 1.96 * deviation;
    (rating - margin, rating + margin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_rating_difference() {
        assert_eq!(rating_difference(1500.0, 1400.0), 100.0);
        assert_eq!(rating_difference(1400.0, 1500.0), 100.0);
        assert_eq!(rating_difference(1500.0, 1500.0), 0.0);
    }

    #[test]
    fn test_ratings_within_tolerance() {
        assert!(ratings_within_tolerance(1500.0, 1505.0, 10.0));
        assert!(ratings_within_tolerance(1500.0, 1510.0, 10.0));
        assert!(!ratings_within_tolerance(1500.0, 1510.1, 10.0));
    }

    #[test]
    fn test_rating_interval() {
        let (low, high) = rating_interval(1850.0, 50.0);
        assert_abs_diff_eq!(low, 1752.0, epsilon = 1e-9);
        assert_abs_diff_eq!(high, 1948.0, epsilon = 1e-9);
        assert!(low < high);
    }
}
