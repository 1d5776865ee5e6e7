//! Summary statistics of a finished run.
//!
//! Each sample is a Bernoulli trial with success probability `pi / 4`, so
//! the estimate `4 * p_hat` has standard error `4 * sqrt(p_hat (1 - p_hat) / N)`.
//! The error shrinks as `1 / sqrt(N)`; nothing faster is promised.

use std::f64::consts::PI;

use crate::mc::SimulationResult;

/// Two-sided 95% normal quantile.
const Z_95: f64 = 1.959_963_984_540_054;

/// Derived statistics for a [`SimulationResult`].
///
/// # Examples
///
/// ```rust
/// use pi_core::mc::SimulationResult;
/// use pi_core::stats::EstimateSummary;
///
/// let result = SimulationResult::new(3, 4).unwrap();
/// let summary = EstimateSummary::from_result(&result);
///
/// assert_eq!(summary.estimate, 3.0);
/// assert_eq!(summary.hit_ratio, 0.75);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EstimateSummary {
    /// Number of samples drawn.
    pub samples: u64,
    /// Final pi estimate.
    pub estimate: f64,
    /// `|estimate - pi|`.
    pub abs_error: f64,
    /// Fraction of samples inside the circle.
    pub hit_ratio: f64,
    /// Binomial standard error of the estimate.
    pub std_error: f64,
}

impl EstimateSummary {
    /// Computes the summary of a result.
    pub fn from_result(result: &SimulationResult) -> Self {
        let n = result.total() as f64;
        let hit_ratio = result.in_circle() as f64 / n;
        let estimate = result.pi_estimate();

        Self {
            samples: result.total(),
            estimate,
            abs_error: (estimate - PI).abs(),
            hit_ratio,
            std_error: 4.0 * (hit_ratio * (1.0 - hit_ratio) / n).sqrt(),
        }
    }

    /// Approximate 95% confidence interval `(lower, upper)`.
    pub fn confidence_interval_95(&self) -> (f64, f64) {
        let half_width = Z_95 * self.std_error;
        (self.estimate - half_width, self.estimate + half_width)
    }
}
