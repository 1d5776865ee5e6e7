//! Running estimate accumulation.
//!
//! The estimate after `k + 1` samples is `4 * hits / (k + 1)` where `hits`
//! counts in-circle samples among the first `k + 1`. Each value depends on
//! every earlier classification, so accumulation is a strictly ordered
//! prefix sum.

use super::error::EstimateError;
use super::estimator::SimulationResult;

/// Incremental accumulator of in-circle hits.
///
/// # Examples
///
/// ```rust
/// use pi_core::mc::RunningEstimator;
///
/// let mut acc = RunningEstimator::new();
/// assert_eq!(acc.push(true), 4.0);
/// assert_eq!(acc.push(false), 2.0);
/// assert_eq!(acc.in_circle(), 1);
/// assert_eq!(acc.total(), 2);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunningEstimator {
    in_circle: u64,
    total: u64,
}

impl RunningEstimator {
    /// Creates an empty accumulator.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Incorporates one classification and returns the updated estimate.
    #[inline]
    pub fn push(&mut self, in_circle: bool) -> f64 {
        self.total += 1;
        if in_circle {
            self.in_circle += 1;
        }
        pi_from_counts(self.in_circle, self.total)
    }

    /// Number of in-circle samples so far.
    #[inline]
    pub fn in_circle(&self) -> u64 {
        self.in_circle
    }

    /// Number of samples so far.
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Counts accumulated so far.
    ///
    /// # Errors
    ///
    /// `EstimateError::InvalidArgument` before the first sample.
    pub fn result(&self) -> Result<SimulationResult, EstimateError> {
        SimulationResult::new(self.in_circle, self.total)
    }
}

/// Rebuilds the running-estimate sequence from ordered classifications.
///
/// Produces exactly `classifications.len()` values, identical to what the
/// estimation loop records for the same classification order.
pub fn running_estimates(classifications: &[bool]) -> Vec<f64> {
    let mut acc = RunningEstimator::new();
    classifications.iter().map(|&hit| acc.push(hit)).collect()
}

#[inline]
pub(crate) fn pi_from_counts(in_circle: u64, total: u64) -> f64 {
    4.0 * in_circle as f64 / total as f64
}
