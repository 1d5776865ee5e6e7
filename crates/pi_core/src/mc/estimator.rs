//! The estimation loop.

use tracing::debug;

use super::config::{validate_sample_count, EstimatorConfig};
use super::error::EstimateError;
use super::running::{pi_from_counts, RunningEstimator};
use crate::geometry::{is_in_circle, Point, PointSampler};
use crate::rng::PiRng;

/// Final counts of a run: in-circle samples out of the total drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationResult {
    in_circle: u64,
    total: u64,
}

impl SimulationResult {
    /// Creates a result from raw counts.
    ///
    /// # Errors
    ///
    /// `EstimateError::InvalidArgument` if `total` is zero or smaller than
    /// `in_circle`.
    pub fn new(in_circle: u64, total: u64) -> Result<Self, EstimateError> {
        if total == 0 {
            return Err(EstimateError::invalid_argument(
                "total sample count must be positive",
            ));
        }
        if in_circle > total {
            return Err(EstimateError::invalid_argument(format!(
                "in-circle count {} exceeds total {}",
                in_circle, total
            )));
        }
        Ok(Self { in_circle, total })
    }

    /// Number of in-circle samples.
    #[inline]
    pub fn in_circle(&self) -> u64 {
        self.in_circle
    }

    /// Number of samples drawn.
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// `4 * in_circle / total`.
    #[inline]
    pub fn pi_estimate(&self) -> f64 {
        pi_from_counts(self.in_circle, self.total)
    }
}

/// Everything a completed run produced.
///
/// Points are partitioned in production order. `running_estimates()[k]` is
/// the estimate after `k + 1` samples.
#[derive(Clone, Debug, PartialEq)]
pub struct Simulation {
    points_in_circle: Vec<Point>,
    points_out_of_circle: Vec<Point>,
    running_estimates: Vec<f64>,
    result: SimulationResult,
    seed: u64,
}

impl Simulation {
    /// In-circle points, in the order they were drawn.
    pub fn points_in_circle(&self) -> &[Point] {
        &self.points_in_circle
    }

    /// Out-of-circle points, in the order they were drawn.
    pub fn points_out_of_circle(&self) -> &[Point] {
        &self.points_out_of_circle
    }

    /// One estimate per sample.
    pub fn running_estimates(&self) -> &[f64] {
        &self.running_estimates
    }

    /// Final counts.
    pub fn result(&self) -> &SimulationResult {
        &self.result
    }

    /// Seed of the generator that drove the run.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

/// Draws `n_samples` points from `rng`, classifies each and records the
/// running estimate after every draw.
///
/// Exactly `n_samples` classifier invocations are made.
///
/// # Errors
///
/// `EstimateError::InvalidArgument` if `n_samples` is 0 or above
/// [`MAX_SAMPLES`](super::config::MAX_SAMPLES). Nothing is drawn in that case.
///
/// # Examples
///
/// ```rust
/// use pi_core::mc::simulate;
/// use pi_core::rng::PiRng;
///
/// let mut rng = PiRng::from_seed(1);
/// let sim = simulate(500, &mut rng).unwrap();
///
/// let drawn = sim.points_in_circle().len() + sim.points_out_of_circle().len();
/// assert_eq!(drawn, 500);
///
/// assert!(simulate(0, &mut rng).is_err());
/// ```
pub fn simulate(n_samples: usize, rng: &mut PiRng) -> Result<Simulation, EstimateError> {
    validate_sample_count(n_samples)?;

    let sampler = PointSampler::new();
    let mut acc = RunningEstimator::new();
    let mut points_in_circle = Vec::new();
    let mut points_out_of_circle = Vec::new();
    let mut running_estimates = Vec::with_capacity(n_samples);

    for _ in 0..n_samples {
        let point = sampler.sample(rng);
        let hit = is_in_circle(&point);
        if hit {
            points_in_circle.push(point);
        } else {
            points_out_of_circle.push(point);
        }
        running_estimates.push(acc.push(hit));
    }

    let result = acc.result()?;

    Ok(Simulation {
        points_in_circle,
        points_out_of_circle,
        running_estimates,
        result,
        seed: rng.seed(),
    })
}

/// Runs the estimation loop for an [`EstimatorConfig`].
///
/// A fresh generator is created per run: seeded from the configuration when
/// a seed is present, from entropy otherwise.
#[derive(Clone, Debug)]
pub struct Estimator {
    config: EstimatorConfig,
}

impl Estimator {
    /// Creates an estimator for a validated configuration.
    pub fn new(config: EstimatorConfig) -> Self {
        Self { config }
    }

    /// Executes one run.
    pub fn run(&self) -> Result<Simulation, EstimateError> {
        let mut rng = match self.config.seed() {
            Some(seed) => PiRng::from_seed(seed),
            None => PiRng::from_entropy(),
        };

        debug!(
            n_samples = self.config.n_samples(),
            seed = rng.seed(),
            "starting estimation run"
        );

        let simulation = simulate(self.config.n_samples(), &mut rng)?;

        debug!(
            in_circle = simulation.result().in_circle(),
            total = simulation.result().total(),
            estimate = simulation.result().pi_estimate(),
            "estimation run finished"
        );

        Ok(simulation)
    }
}
