//! Monte Carlo estimation of pi.
//!
//! # Architecture
//!
//! ```text
//! Estimator
//! ├── EstimatorConfig   (sample count, optional seed)
//! ├── PiRng             (seeded random source)
//! └── simulate()
//!     ├── PointSampler::sample()
//!     ├── is_in_circle()
//!     └── RunningEstimator::push()
//! ```
//!
//! The loop returns a [`Simulation`]: both point partitions, the full
//! running-estimate sequence and the final [`SimulationResult`]. It never
//! draws or writes anything.
//!
//! # Examples
//!
//! ```rust
//! use pi_core::mc::{Estimator, EstimatorConfig};
//!
//! let config = EstimatorConfig::builder()
//!     .n_samples(100_000)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let simulation = Estimator::new(config).run().unwrap();
//! let estimate = simulation.result().pi_estimate();
//! assert!((estimate - std::f64::consts::PI).abs() < 0.05);
//! ```

pub mod config;
pub mod error;
pub mod estimator;
pub mod running;

pub use config::{
    parse_sample_count, validate_sample_count, EstimatorConfig, EstimatorConfigBuilder,
    MAX_SAMPLES,
};
pub use error::EstimateError;
pub use estimator::{simulate, Estimator, Simulation, SimulationResult};
pub use running::{running_estimates, RunningEstimator};
