//! # Monte Carlo Pi Estimation Core
//!
//! ## Role
//!
//! pi_core holds the only algorithmic content of the workspace:
//! - Uniform point sampling in the square `[-0.5, 0.5]^2`
//! - Classification against the inscribed circle of radius 0.5
//! - The estimation loop producing running estimates of pi
//!
//! The crate returns pure data. Rendering lives in `pi_render` and the
//! command-line surface in `pi_cli`; neither is a dependency of this crate.
//!
//! ## Usage Example
//!
//! ```rust
//! use pi_core::mc::{Estimator, EstimatorConfig};
//!
//! let config = EstimatorConfig::builder()
//!     .n_samples(10_000)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let simulation = Estimator::new(config).run().unwrap();
//!
//! assert_eq!(simulation.running_estimates().len(), 10_000);
//! assert_eq!(simulation.result().total(), 10_000);
//! println!("pi ~ {:.4}", simulation.result().pi_estimate());
//! ```
//!
//! ## Reproducibility
//!
//! Every run is driven by a [`rng::PiRng`] with a known 64-bit seed. Two runs
//! with the same seed and sample count are bit-identical.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod geometry;
pub mod mc;
pub mod rng;
pub mod stats;

pub use geometry::{is_in_circle, Point, PointSampler};
pub use mc::{EstimateError, Estimator, EstimatorConfig, Simulation, SimulationResult};
pub use rng::PiRng;
pub use stats::EstimateSummary;
