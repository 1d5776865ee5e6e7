//! # Random Number Generation
//!
//! Seeded random number generation for the pi estimator.
//!
//! - **Reproducibility**: every generator carries a 64-bit seed, including
//!   entropy-seeded ones, so any run can be replayed from its logged seed
//! - **Static dispatch**: distributions are sampled through generics, no
//!   `Box<dyn Trait>` in the sampling loop
//!
//! ## Usage Example
//!
//! ```rust
//! use pi_core::rng::PiRng;
//! use rand_distr::Uniform;
//!
//! let mut rng = PiRng::from_seed(12345);
//! let axis = Uniform::new_inclusive(-0.5, 0.5);
//!
//! let x = rng.sample(&axis);
//! assert!((-0.5..=0.5).contains(&x));
//! ```

mod prng;

pub use prng::PiRng;

#[cfg(test)]
mod tests;
