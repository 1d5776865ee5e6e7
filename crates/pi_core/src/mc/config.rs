//! Estimator configuration and sample-count parsing.

use super::error::EstimateError;

/// Maximum number of samples per run.
///
/// Every sample is retained for rendering, so a run of `MAX_SAMPLES` holds
/// roughly 240 MB of points and estimates.
pub const MAX_SAMPLES: usize = 10_000_000;

/// Parses a sample count given as text.
///
/// Only decimal positive integers are accepted. Surrounding whitespace is
/// ignored. Zero, negative numbers, fractions and anything else yield
/// [`EstimateError::InvalidArgument`].
///
/// # Examples
///
/// ```rust
/// use pi_core::mc::parse_sample_count;
///
/// assert_eq!(parse_sample_count("50000").unwrap(), 50_000);
/// assert!(parse_sample_count("0").is_err());
/// assert!(parse_sample_count("1e4").is_err());
/// assert!(parse_sample_count("2**10").is_err());
/// ```
pub fn parse_sample_count(text: &str) -> Result<usize, EstimateError> {
    let trimmed = text.trim();
    let count: usize = trimmed.parse().map_err(|_| {
        EstimateError::invalid_argument(format!(
            "sample count must be a positive integer, got '{}'",
            trimmed
        ))
    })?;
    validate_sample_count(count)?;
    Ok(count)
}

/// Checks that `count` is in `[1, MAX_SAMPLES]`.
pub fn validate_sample_count(count: usize) -> Result<(), EstimateError> {
    if count == 0 {
        return Err(EstimateError::invalid_argument(
            "sample count must be positive, got 0",
        ));
    }
    if count > MAX_SAMPLES {
        return Err(EstimateError::invalid_argument(format!(
            "sample count {} exceeds the maximum of {}",
            count, MAX_SAMPLES
        )));
    }
    Ok(())
}

/// Estimator configuration.
///
/// Immutable once built. Use [`EstimatorConfig::builder`] to construct.
///
/// # Examples
///
/// ```rust
/// use pi_core::mc::EstimatorConfig;
///
/// let config = EstimatorConfig::builder()
///     .n_samples(1_000)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_samples(), 1_000);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EstimatorConfig {
    /// Number of points to draw.
    n_samples: usize,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
}

impl EstimatorConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> EstimatorConfigBuilder {
        EstimatorConfigBuilder::default()
    }

    /// Returns the number of samples.
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// Returns the optional seed.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `EstimateError::InvalidArgument` if `n_samples` is 0 or
    /// greater than [`MAX_SAMPLES`].
    pub fn validate(&self) -> Result<(), EstimateError> {
        validate_sample_count(self.n_samples)
    }
}

/// Builder for [`EstimatorConfig`].
#[derive(Clone, Debug, Default)]
pub struct EstimatorConfigBuilder {
    n_samples: Option<usize>,
    seed: Option<u64>,
}

impl EstimatorConfigBuilder {
    /// Sets the number of samples, in `[1, MAX_SAMPLES]`.
    #[inline]
    pub fn n_samples(mut self, n_samples: usize) -> Self {
        self.n_samples = Some(n_samples);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets or clears the seed.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// - `EstimateError::InvalidConfig` if `n_samples` was never set
    /// - `EstimateError::InvalidArgument` if `n_samples` is out of range
    pub fn build(self) -> Result<EstimatorConfig, EstimateError> {
        let n_samples = self.n_samples.ok_or(EstimateError::InvalidConfig {
            name: "n_samples",
            reason: "must be specified".to_string(),
        })?;

        let config = EstimatorConfig {
            n_samples,
            seed: self.seed,
        };

        config.validate()?;
        Ok(config)
    }
}
