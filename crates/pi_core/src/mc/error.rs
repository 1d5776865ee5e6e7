//! Error types for the estimation loop and its configuration.

use thiserror::Error;

/// Error raised by configuration, argument parsing or the estimation loop.
///
/// The estimation itself cannot fail once the sample count is valid; every
/// variant describes bad input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EstimateError {
    /// The requested sample count is not a positive integer, or is out of range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A configuration parameter is missing or inconsistent.
    #[error("Invalid configuration '{name}': {reason}")]
    InvalidConfig {
        /// Parameter name.
        name: &'static str,
        /// Description of the problem.
        reason: String,
    },
}

impl EstimateError {
    /// Creates an invalid argument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
