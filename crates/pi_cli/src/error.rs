//! Error types for the CLI.

use thiserror::Error;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Bad sample count or estimator configuration
    #[error(transparent)]
    Estimate(#[from] pi_core::mc::EstimateError),

    /// Plot rendering failed
    #[error("Rendering failed: {0}")]
    Render(#[from] pi_render::RenderError),

    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pi_core::mc::EstimateError;

    #[test]
    fn test_error_display() {
        let err: CliError = EstimateError::invalid_argument("got 'abc'").into();
        assert_eq!(err.to_string(), "Invalid argument: got 'abc'");

        let err: CliError = pi_render::RenderError::Draw("no font".to_string()).into();
        assert!(err.to_string().starts_with("Rendering failed"));
    }
}
