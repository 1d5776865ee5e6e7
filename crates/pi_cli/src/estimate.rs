//! Estimate command implementation
//!
//! Runs the estimator for the resolved configuration and hands the result to
//! the renderer.

use tracing::{debug, info};

use pi_core::mc::{Estimator, EstimatorConfig};
use pi_core::stats::EstimateSummary;
use pi_render::{RenderOptions, RenderedArtifacts};

use crate::config::AppConfig;
use crate::Result;

/// Outcome of one CLI run
#[derive(Debug, Clone)]
pub struct Report {
    /// Statistics of the final estimate
    pub summary: EstimateSummary,
    /// Written plot files
    pub artifacts: RenderedArtifacts,
}

/// Run the estimation and write the plots
pub fn run(config: &AppConfig) -> Result<Report> {
    let estimator_config = EstimatorConfig::builder()
        .n_samples(config.num_samples)
        .maybe_seed(config.seed)
        .build()?;

    info!("Starting estimation...");
    info!("  Samples: {}", config.num_samples);
    info!("  Output directory: {}", config.output_dir.display());
    info!("  Output format: {}", config.format);

    let simulation = Estimator::new(estimator_config).run()?;
    let summary = EstimateSummary::from_result(simulation.result());
    let (lower, upper) = summary.confidence_interval_95();

    info!(
        seed = simulation.seed(),
        in_circle = simulation.result().in_circle(),
        estimate = summary.estimate,
        "Estimation complete"
    );
    debug!(
        std_error = summary.std_error,
        abs_error = summary.abs_error,
        ci_lower = lower,
        ci_upper = upper,
        "Estimate statistics"
    );

    let options = RenderOptions::new(&config.output_dir, config.format)
        .with_plot_points(config.plot_points);
    let artifacts = pi_render::render(&simulation, &options)?;

    Ok(Report { summary, artifacts })
}
