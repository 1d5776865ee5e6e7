//! # Plot Rendering for Pi Estimation Runs
//!
//! Consumes a finished [`Simulation`] and writes two images:
//!
//! | Artifact | File name | Content |
//! |----------|-----------|---------|
//! | Scatter | `<N>_points.<ext>` | Sampled points, blue inside the circle, black outside |
//! | Convergence | `Pi_estimate_for_<N>_drops_thrown.<ext>` | Running estimate with a reference line at pi |
//!
//! Nothing here touches the random source; rendering is a pure consumer of
//! estimation output.
//!
//! ```rust,no_run
//! use pi_core::mc::{Estimator, EstimatorConfig};
//! use pi_render::{render, OutputFormat, RenderOptions};
//!
//! let config = EstimatorConfig::builder().n_samples(10_000).build().unwrap();
//! let simulation = Estimator::new(config).run().unwrap();
//!
//! let options = RenderOptions::new(".", OutputFormat::Svg);
//! let artifacts = render(&simulation, &options).unwrap();
//! println!("{}", artifacts.convergence.display());
//! ```

#![deny(missing_docs)]

pub mod convergence;
pub mod error;
pub mod format;
pub mod scatter;

use std::path::{Path, PathBuf};

use pi_core::mc::Simulation;
use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::info;

pub use error::RenderError;
pub use format::{convergence_path, scatter_path, OutputFormat};

/// Where and how to write the plots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Directory receiving both images; created if missing.
    pub output_dir: PathBuf,
    /// Image format.
    pub format: OutputFormat,
    /// Whether to write the scatter plot. The convergence plot is always written.
    pub plot_points: bool,
}

impl RenderOptions {
    /// Options writing both plots into `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>, format: OutputFormat) -> Self {
        Self {
            output_dir: output_dir.into(),
            format,
            plot_points: true,
        }
    }

    /// Enables or disables the scatter plot.
    pub fn with_plot_points(mut self, plot_points: bool) -> Self {
        self.plot_points = plot_points;
        self
    }
}

/// Paths of the images written by [`render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArtifacts {
    /// Scatter plot, absent when disabled.
    pub scatter: Option<PathBuf>,
    /// Convergence plot.
    pub convergence: PathBuf,
}

/// Writes the convergence plot and, if enabled, the scatter plot.
///
/// # Errors
///
/// - [`RenderError::Io`] if the output directory cannot be created
/// - [`RenderError::Draw`] if the backend fails to draw or encode an image
pub fn render(
    simulation: &Simulation,
    options: &RenderOptions,
) -> Result<RenderedArtifacts, RenderError> {
    std::fs::create_dir_all(&options.output_dir)?;
    let n_samples = simulation.result().total();

    let convergence = convergence_path(&options.output_dir, n_samples, options.format);
    write_plot(&convergence, options.format, Plot::Convergence, simulation)?;
    info!(path = %convergence.display(), "wrote convergence plot");

    let scatter = if options.plot_points {
        let path = scatter_path(&options.output_dir, n_samples, options.format);
        write_plot(&path, options.format, Plot::Scatter, simulation)?;
        info!(path = %path.display(), "wrote scatter plot");
        Some(path)
    } else {
        None
    };

    Ok(RenderedArtifacts {
        scatter,
        convergence,
    })
}

#[derive(Clone, Copy, Debug)]
enum Plot {
    Scatter,
    Convergence,
}

impl Plot {
    fn size(self) -> (u32, u32) {
        match self {
            Plot::Scatter => scatter::SCATTER_SIZE,
            Plot::Convergence => convergence::CONVERGENCE_SIZE,
        }
    }

    fn draw<DB: DrawingBackend>(
        self,
        root: &DrawingArea<DB, Shift>,
        simulation: &Simulation,
        text: bool,
    ) -> Result<(), RenderError> {
        match self {
            Plot::Scatter => scatter::draw_scatter(root, simulation, text),
            Plot::Convergence => convergence::draw_convergence(root, simulation, text),
        }
    }
}

/// Opens the backend matching `format` at `path` and draws `plot` on it.
fn write_plot(
    path: &Path,
    format: OutputFormat,
    plot: Plot,
    simulation: &Simulation,
) -> Result<(), RenderError> {
    let text = format.draws_text();
    match format {
        OutputFormat::Png => {
            let root = BitMapBackend::new(path, plot.size()).into_drawing_area();
            plot.draw(&root, simulation, text)
        }
        OutputFormat::Svg => {
            let root = SVGBackend::new(path, plot.size()).into_drawing_area();
            plot.draw(&root, simulation, text)
        }
    }
}
