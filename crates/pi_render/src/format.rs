//! Image formats and artifact naming.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

use crate::error::RenderError;

/// Image format of the written plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Vector SVG, including captions and axis labels.
    #[default]
    Svg,
    /// Raster PNG via the bitmap backend. No font rasteriser is compiled in,
    /// so text is left out of PNG images.
    Png,
}

impl OutputFormat {
    /// Whether captions, tick labels and legends can be drawn.
    ///
    /// The bitmap backend needs a font rasteriser for text, which this
    /// build of plotters does not include.
    pub fn draws_text(&self) -> bool {
        match self {
            OutputFormat::Svg => true,
            OutputFormat::Png => false,
        }
    }

    /// File extension without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "png" => Ok(OutputFormat::Png),
            "svg" => Ok(OutputFormat::Svg),
            _ => Err(RenderError::UnknownFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Path of the scatter plot: `<dir>/<N>_points.<ext>`.
pub fn scatter_path(dir: &Path, n_samples: u64, format: OutputFormat) -> PathBuf {
    dir.join(format!("{}_points.{}", n_samples, format.extension()))
}

/// Path of the convergence plot: `<dir>/Pi_estimate_for_<N>_drops_thrown.<ext>`.
pub fn convergence_path(dir: &Path, n_samples: u64, format: OutputFormat) -> PathBuf {
    dir.join(format!(
        "Pi_estimate_for_{}_drops_thrown.{}",
        n_samples,
        format.extension()
    ))
}
