//! Convergence plot of the running estimate against pi.

use std::f64::consts::PI;

use pi_core::mc::Simulation;
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::error::RenderError;

/// Pixel size of the convergence plot.
pub const CONVERGENCE_SIZE: (u32, u32) = (1200, 700);

/// Upper bound on markers drawn for the running estimate.
pub const MAX_CONVERGENCE_POINTS: usize = 20_000;

/// Selects at most `max_points` `(sample_number, estimate)` pairs, evenly
/// strided. Sample numbers start at 1. The final estimate is always kept.
///
/// # Panics
///
/// Panics if `max_points` is zero.
pub fn thin_series(estimates: &[f64], max_points: usize) -> Vec<(f64, f64)> {
    assert!(max_points > 0, "max_points must be positive");
    if estimates.is_empty() {
        return Vec::new();
    }

    let stride = estimates.len().div_ceil(max_points).max(1);
    let mut series: Vec<(f64, f64)> = estimates
        .iter()
        .enumerate()
        .step_by(stride)
        .map(|(k, &e)| ((k + 1) as f64, e))
        .collect();

    let last = estimates.len() - 1;
    if last % stride != 0 {
        if series.len() == max_points {
            series.pop();
        }
        series.push(((last + 1) as f64, estimates[last]));
    }
    series
}

/// Vertical range covering every estimate and pi, padded by 5%.
pub fn estimate_range(estimates: &[f64]) -> (f64, f64) {
    let (lo, hi) = estimates
        .iter()
        .fold((PI, PI), |(lo, hi), &e| (lo.min(e), hi.max(e)));
    let pad = ((hi - lo) * 0.05).max(0.05);
    (lo - pad, hi + pad)
}

/// Draws the running estimate against the sample number, with a horizontal
/// reference line at pi. Caption, axis labels and legend are drawn only when
/// `text` is set.
pub(crate) fn draw_convergence<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    simulation: &Simulation,
    text: bool,
) -> Result<(), RenderError> {
    let estimates = simulation.running_estimates();
    let x_max = estimates.len() as f64 + 1.0;
    let (y_lo, y_hi) = estimate_range(estimates);
    let series = thin_series(estimates, MAX_CONVERGENCE_POINTS);

    root.fill(&WHITE).map_err(RenderError::draw)?;

    let mut builder = ChartBuilder::on(root);
    builder.margin(10).x_label_area_size(40).y_label_area_size(60);
    if text {
        builder.caption("π estimate against number of random points", ("sans-serif", 20));
    }
    let mut chart = builder
        .build_cartesian_2d(0.0..x_max, y_lo..y_hi)
        .map_err(RenderError::draw)?;

    let mut mesh = chart.configure_mesh();
    mesh.x_labels(10);
    if text {
        mesh.x_desc("number of random points").y_desc("π");
    } else {
        mesh.disable_axes();
    }
    mesh.draw().map_err(RenderError::draw)?;

    chart
        .draw_series(
            series
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 1, BLUE.filled())),
        )
        .map_err(RenderError::draw)?
        .label("running estimate")
        .legend(|(x, y)| Circle::new((x, y), 3, BLUE.filled()));

    chart
        .draw_series(LineSeries::new(vec![(0.0, PI), (x_max, PI)], BLACK))
        .map_err(RenderError::draw)?
        .label("π")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK));

    if text {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(RenderError::draw)?;
    }

    root.present().map_err(RenderError::draw)?;
    Ok(())
}
