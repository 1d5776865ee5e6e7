//! Scatter plot of classified sample points.

use pi_core::geometry::{Point, HALF_WIDTH};
use pi_core::mc::Simulation;
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::error::RenderError;

/// Pixel size of the scatter plot.
pub const SCATTER_SIZE: (u32, u32) = (800, 800);

/// Marker budget across both point sets.
///
/// Larger runs are drawn with every `k`-th point of each set, so the in/out
/// proportion is kept and at most one marker over the budget is drawn.
pub const MAX_SCATTER_POINTS: usize = 50_000;

const POINT_RADIUS: u32 = 2;

/// Caption summarising the run.
pub fn scatter_caption(simulation: &Simulation) -> String {
    let result = simulation.result();
    format!(
        "From {} points: {} are in the circle, π estimate is {:.4}",
        result.total(),
        result.in_circle(),
        result.pi_estimate()
    )
}

/// Stride that brings `n_points` markers down to at most `max_points`.
///
/// # Panics
///
/// Panics if `max_points` is zero.
pub fn scatter_stride(n_points: usize, max_points: usize) -> usize {
    assert!(max_points > 0, "max_points must be positive");
    n_points.div_ceil(max_points).max(1)
}

fn markers<'a>(
    points: &'a [Point],
    stride: usize,
    color: RGBColor,
) -> impl Iterator<Item = Circle<(f64, f64), u32>> + 'a {
    points
        .iter()
        .step_by(stride)
        .map(move |p| Circle::new((p.x(), p.y()), POINT_RADIUS, color.filled()))
}

/// Draws in-circle points in blue and out-of-circle points in black on the
/// square `[-0.5, 0.5]^2`. Caption, tick labels and legend are drawn only
/// when `text` is set.
pub(crate) fn draw_scatter<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    simulation: &Simulation,
    text: bool,
) -> Result<(), RenderError> {
    let inside = simulation.points_in_circle();
    let outside = simulation.points_out_of_circle();
    let stride = scatter_stride(inside.len() + outside.len(), MAX_SCATTER_POINTS);

    root.fill(&WHITE).map_err(RenderError::draw)?;

    let mut builder = ChartBuilder::on(root);
    builder.margin(10).x_label_area_size(40).y_label_area_size(50);
    if text {
        builder.caption(scatter_caption(simulation), ("sans-serif", 20));
    }
    let mut chart = builder
        .build_cartesian_2d(-HALF_WIDTH..HALF_WIDTH, -HALF_WIDTH..HALF_WIDTH)
        .map_err(RenderError::draw)?;

    let mut mesh = chart.configure_mesh();
    mesh.x_labels(5).y_labels(5);
    if !text {
        mesh.disable_axes();
    }
    mesh.draw().map_err(RenderError::draw)?;

    chart
        .draw_series(markers(inside, stride, BLUE))
        .map_err(RenderError::draw)?
        .label("Points in circle")
        .legend(|(x, y)| Circle::new((x, y), 4, BLUE.filled()));

    chart
        .draw_series(markers(outside, stride, BLACK))
        .map_err(RenderError::draw)?
        .label("Points out of circle")
        .legend(|(x, y)| Circle::new((x, y), 4, BLACK.filled()));

    if text {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::MiddleMiddle)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(RenderError::draw)?;
    }

    root.present().map_err(RenderError::draw)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pi_core::rng::PiRng;

    #[test]
    fn test_caption_reports_counts() {
        let sim = pi_core::mc::simulate(400, &mut PiRng::from_seed(9)).unwrap();
        let caption = scatter_caption(&sim);

        assert!(caption.starts_with("From 400 points: "));
        assert!(caption.contains(&format!("{} are in the circle", sim.result().in_circle())));
        assert!(caption.ends_with(&format!("{:.4}", sim.result().pi_estimate())));
    }

    #[test]
    fn test_small_runs_draw_every_point() {
        assert_eq!(scatter_stride(0, MAX_SCATTER_POINTS), 1);
        assert_eq!(scatter_stride(500, MAX_SCATTER_POINTS), 1);
        assert_eq!(scatter_stride(MAX_SCATTER_POINTS, MAX_SCATTER_POINTS), 1);
    }

    #[test]
    fn test_stride_bounds_marker_count() {
        for (inside, outside) in [(7_853_982, 2_146_018), (78_540, 21_461), (1, 50_000)] {
            let stride = scatter_stride(inside + outside, MAX_SCATTER_POINTS);
            let drawn = inside.div_ceil(stride) + outside.div_ceil(stride);
            assert!(
                drawn <= MAX_SCATTER_POINTS + 1,
                "{} markers for {} points",
                drawn,
                inside + outside
            );
        }
    }
}
