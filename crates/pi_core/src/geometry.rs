//! Sample space geometry: points, the point sampler and the circle test.
//!
//! The sample space is the square `[-0.5, 0.5]^2` centred at the origin.
//! The target region is its inscribed circle of radius 0.5, whose area is
//! `pi / 4` of the square's.

use rand_distr::Uniform;

use crate::rng::PiRng;

/// Half the side length of the sampling square.
pub const HALF_WIDTH: f64 = 0.5;

/// Squared radius of the inscribed circle.
pub const RADIUS_SQUARED: f64 = HALF_WIDTH * HALF_WIDTH;

/// A sampled point in the square `[-0.5, 0.5]^2`.
///
/// Fields are private; a point never changes after construction.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a point from its coordinates.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Horizontal coordinate.
    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Vertical coordinate.
    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }
}

/// Returns `true` iff the point lies inside or on the inscribed circle,
/// i.e. `x^2 + y^2 <= 0.25`.
///
/// # Examples
///
/// ```rust
/// use pi_core::geometry::{is_in_circle, Point};
///
/// assert!(is_in_circle(&Point::new(0.0, 0.0)));
/// assert!(is_in_circle(&Point::new(0.5, 0.0)));
/// assert!(!is_in_circle(&Point::new(0.4, 0.4)));
/// ```
#[inline]
pub fn is_in_circle(point: &Point) -> bool {
    point.x * point.x + point.y * point.y <= RADIUS_SQUARED
}

/// Draws points uniformly from the sampling square.
///
/// Each coordinate is an independent draw from `[-0.5, 0.5]`.
#[derive(Clone, Debug)]
pub struct PointSampler {
    axis: Uniform<f64>,
}

impl PointSampler {
    /// Creates a sampler over `[-0.5, 0.5]^2`.
    pub fn new() -> Self {
        Self {
            axis: Uniform::new_inclusive(-HALF_WIDTH, HALF_WIDTH),
        }
    }

    /// Draws one point, consuming two uniform variates from `rng`.
    #[inline]
    pub fn sample(&self, rng: &mut PiRng) -> Point {
        let x = rng.sample(&self.axis);
        let y = rng.sample(&self.axis);
        Point::new(x, y)
    }
}

impl Default for PointSampler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_origin_is_inside() {
        assert!(is_in_circle(&Point::new(0.0, 0.0)));
    }

    #[test]
    fn test_boundary_is_inside() {
        assert!(is_in_circle(&Point::new(0.5, 0.0)));
        assert!(is_in_circle(&Point::new(0.0, -0.5)));
    }

    #[test]
    fn test_corners_are_outside() {
        assert!(!is_in_circle(&Point::new(0.5, 0.5)));
        assert!(!is_in_circle(&Point::new(-0.5, 0.5)));
        assert!(!is_in_circle(&Point::new(0.4, 0.4)));
    }

    #[test]
    fn test_sampler_reproducible() {
        let sampler = PointSampler::new();
        let mut rng1 = PiRng::from_seed(99);
        let mut rng2 = PiRng::from_seed(99);

        for _ in 0..100 {
            assert_eq!(sampler.sample(&mut rng1), sampler.sample(&mut rng2));
        }
    }

    #[test]
    fn test_sampler_covers_both_regions() {
        let sampler = PointSampler::new();
        let mut rng = PiRng::from_seed(5);
        let inside = (0..1_000)
            .filter(|_| is_in_circle(&sampler.sample(&mut rng)))
            .count();

        assert!(inside > 0 && inside < 1_000);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn test_sampled_points_within_square(seed in any::<u64>()) {
            let sampler = PointSampler::new();
            let mut rng = PiRng::from_seed(seed);

            for _ in 0..64 {
                let p = sampler.sample(&mut rng);
                prop_assert!((-HALF_WIDTH..=HALF_WIDTH).contains(&p.x()));
                prop_assert!((-HALF_WIDTH..=HALF_WIDTH).contains(&p.y()));
            }
        }

        #[test]
        fn test_classifier_deterministic(x in -0.5f64..=0.5, y in -0.5f64..=0.5) {
            let p = Point::new(x, y);
            prop_assert_eq!(is_in_circle(&p), is_in_circle(&p));
            prop_assert_eq!(is_in_circle(&p), x * x + y * y <= 0.25);
        }
    }
}
