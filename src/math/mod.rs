pub mod direction;
pub mod polygon_2d;

use std::f64::consts::TAU;

/// 2D point type. Coordinates are in base length units.
pub type Point = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Reduces an angle in radians into `[0, 2π)`.
///
/// Works for negative inputs and for any number of full turns.
#[must_use]
pub fn normalize_angle(angle: f64) -> f64 {
    let reduced = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly 2π for tiny negative inputs.
    if reduced >= TAU {
        0.0
    } else {
        reduced
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn normalize_keeps_values_in_range() {
        assert_abs_diff_eq!(normalize_angle(0.0), 0.0);
        assert_abs_diff_eq!(normalize_angle(PI), PI);
        assert_abs_diff_eq!(normalize_angle(TAU), 0.0);
        assert_abs_diff_eq!(normalize_angle(5.0 * TAU + FRAC_PI_2), FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn normalize_negative_angles() {
        assert_abs_diff_eq!(normalize_angle(-FRAC_PI_2), 3.0 * FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(normalize_angle(-3.0 * TAU - PI), PI, epsilon = 1e-12);
        let tiny = normalize_angle(-1e-20);
        assert!((0.0..TAU).contains(&tiny));
    }
}
