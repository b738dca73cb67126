use crate::math::direction::{point_by_angle, point_direction};
use crate::math::Point;
use crate::units::{LengthMeasure, CENTIMETRE};

/// An ordered pair of points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Start point.
    pub a: Point,
    /// End point.
    pub b: Point,
}

impl Segment {
    /// Creates a segment from `a` to `b`.
    #[must_use]
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// Euclidean length in base units.
    #[must_use]
    pub fn distance(&self) -> f64 {
        nalgebra::distance(&self.a, &self.b)
    }

    /// Length expressed in `measure`.
    #[must_use]
    pub fn length_in(&self, measure: LengthMeasure) -> f64 {
        CENTIMETRE.convert_to(self.distance(), measure)
    }

    /// Absolute direction from `a` to `b`, in `[0, 2π)`.
    #[must_use]
    pub fn direction(&self) -> f64 {
        point_direction(&self.a, &self.b)
    }

    #[must_use]
    pub fn midpoint(&self) -> Point {
        nalgebra::center(&self.a, &self.b)
    }

    /// Point `distance` away from `b`, turned `interior_angle` radians from the
    /// direction back along this segment.
    #[must_use]
    pub fn point_by_angle(&self, distance: f64, interior_angle: f64) -> Point {
        point_by_angle(&self.a, &self.b, distance, interior_angle)
    }
}
