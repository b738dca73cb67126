//! Direction arithmetic for placing surveyed corners.
//!
//! Directions are absolute angles in radians, measured counter-clockwise from the +X axis.

use super::{normalize_angle, Point, Vector2};

/// Returns the direction from `from` to `to`, in `[0, 2π)`.
#[must_use]
pub fn point_direction(from: &Point, to: &Point) -> f64 {
    let d = to - from;
    normalize_angle(d.y.atan2(d.x))
}

/// Returns the point `distance` away from `origin` in absolute direction `direction`.
#[must_use]
pub fn point_by_direction(origin: &Point, distance: f64, direction: f64) -> Point {
    origin + Vector2::new(distance * direction.cos(), distance * direction.sin())
}

/// Places a point after the edge `start → end`, turning by `interior_angle`.
///
/// The angle is measured counter-clockwise from the direction pointing back along
/// the edge (`end → start`), and the new point is placed `distance` away from `end`.
/// Walking a room clockwise, `interior_angle` is the room's interior angle at `end`:
/// 90° turns right, 270° turns left, 180° carries straight on and 0° doubles back
/// along the edge.
#[must_use]
pub fn point_by_angle(start: &Point, end: &Point, distance: f64, interior_angle: f64) -> Point {
    let direction = normalize_angle(point_direction(end, start) + interior_angle);
    point_by_direction(end, distance, direction)
}
