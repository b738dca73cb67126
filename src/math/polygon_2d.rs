//! Algebra over closed rings of 2D points.
//!
//! The last point of a ring is implicitly connected back to the first.

use nalgebra::Rotation2;

use super::Point;

/// Computes the signed area of a closed ring (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise. Zero for fewer than 3 points.
#[must_use]
pub fn signed_area_2d(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Computes the length of a closed ring, including the closing edge.
///
/// Zero for fewer than 2 points.
#[must_use]
pub fn perimeter_2d(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 2 {
        return 0.0;
    }
    (0..n)
        .map(|i| nalgebra::distance(&points[i], &points[(i + 1) % n]))
        .sum()
}

/// Returns the minimum and maximum corners of the points, or `None` if empty.
#[must_use]
pub fn extent_2d(points: &[Point]) -> Option<(Point, Point)> {
    let (first, rest) = points.split_first()?;
    let mut min = *first;
    let mut max = *first;
    for pt in rest {
        min.x = min.x.min(pt.x);
        min.y = min.y.min(pt.y);
        max.x = max.x.max(pt.x);
        max.y = max.y.max(pt.y);
    }
    Some((min, max))
}

/// Rotates every point except the one at `pivot` by `angle` radians around it.
///
/// Does nothing if `pivot` is out of range.
pub fn rotate_about_vertex(points: &mut [Point], pivot: usize, angle: f64) {
    let Some(&center) = points.get(pivot) else {
        return;
    };
    let rotation = Rotation2::new(angle);
    for (i, pt) in points.iter_mut().enumerate() {
        if i != pivot {
            *pt = center + rotation * (*pt - center);
        }
    }
}
