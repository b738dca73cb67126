//! Incremental polygon builder.
//!
//! Vertices are identified purely by position: deleting a vertex shifts every
//! later index down by one, so indices held by a caller are invalid after a
//! delete at a lower index.

use serde::{Deserialize, Serialize};

use super::{PointSpec, Segment};
use crate::error::PolygonError;
use crate::log::{debug, trace};
use crate::math::direction::point_by_direction;
use crate::math::polygon_2d::{extent_2d, perimeter_2d, rotate_about_vertex, signed_area_2d};
use crate::math::Point;
use crate::units::{
    round_to, AreaMeasure, FigureMeasures, LengthMeasure, CENTIMETRE, SQUARE_CENTIMETRE,
};

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Minimum corner of the bounding box.
    pub min: Point,
    /// Maximum corner of the bounding box.
    pub max: Point,
}

impl Bounds {
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// A vertex position as handed to clients, `{"x": .., "y": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

impl From<Point> for Vertex {
    fn from(point: Point) -> Self {
        Self {
            x: point.x,
            y: point.y,
        }
    }
}

impl From<Vertex> for Point {
    fn from(vertex: Vertex) -> Self {
        Point::new(vertex.x, vertex.y)
    }
}

/// Scalar metrics of a polygon in presentation units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FigureSummary {
    pub area: f64,
    pub area_unit: String,
    pub perimeter: f64,
    pub perimeter_unit: String,
    pub width: f64,
    pub height: f64,
    pub length_unit: String,
    pub points_count: usize,
}

/// A closed outline, stored as an ordered list of vertices in base units.
///
/// The last vertex is implicitly connected back to the first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Creates an empty polygon.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a polygon anchored at the origin.
    #[must_use]
    pub fn with_origin() -> Self {
        Self::from_points([Point::origin()])
    }

    /// Creates a polygon from vertices already in base units.
    #[must_use]
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            points: points.into_iter().collect(),
        }
    }

    // --- Vertex access ---

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the vertex at `index`.
    ///
    /// # Errors
    ///
    /// Returns `PolygonError::IndexOutOfRange` if there is no such vertex.
    pub fn point(&self, index: usize) -> Result<Point, PolygonError> {
        self.points
            .get(index)
            .copied()
            .ok_or(PolygonError::IndexOutOfRange {
                index,
                len: self.points.len(),
            })
    }

    #[must_use]
    pub fn last_point(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Returns the side ending at the last vertex, if there are at least two vertices.
    #[must_use]
    pub fn last_segment(&self) -> Option<Segment> {
        match self.points.as_slice() {
            [.., a, b] => Some(Segment::new(*a, *b)),
            _ => None,
        }
    }

    /// Returns one side per vertex, the last one closing back to the first.
    ///
    /// Empty for fewer than 2 vertices.
    #[must_use]
    pub fn sides(&self) -> Vec<Segment> {
        let n = self.points.len();
        if n < 2 {
            return Vec::new();
        }
        (0..n)
            .map(|i| Segment::new(self.points[i], self.points[(i + 1) % n]))
            .collect()
    }

    // --- Building ---

    /// Appends a vertex at `(x, y)` base units.
    pub fn add_absolute(&mut self, x: f64, y: f64) {
        self.push(Point::new(x, y));
    }

    /// Appends a vertex `distance` away from the last vertex along `direction` radians.
    ///
    /// # Errors
    ///
    /// Returns `PolygonError::NotEnoughPoints` if the polygon is empty.
    pub fn add_by_direction(&mut self, distance: f64, direction: f64) -> Result<(), PolygonError> {
        let point = self.resolve_by_direction(distance, direction)?;
        self.push(point);
        Ok(())
    }

    /// Appends a vertex `distance` away from the last vertex, turned
    /// `interior_angle` radians from the direction back along the last side.
    ///
    /// # Errors
    ///
    /// Returns `PolygonError::NotEnoughPoints` if the polygon has fewer than 2 vertices.
    pub fn add_by_angle(&mut self, distance: f64, interior_angle: f64) -> Result<(), PolygonError> {
        let point = self.resolve_by_angle(distance, interior_angle)?;
        self.push(point);
        Ok(())
    }

    /// Resolves `spec` into base units and appends it, returning the new vertex.
    ///
    /// # Errors
    ///
    /// Returns `PolygonError::NotEnoughPoints` if the spec is relative to
    /// geometry the polygon does not have yet.
    pub fn add(&mut self, spec: &PointSpec) -> Result<Point, PolygonError> {
        let point = self.resolve(spec)?;
        self.push(point);
        Ok(point)
    }

    /// Computes where `spec` would land without adding it.
    ///
    /// # Errors
    ///
    /// Returns `PolygonError::NotEnoughPoints` if the spec is relative to
    /// geometry the polygon does not have yet.
    pub fn resolve(&self, spec: &PointSpec) -> Result<Point, PolygonError> {
        match *spec {
            PointSpec::Absolute { x, y, length_unit } => {
                Ok(Point::new(length_unit.to_base(x), length_unit.to_base(y)))
            }
            PointSpec::ByDirection {
                distance,
                direction,
                length_unit,
                angle_unit,
            } => self.resolve_by_direction(
                length_unit.to_base(distance),
                angle_unit.to_base(direction),
            ),
            PointSpec::ByAngle {
                distance,
                angle,
                length_unit,
                angle_unit,
            } => self.resolve_by_angle(length_unit.to_base(distance), angle_unit.to_base(angle)),
        }
    }

    fn resolve_by_direction(&self, distance: f64, direction: f64) -> Result<Point, PolygonError> {
        let origin = self.last_point().ok_or(PolygonError::NotEnoughPoints {
            required: 1,
            actual: 0,
        })?;
        Ok(point_by_direction(&origin, distance, direction))
    }

    fn resolve_by_angle(&self, distance: f64, interior_angle: f64) -> Result<Point, PolygonError> {
        let last = self.last_segment().ok_or(PolygonError::NotEnoughPoints {
            required: 2,
            actual: self.points.len(),
        })?;
        Ok(last.point_by_angle(distance, interior_angle))
    }

    fn push(&mut self, point: Point) {
        trace!(x = point.x, y = point.y, "resolved vertex");
        self.points.push(point);
        debug!(count = self.points.len(), "vertex added");
    }

    // --- Corrections ---

    /// Overwrites the vertex at `index`.
    ///
    /// # Errors
    ///
    /// Returns `PolygonError::IndexOutOfRange` if there is no such vertex.
    pub fn set_point(&mut self, index: usize, point: Point) -> Result<(), PolygonError> {
        let len = self.points.len();
        let slot = self
            .points
            .get_mut(index)
            .ok_or(PolygonError::IndexOutOfRange { index, len })?;
        *slot = point;
        debug!(index, "vertex updated");
        Ok(())
    }

    /// Removes and returns the vertex at `index`, shifting later vertices down.
    ///
    /// # Errors
    ///
    /// Returns `PolygonError::IndexOutOfRange` if there is no such vertex.
    pub fn delete_point(&mut self, index: usize) -> Result<Point, PolygonError> {
        let len = self.points.len();
        if index >= len {
            return Err(PolygonError::IndexOutOfRange { index, len });
        }
        let removed = self.points.remove(index);
        debug!(index, remaining = self.points.len(), "vertex deleted");
        Ok(removed)
    }

    /// Rotates the polygon by `angle` radians around the vertex at `pivot`.
    ///
    /// # Errors
    ///
    /// Returns `PolygonError::IndexOutOfRange` if there is no such vertex.
    pub fn rotate(&mut self, pivot: usize, angle: f64) -> Result<(), PolygonError> {
        if pivot >= self.points.len() {
            return Err(PolygonError::IndexOutOfRange {
                index: pivot,
                len: self.points.len(),
            });
        }
        rotate_about_vertex(&mut self.points, pivot, angle);
        debug!(pivot, angle, "polygon rotated");
        Ok(())
    }

    // --- Metrics in base units ---

    /// Signed area in square base units; positive when counter-clockwise.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.points)
    }

    /// Enclosed area in square base units. Zero for fewer than 3 vertices.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Length of all sides in base units. Zero for fewer than 2 vertices.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        perimeter_2d(&self.points)
    }

    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        extent_2d(&self.points).map(|(min, max)| Bounds { min, max })
    }

    /// Horizontal extent in base units. Zero for fewer than 2 vertices.
    #[must_use]
    pub fn width(&self) -> f64 {
        if self.points.len() < 2 {
            return 0.0;
        }
        self.bounds().map_or(0.0, |b| b.width())
    }

    /// Vertical extent in base units. Zero for fewer than 2 vertices.
    #[must_use]
    pub fn height(&self) -> f64 {
        if self.points.len() < 2 {
            return 0.0;
        }
        self.bounds().map_or(0.0, |b| b.height())
    }

    // --- Metrics in presentation units ---

    #[must_use]
    pub fn area_in(&self, measure: AreaMeasure) -> f64 {
        SQUARE_CENTIMETRE.convert_to(self.area(), measure)
    }

    #[must_use]
    pub fn perimeter_in(&self, measure: LengthMeasure) -> f64 {
        CENTIMETRE.convert_to(self.perimeter(), measure)
    }

    #[must_use]
    pub fn width_in(&self, measure: LengthMeasure) -> f64 {
        CENTIMETRE.convert_to(self.width(), measure)
    }

    #[must_use]
    pub fn height_in(&self, measure: LengthMeasure) -> f64 {
        CENTIMETRE.convert_to(self.height(), measure)
    }

    /// Vertices converted into `measure` and rounded to `precision` decimals.
    #[must_use]
    pub fn points_in(&self, measure: LengthMeasure, precision: u32) -> Vec<Point> {
        self.points
            .iter()
            .map(|p| {
                Point::new(
                    CENTIMETRE.convert_round_to(p.x, measure, precision),
                    CENTIMETRE.convert_round_to(p.y, measure, precision),
                )
            })
            .collect()
    }

    /// Vertices converted into `measure` and rounded, in their serializable form.
    #[must_use]
    pub fn vertices_in(&self, measure: LengthMeasure, precision: u32) -> Vec<Vertex> {
        self.points_in(measure, precision)
            .into_iter()
            .map(Vertex::from)
            .collect()
    }

    /// Side lengths converted into `measure` and rounded to `precision` decimals.
    #[must_use]
    pub fn side_lengths_in(&self, measure: LengthMeasure, precision: u32) -> Vec<f64> {
        self.sides()
            .iter()
            .map(|s| round_to(s.length_in(measure), precision))
            .collect()
    }

    /// Scalar metrics in the presentation units of `measures`, rounded to `precision`.
    #[must_use]
    pub fn summary(&self, measures: &FigureMeasures, precision: u32) -> FigureSummary {
        FigureSummary {
            area: round_to(self.area_in(measures.area), precision),
            area_unit: measures.area.short_name().to_owned(),
            perimeter: round_to(self.perimeter_in(measures.perimeter), precision),
            perimeter_unit: measures.perimeter.short_name().to_owned(),
            width: round_to(self.width_in(measures.length), precision),
            height: round_to(self.height_in(measures.length), precision),
            length_unit: measures.length.short_name().to_owned(),
            points_count: self.points.len(),
        }
    }
}
