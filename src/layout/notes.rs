use crate::geometry::Polygon;
use crate::labels::LabelSequencer;
use crate::units::{round_to, FigureMeasures};

/// Formats `value` rounded to `precision` decimals, without trailing zeros.
pub(crate) fn format_value(value: f64, precision: u32) -> String {
    round_to(value, precision).to_string()
}

/// Builds the notes column: metrics, then vertex coordinates, then side lengths.
pub(crate) fn compose(polygon: &Polygon, measures: &FigureMeasures, precision: u32) -> Vec<String> {
    let length = measures.length;
    let sides = polygon.sides();
    let mut lines = Vec::with_capacity(5 + polygon.len() + sides.len());

    lines.push(format!(
        "Area: {} {}",
        format_value(polygon.area_in(measures.area), precision),
        measures.area
    ));
    lines.push(format!(
        "Perimeter: {} {}",
        format_value(polygon.perimeter_in(measures.perimeter), precision),
        measures.perimeter
    ));
    lines.push(format!(
        "Width: {} {length}",
        format_value(polygon.width_in(length), precision)
    ));
    lines.push(format!(
        "Height: {} {length}",
        format_value(polygon.height_in(length), precision)
    ));
    lines.push(format!("Points: {}", polygon.len()));

    let mut vertex_labels = LabelSequencer::default();
    for pt in polygon.points() {
        lines.push(format!(
            "{}: ({}, {}) {length}",
            vertex_labels.next_label(),
            format_value(length.from_base(pt.x), precision),
            format_value(length.from_base(pt.y), precision),
        ));
    }

    let mut side_labels = LabelSequencer::default();
    for side in &sides {
        lines.push(format!(
            "{}: {} {length}",
            side_labels.next_label(),
            format_value(side.length_in(length), precision),
        ));
    }
    lines
}
