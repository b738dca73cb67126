use super::notes::{compose, format_value};
use super::{EdgeMark, Layout, LayoutConfig, VertexMark};
use crate::error::Result;
use crate::geometry::Polygon;
use crate::labels::LabelSequencer;
use crate::log::debug;
use crate::math::{Point, TOLERANCE};
use crate::units::FigureMeasures;

/// Lays out a polygon on a canvas, scaled uniformly to fit.
///
/// Coordinates are taken in the figure's length measure, shifted so the
/// bounding box starts at the margin, and flipped so that geometric "up"
/// is towards the top of the canvas. The polygon itself is never modified.
pub struct RenderLayout<'a> {
    polygon: &'a Polygon,
    measures: &'a FigureMeasures,
    config: LayoutConfig,
    notes: bool,
}

impl<'a> RenderLayout<'a> {
    /// Creates a new `RenderLayout` with the default configuration and no notes.
    #[must_use]
    pub fn new(polygon: &'a Polygon, measures: &'a FigureMeasures) -> Self {
        Self {
            polygon,
            measures,
            config: LayoutConfig::default(),
            notes: false,
        }
    }

    /// Sets custom layout parameters.
    #[must_use]
    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    /// Requests the notes column alongside the drawing.
    #[must_use]
    pub fn with_notes(mut self, notes: bool) -> Self {
        self.notes = notes;
        self
    }

    /// Executes the layout.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::InvalidParameters` if the configuration is invalid.
    pub fn execute(&self) -> Result<Layout> {
        let config = &self.config;
        config.validate()?;

        let length = self.measures.length;
        let width = self.polygon.width_in(length);
        let height = self.polygon.height_in(length);
        let (available_width, available_height) = config.available();
        let scale = fit_scale(width, height, available_width, available_height);

        let drawing_width = width * scale;
        let drawing_height = height * scale;

        // Top-left of the drawing in figure units: smallest x, largest y.
        let (left, top) = self
            .polygon
            .bounds()
            .map_or((0.0, 0.0), |b| (length.from_base(b.min.x), length.from_base(b.max.y)));
        let to_pixel = |pt: &Point| -> (f64, f64) {
            (
                config.margin + (length.from_base(pt.x) - left) * scale,
                config.margin + (top - length.from_base(pt.y)) * scale,
            )
        };

        let mut vertex_labels = LabelSequencer::default();
        let vertices: Vec<VertexMark> = self
            .polygon
            .points()
            .iter()
            .map(|pt| {
                let (pixel_x, pixel_y) = to_pixel(pt);
                VertexMark {
                    pixel_x,
                    pixel_y,
                    label: vertex_labels.next_label(),
                }
            })
            .collect();

        let mut side_labels = LabelSequencer::default();
        let edges: Vec<EdgeMark> = self
            .polygon
            .sides()
            .iter()
            .map(|side| {
                let (pixel_x, pixel_y) = to_pixel(&side.midpoint());
                EdgeMark {
                    pixel_x,
                    pixel_y,
                    label: side_labels.next_label(),
                    text: format!(
                        "{} {length}",
                        format_value(side.length_in(length), config.precision)
                    ),
                }
            })
            .collect();

        let notes = if self.notes {
            compose(self.polygon, self.measures, config.precision)
        } else {
            Vec::new()
        };

        let mut canvas_width = drawing_width + 2.0 * config.margin;
        let mut canvas_height = drawing_height + 2.0 * config.margin;
        if self.notes {
            canvas_width += config.notes_width;
            #[allow(clippy::cast_precision_loss)]
            let notes_height = notes.len() as f64 * config.line_height + 2.0 * config.margin;
            canvas_height = canvas_height.max(notes_height);
        }

        debug!(scale, canvas_width, canvas_height, "layout computed");

        Ok(Layout {
            scale,
            canvas_width,
            canvas_height,
            drawing_width,
            drawing_height,
            vertices,
            edges,
            notes,
        })
    }
}

/// Largest uniform scale at which a `width`×`height` figure fits the available area.
///
/// An axis with no extent does not constrain the scale; a figure with no extent
/// at all is drawn at scale 1.
fn fit_scale(width: f64, height: f64, available_width: f64, available_height: f64) -> f64 {
    let fit_x = (width > TOLERANCE).then(|| available_width / width);
    let fit_y = (height > TOLERANCE).then(|| available_height / height);
    match (fit_x, fit_y) {
        (Some(x), Some(y)) => x.min(y),
        (Some(s), None) | (None, Some(s)) => s,
        (None, None) => 1.0,
    }
}
