use crate::error::LayoutError;

/// Parameters controlling the drawing layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Target canvas width in pixels, margins included.
    pub canvas_width: f64,
    /// Target canvas height in pixels, margins included.
    pub canvas_height: f64,
    /// Empty border on every side of the drawing.
    pub margin: f64,
    /// Extra width added to the canvas for the notes column.
    pub notes_width: f64,
    /// Vertical space taken by one line of notes.
    pub line_height: f64,
    /// Decimals shown in side lengths and notes.
    pub precision: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas_width: 1000.0,
            canvas_height: 800.0,
            margin: 60.0,
            notes_width: 320.0,
            line_height: 20.0,
            precision: 2,
        }
    }
}

impl LayoutConfig {
    #[must_use]
    pub fn with_canvas(mut self, width: f64, height: f64) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }

    #[must_use]
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn with_notes_width(mut self, notes_width: f64) -> Self {
        self.notes_width = notes_width;
        self
    }

    #[must_use]
    pub fn with_line_height(mut self, line_height: f64) -> Self {
        self.line_height = line_height;
        self
    }

    #[must_use]
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Room left for the drawing once margins are taken off, as `(width, height)`.
    #[must_use]
    pub fn available(&self) -> (f64, f64) {
        (
            self.canvas_width - 2.0 * self.margin,
            self.canvas_height - 2.0 * self.margin,
        )
    }

    /// Checks that the parameters describe a usable canvas.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::InvalidParameters` for non-finite or non-positive
    /// sizes, a negative margin, or margins that leave no room to draw.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let sizes = [
            ("canvas width", self.canvas_width),
            ("canvas height", self.canvas_height),
            ("line height", self.line_height),
        ];
        for (what, value) in sizes {
            if !value.is_finite() || value <= 0.0 {
                return Err(LayoutError::InvalidParameters(format!(
                    "{what} must be positive, got {value}"
                )));
            }
        }
        for (what, value) in [("margin", self.margin), ("notes width", self.notes_width)] {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::InvalidParameters(format!(
                    "{what} must not be negative, got {value}"
                )));
            }
        }
        let (width, height) = self.available();
        if width <= 0.0 || height <= 0.0 {
            return Err(LayoutError::InvalidParameters(format!(
                "margin {} leaves no room on a {}x{} canvas",
                self.margin, self.canvas_width, self.canvas_height
            )));
        }
        Ok(())
    }
}
