//! Measurement-to-geometry engine for surveyed room and ceiling outlines.
//!
//! Corners are recorded one by one, either as absolute coordinates or as an
//! offset from the previous corner, and resolved into a closed [`Polygon`]
//! stored in base units (centimetres). Metrics can be read in any unit, and
//! [`RenderLayout`] turns the outline into scaled drawing primitives.

pub mod error;
pub mod geometry;
pub mod labels;
pub mod layout;
mod log;
pub mod math;
pub mod units;

pub use error::{RoomplanError, Result};
pub use geometry::{PointSpec, Polygon, Segment, Vertex};
pub use labels::LabelSequencer;
pub use layout::{Layout, LayoutConfig, RenderLayout};
pub use units::{FigureMeasures, UnitContext};
