pub mod point_spec;
pub mod polygon;
pub mod segment;

pub use point_spec::PointSpec;
pub use polygon::{Bounds, FigureSummary, Polygon, Vertex};
pub use segment::Segment;
