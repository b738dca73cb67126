use thiserror::Error;

/// Top-level error type for the roomplan engine.
///
/// Every variant is caused by caller input; none is transient.
#[derive(Debug, Error)]
pub enum RoomplanError {
    #[error(transparent)]
    Polygon(#[from] PolygonError),

    #[error(transparent)]
    Unit(#[from] UnitError),

    #[error(transparent)]
    Layout(#[from] LayoutError),
}

impl RoomplanError {
    /// Returns `true` when the failure should be reported to the client as a bad request.
    ///
    /// This is the case for every error the engine produces: it performs no I/O,
    /// so a failure always means the request itself was invalid.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::Polygon(_) | Self::Unit(_) | Self::Layout(_) => true,
        }
    }
}

/// Errors raised by the polygon builder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolygonError {
    #[error("not enough points: operation needs {required}, polygon has {actual}")]
    NotEnoughPoints { required: usize, actual: usize },

    #[error("point index {index} is out of range for a polygon of {len} points")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Errors related to measurement units.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    #[error("unknown {family} unit: {name:?}")]
    UnknownUnit { family: &'static str, name: String },
}

/// Errors related to layout computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("invalid layout parameters: {0}")]
    InvalidParameters(String),
}

/// Convenience type alias for results using [`RoomplanError`].
pub type Result<T> = std::result::Result<T, RoomplanError>;
