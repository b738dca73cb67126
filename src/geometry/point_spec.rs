use serde::{Deserialize, Serialize};

use crate::units::{AngleMeasure, LengthMeasure};

/// How a surveyed corner was measured.
///
/// A spec is resolved into plain coordinates when it is added to a
/// [`Polygon`](super::Polygon); the placement mode is not kept afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum PointSpec {
    /// Explicit coordinates.
    Absolute {
        x: f64,
        y: f64,
        length_unit: LengthMeasure,
    },
    /// Offset from the last point along an absolute direction.
    ByDirection {
        distance: f64,
        direction: f64,
        length_unit: LengthMeasure,
        angle_unit: AngleMeasure,
    },
    /// Offset from the last point, turned by an interior angle from the last side.
    ByAngle {
        distance: f64,
        angle: f64,
        length_unit: LengthMeasure,
        angle_unit: AngleMeasure,
    },
}

impl PointSpec {
    #[must_use]
    pub fn absolute(x: f64, y: f64, length_unit: LengthMeasure) -> Self {
        Self::Absolute { x, y, length_unit }
    }

    #[must_use]
    pub fn by_direction(
        distance: f64,
        direction: f64,
        length_unit: LengthMeasure,
        angle_unit: AngleMeasure,
    ) -> Self {
        Self::ByDirection {
            distance,
            direction,
            length_unit,
            angle_unit,
        }
    }

    #[must_use]
    pub fn by_angle(
        distance: f64,
        angle: f64,
        length_unit: LengthMeasure,
        angle_unit: AngleMeasure,
    ) -> Self {
        Self::ByAngle {
            distance,
            angle,
            length_unit,
            angle_unit,
        }
    }
}
