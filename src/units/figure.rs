use serde::{Deserialize, Serialize};

use super::{AngleMeasure, AreaMeasure, LengthMeasure, CENTIMETRE, DEGREE, METRE, SQUARE_METRE};
use crate::error::UnitError;

/// Units used to present a figure's values.
///
/// Changing these never touches stored geometry, which is always kept in base units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FigureMeasures {
    /// Unit for coordinates and side lengths.
    pub length: LengthMeasure,
    /// Unit for the perimeter.
    pub perimeter: LengthMeasure,
    /// Unit for the enclosed area.
    pub area: AreaMeasure,
    /// Unit for angles.
    pub angle: AngleMeasure,
}

impl Default for FigureMeasures {
    fn default() -> Self {
        Self {
            length: CENTIMETRE,
            perimeter: METRE,
            area: SQUARE_METRE,
            angle: DEGREE,
        }
    }
}

impl FigureMeasures {
    /// Resolves a set of unit short names.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::UnknownUnit` for the first name that does not resolve.
    pub fn from_context(context: &UnitContext) -> Result<Self, UnitError> {
        Ok(Self {
            length: LengthMeasure::by_short_name(&context.length_unit)?,
            perimeter: LengthMeasure::by_short_name(&context.perimeter_unit)?,
            area: AreaMeasure::by_short_name(&context.area_unit)?,
            angle: AngleMeasure::by_short_name(&context.angle_unit)?,
        })
    }

    /// Returns the short names of these measures.
    #[must_use]
    pub fn context(&self) -> UnitContext {
        UnitContext {
            length_unit: self.length.short_name().to_owned(),
            area_unit: self.area.short_name().to_owned(),
            perimeter_unit: self.perimeter.short_name().to_owned(),
            angle_unit: self.angle.short_name().to_owned(),
        }
    }
}

/// Unit short names as supplied by a client, e.g. `{"lengthUnit": "cm", ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitContext {
    pub length_unit: String,
    pub area_unit: String,
    pub perimeter_unit: String,
    pub angle_unit: String,
}

impl Default for UnitContext {
    fn default() -> Self {
        FigureMeasures::default().context()
    }
}
