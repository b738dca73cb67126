//! Units of measure.
//!
//! Every unit is a linear scale factor relative to the base unit of its family:
//! centimetre for lengths, square centimetre for areas and radian for angles.
//! Families are distinct types, so a length can never be converted into an area.

mod catalog;
mod figure;

pub use catalog::{
    ACRE, ARE, CENTIMETRE, DECIMETRE, DEGREE, FOOT, GRADIAN, HECTARE, INCH, KILOMETRE, METRE,
    MILE, MILLIMETRE, RADIAN, SQUARE_CENTIMETRE, SQUARE_DECIMETRE, SQUARE_FOOT, SQUARE_INCH,
    SQUARE_KILOMETRE, SQUARE_METRE, SQUARE_MILLIMETRE, SQUARE_YARD, TURN, YARD,
};
pub use figure::{FigureMeasures, UnitContext};

use std::fmt;
use std::marker::PhantomData;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::UnitError;

/// A family of units that convert into each other.
pub trait Family: Copy + fmt::Debug + PartialEq + 'static {
    /// Lower-case family name used in error messages.
    const NAME: &'static str;

    /// Every named unit of the family. The first entry is the base unit.
    fn catalog() -> &'static [Measure<Self>];
}

/// Length family. Base unit: centimetre.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Length {}

/// Area family. Base unit: square centimetre.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Area {}

/// Angle family. Base unit: radian.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Angle {}

/// A named unit of family `F`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measure<F: Family> {
    name: &'static str,
    short_name: &'static str,
    factor: f64,
    family: PhantomData<F>,
}

/// A unit of length.
pub type LengthMeasure = Measure<Length>;

/// A unit of area.
pub type AreaMeasure = Measure<Area>;

/// A unit of angle.
pub type AngleMeasure = Measure<Angle>;

impl<F: Family> Measure<F> {
    /// Defines a unit worth `factor` base units.
    #[must_use]
    pub const fn new(name: &'static str, short_name: &'static str, factor: f64) -> Self {
        Self {
            name,
            short_name,
            factor,
            family: PhantomData,
        }
    }

    /// Returns the base unit of the family (factor `1`).
    #[must_use]
    pub fn base() -> Self {
        F::catalog()[0]
    }

    /// Returns every named unit of the family.
    #[must_use]
    pub fn all() -> &'static [Self] {
        F::catalog()
    }

    /// Looks up a unit by its short name (`"cm"`, `"m2"`, `"deg"`, ...).
    ///
    /// # Errors
    ///
    /// Returns `UnitError::UnknownUnit` if no unit of this family has that short name.
    pub fn by_short_name(short_name: &str) -> Result<Self, UnitError> {
        F::catalog()
            .iter()
            .find(|m| m.short_name == short_name)
            .copied()
            .ok_or_else(|| UnitError::UnknownUnit {
                family: F::NAME,
                name: short_name.to_owned(),
            })
    }

    /// Human-readable name, e.g. `"centimetre"`.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Short name, e.g. `"cm"`.
    #[must_use]
    pub fn short_name(&self) -> &'static str {
        self.short_name
    }

    /// Size of this unit in base units.
    #[must_use]
    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Converts `value` expressed in this unit into base units.
    #[must_use]
    pub fn to_base(&self, value: f64) -> f64 {
        value * self.factor
    }

    /// Converts `value` expressed in base units into this unit.
    #[must_use]
    pub fn from_base(&self, value: f64) -> f64 {
        value / self.factor
    }

    /// Converts `value` expressed in this unit into `to`.
    #[must_use]
    pub fn convert_to(&self, value: f64, to: Self) -> f64 {
        convert(*self, to, value)
    }

    /// Converts `value` into `to` and rounds to `precision` decimals.
    #[must_use]
    pub fn convert_round_to(&self, value: f64, to: Self, precision: u32) -> f64 {
        convert_round(*self, to, value, precision)
    }
}

impl<F: Family> fmt::Display for Measure<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name)
    }
}

impl<F: Family> Serialize for Measure<F> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.short_name)
    }
}

impl<'de, F: Family> Deserialize<'de> for Measure<F> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let short_name = String::deserialize(deserializer)?;
        Self::by_short_name(&short_name).map_err(de::Error::custom)
    }
}

/// Converts `value` from unit `from` into unit `to` of the same family.
#[must_use]
pub fn convert<F: Family>(from: Measure<F>, to: Measure<F>, value: f64) -> f64 {
    value * from.factor / to.factor
}

/// Converts `value` from `from` into `to`, rounded to `precision` decimals.
#[must_use]
pub fn convert_round<F: Family>(
    from: Measure<F>,
    to: Measure<F>,
    value: f64,
    precision: u32,
) -> f64 {
    round_to(convert(from, to, value), precision)
}

/// Rounds `value` to `precision` decimals, half away from zero.
///
/// Values that cannot be scaled without overflowing are returned unchanged.
#[must_use]
pub fn round_to(value: f64, precision: u32) -> f64 {
    let Ok(exponent) = i32::try_from(precision) else {
        return value;
    };
    let scale = 10f64.powi(exponent);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    let rounded = scaled.round() / scale;
    // Avoid handing out negative zero.
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn base_units_have_unit_factor() {
        assert_relative_eq!(LengthMeasure::base().factor(), 1.0);
        assert_relative_eq!(AreaMeasure::base().factor(), 1.0);
        assert_relative_eq!(AngleMeasure::base().factor(), 1.0);
        assert_eq!(LengthMeasure::base(), CENTIMETRE);
        assert_eq!(AreaMeasure::base(), SQUARE_CENTIMETRE);
        assert_eq!(AngleMeasure::base(), RADIAN);
    }

    #[test]
    fn convert_between_lengths() {
        assert_relative_eq!(convert(METRE, CENTIMETRE, 2.5), 250.0);
        assert_relative_eq!(convert(FOOT, INCH, 1.0), 12.0, max_relative = 1e-12);
        assert_relative_eq!(convert(MILE, FOOT, 1.0), 5280.0, max_relative = 1e-12);
        assert_relative_eq!(METRE.convert_to(1.0, MILLIMETRE), 1000.0);
    }

    #[test]
    fn convert_between_areas_and_angles() {
        assert_relative_eq!(convert(SQUARE_METRE, SQUARE_CENTIMETRE, 1.0), 10_000.0);
        assert_relative_eq!(convert(HECTARE, SQUARE_METRE, 1.0), 10_000.0);
        assert_relative_eq!(convert(SQUARE_FOOT, SQUARE_INCH, 1.0), 144.0, max_relative = 1e-12);
        assert_relative_eq!(convert(DEGREE, RADIAN, 180.0), std::f64::consts::PI);
        assert_relative_eq!(convert(TURN, DEGREE, 1.0), 360.0, max_relative = 1e-12);
        assert_relative_eq!(convert(GRADIAN, DEGREE, 100.0), 90.0, max_relative = 1e-12);
    }

    #[test]
    fn round_trip_through_base_is_lossless() {
        let values = [0.0, 1.0, -3.75, 123.456_789, 1e-6, 9.87e8];
        for &v in &values {
            for &m in LengthMeasure::all() {
                let back = convert(CENTIMETRE, m, convert(m, CENTIMETRE, v));
                assert!((back - v).abs() <= 1e-9 * v.abs().max(1.0), "{m}: {v} -> {back}");
            }
            for &m in AreaMeasure::all() {
                let back = convert(SQUARE_CENTIMETRE, m, convert(m, SQUARE_CENTIMETRE, v));
                assert!((back - v).abs() <= 1e-9 * v.abs().max(1.0), "{m}: {v} -> {back}");
            }
            for &m in AngleMeasure::all() {
                let back = convert(RADIAN, m, convert(m, RADIAN, v));
                assert!((back - v).abs() <= 1e-9 * v.abs().max(1.0), "{m}: {v} -> {back}");
            }
        }
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        assert_relative_eq!(round_to(2.5, 0), 3.0);
        assert_relative_eq!(round_to(-2.5, 0), -3.0);
        assert_relative_eq!(round_to(0.125, 2), 0.13);
        assert_relative_eq!(round_to(-0.125, 2), -0.13);
        assert_relative_eq!(round_to(3.14159, 3), 3.142);
        assert!(round_to(-0.001, 2).is_sign_positive());
    }

    #[test]
    fn convert_round_applies_precision() {
        assert_relative_eq!(convert_round(CENTIMETRE, METRE, 788.0089, 2), 7.88);
        assert_relative_eq!(CENTIMETRE.convert_round_to(1.0, INCH, 3), 0.394);
    }

    #[test]
    fn lookup_by_short_name() {
        assert_eq!(LengthMeasure::by_short_name("ft").unwrap(), FOOT);
        assert_eq!(AreaMeasure::by_short_name("m2").unwrap(), SQUARE_METRE);
        assert_eq!(AngleMeasure::by_short_name("deg").unwrap(), DEGREE);
    }

    #[test]
    fn lookup_of_unknown_unit_fails_explicitly() {
        let err = LengthMeasure::by_short_name("m2").unwrap_err();
        assert_eq!(
            err,
            UnitError::UnknownUnit {
                family: "length",
                name: "m2".into()
            }
        );
        assert!(AngleMeasure::by_short_name("").is_err());
    }

    #[test]
    fn short_names_are_unique_within_a_family() {
        fn check<F: Family>() {
            let all = Measure::<F>::all();
            for (i, a) in all.iter().enumerate() {
                for b in &all[i + 1..] {
                    assert_ne!(a.short_name(), b.short_name());
                }
            }
        }
        check::<Length>();
        check::<Area>();
        check::<Angle>();
    }

    #[test]
    fn serializes_as_short_name() {
        assert_eq!(serde_json::to_string(&SQUARE_METRE).unwrap(), "\"m2\"");
        let m: LengthMeasure = serde_json::from_str("\"yd\"").unwrap();
        assert_eq!(m, YARD);
        assert!(serde_json::from_str::<LengthMeasure>("\"furlong\"").is_err());
    }
}
