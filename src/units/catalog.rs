use std::f64::consts::{PI, TAU};

use super::{Angle, Area, Family, Length, Measure};

pub const MILLIMETRE: Measure<Length> = Measure::new("millimetre", "mm", 0.1);
pub const CENTIMETRE: Measure<Length> = Measure::new("centimetre", "cm", 1.0);
pub const DECIMETRE: Measure<Length> = Measure::new("decimetre", "dm", 10.0);
pub const METRE: Measure<Length> = Measure::new("metre", "m", 100.0);
pub const KILOMETRE: Measure<Length> = Measure::new("kilometre", "km", 100_000.0);
pub const INCH: Measure<Length> = Measure::new("inch", "in", 2.54);
pub const FOOT: Measure<Length> = Measure::new("foot", "ft", 30.48);
pub const YARD: Measure<Length> = Measure::new("yard", "yd", 91.44);
pub const MILE: Measure<Length> = Measure::new("mile", "mi", 160_934.4);

pub const SQUARE_MILLIMETRE: Measure<Area> = Measure::new("square millimetre", "mm2", 0.01);
pub const SQUARE_CENTIMETRE: Measure<Area> = Measure::new("square centimetre", "cm2", 1.0);
pub const SQUARE_DECIMETRE: Measure<Area> = Measure::new("square decimetre", "dm2", 100.0);
pub const SQUARE_METRE: Measure<Area> = Measure::new("square metre", "m2", 10_000.0);
pub const ARE: Measure<Area> = Measure::new("are", "a", 1e6);
pub const HECTARE: Measure<Area> = Measure::new("hectare", "ha", 1e8);
pub const SQUARE_KILOMETRE: Measure<Area> = Measure::new("square kilometre", "km2", 1e10);
pub const SQUARE_INCH: Measure<Area> = Measure::new("square inch", "in2", 6.4516);
pub const SQUARE_FOOT: Measure<Area> = Measure::new("square foot", "ft2", 929.0304);
pub const SQUARE_YARD: Measure<Area> = Measure::new("square yard", "yd2", 8_361.2736);
pub const ACRE: Measure<Area> = Measure::new("acre", "ac", 40_468_564.224);

pub const RADIAN: Measure<Angle> = Measure::new("radian", "rad", 1.0);
pub const DEGREE: Measure<Angle> = Measure::new("degree", "deg", PI / 180.0);
pub const GRADIAN: Measure<Angle> = Measure::new("gradian", "grad", PI / 200.0);
pub const TURN: Measure<Angle> = Measure::new("turn", "turn", TAU);

// Base unit first.
static LENGTHS: [Measure<Length>; 9] = [
    CENTIMETRE, MILLIMETRE, DECIMETRE, METRE, KILOMETRE, INCH, FOOT, YARD, MILE,
];

static AREAS: [Measure<Area>; 11] = [
    SQUARE_CENTIMETRE,
    SQUARE_MILLIMETRE,
    SQUARE_DECIMETRE,
    SQUARE_METRE,
    ARE,
    HECTARE,
    SQUARE_KILOMETRE,
    SQUARE_INCH,
    SQUARE_FOOT,
    SQUARE_YARD,
    ACRE,
];

static ANGLES: [Measure<Angle>; 4] = [RADIAN, DEGREE, GRADIAN, TURN];

impl Family for Length {
    const NAME: &'static str = "length";

    fn catalog() -> &'static [Measure<Self>] {
        &LENGTHS
    }
}

impl Family for Area {
    const NAME: &'static str = "area";

    fn catalog() -> &'static [Measure<Self>] {
        &AREAS
    }
}

impl Family for Angle {
    const NAME: &'static str = "angle";

    fn catalog() -> &'static [Measure<Self>] {
        &ANGLES
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn area_units_are_squares_of_length_units() {
        let pairs = [
            (MILLIMETRE, SQUARE_MILLIMETRE),
            (CENTIMETRE, SQUARE_CENTIMETRE),
            (DECIMETRE, SQUARE_DECIMETRE),
            (METRE, SQUARE_METRE),
            (KILOMETRE, SQUARE_KILOMETRE),
            (INCH, SQUARE_INCH),
            (FOOT, SQUARE_FOOT),
            (YARD, SQUARE_YARD),
        ];
        for (length, area) in pairs {
            assert_relative_eq!(
                length.factor() * length.factor(),
                area.factor(),
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn acre_is_4840_square_yards() {
        assert_relative_eq!(
            ACRE.factor() / SQUARE_YARD.factor(),
            4840.0,
            max_relative = 1e-12
        );
    }
}
