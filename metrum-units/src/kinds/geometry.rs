//! Angles, ratios, areas and volumes

use std::f64::consts::PI;
use crate::{Dimension, Unit};

quantity_kind! {
    /// Plane angle, dimensionless in SI
    pub struct Angle {
        name: "Angle",
        dimension: Dimension::DIMENSIONLESS,
        si: RADIANS,
        units: {
            RADIANS = Unit::si("rad", "radian").with_aliases(&["radians"]) => from_radians, radians;
            MILLIRADIANS = Unit::linear("mrad", "milliradian", 1e-3) => from_milliradians, milliradians;
            DEGREES = Unit::linear("°", "degree", PI / 180.0).with_aliases(&["deg", "degrees"]) => from_degrees, degrees;
            GRADIANS = Unit::linear("gon", "gradian", PI / 200.0).with_aliases(&["grad"]) => from_gradians, gradians;
            ARC_MINUTES = Unit::linear("′", "arcminute", PI / 10_800.0).with_aliases(&["arcmin"]) => from_arc_minutes, arc_minutes;
            ARC_SECONDS = Unit::linear("″", "arcsecond", PI / 648_000.0).with_aliases(&["arcsec"]) => from_arc_seconds, arc_seconds;
            TURNS = Unit::linear("rev", "turn", 2.0 * PI).with_aliases(&["revolution"]) => from_turns, turns;
        }
    }
}

quantity_kind! {
    pub struct SolidAngle {
        name: "SolidAngle",
        dimension: Dimension::DIMENSIONLESS,
        si: STERADIANS,
        units: {
            STERADIANS = Unit::si("sr", "steradian") => from_steradians, steradians;
            SQUARE_DEGREES = Unit::linear("deg²", "square degree", (PI / 180.0) * (PI / 180.0)) => from_square_degrees, square_degrees;
        }
    }
}

quantity_kind! {
    /// Pure numbers and ratios
    pub struct Unitless {
        name: "Unitless",
        dimension: Dimension::DIMENSIONLESS,
        si: RATIO,
        units: {
            RATIO = Unit::si("1", "ratio") => from_ratio, ratio;
            PERCENT = Unit::linear("%", "percent", 1e-2) => from_percent, percent;
            PERMILLE = Unit::linear("‰", "permille", 1e-3) => from_permille, permille;
            PARTS_PER_MILLION = Unit::linear("ppm", "part per million", 1e-6) => from_parts_per_million, parts_per_million;
        }
    }
}

quantity_kind! {
    pub struct Area {
        name: "Area",
        dimension: Dimension::AREA,
        si: SQUARE_METRES,
        units: {
            SQUARE_METRES = Unit::si("m²", "square metre") => from_square_metres, square_metres;
            SQUARE_KILOMETRES = Unit::linear("km²", "square kilometre", 1e6) => from_square_kilometres, square_kilometres;
            SQUARE_CENTIMETRES = Unit::linear("cm²", "square centimetre", 1e-4) => from_square_centimetres, square_centimetres;
            SQUARE_MILLIMETRES = Unit::linear("mm²", "square millimetre", 1e-6) => from_square_millimetres, square_millimetres;
            HECTARES = Unit::linear("ha", "hectare", 1e4) => from_hectares, hectares;
            SQUARE_INCHES = Unit::linear("in²", "square inch", 6.4516e-4) => from_square_inches, square_inches;
            SQUARE_FEET = Unit::linear("ft²", "square foot", 0.092_903_04).with_aliases(&["sq ft"]) => from_square_feet, square_feet;
            SQUARE_YARDS = Unit::linear("yd²", "square yard", 0.836_127_36) => from_square_yards, square_yards;
            ACRES = Unit::linear("ac", "acre", 4_046.856_422_4) => from_acres, acres;
            SQUARE_MILES = Unit::linear("mi²", "square mile", 2_589_988.110_336) => from_square_miles, square_miles;
        }
    }
}

quantity_kind! {
    pub struct Volume {
        name: "Volume",
        dimension: Dimension::VOLUME,
        si: CUBIC_METRES,
        units: {
            CUBIC_METRES = Unit::si("m³", "cubic metre") => from_cubic_metres, cubic_metres;
            CUBIC_CENTIMETRES = Unit::linear("cm³", "cubic centimetre", 1e-6).with_aliases(&["cc"]) => from_cubic_centimetres, cubic_centimetres;
            CUBIC_MILLIMETRES = Unit::linear("mm³", "cubic millimetre", 1e-9) => from_cubic_millimetres, cubic_millimetres;
            LITRES = Unit::linear("L", "litre", 1e-3).with_aliases(&["l", "litres", "liter"]) => from_litres, litres;
            MILLILITRES = Unit::linear("mL", "millilitre", 1e-6).with_aliases(&["ml"]) => from_millilitres, millilitres;
            CUBIC_INCHES = Unit::linear("in³", "cubic inch", 1.638_706_4e-5) => from_cubic_inches, cubic_inches;
            CUBIC_FEET = Unit::linear("ft³", "cubic foot", 0.028_316_846_592) => from_cubic_feet, cubic_feet;
            US_GALLONS = Unit::linear("gal", "US gallon", 3.785_411_784e-3).with_aliases(&["gallon"]) => from_us_gallons, us_gallons;
            IMPERIAL_GALLONS = Unit::linear("imp gal", "imperial gallon", 4.546_09e-3) => from_imperial_gallons, imperial_gallons;
            US_FLUID_OUNCES = Unit::linear("fl oz", "US fluid ounce", 2.957_352_956_25e-5) => from_us_fluid_ounces, us_fluid_ounces;
        }
    }
}

quantity_kind! {
    pub struct Wavenumber {
        name: "Wavenumber",
        dimension: Dimension::WAVENUMBER,
        si: RECIPROCAL_METRES,
        units: {
            RECIPROCAL_METRES = Unit::si("1/m", "reciprocal metre") => from_reciprocal_metres, reciprocal_metres;
            RECIPROCAL_CENTIMETRES = Unit::linear("1/cm", "reciprocal centimetre", 1e2) => from_reciprocal_centimetres, reciprocal_centimetres;
        }
    }
}
