//! Motion, rates and flows

use std::f64::consts::PI;
use crate::{Dimension, Unit};

const G_N: f64 = 9.806_65;

quantity_kind! {
    pub struct Speed {
        name: "Speed",
        dimension: Dimension::VELOCITY,
        si: METRES_PER_SECOND,
        units: {
            METRES_PER_SECOND = Unit::si("m/s", "metre per second") => from_metres_per_second, metres_per_second;
            KILOMETRES_PER_HOUR = Unit::linear("km/h", "kilometre per hour", 1.0 / 3.6).with_aliases(&["kph", "kmh"]) => from_kilometres_per_hour, kilometres_per_hour;
            METRES_PER_MINUTE = Unit::linear("m/min", "metre per minute", 1.0 / 60.0) => from_metres_per_minute, metres_per_minute;
            CENTIMETRES_PER_SECOND = Unit::linear("cm/s", "centimetre per second", 1e-2) => from_centimetres_per_second, centimetres_per_second;
            MILLIMETRES_PER_SECOND = Unit::linear("mm/s", "millimetre per second", 1e-3) => from_millimetres_per_second, millimetres_per_second;
            MILES_PER_HOUR = Unit::linear("mph", "mile per hour", 0.447_04).with_aliases(&["mi/h"]) => from_miles_per_hour, miles_per_hour;
            FEET_PER_SECOND = Unit::linear("ft/s", "foot per second", 0.3048).with_aliases(&["fps"]) => from_feet_per_second, feet_per_second;
            KNOTS = Unit::linear("kn", "knot", 1852.0 / 3600.0).with_aliases(&["kt", "knots"]) => from_knots, knots;
        }
    }
}

quantity_kind! {
    pub struct Acceleration {
        name: "Acceleration",
        dimension: Dimension::ACCELERATION,
        si: METRES_PER_SECOND_SQUARED,
        units: {
            METRES_PER_SECOND_SQUARED = Unit::si("m/s²", "metre per second squared") => from_metres_per_second_squared, metres_per_second_squared;
            CENTIMETRES_PER_SECOND_SQUARED = Unit::linear("cm/s²", "centimetre per second squared", 1e-2).with_aliases(&["Gal"]) => from_centimetres_per_second_squared, centimetres_per_second_squared;
            MILLIMETRES_PER_SECOND_SQUARED = Unit::linear("mm/s²", "millimetre per second squared", 1e-3) => from_millimetres_per_second_squared, millimetres_per_second_squared;
            FEET_PER_SECOND_SQUARED = Unit::linear("ft/s²", "foot per second squared", 0.3048) => from_feet_per_second_squared, feet_per_second_squared;
            STANDARD_GRAVITY = Unit::linear("gₙ", "standard gravity", G_N).with_aliases(&["g0", "gn"]) => from_standard_gravity, standard_gravity;
        }
    }
}

quantity_kind! {
    pub struct Jerk {
        name: "Jerk",
        dimension: Dimension::JERK,
        si: METRES_PER_SECOND_CUBED,
        units: {
            METRES_PER_SECOND_CUBED = Unit::si("m/s³", "metre per second cubed") => from_metres_per_second_cubed, metres_per_second_cubed;
            MILLIMETRES_PER_SECOND_CUBED = Unit::linear("mm/s³", "millimetre per second cubed", 1e-3) => from_millimetres_per_second_cubed, millimetres_per_second_cubed;
            FEET_PER_SECOND_CUBED = Unit::linear("ft/s³", "foot per second cubed", 0.3048) => from_feet_per_second_cubed, feet_per_second_cubed;
            STANDARD_GRAVITIES_PER_SECOND = Unit::linear("gₙ/s", "standard gravity per second", G_N) => from_standard_gravities_per_second, standard_gravities_per_second;
        }
    }
}

quantity_kind! {
    pub struct Frequency {
        name: "Frequency",
        dimension: Dimension::FREQUENCY,
        si: HERTZ,
        units: {
            HERTZ = Unit::si("Hz", "hertz") => from_hertz, hertz;
            KILOHERTZ = Unit::linear("kHz", "kilohertz", 1e3) => from_kilohertz, kilohertz;
            MEGAHERTZ = Unit::linear("MHz", "megahertz", 1e6) => from_megahertz, megahertz;
            GIGAHERTZ = Unit::linear("GHz", "gigahertz", 1e9) => from_gigahertz, gigahertz;
            PER_SECOND = Unit::linear("1/s", "per second", 1.0) => from_per_second, per_second;
            PER_MINUTE = Unit::linear("1/min", "per minute", 1.0 / 60.0).with_aliases(&["cpm"]) => from_per_minute, per_minute;
            PER_HOUR = Unit::linear("1/h", "per hour", 1.0 / 3600.0) => from_per_hour, per_hour;
        }
    }
}

quantity_kind! {
    pub struct AngularSpeed {
        name: "AngularSpeed",
        dimension: Dimension::FREQUENCY,
        si: RADIANS_PER_SECOND,
        units: {
            RADIANS_PER_SECOND = Unit::si("rad/s", "radian per second") => from_radians_per_second, radians_per_second;
            DEGREES_PER_SECOND = Unit::linear("°/s", "degree per second", PI / 180.0).with_aliases(&["deg/s"]) => from_degrees_per_second, degrees_per_second;
            REVOLUTIONS_PER_MINUTE = Unit::linear("rpm", "revolution per minute", 2.0 * PI / 60.0).with_aliases(&["rev/min", "RPM"]) => from_revolutions_per_minute, revolutions_per_minute;
            REVOLUTIONS_PER_SECOND = Unit::linear("rev/s", "revolution per second", 2.0 * PI).with_aliases(&["rps"]) => from_revolutions_per_second, revolutions_per_second;
        }
    }
}

quantity_kind! {
    pub struct AngularAcceleration {
        name: "AngularAcceleration",
        dimension: Dimension::ANGULAR_ACCELERATION,
        si: RADIANS_PER_SECOND_SQUARED,
        units: {
            RADIANS_PER_SECOND_SQUARED = Unit::si("rad/s²", "radian per second squared") => from_radians_per_second_squared, radians_per_second_squared;
            DEGREES_PER_SECOND_SQUARED = Unit::linear("°/s²", "degree per second squared", PI / 180.0).with_aliases(&["deg/s²"]) => from_degrees_per_second_squared, degrees_per_second_squared;
        }
    }
}

quantity_kind! {
    pub struct VolumetricFlow {
        name: "VolumetricFlow",
        dimension: Dimension::VOLUMETRIC_FLOW,
        si: CUBIC_METRES_PER_SECOND,
        units: {
            CUBIC_METRES_PER_SECOND = Unit::si("m³/s", "cubic metre per second") => from_cubic_metres_per_second, cubic_metres_per_second;
            CUBIC_METRES_PER_HOUR = Unit::linear("m³/h", "cubic metre per hour", 1.0 / 3600.0) => from_cubic_metres_per_hour, cubic_metres_per_hour;
            LITRES_PER_SECOND = Unit::linear("L/s", "litre per second", 1e-3) => from_litres_per_second, litres_per_second;
            LITRES_PER_MINUTE = Unit::linear("L/min", "litre per minute", 1e-3 / 60.0).with_aliases(&["lpm"]) => from_litres_per_minute, litres_per_minute;
            US_GALLONS_PER_MINUTE = Unit::linear("gpm", "US gallon per minute", 3.785_411_784e-3 / 60.0).with_aliases(&["gal/min"]) => from_us_gallons_per_minute, us_gallons_per_minute;
            CUBIC_FEET_PER_MINUTE = Unit::linear("cfm", "cubic foot per minute", 0.028_316_846_592 / 60.0).with_aliases(&["ft³/min"]) => from_cubic_feet_per_minute, cubic_feet_per_minute;
        }
    }
}

quantity_kind! {
    pub struct KinematicViscosity {
        name: "KinematicViscosity",
        dimension: Dimension::KINEMATIC_VISCOSITY,
        si: SQUARE_METRES_PER_SECOND,
        units: {
            SQUARE_METRES_PER_SECOND = Unit::si("m²/s", "square metre per second") => from_square_metres_per_second, square_metres_per_second;
            SQUARE_MILLIMETRES_PER_SECOND = Unit::linear("mm²/s", "square millimetre per second", 1e-6) => from_square_millimetres_per_second, square_millimetres_per_second;
            STOKES = Unit::linear("St", "stokes", 1e-4) => from_stokes, stokes;
            CENTISTOKES = Unit::linear("cSt", "centistokes", 1e-6) => from_centistokes, centistokes;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Acceleration, AngularSpeed, Frequency, Quantity, Speed, SymbolFormat, Unit};

    #[test]
    fn test_speed() {
        let q = Quantity::<Speed>::from_kilometres_per_hour(36.0);
        assert!((q.metres_per_second() - 10.0).abs() < 1e-12);
        assert!((Quantity::<Speed>::from_knots(1.0).kilometres_per_hour() - 1.852).abs() < 1e-12);
    }

    #[test]
    fn test_quotient_symbols_restyle() {
        assert_eq!(Unit::<Acceleration>::METRES_PER_SECOND_SQUARED.symbol_in(SymbolFormat::SignedHatPowers), "m*s^-2");
        assert_eq!(Unit::<Acceleration>::parse("m⋅s⁻²"), Ok(Unit::<Acceleration>::METRES_PER_SECOND_SQUARED));
    }

    #[test]
    fn test_reciprocal_units() {
        assert_eq!(Unit::<Frequency>::parse("s⁻¹"), Ok(Unit::<Frequency>::PER_SECOND));
        assert_eq!(Unit::<Frequency>::PER_SECOND.symbol_in(SymbolFormat::SignedSuperScript), "s⁻¹");
    }

    #[test]
    fn test_rpm() {
        let q = Quantity::<AngularSpeed>::from_revolutions_per_minute(60.0);
        assert!((q.radians_per_second() - 2.0 * std::f64::consts::PI).abs() < 1e-12);
    }
}
