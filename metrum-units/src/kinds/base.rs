//! SI base quantities

use crate::{Dimension, Unit};

quantity_kind! {
    pub struct Length {
        name: "Length",
        dimension: Dimension::LENGTH,
        si: METRES,
        units: {
            METRES = Unit::si("m", "metre").with_aliases(&["metres", "meter", "meters"]) => from_metres, metres;
            KILOMETRES = Unit::linear("km", "kilometre", 1e3).with_aliases(&["kilometres", "kilometer"]) => from_kilometres, kilometres;
            DECIMETRES = Unit::linear("dm", "decimetre", 1e-1) => from_decimetres, decimetres;
            CENTIMETRES = Unit::linear("cm", "centimetre", 1e-2).with_aliases(&["centimetres", "centimeter"]) => from_centimetres, centimetres;
            MILLIMETRES = Unit::linear("mm", "millimetre", 1e-3).with_aliases(&["millimetres", "millimeter"]) => from_millimetres, millimetres;
            MICROMETRES = Unit::linear("µm", "micrometre", 1e-6).with_aliases(&["um", "μm", "micron"]) => from_micrometres, micrometres;
            NANOMETRES = Unit::linear("nm", "nanometre", 1e-9) => from_nanometres, nanometres;
            INCHES = Unit::linear("in", "inch", 0.0254).with_aliases(&["inches"]) => from_inches, inches;
            FEET = Unit::linear("ft", "foot", 0.3048).with_aliases(&["feet"]) => from_feet, feet;
            YARDS = Unit::linear("yd", "yard", 0.9144) => from_yards, yards;
            MILES = Unit::linear("mi", "mile", 1609.344).with_aliases(&["miles"]) => from_miles, miles;
            NAUTICAL_MILES = Unit::linear("nmi", "nautical mile", 1852.0) => from_nautical_miles, nautical_miles;
            MILS = Unit::linear("mil", "thou", 2.54e-5) => from_mils, mils;
            ASTRONOMICAL_UNITS = Unit::linear("au", "astronomical unit", 149_597_870_700.0) => from_astronomical_units, astronomical_units;
            LIGHT_YEARS = Unit::linear("ly", "light year", 9_460_730_472_580_800.0) => from_light_years, light_years;
            PARSECS = Unit::linear("pc", "parsec", 3.085_677_581_491_367e16) => from_parsecs, parsecs;
        }
    }
}

quantity_kind! {
    pub struct Mass {
        name: "Mass",
        dimension: Dimension::MASS,
        si: KILOGRAMS,
        units: {
            KILOGRAMS = Unit::si("kg", "kilogram").with_aliases(&["kilograms"]) => from_kilograms, kilograms;
            GRAMS = Unit::linear("g", "gram", 1e-3).with_aliases(&["grams"]) => from_grams, grams;
            MILLIGRAMS = Unit::linear("mg", "milligram", 1e-6) => from_milligrams, milligrams;
            MICROGRAMS = Unit::linear("µg", "microgram", 1e-9).with_aliases(&["ug", "μg", "mcg"]) => from_micrograms, micrograms;
            TONNES = Unit::linear("t", "tonne", 1e3).with_aliases(&["tonnes", "metric ton"]) => from_tonnes, tonnes;
            POUNDS = Unit::linear("lb", "pound", 0.453_592_37).with_aliases(&["lbs", "pounds"]) => from_pounds, pounds;
            OUNCES = Unit::linear("oz", "ounce", 0.028_349_523_125).with_aliases(&["ounces"]) => from_ounces, ounces;
            STONES = Unit::linear("st", "stone", 6.350_293_18) => from_stones, stones;
            SHORT_TONS = Unit::linear("ton", "short ton", 907.184_74) => from_short_tons, short_tons;
            GRAINS = Unit::linear("gr", "grain", 6.479_891e-5) => from_grains, grains;
        }
    }
}

quantity_kind! {
    pub struct Time {
        name: "Time",
        dimension: Dimension::TIME,
        si: SECONDS,
        units: {
            SECONDS = Unit::si("s", "second").with_aliases(&["sec", "seconds"]) => from_seconds, seconds;
            MILLISECONDS = Unit::linear("ms", "millisecond", 1e-3) => from_milliseconds, milliseconds;
            MICROSECONDS = Unit::linear("µs", "microsecond", 1e-6).with_aliases(&["us", "μs"]) => from_microseconds, microseconds;
            NANOSECONDS = Unit::linear("ns", "nanosecond", 1e-9) => from_nanoseconds, nanoseconds;
            MINUTES = Unit::linear("min", "minute", 60.0).with_aliases(&["minutes"]) => from_minutes, minutes;
            HOURS = Unit::linear("h", "hour", 3600.0).with_aliases(&["hr", "hours"]) => from_hours, hours;
            DAYS = Unit::linear("d", "day", 86_400.0).with_aliases(&["days"]) => from_days, days;
            WEEKS = Unit::linear("wk", "week", 604_800.0) => from_weeks, weeks;
            JULIAN_YEARS = Unit::linear("a", "julian year", 31_557_600.0).with_aliases(&["yr"]) => from_julian_years, julian_years;
        }
    }
}

quantity_kind! {
    pub struct Current {
        name: "Current",
        dimension: Dimension::CURRENT,
        si: AMPERES,
        units: {
            AMPERES = Unit::si("A", "ampere").with_aliases(&["amp", "amps"]) => from_amperes, amperes;
            KILOAMPERES = Unit::linear("kA", "kiloampere", 1e3) => from_kiloamperes, kiloamperes;
            MILLIAMPERES = Unit::linear("mA", "milliampere", 1e-3) => from_milliamperes, milliamperes;
            MICROAMPERES = Unit::linear("µA", "microampere", 1e-6).with_aliases(&["uA", "μA"]) => from_microamperes, microamperes;
        }
    }
}

quantity_kind! {
    /// Thermodynamic temperature. Celsius and Fahrenheit are affine scales.
    pub struct Temperature {
        name: "Temperature",
        dimension: Dimension::TEMPERATURE,
        si: KELVIN,
        units: {
            KELVIN = Unit::si("K", "kelvin") => from_kelvin, kelvin;
            DEGREES_CELSIUS = Unit::affine("°C", "degree Celsius", 1.0, -273.15).with_aliases(&["degC", "celsius"]) => from_degrees_celsius, degrees_celsius;
            DEGREES_FAHRENHEIT = Unit::affine("°F", "degree Fahrenheit", 1.8, -459.67).with_aliases(&["degF", "fahrenheit"]) => from_degrees_fahrenheit, degrees_fahrenheit;
            DEGREES_RANKINE = Unit::linear("°R", "degree Rankine", 5.0 / 9.0).with_aliases(&["degR", "rankine"]) => from_degrees_rankine, degrees_rankine;
        }
    }
}

quantity_kind! {
    pub struct AmountOfSubstance {
        name: "AmountOfSubstance",
        dimension: Dimension::AMOUNT,
        si: MOLES,
        units: {
            MOLES = Unit::si("mol", "mole").with_aliases(&["moles"]) => from_moles, moles;
            KILOMOLES = Unit::linear("kmol", "kilomole", 1e3) => from_kilomoles, kilomoles;
            MILLIMOLES = Unit::linear("mmol", "millimole", 1e-3) => from_millimoles, millimoles;
            MICROMOLES = Unit::linear("µmol", "micromole", 1e-6).with_aliases(&["umol", "μmol"]) => from_micromoles, micromoles;
        }
    }
}

quantity_kind! {
    pub struct LuminousIntensity {
        name: "LuminousIntensity",
        dimension: Dimension::LUMINOSITY,
        si: CANDELAS,
        units: {
            CANDELAS = Unit::si("cd", "candela") => from_candelas, candelas;
            MILLICANDELAS = Unit::linear("mcd", "millicandela", 1e-3) => from_millicandelas, millicandelas;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Length, Quantity, QuantityKind, Temperature, Time, Unit};

    #[test]
    fn test_si_units_first() {
        assert_eq!(Length::UNITS[0], Unit::<Length>::METRES);
        assert_eq!(Length::CONSTRUCTORS[0], "from_metres");
        assert_eq!(Length::UNITS.len(), Length::CONSTRUCTORS.len());
    }

    #[test]
    fn test_length_factors() {
        assert!((Quantity::<Length>::from_inches(12.0).feet() - 1.0).abs() < 1e-12);
        assert!((Quantity::<Length>::from_miles(1.0).kilometres() - 1.609344).abs() < 1e-12);
    }

    #[test]
    fn test_temperature_scales() {
        let boiling = Quantity::<Temperature>::from_degrees_celsius(100.0);
        assert!((boiling.kelvin() - 373.15).abs() < 1e-9);
        assert!((boiling.degrees_fahrenheit() - 212.0).abs() < 1e-9);
        assert!((boiling.degrees_rankine() - 671.67).abs() < 1e-9);

        let absolute_zero = Quantity::<Temperature>::from_degrees_fahrenheit(-459.67);
        assert!(absolute_zero.kelvin().abs() < 1e-9);
    }

    #[test]
    fn test_time_aliases() {
        assert_eq!(Unit::<Time>::parse("hr"), Ok(Unit::<Time>::HOURS));
        assert_eq!(Unit::<Time>::parse("minute"), Ok(Unit::<Time>::MINUTES));
        assert_eq!(Quantity::<Time>::from_hours(1.5).minutes(), 90.0);
    }
}
