//! Forces, pressures, energy and material properties

use crate::{Dimension, Unit};

const POUND_FORCE: f64 = 4.448_221_615_260_5;
const BTU: f64 = 1_055.055_852_62;

quantity_kind! {
    pub struct Force {
        name: "Force",
        dimension: Dimension::FORCE,
        si: NEWTONS,
        units: {
            NEWTONS = Unit::si("N", "newton").with_aliases(&["newtons"]) => from_newtons, newtons;
            MILLINEWTONS = Unit::linear("mN", "millinewton", 1e-3) => from_millinewtons, millinewtons;
            KILONEWTONS = Unit::linear("kN", "kilonewton", 1e3) => from_kilonewtons, kilonewtons;
            MEGANEWTONS = Unit::linear("MN", "meganewton", 1e6) => from_meganewtons, meganewtons;
            DYNES = Unit::linear("dyn", "dyne", 1e-5) => from_dynes, dynes;
            KILOGRAMS_FORCE = Unit::linear("kgf", "kilogram-force", 9.806_65).with_aliases(&["kp"]) => from_kilograms_force, kilograms_force;
            POUNDS_FORCE = Unit::linear("lbf", "pound-force", POUND_FORCE) => from_pounds_force, pounds_force;
            KIPS = Unit::linear("kip", "kip", POUND_FORCE * 1e3) => from_kips, kips;
        }
    }
}

quantity_kind! {
    pub struct Momentum {
        name: "Momentum",
        dimension: Dimension::MOMENTUM,
        si: KILOGRAM_METRES_PER_SECOND,
        units: {
            KILOGRAM_METRES_PER_SECOND = Unit::si("kg⋅m/s", "kilogram metre per second") => from_kilogram_metres_per_second, kilogram_metres_per_second;
            NEWTON_SECONDS = Unit::linear("N⋅s", "newton second", 1.0).with_aliases(&["Ns"]) => from_newton_seconds, newton_seconds;
            GRAM_CENTIMETRES_PER_SECOND = Unit::linear("g⋅cm/s", "gram centimetre per second", 1e-5) => from_gram_centimetres_per_second, gram_centimetres_per_second;
        }
    }
}

quantity_kind! {
    pub struct Pressure {
        name: "Pressure",
        dimension: Dimension::PRESSURE,
        si: PASCALS,
        units: {
            PASCALS = Unit::si("Pa", "pascal") => from_pascals, pascals;
            HECTOPASCALS = Unit::linear("hPa", "hectopascal", 1e2) => from_hectopascals, hectopascals;
            KILOPASCALS = Unit::linear("kPa", "kilopascal", 1e3) => from_kilopascals, kilopascals;
            MEGAPASCALS = Unit::linear("MPa", "megapascal", 1e6) => from_megapascals, megapascals;
            GIGAPASCALS = Unit::linear("GPa", "gigapascal", 1e9) => from_gigapascals, gigapascals;
            NEWTONS_PER_SQUARE_METRE = Unit::linear("N/m²", "newton per square metre", 1.0) => from_newtons_per_square_metre, newtons_per_square_metre;
            KILONEWTONS_PER_SQUARE_METRE = Unit::linear("kN/m²", "kilonewton per square metre", 1e3) => from_kilonewtons_per_square_metre, kilonewtons_per_square_metre;
            NEWTONS_PER_SQUARE_MILLIMETRE = Unit::linear("N/mm²", "newton per square millimetre", 1e6) => from_newtons_per_square_millimetre, newtons_per_square_millimetre;
            BARS = Unit::linear("bar", "bar", 1e5) => from_bars, bars;
            MILLIBARS = Unit::linear("mbar", "millibar", 1e2) => from_millibars, millibars;
            ATMOSPHERES = Unit::linear("atm", "standard atmosphere", 101_325.0) => from_atmospheres, atmospheres;
            TORRS = Unit::linear("Torr", "torr", 101_325.0 / 760.0) => from_torrs, torrs;
            MILLIMETRES_OF_MERCURY = Unit::linear("mmHg", "millimetre of mercury", 133.322_387_415) => from_millimetres_of_mercury, millimetres_of_mercury;
            PSI = Unit::linear("psi", "pound per square inch", 6_894.757_293_168_361).with_aliases(&["lbf/in²"]) => from_psi, psi;
            KSI = Unit::linear("ksi", "kip per square inch", 6_894_757.293_168_361) => from_ksi, ksi;
        }
    }
}

quantity_kind! {
    pub struct Energy {
        name: "Energy",
        dimension: Dimension::ENERGY,
        si: JOULES,
        units: {
            JOULES = Unit::si("J", "joule").with_aliases(&["joules"]) => from_joules, joules;
            MILLIJOULES = Unit::linear("mJ", "millijoule", 1e-3) => from_millijoules, millijoules;
            KILOJOULES = Unit::linear("kJ", "kilojoule", 1e3) => from_kilojoules, kilojoules;
            MEGAJOULES = Unit::linear("MJ", "megajoule", 1e6) => from_megajoules, megajoules;
            GIGAJOULES = Unit::linear("GJ", "gigajoule", 1e9) => from_gigajoules, gigajoules;
            WATT_HOURS = Unit::linear("Wh", "watt hour", 3.6e3) => from_watt_hours, watt_hours;
            KILOWATT_HOURS = Unit::linear("kWh", "kilowatt hour", 3.6e6) => from_kilowatt_hours, kilowatt_hours;
            MEGAWATT_HOURS = Unit::linear("MWh", "megawatt hour", 3.6e9) => from_megawatt_hours, megawatt_hours;
            CALORIES = Unit::linear("cal", "calorie", 4.184) => from_calories, calories;
            KILOCALORIES = Unit::linear("kcal", "kilocalorie", 4.184e3).with_aliases(&["Cal"]) => from_kilocalories, kilocalories;
            ELECTRONVOLTS = Unit::linear("eV", "electronvolt", 1.602_176_634e-19) => from_electronvolts, electronvolts;
            BRITISH_THERMAL_UNITS = Unit::linear("BTU", "British thermal unit", BTU).with_aliases(&["Btu"]) => from_british_thermal_units, british_thermal_units;
            FOOT_POUNDS = Unit::linear("ft⋅lbf", "foot-pound", 1.355_817_948_331_400_4).with_aliases(&["ft-lbf"]) => from_foot_pounds, foot_pounds;
        }
    }
}

quantity_kind! {
    pub struct Power {
        name: "Power",
        dimension: Dimension::POWER,
        si: WATTS,
        units: {
            WATTS = Unit::si("W", "watt").with_aliases(&["watts"]) => from_watts, watts;
            MILLIWATTS = Unit::linear("mW", "milliwatt", 1e-3) => from_milliwatts, milliwatts;
            KILOWATTS = Unit::linear("kW", "kilowatt", 1e3) => from_kilowatts, kilowatts;
            MEGAWATTS = Unit::linear("MW", "megawatt", 1e6) => from_megawatts, megawatts;
            GIGAWATTS = Unit::linear("GW", "gigawatt", 1e9) => from_gigawatts, gigawatts;
            HORSEPOWER = Unit::linear("hp", "horsepower", 745.699_871_582_270_2) => from_horsepower, horsepower;
            METRIC_HORSEPOWER = Unit::linear("PS", "metric horsepower", 735.498_75) => from_metric_horsepower, metric_horsepower;
            BTU_PER_HOUR = Unit::linear("BTU/h", "BTU per hour", BTU / 3600.0) => from_btu_per_hour, btu_per_hour;
        }
    }
}

quantity_kind! {
    pub struct Torque {
        name: "Torque",
        dimension: Dimension::ENERGY,
        si: NEWTON_METRES,
        units: {
            NEWTON_METRES = Unit::si("N⋅m", "newton metre").with_aliases(&["Nm"]) => from_newton_metres, newton_metres;
            NEWTON_MILLIMETRES = Unit::linear("N⋅mm", "newton millimetre", 1e-3).with_aliases(&["Nmm"]) => from_newton_millimetres, newton_millimetres;
            KILONEWTON_METRES = Unit::linear("kN⋅m", "kilonewton metre", 1e3).with_aliases(&["kNm"]) => from_kilonewton_metres, kilonewton_metres;
            POUND_FORCE_FEET = Unit::linear("lbf⋅ft", "pound-force foot", POUND_FORCE * 0.3048).with_aliases(&["lb-ft"]) => from_pound_force_feet, pound_force_feet;
            POUND_FORCE_INCHES = Unit::linear("lbf⋅in", "pound-force inch", POUND_FORCE * 0.0254).with_aliases(&["lb-in"]) => from_pound_force_inches, pound_force_inches;
        }
    }
}

quantity_kind! {
    /// Linear spring rate
    pub struct Stiffness {
        name: "Stiffness",
        dimension: Dimension::STIFFNESS,
        si: NEWTONS_PER_METRE,
        units: {
            NEWTONS_PER_METRE = Unit::si("N/m", "newton per metre") => from_newtons_per_metre, newtons_per_metre;
            NEWTONS_PER_MILLIMETRE = Unit::linear("N/mm", "newton per millimetre", 1e3) => from_newtons_per_millimetre, newtons_per_millimetre;
            KILONEWTONS_PER_METRE = Unit::linear("kN/m", "kilonewton per metre", 1e3) => from_kilonewtons_per_metre, kilonewtons_per_metre;
            KILONEWTONS_PER_MILLIMETRE = Unit::linear("kN/mm", "kilonewton per millimetre", 1e6) => from_kilonewtons_per_millimetre, kilonewtons_per_millimetre;
            POUNDS_FORCE_PER_INCH = Unit::linear("lbf/in", "pound-force per inch", POUND_FORCE / 0.0254) => from_pounds_force_per_inch, pounds_force_per_inch;
        }
    }
}

quantity_kind! {
    pub struct Density {
        name: "Density",
        dimension: Dimension::DENSITY,
        si: KILOGRAMS_PER_CUBIC_METRE,
        units: {
            KILOGRAMS_PER_CUBIC_METRE = Unit::si("kg/m³", "kilogram per cubic metre") => from_kilograms_per_cubic_metre, kilograms_per_cubic_metre;
            GRAMS_PER_CUBIC_CENTIMETRE = Unit::linear("g/cm³", "gram per cubic centimetre", 1e3).with_aliases(&["g/cc"]) => from_grams_per_cubic_centimetre, grams_per_cubic_centimetre;
            GRAMS_PER_MILLILITRE = Unit::linear("g/mL", "gram per millilitre", 1e3) => from_grams_per_millilitre, grams_per_millilitre;
            GRAMS_PER_LITRE = Unit::linear("g/L", "gram per litre", 1.0) => from_grams_per_litre, grams_per_litre;
            KILOGRAMS_PER_LITRE = Unit::linear("kg/L", "kilogram per litre", 1e3) => from_kilograms_per_litre, kilograms_per_litre;
            TONNES_PER_CUBIC_METRE = Unit::linear("t/m³", "tonne per cubic metre", 1e3) => from_tonnes_per_cubic_metre, tonnes_per_cubic_metre;
            POUNDS_PER_CUBIC_FOOT = Unit::linear("lb/ft³", "pound per cubic foot", 16.018_463_373_960_14) => from_pounds_per_cubic_foot, pounds_per_cubic_foot;
        }
    }
}

quantity_kind! {
    pub struct AreaDensity {
        name: "AreaDensity",
        dimension: Dimension::AREA_DENSITY,
        si: KILOGRAMS_PER_SQUARE_METRE,
        units: {
            KILOGRAMS_PER_SQUARE_METRE = Unit::si("kg/m²", "kilogram per square metre") => from_kilograms_per_square_metre, kilograms_per_square_metre;
            GRAMS_PER_SQUARE_METRE = Unit::linear("g/m²", "gram per square metre", 1e-3).with_aliases(&["gsm"]) => from_grams_per_square_metre, grams_per_square_metre;
            POUNDS_PER_SQUARE_FOOT = Unit::linear("lb/ft²", "pound per square foot", 4.882_427_636_383_051) => from_pounds_per_square_foot, pounds_per_square_foot;
        }
    }
}

quantity_kind! {
    pub struct MassFlow {
        name: "MassFlow",
        dimension: Dimension::MASS_FLOW,
        si: KILOGRAMS_PER_SECOND,
        units: {
            KILOGRAMS_PER_SECOND = Unit::si("kg/s", "kilogram per second") => from_kilograms_per_second, kilograms_per_second;
            GRAMS_PER_SECOND = Unit::linear("g/s", "gram per second", 1e-3) => from_grams_per_second, grams_per_second;
            KILOGRAMS_PER_HOUR = Unit::linear("kg/h", "kilogram per hour", 1.0 / 3600.0) => from_kilograms_per_hour, kilograms_per_hour;
            TONNES_PER_HOUR = Unit::linear("t/h", "tonne per hour", 1e3 / 3600.0) => from_tonnes_per_hour, tonnes_per_hour;
            POUNDS_PER_HOUR = Unit::linear("lb/h", "pound per hour", 0.453_592_37 / 3600.0) => from_pounds_per_hour, pounds_per_hour;
        }
    }
}

quantity_kind! {
    pub struct SpecificEnergy {
        name: "SpecificEnergy",
        dimension: Dimension::SPECIFIC_ENERGY,
        si: JOULES_PER_KILOGRAM,
        units: {
            JOULES_PER_KILOGRAM = Unit::si("J/kg", "joule per kilogram") => from_joules_per_kilogram, joules_per_kilogram;
            KILOJOULES_PER_KILOGRAM = Unit::linear("kJ/kg", "kilojoule per kilogram", 1e3) => from_kilojoules_per_kilogram, kilojoules_per_kilogram;
            MEGAJOULES_PER_KILOGRAM = Unit::linear("MJ/kg", "megajoule per kilogram", 1e6) => from_megajoules_per_kilogram, megajoules_per_kilogram;
            KILOWATT_HOURS_PER_KILOGRAM = Unit::linear("kWh/kg", "kilowatt hour per kilogram", 3.6e6) => from_kilowatt_hours_per_kilogram, kilowatt_hours_per_kilogram;
            BTU_PER_POUND = Unit::linear("BTU/lb", "BTU per pound", 2_326.0) => from_btu_per_pound, btu_per_pound;
        }
    }
}

quantity_kind! {
    pub struct SpecificVolume {
        name: "SpecificVolume",
        dimension: Dimension::SPECIFIC_VOLUME,
        si: CUBIC_METRES_PER_KILOGRAM,
        units: {
            CUBIC_METRES_PER_KILOGRAM = Unit::si("m³/kg", "cubic metre per kilogram") => from_cubic_metres_per_kilogram, cubic_metres_per_kilogram;
            LITRES_PER_KILOGRAM = Unit::linear("L/kg", "litre per kilogram", 1e-3) => from_litres_per_kilogram, litres_per_kilogram;
            CUBIC_FEET_PER_POUND = Unit::linear("ft³/lb", "cubic foot per pound", 0.062_427_960_576_144_61) => from_cubic_feet_per_pound, cubic_feet_per_pound;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Energy, Force, Pressure, Quantity, SymbolFormat, Torque, Unit};

    #[test]
    fn test_pressure_composites() {
        assert_eq!(Unit::<Pressure>::parse("N⋅m⁻²"), Ok(Unit::<Pressure>::NEWTONS_PER_SQUARE_METRE));
        assert_eq!(Unit::<Pressure>::parse("kN/m2"), Ok(Unit::<Pressure>::KILONEWTONS_PER_SQUARE_METRE));
        let q = Quantity::<Pressure>::from_newtons_per_square_millimetre(1.0);
        assert!((q.megapascals() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_torque_product_symbol() {
        let unit = Unit::<Torque>::NEWTON_METRES;
        assert_eq!(Unit::<Torque>::parse("N*m"), Ok(unit));
        assert_eq!(Unit::<Torque>::parse("m N"), Ok(unit));
        assert_eq!(unit.symbol_in(SymbolFormat::SignedHatPowers), "N*m");
        assert_eq!(Unit::<Torque>::parse("Nm"), Ok(unit));
    }

    #[test]
    fn test_energy() {
        assert!((Quantity::<Energy>::from_kilowatt_hours(1.0).megajoules() - 3.6).abs() < 1e-12);
        let q: Quantity<Energy> = "5eV".parse().unwrap();
        assert!((q.electronvolts() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_force() {
        assert!((Quantity::<Force>::from_kilograms_force(1.0).newtons() - 9.80665).abs() < 1e-12);
        assert!((Quantity::<Force>::from_kips(1.0).pounds_force() - 1000.0).abs() < 1e-9);
    }
}
