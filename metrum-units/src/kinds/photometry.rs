//! Light and chemistry

use crate::{Dimension, Unit};

quantity_kind! {
    /// Luminous flux, cd⋅sr (the steradian is dimensionless)
    pub struct LuminousFlux {
        name: "LuminousFlux",
        dimension: Dimension::LUMINOSITY,
        si: LUMENS,
        units: {
            LUMENS = Unit::si("lm", "lumen") => from_lumens, lumens;
            KILOLUMENS = Unit::linear("klm", "kilolumen", 1e3) => from_kilolumens, kilolumens;
        }
    }
}

quantity_kind! {
    pub struct Illuminance {
        name: "Illuminance",
        dimension: Dimension::ILLUMINANCE,
        si: LUX,
        units: {
            LUX = Unit::si("lx", "lux") => from_lux, lux;
            KILOLUX = Unit::linear("klx", "kilolux", 1e3) => from_kilolux, kilolux;
            FOOT_CANDLES = Unit::linear("fc", "foot-candle", 10.763_910_416_709_722) => from_foot_candles, foot_candles;
            PHOTS = Unit::linear("ph", "phot", 1e4) => from_phots, phots;
        }
    }
}

quantity_kind! {
    pub struct MolarMass {
        name: "MolarMass",
        dimension: Dimension::MOLAR_MASS,
        si: KILOGRAMS_PER_MOLE,
        units: {
            KILOGRAMS_PER_MOLE = Unit::si("kg/mol", "kilogram per mole") => from_kilograms_per_mole, kilograms_per_mole;
            GRAMS_PER_MOLE = Unit::linear("g/mol", "gram per mole", 1e-3) => from_grams_per_mole, grams_per_mole;
        }
    }
}

quantity_kind! {
    /// Amount concentration
    pub struct Molarity {
        name: "Molarity",
        dimension: Dimension::MOLARITY,
        si: MOLES_PER_CUBIC_METRE,
        units: {
            MOLES_PER_CUBIC_METRE = Unit::si("mol/m³", "mole per cubic metre") => from_moles_per_cubic_metre, moles_per_cubic_metre;
            MOLES_PER_LITRE = Unit::linear("mol/L", "mole per litre", 1e3).with_aliases(&["M"]) => from_moles_per_litre, moles_per_litre;
            MILLIMOLES_PER_LITRE = Unit::linear("mmol/L", "millimole per litre", 1.0).with_aliases(&["mM"]) => from_millimoles_per_litre, millimoles_per_litre;
        }
    }
}
