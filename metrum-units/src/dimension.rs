//! Dimensional signatures
//!
//! Each quantity kind has dimensions represented as a 7-element vector:
//! [length, mass, time, current, temperature, amount, luminosity]

use std::fmt;
use serde::{Serialize, Deserialize};

/// The dimensions of a physical quantity as exponents of the 7 SI base dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimension {
    /// [length, mass, time, current, temperature, amount, luminosity]
    pub exponents: [i32; 7],
}

impl Dimension {
    pub const DIMENSIONLESS: Dimension = Dimension::new([0, 0, 0, 0, 0, 0, 0]);

    // Base dimensions
    pub const LENGTH: Dimension = Dimension::new([1, 0, 0, 0, 0, 0, 0]);
    pub const MASS: Dimension = Dimension::new([0, 1, 0, 0, 0, 0, 0]);
    pub const TIME: Dimension = Dimension::new([0, 0, 1, 0, 0, 0, 0]);
    pub const CURRENT: Dimension = Dimension::new([0, 0, 0, 1, 0, 0, 0]);
    pub const TEMPERATURE: Dimension = Dimension::new([0, 0, 0, 0, 1, 0, 0]);
    pub const AMOUNT: Dimension = Dimension::new([0, 0, 0, 0, 0, 1, 0]);
    pub const LUMINOSITY: Dimension = Dimension::new([0, 0, 0, 0, 0, 0, 1]);

    // Geometry
    pub const AREA: Dimension = Dimension::LENGTH.power(2);
    pub const VOLUME: Dimension = Dimension::LENGTH.power(3);
    pub const WAVENUMBER: Dimension = Dimension::LENGTH.invert();

    // Kinematics
    pub const FREQUENCY: Dimension = Dimension::TIME.invert();
    pub const VELOCITY: Dimension = Dimension::LENGTH.divide(&Dimension::TIME);
    pub const ACCELERATION: Dimension = Dimension::VELOCITY.divide(&Dimension::TIME);
    pub const JERK: Dimension = Dimension::ACCELERATION.divide(&Dimension::TIME);
    pub const ANGULAR_ACCELERATION: Dimension = Dimension::TIME.power(-2);
    pub const VOLUMETRIC_FLOW: Dimension = Dimension::VOLUME.divide(&Dimension::TIME);
    pub const KINEMATIC_VISCOSITY: Dimension = Dimension::AREA.divide(&Dimension::TIME);

    // Mechanics
    pub const FORCE: Dimension = Dimension::MASS.multiply(&Dimension::ACCELERATION);
    pub const MOMENTUM: Dimension = Dimension::MASS.multiply(&Dimension::VELOCITY);
    pub const PRESSURE: Dimension = Dimension::FORCE.divide(&Dimension::AREA);
    pub const ENERGY: Dimension = Dimension::FORCE.multiply(&Dimension::LENGTH);
    pub const POWER: Dimension = Dimension::ENERGY.divide(&Dimension::TIME);
    pub const STIFFNESS: Dimension = Dimension::FORCE.divide(&Dimension::LENGTH);
    pub const DENSITY: Dimension = Dimension::MASS.divide(&Dimension::VOLUME);
    pub const AREA_DENSITY: Dimension = Dimension::MASS.divide(&Dimension::AREA);
    pub const MASS_FLOW: Dimension = Dimension::MASS.divide(&Dimension::TIME);
    pub const SPECIFIC_ENERGY: Dimension = Dimension::ENERGY.divide(&Dimension::MASS);
    pub const SPECIFIC_VOLUME: Dimension = Dimension::DENSITY.invert();

    // Electromagnetism
    pub const CHARGE: Dimension = Dimension::CURRENT.multiply(&Dimension::TIME);
    pub const VOLTAGE: Dimension = Dimension::POWER.divide(&Dimension::CURRENT);
    pub const RESISTANCE: Dimension = Dimension::VOLTAGE.divide(&Dimension::CURRENT);
    pub const CONDUCTANCE: Dimension = Dimension::RESISTANCE.invert();
    pub const CAPACITANCE: Dimension = Dimension::CHARGE.divide(&Dimension::VOLTAGE);
    pub const MAGNETIC_FLUX: Dimension = Dimension::VOLTAGE.multiply(&Dimension::TIME);
    pub const MAGNETIC_FLUX_DENSITY: Dimension = Dimension::MAGNETIC_FLUX.divide(&Dimension::AREA);
    pub const INDUCTANCE: Dimension = Dimension::MAGNETIC_FLUX.divide(&Dimension::CURRENT);

    // Photometry and chemistry
    pub const ILLUMINANCE: Dimension = Dimension::LUMINOSITY.divide(&Dimension::AREA);
    pub const MOLAR_MASS: Dimension = Dimension::MASS.divide(&Dimension::AMOUNT);
    pub const MOLARITY: Dimension = Dimension::AMOUNT.divide(&Dimension::VOLUME);

    /// Create a new dimension from exponents
    pub const fn new(exponents: [i32; 7]) -> Self {
        Dimension { exponents }
    }

    /// Check if this is a dimensionless quantity
    pub fn is_dimensionless(&self) -> bool {
        self.exponents.iter().all(|&e| e == 0)
    }

    /// Multiply dimensions (add exponents)
    pub const fn multiply(&self, other: &Dimension) -> Dimension {
        let mut result = [0i32; 7];
        let mut i = 0;
        while i < 7 {
            result[i] = self.exponents[i] + other.exponents[i];
            i += 1;
        }
        Dimension { exponents: result }
    }

    /// Divide dimensions (subtract exponents)
    pub const fn divide(&self, other: &Dimension) -> Dimension {
        let mut result = [0i32; 7];
        let mut i = 0;
        while i < 7 {
            result[i] = self.exponents[i] - other.exponents[i];
            i += 1;
        }
        Dimension { exponents: result }
    }

    /// Raise to integer power (multiply exponents)
    pub const fn power(&self, exp: i32) -> Dimension {
        let mut result = [0i32; 7];
        let mut i = 0;
        while i < 7 {
            result[i] = self.exponents[i] * exp;
            i += 1;
        }
        Dimension { exponents: result }
    }

    /// Invert dimensions (negate exponents)
    pub const fn invert(&self) -> Dimension {
        self.power(-1)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = ["L", "M", "T", "I", "Θ", "N", "J"];
        let mut parts = Vec::new();

        for (i, &exp) in self.exponents.iter().enumerate() {
            if exp != 0 {
                if exp == 1 {
                    parts.push(names[i].to_string());
                } else {
                    parts.push(format!("{}^{}", names[i], exp));
                }
            }
        }

        if parts.is_empty() {
            write!(f, "1")
        } else {
            write!(f, "{}", parts.join(" "))
        }
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::DIMENSIONLESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensionless() {
        assert!(Dimension::DIMENSIONLESS.is_dimensionless());
        assert!(!Dimension::LENGTH.is_dimensionless());
        assert_eq!(Dimension::default(), Dimension::DIMENSIONLESS);
    }

    #[test]
    fn test_derived_constants() {
        assert_eq!(Dimension::VELOCITY.exponents, [1, 0, -1, 0, 0, 0, 0]);
        assert_eq!(Dimension::FORCE.exponents, [1, 1, -2, 0, 0, 0, 0]);
        assert_eq!(Dimension::PRESSURE.exponents, [-1, 1, -2, 0, 0, 0, 0]);
        assert_eq!(Dimension::VOLTAGE.exponents, [2, 1, -3, -1, 0, 0, 0]);
        assert_eq!(Dimension::CAPACITANCE.exponents, [-2, -1, 4, 2, 0, 0, 0]);
        assert_eq!(Dimension::MAGNETIC_FLUX_DENSITY.exponents, [0, 1, -2, -1, 0, 0, 0]);
    }

    #[test]
    fn test_power_and_invert() {
        assert_eq!(Dimension::LENGTH.power(2), Dimension::AREA);
        assert_eq!(Dimension::FREQUENCY.invert(), Dimension::TIME);
        assert_eq!(Dimension::SPECIFIC_VOLUME.multiply(&Dimension::DENSITY), Dimension::DIMENSIONLESS);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Dimension::DIMENSIONLESS), "1");
        assert_eq!(format!("{}", Dimension::LENGTH), "L");
        assert_eq!(format!("{}", Dimension::VELOCITY), "L T^-1");
    }
}
