//! Mapping between a unit's scale and the SI scale of its quantity kind

use serde::{Deserialize, Serialize};

/// How values expressed in a unit map to and from the SI unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Conversion {
    /// `si = value * factor`
    Linear { factor: f64 },
    /// `si = (value - offset) / factor`, `value = factor * si + offset`.
    /// Used for scales that do not share a zero with SI (°C, °F).
    Affine { factor: f64, offset: f64 },
}

impl Conversion {
    /// The identity conversion of an SI unit
    pub const IDENTITY: Conversion = Conversion::Linear { factor: 1.0 };

    /// Convert a value in this unit to the SI unit
    pub fn to_si(&self, value: f64) -> f64 {
        match *self {
            Conversion::Linear { factor } => value * factor,
            Conversion::Affine { factor, offset } => (value - offset) / factor,
        }
    }

    /// Convert a value in the SI unit to this unit
    pub fn from_si(&self, si_value: f64) -> f64 {
        match *self {
            Conversion::Linear { factor } => si_value / factor,
            Conversion::Affine { factor, offset } => factor * si_value + offset,
        }
    }

    /// True for a linear conversion with factor exactly 1
    pub fn is_identity(&self) -> bool {
        matches!(*self, Conversion::Linear { factor } if factor == 1.0)
    }

    /// Check if this conversion has an offset (non-proportional scale)
    pub fn has_offset(&self) -> bool {
        matches!(*self, Conversion::Affine { offset, .. } if offset != 0.0)
    }
}

impl Default for Conversion {
    fn default() -> Self {
        Conversion::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Relative error, measured against 1 near zero
    fn relative_error(a: f64, b: f64) -> f64 {
        (a - b).abs() / a.abs().max(b.abs()).max(1.0)
    }

    const KILOMETRE: Conversion = Conversion::Linear { factor: 1000.0 };
    const CELSIUS: Conversion = Conversion::Affine { factor: 1.0, offset: -273.15 };
    const FAHRENHEIT: Conversion = Conversion::Affine { factor: 1.8, offset: -459.67 };

    #[test]
    fn test_linear() {
        assert_eq!(KILOMETRE.to_si(5.0), 5000.0);
        assert_eq!(KILOMETRE.from_si(5000.0), 5.0);
        assert!(!KILOMETRE.is_identity());
        assert!(!KILOMETRE.has_offset());
    }

    #[test]
    fn test_identity() {
        for v in [0.0, -1.5, 1e300, -1e-300, 42.0] {
            assert_eq!(Conversion::IDENTITY.to_si(v), v);
            assert_eq!(Conversion::IDENTITY.from_si(v), v);
        }
        assert!(Conversion::default().is_identity());
    }

    #[test]
    fn test_affine_celsius() {
        assert_eq!(CELSIUS.to_si(0.0), 273.15);
        assert_eq!(CELSIUS.from_si(273.15), 0.0);
        assert!(CELSIUS.has_offset());
    }

    #[test]
    fn test_affine_fahrenheit() {
        assert!(relative_error(FAHRENHEIT.to_si(32.0), 273.15) < 1e-12);
        assert!(relative_error(FAHRENHEIT.from_si(373.15), 212.0) < 1e-12);
    }

    #[test]
    fn test_round_trip() {
        for conversion in [KILOMETRE, CELSIUS, FAHRENHEIT] {
            for v in [0.0, 1.0, -40.0, 1234.5678, 1e9] {
                let back = conversion.from_si(conversion.to_si(v));
                assert!(relative_error(back, v) < 1e-9, "{:?} {} -> {}", conversion, v, back);
            }
        }
    }

    #[test]
    fn test_non_finite_propagates() {
        assert!(KILOMETRE.to_si(f64::NAN).is_nan());
        assert_eq!(CELSIUS.to_si(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&CELSIUS).unwrap();
        assert_eq!(json, r#"{"kind":"affine","factor":1.0,"offset":-273.15}"#);
        let back: Conversion = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CELSIUS);
    }
}
