//! Cross-kind arithmetic - `Length * Length = Area` and friends
//!
//! Each declaration `A * B = C` gives `A * B -> C`, `C / B -> A` and, with
//! `[commutes]`, also `B * A -> C` and `C / A -> B`.

use std::ops::{Div, Mul};
use crate::kinds::*;
use crate::Quantity;

macro_rules! products {
    ($( $lhs:ident * $rhs:ident = $out:ident $([$commutes:ident])?; )+) => {
        $(
            products!(@mul $lhs, $rhs, $out);
            products!(@div $out, $rhs, $lhs);
            $( products!(@$commutes $lhs, $rhs, $out); )?
        )+

        #[cfg(test)]
        const DECLARED: &[(&str, crate::Dimension, crate::Dimension, crate::Dimension)] = &[
            $( (
                concat!(stringify!($lhs), " * ", stringify!($rhs), " = ", stringify!($out)),
                <$lhs as crate::QuantityKind>::DIMENSION,
                <$rhs as crate::QuantityKind>::DIMENSION,
                <$out as crate::QuantityKind>::DIMENSION,
            ), )+
        ];
    };
    (@commutes $lhs:ident, $rhs:ident, $out:ident) => {
        products!(@mul $rhs, $lhs, $out);
        products!(@div $out, $lhs, $rhs);
    };
    (@mul $lhs:ident, $rhs:ident, $out:ident) => {
        impl Mul<Quantity<$rhs>> for Quantity<$lhs> {
            type Output = Quantity<$out>;

            fn mul(self, rhs: Quantity<$rhs>) -> Quantity<$out> {
                Quantity::from_si(self.si_value() * rhs.si_value())
            }
        }
    };
    (@div $lhs:ident, $rhs:ident, $out:ident) => {
        impl Div<Quantity<$rhs>> for Quantity<$lhs> {
            type Output = Quantity<$out>;

            fn div(self, rhs: Quantity<$rhs>) -> Quantity<$out> {
                Quantity::from_si(self.si_value() / rhs.si_value())
            }
        }
    };
}

products! {
    Length * Length = Area;
    Area * Length = Volume [commutes];
    Speed * Time = Length [commutes];
    Acceleration * Time = Speed [commutes];
    Mass * Acceleration = Force [commutes];
    Force * Length = Energy [commutes];
    Power * Time = Energy [commutes];
    Pressure * Area = Force [commutes];
    Voltage * Current = Power [commutes];
    Resistance * Current = Voltage [commutes];
    Current * Time = ElectricCharge [commutes];
    Density * Volume = Mass [commutes];
    Mass * Speed = Momentum [commutes];
    Stiffness * Length = Force [commutes];
    MassFlow * Time = Mass [commutes];
    VolumetricFlow * Time = Volume [commutes];
    SpecificEnergy * Mass = Energy [commutes];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declarations_are_dimensionally_consistent() {
        for (declaration, lhs, rhs, out) in DECLARED {
            assert_eq!(lhs.multiply(rhs), *out, "{}", declaration);
        }
    }

    #[test]
    fn test_area_and_volume() {
        let side = Quantity::<Length>::from_metres(3.0);
        let area: Quantity<Area> = side * side;
        assert_eq!(area.square_metres(), 9.0);
        let volume: Quantity<Volume> = area * side;
        assert_eq!(volume.cubic_metres(), 27.0);
        assert_eq!((side * area).cubic_metres(), 27.0);
        assert_eq!((volume / area).metres(), 3.0);
        assert_eq!((area / side).metres(), 3.0);
    }

    #[test]
    fn test_speed_time_distance() {
        let distance = Quantity::<Length>::from_kilometres(100.0);
        let time = Quantity::<Time>::from_hours(2.0);
        let speed: Quantity<Speed> = distance / time;
        assert!((speed.kilometres_per_hour() - 50.0).abs() < 1e-9);
        let back: Quantity<Length> = speed * time;
        assert!((back.kilometres() - 100.0).abs() < 1e-9);
        assert!(((distance / speed).hours() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_newton_and_ohm() {
        let force: Quantity<Force> = Quantity::<Mass>::from_kilograms(2.0) * Quantity::<Acceleration>::from_metres_per_second_squared(9.0);
        assert_eq!(force.newtons(), 18.0);

        let voltage: Quantity<Voltage> = Quantity::<Resistance>::from_kiloohms(2.0) * Quantity::<Current>::from_milliamperes(3.0);
        assert!((voltage.volts() - 6.0).abs() < 1e-12);
        let power: Quantity<Power> = voltage * Quantity::<Current>::from_amperes(0.5);
        assert!((power.watts() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_pressure_from_force_over_area() {
        let pressure: Quantity<Pressure> = Quantity::<Force>::from_newtons(10.0) / Quantity::<Area>::from_square_millimetres(2.0);
        assert!((pressure.newtons_per_square_millimetre() - 5.0).abs() < 1e-9);
    }
}
