//! Unit catalog - one tag type and one unit table per quantity kind
//!
//! Each kind is declared with `quantity_kind!`, which expands to:
//! - the tag type (`pub struct Length;`)
//! - the unit constants (`Unit::<Length>::METRES`)
//! - the `QuantityKind` impl with its registry and format cache statics
//! - named constructors and getters on `Quantity<Length>`
//!
//! The SI unit of each kind is listed first.

/// Declare a quantity kind and its units.
///
/// ```ignore
/// quantity_kind! {
///     pub struct Length {
///         name: "Length",
///         dimension: Dimension::LENGTH,
///         si: METRES,
///         units: {
///             METRES = Unit::si("m", "metre") => from_metres, metres;
///             KILOMETRES = Unit::linear("km", "kilometre", 1e3) => from_kilometres, kilometres;
///         }
///     }
/// }
/// ```
macro_rules! quantity_kind {
    (
        $(#[$meta:meta])*
        pub struct $kind:ident {
            name: $name:literal,
            dimension: $dimension:expr,
            si: $si:ident,
            units: {
                $( $unit:ident = $definition:expr => $ctor:ident, $getter:ident; )+
            }
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $kind;

        impl $crate::Unit<$kind> {
            $( pub const $unit: $crate::Unit<$kind> = $definition; )+
        }

        impl $crate::QuantityKind for $kind {
            const NAME: &'static str = $name;
            const DIMENSION: $crate::Dimension = $dimension;
            const UNITS: &'static [$crate::Unit<Self>] = &[$( $crate::Unit::<$kind>::$unit ),+];
            const CONSTRUCTORS: &'static [&'static str] = &[$( stringify!($ctor) ),+];
            const SI_UNIT: $crate::Unit<Self> = $crate::Unit::<$kind>::$si;

            fn registry() -> &'static $crate::UnitRegistry<Self> {
                static REGISTRY: std::sync::LazyLock<$crate::UnitRegistry<$kind>> =
                    std::sync::LazyLock::new($crate::UnitRegistry::build);
                &REGISTRY
            }

            fn format_cache() -> &'static $crate::FormatCache<Self> {
                static CACHE: std::sync::LazyLock<$crate::FormatCache<$kind>> =
                    std::sync::LazyLock::new($crate::FormatCache::new);
                &CACHE
            }
        }

        impl $crate::Quantity<$kind> {
            $(
                pub fn $ctor(value: f64) -> Self {
                    Self::from_value(value, $crate::Unit::<$kind>::$unit)
                }

                pub fn $getter(&self) -> f64 {
                    self.value_in($crate::Unit::<$kind>::$unit)
                }
            )+
        }
    };
}

/// Invoke `$callback!` with every kind in the catalog
macro_rules! all_kinds {
    ($callback:ident) => {
        $callback!(
            Length, Mass, Time, Current, Temperature, AmountOfSubstance, LuminousIntensity,
            Angle, SolidAngle, Unitless, Area, Volume, Wavenumber,
            Speed, Acceleration, Jerk, Frequency, AngularSpeed, AngularAcceleration,
            VolumetricFlow, KinematicViscosity,
            Force, Momentum, Pressure, Energy, Power, Torque, Stiffness, Density,
            AreaDensity, MassFlow, SpecificEnergy, SpecificVolume,
            ElectricCharge, Voltage, Resistance, Conductance, Capacitance,
            MagneticFlux, MagneticFluxDensity, Inductance,
            LuminousFlux, Illuminance, MolarMass, Molarity
        )
    };
}

mod base;
mod geometry;
mod kinematics;
mod mechanics;
mod electromagnetism;
mod photometry;

pub use base::*;
pub use geometry::*;
pub use kinematics::*;
pub use mechanics::*;
pub use electromagnetism::*;
pub use photometry::*;
