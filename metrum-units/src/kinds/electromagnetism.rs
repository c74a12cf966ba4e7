//! Electric and magnetic quantities

use crate::{Dimension, Unit};

quantity_kind! {
    pub struct ElectricCharge {
        name: "ElectricCharge",
        dimension: Dimension::CHARGE,
        si: COULOMBS,
        units: {
            COULOMBS = Unit::si("C", "coulomb") => from_coulombs, coulombs;
            MILLICOULOMBS = Unit::linear("mC", "millicoulomb", 1e-3) => from_millicoulombs, millicoulombs;
            MICROCOULOMBS = Unit::linear("µC", "microcoulomb", 1e-6).with_aliases(&["uC", "μC"]) => from_microcoulombs, microcoulombs;
            AMPERE_HOURS = Unit::linear("Ah", "ampere hour", 3.6e3) => from_ampere_hours, ampere_hours;
            MILLIAMPERE_HOURS = Unit::linear("mAh", "milliampere hour", 3.6) => from_milliampere_hours, milliampere_hours;
        }
    }
}

quantity_kind! {
    pub struct Voltage {
        name: "Voltage",
        dimension: Dimension::VOLTAGE,
        si: VOLTS,
        units: {
            VOLTS = Unit::si("V", "volt").with_aliases(&["volts"]) => from_volts, volts;
            MICROVOLTS = Unit::linear("µV", "microvolt", 1e-6).with_aliases(&["uV", "μV"]) => from_microvolts, microvolts;
            MILLIVOLTS = Unit::linear("mV", "millivolt", 1e-3) => from_millivolts, millivolts;
            KILOVOLTS = Unit::linear("kV", "kilovolt", 1e3) => from_kilovolts, kilovolts;
            MEGAVOLTS = Unit::linear("MV", "megavolt", 1e6) => from_megavolts, megavolts;
        }
    }
}

quantity_kind! {
    pub struct Resistance {
        name: "Resistance",
        dimension: Dimension::RESISTANCE,
        si: OHMS,
        units: {
            OHMS = Unit::si("Ω", "ohm").with_aliases(&["Ω", "ohms"]) => from_ohms, ohms;
            MILLIOHMS = Unit::linear("mΩ", "milliohm", 1e-3).with_aliases(&["mohm"]) => from_milliohms, milliohms;
            KILOOHMS = Unit::linear("kΩ", "kiloohm", 1e3).with_aliases(&["kohm"]) => from_kiloohms, kiloohms;
            MEGAOHMS = Unit::linear("MΩ", "megaohm", 1e6).with_aliases(&["Mohm"]) => from_megaohms, megaohms;
        }
    }
}

quantity_kind! {
    pub struct Conductance {
        name: "Conductance",
        dimension: Dimension::CONDUCTANCE,
        si: SIEMENS,
        units: {
            SIEMENS = Unit::si("S", "siemens").with_aliases(&["mho"]) => from_siemens, siemens;
            MILLISIEMENS = Unit::linear("mS", "millisiemens", 1e-3) => from_millisiemens, millisiemens;
            MICROSIEMENS = Unit::linear("µS", "microsiemens", 1e-6).with_aliases(&["uS", "μS"]) => from_microsiemens, microsiemens;
        }
    }
}

quantity_kind! {
    pub struct Capacitance {
        name: "Capacitance",
        dimension: Dimension::CAPACITANCE,
        si: FARADS,
        units: {
            FARADS = Unit::si("F", "farad") => from_farads, farads;
            MILLIFARADS = Unit::linear("mF", "millifarad", 1e-3) => from_millifarads, millifarads;
            MICROFARADS = Unit::linear("µF", "microfarad", 1e-6).with_aliases(&["uF", "μF"]) => from_microfarads, microfarads;
            NANOFARADS = Unit::linear("nF", "nanofarad", 1e-9) => from_nanofarads, nanofarads;
            PICOFARADS = Unit::linear("pF", "picofarad", 1e-12) => from_picofarads, picofarads;
        }
    }
}

quantity_kind! {
    pub struct MagneticFlux {
        name: "MagneticFlux",
        dimension: Dimension::MAGNETIC_FLUX,
        si: WEBERS,
        units: {
            WEBERS = Unit::si("Wb", "weber") => from_webers, webers;
            MILLIWEBERS = Unit::linear("mWb", "milliweber", 1e-3) => from_milliwebers, milliwebers;
            MAXWELLS = Unit::linear("Mx", "maxwell", 1e-8) => from_maxwells, maxwells;
        }
    }
}

quantity_kind! {
    pub struct MagneticFluxDensity {
        name: "MagneticFluxDensity",
        dimension: Dimension::MAGNETIC_FLUX_DENSITY,
        si: TESLAS,
        units: {
            TESLAS = Unit::si("T", "tesla") => from_teslas, teslas;
            MILLITESLAS = Unit::linear("mT", "millitesla", 1e-3) => from_milliteslas, milliteslas;
            MICROTESLAS = Unit::linear("µT", "microtesla", 1e-6).with_aliases(&["uT", "μT"]) => from_microteslas, microteslas;
            GAUSS = Unit::linear("G", "gauss", 1e-4) => from_gauss, gauss;
        }
    }
}

quantity_kind! {
    pub struct Inductance {
        name: "Inductance",
        dimension: Dimension::INDUCTANCE,
        si: HENRIES,
        units: {
            HENRIES = Unit::si("H", "henry") => from_henries, henries;
            MILLIHENRIES = Unit::linear("mH", "millihenry", 1e-3) => from_millihenries, millihenries;
            MICROHENRIES = Unit::linear("µH", "microhenry", 1e-6).with_aliases(&["uH", "μH"]) => from_microhenries, microhenries;
            NANOHENRIES = Unit::linear("nH", "nanohenry", 1e-9) => from_nanohenries, nanohenries;
        }
    }
}
