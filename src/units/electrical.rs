// ============================================================================
// Electrical units
// Current, potential, resistance, capacitance and magnetic flux density
// ============================================================================

use crate::numeric::{Decimal, Prefix};
use crate::quantity::{Conversion, Ladder, Quantity, Resolution, Unit};

static NANO_BASE: Conversion = Conversion::scaled(Decimal::new(1, 9, false));
static PICO_BASE: Conversion = Conversion::scaled(Decimal::new(1, 12, false));

/// Unit descriptor for a flow of electric charge.
///
/// This is one of the base units in the International System of Units.
/// The highest representable value is 9.2GA.
#[derive(Debug, Clone, Copy)]
pub enum Ampere {}

impl Unit for Ampere {
    const SYMBOL: &'static str = "A";
    const LADDER: Ladder = Ladder::Nano;
    const STORAGE_EXP: i32 = -9;
    const SUFFIXES: &'static [&'static str] = &["A", "a"];
    // A trailing lowercase 'a' after an SI prefix is not recognized.
    const PREFIXABLE: &'static [&'static str] = &["A"];
    const UNIT_LIST: &'static str = "A";

    fn resolve(rest: &str, si: Prefix) -> Resolution {
        match rest {
            "A" | "a" => Resolution::Convert(&NANO_BASE, si),
            "" => Resolution::NoUnit,
            _ => Resolution::Unknown,
        }
    }
}

/// A measurement of the flow of electric charge.
pub type ElectricCurrent = Quantity<Ampere>;

impl Quantity<Ampere> {
    pub const NANO_AMPERE: ElectricCurrent = ElectricCurrent::from_raw(1);
    pub const MICRO_AMPERE: ElectricCurrent = ElectricCurrent::from_raw(1_000);
    pub const MILLI_AMPERE: ElectricCurrent = ElectricCurrent::from_raw(1_000_000);
    pub const AMPERE: ElectricCurrent = ElectricCurrent::from_raw(1_000_000_000);
    pub const KILO_AMPERE: ElectricCurrent = ElectricCurrent::from_raw(1_000_000_000_000);
    pub const MEGA_AMPERE: ElectricCurrent = ElectricCurrent::from_raw(1_000_000_000_000_000);
    pub const GIGA_AMPERE: ElectricCurrent = ElectricCurrent::from_raw(1_000_000_000_000_000_000);
}

/// Unit descriptor for electric potential. The highest representable
/// value is 9.2GV.
#[derive(Debug, Clone, Copy)]
pub enum Volt {}

impl Unit for Volt {
    const SYMBOL: &'static str = "V";
    const LADDER: Ladder = Ladder::Nano;
    const STORAGE_EXP: i32 = -9;
    const SUFFIXES: &'static [&'static str] = &["V", "v"];
    const PREFIXABLE: &'static [&'static str] = &["V", "v"];
    const UNIT_LIST: &'static str = "V";

    fn resolve(rest: &str, si: Prefix) -> Resolution {
        match rest {
            "V" | "v" => Resolution::Convert(&NANO_BASE, si),
            "" => Resolution::NoUnit,
            _ => Resolution::Unknown,
        }
    }
}

/// A measurement of electric potential.
pub type ElectricPotential = Quantity<Volt>;

impl Quantity<Volt> {
    // Volt is W/A, kg⋅m²/s³/A.
    pub const NANO_VOLT: ElectricPotential = ElectricPotential::from_raw(1);
    pub const MICRO_VOLT: ElectricPotential = ElectricPotential::from_raw(1_000);
    pub const MILLI_VOLT: ElectricPotential = ElectricPotential::from_raw(1_000_000);
    pub const VOLT: ElectricPotential = ElectricPotential::from_raw(1_000_000_000);
    pub const KILO_VOLT: ElectricPotential = ElectricPotential::from_raw(1_000_000_000_000);
    pub const MEGA_VOLT: ElectricPotential = ElectricPotential::from_raw(1_000_000_000_000_000);
    pub const GIGA_VOLT: ElectricPotential = ElectricPotential::from_raw(1_000_000_000_000_000_000);
}

/// Unit descriptor for electric resistance. The highest representable
/// value is 9.2GΩ.
#[derive(Debug, Clone, Copy)]
pub enum Ohm {}

impl Unit for Ohm {
    const SYMBOL: &'static str = "Ω";
    const LADDER: Ladder = Ladder::Nano;
    const STORAGE_EXP: i32 = -9;
    const SUFFIXES: &'static [&'static str] = &["Ohm", "ohm", "Ω"];
    const PREFIXABLE: &'static [&'static str] = &["Ohm", "ohm", "Ω"];
    const UNIT_LIST: &'static str = "Ohm or Ω";

    fn resolve(rest: &str, si: Prefix) -> Resolution {
        match rest {
            "Ohm" | "ohm" | "Ω" => Resolution::Convert(&NANO_BASE, si),
            "" => Resolution::NoUnit,
            _ => Resolution::Unknown,
        }
    }
}

/// A measurement of opposition to the flow of electric current.
pub type ElectricResistance = Quantity<Ohm>;

impl Quantity<Ohm> {
    // Ohm is V/A, kg⋅m²/s³/A².
    pub const NANO_OHM: ElectricResistance = ElectricResistance::from_raw(1);
    pub const MICRO_OHM: ElectricResistance = ElectricResistance::from_raw(1_000);
    pub const MILLI_OHM: ElectricResistance = ElectricResistance::from_raw(1_000_000);
    pub const OHM: ElectricResistance = ElectricResistance::from_raw(1_000_000_000);
    pub const KILO_OHM: ElectricResistance = ElectricResistance::from_raw(1_000_000_000_000);
    pub const MEGA_OHM: ElectricResistance = ElectricResistance::from_raw(1_000_000_000_000_000);
    pub const GIGA_OHM: ElectricResistance = ElectricResistance::from_raw(1_000_000_000_000_000_000);
}

/// Unit descriptor for electrical capacitance. Stored with pico farad
/// granularity, so the highest representable value is 9.2MF.
#[derive(Debug, Clone, Copy)]
pub enum Farad {}

impl Unit for Farad {
    const SYMBOL: &'static str = "F";
    const LADDER: Ladder = Ladder::Pico;
    const STORAGE_EXP: i32 = -12;
    const SUFFIXES: &'static [&'static str] = &["F", "f"];
    const PREFIXABLE: &'static [&'static str] = &["F", "f"];
    const UNIT_LIST: &'static str = "F";

    fn resolve(rest: &str, si: Prefix) -> Resolution {
        match rest {
            "F" | "f" => Resolution::Convert(&PICO_BASE, si),
            "" => Resolution::NoUnit,
            _ => Resolution::Unknown,
        }
    }
}

/// A measurement of the capacity to store an electric charge.
pub type ElectricalCapacitance = Quantity<Farad>;

impl Quantity<Farad> {
    // Farad is a unit of capacitance, kg⁻¹⋅m⁻²⋅s⁴A².
    pub const PICO_FARAD: ElectricalCapacitance = ElectricalCapacitance::from_raw(1);
    pub const NANO_FARAD: ElectricalCapacitance = ElectricalCapacitance::from_raw(1_000);
    pub const MICRO_FARAD: ElectricalCapacitance = ElectricalCapacitance::from_raw(1_000_000);
    pub const MILLI_FARAD: ElectricalCapacitance = ElectricalCapacitance::from_raw(1_000_000_000);
    pub const FARAD: ElectricalCapacitance = ElectricalCapacitance::from_raw(1_000_000_000_000);
    pub const KILO_FARAD: ElectricalCapacitance =
        ElectricalCapacitance::from_raw(1_000_000_000_000_000);
    pub const MEGA_FARAD: ElectricalCapacitance =
        ElectricalCapacitance::from_raw(1_000_000_000_000_000_000);
}

/// Unit descriptor for magnetic flux density. The highest representable
/// value is 9.2GT.
#[derive(Debug, Clone, Copy)]
pub enum Tesla {}

impl Unit for Tesla {
    const SYMBOL: &'static str = "T";
    const LADDER: Ladder = Ladder::Nano;
    const STORAGE_EXP: i32 = -9;
    const SUFFIXES: &'static [&'static str] = &["T", "t"];
    const PREFIXABLE: &'static [&'static str] = &["T", "t"];
    const UNIT_LIST: &'static str = "T";

    fn resolve(rest: &str, si: Prefix) -> Resolution {
        match rest {
            "T" | "t" => Resolution::Convert(&NANO_BASE, si),
            "" => Resolution::NoUnit,
            _ => Resolution::Unknown,
        }
    }
}

/// A measurement of the strength of a magnetic field.
pub type MagneticFluxDensity = Quantity<Tesla>;

impl Quantity<Tesla> {
    // Tesla is a unit of magnetic flux density, kg/s²/A.
    pub const NANO_TESLA: MagneticFluxDensity = MagneticFluxDensity::from_raw(1);
    pub const MICRO_TESLA: MagneticFluxDensity = MagneticFluxDensity::from_raw(1_000);
    pub const MILLI_TESLA: MagneticFluxDensity = MagneticFluxDensity::from_raw(1_000_000);
    pub const TESLA: MagneticFluxDensity = MagneticFluxDensity::from_raw(1_000_000_000);
    pub const KILO_TESLA: MagneticFluxDensity = MagneticFluxDensity::from_raw(1_000_000_000_000);
    pub const MEGA_TESLA: MagneticFluxDensity =
        MagneticFluxDensity::from_raw(1_000_000_000_000_000);
    pub const GIGA_TESLA: MagneticFluxDensity =
        MagneticFluxDensity::from_raw(1_000_000_000_000_000_000);
}
