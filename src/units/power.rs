// ============================================================================
// Power
// Rate of work stored as an i64 count of nano watts
// ============================================================================

use crate::numeric::{Decimal, Prefix};
use crate::quantity::{Conversion, Ladder, Quantity, Resolution, Unit};

static BASE: Conversion = Conversion::scaled(Decimal::new(1, 9, false));

/// Unit descriptor for power. The highest representable value is 9.2GW.
#[derive(Debug, Clone, Copy)]
pub enum Watt {}

impl Unit for Watt {
    const SYMBOL: &'static str = "W";
    const LADDER: Ladder = Ladder::Nano;
    const STORAGE_EXP: i32 = -9;
    const SUFFIXES: &'static [&'static str] = &["W", "w"];
    const PREFIXABLE: &'static [&'static str] = &["W", "w"];
    const UNIT_LIST: &'static str = "W";

    fn resolve(rest: &str, si: Prefix) -> Resolution {
        match rest {
            "W" | "w" => Resolution::Convert(&BASE, si),
            "" => Resolution::NoUnit,
            _ => Resolution::Unknown,
        }
    }
}

/// A measurement of the rate at which work is done.
pub type Power = Quantity<Watt>;

impl Quantity<Watt> {
    // Watt is a unit of power J/s, kg⋅m²⋅s⁻³.
    pub const NANO_WATT: Power = Power::from_raw(1);
    pub const MICRO_WATT: Power = Power::from_raw(1_000);
    pub const MILLI_WATT: Power = Power::from_raw(1_000_000);
    pub const WATT: Power = Power::from_raw(1_000_000_000);
    pub const KILO_WATT: Power = Power::from_raw(1_000_000_000_000);
    pub const MEGA_WATT: Power = Power::from_raw(1_000_000_000_000_000);
    pub const GIGA_WATT: Power = Power::from_raw(1_000_000_000_000_000_000);
}
