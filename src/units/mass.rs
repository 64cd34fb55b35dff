// ============================================================================
// Mass
// Stored as an i64 count of nano grams
// ============================================================================

use crate::numeric::{Decimal, Prefix};
use crate::quantity::{Conversion, Ladder, Quantity, Resolution, Unit};

static BASE: Conversion = Conversion::scaled(Decimal::new(1, 9, false));
static POUND: Conversion =
    Conversion::scaled(Decimal::new(45_359_237, 4, false)).bounded("20334054lb", "-20334054lb");
static OUNCE: Conversion =
    Conversion::scaled(Decimal::new(28_349_523_125, 0, false)).bounded("325344874oz", "-325344874oz");

/// Unit descriptor for mass. The highest representable value is 9.2Gg.
#[derive(Debug, Clone, Copy)]
pub enum Gram {}

impl Unit for Gram {
    const SYMBOL: &'static str = "g";
    const LADDER: Ladder = Ladder::Nano;
    const STORAGE_EXP: i32 = -9;
    const SUFFIXES: &'static [&'static str] = &["g", "lb", "oz"];
    const PREFIXABLE: &'static [&'static str] = &["g", "lb", "oz"];
    const UNIT_LIST: &'static str = "g, lb or oz";

    fn resolve(rest: &str, si: Prefix) -> Resolution {
        match rest {
            "g" => Resolution::Convert(&BASE, si),
            "lb" => Resolution::Convert(&POUND, si),
            "oz" => Resolution::Convert(&OUNCE, si),
            "" => Resolution::NoUnit,
            _ => Resolution::Unknown,
        }
    }
}

/// A measurement of mass.
pub type Mass = Quantity<Gram>;

impl Quantity<Gram> {
    pub const NANO_GRAM: Mass = Mass::from_raw(1);
    pub const MICRO_GRAM: Mass = Mass::from_raw(1_000);
    pub const MILLI_GRAM: Mass = Mass::from_raw(1_000_000);
    pub const GRAM: Mass = Mass::from_raw(1_000_000_000);
    pub const KILO_GRAM: Mass = Mass::from_raw(1_000_000_000_000);
    pub const MEGA_GRAM: Mass = Mass::from_raw(1_000_000_000_000_000);
    pub const GIGA_GRAM: Mass = Mass::from_raw(1_000_000_000_000_000_000);
    pub const TONNE: Mass = Mass::MEGA_GRAM;

    // Conversion between gram and imperial units. Ounce and pound measure
    // mass here, not weight or volume.
    pub const OUNCE: Mass = Mass::from_raw(28_349_523_125);
    pub const POUND: Mass = Mass::from_raw(16 * 28_349_523_125);
    pub const SLUG: Mass = Mass::from_raw(14_593_903_000_000);
}
