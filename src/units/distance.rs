// ============================================================================
// Distance
// Length stored as an i64 count of nano metres
// ============================================================================

use crate::numeric::{Decimal, Prefix};
use crate::quantity::{Conversion, Ladder, Quantity, Resolution, Unit};

static BASE: Conversion = Conversion::scaled(Decimal::new(1, 9, false));
// The imperial conversions accept at most nano precision of the source
// unit, which caps them well below the storage range.
static MILE: Conversion = Conversion::scaled(Decimal::new(1_609_344, 6, false))
    .clamped(5_731_137_678_988)
    .bounded("5731Mile", "-5731Mile");
static YARD: Conversion = Conversion::scaled(Decimal::new(9_144, 5, false))
    .clamped(1_008_680_231_502_051)
    .bounded("1 Million Yard", "-1 Million Yard");
static FOOT: Conversion = Conversion::scaled(Decimal::new(3_048, 5, false))
    .clamped(3_026_040_694_506_158)
    .bounded("3 Million ft", "-3 Million ft");
static INCH: Conversion = Conversion::scaled(Decimal::new(254, 5, false))
    .clamped(36_312_488_334_073_900)
    .bounded("36 Million inch", "-36 Million inch");

/// Unit descriptor for length. The highest representable value is 9.2Gm.
#[derive(Debug, Clone, Copy)]
pub enum Metre {}

impl Unit for Metre {
    const SYMBOL: &'static str = "m";
    const LADDER: Ladder = Ladder::Nano;
    const STORAGE_EXP: i32 = -9;
    const SUFFIXES: &'static [&'static str] = &["m", "Mile", "mile", "in", "ft", "Yard", "yard"];
    const PREFIXABLE: &'static [&'static str] = &["m", "Mile", "mile", "in", "ft", "Yard", "yard"];
    const UNIT_LIST: &'static str = "m, Mile, in, ft or Yard";

    fn resolve(rest: &str, si: Prefix) -> Resolution {
        match rest {
            "m" => Resolution::Convert(&BASE, si),
            // A bare 'm' was eaten as milli; it was the metre itself.
            "" if si == Prefix::Milli => Resolution::Convert(&BASE, Prefix::Unit),
            "Mile" | "mile" => Resolution::Convert(&MILE, si),
            // "Mile"/"mile" with the leading letter consumed as mega/milli.
            "ile" => Resolution::Convert(&MILE, Prefix::Unit),
            "Yard" | "yard" => Resolution::Convert(&YARD, si),
            "ft" => Resolution::Convert(&FOOT, si),
            "in" => Resolution::Convert(&INCH, si),
            "" => Resolution::NoUnit,
            _ => Resolution::Unknown,
        }
    }
}

/// A measurement of length.
pub type Distance = Quantity<Metre>;

impl Quantity<Metre> {
    pub const NANO_METRE: Distance = Distance::from_raw(1);
    pub const MICRO_METRE: Distance = Distance::from_raw(1_000);
    pub const MILLI_METRE: Distance = Distance::from_raw(1_000_000);
    pub const METRE: Distance = Distance::from_raw(1_000_000_000);
    pub const KILO_METRE: Distance = Distance::from_raw(1_000_000_000_000);
    pub const MEGA_METRE: Distance = Distance::from_raw(1_000_000_000_000_000);
    pub const GIGA_METRE: Distance = Distance::from_raw(1_000_000_000_000_000_000);

    // Conversion between metre and imperial units.
    pub const THOU: Distance = Distance::from_raw(25_400);
    pub const INCH: Distance = Distance::from_raw(25_400_000);
    pub const FOOT: Distance = Distance::from_raw(304_800_000);
    pub const YARD: Distance = Distance::from_raw(914_400_000);
    pub const MILE: Distance = Distance::from_raw(1_609_344_000_000);
}
