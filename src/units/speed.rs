// ============================================================================
// Speed
// Velocity magnitude stored as an i64 count of nano metres per second
// ============================================================================

use crate::numeric::{Decimal, Prefix};
use crate::quantity::{Conversion, Ladder, Quantity, Resolution, Unit};

static BASE: Conversion = Conversion::scaled(Decimal::new(1, 9, false));
static KPH: Conversion = Conversion::scaled(Decimal::new(277_777_778, 0, false))
    .bounded("33204139306kph", "-33204139306kph");
static MPH: Conversion =
    Conversion::scaled(Decimal::new(44_704, 4, false)).bounded("20632095644mph", "-20632095644mph");
static FPS: Conversion =
    Conversion::scaled(Decimal::new(3_048, 5, false)).bounded("30260406945fps", "-30260406945fps");

/// Unit descriptor for speed. The highest representable value is 9.2Gm/s.
#[derive(Debug, Clone, Copy)]
pub enum MetrePerSecond {}

impl Unit for MetrePerSecond {
    const SYMBOL: &'static str = "m/s";
    const LADDER: Ladder = Ladder::Nano;
    const STORAGE_EXP: i32 = -9;
    const SUFFIXES: &'static [&'static str] = &["m/s", "mps", "kph", "fps", "mph"];
    const PREFIXABLE: &'static [&'static str] = &["m/s", "mps", "kph", "fps", "mph"];
    const UNIT_LIST: &'static str = "m/s, mps, kph, fps or mph";

    fn resolve(rest: &str, si: Prefix) -> Resolution {
        match rest {
            "mps" | "m/s" => Resolution::Convert(&BASE, si),
            // The 'm' of "mps"/"m/s" was eaten as milli.
            "ps" | "/s" => Resolution::Convert(&BASE, Prefix::Unit),
            // Leading 'k' or 'm' of "kph"/"mph" was eaten as a prefix.
            "ph" => match si {
                Prefix::Kilo => Resolution::Convert(&KPH, Prefix::Unit),
                Prefix::Milli => Resolution::Convert(&MPH, Prefix::Unit),
                _ => Resolution::Unknown,
            },
            "kph" => Resolution::Convert(&KPH, si),
            "mph" => Resolution::Convert(&MPH, si),
            "fps" => Resolution::Convert(&FPS, si),
            "" => Resolution::NoUnit,
            _ => Resolution::Unknown,
        }
    }
}

/// A measurement of the magnitude of velocity.
pub type Speed = Quantity<MetrePerSecond>;

impl Quantity<MetrePerSecond> {
    pub const NANO_METRE_PER_SECOND: Speed = Speed::from_raw(1);
    pub const MICRO_METRE_PER_SECOND: Speed = Speed::from_raw(1_000);
    pub const MILLI_METRE_PER_SECOND: Speed = Speed::from_raw(1_000_000);
    pub const METRE_PER_SECOND: Speed = Speed::from_raw(1_000_000_000);
    pub const KILO_METRE_PER_SECOND: Speed = Speed::from_raw(1_000_000_000_000);
    pub const MEGA_METRE_PER_SECOND: Speed = Speed::from_raw(1_000_000_000_000_000);
    pub const GIGA_METRE_PER_SECOND: Speed = Speed::from_raw(1_000_000_000_000_000_000);

    pub const LIGHT_SPEED: Speed = Speed::from_raw(299_792_458_000_000_000);

    pub const KILOMETRE_PER_HOUR: Speed = Speed::from_raw(277_777_778);
    pub const MILE_PER_HOUR: Speed = Speed::from_raw(447_040_000);
    pub const FOOT_PER_SECOND: Speed = Speed::from_raw(304_800_000);
}
