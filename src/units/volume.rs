// ============================================================================
// Volume
// Stored as an i64 count of nano litres
// ============================================================================

use crate::numeric::{Decimal, Prefix};
use crate::quantity::{Conversion, Ladder, Quantity, Resolution, Unit};

static BASE: Conversion = Conversion::scaled(Decimal::new(1, 9, false));

/// Unit descriptor for volume. The highest representable value is 9.2GL.
#[derive(Debug, Clone, Copy)]
pub enum Litre {}

impl Unit for Litre {
    const SYMBOL: &'static str = "L";
    const LADDER: Ladder = Ladder::Nano;
    const STORAGE_EXP: i32 = -9;
    const SUFFIXES: &'static [&'static str] = &["L"];
    const PREFIXABLE: &'static [&'static str] = &["L"];
    const UNIT_LIST: &'static str = "L";
    // Pico and tera litres are not accepted.
    const PREFIXES: &'static str = "n,u,µ,m,k,M, or G";

    fn resolve(rest: &str, si: Prefix) -> Resolution {
        match rest {
            "L" => Resolution::Convert(&BASE, si),
            "" => Resolution::NoUnit,
            _ => Resolution::Unknown,
        }
    }
}

/// A measurement of volume.
pub type Volume = Quantity<Litre>;

impl Quantity<Litre> {
    pub const NANO_LITRE: Volume = Volume::from_raw(1);
    pub const MICRO_LITRE: Volume = Volume::from_raw(1_000);
    pub const MILLI_LITRE: Volume = Volume::from_raw(1_000_000);
    pub const LITRE: Volume = Volume::from_raw(1_000_000_000);
    pub const KILO_LITRE: Volume = Volume::from_raw(1_000_000_000_000);
    pub const MEGA_LITRE: Volume = Volume::from_raw(1_000_000_000_000_000);
    pub const GIGA_LITRE: Volume = Volume::from_raw(1_000_000_000_000_000_000);

    pub const CUBIC_CENTIMETRE: Volume = Volume::MILLI_LITRE;
}
