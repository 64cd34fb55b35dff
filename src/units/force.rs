// ============================================================================
// Force
// Stored as an i64 count of nano newtons
// ============================================================================

use crate::numeric::{Decimal, Prefix};
use crate::quantity::{Conversion, Ladder, Quantity, Resolution, Unit};

static BASE: Conversion = Conversion::scaled(Decimal::new(1, 9, false));
// 4.448221615261 N per pound-force, expressed in nano newtons.
static POUND_FORCE: Conversion = Conversion::scaled(Decimal::new(4_448_221_615_261, -3, false))
    .bounded("2.073496519Glbf", "-2.073496519Glbf")
    .precision_hint("converting to nano Newtons would overflow, consider using nN for maximum precision");

/// Unit descriptor for force magnitude. The highest representable value
/// is 9.2GN.
///
/// A force is a vector; this only carries the magnitude. Orientation has
/// to be stored separately.
#[derive(Debug, Clone, Copy)]
pub enum Newton {}

impl Unit for Newton {
    const SYMBOL: &'static str = "N";
    const LADDER: Ladder = Ladder::Nano;
    const STORAGE_EXP: i32 = -9;
    const SUFFIXES: &'static [&'static str] = &["N", "lbf"];
    const PREFIXABLE: &'static [&'static str] = &["N", "lbf"];
    const UNIT_LIST: &'static str = "N or lbf";

    fn resolve(rest: &str, si: Prefix) -> Resolution {
        match rest {
            "N" => Resolution::Convert(&BASE, si),
            "lbf" => Resolution::Convert(&POUND_FORCE, si),
            "" => Resolution::NoUnit,
            _ => Resolution::Unknown,
        }
    }
}

/// A measurement of force.
pub type Force = Quantity<Newton>;

impl Quantity<Newton> {
    pub const NANO_NEWTON: Force = Force::from_raw(1);
    pub const MICRO_NEWTON: Force = Force::from_raw(1_000);
    pub const MILLI_NEWTON: Force = Force::from_raw(1_000_000);
    pub const NEWTON: Force = Force::from_raw(1_000_000_000);
    pub const KILO_NEWTON: Force = Force::from_raw(1_000_000_000_000);
    pub const MEGA_NEWTON: Force = Force::from_raw(1_000_000_000_000_000);
    pub const GIGA_NEWTON: Force = Force::from_raw(1_000_000_000_000_000_000);

    pub const EARTH_GRAVITY: Force = Force::from_raw(9_806_650_000);

    // Pound is both a unit of mass and of weight; this is the force one.
    pub const POUND_FORCE: Force = Force::from_raw(4_448_221_615);
}
