// ============================================================================
// Angle
// Orientation difference stored as an i64 count of nano radians
// ============================================================================

use crate::numeric::{Decimal, Prefix};
use crate::quantity::{Conversion, Ladder, Quantity, Resolution, Unit};

const DEGREE: i64 = 17_453_293;

static RADIAN: Conversion =
    Conversion::scaled(Decimal::new(1, 9, false)).bounded("9.223GRad", "-9.223GRad");
static DEG: Conversion = Conversion::scaled(Decimal::new(DEGREE as u64, 0, false))
    .bounded("528460276055°", "-528460276055°");

/// Unit descriptor for plane angle. The highest representable value is a
/// bit over 9.223GRad or 500,000,000,000°.
///
/// A negative angle is valid.
#[derive(Debug, Clone, Copy)]
pub enum Radian {}

impl Unit for Radian {
    const SYMBOL: &'static str = "Rad";
    const LADDER: Ladder = Ladder::Nano;
    const STORAGE_EXP: i32 = -9;
    const SUFFIXES: &'static [&'static str] = &["rad", "Rad", "deg", "Deg", "°"];
    const PREFIXABLE: &'static [&'static str] = &["rad", "Rad", "deg", "Deg", "°"];
    const UNIT_LIST: &'static str = "Rad, Deg or °";

    fn resolve(rest: &str, si: Prefix) -> Resolution {
        match rest {
            "rad" | "Rad" => Resolution::Convert(&RADIAN, si),
            "deg" | "Deg" | "°" => Resolution::Convert(&DEG, si),
            "" => Resolution::NoUnit,
            _ => Resolution::Unknown,
        }
    }

    // An angle is not an SI unit; it renders in degrees without prefixes.
    fn format(raw: i64) -> String {
        if raw == 0 {
            return "0°".to_string();
        }
        let mut a = raw;
        let mut sign = "";
        if a < 0 {
            if a == i64::MIN {
                a += 1;
            }
            sign = "-";
            a = -a;
        }
        if a < DEGREE {
            let v = (a * 1000 + DEGREE / 2) / DEGREE;
            format!("{}0.{:03}°", sign, v)
        } else if a < 10 * DEGREE {
            let v = (a * 1000 + DEGREE / 2) / DEGREE;
            format!("{}{}.{:03}°", sign, v / 1000, v % 1000)
        } else if a < 100 * DEGREE {
            let v = (a * 1000 + DEGREE / 2) / DEGREE;
            format!("{}{}.{:02}°", sign, v / 1000, v % 1000)
        } else if a < 1000 * DEGREE {
            let v = (a * 1000 + DEGREE / 2) / DEGREE;
            format!("{}{}.{:01}°", sign, v / 1000, v % 1000)
        } else if a > i64::MAX - DEGREE {
            let v = (a as u64 + DEGREE as u64 / 2) / DEGREE as u64;
            format!("{}{}°", sign, v)
        } else {
            let v = (a + DEGREE / 2) / DEGREE;
            format!("{}{}°", sign, v)
        }
    }
}

/// A measurement of the difference in orientation between two vectors.
pub type Angle = Quantity<Radian>;

impl Quantity<Radian> {
    pub const NANO_RADIAN: Angle = Angle::from_raw(1);
    pub const MICRO_RADIAN: Angle = Angle::from_raw(1_000);
    pub const MILLI_RADIAN: Angle = Angle::from_raw(1_000_000);
    pub const RADIAN: Angle = Angle::from_raw(1_000_000_000);

    /// Theta is 2π, equivalent to 360°.
    pub const THETA: Angle = Angle::from_raw(6_283_185_307);
    pub const PI: Angle = Angle::from_raw(3_141_592_653);
    pub const DEGREE: Angle = Angle::from_raw(DEGREE);
}
