// ============================================================================
// Pressure
// Force per unit area stored as an i64 count of nano pascals
// ============================================================================

use crate::numeric::{Decimal, Prefix};
use crate::quantity::{Conversion, Ladder, Quantity, Resolution, Unit};

static BASE: Conversion = Conversion::scaled(Decimal::new(1, 9, false));

/// Unit descriptor for pressure, force applied to a surface per unit
/// area. The highest representable value is 9.2GPa.
#[derive(Debug, Clone, Copy)]
pub enum Pascal {}

impl Unit for Pascal {
    const SYMBOL: &'static str = "Pa";
    const LADDER: Ladder = Ladder::Nano;
    const STORAGE_EXP: i32 = -9;
    const SUFFIXES: &'static [&'static str] = &["Pa"];
    const PREFIXABLE: &'static [&'static str] = &["Pa"];
    const UNIT_LIST: &'static str = "Pa";

    fn resolve(rest: &str, si: Prefix) -> Resolution {
        match rest {
            "Pa" => Resolution::Convert(&BASE, si),
            "" => Resolution::NoUnit,
            _ => Resolution::Unknown,
        }
    }
}

/// A measurement of stress.
pub type Pressure = Quantity<Pascal>;

impl Quantity<Pascal> {
    // Pascal is N/m², kg/m/s².
    pub const NANO_PASCAL: Pressure = Pressure::from_raw(1);
    pub const MICRO_PASCAL: Pressure = Pressure::from_raw(1_000);
    pub const MILLI_PASCAL: Pressure = Pressure::from_raw(1_000_000);
    pub const PASCAL: Pressure = Pressure::from_raw(1_000_000_000);
    pub const KILO_PASCAL: Pressure = Pressure::from_raw(1_000_000_000_000);
    pub const MEGA_PASCAL: Pressure = Pressure::from_raw(1_000_000_000_000_000);
    pub const GIGA_PASCAL: Pressure = Pressure::from_raw(1_000_000_000_000_000_000);

    pub const MILLI_BAR: Pressure = Pressure::from_raw(100 * 1_000_000_000);
    pub const BAR: Pressure = Pressure::from_raw(100_000 * 1_000_000_000);

    /// The pressure as a floating point number of pascals.
    pub fn pascal(self) -> f64 {
        self.raw() as f64 / Self::PASCAL.raw() as f64
    }

    /// The pressure as a floating point number of kilopascals.
    pub fn kilo_pascal(self) -> f64 {
        self.raw() as f64 / Self::KILO_PASCAL.raw() as f64
    }

    /// The pressure as a floating point number of millibar.
    pub fn milli_bar(self) -> f64 {
        self.raw() as f64 / Self::MILLI_BAR.raw() as f64
    }

    /// The pressure as a floating point number of bar.
    pub fn bar(self) -> f64 {
        self.raw() as f64 / Self::BAR.raw() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string() {
        let cases: &[(Pressure, &str)] = &[
            (Pressure::NANO_PASCAL, "1nPa"),
            (Pressure::MICRO_PASCAL, "1µPa"),
            (Pressure::MILLI_PASCAL, "1mPa"),
            (Pressure::PASCAL, "1Pa"),
            (Pressure::KILO_PASCAL, "1kPa"),
            (Pressure::MEGA_PASCAL, "1MPa"),
            (Pressure::GIGA_PASCAL, "1GPa"),
            (Pressure::MILLI_BAR, "100Pa"),
            (Pressure::BAR, "100kPa"),
        ];
        for (i, (input, expected)) in cases.iter().enumerate() {
            assert_eq!(input.to_string(), *expected, "#{}: Pressure({})", i, input.raw());
        }
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Pressure::PASCAL.pascal(), 1.);
        assert_eq!(Pressure::PASCAL.kilo_pascal(), 0.001);
        assert_eq!(Pressure::BAR.bar(), 1.);
        assert_eq!(Pressure::BAR.milli_bar(), 1000.);
        assert_eq!((Pressure::KILO_PASCAL * 101 + Pressure::PASCAL * 325).milli_bar(), 1013.25);
    }

    #[test]
    fn test_set_succeeds() {
        let cases: &[(&str, Pressure)] = &[
            ("1nPa", Pressure::NANO_PASCAL),
            ("10nPa", Pressure::NANO_PASCAL * 10),
            ("100nPa", Pressure::NANO_PASCAL * 100),
            ("1uPa", Pressure::MICRO_PASCAL),
            ("10uPa", Pressure::MICRO_PASCAL * 10),
            ("100uPa", Pressure::MICRO_PASCAL * 100),
            ("1µPa", Pressure::MICRO_PASCAL),
            ("1mPa", Pressure::MILLI_PASCAL),
            ("1Pa", Pressure::PASCAL),
            ("10Pa", Pressure::PASCAL * 10),
            ("100Pa", Pressure::PASCAL * 100),
            ("1kPa", Pressure::KILO_PASCAL),
            ("1MPa", Pressure::MEGA_PASCAL),
            ("1GPa", Pressure::GIGA_PASCAL),
            ("12.345Pa", Pressure::MILLI_PASCAL * 12345),
            ("-12.345Pa", Pressure::MILLI_PASCAL * -12345),
            ("9.223372036854775807GPa", Pressure::MAX),
            ("-9.223372036854775807GPa", Pressure::MIN),
        ];
        for (i, (input, expected)) in cases.iter().enumerate() {
            let got: Pressure = input.parse().unwrap_or_else(|e| {
                panic!("#{}: Pressure parse({:?}) unexpected error: {}", i, input, e)
            });
            assert_eq!(got, *expected, "#{}: Pressure parse({:?})", i, input);
        }
    }

    #[test]
    fn test_set_fails() {
        let cases: &[(&str, &str)] = &[
            ("10TPa", "maximum value is 9.223GPa"),
            (
                "10EPa",
                "unknown unit prefix; valid prefixes for \"Pa\" are p,n,u,µ,m,k,M,G or T",
            ),
            (
                "10ExaPa",
                "unknown unit prefix; valid prefixes for \"Pa\" are p,n,u,µ,m,k,M,G or T",
            ),
            ("10ePascalE", "unknown unit provided; need Pa"),
            ("10", "no unit provided; need Pa"),
            ("9223372036854775808", "maximum value is 9.223GPa"),
            ("-9223372036854775808", "minimum value is -9.223GPa"),
            ("9.223372036854775808GPa", "maximum value is 9.223GPa"),
            ("-9.223372036854775808GPa", "minimum value is -9.223GPa"),
            ("1random", "unknown unit provided; need Pa"),
            ("Pa", "not a number"),
            ("RPM", "does not contain number or unit Pa"),
            ("++1Pa", "contains multiple plus symbols"),
            ("--1Pa", "contains multiple minus symbols"),
            ("+-1Pa", "contains both plus and minus symbols"),
            ("1.1.1.1Pa", "contains multiple decimal points"),
        ];
        for (i, (input, expected)) in cases.iter().enumerate() {
            let err = input
                .parse::<Pressure>()
                .expect_err(&format!("#{}: Pressure parse({:?}) should fail", i, input));
            assert_eq!(err.to_string(), *expected, "#{}: Pressure parse({:?})", i, input);
        }
    }

    #[test]
    fn test_round_trip() {
        let x = Pressure::KILO_PASCAL * 101;
        let y: Pressure = x.to_string().parse().unwrap();
        assert_eq!(x, y);
    }
}
