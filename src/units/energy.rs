// ============================================================================
// Energy
// Work stored as an i64 count of nano joules
// ============================================================================

use crate::numeric::{Decimal, Prefix};
use crate::quantity::{Conversion, Ladder, Quantity, Resolution, Unit};

static BASE: Conversion = Conversion::scaled(Decimal::new(1, 9, false));

/// Unit descriptor for work. The highest representable value is 9.2GJ.
#[derive(Debug, Clone, Copy)]
pub enum Joule {}

impl Unit for Joule {
    const SYMBOL: &'static str = "J";
    const LADDER: Ladder = Ladder::Nano;
    const STORAGE_EXP: i32 = -9;
    const SUFFIXES: &'static [&'static str] = &["J", "j"];
    const PREFIXABLE: &'static [&'static str] = &["J", "j"];
    const UNIT_LIST: &'static str = "J";

    fn resolve(rest: &str, si: Prefix) -> Resolution {
        match rest {
            "J" | "j" => Resolution::Convert(&BASE, si),
            "" => Resolution::NoUnit,
            _ => Resolution::Unknown,
        }
    }
}

/// A measurement of work.
pub type Energy = Quantity<Joule>;

impl Quantity<Joule> {
    // Joule is a unit of work, kg⋅m²⋅s⁻².
    pub const NANO_JOULE: Energy = Energy::from_raw(1);
    pub const MICRO_JOULE: Energy = Energy::from_raw(1_000);
    pub const MILLI_JOULE: Energy = Energy::from_raw(1_000_000);
    pub const JOULE: Energy = Energy::from_raw(1_000_000_000);
    pub const KILO_JOULE: Energy = Energy::from_raw(1_000_000_000_000);
    pub const MEGA_JOULE: Energy = Energy::from_raw(1_000_000_000_000_000);
    pub const GIGA_JOULE: Energy = Energy::from_raw(1_000_000_000_000_000_000);

    // BTU (British thermal unit) is the heat required to raise the
    // temperature of one pound of water by one degree Fahrenheit. This is
    // the ISO value.
    pub const BTU: Energy = Energy::from_raw(1_055_060_000_000);

    pub const WATT_SECOND: Energy = Energy::JOULE;
    pub const WATT_HOUR: Energy = Energy::from_raw(3_600_000_000_000);
    pub const KILO_WATT_HOUR: Energy = Energy::from_raw(3_600_000_000_000_000);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string() {
        let cases: &[(Energy, &str)] = &[
            (Energy::NANO_JOULE, "1nJ"),
            (Energy::MICRO_JOULE, "1µJ"),
            (Energy::MILLI_JOULE, "1mJ"),
            (Energy::JOULE, "1J"),
            (Energy::KILO_JOULE, "1kJ"),
            (Energy::MEGA_JOULE, "1MJ"),
            (Energy::GIGA_JOULE, "1GJ"),
            (Energy::BTU, "1.055kJ"),
        ];
        for (i, (input, expected)) in cases.iter().enumerate() {
            assert_eq!(input.to_string(), *expected, "#{}: Energy({})", i, input.raw());
        }
    }

    #[test]
    fn test_set_succeeds() {
        let cases: &[(&str, Energy)] = &[
            ("1nJ", Energy::NANO_JOULE),
            ("10nJ", Energy::NANO_JOULE * 10),
            ("100nJ", Energy::NANO_JOULE * 100),
            ("1uJ", Energy::MICRO_JOULE),
            ("1µJ", Energy::MICRO_JOULE),
            ("1mJ", Energy::MILLI_JOULE),
            ("1J", Energy::JOULE),
            ("1j", Energy::JOULE),
            ("10J", Energy::JOULE * 10),
            ("100J", Energy::JOULE * 100),
            ("1kJ", Energy::KILO_JOULE),
            ("1kj", Energy::KILO_JOULE),
            ("1MJ", Energy::MEGA_JOULE),
            ("1GJ", Energy::GIGA_JOULE),
            ("12.345J", Energy::MILLI_JOULE * 12345),
            ("-12.345J", Energy::MILLI_JOULE * -12345),
            ("9.223372036854775807GJ", Energy::MAX),
            ("-9.223372036854775807GJ", Energy::MIN),
        ];
        for (i, (input, expected)) in cases.iter().enumerate() {
            let got: Energy = input.parse().unwrap_or_else(|e| {
                panic!("#{}: Energy parse({:?}) unexpected error: {}", i, input, e)
            });
            assert_eq!(got, *expected, "#{}: Energy parse({:?})", i, input);
        }
    }

    #[test]
    fn test_set_fails() {
        let cases: &[(&str, &str)] = &[
            ("10TJ", "maximum value is 9.223GJ"),
            (
                "10EJ",
                "unknown unit prefix; valid prefixes for \"J\" are p,n,u,µ,m,k,M,G or T",
            ),
            (
                "10ExaJ",
                "unknown unit prefix; valid prefixes for \"J\" are p,n,u,µ,m,k,M,G or T",
            ),
            ("10eJouleE", "unknown unit provided; need J"),
            ("10", "no unit provided; need J"),
            ("9223372036854775808", "maximum value is 9.223GJ"),
            ("-9223372036854775808", "minimum value is -9.223GJ"),
            ("9.223372036854775808GJ", "maximum value is 9.223GJ"),
            ("-9.223372036854775808GJ", "minimum value is -9.223GJ"),
            ("1random", "unknown unit provided; need J"),
            ("J", "not a number"),
            ("RPM", "does not contain number or unit J"),
            ("++1J", "contains multiple plus symbols"),
            ("--1J", "contains multiple minus symbols"),
            ("+-1J", "contains both plus and minus symbols"),
            ("1.1.1.1J", "contains multiple decimal points"),
        ];
        for (i, (input, expected)) in cases.iter().enumerate() {
            let err = input
                .parse::<Energy>()
                .expect_err(&format!("#{}: Energy parse({:?}) should fail", i, input));
            assert_eq!(err.to_string(), *expected, "#{}: Energy parse({:?})", i, input);
        }
    }

    #[test]
    fn test_round_trip() {
        let x = Energy::WATT_HOUR;
        let y: Energy = x.to_string().parse().unwrap();
        assert_eq!(x, y);
    }
}
