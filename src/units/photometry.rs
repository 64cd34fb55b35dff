// ============================================================================
// Photometric units
// Luminous intensity and luminous flux
// ============================================================================

use crate::numeric::{Decimal, Prefix};
use crate::quantity::{Conversion, Ladder, Quantity, Resolution, Unit};

static BASE: Conversion = Conversion::scaled(Decimal::new(1, 9, false));

/// Unit descriptor for luminous intensity, the quantity of visible light
/// emitted per unit solid angle.
///
/// This is one of the base units in the International System of Units.
/// The highest representable value is 9.2Gcd.
#[derive(Debug, Clone, Copy)]
pub enum Candela {}

impl Unit for Candela {
    const SYMBOL: &'static str = "cd";
    const LADDER: Ladder = Ladder::Nano;
    const STORAGE_EXP: i32 = -9;
    const SUFFIXES: &'static [&'static str] = &["cd"];
    const PREFIXABLE: &'static [&'static str] = &["cd"];
    const UNIT_LIST: &'static str = "cd";

    fn resolve(rest: &str, si: Prefix) -> Resolution {
        match rest {
            "cd" => Resolution::Convert(&BASE, si),
            "" => Resolution::NoUnit,
            _ => Resolution::Unknown,
        }
    }
}

/// A measurement of the quantity of visible light energy emitted per unit
/// solid angle.
pub type LuminousIntensity = Quantity<Candela>;

impl Quantity<Candela> {
    pub const NANO_CANDELA: LuminousIntensity = LuminousIntensity::from_raw(1);
    pub const MICRO_CANDELA: LuminousIntensity = LuminousIntensity::from_raw(1_000);
    pub const MILLI_CANDELA: LuminousIntensity = LuminousIntensity::from_raw(1_000_000);
    pub const CANDELA: LuminousIntensity = LuminousIntensity::from_raw(1_000_000_000);
    pub const KILO_CANDELA: LuminousIntensity = LuminousIntensity::from_raw(1_000_000_000_000);
    pub const MEGA_CANDELA: LuminousIntensity = LuminousIntensity::from_raw(1_000_000_000_000_000);
    pub const GIGA_CANDELA: LuminousIntensity =
        LuminousIntensity::from_raw(1_000_000_000_000_000_000);
}

/// Unit descriptor for luminous flux, the perceived power of light.
/// The highest representable value is 9.2Glm.
#[derive(Debug, Clone, Copy)]
pub enum Lumen {}

impl Unit for Lumen {
    const SYMBOL: &'static str = "lm";
    const LADDER: Ladder = Ladder::Nano;
    const STORAGE_EXP: i32 = -9;
    const SUFFIXES: &'static [&'static str] = &["lm"];
    const PREFIXABLE: &'static [&'static str] = &["lm"];
    const UNIT_LIST: &'static str = "lm";

    fn resolve(rest: &str, si: Prefix) -> Resolution {
        match rest {
            "lm" => Resolution::Convert(&BASE, si),
            "" => Resolution::NoUnit,
            _ => Resolution::Unknown,
        }
    }
}

/// A measurement of the perceived power of light.
pub type LuminousFlux = Quantity<Lumen>;

impl Quantity<Lumen> {
    // Lumen is cd⋅sr.
    pub const NANO_LUMEN: LuminousFlux = LuminousFlux::from_raw(1);
    pub const MICRO_LUMEN: LuminousFlux = LuminousFlux::from_raw(1_000);
    pub const MILLI_LUMEN: LuminousFlux = LuminousFlux::from_raw(1_000_000);
    pub const LUMEN: LuminousFlux = LuminousFlux::from_raw(1_000_000_000);
    pub const KILO_LUMEN: LuminousFlux = LuminousFlux::from_raw(1_000_000_000_000);
    pub const MEGA_LUMEN: LuminousFlux = LuminousFlux::from_raw(1_000_000_000_000_000);
    pub const GIGA_LUMEN: LuminousFlux = LuminousFlux::from_raw(1_000_000_000_000_000_000);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intensity_string() {
        assert_eq!(LuminousIntensity::NANO_CANDELA.to_string(), "1ncd");
        assert_eq!(LuminousIntensity::MICRO_CANDELA.to_string(), "1µcd");
        assert_eq!(LuminousIntensity::CANDELA.to_string(), "1cd");
        assert_eq!(LuminousIntensity::GIGA_CANDELA.to_string(), "1Gcd");
    }

    #[test]
    fn test_intensity_set_succeeds() {
        let cases: &[(&str, LuminousIntensity)] = &[
            ("1ncd", LuminousIntensity::NANO_CANDELA),
            ("10ncd", LuminousIntensity::NANO_CANDELA * 10),
            ("1ucd", LuminousIntensity::MICRO_CANDELA),
            ("1µcd", LuminousIntensity::MICRO_CANDELA),
            ("1mcd", LuminousIntensity::MILLI_CANDELA),
            ("1cd", LuminousIntensity::CANDELA),
            ("1kcd", LuminousIntensity::KILO_CANDELA),
            ("1Mcd", LuminousIntensity::MEGA_CANDELA),
            ("1Gcd", LuminousIntensity::GIGA_CANDELA),
            ("12.345cd", LuminousIntensity::MILLI_CANDELA * 12345),
            ("-12.345cd", LuminousIntensity::MILLI_CANDELA * -12345),
            ("9.223372036854775807Gcd", LuminousIntensity::MAX),
            ("-9.223372036854775807Gcd", LuminousIntensity::MIN),
        ];
        for (i, (input, expected)) in cases.iter().enumerate() {
            let got: LuminousIntensity = input.parse().unwrap_or_else(|e| {
                panic!("#{}: LuminousIntensity parse({:?}) unexpected error: {}", i, input, e)
            });
            assert_eq!(got, *expected, "#{}: LuminousIntensity parse({:?})", i, input);
        }
    }

    #[test]
    fn test_intensity_set_fails() {
        let cases: &[(&str, &str)] = &[
            ("10Tcd", "maximum value is 9.223Gcd"),
            (
                "10Ecd",
                "unknown unit prefix; valid prefixes for \"cd\" are p,n,u,µ,m,k,M,G or T",
            ),
            ("10eCandelaE", "unknown unit provided; need cd"),
            ("10", "no unit provided; need cd"),
            ("9223372036854775808", "maximum value is 9.223Gcd"),
            ("-9223372036854775808", "minimum value is -9.223Gcd"),
            ("1random", "unknown unit provided; need cd"),
            ("cd", "not a number"),
            ("RPM", "does not contain number or unit cd"),
            ("++1cd", "contains multiple plus symbols"),
            ("--1cd", "contains multiple minus symbols"),
            ("+-1cd", "contains both plus and minus symbols"),
            ("1.1.1.1cd", "contains multiple decimal points"),
        ];
        for (i, (input, expected)) in cases.iter().enumerate() {
            let err = input
                .parse::<LuminousIntensity>()
                .expect_err(&format!("#{}: LuminousIntensity parse({:?}) should fail", i, input));
            assert_eq!(err.to_string(), *expected, "#{}: LuminousIntensity parse({:?})", i, input);
        }
    }

    #[test]
    fn test_flux_string() {
        assert_eq!(LuminousFlux::MILLI_LUMEN.to_string(), "1mlm");
        assert_eq!(LuminousFlux::LUMEN.to_string(), "1lm");
    }

    #[test]
    fn test_flux_set() {
        let cases: &[(&str, LuminousFlux)] = &[
            ("1nlm", LuminousFlux::NANO_LUMEN),
            ("1µlm", LuminousFlux::MICRO_LUMEN),
            ("1mlm", LuminousFlux::MILLI_LUMEN),
            ("1lm", LuminousFlux::LUMEN),
            ("1klm", LuminousFlux::KILO_LUMEN),
            ("1Mlm", LuminousFlux::MEGA_LUMEN),
            ("1Glm", LuminousFlux::GIGA_LUMEN),
            ("800lm", LuminousFlux::LUMEN * 800),
            ("9.223372036854775807Glm", LuminousFlux::MAX),
        ];
        for (i, (input, expected)) in cases.iter().enumerate() {
            let got: LuminousFlux = input.parse().unwrap_or_else(|e| {
                panic!("#{}: LuminousFlux parse({:?}) unexpected error: {}", i, input, e)
            });
            assert_eq!(got, *expected, "#{}: LuminousFlux parse({:?})", i, input);
        }
        let err = "10Tlm".parse::<LuminousFlux>().unwrap_err();
        assert_eq!(err.to_string(), "maximum value is 9.223Glm");
        let err = "10".parse::<LuminousFlux>().unwrap_err();
        assert_eq!(err.to_string(), "no unit provided; need lm");
        let err = "RPM".parse::<LuminousFlux>().unwrap_err();
        assert_eq!(err.to_string(), "does not contain number or unit lm");
    }
}
