// ============================================================================
// SI Prefixes
// Power-of-ten prefixes recognized in unit strings
// ============================================================================

/// SI magnitude prefixes, each standing for a power of ten.
///
/// `Unit` is the neutral element; `Deca` and `Hecto` never appear in
/// parsed strings but participate in storage-offset arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prefix {
    Pico,
    Nano,
    Micro,
    Milli,
    Unit,
    Deca,
    Hecto,
    Kilo,
    Mega,
    Giga,
    Tera,
}

impl Prefix {
    /// The power of ten this prefix multiplies by.
    pub const fn exponent(self) -> i32 {
        match self {
            Prefix::Pico => -12,
            Prefix::Nano => -9,
            Prefix::Micro => -6,
            Prefix::Milli => -3,
            Prefix::Unit => 0,
            Prefix::Deca => 1,
            Prefix::Hecto => 2,
            Prefix::Kilo => 3,
            Prefix::Mega => 6,
            Prefix::Giga => 9,
            Prefix::Tera => 12,
        }
    }

    /// Maps a character to its prefix and the number of bytes it spans.
    /// Unrecognized characters resolve to `Unit` with zero bytes so the
    /// caller leaves them for suffix matching. 'µ' spans two bytes of
    /// UTF-8.
    pub fn parse(c: char) -> (Prefix, usize) {
        match c {
            'p' => (Prefix::Pico, 1),
            'n' => (Prefix::Nano, 1),
            'u' => (Prefix::Micro, 1),
            'µ' => (Prefix::Micro, 2),
            'm' => (Prefix::Milli, 1),
            'k' => (Prefix::Kilo, 1),
            'M' => (Prefix::Mega, 1),
            'G' => (Prefix::Giga, 1),
            'T' => (Prefix::Tera, 1),
            _ => (Prefix::Unit, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_prefix() {
        let cases: &[(&str, char, Prefix, usize)] = &[
            ("pico", 'p', Prefix::Pico, 1),
            ("nano", 'n', Prefix::Nano, 1),
            ("micro", 'u', Prefix::Micro, 1),
            ("mu", 'µ', Prefix::Micro, 2),
            ("milli", 'm', Prefix::Milli, 1),
            ("unit", '\0', Prefix::Unit, 0),
            ("kilo", 'k', Prefix::Kilo, 1),
            ("mega", 'M', Prefix::Mega, 1),
            ("giga", 'G', Prefix::Giga, 1),
            ("tera", 'T', Prefix::Tera, 1),
        ];
        for (name, c, want, n) in cases {
            let (got, size) = Prefix::parse(*c);
            assert_eq!(got, *want, "{}", name);
            assert_eq!(size, *n, "{}", name);
        }
    }

    #[test]
    fn test_exponents() {
        assert_eq!(Prefix::Pico.exponent(), -12);
        assert_eq!(Prefix::Nano.exponent(), -9);
        assert_eq!(Prefix::Micro.exponent(), -6);
        assert_eq!(Prefix::Milli.exponent(), -3);
        assert_eq!(Prefix::Unit.exponent(), 0);
        assert_eq!(Prefix::Deca.exponent(), 1);
        assert_eq!(Prefix::Hecto.exponent(), 2);
        assert_eq!(Prefix::Kilo.exponent(), 3);
        assert_eq!(Prefix::Mega.exponent(), 6);
        assert_eq!(Prefix::Giga.exponent(), 9);
        assert_eq!(Prefix::Tera.exponent(), 12);
    }
}
