// ============================================================================
// Quantity Module
// Generic fixed-point quantity type and the shared unit-string parser
// ============================================================================
//
// Every physical unit in this crate is the same machine: an i64 count of
// sub-units behind a descriptor that names the symbol, the storage scale,
// the accepted suffix spellings and the foreign-unit conversions. The
// descriptor trait keeps the per-unit code down to a table; all parsing
// and formatting flows through here.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use crate::numeric::{
    atod, decimal_mul, dtoi, micro_as_string, nano_as_string, pico_as_string, Decimal, ParseError,
    ParseResult, Prefix,
};

/// Valid-prefix list quoted by most units in the unknown-prefix error.
pub const SI_PREFIXES: &str = "p,n,u,µ,m,k,M,G or T";

// ============================================================================
// Display ladders
// ============================================================================

/// Which formatter ladder a unit's Display uses; doubles as the storage
/// scale for units whose sub-unit matches their ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ladder {
    Pico,
    Nano,
    Micro,
}

impl Ladder {
    /// Storage exponent of a sub-unit on this ladder.
    pub const fn exponent(self) -> i32 {
        match self {
            Ladder::Pico => -12,
            Ladder::Nano => -9,
            Ladder::Micro => -6,
        }
    }

    fn format(self, v: i64) -> String {
        match self {
            Ladder::Pico => pico_as_string(v),
            Ladder::Nano => nano_as_string(v),
            Ladder::Micro => micro_as_string(v),
        }
    }
}

// ============================================================================
// Suffix conversions
// ============================================================================

/// How a recognized unit suffix converts to storage sub-units.
///
/// The ratio is a decimal expressed in sub-units per suffix unit, so a
/// base suffix on a nano-scaled unit carries the ratio `{1, 9}`. An
/// affine unit (degrees Celsius) adds `offset` sub-units after the
/// multiplicative conversion.
#[derive(Debug, Clone, Copy)]
pub struct Conversion {
    ratio: Decimal,
    offset: i64,
    limit: Option<i64>,
    max: Option<&'static str>,
    min: Option<&'static str>,
    precision_hint: Option<&'static str>,
}

impl Conversion {
    /// A conversion multiplying by `ratio` sub-units per suffix unit.
    pub const fn scaled(ratio: Decimal) -> Self {
        Conversion {
            ratio,
            offset: 0,
            limit: None,
            max: None,
            min: None,
            precision_hint: None,
        }
    }

    /// Overrides the rendered overflow bounds; without this the bound is
    /// the unit's own Display of the storage extremes.
    pub const fn bounded(mut self, max: &'static str, min: &'static str) -> Self {
        self.max = Some(max);
        self.min = Some(min);
        self
    }

    /// Adds a fixed number of sub-units after the multiplication.
    pub const fn offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }

    /// Caps the accepted magnitude, measured in nano counts of the
    /// suffix unit. Tighter than the storage range for units whose
    /// conversion would otherwise silently lose the overflowing digits.
    pub const fn clamped(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Fails the parse with this message when the multiplication drops
    /// more than 9 significant digits.
    pub const fn precision_hint(mut self, hint: &'static str) -> Self {
        self.precision_hint = Some(hint);
        self
    }
}

/// Outcome of dispatching the post-prefix remainder of a unit string.
pub enum Resolution {
    /// A recognized suffix with its conversion and the effective SI
    /// prefix (descriptors reset the prefix when its character was
    /// really part of the suffix, e.g. the 'M' of "Mile").
    Convert(&'static Conversion, Prefix),
    /// Empty remainder on a unit with no implied default suffix.
    NoUnit,
    /// Unrecognized remainder.
    Unknown,
}

// ============================================================================
// Unit descriptor
// ============================================================================

/// Descriptor for a physical unit backed by [`Quantity`].
pub trait Unit: 'static {
    /// Canonical symbol appended by the default Display rendering.
    const SYMBOL: &'static str;
    /// Formatter ladder used by the default Display rendering.
    const LADDER: Ladder;
    /// Power-of-ten offset of the stored sub-unit.
    const STORAGE_EXP: i32;
    /// Accepted suffix spellings; decides between "not a number" and
    /// "does not contain number or unit ..." for digit-free input.
    const SUFFIXES: &'static [&'static str];
    /// Spellings considered when diagnosing an unknown SI prefix.
    const PREFIXABLE: &'static [&'static str];
    /// Human-readable suffix list quoted in error messages.
    const UNIT_LIST: &'static str;
    /// Valid-prefix list quoted in the unknown-prefix error.
    const PREFIXES: &'static str = SI_PREFIXES;

    /// Maps the remainder after SI prefix extraction to a conversion.
    fn resolve(rest: &str, si: Prefix) -> Resolution;

    /// Renders a raw sub-unit count; ladder plus symbol unless the unit
    /// overrides it (angles render degrees, temperatures Celsius).
    fn format(raw: i64) -> String {
        let mut s = Self::LADDER.format(raw);
        s.push_str(Self::SYMBOL);
        s
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Returns the first listed suffix that terminates `s`.
pub(crate) fn has_suffix(s: &str, suffixes: &[&'static str]) -> Option<&'static str> {
    suffixes.iter().copied().find(|suffix| s.ends_with(suffix))
}

/// Parses a number with an optional SI prefix into a count of `base_exp`
/// scaled sub-units, returning the value and the bytes consumed.
///
/// Codepoints at or below U+0001 after the number are rejected before
/// prefix resolution. Overflow maps to the signed core errors; callers
/// rewrite those with their own bounds.
pub(crate) fn value_of_unit_string(s: &str, base_exp: i32) -> ParseResult<(i64, usize)> {
    let (d, mut n) = atod(s)?;
    let mut si = Prefix::Unit;
    if n != s.len() {
        let rest = &s[n..];
        let c = rest
            .chars()
            .next()
            .ok_or(ParseError::UnexpectedEndOfString)?;
        if (c as u32) <= 1 {
            return Err(ParseError::UnexpectedEndOfString);
        }
        let (p, size) = Prefix::parse(c);
        si = p;
        n += size;
    }
    let (v, overflow) = dtoi(d, si.exponent() - base_exp);
    if overflow {
        return Err(if d.neg {
            ParseError::ExceedsMinimum
        } else {
            ParseError::ExceedsMaximum
        });
    }
    Ok((v, n))
}

fn bound_error<U: Unit>(conv: &Conversion, neg: bool) -> ParseError {
    if neg {
        ParseError::Minimum(match conv.min {
            Some(text) => text.to_string(),
            None => U::format(-i64::MAX),
        })
    } else {
        ParseError::Maximum(match conv.max {
            Some(text) => text.to_string(),
            None => U::format(i64::MAX),
        })
    }
}

/// Shared parse path behind every unit's `FromStr`.
pub(crate) fn parse<U: Unit>(s: &str) -> ParseResult<i64> {
    let (d, n) = match atod(s) {
        Ok(parsed) => parsed,
        Err(err) => {
            return Err(match err {
                ParseError::NotANumber => {
                    if has_suffix(s, U::SUFFIXES).is_some() {
                        ParseError::NotANumber
                    } else {
                        ParseError::NoNumberOrUnit(U::UNIT_LIST)
                    }
                }
                ParseError::ExceedsMaximum => ParseError::Maximum(U::format(i64::MAX)),
                ParseError::ExceedsMinimum => ParseError::Minimum(U::format(-i64::MAX)),
                other => other,
            });
        }
    };

    // One SI prefix character is consumed greedily; anything else stays
    // in the remainder for suffix dispatch.
    let mut rest = &s[n..];
    let mut si = Prefix::Unit;
    if !rest.is_empty() {
        let c = rest
            .chars()
            .next()
            .ok_or(ParseError::UnexpectedEndOfString)?;
        if (c as u32) <= 1 {
            return Err(ParseError::UnexpectedEndOfString);
        }
        let (p, size) = Prefix::parse(c);
        si = p;
        rest = &rest[size..];
    }

    match U::resolve(rest, si) {
        Resolution::Convert(conv, si) => {
            if let Some(limit) = conv.limit {
                let (src, overflow) = dtoi(d, si.exponent() + 9);
                if overflow || src > limit || src < -limit {
                    return Err(bound_error::<U>(conv, d.neg));
                }
            }
            let (product, loss) = decimal_mul(d, conv.ratio);
            if loss > 0 {
                tracing::trace!(loss, input = s, "conversion dropped significant digits");
                if loss > 9 {
                    if let Some(hint) = conv.precision_hint {
                        return Err(ParseError::PrecisionLoss(hint));
                    }
                }
            }
            let (v, overflow) = dtoi(product, si.exponent());
            if overflow {
                return Err(bound_error::<U>(conv, product.neg));
            }
            match v.checked_add(conv.offset) {
                Some(v) => Ok(v),
                None => Err(bound_error::<U>(conv, product.neg)),
            }
        }
        Resolution::NoUnit => Err(ParseError::NoUnit(U::UNIT_LIST)),
        Resolution::Unknown => {
            if let Some(found) = has_suffix(rest, U::PREFIXABLE) {
                Err(ParseError::UnknownUnitPrefix {
                    unit: found,
                    valid: U::PREFIXES,
                })
            } else {
                Err(ParseError::UnknownUnit(U::UNIT_LIST))
            }
        }
    }
}

// ============================================================================
// Quantity
// ============================================================================

/// A physical quantity stored as an i64 count of `U`'s sub-units.
#[repr(transparent)]
pub struct Quantity<U: Unit> {
    raw: i64,
    _unit: PhantomData<U>,
}

impl<U: Unit> Quantity<U> {
    pub const ZERO: Self = Self::from_raw(0);
    /// Largest representable value.
    pub const MAX: Self = Self::from_raw(i64::MAX);
    /// Smallest representable value; symmetric with [`Self::MAX`] so
    /// every value has a negation.
    pub const MIN: Self = Self::from_raw(-i64::MAX);

    /// Wraps a raw sub-unit count.
    pub const fn from_raw(raw: i64) -> Self {
        Quantity {
            raw,
            _unit: PhantomData,
        }
    }

    /// The raw sub-unit count.
    pub const fn raw(self) -> i64 {
        self.raw
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.raw.checked_add(rhs.raw).map(Self::from_raw)
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.raw.checked_sub(rhs.raw).map(Self::from_raw)
    }

    pub fn checked_mul(self, rhs: i64) -> Option<Self> {
        self.raw.checked_mul(rhs).map(Self::from_raw)
    }
}

impl<U: Unit> Clone for Quantity<U> {
    fn clone(&self) -> Self {
        Self::from_raw(self.raw)
    }
}

impl<U: Unit> Copy for Quantity<U> {}

impl<U: Unit> PartialEq for Quantity<U> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<U: Unit> Eq for Quantity<U> {}

impl<U: Unit> PartialOrd for Quantity<U> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<U: Unit> Ord for Quantity<U> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw.cmp(&other.raw)
    }
}

impl<U: Unit> Hash for Quantity<U> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<U: Unit> Default for Quantity<U> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<U: Unit> fmt::Debug for Quantity<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", U::format(self.raw), self.raw)
    }
}

impl<U: Unit> fmt::Display for Quantity<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&U::format(self.raw))
    }
}

impl<U: Unit> FromStr for Quantity<U> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::<U>(s).map(Self::from_raw)
    }
}

impl<U: Unit> Neg for Quantity<U> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_raw(-self.raw)
    }
}

impl<U: Unit> Add for Quantity<U> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.checked_add(rhs).expect("quantity addition overflow")
    }
}

impl<U: Unit> Sub for Quantity<U> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.checked_sub(rhs).expect("quantity subtraction overflow")
    }
}

impl<U: Unit> Mul<i64> for Quantity<U> {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self {
        self.checked_mul(rhs)
            .expect("quantity multiplication overflow")
    }
}

impl<U: Unit> Div<i64> for Quantity<U> {
    type Output = Self;

    fn div(self, rhs: i64) -> Self {
        Self::from_raw(self.raw / rhs)
    }
}

#[cfg(feature = "serde")]
impl<U: Unit> serde::Serialize for Quantity<U> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.raw)
    }
}

#[cfg(feature = "serde")]
impl<'de, U: Unit> serde::Deserialize<'de> for Quantity<U> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i64::deserialize(deserializer).map(Self::from_raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PICO: i32 = -12;
    const NANO: i32 = -9;
    const MICRO: i32 = -6;

    #[test]
    fn test_value_of_unit_string_succeeds() {
        let cases: &[(&str, i32, i64, usize)] = &[
            ("1p", PICO, 1, 2),
            ("1n", PICO, 1000, 2),
            ("1u", PICO, 1000000, 2),
            ("1µ", PICO, 1000000, 3),
            ("1m", PICO, 1000000000, 2),
            ("1k", PICO, 1000000000000000, 2),
            ("1M", PICO, 1000000000000000000, 2),
            ("9.223372036854775807M", PICO, 9223372036854775807, 21),
            ("9223372036854775807p", PICO, 9223372036854775807, 20),
            ("-1p", PICO, -1, 3),
            ("-1n", PICO, -1000, 3),
            ("-1u", PICO, -1000000, 3),
            ("-1µ", PICO, -1000000, 4),
            ("-1m", PICO, -1000000000, 3),
            ("-1k", PICO, -1000000000000000, 3),
            ("-1M", PICO, -1000000000000000000, 3),
            ("-9.223372036854775807M", PICO, -9223372036854775807, 22),
            ("-9223372036854775807p", PICO, -9223372036854775807, 21),
            ("1p", NANO, 0, 2),
            ("1n", NANO, 1, 2),
            ("1u", NANO, 1000, 2),
            ("1µ", NANO, 1000, 3),
            ("1m", NANO, 1000000, 2),
            ("1k", NANO, 1000000000000, 2),
            ("1M", NANO, 1000000000000000, 2),
            ("1G", NANO, 1000000000000000000, 2),
            ("9.223372036854775807G", NANO, 9223372036854775807, 21),
            ("9223372036854775807n", NANO, 9223372036854775807, 20),
            ("-1p", NANO, 0, 3),
            ("-1n", NANO, -1, 3),
            ("-1u", NANO, -1000, 3),
            ("-1µ", NANO, -1000, 4),
            ("-1m", NANO, -1000000, 3),
            ("-1k", NANO, -1000000000000, 3),
            ("-1M", NANO, -1000000000000000, 3),
            ("-1G", NANO, -1000000000000000000, 3),
            ("-9.223372036854775807G", NANO, -9223372036854775807, 22),
            ("-9223372036854775807n", NANO, -9223372036854775807, 21),
            ("1p", MICRO, 0, 2),
            ("1n", MICRO, 0, 2),
            ("1u", MICRO, 1, 2),
            ("1µ", MICRO, 1, 3),
            ("1m", MICRO, 1000, 2),
            ("1k", MICRO, 1000000000, 2),
            ("1M", MICRO, 1000000000000, 2),
            ("1G", MICRO, 1000000000000000, 2),
            ("1T", MICRO, 1000000000000000000, 2),
            ("9.223372036854775807T", MICRO, 9223372036854775807, 21),
            ("9223372036854775807u", MICRO, 9223372036854775807, 20),
            ("-1p", MICRO, 0, 3),
            ("-1n", MICRO, 0, 3),
            ("-1u", MICRO, -1, 3),
            ("-1µ", MICRO, -1, 4),
            ("-1m", MICRO, -1000, 3),
            ("-1k", MICRO, -1000000000, 3),
            ("-1M", MICRO, -1000000000000, 3),
            ("-1G", MICRO, -1000000000000000, 3),
            ("-1T", MICRO, -1000000000000000000, 3),
            ("-9.223372036854775807T", MICRO, -9223372036854775807, 22),
            ("-9223372036854775807u", MICRO, -9223372036854775807, 21),
        ];
        for (i, (input, base, expected, used)) in cases.iter().enumerate() {
            let (got, n) = value_of_unit_string(input, *base).unwrap_or_else(|e| {
                panic!("#{}: value_of_unit_string({:?},{}) error: {}", i, input, base, e)
            });
            assert_eq!(got, *expected, "#{}: value_of_unit_string({:?},{})", i, input, base);
            assert_eq!(n, *used, "#{}: consumed bytes for {:?}", i, input);
        }
    }

    #[test]
    fn test_value_of_unit_string_fails() {
        let cases: &[(&str, i32)] = &[
            ("9.223372036854775808M", PICO),
            ("9.223372036854775808G", NANO),
            ("9.223372036854775808T", MICRO),
            ("9223372036854775808p", PICO),
            ("9223372036854775808n", NANO),
            ("9223372036854775808u", MICRO),
            ("-9.223372036854775808M", PICO),
            ("-9.223372036854775808G", NANO),
            ("-9.223372036854775808T", MICRO),
            ("-9223372036854775808p", PICO),
            ("-9223372036854775808n", NANO),
            ("-9223372036854775808u", MICRO),
            ("not a number", NANO),
            ("1\u{1}", NANO),
        ];
        for (i, (input, base)) in cases.iter().enumerate() {
            assert!(
                value_of_unit_string(input, *base).is_err(),
                "#{}: value_of_unit_string({:?},{}) expected an error",
                i,
                input,
                base
            );
        }
    }

    #[test]
    fn test_has_suffix() {
        assert_eq!(has_suffix("10Exam", &["m", "Mile"]), Some("m"));
        assert_eq!(has_suffix("1random", &["m", "Mile"]), Some("m"));
        assert_eq!(has_suffix("RPM", &["m", "Mile"]), None);
        assert_eq!(has_suffix("", &["m"]), None);
    }
}
