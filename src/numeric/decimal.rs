// ============================================================================
// Decimal Engine
// Scaled-integer decimal literals: parsing, integer conversion, bounded
// multiplication
// ============================================================================

use super::errors::{ParseError, ParseResult};

/// Largest i64 value viewed as u64. Magnitudes above this are not
/// representable once a sign is applied.
pub(crate) const MAX_I64: u64 = i64::MAX as u64;

/// Powers of ten from 10^0 to 10^18, the full range expressible in u64
/// without overflowing a signed conversion.
pub(crate) const POW10: [u64; 19] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
    10_000_000_000,
    100_000_000_000,
    1_000_000_000_000,
    10_000_000_000_000,
    100_000_000_000_000,
    1_000_000_000_000_000,
    10_000_000_000_000_000,
    100_000_000_000_000_000,
    1_000_000_000_000_000_000,
];

/// A decimal number as significant digits, a power-of-ten exponent and an
/// explicit sign.
///
/// `mag` never carries trailing zeros; they are folded into `exp`. A zero
/// value has `mag == 0`, `exp == 0` and a positive sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Decimal {
    /// Significant digits, capped at i64::MAX when produced by [`atod`].
    pub mag: u64,
    /// Power-of-ten exponent applied to `mag`.
    pub exp: i32,
    /// True when the value is negative.
    pub neg: bool,
}

impl Decimal {
    /// Builds a decimal from its parts. `mag` should carry no trailing
    /// zeros; conversion ratios are written in that normal form.
    pub const fn new(mag: u64, exp: i32, neg: bool) -> Self {
        Decimal { mag, exp, neg }
    }
}

/// Parses a decimal literal from the beginning of `s`, consuming an
/// optional sign, digits and at most one decimal point.
///
/// Returns the parsed decimal and the number of bytes consumed. Parsing
/// stops at the first byte that cannot belong to the number; trailing
/// bytes are left for the caller (typically a unit suffix). Leading and
/// trailing non-significant zeros are stripped, with trailing zeros
/// folded into the exponent, so "200" parses as `{2, 2}`.
///
/// Magnitudes above i64::MAX fail with [`ParseError::ExceedsMaximum`] or
/// [`ParseError::ExceedsMinimum`] depending on the parsed sign.
pub fn atod(s: &str) -> ParseResult<(Decimal, usize)> {
    let b = s.as_bytes();
    let mut d = Decimal::default();
    let mut start = 0usize;
    let mut dp = 0usize;
    let mut end = b.len();
    let mut seen_digit = false;
    let mut seen_zero = false;
    let mut is_point = false;
    let mut seen_plus = false;

    // First pass: validate sign and point placement, and find where the
    // number stops.
    for (i, &c) in b.iter().enumerate() {
        match c {
            b'-' => {
                if seen_digit {
                    end = i;
                    continue;
                }
                if seen_plus {
                    return Err(ParseError::BothPlusMinus);
                }
                if d.neg {
                    return Err(ParseError::MultipleMinus);
                }
                d.neg = true;
                start += 1;
            }
            b'+' => {
                if seen_digit {
                    end = i;
                    continue;
                }
                if d.neg {
                    return Err(ParseError::BothPlusMinus);
                }
                if seen_plus {
                    return Err(ParseError::MultiplePlus);
                }
                seen_plus = true;
                start += 1;
            }
            b'.' => {
                if is_point {
                    return Err(ParseError::MultipleDecimalPoints);
                }
                is_point = true;
                dp = i;
                if !seen_digit {
                    start += 1;
                }
            }
            b'0' => {
                if !seen_digit {
                    start += 1;
                }
                seen_zero = true;
            }
            b'1'..=b'9' => seen_digit = true,
            _ => {
                if !seen_digit && !seen_zero {
                    return Err(ParseError::NotANumber);
                }
                end = i;
            }
        }
    }

    // Second pass, right to left: drop trailing junk and non-significant
    // zeros, folding the zeros into the exponent.
    let mut last = end;
    let mut exp = 0i32;
    seen_digit = false;
    let mut i = end;
    while i > start {
        i -= 1;
        match b[i] {
            b'1'..=b'9' => seen_digit = true,
            b'.' => {
                if !seen_digit {
                    end -= 1;
                }
            }
            b'0' => {
                if !seen_digit {
                    if i > dp {
                        end -= 1;
                    }
                    if i <= dp || dp == 0 {
                        exp += 1;
                    }
                }
            }
            _ => {
                last -= 1;
                end -= 1;
            }
        }
    }

    // Third pass: fold the significant digits with overflow checks.
    for &c in &b[start..end] {
        if c.is_ascii_digit() {
            d.mag = d
                .mag
                .checked_mul(10)
                .and_then(|m| m.checked_add(u64::from(c - b'0')))
                .filter(|&m| m <= MAX_I64)
                .ok_or(if d.neg {
                    ParseError::ExceedsMinimum
                } else {
                    ParseError::ExceedsMaximum
                })?;
        } else if c != b'.' {
            return Err(ParseError::NotANumber);
        }
    }

    if !is_point {
        d.exp = exp;
    } else {
        let mut frac_end = end;
        if dp > start && dp < frac_end {
            frac_end -= 1;
        }
        d.exp = dp as i32 - start as i32 - (frac_end as i32 - start as i32);
        if dp <= start {
            d.exp += 1;
        }
    }
    Ok((d, last))
}

/// Converts a decimal to an i64 after shifting it by `scale` powers of
/// ten. The bool reports overflow; the value is 0 in that case.
///
/// A negative effective shift divides with round-half-up. Any shift with
/// a magnitude above 18 cannot fit in an i64 and is reported as overflow
/// outright.
pub fn dtoi(d: Decimal, scale: i32) -> (i64, bool) {
    let shift = d.exp + scale;
    let mag = shift.unsigned_abs() as usize;
    if mag > 18 {
        return (0, true);
    }
    let mut u = d.mag;
    if shift < 0 {
        u = (u + POW10[mag] / 2) / POW10[mag];
    } else if mag == 0 {
        if u > MAX_I64 {
            return (0, true);
        }
    } else {
        match u.checked_mul(POW10[mag]) {
            Some(v) if v <= MAX_I64 => u = v,
            _ => return (0, true),
        }
    }
    let mut n = u as i64;
    if d.neg {
        n = -n;
    }
    (n, false)
}

/// Multiplies two decimals, rounding the operands until the product's
/// magnitude fits below i64::MAX.
///
/// Returns the product and the number of least-significant digits dropped
/// to make it fit. A loss of 21 means the multiplication failed and the
/// returned decimal is zero; callers treat that as an unconvertible
/// value.
pub fn decimal_mul(a: Decimal, b: Decimal) -> (Decimal, u32) {
    if a.mag == 0 || b.mag == 0 {
        // Obvious zero result, no digits lost.
        return (Decimal::default(), 0);
    }
    if a.mag <= u64::MAX - 5 && b.mag <= u64::MAX - 5 {
        let neg = a.neg != b.neg;
        let mut exp = a.exp + b.exp;
        let mut am = a.mag;
        let mut bm = b.mag;
        for i in 0..21u32 {
            if am <= 1 || bm <= 1 {
                // One operand is a pure power of ten now; the product is
                // exact at this precision.
                return (Decimal { mag: am * bm, exp, neg }, i);
            }
            if let Some(m) = am.checked_mul(bm) {
                if m < MAX_I64 {
                    return (Decimal { mag: m, exp, neg }, i);
                }
            }
            // Drop one digit off the larger operand, rounding half up,
            // and compact any trailing zeros into the exponent.
            if bm > am {
                bm = (bm + 5) / 10;
                while bm > 0 && bm % 10 == 0 {
                    bm /= 10;
                    exp += 1;
                }
            } else {
                am = (am + 5) / 10;
                while am > 0 && am % 10 == 0 {
                    am /= 10;
                    exp += 1;
                }
            }
            exp += 1;
        }
    }
    (Decimal::default(), 21)
}
