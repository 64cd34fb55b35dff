// ============================================================================
// Relative humidity
// Fixed point i32 at a precision of 0.00001%rH
// ============================================================================

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use crate::numeric::{ParseError, Prefix};
use crate::quantity::{has_suffix, value_of_unit_string};

const SUFFIXES: &[&str] = &["%rH", "%"];
const UNIT_LIST: &str = "%rH or %";
// Storage sub-unit is 0.00001%.
const BASE_EXP: i32 = -5;

/// A humidity level measurement stored as an i32 fixed point integer at a
/// precision of 0.00001%rH.
///
/// Valid values are between 0% and 100%; parsing rejects anything
/// outside, arithmetic does not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RelativeHumidity(pub i32);

impl RelativeHumidity {
    pub const TENTH_MICRO_RH: RelativeHumidity = RelativeHumidity(1); // 0.00001%rH
    pub const MICRO_RH: RelativeHumidity = RelativeHumidity(10); // 0.0001%rH
    pub const MILLI_RH: RelativeHumidity = RelativeHumidity(10_000); // 0.1%rH
    pub const PERCENT_RH: RelativeHumidity = RelativeHumidity(100_000); // 1%rH

    pub const ZERO: RelativeHumidity = RelativeHumidity(0);
    pub const SATURATED: RelativeHumidity = RelativeHumidity(10_000_000);

    /// The raw sub-unit count.
    pub const fn raw(self) -> i32 {
        self.0
    }
}

impl fmt::Display for RelativeHumidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Tenths of a percent.
        let r = self.0 / Self::MILLI_RH.0;
        let frac = (r % 10).abs();
        if frac == 0 {
            write!(f, "{}%rH", r / 10)
        } else {
            write!(f, "{}.{}%rH", r / 10, frac)
        }
    }
}

impl FromStr for RelativeHumidity {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (v, n) = match value_of_unit_string(s, BASE_EXP) {
            Ok(parsed) => parsed,
            Err(err) => {
                return Err(match err {
                    ParseError::NotANumber => {
                        if has_suffix(s, SUFFIXES).is_some() {
                            ParseError::NotANumber
                        } else {
                            ParseError::NoNumberOrUnit(UNIT_LIST)
                        }
                    }
                    ParseError::ExceedsMaximum => {
                        ParseError::Maximum(Self::SATURATED.to_string())
                    }
                    ParseError::ExceedsMinimum => ParseError::Minimum(Self::ZERO.to_string()),
                    other => other,
                });
            }
        };
        match &s[n..] {
            "%rH" | "%" => {
                // The i64 parse can land outside both the valid range
                // and i32 itself.
                if v > i64::from(Self::SATURATED.0) {
                    Err(ParseError::Maximum(Self::SATURATED.to_string()))
                } else if v < 0 {
                    Err(ParseError::Minimum(Self::ZERO.to_string()))
                } else {
                    Ok(RelativeHumidity(v as i32))
                }
            }
            "" => Err(ParseError::NoUnit(UNIT_LIST)),
            rest => {
                if let Some(found) = has_suffix(rest, SUFFIXES) {
                    Err(ParseError::UnknownUnitPrefix {
                        unit: found,
                        valid: crate::quantity::SI_PREFIXES,
                    })
                } else {
                    Err(ParseError::UnknownUnit(UNIT_LIST))
                }
            }
        }
    }
}

impl Neg for RelativeHumidity {
    type Output = Self;

    fn neg(self) -> Self {
        RelativeHumidity(-self.0)
    }
}

impl Add for RelativeHumidity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        RelativeHumidity(self.0 + rhs.0)
    }
}

impl Sub for RelativeHumidity {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        RelativeHumidity(self.0 - rhs.0)
    }
}

impl Mul<i32> for RelativeHumidity {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self {
        RelativeHumidity(self.0 * rhs)
    }
}
