// ============================================================================
// Parse Errors
// Error taxonomy for decimal literal and unit string parsing
// ============================================================================

use std::fmt;

/// Errors produced while parsing a decimal literal or a unit string.
///
/// The rendered messages are a compatibility surface: callers match on the
/// exact text, so every variant formats byte-for-byte the same way across
/// releases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// No digits where a number was expected.
    NotANumber,
    /// More than one '+' before the digits.
    MultiplePlus,
    /// More than one '-' before the digits.
    MultipleMinus,
    /// Both '+' and '-' present.
    BothPlusMinus,
    /// More than one '.' in the literal.
    MultipleDecimalPoints,
    /// A codepoint at or below U+0001 where a unit suffix was expected.
    UnexpectedEndOfString,
    /// Magnitude overflowed i64::MAX while folding digits (positive).
    ExceedsMaximum,
    /// Magnitude overflowed i64::MAX while folding digits (negative).
    ExceedsMinimum,
    /// A number without any unit suffix.
    NoUnit(&'static str),
    /// A suffix that matches none of the accepted unit spellings.
    UnknownUnit(&'static str),
    /// A recognized unit suffix preceded by a character that is not a
    /// valid SI prefix.
    UnknownUnitPrefix {
        unit: &'static str,
        valid: &'static str,
    },
    /// The value converts above the representable maximum; carries the
    /// rendered bound.
    Maximum(String),
    /// The value converts below the representable minimum; carries the
    /// rendered bound.
    Minimum(String),
    /// The input contains neither a number nor a unit.
    NoNumberOrUnit(&'static str),
    /// A foreign-unit conversion dropped too many significant digits.
    PrecisionLoss(&'static str),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::NotANumber => write!(f, "not a number"),
            ParseError::MultiplePlus => write!(f, "contains multiple plus symbols"),
            ParseError::MultipleMinus => write!(f, "contains multiple minus symbols"),
            ParseError::BothPlusMinus => write!(f, "contains both plus and minus symbols"),
            ParseError::MultipleDecimalPoints => write!(f, "contains multiple decimal points"),
            ParseError::UnexpectedEndOfString => write!(f, "unexpected end of string"),
            ParseError::ExceedsMaximum => write!(f, "exceeds maximum"),
            ParseError::ExceedsMinimum => write!(f, "exceeds minimum"),
            ParseError::NoUnit(need) => write!(f, "no unit provided; need {}", need),
            ParseError::UnknownUnit(need) => write!(f, "unknown unit provided; need {}", need),
            ParseError::UnknownUnitPrefix { unit, valid } => {
                write!(
                    f,
                    "unknown unit prefix; valid prefixes for \"{}\" are {}",
                    unit, valid
                )
            }
            ParseError::Maximum(bound) => write!(f, "maximum value is {}", bound),
            ParseError::Minimum(bound) => write!(f, "minimum value is {}", bound),
            ParseError::NoNumberOrUnit(need) => {
                write!(f, "does not contain number or unit {}", need)
            }
            ParseError::PrecisionLoss(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ParseError {}

/// Result type alias for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(ParseError::NotANumber.to_string(), "not a number");
        assert_eq!(
            ParseError::MultiplePlus.to_string(),
            "contains multiple plus symbols"
        );
        assert_eq!(
            ParseError::MultipleMinus.to_string(),
            "contains multiple minus symbols"
        );
        assert_eq!(
            ParseError::BothPlusMinus.to_string(),
            "contains both plus and minus symbols"
        );
        assert_eq!(
            ParseError::MultipleDecimalPoints.to_string(),
            "contains multiple decimal points"
        );
        assert_eq!(
            ParseError::UnexpectedEndOfString.to_string(),
            "unexpected end of string"
        );
        assert_eq!(ParseError::ExceedsMaximum.to_string(), "exceeds maximum");
        assert_eq!(ParseError::ExceedsMinimum.to_string(), "exceeds minimum");
    }

    #[test]
    fn test_unit_error_display() {
        assert_eq!(
            ParseError::NoUnit("m, Mile, in, ft or Yard").to_string(),
            "no unit provided; need m, Mile, in, ft or Yard"
        );
        assert_eq!(
            ParseError::UnknownUnit("Hz").to_string(),
            "unknown unit provided; need Hz"
        );
        assert_eq!(
            ParseError::UnknownUnitPrefix {
                unit: "m",
                valid: "p,n,u,µ,m,k,M,G or T"
            }
            .to_string(),
            "unknown unit prefix; valid prefixes for \"m\" are p,n,u,µ,m,k,M,G or T"
        );
        assert_eq!(
            ParseError::Maximum("9.223Gm".to_string()).to_string(),
            "maximum value is 9.223Gm"
        );
        assert_eq!(
            ParseError::Minimum("-9.223Gm".to_string()).to_string(),
            "minimum value is -9.223Gm"
        );
        assert_eq!(
            ParseError::NoNumberOrUnit("g, lb or oz").to_string(),
            "does not contain number or unit g, lb or oz"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(ParseError::NotANumber, ParseError::NotANumber);
        assert_ne!(ParseError::ExceedsMaximum, ParseError::ExceedsMinimum);
    }
}
