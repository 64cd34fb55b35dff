// ============================================================================
// Numeric Module
// Decimal literal engine for fixed-point quantity parsing
// ============================================================================
//
// This module provides:
// - Decimal: significant digits + power-of-ten exponent + sign
// - atod/dtoi/decimal_mul: the parse, convert and scale primitives
// - Prefix: the SI prefix set recognized in unit strings
// - nano/micro/pico_as_string: ladder formatters for Display impls
//
// Design principles:
// - No floating-point operations anywhere in the conversion path
// - Checked integer arithmetic; overflow is always reported, never wrapped
// - Rendered error strings are stable and matched on by callers

mod decimal;
mod errors;
mod format;
mod prefix;

pub use decimal::{atod, decimal_mul, dtoi, Decimal};
pub use errors::{ParseError, ParseResult};
pub use format::{micro_as_string, nano_as_string, pico_as_string};
pub use prefix::Prefix;
