// ============================================================================
// SI Formatting
// Integer-to-string rendering over prefix ladders
// ============================================================================

/// Renders a sub-unit count against a seven-slot prefix ladder, keeping
/// at most three fraction digits.
///
/// The thresholds bake in the rounding cutover: a value that would round
/// up to 1000 of a slot is promoted to the next slot instead. Rounding
/// within a slot goes up only when the truncated remainder is strictly
/// above half.
fn si_string(v: i64, prefixes: [&str; 7]) -> String {
    let mut v = v;
    let mut sign = "";
    if v < 0 {
        if v == i64::MIN {
            // No positive counterpart; nudge into range before negating.
            v += 1;
        }
        sign = "-";
        v = -v;
    }
    let (base, frac, prefix) = if v >= 999_999_500_000_000_001 {
        round_split(v, 1_000_000_000_000_000, prefixes[6])
    } else if v >= 999_999_500_000_001 {
        round_split(v, 1_000_000_000_000, prefixes[5])
    } else if v >= 999_999_500_001 {
        round_split(v, 1_000_000_000, prefixes[4])
    } else if v >= 999_999_501 {
        round_split(v, 1_000_000, prefixes[3])
    } else if v >= 1_000_000 {
        round_split(v, 1_000, prefixes[2])
    } else if v >= 1_000 {
        (v / 1_000, v % 1_000, prefixes[1])
    } else if v == 0 {
        return "0".to_string();
    } else {
        (v, 0, prefixes[0])
    };
    if frac == 0 {
        format!("{}{}{}", sign, base, prefix)
    } else {
        format!("{}{}.{:03}{}", sign, base, frac, prefix)
    }
}

/// Scales `v` down to thousandths of a ladder slot, rounding half up on
/// the truncated tail, and splits integer and fraction parts.
fn round_split(v: i64, milli_slot: i64, prefix: &str) -> (i64, i64, &str) {
    let mut base = v / milli_slot;
    if v % milli_slot > milli_slot / 2 {
        base += 1;
    }
    (base / 1_000, base % 1_000, prefix)
}

/// Formats a count of nano-units; the unscaled slot is the base unit.
pub fn nano_as_string(v: i64) -> String {
    si_string(v, ["n", "µ", "m", "", "k", "M", "G"])
}

/// Formats a count of micro-units; the unscaled slot is the base unit.
pub fn micro_as_string(v: i64) -> String {
    si_string(v, ["µ", "m", "", "k", "M", "G", "T"])
}

/// Formats a count of pico-units; the unscaled slot is the base unit.
pub fn pico_as_string(v: i64) -> String {
    si_string(v, ["p", "n", "µ", "m", "", "k", "M"])
}
