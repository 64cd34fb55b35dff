// ============================================================================
// Frequency
// Cycles per second stored as an i64 count of micro hertz
// ============================================================================

use chrono::Duration;

use crate::numeric::{Decimal, Prefix};
use crate::quantity::{Conversion, Ladder, Quantity, Resolution, Unit};

static BASE: Conversion = Conversion::scaled(Decimal::new(1, 6, false));

// One second expressed in nanosecond micro-hertz products.
const NANOS_PER_CYCLE: i64 = 1_000_000_000 * 1_000_000;

/// Unit descriptor for frequency. The highest representable value is
/// 9.2THz.
#[derive(Debug, Clone, Copy)]
pub enum Hertz {}

impl Unit for Hertz {
    const SYMBOL: &'static str = "Hz";
    const LADDER: Ladder = Ladder::Micro;
    const STORAGE_EXP: i32 = -6;
    const SUFFIXES: &'static [&'static str] = &["Hz", "hz"];
    const PREFIXABLE: &'static [&'static str] = &["Hz", "hz"];
    const UNIT_LIST: &'static str = "Hz";

    fn resolve(rest: &str, si: Prefix) -> Resolution {
        match rest {
            // A bare number is hertz; "10" parses as 10Hz and "1k" as
            // 1kHz.
            "Hz" | "hz" | "" => Resolution::Convert(&BASE, si),
            _ => Resolution::Unknown,
        }
    }
}

/// A measurement of cycles per second.
pub type Frequency = Quantity<Hertz>;

impl Quantity<Hertz> {
    pub const MICRO_HERTZ: Frequency = Frequency::from_raw(1);
    pub const MILLI_HERTZ: Frequency = Frequency::from_raw(1_000);
    pub const HERTZ: Frequency = Frequency::from_raw(1_000_000);
    pub const KILO_HERTZ: Frequency = Frequency::from_raw(1_000_000_000);
    pub const MEGA_HERTZ: Frequency = Frequency::from_raw(1_000_000_000_000);
    pub const GIGA_HERTZ: Frequency = Frequency::from_raw(1_000_000_000_000_000);
    pub const TERA_HERTZ: Frequency = Frequency::from_raw(1_000_000_000_000_000_000);

    /// Revolutions per minute, used to quantify angular frequency.
    pub const RPM: Frequency = Frequency::from_raw(16_667);

    /// The duration of one cycle at this frequency.
    ///
    /// Frequencies above a gigahertz round to a zero period. A zero
    /// frequency returns a zero period.
    pub fn period(self) -> Duration {
        let f = self.raw();
        if f == 0 {
            return Duration::zero();
        }
        let ns = if f < 0 {
            (NANOS_PER_CYCLE - f / 2) / f
        } else {
            (NANOS_PER_CYCLE + f / 2) / f
        };
        Duration::nanoseconds(ns)
    }

    /// The frequency with a cycle of this period.
    ///
    /// A zero period returns a zero frequency.
    pub fn from_period(p: Duration) -> Frequency {
        let ns = match p.num_nanoseconds() {
            Some(ns) => ns,
            None if p < Duration::zero() => -i64::MAX,
            None => i64::MAX,
        };
        if ns == 0 {
            return Frequency::ZERO;
        }
        let raw = if ns < 0 {
            (NANOS_PER_CYCLE - ns / 2) / ns
        } else {
            (NANOS_PER_CYCLE + ns / 2) / ns
        };
        Frequency::from_raw(raw)
    }
}
