// ============================================================================
// Temperature
// Stored as an i64 count of nano kelvin
// ============================================================================

use crate::numeric::{nano_as_string, Decimal, Prefix};
use crate::quantity::{Conversion, Ladder, Quantity, Resolution, Unit};

const ZERO_CELSIUS: i64 = 273_150_000_000;
const ZERO_FAHRENHEIT: i64 = 255_372_222_222;
const FAHRENHEIT_STEP: i64 = 555_555_555;
const MAX_CELSIUS: i64 = i64::MAX - ZERO_CELSIUS;

static BASE: Conversion = Conversion::scaled(Decimal::new(1, 9, false));
static CELSIUS: Conversion = Conversion::scaled(Decimal::new(1, 9, false)).offset(ZERO_CELSIUS);
static FAHRENHEIT: Conversion =
    Conversion::scaled(Decimal::new(FAHRENHEIT_STEP as u64, 0, false)).offset(ZERO_FAHRENHEIT);

/// Unit descriptor for thermodynamic temperature. The highest
/// representable value is 9.2GK.
///
/// Negative values are physically invalid but representable.
#[derive(Debug, Clone, Copy)]
pub enum Kelvin {}

impl Unit for Kelvin {
    const SYMBOL: &'static str = "K";
    const LADDER: Ladder = Ladder::Nano;
    const STORAGE_EXP: i32 = -9;
    const SUFFIXES: &'static [&'static str] = &["K", "°C", "C", "°F", "F"];
    const PREFIXABLE: &'static [&'static str] = &["K", "°C", "C", "°F", "F"];
    const UNIT_LIST: &'static str = "K, °C or °F";

    fn resolve(rest: &str, si: Prefix) -> Resolution {
        match rest {
            "K" => Resolution::Convert(&BASE, si),
            "°C" | "C" => Resolution::Convert(&CELSIUS, si),
            "°F" | "F" => Resolution::Convert(&FAHRENHEIT, si),
            "" => Resolution::NoUnit,
            _ => Resolution::Unknown,
        }
    }

    // Temperatures inside the Celsius scale's reach render in °C, the
    // rest in kelvin.
    fn format(raw: i64) -> String {
        if raw < -ZERO_CELSIUS || raw > MAX_CELSIUS {
            let mut s = nano_as_string(raw);
            s.push('K');
            s
        } else {
            let mut s = nano_as_string(raw - ZERO_CELSIUS);
            s.push_str("°C");
            s
        }
    }
}

/// A measurement of hotness.
pub type Temperature = Quantity<Kelvin>;

impl Quantity<Kelvin> {
    pub const NANO_KELVIN: Temperature = Temperature::from_raw(1);
    pub const MICRO_KELVIN: Temperature = Temperature::from_raw(1_000);
    pub const MILLI_KELVIN: Temperature = Temperature::from_raw(1_000_000);
    pub const KELVIN: Temperature = Temperature::from_raw(1_000_000_000);
    pub const KILO_KELVIN: Temperature = Temperature::from_raw(1_000_000_000_000);
    pub const MEGA_KELVIN: Temperature = Temperature::from_raw(1_000_000_000_000_000);
    pub const GIGA_KELVIN: Temperature = Temperature::from_raw(1_000_000_000_000_000_000);

    // Conversion between Kelvin and Celsius.
    pub const ZERO_CELSIUS: Temperature = Temperature::from_raw(ZERO_CELSIUS);
    pub const MILLI_CELSIUS: Temperature = Temperature::MILLI_KELVIN;
    pub const CELSIUS: Temperature = Temperature::KELVIN;

    // Conversion between Kelvin and Fahrenheit.
    pub const ZERO_FAHRENHEIT: Temperature = Temperature::from_raw(ZERO_FAHRENHEIT);
    pub const MILLI_FAHRENHEIT: Temperature = Temperature::from_raw(555_555);
    pub const FAHRENHEIT: Temperature = Temperature::from_raw(FAHRENHEIT_STEP);

    /// The temperature as a floating point number of kelvin.
    pub fn kelvin(self) -> f64 {
        self.raw() as f64 / Self::KELVIN.raw() as f64
    }

    /// The temperature as a floating point number of °Celsius.
    pub fn celsius(self) -> f64 {
        (self.raw() - ZERO_CELSIUS) as f64 / Self::CELSIUS.raw() as f64
    }

    /// The temperature as a floating point number of °Fahrenheit.
    pub fn fahrenheit(self) -> f64 {
        (self.raw() - ZERO_FAHRENHEIT) as f64 / Self::FAHRENHEIT.raw() as f64
    }
}
