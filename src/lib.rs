// ============================================================================
// Quantities Library
// Fixed-point physical quantities with SI-prefixed string conversion
// ============================================================================

//! # Quantities
//!
//! Strongly typed physical quantities stored as fixed-point integers.
//!
//! Each quantity is an `i64` count of a small sub-unit (nano metres, micro
//! hertz, pico farads) so values compare, add and hash exactly. No
//! floating point is involved in parsing or formatting.
//!
//! ## Features
//!
//! - **String parsing** of SI-prefixed values ("10mV", "1.5kΩ", "100µF")
//!   with stable, descriptive error messages
//! - **Imperial conversions** where the domain calls for them (miles,
//!   pounds, °F, mph) without leaving integer arithmetic
//! - **Display** renders the largest whole SI prefix to four significant
//!   digits ("1.5km", "33mA")
//! - **Optional serde** support serializing the raw sub-unit count
//!
//! ## Example
//!
//! ```rust
//! use quantities::prelude::*;
//!
//! let d: Distance = "2.5km".parse().unwrap();
//! assert_eq!(d, Distance::METRE * 2500);
//! assert_eq!(d.to_string(), "2.500km");
//!
//! let t: Temperature = "20C".parse().unwrap();
//! assert_eq!(t - Temperature::ZERO_CELSIUS, Temperature::CELSIUS * 20);
//!
//! let f: Frequency = "100Hz".parse().unwrap();
//! assert_eq!(f.period(), chrono::Duration::milliseconds(10));
//! ```

pub mod numeric;
pub mod quantity;
pub mod units;

// Re-exports for convenience
pub mod prelude {
    pub use crate::numeric::{ParseError, Prefix};
    pub use crate::quantity::{Quantity, Unit};
    pub use crate::units::{
        Angle, Distance, ElectricCurrent, ElectricPotential, ElectricResistance,
        ElectricalCapacitance, Energy, Force, Frequency, LuminousFlux, LuminousIntensity,
        MagneticFluxDensity, Mass, Power, Pressure, RelativeHumidity, Speed, Temperature, Volume,
    };
}
