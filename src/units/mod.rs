// ============================================================================
// Units Module
// One descriptor per physical unit, plus the fixed point humidity type
// ============================================================================

pub mod angle;
pub mod distance;
pub mod electrical;
pub mod energy;
pub mod force;
pub mod frequency;
pub mod humidity;
pub mod mass;
pub mod photometry;
pub mod power;
pub mod pressure;
pub mod speed;
pub mod temperature;
pub mod volume;

pub use angle::{Angle, Radian};
pub use distance::{Distance, Metre};
pub use electrical::{
    Ampere, ElectricCurrent, ElectricPotential, ElectricResistance, ElectricalCapacitance, Farad,
    MagneticFluxDensity, Ohm, Tesla, Volt,
};
pub use energy::{Energy, Joule};
pub use force::{Force, Newton};
pub use frequency::{Frequency, Hertz};
pub use humidity::RelativeHumidity;
pub use mass::{Gram, Mass};
pub use photometry::{Candela, Lumen, LuminousFlux, LuminousIntensity};
pub use power::{Power, Watt};
pub use pressure::{Pascal, Pressure};
pub use speed::{MetrePerSecond, Speed};
pub use temperature::{Kelvin, Temperature};
pub use volume::{Litre, Volume};
