use crate::consts::C0;
use crate::error::{MediaError, MediaResult};
use serde::Serialize;
use simple_error::{bail, SimpleError};
use std::fmt;
use std::str::FromStr;

/// Descriptor of sweep type
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub enum Sweep {
    #[default]
    Linear,
    Log,
}

/// Units a physical distance may be given in. The time units are
/// free-space time of flight and convert through the speed of light.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub enum DistanceUnit {
    #[default]
    Meter,
    Centimeter,
    Millimeter,
    Micrometer,
    Inch,
    Mil,
    Second,
    Microsecond,
    Nanosecond,
    Picosecond,
}

impl DistanceUnit {
    pub fn to_str(&self) -> &str {
        match self {
            DistanceUnit::Meter => "m",
            DistanceUnit::Centimeter => "cm",
            DistanceUnit::Millimeter => "mm",
            DistanceUnit::Micrometer => "um",
            DistanceUnit::Inch => "in",
            DistanceUnit::Mil => "mil",
            DistanceUnit::Second => "s",
            DistanceUnit::Microsecond => "us",
            DistanceUnit::Nanosecond => "ns",
            DistanceUnit::Picosecond => "ps",
        }
    }

    /// Meters per unit
    pub fn meters(&self) -> f64 {
        match self {
            DistanceUnit::Meter => 1.0,
            DistanceUnit::Centimeter => 1e-2,
            DistanceUnit::Millimeter => 1e-3,
            DistanceUnit::Micrometer => 1e-6,
            DistanceUnit::Inch => 0.0254,
            DistanceUnit::Mil => 2.54e-5,
            DistanceUnit::Second => C0,
            DistanceUnit::Microsecond => 1e-6 * C0,
            DistanceUnit::Nanosecond => 1e-9 * C0,
            DistanceUnit::Picosecond => 1e-12 * C0,
        }
    }

    pub fn to_meters(&self, d: f64) -> f64 {
        self.meters() * d
    }
}

impl FromStr for DistanceUnit {
    type Err = SimpleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "m" => Ok(DistanceUnit::Meter),
            "cm" => Ok(DistanceUnit::Centimeter),
            "mm" => Ok(DistanceUnit::Millimeter),
            "um" => Ok(DistanceUnit::Micrometer),
            "in" => Ok(DistanceUnit::Inch),
            "mil" => Ok(DistanceUnit::Mil),
            "s" => Ok(DistanceUnit::Second),
            "us" => Ok(DistanceUnit::Microsecond),
            "ns" => Ok(DistanceUnit::Nanosecond),
            "ps" => Ok(DistanceUnit::Picosecond),
            _ => bail!("distance unit not recognized"),
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

/// Translate a distance given in `unit` into meters.
///
/// ```
/// use rfkit_media::unit::to_meters;
///
/// assert_eq!(to_meters(10.0, "mm").unwrap(), 10e-3);
/// assert!(to_meters(1.0, "furlong").is_err());
/// ```
pub fn to_meters(d: f64, unit: &str) -> MediaResult<f64> {
    let unit =
        DistanceUnit::from_str(unit).map_err(|_| MediaError::InvalidUnit(unit.to_string()))?;
    Ok(unit.to_meters(d))
}
