//! Fixed-precision output of temperature readings.

use std::{fmt, num::ParseIntError, str::FromStr};

use thiserror::Error;

use super::temperature::Temperature;

/// Errors returned when a number of decimal places is invalid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrecisionError {
    #[error("invalid number of decimal places: {value}, must be between 0 and {max}", max = Precision::MAX)]
    OutOfRange { value: i64 },
    #[error("invalid number of decimal places: {0}")]
    Invalid(#[from] ParseIntError),
}

/// Number of decimal places used when printing a reading.
///
/// Always within `0..=12`; defaults to 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Precision(u8);

impl Precision {
    /// The largest supported number of decimal places.
    pub const MAX: u8 = 12;

    /// Creates a precision of `places` decimal places.
    ///
    /// # Errors
    ///
    /// Returns [`PrecisionError::OutOfRange`] if `places` is negative or
    /// greater than [`Precision::MAX`].
    pub fn new(places: i64) -> Result<Self, PrecisionError> {
        u8::try_from(places)
            .ok()
            .filter(|&p| p <= Self::MAX)
            .map(Self)
            .ok_or(PrecisionError::OutOfRange { value: places })
    }

    /// Returns the number of decimal places.
    #[must_use]
    pub fn places(self) -> usize {
        usize::from(self.0)
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self(2)
    }
}

impl FromStr for Precision {
    type Err = PrecisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.trim().parse()?)
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Display adapter printing a reading with a fixed number of decimals,
/// optionally followed by the unit symbol.
///
/// # Example
///
/// ```
/// use tempconv::{Formatted, Precision, Scale, Temperature};
///
/// let t = Temperature::new(Scale::Fahrenheit, 32.0).unwrap();
/// let precision = Precision::new(1).unwrap();
/// assert_eq!(Formatted::new(t, precision).with_unit(true).to_string(), "32.0 °F");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Formatted {
    temperature: Temperature,
    precision: Precision,
    unit: bool,
}

impl Formatted {
    /// Formats `temperature` with `precision` decimal places and no unit.
    #[must_use]
    pub fn new(temperature: Temperature, precision: Precision) -> Self {
        Self {
            temperature,
            precision,
            unit: false,
        }
    }

    /// Appends the unit symbol when `unit` is `true`.
    #[must_use]
    pub fn with_unit(mut self, unit: bool) -> Self {
        self.unit = unit;
        self
    }
}

impl fmt::Display for Formatted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let places = self.precision.places();
        let value = self.temperature.value();
        if self.unit {
            write!(f, "{value:.places$} {}", self.temperature.scale().unit())
        } else {
            write!(f, "{value:.places$}")
        }
    }
}
