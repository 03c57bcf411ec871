//! Conversion between temperature scales.
//!
//! This module provides [`convert`] and the [`Conversion`] model, a
//! [`twine_core::Model`] with a fixed destination scale. Both route every
//! reading through Kelvin and validate it on each leg.
//!
//! # Example
//!
//! ```
//! use tempconv::{Conversion, Scale, Temperature};
//! use twine_core::Model;
//!
//! let to_kelvin = Conversion::new(Scale::Kelvin);
//! let freezing = Temperature::new(Scale::Fahrenheit, 32.0).unwrap();
//! let result = to_kelvin.call(&freezing).unwrap();
//! assert!((result.value() - 273.15).abs() < 1e-9);
//! ```

mod core;
mod error;

use twine_core::Model;

use crate::support::{scale::Scale, temperature::Temperature};

pub use error::ConversionError;

/// Converts `source` into the `destination` scale.
///
/// # Errors
///
/// Returns a [`ConversionError`] if the reading falls below absolute zero
/// in Kelvin or in the destination scale.
pub fn convert(source: Temperature, destination: Scale) -> Result<Temperature, ConversionError> {
    core::convert(source, destination)
}

/// Model converting any temperature into a fixed destination scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conversion {
    destination: Scale,
}

impl Conversion {
    /// Creates a model converting into `destination`.
    #[must_use]
    pub fn new(destination: Scale) -> Self {
        Self { destination }
    }

    /// Returns the scale this model converts into.
    #[must_use]
    pub fn destination(&self) -> Scale {
        self.destination
    }
}

impl Model for Conversion {
    type Input = Temperature;
    type Output = Temperature;
    type Error = ConversionError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        core::convert(*input, self.destination)
    }
}
