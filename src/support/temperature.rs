//! Temperature readings validated against absolute zero.
//!
//! A [`Temperature`] pairs a [`Scale`] with a reading in that scale's unit.
//! Construction rejects any reading colder than the scale's absolute zero, so
//! every `Temperature` in existence is physically meaningful.
//!
//! Readings that land on absolute zero only up to floating-point noise (for
//! example `-7.6e-14 K` after converting `559.725 °De`) are clamped to the
//! exact boundary instead of being rejected.

use std::fmt;

use thiserror::Error;
use tracing::trace;
use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};

use super::scale::Scale;

/// Tolerance used when deciding whether a reading sits on absolute zero.
pub const EQUALITY_THRESHOLD: f64 = 1e-12;

/// Errors returned when a reading is not a valid temperature.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TemperatureError {
    /// The reading is colder than the scale's absolute zero.
    #[error(
        "temperature below absolute zero: {value} {unit} is colder than {threshold} {unit}",
        unit = .scale.unit()
    )]
    BelowAbsoluteZero {
        scale: Scale,
        value: f64,
        threshold: f64,
    },

    /// The reading is `NaN`.
    #[error("temperature is not a number ({scale})")]
    NotANumber { scale: Scale },
}

/// A reading in a specific temperature scale, never below absolute zero.
///
/// # Example
///
/// ```
/// use tempconv::{Scale, Temperature};
///
/// let t = Temperature::new(Scale::Celsius, -273.15).unwrap();
/// assert_eq!(t.in_kelvin(), 0.0);
///
/// assert!(Temperature::new(Scale::Celsius, -300.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Temperature {
    scale: Scale,
    value: f64,
}

impl Temperature {
    /// Creates a temperature, validating it against the scale's absolute zero.
    ///
    /// # Errors
    ///
    /// Returns [`TemperatureError::BelowAbsoluteZero`] if the reading is colder
    /// than absolute zero, or [`TemperatureError::NotANumber`] for `NaN`.
    pub fn new(scale: Scale, value: f64) -> Result<Self, TemperatureError> {
        let value = check_absolute_zero(scale, value)?;
        Ok(Self { scale, value })
    }

    /// Expresses an absolute temperature quantity in the given scale.
    ///
    /// # Errors
    ///
    /// Returns a [`TemperatureError`] if the quantity is below absolute zero
    /// or not a number.
    pub fn from_quantity(
        quantity: ThermodynamicTemperature,
        scale: Scale,
    ) -> Result<Self, TemperatureError> {
        Self::new(scale, scale.from_kelvin(quantity.get::<kelvin>()))
    }

    /// Returns the scale of this reading.
    #[must_use]
    pub fn scale(&self) -> Scale {
        self.scale
    }

    /// Returns the reading in the scale's own unit.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns the reading converted to Kelvin, without validation.
    #[must_use]
    pub fn in_kelvin(&self) -> f64 {
        self.scale.to_kelvin(self.value)
    }

    /// Returns the reading as a [`uom`] absolute temperature.
    #[must_use]
    pub fn to_quantity(&self) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(self.in_kelvin())
    }
}

impl From<Temperature> for ThermodynamicTemperature {
    fn from(temperature: Temperature) -> Self {
        temperature.to_quantity()
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.scale.unit())
    }
}

/// Validates `value` against the absolute zero of `scale`.
///
/// Inverted scales are negated so that the same "not below the floor" rule
/// applies to every scale.
fn check_absolute_zero(scale: Scale, value: f64) -> Result<f64, TemperatureError> {
    if value.is_nan() {
        return Err(TemperatureError::NotANumber { scale });
    }

    let threshold = scale.absolute_zero();
    let checked = if scale.is_inverted() {
        at_or_above_floor(-value, -threshold).map(|t| -t)
    } else {
        at_or_above_floor(value, threshold)
    };

    checked.ok_or(TemperatureError::BelowAbsoluteZero {
        scale,
        value,
        threshold,
    })
}

/// Returns `t` if it is not below `floor`, or `floor` itself if `t` differs
/// from it only by rounding noise across a sign change.
fn at_or_above_floor(t: f64, floor: f64) -> Option<f64> {
    if t.is_sign_negative() != floor.is_sign_negative() && (t - floor).abs() < EQUALITY_THRESHOLD {
        trace!(t, floor, "clamped reading to absolute zero");
        Some(floor)
    } else if t < floor {
        None
    } else {
        Some(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::thermodynamic_temperature::{degree_celsius, degree_fahrenheit};

    /// One representable step past absolute zero, in the cold direction.
    fn just_below_zero(scale: Scale) -> f64 {
        if scale.is_inverted() {
            scale.absolute_zero() + EQUALITY_THRESHOLD
        } else {
            scale.absolute_zero() - EQUALITY_THRESHOLD
        }
    }

    #[test]
    fn accepts_absolute_zero_exactly() -> Result<(), TemperatureError> {
        for scale in Scale::ALL {
            let t = Temperature::new(scale, scale.absolute_zero())?;
            assert_eq!(t.value(), scale.absolute_zero());
            assert_eq!(t.scale(), scale);
        }
        Ok(())
    }

    #[test]
    fn rejects_below_absolute_zero() {
        for scale in Scale::ALL {
            let value = just_below_zero(scale);
            assert_eq!(
                Temperature::new(scale, value),
                Err(TemperatureError::BelowAbsoluteZero {
                    scale,
                    value,
                    threshold: scale.absolute_zero(),
                })
            );
        }
    }

    #[test]
    fn delisle_rejects_high_readings() {
        assert!(Temperature::new(Scale::Delisle, 600.0).is_err());
        assert!(Temperature::new(Scale::Delisle, -600.0).is_ok());
        assert!(Temperature::new(Scale::Delisle, 559.0).is_ok());
    }

    #[test]
    fn clamps_rounding_noise_across_zero() -> Result<(), TemperatureError> {
        let t = Temperature::new(Scale::Kelvin, -7.579_122_514_774_402e-14)?;
        assert_eq!(t.value(), 0.0);
        assert!(t.value().is_sign_positive());

        let t = Temperature::new(Scale::Rankine, -0.0)?;
        assert!(t.value().is_sign_positive());

        Ok(())
    }

    #[test]
    fn does_not_clamp_without_sign_change() {
        // Same sign as the threshold, so noise below it is still rejected.
        assert!(Temperature::new(Scale::Celsius, -273.150_000_000_000_1).is_err());
    }

    #[test]
    fn rejects_nan() {
        assert_eq!(
            Temperature::new(Scale::Newton, f64::NAN),
            Err(TemperatureError::NotANumber {
                scale: Scale::Newton
            })
        );
    }

    #[test]
    fn accepts_infinity() {
        assert!(Temperature::new(Scale::Kelvin, f64::INFINITY).is_ok());
        assert!(Temperature::new(Scale::Kelvin, f64::NEG_INFINITY).is_err());
        assert!(Temperature::new(Scale::Delisle, f64::NEG_INFINITY).is_ok());
    }

    #[test]
    fn display() -> Result<(), TemperatureError> {
        assert_eq!(Temperature::new(Scale::Celsius, -40.0)?.to_string(), "-40 °C");
        assert_eq!(Temperature::new(Scale::Romer, 7.5)?.to_string(), "7.5 °Rø");

        let err = Temperature::new(Scale::Kelvin, -1.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "temperature below absolute zero: -1 K is colder than 0 K"
        );
        Ok(())
    }

    #[test]
    fn quantities() -> Result<(), TemperatureError> {
        let body = ThermodynamicTemperature::new::<degree_celsius>(37.0);
        let t = Temperature::from_quantity(body, Scale::Fahrenheit)?;
        assert_relative_eq!(t.value(), 98.6, epsilon = 1e-9);

        let back: ThermodynamicTemperature = t.into();
        assert_relative_eq!(back.get::<degree_fahrenheit>(), 98.6, epsilon = 1e-9);
        assert_relative_eq!(back.get::<kelvin>(), 310.15, epsilon = 1e-9);

        let cold = ThermodynamicTemperature::new::<kelvin>(-5.0);
        assert!(Temperature::from_quantity(cold, Scale::Delisle).is_err());
        Ok(())
    }
}
