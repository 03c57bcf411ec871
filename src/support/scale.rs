//! The fixed set of supported temperature scales.
//!
//! Each [`Scale`] carries its display name, an optional ASCII alias, a unit
//! symbol, the reading at absolute zero, and a pair of affine formulas to and
//! from Kelvin, the pivot unit every conversion passes through.
//!
//! | Scale      | Unit | Absolute zero |
//! |------------|------|---------------|
//! | Kelvin     | K    | 0             |
//! | Celsius    | °C   | −273.15       |
//! | Fahrenheit | °F   | −459.67       |
//! | Rankine    | °R   | 0             |
//! | Delisle    | °De  | 559.725       |
//! | Newton     | °N   | −90.1395      |
//! | Réaumur    | °Ré  | −218.52       |
//! | Rømer      | °Rø  | −135.90375    |
//!
//! Delisle is inverted: its readings grow as temperature falls, so its
//! absolute zero is an upper bound rather than a lower one.
//!
//! Scales are looked up by name with [`resolve_scale`], which accepts any
//! unambiguous, case-insensitive prefix of a name or alias.

mod registry;

use std::fmt;

pub use registry::{ScaleError, list_scales, resolve_scale, scale_names};

/// Kelvin reading of the ice point (0 °C).
const ICE_POINT: f64 = 273.15;

/// Kelvin reading of the steam point (100 °C).
const STEAM_POINT: f64 = 373.15;

/// Fahrenheit reading at absolute zero, magnitude only.
const RANKINE_OFFSET: f64 = 459.67;

/// Rømer reading of the ice point.
const ROMER_ICE_POINT: f64 = 7.5;

/// One of the supported temperature scales.
///
/// The set is closed: every scale is listed in [`Scale::ALL`] in the order
/// used for display and name resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scale {
    Kelvin,
    Celsius,
    Fahrenheit,
    Rankine,
    Delisle,
    Newton,
    Reaumur,
    Romer,
}

impl Scale {
    /// All scales, in display order.
    pub const ALL: [Scale; 8] = [
        Scale::Kelvin,
        Scale::Celsius,
        Scale::Fahrenheit,
        Scale::Rankine,
        Scale::Delisle,
        Scale::Newton,
        Scale::Reaumur,
        Scale::Romer,
    ];

    /// Returns the canonical lower-case name of the scale.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Scale::Kelvin => "kelvin",
            Scale::Celsius => "celsius",
            Scale::Fahrenheit => "fahrenheit",
            Scale::Rankine => "rankine",
            Scale::Delisle => "delisle",
            Scale::Newton => "newton",
            Scale::Reaumur => "réaumur",
            Scale::Romer => "rømer",
        }
    }

    /// Returns the ASCII spelling of names containing accented characters.
    #[must_use]
    pub const fn alias(self) -> Option<&'static str> {
        match self {
            Scale::Reaumur => Some("reaumur"),
            Scale::Romer => Some("romer"),
            _ => None,
        }
    }

    /// Returns the canonical name followed by the alias, if any.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.name()).chain(self.alias())
    }

    /// Returns the unit symbol, e.g. `°C`.
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Scale::Kelvin => "K",
            Scale::Celsius => "°C",
            Scale::Fahrenheit => "°F",
            Scale::Rankine => "°R",
            Scale::Delisle => "°De",
            Scale::Newton => "°N",
            Scale::Reaumur => "°Ré",
            Scale::Romer => "°Rø",
        }
    }

    /// Returns the reading of absolute zero in this scale's own unit.
    #[must_use]
    pub const fn absolute_zero(self) -> f64 {
        match self {
            Scale::Kelvin | Scale::Rankine => 0.0,
            Scale::Celsius => -273.15,
            Scale::Fahrenheit => -459.67,
            Scale::Delisle => 559.725,
            Scale::Newton => -90.1395,
            Scale::Reaumur => -218.52,
            Scale::Romer => -135.903_75,
        }
    }

    /// Returns `true` if readings decrease as temperature rises.
    ///
    /// For an inverted scale the absolute zero is the largest valid reading.
    #[must_use]
    pub const fn is_inverted(self) -> bool {
        matches!(self, Scale::Delisle)
    }

    /// Converts a reading in this scale to Kelvin.
    #[must_use]
    pub fn to_kelvin(self, x: f64) -> f64 {
        match self {
            Scale::Kelvin => x,
            Scale::Celsius => x + ICE_POINT,
            Scale::Fahrenheit => (x * 5.0 + RANKINE_OFFSET * 5.0) / 9.0,
            Scale::Rankine => x * 5.0 / 9.0,
            Scale::Delisle => (STEAM_POINT * 3.0 - x * 2.0) / 3.0,
            Scale::Newton => (x * 100.0 + ICE_POINT * 33.0) / 33.0,
            Scale::Reaumur => (x * 5.0 + ICE_POINT * 4.0) / 4.0,
            Scale::Romer => (x * 40.0 - ROMER_ICE_POINT * 40.0 + ICE_POINT * 21.0) / 21.0,
        }
    }

    /// Converts a Kelvin reading to this scale.
    #[must_use]
    pub fn from_kelvin(self, k: f64) -> f64 {
        match self {
            Scale::Kelvin => k,
            Scale::Celsius => k - ICE_POINT,
            Scale::Fahrenheit => (k * 9.0 - RANKINE_OFFSET * 5.0) / 5.0,
            Scale::Rankine => k * 9.0 / 5.0,
            Scale::Delisle => (STEAM_POINT - k) * 3.0 / 2.0,
            Scale::Newton => (k - ICE_POINT) * 33.0 / 100.0,
            Scale::Reaumur => (k * 4.0 - ICE_POINT * 4.0) / 5.0,
            Scale::Romer => ((k * 21.0 - ICE_POINT * 21.0) + ROMER_ICE_POINT * 40.0) / 40.0,
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn absolute_zero_maps_to_zero_kelvin() {
        for scale in Scale::ALL {
            assert_relative_eq!(
                scale.to_kelvin(scale.absolute_zero()),
                0.0,
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn ice_point() {
        assert_relative_eq!(Scale::Celsius.from_kelvin(273.15), 0.0);
        assert_relative_eq!(Scale::Fahrenheit.from_kelvin(273.15), 32.0, epsilon = 1e-12);
        assert_relative_eq!(Scale::Rankine.from_kelvin(273.15), 491.67, epsilon = 1e-12);
        assert_relative_eq!(Scale::Delisle.from_kelvin(273.15), 150.0, epsilon = 1e-12);
        assert_relative_eq!(Scale::Newton.from_kelvin(273.15), 0.0);
        assert_relative_eq!(Scale::Reaumur.from_kelvin(273.15), 0.0);
        assert_relative_eq!(Scale::Romer.from_kelvin(273.15), 7.5, epsilon = 1e-12);
    }

    #[test]
    fn delisle_is_the_only_inverted_scale() {
        let inverted: Vec<_> = Scale::ALL.into_iter().filter(|s| s.is_inverted()).collect();
        assert_eq!(inverted, vec![Scale::Delisle]);

        // Colder reads higher.
        assert!(Scale::Delisle.from_kelvin(200.0) > Scale::Delisle.from_kelvin(300.0));
    }

    #[test]
    fn names_include_alias() {
        assert_eq!(Scale::Kelvin.names().collect::<Vec<_>>(), ["kelvin"]);
        assert_eq!(Scale::Romer.names().collect::<Vec<_>>(), ["rømer", "romer"]);
        assert_eq!(Scale::Reaumur.to_string(), "réaumur");
    }
}
