//! # tempconv
//!
//! Convert temperatures between eight scales: Kelvin, Celsius, Fahrenheit,
//! Rankine, Delisle, Newton, Réaumur and Rømer.
//!
//! ## Crate layout
//!
//! - [`models`]: The conversion engine, exposed as a plain function and as a
//!   [`twine_core::Model`] implementation.
//! - [`support`]: The scale registry, validated temperature values and output
//!   formatting used by the engine and the `tempconv` binary.
//!
//! Every conversion is routed through Kelvin, and every reading is checked
//! against the absolute zero of the scale it is expressed in.
//!
//! ```
//! use tempconv::{convert, Scale, Temperature};
//!
//! let boiling = Temperature::new(Scale::Celsius, 100.0).unwrap();
//! let converted = convert(boiling, Scale::Fahrenheit).unwrap();
//! assert!((converted.value() - 212.0).abs() < 1e-9);
//! ```

pub mod models;
pub mod support;

pub use models::conversion::{Conversion, ConversionError, convert};
pub use support::format::{Formatted, Precision, PrecisionError};
pub use support::scale::{Scale, ScaleError, list_scales, resolve_scale, scale_names};
pub use support::temperature::{Temperature, TemperatureError};
