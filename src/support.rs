//! Supporting types for temperature conversion.
//!
//! - [`scale`]: The fixed set of supported scales and their constants.
//! - [`temperature`]: Readings validated against a scale's absolute zero.
//! - [`format`]: Fixed-precision output of converted readings.

pub mod format;
pub mod scale;
pub mod temperature;
