use thiserror::Error;

use crate::support::{scale::Scale, temperature::TemperatureError};

/// A conversion step produced an invalid reading.
///
/// No converted value is returned when this occurs.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("invalid conversion from {from} to {to}: {source}")]
pub struct ConversionError {
    /// Scale of the reading being converted.
    pub from: Scale,

    /// Scale the failing step converted into.
    pub to: Scale,

    /// The validation failure.
    #[source]
    pub source: TemperatureError,
}

impl ConversionError {
    pub(super) fn new(from: Scale, to: Scale, source: TemperatureError) -> Self {
        Self { from, to, source }
    }
}
