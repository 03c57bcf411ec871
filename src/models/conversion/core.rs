use tracing::debug;

use crate::support::{scale::Scale, temperature::Temperature};

use super::ConversionError;

/// Converts `source` to Kelvin, then into `destination`, validating both legs.
pub(super) fn convert(
    source: Temperature,
    destination: Scale,
) -> Result<Temperature, ConversionError> {
    let from = source.scale();

    let pivot = Temperature::new(Scale::Kelvin, source.in_kelvin())
        .map_err(|err| ConversionError::new(from, Scale::Kelvin, err))?;

    let converted = Temperature::new(destination, destination.from_kelvin(pivot.value()))
        .map_err(|err| ConversionError::new(from, destination, err))?;

    debug!(
        %from,
        to = %destination,
        input = source.value(),
        kelvin = pivot.value(),
        output = converted.value(),
        "converted temperature"
    );

    Ok(converted)
}
