use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

use super::Scale;

/// Errors returned when a scale name cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScaleError {
    /// No scale name or alias starts with the given text.
    #[error("unknown temperature scale: {name}")]
    Unknown { name: String },

    /// More than one scale name or alias starts with the given text.
    #[error("ambiguous temperature scale: {name}, matches: {}", .candidates.join(", "))]
    Ambiguous {
        name: String,
        candidates: Vec<&'static str>,
    },
}

/// Returns every scale's name and alias, in display order.
#[must_use]
pub fn list_scales() -> [(&'static str, Option<&'static str>); 8] {
    Scale::ALL.map(|scale| (scale.name(), scale.alias()))
}

/// Returns all names and aliases as one flat sequence, in display order.
#[must_use]
pub fn scale_names() -> impl Iterator<Item = &'static str> {
    Scale::ALL.into_iter().flat_map(Scale::names)
}

/// Resolves a possibly abbreviated, case-insensitive scale name.
///
/// The input matches a scale when it is a prefix of the scale's name or
/// alias. An empty input matches nothing.
///
/// # Errors
///
/// Returns [`ScaleError::Unknown`] if nothing matches, and
/// [`ScaleError::Ambiguous`] with every matching name if more than one does.
pub fn resolve_scale(prefix: &str) -> Result<Scale, ScaleError> {
    let needle = prefix.to_lowercase();

    let matches: Vec<(Scale, &'static str)> = if needle.is_empty() {
        Vec::new()
    } else {
        Scale::ALL
            .into_iter()
            .flat_map(|scale| scale.names().map(move |name| (scale, name)))
            .filter(|(_, name)| name.starts_with(&needle))
            .collect()
    };

    match matches.as_slice() {
        [] => Err(ScaleError::Unknown {
            name: prefix.to_owned(),
        }),
        [(scale, _)] => {
            debug!(prefix, scale = %scale, "resolved temperature scale");
            Ok(*scale)
        }
        _ => Err(ScaleError::Ambiguous {
            name: prefix.to_owned(),
            candidates: matches.iter().map(|(_, name)| *name).collect(),
        }),
    }
}

impl FromStr for Scale {
    type Err = ScaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        resolve_scale(s)
    }
}
