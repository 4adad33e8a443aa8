//! Descriptor normalization
//!
//! Resolves any [`ColorDescriptor`] to a [`CanonicalColor`]. Shapes are
//! checked in a fixed order (number, string, array, object) and the first
//! match decides which parser runs.

use log::debug;
use serde_json::Value;

use super::parse::parse_channels;
use super::{canonical::to_channel, CanonicalColor, ColorDescriptor, ComponentObject};
use crate::constants::{channels, DEFAULT_CHANNELS};
use crate::Result;

/// Stateless color descriptor normalizer
///
/// Holds no data; every call works only on its own input, so one instance can
/// be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorNormalizer;

impl ColorNormalizer {
    /// Create a new normalizer
    pub fn new() -> Self {
        Self
    }

    /// Normalize a typed descriptor
    ///
    /// # Arguments
    ///
    /// * `descriptor` - Grayscale number, hex or rgb()/rgba() text, channel
    ///   array, or component object
    ///
    /// # Returns
    ///
    /// The canonical `[red, green, blue, alpha]` color
    ///
    /// # Errors
    ///
    /// Returns an unrecognized-descriptor error (see
    /// [`ColorError::is_unrecognized_descriptor`](crate::ColorError::is_unrecognized_descriptor))
    /// if the text matches neither string form, a component cannot be parsed,
    /// more than four channels are supplied, or a channel is not finite.
    pub fn normalize(&self, descriptor: &ColorDescriptor) -> Result<CanonicalColor> {
        let result = match descriptor {
            ColorDescriptor::Grayscale(value) => grayscale(*value),
            ColorDescriptor::Text(text) => {
                parse_channels(text).and_then(|channels| CanonicalColor::from_partial(&channels))
            }
            ColorDescriptor::Channels(channels) => CanonicalColor::from_partial(channels),
            ColorDescriptor::Components(components) => from_components(components),
        };

        if let Err(err) = &result {
            debug!("could not normalize color descriptor {:?}: {}", descriptor, err);
        }
        result
    }

    /// Normalize an untyped JSON value by its runtime shape
    ///
    /// Booleans, null and arrays holding non-numbers are rejected as
    /// unrecognized shapes.
    pub fn normalize_value(&self, value: &Value) -> Result<CanonicalColor> {
        let descriptor = ColorDescriptor::try_from(value).inspect_err(|err| {
            debug!("could not classify color value {}: {}", value, err);
        })?;
        self.normalize(&descriptor)
    }
}

/// Normalize a descriptor with a default [`ColorNormalizer`]
pub fn normalize(descriptor: &ColorDescriptor) -> Result<CanonicalColor> {
    ColorNormalizer::new().normalize(descriptor)
}

/// Normalize an untyped JSON value with a default [`ColorNormalizer`]
pub fn normalize_value(value: &Value) -> Result<CanonicalColor> {
    ColorNormalizer::new().normalize_value(value)
}

fn grayscale(value: f64) -> Result<CanonicalColor> {
    let level = to_channel(value)?;
    Ok(CanonicalColor::new(level, level, level, DEFAULT_CHANNELS[channels::ALPHA]))
}

// A channel set to zero (or NaN) counts as absent and takes the default,
// so `{alpha: 0}` comes out opaque.
fn from_components(components: &ComponentObject) -> Result<CanonicalColor> {
    let mut rgba = [0.0; 4];
    for ((slot, value), default) in rgba
        .iter_mut()
        .zip(components.to_options())
        .zip(DEFAULT_CHANNELS)
    {
        *slot = match value {
            Some(v) if v != 0.0 && !v.is_nan() => v,
            _ => f64::from(default),
        };
    }
    CanonicalColor::from_partial(&rgba)
}
