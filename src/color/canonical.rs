//! Canonical 4-channel color value
//!
//! Every descriptor resolves to a [`CanonicalColor`]: red, green, blue and
//! alpha as 8-bit integers. Downstream pixel comparison only ever sees this
//! type.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{channels, DEFAULT_CHANNELS};
use crate::{ColorError, Result};

/// Normalized `[red, green, blue, alpha]` color, each channel in [0, 255]
///
/// Serializes as a plain 4-element array so it can be fed straight back into
/// the array descriptor path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 4]", into = "[u8; 4]")]
pub struct CanonicalColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Default for CanonicalColor {
    fn default() -> Self {
        Self::from(DEFAULT_CHANNELS)
    }
}

impl CanonicalColor {
    /// Create a color from explicit channels
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Build a color from up to four leading channels, filling the missing
    /// trailing channels from [`DEFAULT_CHANNELS`] by position.
    ///
    /// # Errors
    ///
    /// Returns `TooManyChannels` for more than four values and
    /// `NonFiniteChannel` if a supplied value is NaN or infinite.
    pub fn from_partial(values: &[f64]) -> Result<Self> {
        if values.len() > channels::COUNT {
            return Err(ColorError::TooManyChannels {
                count: values.len(),
            });
        }

        let mut rgba = DEFAULT_CHANNELS;
        for (slot, &value) in rgba.iter_mut().zip(values) {
            *slot = to_channel(value)?;
        }
        Ok(Self::from(rgba))
    }

    /// Channels in `[red, green, blue, alpha]` order
    pub const fn to_array(self) -> [u8; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    /// Whether the alpha channel is fully opaque
    pub const fn is_opaque(&self) -> bool {
        self.alpha == channels::MAX
    }
}

/// Convert a computed channel value to 8 bits.
///
/// Rounds half away from zero and saturates to [0, 255]; descriptor values
/// are not otherwise range checked.
pub(crate) fn to_channel(value: f64) -> Result<u8> {
    if !value.is_finite() {
        return Err(ColorError::NonFiniteChannel { value });
    }
    Ok(value.round().clamp(0.0, f64::from(channels::MAX)) as u8)
}

impl From<[u8; 4]> for CanonicalColor {
    fn from([red, green, blue, alpha]: [u8; 4]) -> Self {
        Self::new(red, green, blue, alpha)
    }
}

impl From<CanonicalColor> for [u8; 4] {
    fn from(color: CanonicalColor) -> Self {
        color.to_array()
    }
}

impl fmt::Display for CanonicalColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}, {}]",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_opaque_black() {
        assert_eq!(CanonicalColor::default(), CanonicalColor::new(0, 0, 0, 255));
        assert!(CanonicalColor::default().is_opaque());
    }

    #[test]
    fn test_from_partial_pads_alpha() {
        let color = CanonicalColor::from_partial(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(color.to_array(), [1, 2, 3, 255]);
    }

    #[test]
    fn test_from_partial_pads_every_missing_channel() {
        assert_eq!(
            CanonicalColor::from_partial(&[]).unwrap().to_array(),
            [0, 0, 0, 255]
        );
        assert_eq!(
            CanonicalColor::from_partial(&[9.0]).unwrap().to_array(),
            [9, 0, 0, 255]
        );
    }

    #[test]
    fn test_from_partial_keeps_supplied_channels() {
        let color = CanonicalColor::from_partial(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(color.to_array(), [1, 2, 3, 4]);
    }

    #[test]
    fn test_from_partial_rejects_extra_channels() {
        let err = CanonicalColor::from_partial(&[1.0; 5]).unwrap_err();
        assert!(matches!(err, ColorError::TooManyChannels { count: 5 }));
    }

    #[test]
    fn test_channel_conversion_saturates_and_rounds() {
        assert_eq!(to_channel(300.0).unwrap(), 255);
        assert_eq!(to_channel(-12.0).unwrap(), 0);
        assert_eq!(to_channel(127.5).unwrap(), 128);
        assert_eq!(to_channel(76.8).unwrap(), 77);
        assert!(to_channel(f64::NAN).is_err());
        assert!(to_channel(f64::INFINITY).is_err());
    }

    #[test]
    fn test_serializes_as_array() {
        let color = CanonicalColor::new(10, 20, 30, 40);
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "[10,20,30,40]");

        let back: CanonicalColor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, color);
    }

    #[test]
    fn test_display() {
        assert_eq!(CanonicalColor::new(1, 2, 3, 4).to_string(), "[1, 2, 3, 4]");
    }
}
