//! Conversions between canonical colors and other representations
//!
//! Provides:
//! - Hex string output that the normalizer reads back
//! - `image::Rgba<u8>` for pixel buffers handed to diff compositors
//! - `palette::Srgba<u8>` and CIE Lab for perceptual distance

use palette::{FromColor, Lab, Srgb, Srgba};

use super::CanonicalColor;

impl CanonicalColor {
    /// Convert to a hexadecimal color string
    ///
    /// # Returns
    ///
    /// Hex color string with alpha (e.g., "#FF000080")
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02X}{:02X}{:02X}{:02X}",
            self.red, self.green, self.blue, self.alpha
        )
    }

    /// Convert the RGB part to Lab color space (D65), ignoring alpha
    pub fn to_lab(&self) -> Lab {
        let srgb: Srgb<f32> = Srgb::new(self.red, self.green, self.blue).into_format();
        Lab::from_color(srgb)
    }

    /// Compute Delta E (color difference) between the RGB parts of two colors
    ///
    /// Uses simple Euclidean distance in Lab (ΔE76)
    ///
    /// # Returns
    ///
    /// Color difference value; 0.0 for identical RGB
    pub fn delta_e(&self, other: &CanonicalColor) -> f32 {
        let lab1 = self.to_lab();
        let lab2 = other.to_lab();
        let dl = lab1.l - lab2.l;
        let da = lab1.a - lab2.a;
        let db = lab1.b - lab2.b;
        (dl * dl + da * da + db * db).sqrt()
    }
}

impl From<CanonicalColor> for image::Rgba<u8> {
    fn from(color: CanonicalColor) -> Self {
        image::Rgba(color.to_array())
    }
}

impl From<image::Rgba<u8>> for CanonicalColor {
    fn from(pixel: image::Rgba<u8>) -> Self {
        Self::from(pixel.0)
    }
}

impl From<CanonicalColor> for Srgba<u8> {
    fn from(color: CanonicalColor) -> Self {
        Srgba::new(color.red, color.green, color.blue, color.alpha)
    }
}

impl From<Srgba<u8>> for CanonicalColor {
    fn from(color: Srgba<u8>) -> Self {
        Self::new(color.red, color.green, color.blue, color.alpha)
    }
}
