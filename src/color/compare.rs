//! Per-pixel comparison helpers
//!
//! Building blocks for comparators that decide whether a captured pixel
//! matches a baseline pixel within a tolerance given as a canonical color,
//! and for compositors that paint highlight colors onto a diff image.

use super::CanonicalColor;
use crate::constants::channels;

impl CanonicalColor {
    /// Absolute per-channel difference, `[red, green, blue, alpha]`
    pub fn channel_delta(&self, other: &CanonicalColor) -> [u8; 4] {
        let a = self.to_array();
        let b = other.to_array();
        std::array::from_fn(|i| a[i].abs_diff(b[i]))
    }

    /// Check whether every channel differs by no more than the matching
    /// tolerance channel
    ///
    /// A tolerance of `[0, 0, 0, 255]` (the normalized form of grayscale `0`)
    /// requires identical RGB and ignores alpha.
    pub fn within_tolerance(&self, other: &CanonicalColor, tolerance: &CanonicalColor) -> bool {
        self.channel_delta(other)
            .iter()
            .zip(tolerance.to_array())
            .all(|(&delta, limit)| delta <= limit)
    }

    /// Composite this color over `background` (straight alpha, source-over)
    pub fn blend_over(&self, background: &CanonicalColor) -> CanonicalColor {
        let max = f32::from(channels::MAX);
        let src_a = f32::from(self.alpha) / max;
        let dst_a = f32::from(background.alpha) / max;
        let out_a = src_a + dst_a * (1.0 - src_a);

        if out_a <= 0.0 {
            return CanonicalColor::new(0, 0, 0, 0);
        }

        let mix = |src: u8, dst: u8| -> u8 {
            let value = (f32::from(src) * src_a + f32::from(dst) * dst_a * (1.0 - src_a)) / out_a;
            value.round().clamp(0.0, max) as u8
        };

        CanonicalColor::new(
            mix(self.red, background.red),
            mix(self.green, background.green),
            mix(self.blue, background.blue),
            (out_a * max).round() as u8,
        )
    }
}
