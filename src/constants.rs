//! Channel defaults and parsing constants
//!
//! Read-only values shared by the normalizer and the comparison helpers.

/// Canonical channel layout
pub mod channels {
    /// Number of channels in a canonical color (red, green, blue, alpha)
    pub const COUNT: usize = 4;

    /// Per-channel defaults applied when a descriptor omits a channel:
    /// opaque black.
    pub const DEFAULTS: [u8; COUNT] = [0, 0, 0, 0xff];

    /// Largest value a channel may hold
    pub const MAX: u8 = 0xff;

    /// Index of the alpha channel
    pub const ALPHA: usize = 3;
}

/// Re-export channel defaults at top level for convenience
pub const DEFAULT_CHANNELS: [u8; channels::COUNT] = channels::DEFAULTS;

/// String descriptor parsing parameters
pub mod parsing {
    /// Leading character of a hex color
    pub const HEX_PREFIX: char = '#';

    /// Cleaned hex length at which digits are read in pairs instead of singly
    pub const PAIRED_HEX_MIN_LEN: usize = 6;

    /// Multiplier applied to fractional rgb()/rgba() components
    pub const FRACTION_SCALE: f64 = 256.0;

    /// Upper clamp applied to scaled fractional components
    pub const FRACTION_MAX: f64 = 255.0;

    /// Unanchored pattern for rgb()/rgba() strings
    pub const FUNCTIONAL_PATTERN: &str = r"rgba?\(([^)]*)\)";
}
