//! Diff color configuration for the visual comparison pipeline.
//!
//! A comparison run needs a handful of colors: what to paint matching pixels
//! with, what to paint mismatches with, what to use where the baseline has no
//! pixel, and how far apart two pixels may be and still match. Each is given
//! as a [`ColorDescriptor`] so configuration files can use whichever form is
//! convenient.
//!
//! # Configuration Loading
//!
//! ```no_run
//! use visual_colors::DiffColorsConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = DiffColorsConfig::from_json_file(Path::new("colors.json"))?;
//! let palette = config.resolve()?;
//!
//! // Or use defaults
//! let palette = DiffColorsConfig::default().resolve()?;
//! # Ok::<(), visual_colors::ColorError>(())
//! ```

use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::color::{normalize, CanonicalColor, ColorDescriptor};
use crate::{ColorError, Result};

/// Diff color settings as written in a configuration file.
///
/// Missing fields take the values from [`Default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffColorsConfig {
    /// Painted where the captured pixel matches the baseline
    pub match_color: ColorDescriptor,

    /// Painted where the captured pixel differs from the baseline
    pub mismatch_color: ColorDescriptor,

    /// Painted where the baseline has no pixel (images of different sizes)
    pub missing_color: ColorDescriptor,

    /// Maximum per-channel difference still counted as a match
    pub tolerance: ColorDescriptor,
}

impl Default for DiffColorsConfig {
    fn default() -> Self {
        Self {
            match_color: ColorDescriptor::Channels(vec![0.0, 0.0, 0.0, 0.0]),
            mismatch_color: ColorDescriptor::from("#ff0000"),
            missing_color: ColorDescriptor::from("#ff00ff"),
            tolerance: ColorDescriptor::Grayscale(0.0),
        }
    }
}

/// Normalized diff colors, ready for per-pixel use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffPalette {
    pub match_color: CanonicalColor,
    pub mismatch_color: CanonicalColor,
    pub missing_color: CanonicalColor,
    pub tolerance: CanonicalColor,
}

impl DiffPalette {
    /// Pick the highlight color for one baseline/actual pixel pair
    pub fn classify(&self, baseline: &CanonicalColor, actual: &CanonicalColor) -> CanonicalColor {
        if baseline.within_tolerance(actual, &self.tolerance) {
            self.match_color
        } else {
            self.mismatch_color
        }
    }
}

impl DiffColorsConfig {
    /// Normalize every descriptor
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` naming the first field whose descriptor cannot be
    /// normalized, with the normalization error as its source.
    pub fn resolve(&self) -> Result<DiffPalette> {
        let field = |name: &str, descriptor: &ColorDescriptor| {
            normalize(descriptor).map_err(|err| ColorError::config(format!("invalid {}", name), err))
        };

        let palette = DiffPalette {
            match_color: field("match_color", &self.match_color)?,
            mismatch_color: field("mismatch_color", &self.mismatch_color)?,
            missing_color: field("missing_color", &self.missing_color)?,
            tolerance: field("tolerance", &self.tolerance)?,
        };
        debug!(
            "resolved diff colors: match {} mismatch {} missing {} tolerance {}",
            palette.match_color, palette.mismatch_color, palette.missing_color, palette.tolerance
        );
        Ok(palette)
    }

    /// Parse configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ColorError::config("parsing diff colors", e))
    }

    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ColorError::config(format!("reading {}", path.display()), e))?;
        Self::from_json_str(&content)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ColorError::config("serializing diff colors", e))?;
        std::fs::write(path, json)
            .map_err(|e| ColorError::config(format!("writing {}", path.display()), e))?;
        Ok(())
    }
}
