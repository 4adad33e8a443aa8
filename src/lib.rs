//! # Visual Colors
//!
//! A Rust crate for normalizing color descriptors used by pixel-level
//! visual regression comparison.
//!
//! Colors reach a screenshot comparison run in many shapes. This library
//! resolves all of them to one canonical `[red, green, blue, alpha]` value:
//! - Grayscale numbers (`128` → `[128, 128, 128, 255]`)
//! - Hex strings (`#abc`, `#aabbcc`, with optional alpha digits)
//! - `rgb(...)` / `rgba(...)` strings with integer or fractional components
//! - Channel arrays (`[1, 2, 3]` → `[1, 2, 3, 255]`)
//! - Component objects (`{red, green, blue, alpha}`)
//!
//! ## Example
//!
//! ```rust
//! use visual_colors::{normalize, ColorDescriptor};
//!
//! let color = normalize(&ColorDescriptor::from("rgba(0, 0, 0, 0.5)"))?;
//! assert_eq!(color.to_array(), [0, 0, 0, 128]);
//! # Ok::<(), visual_colors::ColorError>(())
//! ```

pub mod error;
pub mod constants;
pub mod color;
pub mod config;

pub use color::{
    normalize, normalize_value, CanonicalColor, ColorDescriptor, ColorNormalizer,
    ComponentObject,
};
pub use config::{DiffColorsConfig, DiffPalette};
pub use error::{ColorError, Result};
