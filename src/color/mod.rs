//! Color descriptor normalization module
//!
//! This module turns caller-supplied color descriptors into canonical
//! `[red, green, blue, alpha]` values and provides the conversions and
//! per-pixel comparison helpers consumers of those values need.

pub mod canonical;
pub mod compare;
pub mod conversion;
pub mod descriptor;
pub mod normalize;
pub mod parse;

pub use canonical::CanonicalColor;
pub use descriptor::{ColorDescriptor, ComponentObject};
pub use normalize::{normalize, normalize_value, ColorNormalizer};
