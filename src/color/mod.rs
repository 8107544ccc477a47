//! Color conversion and extraction module
//!
//! This module handles RGB/HEX/HSL conversions, the color sample value
//! type, and frequency-ranked extraction from pixel buffers.

pub mod conversion;
pub mod extraction;
pub mod sample;

pub use conversion::{hex_to_rgb, hsl_to_rgb, parse_hex, rgb_to_hex, rgb_to_hsl, Hsl, Rgb};
pub use extraction::{rank_by_frequency, rank_samples, ColorExtractor, PixelBuffer};
pub use sample::ColorSample;
