//! Color harmony generation from a base color
//!
//! Derived colors inherit the base saturation. Hue rotations are taken
//! modulo 360; the monochromatic kind keeps the hue and steps lightness.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::ColorSample;
use crate::constants::harmony::{
    ANALOGOUS_STEP, DERIVED_SHADES, MONOCHROMATIC_LIGHTNESS, MONOCHROMATIC_STEP,
};
use crate::PaletteError;

/// Supported harmony kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HarmonyKind {
    Complementary,
    Triadic,
    Analogous,
    Monochromatic,
    Tetradic,
}

impl HarmonyKind {
    pub const ALL: [HarmonyKind; 5] = [
        HarmonyKind::Complementary,
        HarmonyKind::Triadic,
        HarmonyKind::Analogous,
        HarmonyKind::Monochromatic,
        HarmonyKind::Tetradic,
    ];

    pub fn name(self) -> &'static str {
        match self {
            HarmonyKind::Complementary => "complementary",
            HarmonyKind::Triadic => "triadic",
            HarmonyKind::Analogous => "analogous",
            HarmonyKind::Monochromatic => "monochromatic",
            HarmonyKind::Tetradic => "tetradic",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            HarmonyKind::Complementary => "2 colors opposite on color wheel",
            HarmonyKind::Triadic => "3 colors evenly spaced",
            HarmonyKind::Analogous => "5 colors next to each other",
            HarmonyKind::Monochromatic => "5 shades of same hue",
            HarmonyKind::Tetradic => "4 colors forming rectangle",
        }
    }

    /// Hue offsets of the derived colors, in degrees
    pub fn hue_offsets(self) -> Vec<u16> {
        match self {
            HarmonyKind::Complementary => vec![180],
            HarmonyKind::Triadic => vec![120, 240],
            HarmonyKind::Analogous => (1..=DERIVED_SHADES).map(|i| i * ANALOGOUS_STEP).collect(),
            HarmonyKind::Monochromatic => Vec::new(),
            HarmonyKind::Tetradic => vec![90, 180, 270],
        }
    }

    /// Number of colors produced, base color included
    pub fn expected_len(self) -> usize {
        match self {
            HarmonyKind::Monochromatic => 1 + DERIVED_SHADES as usize,
            kind => 1 + kind.hue_offsets().len(),
        }
    }
}

impl fmt::Display for HarmonyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HarmonyKind {
    type Err = PaletteError;

    /// Parse a lowercase harmony name
    ///
    /// Unknown names are rejected with [`PaletteError::UnknownHarmony`]
    /// instead of silently producing a one-color palette.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HarmonyKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| PaletteError::UnknownHarmony { name: s.to_string() })
    }
}

/// Generate a harmony starting with `base`
///
/// The output always begins with `base` unchanged and has
/// [`HarmonyKind::expected_len`] entries.
pub fn generate_harmony(base: &ColorSample, kind: HarmonyKind) -> Vec<ColorSample> {
    let hsl = base.hsl;
    let mut colors = Vec::with_capacity(kind.expected_len());
    colors.push(base.clone());

    match kind {
        HarmonyKind::Monochromatic => {
            let (min, max) = MONOCHROMATIC_LIGHTNESS;
            for i in 1..=DERIVED_SHADES as u8 {
                let lightness = hsl.l.saturating_add(i * MONOCHROMATIC_STEP).clamp(min, max);
                colors.push(ColorSample::from_hsl(hsl.h, hsl.s, lightness));
            }
        }
        _ => {
            for offset in kind.hue_offsets() {
                let rotated = hsl.rotate(offset as i32);
                colors.push(ColorSample::from_hsl(rotated.h, hsl.s, hsl.l));
            }
        }
    }

    colors
}
