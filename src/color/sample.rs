//! Color sample value type shared by extraction, harmony and export

use serde::{Deserialize, Serialize};

use super::conversion::{parse_hex, rgb_to_hex, Hsl, Rgb};
use crate::{PaletteError, Result};

/// One color with its HEX, RGB and HSL representations
///
/// `hex` is always the lowercase `#rrggbb` form of `rgb`. Deserialization
/// rejects a `hex` that does not parse or names a different color than
/// `rgb`, and stores the canonical lowercase form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawColorSample")]
pub struct ColorSample {
    pub hex: String,
    pub rgb: Rgb,
    pub hsl: Hsl,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Unchecked wire form of [`ColorSample`]
#[derive(Deserialize)]
struct RawColorSample {
    hex: String,
    rgb: Rgb,
    hsl: Hsl,
    #[serde(default)]
    name: Option<String>,
}

impl TryFrom<RawColorSample> for ColorSample {
    type Error = PaletteError;

    fn try_from(raw: RawColorSample) -> Result<Self> {
        if parse_hex(&raw.hex)? != raw.rgb {
            return Err(PaletteError::invalid_parameter("hex", raw.hex));
        }
        Ok(Self {
            hex: raw.rgb.to_hex(),
            rgb: raw.rgb,
            hsl: raw.hsl,
            name: raw.name,
        })
    }
}

impl ColorSample {
    /// Build a sample from RGB bytes
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        let rgb = Rgb::new(r, g, b);
        Self {
            hex: rgb_to_hex(r, g, b),
            rgb,
            hsl: rgb.to_hsl(),
            name: None,
        }
    }

    /// Build a sample from integer HSL
    ///
    /// The given HSL is kept as-is (after normalization) rather than
    /// recomputed from the rounded RGB, so derived harmony colors keep
    /// their exact hue.
    pub fn from_hsl(h: u16, s: u8, l: u8) -> Self {
        let hsl = Hsl::new(h, s, l);
        let rgb = hsl.to_rgb();
        Self {
            hex: rgb.to_hex(),
            rgb,
            hsl,
            name: None,
        }
    }

    /// Parse an untrusted hex string, e.g. typed into a color field
    ///
    /// # Errors
    ///
    /// Returns [`crate::PaletteError::InvalidHex`] if the input is not `#rrggbb`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let rgb = parse_hex(hex)?;
        Ok(Self::from_rgb(rgb.r, rgb.g, rgb.b))
    }

    /// Return a copy carrying a display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Name if present, otherwise the hex string
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.hex)
    }
}

impl From<Rgb> for ColorSample {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb.r, rgb.g, rgb.b)
    }
}
