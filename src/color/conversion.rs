//! Color space conversion utilities
//!
//! Provides integer conversions between RGB, HEX and HSL:
//! - RGB bytes to lowercase `#rrggbb` and back
//! - RGB to HSL (hue in degrees, saturation and lightness in percent) and back
//!
//! HSL components and RGB channels are rounded to the nearest integer.
//! Exact halves are not tie-broken reliably: the float conversion can land
//! just below or above `.5`, so such a value may round either way and is
//! off by at most one from a tie-away-from-zero result. Because of that
//! rounding an RGB -> HSL -> RGB round trip stays within ±1 per channel for
//! grays and within ±5 per channel for chromatic colors. Fully saturated
//! primaries and secondaries round-trip exactly.

use std::fmt;

use palette::{encoding, FromColor, Hsl as PaletteHsl, Srgb};
use serde::{Deserialize, Serialize};

use crate::{PaletteError, Result};

type SrgbHsl = PaletteHsl<encoding::Srgb, f64>;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Integer HSL color: hue in `[0, 360)`, saturation and lightness in `[0, 100]`
///
/// Deserialized values go through [`Hsl::new`], so out-of-range input is
/// wrapped and clamped the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "RawHsl")]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

#[derive(Deserialize)]
struct RawHsl {
    h: u16,
    s: u8,
    l: u8,
}

impl From<RawHsl> for Hsl {
    fn from(raw: RawHsl) -> Self {
        Hsl::new(raw.h, raw.s, raw.l)
    }
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb` representation
    pub fn to_hex(self) -> String {
        rgb_to_hex(self.r, self.g, self.b)
    }

    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self.r, self.g, self.b)
    }

    /// Channels scaled to `[0, 1]`
    pub fn normalized(self) -> [f64; 3] {
        [
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        ]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl Hsl {
    /// Create an HSL color, wrapping hue modulo 360 and clamping
    /// saturation and lightness to 100
    pub fn new(h: u16, s: u8, l: u8) -> Self {
        Self {
            h: h % 360,
            s: s.min(100),
            l: l.min(100),
        }
    }

    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(self.h, self.s, self.l)
    }

    /// Rotate the hue by `degrees`, always landing in `[0, 360)`
    pub fn rotate(self, degrees: i32) -> Self {
        let h = (self.h as i32 + degrees).rem_euclid(360) as u16;
        Self { h, ..self }
    }
}

/// Convert RGB bytes to a lowercase `#rrggbb` string
///
/// The result is always 7 characters long.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Parse a `#rrggbb` or `rrggbb` string (case-insensitive)
///
/// # Errors
///
/// Returns [`PaletteError::InvalidHex`] for any other shape.
pub fn parse_hex(hex: &str) -> Result<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(PaletteError::InvalidHex {
            input: hex.to_string(),
        });
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| PaletteError::InvalidHex {
            input: hex.to_string(),
        })
    };

    Ok(Rgb {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}

/// Convert a hex string to RGB, returning black for malformed input
///
/// Use [`parse_hex`] where malformed input must be rejected.
pub fn hex_to_rgb(hex: &str) -> Rgb {
    parse_hex(hex).unwrap_or_default()
}

/// Convert RGB bytes to integer HSL
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let rgb = Rgb::new(r, g, b);
    let [red, green, blue] = rgb.normalized();
    let hsl = SrgbHsl::from_color(Srgb::<f64>::new(red, green, blue));

    // grays carry no hue or saturation
    if r == g && g == b {
        return Hsl {
            h: 0,
            s: 0,
            l: percent(hsl.lightness),
        };
    }

    let hue = hsl.hue.into_positive_degrees().round() as u16 % 360;
    Hsl {
        h: hue,
        s: percent(hsl.saturation),
        l: percent(hsl.lightness),
    }
}

/// Convert integer HSL to RGB bytes
///
/// Hue wraps modulo 360; saturation and lightness above 100 are clamped.
/// Channels sitting exactly on a half may round down.
pub fn hsl_to_rgb(h: u16, s: u8, l: u8) -> Rgb {
    let hsl = Hsl::new(h, s, l);
    let lightness = hsl.l as f64 / 100.0;

    if hsl.s == 0 {
        let gray = channel(lightness);
        return Rgb::new(gray, gray, gray);
    }

    let rgb = Srgb::<f64>::from_color(SrgbHsl::new(
        hsl.h as f64,
        hsl.s as f64 / 100.0,
        lightness,
    ));
    Rgb::new(channel(rgb.red), channel(rgb.green), channel(rgb.blue))
}

fn percent(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 100.0).round() as u8
}

fn channel(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_hex() {
        assert_eq!(rgb_to_hex(255, 0, 0), "#ff0000");
        assert_eq!(rgb_to_hex(0, 0, 0), "#000000");
        assert_eq!(rgb_to_hex(1, 2, 3), "#010203");
        assert_eq!(rgb_to_hex(51, 102, 153), "#336699");
    }

    #[test]
    fn test_hex_roundtrip() {
        for r in (0..=255u8).step_by(3) {
            for g in (0..=255u8).step_by(5) {
                for b in [0u8, 1, 15, 16, 127, 128, 254, 255] {
                    let hex = rgb_to_hex(r, g, b);
                    assert_eq!(hex.len(), 7);
                    assert_eq!(hex_to_rgb(&hex), Rgb::new(r, g, b));
                }
            }
        }
    }

    #[test]
    fn test_parse_hex_accepts_case_and_missing_hash() {
        assert_eq!(parse_hex("#FF8000").unwrap(), Rgb::new(255, 128, 0));
        assert_eq!(parse_hex("ff8000").unwrap(), Rgb::new(255, 128, 0));
        assert_eq!(parse_hex("#aBcDeF").unwrap(), Rgb::new(0xab, 0xcd, 0xef));
    }

    #[test]
    fn test_parse_hex_invalid() {
        for bad in ["", "#", "#fff", "#ff00000", "##ff0000", "#gg0000", "+f+f+f", "#ff 000"] {
            assert!(
                matches!(parse_hex(bad), Err(PaletteError::InvalidHex { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_hex_to_rgb_malformed_is_black() {
        assert_eq!(hex_to_rgb("not a color"), Rgb::new(0, 0, 0));
        assert_eq!(hex_to_rgb("#12345"), Rgb::default());
    }

    #[test]
    fn test_rgb_to_hsl_primaries() {
        assert_eq!(rgb_to_hsl(255, 0, 0), Hsl { h: 0, s: 100, l: 50 });
        assert_eq!(rgb_to_hsl(0, 255, 0), Hsl { h: 120, s: 100, l: 50 });
        assert_eq!(rgb_to_hsl(0, 0, 255), Hsl { h: 240, s: 100, l: 50 });
        assert_eq!(rgb_to_hsl(0, 255, 255), Hsl { h: 180, s: 100, l: 50 });
        assert_eq!(rgb_to_hsl(255, 255, 255), Hsl { h: 0, s: 0, l: 100 });
        assert_eq!(rgb_to_hsl(0, 0, 0), Hsl { h: 0, s: 0, l: 0 });
    }

    #[test]
    fn test_rgb_to_hsl_hue_stays_below_360() {
        // hue of 359.76 rounds up and must wrap to 0
        let hsl = rgb_to_hsl(255, 0, 1);
        assert_eq!(hsl.h, 0);
        for b in 0..=255u8 {
            assert!(rgb_to_hsl(255, 0, b).h < 360);
        }
    }

    #[test]
    fn test_hsl_to_rgb_grayscale_short_circuit() {
        for l in 0..=100u8 {
            let gray = (l as f64 * 255.0 / 100.0).round() as u8;
            for h in [0u16, 90, 359] {
                assert_eq!(hsl_to_rgb(h, 0, l), Rgb::new(gray, gray, gray));
            }
        }
    }

    #[test]
    fn test_hsl_to_rgb_known_values() {
        assert_eq!(hsl_to_rgb(180, 100, 50), Rgb::new(0, 255, 255));
        assert_eq!(hsl_to_rgb(0, 100, 50), Rgb::new(255, 0, 0));
        assert_eq!(hsl_to_rgb(240, 100, 50), Rgb::new(0, 0, 255));
        // hue wraps
        assert_eq!(hsl_to_rgb(480, 100, 50), hsl_to_rgb(120, 100, 50));
    }

    #[test]
    fn test_hsl_roundtrip_grays_within_one() {
        for v in 0..=255u8 {
            let hsl = rgb_to_hsl(v, v, v);
            let back = hsl.to_rgb();
            assert!((back.r as i16 - v as i16).abs() <= 1, "gray {v} -> {back:?}");
            assert_eq!(back.r, back.g);
            assert_eq!(back.g, back.b);
        }
    }

    #[test]
    fn test_hsl_roundtrip_tolerance() {
        for r in (0..=255u8).step_by(17) {
            for g in (0..=255u8).step_by(17) {
                for b in (0..=255u8).step_by(17) {
                    let back = rgb_to_hsl(r, g, b).to_rgb();
                    for (orig, got) in [(r, back.r), (g, back.g), (b, back.b)] {
                        assert!(
                            (orig as i16 - got as i16).abs() <= 5,
                            "({r},{g},{b}) -> {back:?}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_hsl_roundtrip_exact_for_primaries() {
        let colors = [
            (255, 0, 0),
            (0, 255, 0),
            (0, 0, 255),
            (255, 255, 0),
            (0, 255, 255),
            (255, 0, 255),
            (255, 255, 255),
            (0, 0, 0),
        ];
        for (r, g, b) in colors {
            assert_eq!(rgb_to_hsl(r, g, b).to_rgb(), Rgb::new(r, g, b));
        }
    }

    #[test]
    fn test_hsl_rotate_wraps() {
        let hsl = Hsl::new(300, 80, 40);
        assert_eq!(hsl.rotate(90).h, 30);
        assert_eq!(hsl.rotate(-330).h, 330);
        assert_eq!(hsl.rotate(60).h, 0);
    }

    #[test]
    fn test_hsl_new_normalizes() {
        assert_eq!(Hsl::new(725, 120, 101), Hsl { h: 5, s: 100, l: 100 });
    }

    #[test]
    fn test_hsl_to_rgb_exact_half_within_one() {
        // red is exactly 229.5 here
        let rgb = hsl_to_rgb(0, 60, 75);
        assert!((229..=230).contains(&rgb.r), "{:?}", rgb);
        assert_eq!((rgb.g, rgb.b), (153, 153));
    }

    #[test]
    fn test_hsl_deserialize_normalizes() {
        let hsl: Hsl = serde_json::from_str(r#"{"h":400,"s":250,"l":7}"#).unwrap();
        assert_eq!(hsl, Hsl { h: 40, s: 100, l: 7 });
        assert!(serde_json::from_str::<Hsl>(r#"{"h":-1,"s":0,"l":0}"#).is_err());
    }
}
