//! Adobe swatch encoders: ASE (Swatch Exchange) and ACO (Photoshop swatches)
//!
//! Both are big-endian binary formats. Color names are written as UTF-16BE
//! with a trailing null code unit. Length and count fields that would not
//! fit their width are rejected rather than wrapped.

use crate::color::ColorSample;
use crate::error::{PaletteError, Result};
use crate::palettes::Palette;

const ASE_SIGNATURE: &[u8; 4] = b"ASEF";
const ASE_VERSION: (u16, u16) = (1, 0);
const ASE_COLOR_ENTRY: u16 = 0x0001;
const ASE_RGB_MODEL: &[u8; 4] = b"RGB ";
const ASE_GLOBAL: u16 = 0;

const ACO_RGB_SPACE: u16 = 0;

/// UTF-16 code units of `name` followed by the null terminator
fn utf16_with_null(name: &str) -> Vec<u16> {
    name.encode_utf16().chain(std::iter::once(0)).collect()
}

/// Narrow a length or count to its field width
fn field<T: TryFrom<usize>>(parameter: &str, value: usize) -> Result<T> {
    T::try_from(value).map_err(|_| PaletteError::invalid_parameter(parameter, value))
}

fn push_utf16_be(out: &mut Vec<u8>, units: &[u16]) {
    for unit in units {
        out.extend_from_slice(&unit.to_be_bytes());
    }
}

fn ase_color_block(out: &mut Vec<u8>, color: &ColorSample) -> Result<()> {
    let name = utf16_with_null(color.label());
    let [r, g, b] = color.rgb.normalized();

    let name_len: u16 = field("ase.name_length", name.len())?;
    // name length + name + model + three f32 channels + color type
    let block_len: u32 = field("ase.block_length", 2 + name.len() * 2 + 4 + 12 + 2)?;

    out.extend_from_slice(&ASE_COLOR_ENTRY.to_be_bytes());
    out.extend_from_slice(&block_len.to_be_bytes());
    out.extend_from_slice(&name_len.to_be_bytes());
    push_utf16_be(out, &name);
    out.extend_from_slice(ASE_RGB_MODEL);
    for channel in [r, g, b] {
        out.extend_from_slice(&(channel as f32).to_be_bytes());
    }
    out.extend_from_slice(&ASE_GLOBAL.to_be_bytes());
    Ok(())
}

/// Encode an Adobe Swatch Exchange file with one global RGB entry per color
///
/// Fails with [`PaletteError::InvalidParameter`] when a color name exceeds
/// 65,534 UTF-16 code units.
pub fn adobe_ase(palette: &Palette) -> Result<Vec<u8>> {
    let count: u32 = field("ase.color_count", palette.len())?;
    let mut out = Vec::with_capacity(12 + palette.len() * 64);
    out.extend_from_slice(ASE_SIGNATURE);
    out.extend_from_slice(&ASE_VERSION.0.to_be_bytes());
    out.extend_from_slice(&ASE_VERSION.1.to_be_bytes());
    out.extend_from_slice(&count.to_be_bytes());
    for color in &palette.colors {
        ase_color_block(&mut out, color)?;
    }
    Ok(out)
}

fn aco_color_entry(out: &mut Vec<u8>, color: &ColorSample) {
    let rgb = color.rgb;
    out.extend_from_slice(&ACO_RGB_SPACE.to_be_bytes());
    for channel in [rgb.r, rgb.g, rgb.b] {
        out.extend_from_slice(&(u16::from(channel) * 257).to_be_bytes());
    }
    out.extend_from_slice(&0u16.to_be_bytes());
}

/// Encode a Photoshop ACO file: a version 1 section followed by a
/// version 2 section that repeats the colors with their names
///
/// Fails with [`PaletteError::InvalidParameter`] for more than 65,535
/// colors.
pub fn adobe_aco(palette: &Palette) -> Result<Vec<u8>> {
    let count: u16 = field("aco.color_count", palette.len())?;
    let mut out = Vec::new();

    out.extend_from_slice(&1u16.to_be_bytes());
    out.extend_from_slice(&count.to_be_bytes());
    for color in &palette.colors {
        aco_color_entry(&mut out, color);
    }

    out.extend_from_slice(&2u16.to_be_bytes());
    out.extend_from_slice(&count.to_be_bytes());
    for color in &palette.colors {
        aco_color_entry(&mut out, color);
        let name = utf16_with_null(color.label());
        let name_len: u32 = field("aco.name_length", name.len())?;
        out.extend_from_slice(&name_len.to_be_bytes());
        push_utf16_be(&mut out, &name);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_u16(bytes: &[u8], at: usize) -> u16 {
        u16::from_be_bytes([bytes[at], bytes[at + 1]])
    }

    fn read_u32(bytes: &[u8], at: usize) -> u32 {
        u32::from_be_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
    }

    fn read_f32(bytes: &[u8], at: usize) -> f32 {
        f32::from_be_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
    }

    #[test]
    fn test_ase_header() {
        let palette = Palette::new(
            "p",
            "Two",
            vec![ColorSample::from_rgb(0, 0, 0), ColorSample::from_rgb(1, 1, 1)],
            "custom",
        );
        let bytes = adobe_ase(&palette).unwrap();
        assert_eq!(&bytes[0..4], b"ASEF");
        assert_eq!(read_u16(&bytes, 4), 1);
        assert_eq!(read_u16(&bytes, 6), 0);
        assert_eq!(read_u32(&bytes, 8), 2);
    }

    #[test]
    fn test_ase_color_block_layout() {
        let palette = Palette::new(
            "p",
            "One",
            vec![ColorSample::from_rgb(255, 0, 0).with_name("Red")],
            "custom",
        );
        let bytes = adobe_ase(&palette).unwrap();

        // "Red" + null = 4 code units
        let block_len = 2 + 4 * 2 + 4 + 12 + 2;
        assert_eq!(bytes.len(), 12 + 6 + block_len);

        assert_eq!(read_u16(&bytes, 12), 0x0001);
        assert_eq!(read_u32(&bytes, 14) as usize, block_len);
        assert_eq!(read_u16(&bytes, 18), 4);
        assert_eq!(&bytes[20..28], &[0, b'R', 0, b'e', 0, b'd', 0, 0]);
        assert_eq!(&bytes[28..32], b"RGB ");
        assert_eq!(read_f32(&bytes, 32), 1.0);
        assert_eq!(read_f32(&bytes, 36), 0.0);
        assert_eq!(read_f32(&bytes, 40), 0.0);
        assert_eq!(read_u16(&bytes, 44), 0);
    }

    #[test]
    fn test_ase_unnamed_color_uses_hex() {
        let palette = Palette::new("p", "One", vec![ColorSample::from_rgb(0x33, 0x66, 0x99)], "x");
        let bytes = adobe_ase(&palette).unwrap();
        // "#336699" + null
        assert_eq!(read_u16(&bytes, 18), 8);
        assert_eq!(read_u32(&bytes, 14), 2 + 16 + 4 + 12 + 2);
    }

    #[test]
    fn test_ase_empty_palette() {
        let bytes = adobe_ase(&Palette::new("p", "Empty", Vec::new(), "x")).unwrap();
        assert_eq!(bytes.len(), 12);
        assert_eq!(read_u32(&bytes, 8), 0);
    }

    #[test]
    fn test_aco_sections() {
        let palette = Palette::new(
            "p",
            "One",
            vec![ColorSample::from_rgb(255, 128, 0).with_name("Ab")],
            "custom",
        );
        let bytes = adobe_aco(&palette).unwrap();

        assert_eq!(read_u16(&bytes, 0), 1);
        assert_eq!(read_u16(&bytes, 2), 1);
        assert_eq!(read_u16(&bytes, 4), 0);
        assert_eq!(read_u16(&bytes, 6), 65535);
        assert_eq!(read_u16(&bytes, 8), 128 * 257);
        assert_eq!(read_u16(&bytes, 10), 0);
        assert_eq!(read_u16(&bytes, 12), 0);

        let v2 = 14;
        assert_eq!(read_u16(&bytes, v2), 2);
        assert_eq!(read_u16(&bytes, v2 + 2), 1);
        assert_eq!(&bytes[v2 + 4..v2 + 14], &bytes[4..14]);
        assert_eq!(read_u32(&bytes, v2 + 14), 3);
        assert_eq!(&bytes[v2 + 18..], &[0, b'A', 0, b'b', 0, 0]);
    }

    #[test]
    fn test_aco_rejects_count_overflow() {
        let colors = vec![ColorSample::from_rgb(1, 2, 3); usize::from(u16::MAX) + 1];
        let palette = Palette::new("p", "Huge", colors, "custom");
        let err = adobe_aco(&palette).unwrap_err();
        assert!(matches!(err, PaletteError::InvalidParameter { ref parameter, .. } if parameter == "aco.color_count"));
    }

    #[test]
    fn test_aco_accepts_maximum_count() {
        let colors = vec![ColorSample::from_rgb(1, 2, 3); usize::from(u16::MAX)];
        let palette = Palette::new("p", "Full", colors, "custom");
        let bytes = adobe_aco(&palette).unwrap();
        assert_eq!(read_u16(&bytes, 2), u16::MAX);
    }

    #[test]
    fn test_ase_rejects_name_overflow() {
        let long = "x".repeat(70_000);
        let palette = Palette::new(
            "p",
            "Long",
            vec![ColorSample::from_rgb(0, 0, 0).with_name(long)],
            "custom",
        );
        let err = adobe_ase(&palette).unwrap_err();
        assert!(matches!(err, PaletteError::InvalidParameter { ref parameter, .. } if parameter == "ase.name_length"));
    }

    #[test]
    fn test_ase_longest_name_fits() {
        // 65,534 units plus the terminator fill the u16 field exactly
        let name = "x".repeat(usize::from(u16::MAX) - 1);
        let palette = Palette::new(
            "p",
            "Long",
            vec![ColorSample::from_rgb(0, 0, 0).with_name(name)],
            "custom",
        );
        let bytes = adobe_ase(&palette).unwrap();
        assert_eq!(read_u16(&bytes, 18), u16::MAX);
        assert_eq!(bytes.len(), 12 + 6 + 2 + usize::from(u16::MAX) * 2 + 4 + 12 + 2);
    }
}
