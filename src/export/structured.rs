//! JSON-based encoders
//!
//! Design-tool formats (Figma, Sketch) use channels normalized to `[0, 1]`;
//! generic JSON keeps byte values.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use super::text::{js_identifier, sanitize_name};
use crate::palettes::Palette;
use crate::{PaletteError, Result};

#[derive(Serialize)]
struct FigmaPaint<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    kind: &'static str,
    value: FigmaColor,
}

#[derive(Serialize)]
struct FigmaColor {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SketchPalette<'a> {
    compatible_version: &'static str,
    plugin_version: &'static str,
    colors: Vec<SketchColor<'a>>,
}

#[derive(Serialize)]
struct SketchColor<'a> {
    red: f64,
    green: f64,
    blue: f64,
    alpha: f64,
    name: &'a str,
}

/// Insertion-ordered `{"<prefix><index>": hex}` map
struct MaterialColors<'a> {
    prefix: String,
    palette: &'a Palette,
}

impl Serialize for MaterialColors<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.palette.len()))?;
        for (i, color) in self.palette.colors.iter().enumerate() {
            map.serialize_entry(&format!("{}{}", self.prefix, i), &color.hex)?;
        }
        map.end()
    }
}

fn pretty<T: Serialize + ?Sized>(value: &T, format: &str) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| PaletteError::serialization(format!("Failed to encode {}", format), e))
}

pub fn figma_json(palette: &Palette) -> Result<String> {
    let paints: Vec<FigmaPaint<'_>> = palette
        .colors
        .iter()
        .map(|color| {
            let [r, g, b] = color.rgb.normalized();
            FigmaPaint {
                name: color.label(),
                kind: "PAINT",
                value: FigmaColor { r, g, b, a: 1.0 },
            }
        })
        .collect();
    pretty(&paints, "Figma JSON")
}

pub fn sketch_palette(palette: &Palette) -> Result<String> {
    let document = SketchPalette {
        compatible_version: "1.0",
        plugin_version: "1.0",
        colors: palette
            .colors
            .iter()
            .map(|color| {
                let [red, green, blue] = color.rgb.normalized();
                SketchColor {
                    red,
                    green,
                    blue,
                    alpha: 1.0,
                    name: color.label(),
                }
            })
            .collect(),
    };
    pretty(&document, "Sketch Palette")
}

pub fn material_json(palette: &Palette) -> Result<String> {
    let colors = MaterialColors {
        prefix: sanitize_name(&palette.name),
        palette,
    };
    pretty(&colors, "Material Design JSON")
}

/// Full color records: hex, rgb, hsl and optional name
pub fn json_object(palette: &Palette) -> Result<String> {
    pretty(&palette.colors, "JSON Object")
}

pub fn javascript_array(palette: &Palette) -> Result<String> {
    let hexes = pretty(&palette.hexes(), "JavaScript Array")?;
    Ok(format!("const {} = {};", js_identifier(&palette.name), hexes))
}
