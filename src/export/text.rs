//! Line-oriented text encoders
//!
//! Covers stylesheet, source-code, tabular and plain listings. Every
//! encoder is a pure function of the palette; iteration follows palette
//! color order and indices are zero-based.

use std::fmt::Write;

use crate::color::ColorSample;
use crate::constants::export::GIMP_COLUMNS;
use crate::palettes::Palette;

/// Identifier fragment used in CSS, SCSS, Tailwind and Material names:
/// lowercase, each whitespace character replaced by `-`
pub fn sanitize_name(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect()
}

/// Valid JavaScript binding name derived from a palette name
pub fn js_identifier(name: &str) -> String {
    let mut ident: String = name
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || c == '$' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if ident.is_empty() {
        ident.push_str("palette");
    }
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    ident
}

/// Double-quoted string literal valid in Python and JSON
fn quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// CSV field, quoted only when it contains a delimiter, quote or newline
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn single_line(value: &str) -> String {
    value.replace(['\r', '\n'], " ")
}

pub fn gimp_gpl(palette: &Palette) -> String {
    let mut out = format!(
        "GIMP Palette\nName: {}\nColumns: {}\n#\n",
        single_line(&palette.name),
        GIMP_COLUMNS
    );
    for color in &palette.colors {
        let rgb = color.rgb;
        let _ = writeln!(out, "{}\t{}\t{}\t{}", rgb.r, rgb.g, rgb.b, single_line(color.label()));
    }
    out
}

pub fn css_custom_properties(palette: &Palette) -> String {
    let prefix = sanitize_name(&palette.name);
    let mut out = String::from(":root {\n");
    for (i, color) in palette.colors.iter().enumerate() {
        let _ = writeln!(out, "  --color-{}-{}: {};", prefix, i, color.hex);
    }
    out.push('}');
    out
}

pub fn scss_variables(palette: &Palette) -> String {
    let prefix = sanitize_name(&palette.name);
    palette
        .colors
        .iter()
        .enumerate()
        .map(|(i, color)| format!("${}-{}: {};\n", prefix, i, color.hex))
        .collect()
}

pub fn tailwind_config(palette: &Palette) -> String {
    let key = sanitize_name(&palette.name).replace('\\', "\\\\").replace('\'', "\\'");
    let mut out = format!(
        "module.exports = {{\n  theme: {{\n    extend: {{\n      colors: {{\n        '{}': {{\n",
        key
    );
    for (i, color) in palette.colors.iter().enumerate() {
        let _ = writeln!(out, "          {}: '{}',", i, color.hex);
    }
    out.push_str("        },\n      },\n    },\n  },\n};\n");
    out
}

pub fn bootstrap_theme(palette: &Palette) -> String {
    format!(
        "// Bootstrap theme variables for {}\n{}",
        single_line(&palette.name),
        scss_variables(palette)
    )
}

pub fn css_classes(palette: &Palette) -> String {
    let prefix = sanitize_name(&palette.name);
    palette
        .colors
        .iter()
        .enumerate()
        .map(|(i, color)| {
            format!(
                ".color-{}-{} {{\n  background-color: {};\n}}\n",
                prefix, i, color.hex
            )
        })
        .collect()
}

pub fn python_dictionary(palette: &Palette) -> String {
    let mut out = String::from("{\n");
    for color in &palette.colors {
        let _ = writeln!(out, "    {}: {},", quoted(color.label()), quoted(&color.hex));
    }
    out.push('}');
    out
}

pub fn xml(palette: &Palette) -> String {
    let mut out = String::from("<palette>\n");
    for color in &palette.colors {
        let rgb = color.rgb;
        let _ = writeln!(
            out,
            "  <color hex=\"{}\" r=\"{}\" g=\"{}\" b=\"{}\" />",
            color.hex, rgb.r, rgb.g, rgb.b
        );
    }
    out.push_str("</palette>");
    out
}

/// Naive CMYK from sRGB, each component as a 0-100 percentage
pub fn cmyk_percentages(color: &ColorSample) -> [u8; 4] {
    let [r, g, b] = color.rgb.normalized();
    let k = 1.0 - r.max(g).max(b);
    let denom = 1.0 - k;
    let channel = |v: f64| if denom == 0.0 { 0.0 } else { (1.0 - v - k) / denom };
    let percent = |v: f64| (v * 100.0).round().clamp(0.0, 100.0) as u8;
    [
        percent(channel(r)),
        percent(channel(g)),
        percent(channel(b)),
        percent(k),
    ]
}

pub fn cmyk_csv(palette: &Palette) -> String {
    let mut out = String::from("Hex,R,G,B,C,M,Y,K\n");
    for color in &palette.colors {
        let rgb = color.rgb;
        let [c, m, y, k] = cmyk_percentages(color);
        let _ = writeln!(
            out,
            "{},{},{},{},{},{},{},{}",
            color.hex, rgb.r, rgb.g, rgb.b, c, m, y, k
        );
    }
    out
}

/// LAB listing; L, A and B columns are placeholder zeros
pub fn lab_values(palette: &Palette) -> String {
    let mut out = String::from("Hex,R,G,B,L,A,B\n");
    for color in &palette.colors {
        let rgb = color.rgb;
        let _ = writeln!(out, "{},{},{},{},0,0,0", color.hex, rgb.r, rgb.g, rgb.b);
    }
    out
}

/// Shared by the CSV and spreadsheet formats
pub fn csv_data(palette: &Palette) -> String {
    let mut out = String::from("Hex,R,G,B,Name\n");
    for color in &palette.colors {
        let rgb = color.rgb;
        let name = color.name.as_deref().map(csv_field).unwrap_or_default();
        let _ = writeln!(out, "{},{},{},{},{}", color.hex, rgb.r, rgb.g, rgb.b, name);
    }
    out
}

pub fn plain_text(palette: &Palette) -> String {
    palette
        .colors
        .iter()
        .map(|color| {
            let rgb = color.rgb;
            format!("{} (R:{}, G:{}, B:{})\n", color.hex, rgb.r, rgb.g, rgb.b)
        })
        .collect()
}
