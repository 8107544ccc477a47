//! Palette categorization by HSL thresholds
//!
//! Splits a classification pool into dominant, vibrant, muted, light and
//! dark palettes. Categories overlap freely and any of them may be empty.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::{rank_samples, ColorSample, Hsl};
use crate::config::CategoryConfig;
use crate::PaletteError;

/// Named palette categories in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteCategory {
    Dominant,
    Vibrant,
    Muted,
    Light,
    Dark,
}

impl PaletteCategory {
    pub const ALL: [PaletteCategory; 5] = [
        PaletteCategory::Dominant,
        PaletteCategory::Vibrant,
        PaletteCategory::Muted,
        PaletteCategory::Light,
        PaletteCategory::Dark,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PaletteCategory::Dominant => "dominant",
            PaletteCategory::Vibrant => "vibrant",
            PaletteCategory::Muted => "muted",
            PaletteCategory::Light => "light",
            PaletteCategory::Dark => "dark",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            PaletteCategory::Dominant => "Most frequent colors",
            PaletteCategory::Vibrant => "Bright, saturated colors",
            PaletteCategory::Muted => "Soft, desaturated colors",
            PaletteCategory::Light => "Light tints",
            PaletteCategory::Dark => "Deep shades",
        }
    }
}

impl fmt::Display for PaletteCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaletteCategory {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaletteCategory::ALL
            .into_iter()
            .find(|category| category.name() == s)
            .ok_or_else(|| PaletteError::invalid_parameter("palette category", s))
    }
}

/// The five categorized palettes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorizedPalettes {
    pub dominant: Vec<ColorSample>,
    pub vibrant: Vec<ColorSample>,
    pub muted: Vec<ColorSample>,
    pub light: Vec<ColorSample>,
    pub dark: Vec<ColorSample>,
}

impl CategorizedPalettes {
    pub fn get(&self, category: PaletteCategory) -> &[ColorSample] {
        match category {
            PaletteCategory::Dominant => &self.dominant,
            PaletteCategory::Vibrant => &self.vibrant,
            PaletteCategory::Muted => &self.muted,
            PaletteCategory::Light => &self.light,
            PaletteCategory::Dark => &self.dark,
        }
    }

    /// Iterate categories in display order, empty ones included
    pub fn iter(&self) -> impl Iterator<Item = (PaletteCategory, &[ColorSample])> + '_ {
        PaletteCategory::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }

    /// Total number of colors across categories
    pub fn total_colors(&self) -> usize {
        self.iter().map(|(_, colors)| colors.len()).sum()
    }

    /// Number of categories holding at least one color
    pub fn non_empty_count(&self) -> usize {
        self.iter().filter(|(_, colors)| !colors.is_empty()).count()
    }
}

/// Categorizer applying HSL predicates to a classification pool
#[derive(Debug, Clone, Default)]
pub struct Categorizer {
    config: CategoryConfig,
}

impl Categorizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CategoryConfig) -> Self {
        Self { config }
    }

    /// Check whether an HSL color belongs to a filtered category
    ///
    /// `Dominant` is frequency based, so every color qualifies.
    pub fn matches(&self, category: PaletteCategory, hsl: &Hsl) -> bool {
        let c = &self.config;
        match category {
            PaletteCategory::Dominant => true,
            PaletteCategory::Vibrant => {
                hsl.s > c.vibrant_min_saturation && c.vibrant_lightness.contains(hsl.l)
            }
            PaletteCategory::Muted => {
                hsl.s < c.muted_max_saturation && c.muted_lightness.contains(hsl.l)
            }
            PaletteCategory::Light => hsl.l > c.light_min_lightness,
            PaletteCategory::Dark => hsl.l < c.dark_max_lightness,
        }
    }

    fn cap(&self, category: PaletteCategory) -> usize {
        match category {
            PaletteCategory::Dominant => self.config.dominant_cap,
            PaletteCategory::Vibrant => self.config.vibrant_cap,
            PaletteCategory::Muted => self.config.muted_cap,
            PaletteCategory::Light => self.config.light_cap,
            PaletteCategory::Dark => self.config.dark_cap,
        }
    }

    /// Build one category from the pool
    ///
    /// Filtered categories keep pool encounter order; `Dominant` is ranked
    /// by frequency.
    pub fn category(&self, category: PaletteCategory, pool: &[ColorSample]) -> Vec<ColorSample> {
        let cap = self.cap(category);
        if category == PaletteCategory::Dominant {
            return rank_samples(pool, cap);
        }
        pool.iter()
            .filter(|color| self.matches(category, &color.hsl))
            .take(cap)
            .cloned()
            .collect()
    }

    /// Build all five categories from the pool
    pub fn categorize(&self, pool: &[ColorSample]) -> CategorizedPalettes {
        CategorizedPalettes {
            dominant: self.category(PaletteCategory::Dominant, pool),
            vibrant: self.category(PaletteCategory::Vibrant, pool),
            muted: self.category(PaletteCategory::Muted, pool),
            light: self.category(PaletteCategory::Light, pool),
            dark: self.category(PaletteCategory::Dark, pool),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hsl(h: u16, s: u8, l: u8) -> ColorSample {
        ColorSample::from_hsl(h, s, l)
    }

    #[test]
    fn test_predicates_are_strict() {
        let categorizer = Categorizer::new();
        let vibrant = PaletteCategory::Vibrant;
        assert!(categorizer.matches(vibrant, &Hsl::new(0, 61, 50)));
        assert!(!categorizer.matches(vibrant, &Hsl::new(0, 60, 50)));
        assert!(!categorizer.matches(vibrant, &Hsl::new(0, 90, 20)));
        assert!(!categorizer.matches(vibrant, &Hsl::new(0, 90, 80)));

        let muted = PaletteCategory::Muted;
        assert!(categorizer.matches(muted, &Hsl::new(0, 49, 31)));
        assert!(!categorizer.matches(muted, &Hsl::new(0, 50, 50)));
        assert!(!categorizer.matches(muted, &Hsl::new(0, 10, 70)));

        assert!(categorizer.matches(PaletteCategory::Light, &Hsl::new(0, 0, 71)));
        assert!(!categorizer.matches(PaletteCategory::Light, &Hsl::new(0, 0, 70)));
        assert!(categorizer.matches(PaletteCategory::Dark, &Hsl::new(0, 0, 29)));
        assert!(!categorizer.matches(PaletteCategory::Dark, &Hsl::new(0, 0, 30)));
    }

    #[test]
    fn test_categories_overlap() {
        // saturated and dark at once
        let pool = vec![hsl(200, 90, 25)];
        let palettes = Categorizer::new().categorize(&pool);
        assert_eq!(palettes.vibrant.len(), 1);
        assert_eq!(palettes.dark.len(), 1);
        assert!(palettes.light.is_empty());
        assert!(palettes.muted.is_empty());
    }

    #[test]
    fn test_empty_pool_yields_empty_categories() {
        let palettes = Categorizer::new().categorize(&[]);
        assert_eq!(palettes.total_colors(), 0);
        assert_eq!(palettes.non_empty_count(), 0);
        assert_eq!(palettes.iter().count(), 5);
    }

    #[test]
    fn test_filtered_categories_keep_encounter_order_and_caps() {
        let pool: Vec<ColorSample> = (0..20u16).map(|i| hsl(i * 10, 0, 90)).collect();
        let light = Categorizer::new().category(PaletteCategory::Light, &pool);
        assert_eq!(light.len(), 8);
        assert_eq!(light, pool[..8].to_vec());
    }

    #[test]
    fn test_dominant_ranks_by_frequency() {
        let red = ColorSample::from_rgb(255, 0, 0);
        let blue = ColorSample::from_rgb(0, 0, 255);
        let pool = vec![blue.clone(), red.clone(), red.clone(), blue.clone(), red.clone()];
        let dominant = Categorizer::new().category(PaletteCategory::Dominant, &pool);
        assert_eq!(dominant, vec![red, blue]);
    }

    #[test]
    fn test_dominant_cap() {
        let pool: Vec<ColorSample> = (0..30u8).map(|v| ColorSample::from_rgb(v, v, v)).collect();
        let palettes = Categorizer::new().categorize(&pool);
        assert_eq!(palettes.dominant.len(), 12);
    }

    #[test]
    fn test_categorization_is_idempotent() {
        let pool: Vec<ColorSample> = (0..=255u8)
            .step_by(7)
            .flat_map(|v| {
                [
                    ColorSample::from_rgb(v, 255 - v, v / 2),
                    ColorSample::from_rgb(v, v, v),
                    ColorSample::from_rgb(255, v, 0),
                ]
            })
            .collect();
        let categorizer = Categorizer::new();
        let palettes = categorizer.categorize(&pool);

        for (category, colors) in palettes.iter() {
            assert_eq!(categorizer.category(category, colors), colors.to_vec(), "{category}");
        }
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("muted".parse::<PaletteCategory>().unwrap(), PaletteCategory::Muted);
        assert!("neon".parse::<PaletteCategory>().is_err());
    }
}
