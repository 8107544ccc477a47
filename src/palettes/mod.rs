//! Palette records, categorization and harmony generation
//!
//! This module turns a classification pool into named palettes and
//! derives harmony palettes from a base color.

pub mod categorize;
pub mod harmony;
pub mod model;

pub use categorize::{CategorizedPalettes, Categorizer, PaletteCategory};
pub use harmony::{generate_harmony, HarmonyKind};
pub use model::Palette;
