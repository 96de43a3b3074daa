use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: release year → Color32
// ---------------------------------------------------------------------------

/// Maps each release year present in the scatter to a distinct colour.
#[derive(Debug, Clone)]
pub struct YearColors {
    mapping: BTreeMap<i32, Color32>,
    default_color: Color32,
}

impl YearColors {
    pub fn new(years: &BTreeSet<i32>) -> Self {
        let mapping = years
            .iter()
            .copied()
            .zip(generate_palette(years.len()))
            .collect();
        YearColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    pub fn color_for(&self, year: i32) -> Color32 {
        self.mapping.get(&year).copied().unwrap_or(self.default_color)
    }
}
