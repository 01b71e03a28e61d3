use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
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
// Color mapping: categorical label → Color32
// ---------------------------------------------------------------------------

/// Maps categorical labels (booster categories) to distinct colours.
#[derive(Debug, Clone, Default)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
}

impl ColorMap {
    /// Build a colour map from a sorted set of labels.
    pub fn new(labels: &BTreeSet<&str>) -> Self {
        let palette = generate_palette(labels.len());
        let mapping = labels
            .iter()
            .zip(palette)
            .map(|(label, color)| (label.to_string(), color))
            .collect();
        ColorMap { mapping }
    }

    /// Look up the colour for a label.
    pub fn color_for(&self, label: &str) -> Color32 {
        self.mapping.get(label).copied().unwrap_or(Color32::GRAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_labels_get_distinct_colors() {
        let labels: BTreeSet<&str> = ["v1.0", "v1.1", "FT", "B4", "B5"].into_iter().collect();
        let map = ColorMap::new(&labels);
        let colors: BTreeSet<_> = labels
            .iter()
            .map(|l| map.color_for(l).to_array())
            .collect();
        assert_eq!(colors.len(), labels.len());
    }

    #[test]
    fn unknown_label_falls_back_to_gray() {
        let map = ColorMap::new(&BTreeSet::new());
        assert_eq!(map.color_for("v1.0"), Color32::GRAY);
    }
}
