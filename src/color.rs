use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::session::SLOT_COUNT;

// ---------------------------------------------------------------------------
// Slot accents
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize, saturation: f32, lightness: f32) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            hsl_to_color32(Hsl::new(hue, saturation, lightness))
        })
        .collect()
}

fn hsl_to_color32(hsl: Hsl) -> Color32 {
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

/// Colours for the selector headers and comparison cards.
#[derive(Debug, Clone)]
pub struct SlotColors {
    accents: Vec<Color32>,
    /// Card fill behind the best-efficiency vehicle.
    pub best_fill: Color32,
    /// Title colour of the best-efficiency vehicle.
    pub best_text: Color32,
}

impl Default for SlotColors {
    fn default() -> Self {
        SlotColors {
            accents: generate_palette(SLOT_COUNT, 0.65, 0.55),
            best_fill: hsl_to_color32(Hsl::new(48.0, 0.9, 0.2)),
            best_text: hsl_to_color32(Hsl::new(48.0, 0.95, 0.6)),
        }
    }
}

impl SlotColors {
    pub fn accent(&self, slot: usize) -> Color32 {
        self.accents.get(slot).copied().unwrap_or(Color32::GRAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_is_distinct() {
        let p = generate_palette(3, 0.65, 0.55);
        assert_eq!(p.len(), 3);
        assert_ne!(p[0], p[1]);
        assert_ne!(p[1], p[2]);
        assert!(generate_palette(0, 0.5, 0.5).is_empty());
    }

    #[test]
    fn unknown_slot_falls_back_to_gray() {
        assert_eq!(SlotColors::default().accent(9), Color32::GRAY);
    }
}
