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
            let hsl = Hsl::new(hue, 0.65, 0.5);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

/// Stable colour for the i-th word of the cloud. Cycles a fixed-size palette
/// so the cloud does not degrade into near-identical hues on long word lists.
pub fn word_color(index: usize) -> Color32 {
    const CYCLE: usize = 12;
    let palette = generate_palette(CYCLE);
    palette[index % CYCLE]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size_and_distinct_entries() {
        assert!(generate_palette(0).is_empty());
        let palette = generate_palette(8);
        assert_eq!(palette.len(), 8);
        for pair in palette.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn word_color_cycles() {
        assert_eq!(word_color(0), word_color(12));
        assert_ne!(word_color(0), word_color(1));
    }
}
