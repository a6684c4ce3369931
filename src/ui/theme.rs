// FileScout - ui/theme.rs
//
// Colour scheme, visuals and layout constants.
// No dependencies on app state or business logic.

use egui::Color32;

/// Apply dark/light visuals and the configured body font size.
pub fn apply(ctx: &egui::Context, dark_mode: bool, font_size: f32) {
    ctx.set_visuals(if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });

    ctx.style_mut(|style| {
        for (text_style, font_id) in style.text_styles.iter_mut() {
            match text_style {
                egui::TextStyle::Heading => font_id.size = font_size + 5.0,
                egui::TextStyle::Small => font_id.size = (font_size - 3.0).max(8.0),
                _ => font_id.size = font_size,
            }
        }
    });
}

/// Colour of the relevance figure: stronger matches stand out more.
pub fn relevance_colour(relevance: usize, dark_mode: bool) -> Color32 {
    match (relevance, dark_mode) {
        (0..=1, true) => Color32::from_rgb(209, 213, 219),  // Gray 300
        (0..=1, false) => Color32::from_rgb(55, 65, 81),    // Gray 700
        (2, true) => Color32::from_rgb(96, 165, 250),       // Blue 400
        (2, false) => Color32::from_rgb(37, 99, 235),       // Blue 600
        (_, true) => Color32::from_rgb(74, 222, 128),       // Green 400
        (_, false) => Color32::from_rgb(22, 163, 74),       // Green 600
    }
}

/// Primary row text colour with good contrast in either mode.
pub fn row_text_colour(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::from_rgb(243, 244, 246) // Gray 100
    } else {
        Color32::from_rgb(17, 24, 39) // Gray 900
    }
}

/// Notice accents.
pub const INFO_ACCENT: Color32 = Color32::from_rgb(59, 130, 246); // Blue 500
pub const ERROR_ACCENT: Color32 = Color32::from_rgb(220, 38, 38); // Red 600

/// Layout constants.
pub const SIDEBAR_WIDTH: f32 = 240.0;
pub const PREVIEW_PANE_WIDTH: f32 = 440.0;
pub const ROW_HEIGHT: f32 = 22.0;
pub const FILENAME_COLUMN_WIDTH: f32 = 240.0;
pub const TYPE_COLUMN_WIDTH: f32 = 70.0;
pub const RELEVANCE_COLUMN_WIDTH: f32 = 90.0;
pub const MIN_PATH_COLUMN_WIDTH: f32 = 160.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relevance_colour_tiers_differ() {
        assert_ne!(relevance_colour(1, true), relevance_colour(2, true));
        assert_ne!(relevance_colour(2, true), relevance_colour(5, true));
        assert_eq!(relevance_colour(3, false), relevance_colour(9, false));
    }
}
