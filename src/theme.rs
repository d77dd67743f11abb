//! Dark slate theme with indigo players and a gold winner

use egui::Color32;

/// Dashboard palette
pub mod colors {
    use super::Color32;

    // === Backgrounds ===
    pub const BG_PRIMARY: Color32 = Color32::from_rgb(26, 32, 44);        // #1A202C
    pub const BG_ELEVATED: Color32 = Color32::from_rgb(45, 55, 72);       // #2D3748
    pub const BG_HOVER: Color32 = Color32::from_rgb(74, 85, 104);         // #4A5568

    // === Text ===
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(226, 232, 240);   // #E2E8F0 - labels, names
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 174, 192); // #A0AEC0 - axis ticks
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(113, 128, 150);     // #718096

    // === Lines & Borders ===
    pub const BORDER: Color32 = Color32::from_rgb(45, 55, 72);

    // === Players ===
    pub const PLAYER: Color32 = Color32::from_rgb(129, 140, 248);         // #818CF8 - indigo
    pub const PLAYER_FILL_ALPHA: u8 = 204;                                 // 0.8
    pub const PLAYER_CIRCLE_ALPHA: u8 = 153;                               // 0.6
    pub const WINNER: Color32 = Color32::from_rgb(255, 215, 0);           // #FFD700 - gold
    pub const WINNER_FILL_ALPHA: u8 = 230;                                 // 0.9
    pub const WINNER_CIRCLE_ALPHA: u8 = 204;                               // 0.8

    /// Apply an alpha to an opaque palette color
    pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
        Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
    }
}

/// Create the dashboard egui Visuals
pub fn dashboard_visuals() -> egui::Visuals {
    use colors::*;

    let mut visuals = egui::Visuals::dark();

    visuals.panel_fill = BG_PRIMARY;
    visuals.window_fill = BG_PRIMARY;
    visuals.extreme_bg_color = BG_PRIMARY;
    visuals.faint_bg_color = BG_ELEVATED;

    visuals.override_text_color = Some(TEXT_PRIMARY);

    visuals.widgets.noninteractive.bg_fill = BG_PRIMARY;
    visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, TEXT_SECONDARY);
    visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, BORDER);

    visuals.widgets.hovered.bg_fill = BG_HOVER;
    visuals.widgets.hovered.fg_stroke = egui::Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.hovered.weak_bg_fill = BG_HOVER;

    // Flat design
    visuals.window_shadow = egui::Shadow::NONE;
    visuals.popup_shadow = egui::Shadow::NONE;

    visuals
}
