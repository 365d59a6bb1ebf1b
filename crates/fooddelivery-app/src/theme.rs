//! Theme Handler
//!
//! Light/Dark theme dengan proper eGUI visuals. Theme value di-pass
//! eksplisit ke setiap render function - tidak ada ambient lookup,
//! jadi tidak ada "must be used inside provider" failure class.

use eframe::egui::{self, Color32};

/// Theme variants
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Apply theme ke egui context
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = match self {
            Theme::Light => egui::Visuals::light(),
            Theme::Dark => egui::Visuals::dark(),
        };
        visuals.panel_fill = self.background();
        ctx.set_visuals(visuals);
    }

    /// Toggle between themes
    pub fn toggle(&mut self) {
        *self = match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    // ========================================================================
    // PALETTE - nilai diambil dari color scheme mobile app
    // ========================================================================

    pub fn background(&self) -> Color32 {
        match self {
            Theme::Light => Color32::from_rgb(255, 255, 255),
            Theme::Dark => Color32::from_rgb(21, 23, 24),
        }
    }

    pub fn text(&self) -> Color32 {
        match self {
            Theme::Light => Color32::from_rgb(17, 24, 28),
            Theme::Dark => Color32::from_rgb(236, 237, 238),
        }
    }

    /// Accent untuk link/button: orange di light, cyan di dark
    pub fn accent(&self) -> Color32 {
        match self {
            Theme::Light => Color32::from_rgb(255, 165, 0),
            Theme::Dark => Color32::from_rgb(0, 255, 255),
        }
    }

    /// Warna judul di detail screen
    pub fn heading(&self) -> Color32 {
        match self {
            Theme::Light => Color32::from_rgb(192, 178, 136),
            Theme::Dark => Color32::from_rgb(248, 233, 185),
        }
    }

    pub fn separator(&self) -> Color32 {
        match self {
            Theme::Light => Color32::BLACK,
            Theme::Dark => Color32::from_rgb(255, 239, 213), // papayawhip
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_both_ways() {
        let mut theme = Theme::Light;
        theme.toggle();
        assert_eq!(theme, Theme::Dark);
        theme.toggle();
        assert_eq!(theme, Theme::Light);
    }
}
