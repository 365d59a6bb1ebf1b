//! View Module
//!
//! Pure render functions. Theme dan network status di-pass eksplisit
//! sebagai parameter - tidak ada ambient context lookup.

pub mod banner;
pub mod detail_view;
pub mod form_view;
pub mod home_view;
pub mod menu_view;

use crate::theme::Theme;
use eframe::egui::{self, Button, RichText};

/// Toggle kecil light/dark, dipakai di beberapa screen
pub fn theme_toggle(ui: &mut egui::Ui, theme: &mut Theme) {
    let icon = if theme.is_dark() { "🌙" } else { "☀" };
    if ui
        .add(Button::new(RichText::new(icon).size(16.0)).frame(false))
        .on_hover_text("Toggle theme")
        .clicked()
    {
        theme.toggle();
    }
}
