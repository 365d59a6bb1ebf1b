//! Network Status Banner
//!
//! Strip warna di atas screen: hijau online, merah offline, abu-abu
//! belum tahu. Display-only - tidak pernah mempengaruhi store.

use eframe::egui::{self, Color32, RichText};

pub fn render_network_banner(ui: &mut egui::Ui, is_connected: Option<bool>) {
    let (fill, text) = match is_connected {
        Some(true) => (Color32::from_rgb(140, 231, 131), "You are online ✅"),
        Some(false) => (Color32::from_rgb(224, 83, 83), "No internet connection ❌"),
        None => (Color32::from_rgb(130, 130, 130), "Checking connection..."),
    };

    egui::Frame::none().fill(fill).inner_margin(4.0).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(text).size(12.0).color(Color32::WHITE));
        });
    });
}
