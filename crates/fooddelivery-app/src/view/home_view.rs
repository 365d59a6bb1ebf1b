//! Home Screen
//!
//! Background image + welcome text + tombol View Menu.

use crate::app::Route;
use crate::assets::TextureCache;
use crate::theme::Theme;
use eframe::egui::{self, Button, Color32, RichText, Vec2};

pub fn render_home(
    ctx: &egui::Context,
    theme: &Theme,
    textures: &mut TextureCache,
) -> Option<Route> {
    let mut route = None;

    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(theme.background()))
        .show(ctx, |ui| {
            // Background image di-stretch ke seluruh screen
            let bg = textures.home_bg(ctx);
            egui::Image::new(&bg).paint_at(ui, ui.max_rect());

            ui.vertical_centered(|ui| {
                ui.add_space(140.0);
                ui.label(
                    RichText::new("🍽")
                        .size(36.0)
                        .color(Color32::from_rgb(248, 233, 185)),
                );
                ui.add_space(10.0);
                ui.label(
                    RichText::new("Welcome\nTo")
                        .size(42.0)
                        .italics()
                        .color(Color32::from_rgb(248, 233, 185)),
                );
                ui.add_space(20.0);
                ui.label(
                    RichText::new("Rahat's\nFood Delivery")
                        .size(28.0)
                        .strong()
                        .italics()
                        .color(Color32::WHITE)
                        .background_color(Color32::from_rgba_unmultiplied(92, 92, 95, 180)),
                );
                ui.add_space(60.0);

                let view_menu = Button::new(
                    RichText::new("View Menu").size(16.0).color(Color32::WHITE),
                )
                .fill(theme.accent())
                .rounding(10.0)
                .min_size(Vec2::new(160.0, 44.0));
                if ui.add(view_menu).clicked() {
                    route = Some(Route::Menu);
                }
            });
        });

    route
}
