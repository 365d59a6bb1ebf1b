//! Item Details Screen
//!
//! Title, image, description untuk satu item. Id yang tidak ketemu
//! di collection = placeholder state.

use crate::app::Route;
use crate::assets::TextureCache;
use crate::theme::Theme;
use crate::view::{banner::render_network_banner, theme_toggle};
use crate::viewmodel::DetailViewModel;
use eframe::egui::{self, Button, RichText, ScrollArea, Vec2};

pub fn render_details(
    ctx: &egui::Context,
    vm: &mut DetailViewModel,
    theme: &mut Theme,
    network: Option<bool>,
    textures: &mut TextureCache,
) -> Option<Route> {
    let mut route = None;

    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(theme.background()))
        .show(ctx, |ui| {
            render_network_banner(ui, network);
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                ui.add_space(8.0);
                if ui
                    .add(Button::new(RichText::new("← Menu").color(theme.accent())).frame(false))
                    .clicked()
                {
                    route = Some(Route::Menu);
                }
                theme_toggle(ui, theme);
            });
            ui.add_space(10.0);

            if vm.is_loading {
                ui.vertical_centered(|ui| ui.spinner());
                return;
            }

            // Clone kecil supaya textures bebas dipinjam mutable di bawah
            let item = vm.item.clone();
            ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
                ui.vertical_centered(|ui| match item {
                    Some(item) => {
                        ui.label(
                            RichText::new(&item.title)
                                .size(30.0)
                                .strong()
                                .underline()
                                .color(theme.heading()),
                        );
                        ui.add_space(20.0);

                        if let Some(image) = &item.image {
                            let tex = textures.menu_image(ctx, image);
                            let width = ui.available_width() * 0.9;
                            ui.add(
                                egui::Image::new(&tex)
                                    .fit_to_exact_size(Vec2::new(width, width * 0.75)),
                            );
                        }

                        ui.add_space(20.0);
                        ui.label(
                            RichText::new(&item.description)
                                .size(18.0)
                                .color(theme.text()),
                        );
                    }
                    None => {
                        // Placeholder state: item sudah dihapus atau id salah
                        ui.add_space(40.0);
                        ui.label(RichText::new("No Item to Show!").color(theme.text()));
                    }
                });
            });
        });

    route
}
