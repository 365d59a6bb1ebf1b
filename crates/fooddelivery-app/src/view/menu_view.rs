//! Menu List Screen
//!
//! Scrollable list: image + title + description per row, aksi
//! View Details / edit / delete (dengan confirm dialog), entry point
//! "Add a New Item", empty state, dan footer.

use crate::app::Route;
use crate::assets::TextureCache;
use crate::theme::Theme;
use crate::view::{banner::render_network_banner, theme_toggle};
use crate::viewmodel::{FormTarget, MenuViewModel};
use eframe::egui::{self, Button, Color32, RichText, ScrollArea, Vec2};

pub fn render_menu(
    ctx: &egui::Context,
    vm: &mut MenuViewModel,
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

            // Confirm dialog blocking: selama tampil, header + list terkunci
            let enabled = vm.pending_delete.is_none();
            ui.add_enabled_ui(enabled, |ui| {
                // Header row: back, theme toggle, add entry point
                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    if ui
                        .add(
                            Button::new(RichText::new("← Home").color(theme.accent()))
                                .frame(false),
                        )
                        .clicked()
                    {
                        route = Some(Route::Home);
                    }
                    theme_toggle(ui, theme);

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.add_space(8.0);
                        let add_link = Button::new(
                            RichText::new("Add a New Item")
                                .underline()
                                .color(theme.accent()),
                        )
                        .frame(false);
                        if ui.add(add_link).clicked() {
                            route = Some(Route::Form(FormTarget::Create));
                        }
                    });
                });
                ui.add_space(6.0);

                if vm.is_loading {
                    ui.vertical_centered(|ui| ui.spinner());
                    return;
                }

                ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
                    if vm.items.is_empty() {
                        ui.vertical_centered(|ui| {
                            ui.label(RichText::new("No Items to Show!").color(theme.text()));
                        });
                        return;
                    }

                    // Snapshot supaya loop tidak rebutan borrow dengan aksi vm
                    let items = vm.items.clone();
                    for (idx, item) in items.iter().enumerate() {
                        if idx > 0 {
                            row_separator(ui, theme);
                        }

                        ui.horizontal(|ui| {
                            ui.add_space(8.0);
                            if let Some(image) = &item.image {
                                let tex = textures.menu_image(ctx, image);
                                ui.add(
                                    egui::Image::new(&tex)
                                        .fit_to_exact_size(Vec2::splat(64.0))
                                        .rounding(6.0),
                                );
                            }

                            ui.vertical(|ui| {
                                ui.set_width(ui.available_width() - 40.0);
                                ui.label(
                                    RichText::new(&item.title)
                                        .size(16.0)
                                        .strong()
                                        .color(theme.text()),
                                );
                                ui.label(
                                    RichText::new(&item.description)
                                        .size(12.0)
                                        .color(theme.text()),
                                );
                                let details = Button::new(
                                    RichText::new("View Details")
                                        .size(12.0)
                                        .underline()
                                        .color(theme.accent()),
                                )
                                .frame(false);
                                if ui.add(details).clicked() {
                                    route = Some(Route::Details(item.id));
                                }
                            });

                            ui.vertical(|ui| {
                                let edit = Button::new(
                                    RichText::new("✏").size(16.0).color(theme.accent()),
                                )
                                .frame(false);
                                if ui.add(edit).clicked() {
                                    route = Some(Route::Form(FormTarget::Edit(item.id)));
                                }
                                let delete = Button::new(
                                    RichText::new("🗑").size(16.0).color(Color32::RED),
                                )
                                .frame(false);
                                if ui.add(delete).clicked() {
                                    vm.request_remove(item.id);
                                }
                            });
                        });
                        ui.add_space(8.0);
                    }

                    ui.vertical_centered(|ui| {
                        ui.add_space(15.0);
                        ui.label(RichText::new("~~~~~~~~~~ . ~~~~~~~~~~").color(theme.text()));
                    });
                });
            });
        });

    // Confirm dialog delete - modal di tengah screen
    if vm.pending_delete.is_some() {
        egui::Window::new("Confirm Action")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Are you sure you want to Delete this item?");
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("No").clicked() {
                        vm.cancel_remove();
                    }
                    if ui.button("Yes").clicked() {
                        vm.confirm_remove(ctx.clone());
                    }
                });
            });
    }

    route
}

fn row_separator(ui: &mut egui::Ui, theme: &Theme) {
    ui.vertical_centered(|ui| {
        let (rect, _) = ui.allocate_exact_size(
            Vec2::new((ui.available_width() * 0.5).min(300.0), 1.0),
            egui::Sense::hover(),
        );
        ui.painter().rect_filled(rect, 0.0, theme.separator());
    });
    ui.add_space(10.0);
}
