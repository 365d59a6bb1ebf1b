//! Create/Update Form Screen
//!
//! Title + description input, image path picker dengan preview,
//! tombol Add (create mode) atau Cancel/Update (edit mode), dan
//! blocking alert "Please Insert Title".

use crate::app::Route;
use crate::assets::TextureCache;
use crate::theme::Theme;
use crate::view::{banner::render_network_banner, theme_toggle};
use crate::viewmodel::{FormTarget, FormViewModel};
use eframe::egui::{self, Button, Color32, RichText, TextEdit, Vec2};

pub fn render_form(
    ctx: &egui::Context,
    vm: &mut FormViewModel,
    theme: &mut Theme,
    network: Option<bool>,
    textures: &mut TextureCache,
) -> Option<Route> {
    let mut route = None;
    let heading = match vm.target {
        FormTarget::Create => "Create Item",
        FormTarget::Edit(_) => "Update Item",
    };

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
                    vm.cancel();
                    route = Some(Route::Menu);
                }
                theme_toggle(ui, theme);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(8.0);
                    ui.label(RichText::new(heading).size(16.0).strong().color(theme.text()));
                });
            });
            ui.add_space(10.0);

            if vm.is_loading {
                ui.vertical_centered(|ui| ui.spinner());
                return;
            }

            let enabled = !vm.show_title_alert;
            ui.add_enabled_ui(enabled, |ui| {
                ui.add_space(4.0);
                ui.add(
                    TextEdit::singleline(&mut vm.title)
                        .hint_text("Add new item title")
                        .text_color(theme.text())
                        .desired_width(f32::INFINITY)
                        .margin(Vec2::new(10.0, 8.0)),
                );
                ui.add_space(6.0);
                ui.add(
                    TextEdit::multiline(&mut vm.description)
                        .hint_text("Add new item description")
                        .text_color(theme.text())
                        .desired_rows(3)
                        .desired_width(f32::INFINITY)
                        .margin(Vec2::new(10.0, 8.0)),
                );
                ui.add_space(8.0);

                // Image picker row: path input + pick + reset
                ui.horizontal(|ui| {
                    ui.add(
                        TextEdit::singleline(&mut vm.image_path)
                            .hint_text("Image file path")
                            .desired_width(ui.available_width() - 170.0),
                    );
                    let pick = Button::new(
                        RichText::new("Pick Image")
                            .underline()
                            .strong()
                            .color(theme.accent()),
                    )
                    .frame(false);
                    if ui.add(pick).clicked() {
                        vm.pick_image();
                    }
                    let reset = Button::new(
                        RichText::new("Reset Image")
                            .underline()
                            .strong()
                            .color(theme.accent()),
                    )
                    .frame(false);
                    if ui.add(reset).clicked() {
                        vm.reset_image();
                    }
                });
                ui.add_space(8.0);

                // Preview box
                let image = vm.image.clone();
                ui.vertical_centered(|ui| {
                    let size = Vec2::new(ui.available_width() * 0.7, 120.0);
                    match image {
                        Some(image) => {
                            let tex = textures.menu_image(ctx, &image);
                            ui.add(egui::Image::new(&tex).fit_to_exact_size(size));
                        }
                        None => {
                            let (rect, _) =
                                ui.allocate_exact_size(size, egui::Sense::hover());
                            ui.painter().rect_stroke(
                                rect,
                                0.0,
                                egui::Stroke::new(1.0, Color32::GRAY),
                            );
                            ui.painter().text(
                                rect.center(),
                                egui::Align2::CENTER_CENTER,
                                "No Image Selected",
                                egui::FontId::proportional(13.0),
                                theme.text(),
                            );
                        }
                    }
                });
                ui.add_space(14.0);

                // Action buttons
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(10.0);
                    match vm.target {
                        FormTarget::Create => {
                            let add = Button::new(
                                RichText::new("Add").strong().color(Color32::WHITE),
                            )
                            .fill(theme.accent())
                            .rounding(12.0)
                            .min_size(Vec2::new(70.0, 36.0));
                            if ui.add(add).clicked() && vm.submit(ctx.clone()) {
                                route = Some(Route::Menu);
                            }
                        }
                        FormTarget::Edit(_) => {
                            let update = Button::new(
                                RichText::new("Update").strong().color(Color32::WHITE),
                            )
                            .fill(Color32::from_rgb(0, 128, 0))
                            .rounding(12.0)
                            .min_size(Vec2::new(90.0, 36.0));
                            if ui.add(update).clicked() && vm.submit(ctx.clone()) {
                                route = Some(Route::Menu);
                            }

                            let cancel = Button::new(
                                RichText::new("Cancel").strong().color(Color32::WHITE),
                            )
                            .fill(Color32::RED)
                            .rounding(12.0)
                            .min_size(Vec2::new(90.0, 36.0));
                            if ui.add(cancel).clicked() {
                                vm.cancel();
                                route = Some(Route::Menu);
                            }
                        }
                    }
                });
            });
        });

    // Blocking alert: operation aborted, tidak ada state change
    if vm.show_title_alert {
        egui::Window::new("Validation")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Please Insert Title");
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        vm.dismiss_alert();
                    }
                });
            });
    }

    route
}
