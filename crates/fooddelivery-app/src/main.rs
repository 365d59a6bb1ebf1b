//! Food Delivery App - Desktop Rendition
//!
//! Aplikasi menu browsing berbasis eGUI dengan arsitektur MVVM.
//! Screens: Home, Menu list, Item details, Create/Update form.
//! Persistence lewat crate `menu-store` (file-backed key-value storage).

mod app;
mod assets;
mod core;
mod events;
mod theme;
mod view;
mod viewmodel;

use app::FoodApp;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> eframe::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            // ================================================================
            // WINDOW SIZE - Phone-shaped portrait window
            // ================================================================
            .with_inner_size([400.0, 760.0])
            .with_min_inner_size([360.0, 640.0])
            .with_title("Rahat's Food Delivery"),
        centered: true,
        ..Default::default()
    };

    eframe::run_native(
        "Rahat's Food Delivery",
        native_options,
        Box::new(|cc| Ok(Box::new(FoodApp::new(cc)))),
    )
}
