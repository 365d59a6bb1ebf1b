//! Assets Module
//!
//! Load and cache image textures. Bundled food images di-embed ke binary;
//! picked images di-load dari file path yang disimpan di item.

use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions};
use menu_store::ImageRef;
use std::collections::HashMap;
use tracing::warn;

/// Embedded image bytes. Index urutan array = asset index yang
/// disimpan di storage (`ImageRef::Asset`).
pub struct EmbeddedImages {
    pub menu: [&'static [u8]; 8],
    pub home_bg: &'static [u8],
}

impl Default for EmbeddedImages {
    fn default() -> Self {
        Self {
            menu: [
                include_bytes!("../assets/kacchi.png"),
                include_bytes!("../assets/tehari.png"),
                include_bytes!("../assets/fried_chicken.png"),
                include_bytes!("../assets/black_coffee.png"),
                include_bytes!("../assets/burger.png"),
                include_bytes!("../assets/cappuccino.png"),
                include_bytes!("../assets/tea.png"),
                include_bytes!("../assets/soft_drink.png"),
            ],
            home_bg: include_bytes!("../assets/home_bg.png"),
        }
    }
}

/// Texture cache for loaded images
pub struct TextureCache {
    textures: HashMap<String, TextureHandle>,
    images: EmbeddedImages,
}

impl TextureCache {
    pub fn new() -> Self {
        Self {
            textures: HashMap::new(),
            images: EmbeddedImages::default(),
        }
    }

    /// Load image from bytes and cache it
    fn load_texture(&mut self, ctx: &egui::Context, name: &str, bytes: &[u8]) -> TextureHandle {
        if let Some(tex) = self.textures.get(name) {
            return tex.clone();
        }

        let color_image = match image::load_from_memory(bytes) {
            Ok(img) => {
                let image = img.to_rgba8();
                let size = [image.width() as usize, image.height() as usize];
                let pixels = image.into_raw();
                ColorImage::from_rgba_unmultiplied(size, &pixels)
            }
            Err(e) => {
                // Fallback ikut di-cache di bawah nama yang sama, supaya
                // path yang gagal decode tidak dibaca ulang tiap frame
                warn!("Failed to load image {name}: {e}");
                ColorImage::new([1, 1], egui::Color32::TRANSPARENT)
            }
        };

        let texture = ctx.load_texture(name, color_image, TextureOptions::default());
        self.textures.insert(name.to_string(), texture.clone());
        texture
    }

    pub fn home_bg(&mut self, ctx: &egui::Context) -> TextureHandle {
        let bytes = self.images.home_bg;
        self.load_texture(ctx, "home_bg", bytes)
    }

    /// Bundled asset by index. Index di luar range dapat fallback
    /// transparent 1x1 (bukan panic - data lama bisa saja nyimpan index aneh).
    pub fn asset(&mut self, ctx: &egui::Context, index: u32) -> TextureHandle {
        match self.images.menu.get(index as usize) {
            Some(bytes) => {
                let bytes = *bytes;
                self.load_texture(ctx, &format!("asset_{index}"), bytes)
            }
            None => {
                warn!("Unknown bundled asset index {index}");
                self.load_texture(ctx, &format!("asset_{index}"), &[])
            }
        }
    }

    /// Picked image dari file path (opaque string di storage).
    pub fn from_path(&mut self, ctx: &egui::Context, path: &str) -> TextureHandle {
        if let Some(tex) = self.textures.get(path) {
            return tex.clone();
        }
        let bytes = std::fs::read(path).unwrap_or_default();
        self.load_texture(ctx, path, &bytes)
    }

    /// Texture untuk image reference apapun.
    pub fn menu_image(&mut self, ctx: &egui::Context, image: &ImageRef) -> TextureHandle {
        match image {
            ImageRef::Asset(index) => self.asset(ctx, *index),
            ImageRef::Uri(path) => self.from_path(ctx, path),
        }
    }
}

impl Default for TextureCache {
    fn default() -> Self {
        Self::new()
    }
}
