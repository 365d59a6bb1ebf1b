//! Menu item entity.

use serde::{Deserialize, Serialize};

/// Reference to an item image.
///
/// Serialized untagged supaya persisted layout tetap kompatibel dengan
/// snapshot lama: `number` untuk bundled asset, `string` untuk file path
/// dari image picker, `null` untuk "no image".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageRef {
    /// Index into the bundled asset set (opaque to the store).
    Asset(u32),
    /// Local file path picked by the user (opaque to the store).
    Uri(String),
}

/// One sellable item. `id` is assigned by the store, never user-editable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub image: Option<ImageRef>,
}
