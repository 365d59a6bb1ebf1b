//! Local menu persistence.
//!
//! Single source of truth untuk koleksi menu item: load dari key-value
//! storage (fallback ke seed data), validate, dan simpan full snapshot
//! setiap mutation. Semua screen (list, detail, create/update) adalah
//! client dari store ini.

pub mod error;
pub mod model;
pub mod seed;
pub mod storage;
pub mod store;

pub use error::{Result, StoreError};
pub use model::{ImageRef, MenuItem};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::{MenuStore, STORAGE_KEY};
