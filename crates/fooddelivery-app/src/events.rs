//! Application Events
//!
//! Event enum untuk komunikasi async → UI thread. Storage I/O dan network
//! probe jalan di background task, hasilnya dikirim balik lewat channel.

use menu_store::MenuItem;

/// Events yang dikirim dari background tasks ke UI
#[derive(Debug)]
pub enum AppEvent {
    /// Menu list selesai di-load dari storage
    MenuLoaded(Vec<MenuItem>),
    /// Detail screen: item hasil lookup by id (None = not found)
    DetailLoaded(Option<MenuItem>),
    /// Create/update form: collection selesai di-load
    FormLoaded(Vec<MenuItem>),
    /// Save gagal (best-effort: di-log, user tidak diblokir)
    SaveFailed(String),
    /// Connectivity berubah (None = belum tahu)
    NetworkStatusChange(Option<bool>),
}
