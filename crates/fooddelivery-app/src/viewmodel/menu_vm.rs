//! ============================================================================
//! MENU LIST VIEW MODEL
//! ============================================================================
//!
//! State untuk screen daftar menu: koleksi item, loading flag, dan
//! confirm-dialog state untuk delete.
//!
//! ## Dependencies (File yang bergantung pada module ini):
//! - `src/app.rs` → Menyimpan instance MenuViewModel + dispatch event
//! - `src/view/menu_view.rs` → Render list, edit/delete/detail actions
//!
//! ## Impact (Dampak perubahan):
//! - Mengubah `items` → Harus diikuti `persist()` supaya snapshot tersimpan
//! - `pending_delete` → Menentukan apakah confirm dialog tampil

use crate::events::AppEvent;
use crate::viewmodel::AppStore;
use eframe::egui;
use menu_store::{store, MenuItem};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::warn;

pub struct MenuViewModel {
    /// Koleksi yang sedang ditampilkan (snapshot hasil load terakhir)
    pub items: Vec<MenuItem>,
    pub is_loading: bool,
    /// Some(id) = confirm dialog delete sedang tampil untuk item ini
    pub pending_delete: Option<i32>,
    store: AppStore,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl MenuViewModel {
    pub fn new(store: AppStore, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            items: Vec::new(),
            is_loading: false,
            pending_delete: None,
            store,
            event_tx,
        }
    }

    /// Load collection - dipanggil setiap kali screen ini di-mount.
    /// Non-blocking: hasil datang lewat `AppEvent::MenuLoaded`.
    pub fn load(&mut self, ctx: egui::Context) {
        self.is_loading = true;
        let store = Arc::clone(&self.store);
        let tx = self.event_tx.clone();

        tokio::spawn(async move {
            let items = store.load().await;
            let _ = tx.send(AppEvent::MenuLoaded(items));
            ctx.request_repaint();
        });
    }

    pub fn on_loaded(&mut self, items: Vec<MenuItem>) {
        self.items = items;
        self.is_loading = false;
    }

    /// Delete selalu lewat confirm dialog dulu (Yes/No)
    pub fn request_remove(&mut self, id: i32) {
        self.pending_delete = Some(id);
    }

    pub fn cancel_remove(&mut self) {
        self.pending_delete = None;
    }

    /// User jawab Yes: drop item dari snapshot + persist.
    /// Remove untuk id yang sudah hilang adalah no-op, bukan error.
    pub fn confirm_remove(&mut self, ctx: egui::Context) {
        let Some(id) = self.pending_delete.take() else {
            return;
        };
        self.items = store::remove(&self.items, id);
        self.persist(ctx);
    }

    /// Fire-and-forget save: failure di-log + event, user tidak diblokir.
    /// Dua save in-flight bersamaan = last write wins; navigation flow yang
    /// menjamin cuma satu mutating screen aktif.
    fn persist(&self, ctx: egui::Context) {
        let store = Arc::clone(&self.store);
        let tx = self.event_tx.clone();
        let snapshot = self.items.clone();

        tokio::spawn(async move {
            if let Err(e) = store.save(&snapshot).await {
                warn!("menu snapshot save failed: {e}");
                let _ = tx.send(AppEvent::SaveFailed(e.to_string()));
            }
            ctx.request_repaint();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use menu_store::{FileStorage, MenuStore};

    // TempDir guard ikut di-return supaya dir-nya dibersihkan saat drop
    fn vm_with(
        items: Vec<MenuItem>,
    ) -> (
        MenuViewModel,
        mpsc::UnboundedReceiver<AppEvent>,
        tempfile::TempDir,
    ) {
        let dir = tempfile::tempdir().unwrap();
        let (tx, rx) = mpsc::unbounded_channel();
        let store: AppStore = Arc::new(MenuStore::new(FileStorage::new(dir.path().to_path_buf())));
        let mut vm = MenuViewModel::new(store, tx);
        vm.items = items;
        (vm, rx, dir)
    }

    fn sample() -> Vec<MenuItem> {
        vec![MenuItem {
            id: 1,
            title: "Kacchi".to_string(),
            description: String::new(),
            image: None,
        }]
    }

    #[test]
    fn test_request_then_cancel_keeps_items() {
        let (mut vm, _rx, _dir) = vm_with(sample());
        vm.request_remove(1);
        assert_eq!(vm.pending_delete, Some(1));
        vm.cancel_remove();
        assert_eq!(vm.pending_delete, None);
        assert_eq!(vm.items.len(), 1);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_confirm_remove_drops_item() {
        let (mut vm, _rx, _dir) = vm_with(sample());
        vm.request_remove(1);
        vm.confirm_remove(egui::Context::default());
        assert!(vm.items.is_empty());
        assert_eq!(vm.pending_delete, None);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_confirm_without_request_is_noop() {
        let (mut vm, _rx, _dir) = vm_with(sample());
        vm.confirm_remove(egui::Context::default());
        assert_eq!(vm.items.len(), 1);
    }
}
