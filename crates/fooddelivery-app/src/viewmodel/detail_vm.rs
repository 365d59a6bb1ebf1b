//! Detail ViewModel
//!
//! Resolve routed id terhadap koleksi hasil load; id yang tidak ada
//! berarti placeholder state, bukan error.

use crate::events::AppEvent;
use crate::viewmodel::AppStore;
use eframe::egui;
use menu_store::{store, MenuItem};
use std::sync::Arc;
use tokio::sync::mpsc;

pub struct DetailViewModel {
    pub item: Option<MenuItem>,
    pub is_loading: bool,
    store: AppStore,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl DetailViewModel {
    pub fn new(store: AppStore, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            item: None,
            is_loading: false,
            store,
            event_tx,
        }
    }

    /// Load + lookup by id - dipanggil saat screen di-mount.
    pub fn load(&mut self, id: i32, ctx: egui::Context) {
        self.is_loading = true;
        self.item = None;
        let store = Arc::clone(&self.store);
        let tx = self.event_tx.clone();

        tokio::spawn(async move {
            let items = store.load().await;
            let item = store::find_by_id(&items, id).cloned();
            let _ = tx.send(AppEvent::DetailLoaded(item));
            ctx.request_repaint();
        });
    }

    pub fn on_loaded(&mut self, item: Option<MenuItem>) {
        self.item = item;
        self.is_loading = false;
    }
}
