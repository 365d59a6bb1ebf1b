//! ============================================================================
//! CREATE/UPDATE FORM VIEW MODEL
//! ============================================================================
//!
//! State machine form: `Idle` (tidak ada item terpilih) → `Editing(id)`
//! (item existing dimuat ke field) → `Idle` (setelah cancel, update, atau
//! add). Field title/description/image di-clear setiap balik ke Idle.
//!
//! ## Dependencies (File yang bergantung pada module ini):
//! - `src/app.rs` → Routing ke form + dispatch `FormLoaded`
//! - `src/view/form_view.rs` → Render field, tombol Add/Cancel/Update,
//!   alert "Please Insert Title"

use crate::events::AppEvent;
use crate::viewmodel::AppStore;
use eframe::egui;
use menu_store::{store, ImageRef, MenuItem, StoreError};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::warn;

/// Route parameter untuk form: `"create"` adalah sentinel "mulai kosong",
/// selain itu id numerik item yang mau di-edit.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FormTarget {
    #[default]
    Create,
    Edit(i32),
}

impl FormTarget {
    pub fn parse(param: &str) -> Option<Self> {
        if param == "create" {
            Some(Self::Create)
        } else {
            param.trim().parse().ok().map(Self::Edit)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FormState {
    /// Tidak ada item terpilih; submit berarti add
    #[default]
    Idle,
    /// Field berisi item existing; submit berarti update
    Editing(i32),
}

pub struct FormViewModel {
    pub state: FormState,
    pub target: FormTarget,
    pub title: String,
    pub description: String,
    /// Input field untuk image picker (opaque file path)
    pub image_path: String,
    pub image: Option<ImageRef>,
    /// Blocking dialog "Please Insert Title" sedang tampil
    pub show_title_alert: bool,
    pub is_loading: bool,
    items: Vec<MenuItem>,
    store: AppStore,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl FormViewModel {
    pub fn new(store: AppStore, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            state: FormState::Idle,
            target: FormTarget::Create,
            title: String::new(),
            description: String::new(),
            image_path: String::new(),
            image: None,
            show_title_alert: false,
            is_loading: false,
            items: Vec::new(),
            store,
            event_tx,
        }
    }

    /// Mount form untuk target tertentu. Field di-reset dulu; kalau
    /// targetnya Edit, field diisi setelah collection selesai di-load.
    pub fn open(&mut self, target: FormTarget, ctx: egui::Context) {
        self.clear_fields();
        self.state = FormState::Idle;
        self.target = target;
        self.is_loading = true;

        let store = Arc::clone(&self.store);
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let items = store.load().await;
            let _ = tx.send(AppEvent::FormLoaded(items));
            ctx.request_repaint();
        });
    }

    /// Collection datang: transisi Idle → Editing kalau target item ada.
    /// Target id yang tidak ketemu → tetap Idle, form kosong (recovered
    /// locally, bukan error).
    pub fn on_loaded(&mut self, items: Vec<MenuItem>) {
        self.items = items;
        self.is_loading = false;

        if let FormTarget::Edit(id) = self.target {
            if let Some(item) = store::find_by_id(&self.items, id) {
                self.title = item.title.clone();
                self.description = item.description.clone();
                self.image = item.image.clone();
                self.image_path = match &item.image {
                    Some(ImageRef::Uri(path)) => path.clone(),
                    _ => String::new(),
                };
                self.state = FormState::Editing(id);
            }
        }
    }

    /// Add atau Update, tergantung target. Return true = selesai (caller
    /// navigasi balik ke menu), false = tetap di form (validation error).
    pub fn submit(&mut self, ctx: egui::Context) -> bool {
        let result = match self.target {
            FormTarget::Create => {
                store::add(&self.items, &self.title, &self.description, self.image.clone())
            }
            FormTarget::Edit(id) => store::update(
                &self.items,
                id,
                &self.title,
                &self.description,
                self.image.clone(),
            ),
        };

        match result {
            Ok(next) => {
                self.items = next;
                self.persist(ctx);
                self.clear_fields();
                self.state = FormState::Idle;
                true
            }
            Err(StoreError::EmptyTitle) => {
                // Operation aborted, no state change; blocking dialog ke user
                self.show_title_alert = true;
                false
            }
            Err(StoreError::NotFound(id)) => {
                // Update untuk id yang sudah hilang: no-op, balik ke menu
                warn!("update target {id} no longer exists, skipping");
                self.clear_fields();
                self.state = FormState::Idle;
                true
            }
            Err(e) => {
                warn!("form submit failed: {e}");
                false
            }
        }
    }

    /// Cancel: clear field, balik ke Idle. Tidak menyentuh storage.
    pub fn cancel(&mut self) {
        self.clear_fields();
        self.state = FormState::Idle;
    }

    /// "Pick Image": ambil path dari input field sebagai opaque URI.
    pub fn pick_image(&mut self) {
        let path = self.image_path.trim();
        if !path.is_empty() {
            self.image = Some(ImageRef::Uri(path.to_string()));
        }
    }

    /// "Reset Image": balik ke no-image
    pub fn reset_image(&mut self) {
        self.image = None;
        self.image_path.clear();
    }

    pub fn dismiss_alert(&mut self) {
        self.show_title_alert = false;
    }

    fn clear_fields(&mut self) {
        self.title.clear();
        self.description.clear();
        self.image_path.clear();
        self.image = None;
        self.show_title_alert = false;
    }

    fn persist(&self, ctx: egui::Context) {
        let store = Arc::clone(&self.store);
        let tx = self.event_tx.clone();
        let snapshot = self.items.clone();

        tokio::spawn(async move {
            if let Err(e) = store.save(&snapshot).await {
                warn!("form snapshot save failed: {e}");
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
    fn vm() -> (FormViewModel, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let (tx, _rx) = mpsc::unbounded_channel();
        // _rx sengaja di-drop: event send boleh gagal di test
        let store: AppStore = Arc::new(MenuStore::new(FileStorage::new(dir.path().to_path_buf())));
        (FormViewModel::new(store, tx), dir)
    }

    fn sample() -> Vec<MenuItem> {
        vec![MenuItem {
            id: 7,
            title: "Tea".to_string(),
            description: "hot".to_string(),
            image: Some(ImageRef::Uri("/tmp/tea.png".to_string())),
        }]
    }

    #[test]
    fn test_parse_create_sentinel_and_ids() {
        assert_eq!(FormTarget::parse("create"), Some(FormTarget::Create));
        assert_eq!(FormTarget::parse("7"), Some(FormTarget::Edit(7)));
        assert_eq!(FormTarget::parse(" 12 "), Some(FormTarget::Edit(12)));
        assert_eq!(FormTarget::parse("abc"), None);
        assert_eq!(FormTarget::parse(""), None);
    }

    #[test]
    fn test_edit_target_enters_editing_with_fields_filled() {
        let (mut vm, _dir) = vm();
        vm.target = FormTarget::Edit(7);
        vm.on_loaded(sample());

        assert_eq!(vm.state, FormState::Editing(7));
        assert_eq!(vm.title, "Tea");
        assert_eq!(vm.description, "hot");
        assert_eq!(vm.image_path, "/tmp/tea.png");
    }

    #[test]
    fn test_missing_edit_target_stays_idle() {
        let (mut vm, _dir) = vm();
        vm.target = FormTarget::Edit(99);
        vm.on_loaded(sample());

        assert_eq!(vm.state, FormState::Idle);
        assert!(vm.title.is_empty());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_blank_title_shows_alert_and_stays() {
        let (mut vm, _dir) = vm();
        vm.target = FormTarget::Create;
        vm.on_loaded(sample());
        vm.title = "   ".to_string();

        assert!(!vm.submit(egui::Context::default()));
        assert!(vm.show_title_alert);
        vm.dismiss_alert();
        assert!(!vm.show_title_alert);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_add_clears_fields_and_returns_to_idle() {
        let (mut vm, _dir) = vm();
        vm.target = FormTarget::Create;
        vm.on_loaded(sample());
        vm.title = "Pizza".to_string();
        vm.description = "cheesy".to_string();

        assert!(vm.submit(egui::Context::default()));
        assert_eq!(vm.state, FormState::Idle);
        assert!(vm.title.is_empty());
        assert!(vm.description.is_empty());
        // id baru = max(7) + 1, prepended
        assert_eq!(vm.items[0].id, 8);
        assert_eq!(vm.items[0].title, "Pizza");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_update_replaces_exactly_target_item() {
        let (mut vm, _dir) = vm();
        vm.target = FormTarget::Edit(7);
        vm.on_loaded(sample());
        vm.title = "Green Tea".to_string();

        assert!(vm.submit(egui::Context::default()));
        assert_eq!(vm.items.len(), 1);
        assert_eq!(vm.items[0].title, "Green Tea");
        assert_eq!(vm.state, FormState::Idle);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_update_on_vanished_id_is_noop() {
        let (mut vm, _dir) = vm();
        vm.target = FormTarget::Edit(42);
        vm.on_loaded(sample());
        vm.title = "Ghost".to_string();

        // Selesai tanpa error dan tanpa mengubah collection
        assert!(vm.submit(egui::Context::default()));
        assert_eq!(vm.items, sample());
    }

    #[test]
    fn test_cancel_clears_and_returns_to_idle() {
        let (mut vm, _dir) = vm();
        vm.target = FormTarget::Edit(7);
        vm.on_loaded(sample());
        assert_eq!(vm.state, FormState::Editing(7));

        vm.cancel();
        assert_eq!(vm.state, FormState::Idle);
        assert!(vm.title.is_empty());
        assert!(vm.image.is_none());
    }

    #[test]
    fn test_pick_and_reset_image() {
        let (mut vm, _dir) = vm();
        vm.image_path = "  /tmp/pic.png ".to_string();
        vm.pick_image();
        assert_eq!(vm.image, Some(ImageRef::Uri("/tmp/pic.png".to_string())));

        vm.reset_image();
        assert!(vm.image.is_none());
        assert!(vm.image_path.is_empty());
    }
}
