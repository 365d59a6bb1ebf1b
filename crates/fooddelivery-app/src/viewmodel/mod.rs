//! ViewModel Module
//!
//! State management layer dengan event-driven architecture.
//! Satu ViewModel per screen; storage I/O lewat background task + event.

pub mod detail_vm;
pub mod form_vm;
pub mod menu_vm;

pub use detail_vm::DetailViewModel;
pub use form_vm::{FormState, FormTarget, FormViewModel};
pub use menu_vm::MenuViewModel;

use menu_store::{FileStorage, MenuStore};
use std::sync::Arc;

/// Shared handle ke satu-satunya MenuStore di app.
pub type AppStore = Arc<MenuStore<FileStorage>>;
