//! MenuStore - canonical owner of the menu collection.
//!
//! Load sekali per screen mount, mutate lewat pure ops (add/update/remove),
//! lalu save full snapshot. Tidak ada delta write: value di storage key
//! selalu complete snapshot terbaru.
//!
//! Concurrency model: semua mutation datang dari UI thread; dua save yang
//! in-flight bersamaan berarti last write wins, tanpa conflict detection.

use crate::error::{Result, StoreError};
use crate::model::{ImageRef, MenuItem};
use crate::seed;
use crate::storage::KeyValueStorage;
use tracing::{debug, error};

/// Fixed storage key the whole app reads and writes.
pub const STORAGE_KEY: &str = "FoodDeliveryApp";

pub struct MenuStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> MenuStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Load the full collection, sorted ascending by id.
    ///
    /// Fails soft: missing value, empty value, empty array, read failure,
    /// dan snapshot yang tidak bisa di-parse SEMUA jatuh ke seed set.
    /// Kebijakan fallback satu untuk semua screen, tidak boleh diverge.
    pub async fn load(&self) -> Vec<MenuItem> {
        let raw = match self.storage.get_item(&self.key).await {
            Ok(value) => value,
            Err(e) => {
                error!(key = %self.key, "storage read failed: {e}");
                None
            }
        };

        let mut items = match raw.as_deref() {
            None | Some("") => seed::default_menu(),
            Some(json) => match serde_json::from_str::<Vec<MenuItem>>(json) {
                Ok(parsed) if !parsed.is_empty() => parsed,
                Ok(_) => seed::default_menu(),
                Err(e) => {
                    error!(key = %self.key, "stored snapshot unreadable, reseeding: {e}");
                    seed::default_menu()
                }
            },
        };

        sort_by_id(&mut items);
        items
    }

    /// Persist the complete snapshot, overwriting the previous value.
    ///
    /// Caller boleh treat ini best-effort (log lalu lanjut); yang penting
    /// failure tidak pernah meninggalkan partial write di storage key.
    pub async fn save(&self, items: &[MenuItem]) -> Result<()> {
        let json = serde_json::to_string(items)?;
        self.storage.set_item(&self.key, &json).await?;
        debug!(key = %self.key, count = items.len(), "snapshot saved");
        Ok(())
    }
}

pub fn sort_by_id(items: &mut [MenuItem]) {
    items.sort_by_key(|item| item.id);
}

/// Next id: `max(existing) + 1`, atau 1 kalau collection kosong.
pub fn next_id(items: &[MenuItem]) -> i32 {
    items.iter().map(|item| item.id).max().map_or(1, |max| max + 1)
}

pub fn find_by_id(items: &[MenuItem], id: i32) -> Option<&MenuItem> {
    items.iter().find(|item| item.id == id)
}

/// New collection with a new item prepended.
///
/// Title divalidasi setelah trim tapi disimpan apa adanya (persis perilaku
/// form aslinya). Prepend order bertahan sampai load berikutnya re-sort.
pub fn add(
    items: &[MenuItem],
    title: &str,
    description: &str,
    image: Option<ImageRef>,
) -> Result<Vec<MenuItem>> {
    if title.trim().is_empty() {
        return Err(StoreError::EmptyTitle);
    }

    let new_item = MenuItem {
        id: next_id(items),
        title: title.to_string(),
        description: description.to_string(),
        image,
    };

    let mut next = Vec::with_capacity(items.len() + 1);
    next.push(new_item);
    next.extend_from_slice(items);
    Ok(next)
}

/// Fresh snapshot with exactly one item's fields replaced.
///
/// Selalu return collection baru, tidak pernah mutate element lama
/// in-place - menghindari aliasing antara snapshot yang masih dipegang
/// screen lain.
pub fn update(
    items: &[MenuItem],
    id: i32,
    title: &str,
    description: &str,
    image: Option<ImageRef>,
) -> Result<Vec<MenuItem>> {
    if title.trim().is_empty() {
        return Err(StoreError::EmptyTitle);
    }
    if find_by_id(items, id).is_none() {
        return Err(StoreError::NotFound(id));
    }

    Ok(items
        .iter()
        .map(|item| {
            if item.id == id {
                MenuItem {
                    id,
                    title: title.to_string(),
                    description: description.to_string(),
                    image: image.clone(),
                }
            } else {
                item.clone()
            }
        })
        .collect())
}

/// New collection without the given id. Missing id is a no-op, not an error.
pub fn remove(items: &[MenuItem], id: i32) -> Vec<MenuItem> {
    items
        .iter()
        .filter(|item| item.id != id)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn sample() -> Vec<MenuItem> {
        vec![
            MenuItem {
                id: 1,
                title: "Kacchi".to_string(),
                description: "biryani".to_string(),
                image: Some(ImageRef::Asset(0)),
            },
            MenuItem {
                id: 4,
                title: "Burger".to_string(),
                description: "beef".to_string(),
                image: None,
            },
        ]
    }

    #[test]
    fn test_add_assigns_max_plus_one() {
        let items = sample();
        let next = add(&items, "Tea", "hot", None).unwrap();
        assert_eq!(next.len(), items.len() + 1);
        // Prepended, id = max(1, 4) + 1
        assert_eq!(next[0].id, 5);
        assert_eq!(next[0].title, "Tea");
    }

    #[test]
    fn test_add_on_empty_collection_starts_at_one() {
        let next = add(&[], "Pizza", "cheesy", None).unwrap();
        assert_eq!(next.len(), 1);
        assert_eq!(next[0].id, 1);
    }

    #[test]
    fn test_add_rejects_blank_title() {
        let items = sample();
        for bad in ["", "   ", "\t\n"] {
            let err = add(&items, bad, "desc", None).unwrap_err();
            assert!(matches!(err, StoreError::EmptyTitle));
            assert_eq!(err.to_string(), "Please Insert Title");
        }
        // Collection yang dipegang caller tidak berubah
        assert_eq!(items, sample());
    }

    #[test]
    fn test_add_keeps_title_untrimmed() {
        let next = add(&[], " Pizza ", "", None).unwrap();
        assert_eq!(next[0].title, " Pizza ");
    }

    #[test]
    fn test_update_changes_exactly_one_item() {
        let items = sample();
        let next = update(
            &items,
            4,
            "Cheeseburger",
            "extra cheese",
            Some(ImageRef::Uri("/tmp/b.png".to_string())),
        )
        .unwrap();

        assert_eq!(next.len(), items.len());
        let updated = find_by_id(&next, 4).unwrap();
        assert_eq!(updated.title, "Cheeseburger");
        assert_eq!(updated.description, "extra cheese");
        assert_eq!(updated.image, Some(ImageRef::Uri("/tmp/b.png".to_string())));
        // Item lain tidak tersentuh
        assert_eq!(find_by_id(&next, 1), find_by_id(&items, 1));
        // Original snapshot tetap utuh (fresh copy, no aliasing)
        assert_eq!(items[1].title, "Burger");
    }

    #[test]
    fn test_update_missing_id_is_not_found() {
        let err = update(&sample(), 99, "X", "", None).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(99)));
    }

    #[test]
    fn test_update_rejects_blank_title() {
        let err = update(&sample(), 1, "  ", "", None).unwrap_err();
        assert!(matches!(err, StoreError::EmptyTitle));
    }

    #[test]
    fn test_remove_then_find_is_none() {
        let items = sample();
        let next = remove(&items, 1);
        assert_eq!(next.len(), 1);
        assert!(find_by_id(&next, 1).is_none());

        // Id yang tidak pernah ada: no-op
        let same = remove(&next, 999);
        assert_eq!(same, next);
    }

    #[test]
    fn test_next_id_ignores_order() {
        let mut items = sample();
        items.reverse();
        assert_eq!(next_id(&items), 5);
        assert_eq!(next_id(&[]), 1);
    }

    #[tokio::test]
    async fn test_load_on_empty_storage_returns_seed() {
        let store = MenuStore::new(MemoryStorage::new());
        let items = store.load().await;
        assert_eq!(items.len(), 8);
        let ids: Vec<i32> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(items[0].title, "Kacchi");
    }

    #[tokio::test]
    async fn test_save_then_load_roundtrip_sorted() {
        let store = MenuStore::new(MemoryStorage::new());
        let mut items = sample();
        items.reverse(); // persist unsorted on purpose
        store.save(&items).await.unwrap();

        let loaded = store.load().await;
        let mut expected = sample();
        sort_by_id(&mut expected);
        assert_eq!(loaded, expected);
    }

    #[tokio::test]
    async fn test_load_reseeds_on_corrupt_snapshot() {
        let storage = MemoryStorage::new();
        storage.set_item(STORAGE_KEY, "{not json").await.unwrap();
        let store = MenuStore::new(storage);
        assert_eq!(store.load().await.len(), 8);
    }

    #[tokio::test]
    async fn test_load_reseeds_on_empty_array() {
        let storage = MemoryStorage::new();
        storage.set_item(STORAGE_KEY, "[]").await.unwrap();
        let store = MenuStore::new(storage);
        assert_eq!(store.load().await.len(), 8);
    }

    #[tokio::test]
    async fn test_save_overwrites_whole_snapshot() {
        let store = MenuStore::new(MemoryStorage::new());
        store.save(&sample()).await.unwrap();
        let one = vec![sample().remove(1)];
        store.save(&one).await.unwrap();
        assert_eq!(store.load().await, one);
    }

    /// Full scenario: start empty -> add Pizza -> add Pasta -> remove(1).
    #[tokio::test]
    async fn test_create_update_remove_scenario() {
        let store = MenuStore::new(MemoryStorage::new());
        let items: Vec<MenuItem> = Vec::new();

        let items = add(&items, "Pizza", "cheesy", None).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, 1);
        assert_eq!(items[0].title, "Pizza");
        assert_eq!(items[0].description, "cheesy");
        assert_eq!(items[0].image, None);
        store.save(&items).await.unwrap();

        let items = add(&items, "Pasta", "", None).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, 2); // prepended

        let items = remove(&items, 1);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Pasta");
        store.save(&items).await.unwrap();

        let loaded = store.load().await;
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].title, "Pasta");
    }
}
