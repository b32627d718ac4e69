//! localStorage を使うキー・バリューストア

use gloo::storage::{LocalStorage, Storage};
use pokedex_common::{Error, KeyValueStore, Result, TagStore};

/// window.localStorage
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl KeyValueStore for BrowserStore {
    fn load(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| Error::Storage(format!("{:?}", e)))
    }
}

/// ブラウザのタグストア
pub fn tag_store() -> TagStore<BrowserStore> {
    TagStore::new(BrowserStore)
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use pokedex_common::{CaptureTag, STORAGE_KEY};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_tag_store_roundtrip() {
        LocalStorage::delete(STORAGE_KEY);

        let mut store = tag_store();
        assert!(store.load_all().is_empty());

        let tag = CaptureTag::new("pikachu", "Sparky", "01/15/2024");
        store.append(tag.clone()).expect("append failed");
        assert_eq!(store.load_all().last(), Some(&tag));

        LocalStorage::delete(STORAGE_KEY);
    }

    #[wasm_bindgen_test]
    fn wasm_malformed_entry_is_empty() {
        let mut raw = BrowserStore;
        raw.save(STORAGE_KEY, "not json").expect("save failed");
        assert!(tag_store().load_all().is_empty());

        LocalStorage::delete(STORAGE_KEY);
    }
}
