//! 捕獲タグ保存の統合テスト
//!
//! ファイルストア経由でタグの追記・読み込みを検証

use pokedex_common::{CaptureTag, KeyValueStore, TagStore, STORAGE_KEY};
use pokedex_rust::capture::capture_pokemon;
use pokedex_rust::error::PokedexError;
use pokedex_rust::store::FileStore;
use tempfile::tempdir;

/// 保存ファイルがない場合は空
#[test]
fn test_empty_storage() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = TagStore::new(FileStore::new(dir.path().join("storage.json")));

    assert!(store.load_all().is_empty());
    assert!(store.find_first_by_character("bulbasaur").is_none());
}

/// 追記して再読み込みすると1件増え、末尾が追記したタグ
#[test]
fn test_append_and_reload() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("storage.json");

    let mut store = TagStore::new(FileStore::new(&path));
    store
        .append(CaptureTag::new("ivysaur", "Ivy", "03/03/2023"))
        .expect("追記失敗");

    let before = TagStore::new(FileStore::new(&path)).load_all().len();
    let tag = CaptureTag::new("pikachu", "Sparky", "01/15/2024");
    store.append(tag.clone()).expect("追記失敗");

    let reloaded = TagStore::new(FileStore::new(&path)).load_all();
    assert_eq!(reloaded.len(), before + 1);
    assert_eq!(reloaded.last(), Some(&tag));
}

/// 同名タグは最初の一件が返る
#[test]
fn test_find_first_of_duplicates() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut store = TagStore::new(FileStore::new(dir.path().join("storage.json")));

    for (name, nickname) in [("bulbasaur", "one"), ("ivysaur", "two"), ("bulbasaur", "three")] {
        store
            .append(CaptureTag::new(name, nickname, "01/01/2024"))
            .expect("追記失敗");
    }

    let found = store.find_first_by_character("bulbasaur").expect("タグが見つからない");
    assert_eq!(found.nickname, "one");
}

/// 保存形式は capturedDetails キーのJSON配列
#[test]
fn test_storage_format() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("storage.json");

    let mut store = TagStore::new(FileStore::new(&path));
    store
        .append(CaptureTag::new("eevee", "Vee", "05/05/2025"))
        .expect("追記失敗");

    let raw = FileStore::new(&path).load(STORAGE_KEY).expect("キーがない");
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{"character": "eevee", "nickname": "Vee", "date": "05/05/2025"}])
    );
}

/// 破損した保存データは空として扱い、追記で上書きされる
#[test]
fn test_malformed_entry() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("storage.json");

    let mut raw = FileStore::new(&path);
    raw.save(STORAGE_KEY, "[{\"character\": ").unwrap();

    let mut store = TagStore::new(FileStore::new(&path));
    assert!(store.load_all().is_empty());

    store
        .append(CaptureTag::new("mew", "Pinky", "07/07/2007"))
        .expect("追記失敗");
    assert_eq!(store.load_all().len(), 1);
}

/// 検証エラーでは書き込まない
#[test]
fn test_capture_rejects_invalid_input() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("storage.json");
    let mut store = TagStore::new(FileStore::new(&path));

    for (nickname, date) in [("", "01/01/2024"), ("Sparky", ""), ("Sparky", "2/30/2024"), ("Sparky", "13/01/2024")] {
        let err = capture_pokemon(&mut store, "pikachu", nickname, date).unwrap_err();
        assert!(matches!(err, PokedexError::Validation(_)));
    }
    assert!(!path.exists());

    // 暦チェックはしない
    capture_pokemon(&mut store, "pikachu", "Sparky", "02/30/2024").expect("登録失敗");
    assert_eq!(store.load_all().len(), 1);
}
