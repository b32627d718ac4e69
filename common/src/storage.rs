//! キー・バリューストアの抽象化
//!
//! ブラウザの localStorage と同じく「文字列キー → 文字列値」だけを扱う。
//! CLIはファイル、Webは localStorage、テストはメモリ上の実装を差し込む。

use std::collections::HashMap;

use crate::error::Result;

/// 文字列キー・バリューストア
pub trait KeyValueStore {
    /// 値を読み込む（存在しなければ None）
    fn load(&self, key: &str) -> Option<String>;

    /// 値を丸ごと書き込む
    fn save(&mut self, key: &str, value: &str) -> Result<()>;
}

/// メモリ上のストア
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 初期値付きで作成
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn load(&self, key: &str) -> Option<String> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).save(key, value)
    }
}
