//! 捕獲タグストア
//!
//! 1つのキーにタグ配列をJSONで丸ごと保存する。追記のみで削除・編集はしない。
//! 並行書き込みの調停はしない（後勝ち）。

use crate::error::Result;
use crate::storage::KeyValueStore;
use crate::types::CaptureTag;
use crate::validate::validate_capture;

/// 保存キー
pub const STORAGE_KEY: &str = "capturedDetails";

/// 捕獲タグストア
#[derive(Debug, Clone, Default)]
pub struct TagStore<S> {
    store: S,
}

impl<S: KeyValueStore> TagStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// 保存済みタグを全件読み込み
    ///
    /// 未保存・破損データは空として扱う。
    pub fn load_all(&self) -> Vec<CaptureTag> {
        let Some(raw) = self.store.load(STORAGE_KEY) else {
            return Vec::new();
        };

        match serde_json::from_str(&raw) {
            Ok(tags) => tags,
            Err(e) => {
                tracing::warn!("ignoring malformed {} entry: {}", STORAGE_KEY, e);
                Vec::new()
            }
        }
    }

    /// タグを追記
    pub fn append(&mut self, tag: CaptureTag) -> Result<()> {
        let mut tags = self.load_all();
        tags.push(tag);
        let json = serde_json::to_string(&tags)?;
        self.store.save(STORAGE_KEY, &json)
    }

    /// `character` が一致する最初のタグ
    pub fn find_first_by_character(&self, name: &str) -> Option<CaptureTag> {
        find_first_by_character(&self.load_all(), name).cloned()
    }

    /// 入力を検証してからタグを追記
    ///
    /// 検証エラー時は何も書き込まない。
    pub fn capture(&mut self, character: &str, nickname: &str, date: &str) -> Result<CaptureTag> {
        validate_capture(nickname, date)?;
        let tag = CaptureTag::new(character, nickname, date);
        self.append(tag.clone())?;
        Ok(tag)
    }

    pub fn inner(&self) -> &S {
        &self.store
    }
}

/// 読み込み済みのタグ列から最初の一致を探す
pub fn find_first_by_character<'a>(tags: &'a [CaptureTag], name: &str) -> Option<&'a CaptureTag> {
    tags.iter().find(|t| t.character == name)
}
