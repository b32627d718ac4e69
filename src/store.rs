//! ファイルベースのキー・バリューストア
//!
//! localStorage と同じ「文字列キー → 文字列値」のマップを1つのJSONファイルに保存する。
//! 書き込みのたびにファイル全体を書き直す。

use pokedex_common::{KeyValueStore, Result};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// ファイル全体を読み込み（存在しない・壊れている場合は空）
    fn read_entries(&self) -> BTreeMap<String, String> {
        if !self.path.exists() {
            return BTreeMap::new();
        }

        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) => {
                tracing::warn!("cannot open {}: {}", self.path.display(), e);
                return BTreeMap::new();
            }
        };

        match serde_json::from_reader(BufReader::new(file)) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("ignoring malformed storage file {}: {}", self.path.display(), e);
                BTreeMap::new()
            }
        }
    }
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> Option<String> {
        self.read_entries().remove(key)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read_entries();
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut writer, &entries)?;
        writer.flush()?;
        Ok(())
    }
}
