use crate::error::{PokedexError, Result};
use pokedex_common::{DEFAULT_API_BASE, DEFAULT_PAGE_LIMIT, DEFAULT_SPRITE_BASE};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// APIベースURLを上書きする環境変数
pub const API_BASE_ENV: &str = "POKEDEX_API_BASE";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_base: String,
    pub sprite_base: String,
    pub page_limit: u32,
    /// タグ保存ファイル（省略時は設定ディレクトリの storage.json）
    pub storage_path: Option<PathBuf>,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.into(),
            sprite_base: DEFAULT_SPRITE_BASE.into(),
            page_limit: DEFAULT_PAGE_LIMIT,
            storage_path: None,
            timeout_seconds: 30,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path()?)?;

        // 環境変数を優先
        if let Ok(base) = std::env::var(API_BASE_ENV) {
            if !base.trim().is_empty() {
                config.api_base = base;
            }
        }

        Ok(config)
    }

    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!("config loaded from {}", path.display());
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PokedexError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("pokedex"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// タグ保存ファイルのパス
    pub fn storage_path(&self) -> Result<PathBuf> {
        match &self.storage_path {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::config_dir()?.join("storage.json")),
        }
    }

    pub fn set_api_base(&mut self, base: String) -> Result<()> {
        self.api_base = base;
        self.save()
    }

    pub fn set_page_limit(&mut self, limit: u32) -> Result<()> {
        if limit == 0 {
            return Err(PokedexError::InvalidLimit(limit));
        }
        self.page_limit = limit;
        self.save()
    }
}
