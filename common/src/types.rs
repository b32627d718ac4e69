//! 図鑑データの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - ListingRecord: 一覧APIの1レコード（name + url）
//! - ListingPage: 一覧APIの1ページ分と次ページのオフセット
//! - PokemonDetail: 詳細APIのレコード
//! - CaptureTag: ユーザーが付ける「捕獲済み」タグ

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// 一覧APIのレコード
///
/// 識別子は `name`。数値IDは `url` の末尾セグメントから取り出す。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingRecord {
    pub name: String,
    pub url: String,
}

impl ListingRecord {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// `url` から数値IDを取り出す
    pub fn id(&self) -> Option<u32> {
        crate::api::pokemon_id_from_url(&self.url)
    }
}

/// 一覧APIの1ページ
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingPage {
    pub records: Vec<ListingRecord>,
    /// 次ページのオフセット（最終ページなら None）
    pub next_offset: Option<u32>,
}

/// 捕獲タグ
///
/// 同じ `character` に複数のタグが付いてもよい。参照時は最初の一件を使う。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureTag {
    pub character: String,
    pub nickname: String,
    /// MM/DD/YYYY
    pub date: String,
}

impl CaptureTag {
    pub fn new(
        character: impl Into<String>,
        nickname: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            character: character.into(),
            nickname: nickname.into(),
            date: date.into(),
        }
    }
}

/// 名前付きリソース参照（ability等）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// 特性スロット
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub slot: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
}

/// 詳細APIのレコード（使うフィールドのみ）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonDetail {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub base_experience: Option<u32>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub sprites: Sprites,
}

impl PokemonDetail {
    /// 特性名の一覧（API順）
    pub fn ability_names(&self) -> Vec<&str> {
        self.abilities.iter().map(|a| a.ability.name.as_str()).collect()
    }
}

/// レコード識別子（数値IDまたは名前）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PokemonRef {
    Id(u32),
    Name(String),
}

impl FromStr for PokemonRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(Error::Api("empty pokemon reference".into()));
        }
        if trimmed.chars().all(|c| c.is_ascii_digit()) {
            return trimmed
                .parse::<u32>()
                .map(PokemonRef::Id)
                .map_err(|e| Error::Api(format!("invalid pokemon id {}: {}", trimmed, e)));
        }
        let name = trimmed.to_lowercase();
        // URLパスにそのまま埋め込むため、名前に使われる文字以外は受け付けない
        if !name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-') {
            return Err(Error::Api(format!("invalid pokemon name: {}", trimmed)));
        }
        Ok(PokemonRef::Name(name))
    }
}

impl fmt::Display for PokemonRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PokemonRef::Id(id) => write!(f, "{}", id),
            PokemonRef::Name(name) => write!(f, "{}", name),
        }
    }
}

/// 表示モード
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "grid" | "g" => Ok(ViewMode::Grid),
            "list" | "l" => Ok(ViewMode::List),
            _ => Err(format!("Unknown view mode: {}. Use grid or list", s)),
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
