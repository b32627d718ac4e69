//! PokeAPI のURL組み立てとレスポンスパーサー
//!
//! 通信そのものは各フロントエンド（CLIはreqwest、Webはfetch）が担当し、
//! ここではURLとJSONの扱いだけを共有する。

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::types::{ListingPage, ListingRecord, PokemonDetail, PokemonRef};

/// デフォルトのAPIベースURL
pub const DEFAULT_API_BASE: &str = "https://pokeapi.co/api/v2";

/// スプライト画像のベースURL
pub const DEFAULT_SPRITE_BASE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";

/// 1ページあたりの件数
pub const DEFAULT_PAGE_LIMIT: u32 = 50;

/// 一覧APIのレスポンス
#[derive(Debug, Deserialize)]
struct ListingResponse {
    #[serde(default)]
    results: Vec<ListingRecord>,
    #[serde(default)]
    next: Option<String>,
}

/// 一覧APIのURL
///
/// # Examples
/// ```
/// use pokedex_common::listing_url;
///
/// assert_eq!(
///     listing_url("https://pokeapi.co/api/v2", 50, 100),
///     "https://pokeapi.co/api/v2/pokemon/?limit=50&offset=100"
/// );
/// ```
pub fn listing_url(base: &str, limit: u32, offset: u32) -> String {
    format!(
        "{}/pokemon/?limit={}&offset={}",
        base.trim_end_matches('/'),
        limit,
        offset
    )
}

/// 詳細APIのURL
pub fn detail_url(base: &str, pokemon: &PokemonRef) -> String {
    format!("{}/pokemon/{}", base.trim_end_matches('/'), pokemon)
}

/// 数値IDからスプライト画像URLを作る
pub fn sprite_url(base: &str, id: u32) -> String {
    format!("{}/{}.png", base.trim_end_matches('/'), id)
}

/// レコードURLの末尾セグメントから数値IDを取り出す
///
/// `https://pokeapi.co/api/v2/pokemon/25/` → `Some(25)`
pub fn pokemon_id_from_url(url: &str) -> Option<u32> {
    url.split('/')
        .filter(|s| !s.is_empty())
        .next_back()
        .and_then(|s| s.parse().ok())
}

/// 一覧APIのレスポンスをパース
///
/// `next` の中身は見ず、値があるかどうかだけで次ページの有無を決める。
/// 次ページがある場合の `next_offset` は常に `offset + limit`。
///
/// # Arguments
/// * `body` - レスポンスボディ（JSON）
/// * `limit` - リクエストした件数
/// * `offset` - リクエストしたオフセット
pub fn parse_listing_response(body: &str, limit: u32, offset: u32) -> Result<ListingPage> {
    let response: ListingResponse = serde_json::from_str(body)?;

    let mut records = response.results;
    records.truncate(limit as usize);

    let has_next = response.next.is_some_and(|n| !n.is_empty());
    let next_offset = if has_next {
        Some(
            offset
                .checked_add(limit)
                .ok_or_else(|| Error::Api(format!("offset overflow: {} + {}", offset, limit)))?,
        )
    } else {
        None
    };

    Ok(ListingPage {
        records,
        next_offset,
    })
}

/// 詳細APIのレスポンスをパース
pub fn parse_detail_response(body: &str) -> Result<PokemonDetail> {
    Ok(serde_json::from_str(body)?)
}
