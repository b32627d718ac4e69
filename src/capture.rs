//! 捕獲タグの登録

use crate::error::{PokedexError, Result};
use dialoguer::Input;
use pokedex_common::{CaptureTag, KeyValueStore, TagStore};

/// 登録成功時のメッセージ
pub const SUCCESS_MESSAGE: &str = "Pokemon tagged as captured successfully!";

/// 今日の日付（MM/DD/YYYY）
pub fn today_string() -> String {
    chrono::Local::now().format("%m/%d/%Y").to_string()
}

/// 未指定の項目を対話入力で補う
///
/// 空入力も受け付け、検証は登録時にまとめて行う。
pub fn resolve_fields(
    nickname: Option<String>,
    date: Option<String>,
    today: bool,
) -> Result<(String, String)> {
    let nickname = match nickname {
        Some(n) => n,
        None => Input::<String>::new()
            .with_prompt("Nickname")
            .allow_empty(true)
            .interact_text()?,
    };

    let date = match (date, today) {
        (Some(d), _) => d,
        (None, true) => today_string(),
        (None, false) => Input::<String>::new()
            .with_prompt("Date (MM/DD/YYYY)")
            .allow_empty(true)
            .interact_text()?,
    };

    Ok((nickname, date))
}

/// 検証してタグを追記
pub fn capture_pokemon<S: KeyValueStore>(
    store: &mut TagStore<S>,
    character: &str,
    nickname: &str,
    date: &str,
) -> Result<CaptureTag> {
    store.capture(character, nickname, date).map_err(|e| match e {
        pokedex_common::Error::Validation(v) => PokedexError::Validation(v),
        other => PokedexError::Common(other),
    })
}
