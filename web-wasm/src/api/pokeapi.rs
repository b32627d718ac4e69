//! PokeAPI 呼び出し（fetch）
//!
//! URL組み立てとパースは pokedex_common を使う。

use pokedex_common::{
    detail_url, listing_url, parse_detail_response, parse_listing_response, ListingPage,
    PokemonDetail, PokemonRef,
};
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// 取得エラー
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("Network response was not ok: {0}")]
    Network(String),

    #[error("Pokemon not found")]
    NotFound,

    #[error("Invalid response: {0}")]
    Parse(String),
}

impl From<JsValue> for FetchError {
    fn from(value: JsValue) -> Self {
        FetchError::Network(
            value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        )
    }
}

/// GETしてステータスとボディを返す
async fn get_text(url: &str) -> Result<(u16, String), FetchError> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)?;

    let window = web_sys::window().ok_or_else(|| FetchError::Network("window is not available".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let status = resp.status();
    let text = JsFuture::from(resp.text()?).await?;
    Ok((status, text.as_string().unwrap_or_default()))
}

/// 一覧を1ページ取得
pub async fn fetch_listing(base: &str, limit: u32, offset: u32) -> Result<ListingPage, FetchError> {
    let (status, body) = get_text(&listing_url(base, limit, offset)).await?;
    if !(200..300).contains(&status) {
        return Err(FetchError::Network(status.to_string()));
    }
    parse_listing_response(&body, limit, offset).map_err(|e| FetchError::Parse(e.to_string()))
}

/// 1件の詳細を取得
pub async fn fetch_detail(base: &str, pokemon: &PokemonRef) -> Result<PokemonDetail, FetchError> {
    let (status, body) = get_text(&detail_url(base, pokemon)).await?;
    if status == 404 {
        return Err(FetchError::NotFound);
    }
    if !(200..300).contains(&status) {
        return Err(FetchError::Network(status.to_string()));
    }
    parse_detail_response(&body).map_err(|e| FetchError::Parse(e.to_string()))
}
