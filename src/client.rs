//! PokeAPI クライアント
//!
//! 一覧（ページング）と詳細の取得。失敗時のリトライはしない。

use crate::config::Config;
use crate::error::{PokedexError, Result};
use pokedex_common::{
    detail_url, listing_url, parse_detail_response, parse_listing_response, ListingPage,
    PokemonDetail, PokemonRef,
};
use reqwest::StatusCode;
use std::time::Duration;

pub struct PokeApiClient {
    http: reqwest::Client,
    base: String,
}

impl PokeApiClient {
    pub fn new(base: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("pokedex-rust/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base: base.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.api_base.clone(),
            Duration::from_secs(config.timeout_seconds),
        )
    }

    /// 一覧を1ページ取得
    pub async fn list(&self, limit: u32, offset: u32) -> Result<ListingPage> {
        if limit == 0 {
            return Err(PokedexError::InvalidLimit(limit));
        }

        let url = listing_url(&self.base, limit, offset);
        tracing::debug!("GET {}", url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PokedexError::Network(format!("{} ({})", status, url)));
        }

        let body = response.text().await?;
        let page = parse_listing_response(&body, limit, offset)?;
        tracing::debug!(
            "received {} records, next_offset={:?}",
            page.records.len(),
            page.next_offset
        );
        Ok(page)
    }

    /// 1件の詳細を取得
    ///
    /// 404 は `NotFound`、それ以外の失敗は `Network`。
    pub async fn detail(&self, pokemon: &PokemonRef) -> Result<PokemonDetail> {
        let url = detail_url(&self.base, pokemon);
        tracing::debug!("GET {}", url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(PokedexError::NotFound(pokemon.to_string()));
        }
        if !status.is_success() {
            return Err(PokedexError::Network(format!("{} ({})", status, url)));
        }

        let body = response.text().await?;
        Ok(parse_detail_response(&body)?)
    }
}
