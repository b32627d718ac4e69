use thiserror::Error;

#[derive(Error, Debug)]
pub enum PokedexError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("Network response was not ok: {0}")]
    Network(String),

    #[error("Pokemon not found: {0}")]
    NotFound(String),

    #[error("limitは1以上を指定してください: {0}")]
    InvalidLimit(u32),

    #[error("不正な指定です: {0}")]
    InvalidReference(String),

    #[error("{0}")]
    Validation(#[from] pokedex_common::ValidationError),

    #[error("{0}")]
    Common(#[from] pokedex_common::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("入力エラー: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl From<reqwest::Error> for PokedexError {
    fn from(e: reqwest::Error) -> Self {
        PokedexError::Network(e.to_string())
    }
}

impl PokedexError {
    /// 利用者向けに表示する1行メッセージ
    ///
    /// 検証エラーは文言そのまま、見つからない場合は固定文言。
    pub fn report(&self) -> String {
        match self {
            PokedexError::NotFound(_) => "Pokemon not found".to_string(),
            PokedexError::Validation(v) => v.to_string(),
            other => format!("Error: {}", other),
        }
    }
}

pub type Result<T> = std::result::Result<T, PokedexError>;
