//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("{0}")]
    Validation(#[from] ValidationError),
}

/// 捕獲タグ入力の検証エラー
///
/// 表示メッセージはそのままユーザーに見せる文言。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter both Nickname and Date.")]
    MissingFields,

    #[error("Please enter a valid date in MM/DD/YYYY format.")]
    InvalidDate,
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
