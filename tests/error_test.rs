//! エラーケーステスト
//!
//! 各種エラーの表示と変換を検証

use pokedex_common::ValidationError;
use pokedex_rust::error::PokedexError;

/// PokedexErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        PokedexError::Config("テスト設定エラー".to_string()),
        PokedexError::Network("500 Internal Server Error".to_string()),
        PokedexError::NotFound("missingno".to_string()),
        PokedexError::InvalidLimit(0),
        PokedexError::InvalidReference("".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

#[test]
fn test_network_error_message() {
    let err = PokedexError::Network("503".to_string());
    assert!(err.to_string().starts_with("Network response was not ok"));
}

#[test]
fn test_not_found_message() {
    let err = PokedexError::NotFound("missingno".to_string());
    assert_eq!(err.to_string(), "Pokemon not found: missingno");
}

/// 検証エラーはメッセージがそのまま表示される
#[test]
fn test_validation_conversion() {
    let err: PokedexError = ValidationError::MissingFields.into();
    assert!(matches!(err, PokedexError::Validation(ValidationError::MissingFields)));
    assert_eq!(err.to_string(), "Please enter both Nickname and Date.");
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: PokedexError = io_err.into();

    assert!(matches!(err, PokedexError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: PokedexError = json_err.into();

    assert!(matches!(err, PokedexError::JsonParse(_)));
}

/// common::Errorからの変換
#[test]
fn test_common_error_conversion() {
    let common_err = pokedex_common::Error::Storage("quota exceeded".to_string());
    let err: PokedexError = common_err.into();

    assert!(matches!(err, PokedexError::Common(_)));
    assert!(err.to_string().contains("quota exceeded"));
}

/// 終了時に表示する文言は1行で、種類ごとに決まった形
#[test]
fn test_report_messages() {
    assert_eq!(
        PokedexError::NotFound("missingno".to_string()).report(),
        "Pokemon not found"
    );
    assert_eq!(
        PokedexError::Validation(ValidationError::InvalidDate).report(),
        "Please enter a valid date in MM/DD/YYYY format."
    );
    assert_eq!(
        PokedexError::Network("500 Internal Server Error".to_string()).report(),
        "Error: Network response was not ok: 500 Internal Server Error"
    );
    assert!(!PokedexError::InvalidLimit(0).report().contains('\n'));
}
