//! 捕獲タグ入力の検証
//!
//! 日付は形式チェックのみ（MM/DD/YYYY）。暦として存在するかは見ない。

use regex::Regex;

use crate::error::ValidationError;

lazy_static::lazy_static! {
    static ref DATE_RE: Regex =
        Regex::new(r"^(0[1-9]|1[0-2])/(0[1-9]|[12][0-9]|3[01])/[0-9]{4}$").unwrap();
}

/// 日付が MM/DD/YYYY 形式か
pub fn is_valid_date(date: &str) -> bool {
    DATE_RE.is_match(date)
}

/// ニックネームと日付を検証
///
/// どちらかが空なら `MissingFields`、日付が形式に合わなければ `InvalidDate`。
pub fn validate_capture(nickname: &str, date: &str) -> Result<(), ValidationError> {
    if nickname.is_empty() || date.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    if !is_valid_date(date) {
        return Err(ValidationError::InvalidDate);
    }
    Ok(())
}
