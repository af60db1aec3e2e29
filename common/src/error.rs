//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("storage unavailable")]
    StorageUnavailable,

    #[error("storage error: {0}")]
    Storage(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Please pick a date and time.")]
    MissingMeetupDate,

    #[error("coordinate out of range: {field} = {value}")]
    CoordinateOutOfRange { field: &'static str, value: f64 },
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
