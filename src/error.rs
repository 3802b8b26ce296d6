use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("不明な並び替えキー: {0}")]
    UnknownSort(String),

    #[error("HTTPエラー: ステータス {0}")]
    Http(u16),

    #[error("API呼び出しエラー: {0}")]
    Request(#[from] reqwest::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("入力エラー: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error(transparent)]
    Common(#[from] series_catalog_common::Error),

    #[error("シリーズが見つかりません: {0}")]
    NoShowsFound(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
