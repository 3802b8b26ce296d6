//! カタログの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - Show: カタログAPIが返すシリーズ1件
//! - FetchRequest: ViewStateが発行する取得リクエスト

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::page::PageCursor;

/// タイルに使う画像の種類
pub const POSTER_KIND: &str = "fanart";

/// シリーズ（カタログAPIのレコード）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Show {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(default)]
    pub title: String,

    /// 画像種別 → URL
    #[serde(default)]
    pub images: BTreeMap<String, String>,
}

impl Show {
    /// ポスター画像のURL
    pub fn fanart(&self) -> Option<&str> {
        self.images.get(POSTER_KIND).map(String::as_str)
    }

    /// 詳細ページのパス
    pub fn detail_path(&self) -> String {
        format!("/show/{}", self.id)
    }
}

/// 取得リクエスト
///
/// `generation` は発行時点の世代番号。古い世代の応答は破棄される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub url: String,
    pub page: PageCursor,
    pub sort: String,
    pub search: String,
    pub generation: u64,
}
