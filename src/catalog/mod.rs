//! カタログAPI取得モジュール
//!
//! `CatalogSource` を実装した取得元から ViewState のリクエストを実行する。

mod client;

pub use client::CatalogClient;

use crate::error::Result;
use series_catalog_common::{FetchRequest, Show};
use std::future::Future;

/// シリーズ一覧の取得元
pub trait CatalogSource {
    fn fetch_shows(&self, request: &FetchRequest) -> impl Future<Output = Result<Vec<Show>>> + Send;
}
