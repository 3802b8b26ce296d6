//! カタログ設定（CLI/WASM共通）

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::sort::{default_sort_options, find_sort, SortOption};

/// カタログAPIのデフォルトURL
pub const DEFAULT_CATALOG_API: &str = "https://series-catalog-api.herokuapp.com";

/// 1ページあたりの件数（APIの固定値）
pub const PER_PAGE: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogConfig {
    pub catalog_api: String,
    pub sort_options: Vec<SortOption>,
    pub per_page: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            catalog_api: DEFAULT_CATALOG_API.to_string(),
            sort_options: default_sort_options(),
            per_page: PER_PAGE,
        }
    }
}

impl CatalogConfig {
    pub fn with_api(catalog_api: impl Into<String>) -> Self {
        Self {
            catalog_api: catalog_api.into(),
            ..Default::default()
        }
    }

    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// JSONファイルから読み込み（非WASM環境のみ）
    #[cfg(not(feature = "wasm"))]
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if self.catalog_api.trim().is_empty() {
            return Err(Error::Config("catalogApi is empty".into()));
        }
        if self.sort_options.is_empty() {
            return Err(Error::Config("sortOptions is empty".into()));
        }
        if self.per_page == 0 {
            return Err(Error::Config("perPage must be positive".into()));
        }
        Ok(())
    }

    /// デフォルトの並び替え（先頭のオプション）
    pub fn default_sort(&self) -> SortOption {
        self.sort_options
            .first()
            .cloned()
            .unwrap_or_else(|| default_sort_options().remove(0))
    }

    /// キーから並び替えを解決
    pub fn sort_by_key(&self, key: &str) -> Result<SortOption> {
        find_sort(&self.sort_options, key)
            .cloned()
            .ok_or_else(|| Error::Config(format!("Unknown sort: {}", key)))
    }

    /// 指定の並び替えを先頭に移してデフォルトにする
    pub fn prefer_sort(&mut self, key: &str) -> Result<SortOption> {
        let sort = self.sort_by_key(key)?;
        self.sort_options.retain(|o| o.value != sort.value);
        self.sort_options.insert(0, sort.clone());
        Ok(sort)
    }
}
