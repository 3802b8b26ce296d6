//! ビルド時設定

use series_catalog_common::{CatalogConfig, DEFAULT_CATALOG_API};

/// カタログAPIのURLはビルド時の `CATALOG_API` で上書きできる
pub fn catalog_config() -> CatalogConfig {
    CatalogConfig::with_api(option_env!("CATALOG_API").unwrap_or(DEFAULT_CATALOG_API))
}
