use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use series_catalog_common::{CatalogConfig, DEFAULT_CATALOG_API};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// カタログAPIのURLを上書きする環境変数
pub const CATALOG_API_ENV: &str = "SERIES_CATALOG_API";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub catalog_api: Option<String>,
    pub default_sort: Option<String>,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_api: None,
            default_sort: None,
            timeout_seconds: 30,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CatalogError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("series-catalog").join("config.json"))
    }

    /// カタログAPIのURL（引数 > 環境変数 > 設定ファイル > デフォルト）
    pub fn catalog_api(&self, cli_override: Option<&str>) -> String {
        let env = std::env::var(CATALOG_API_ENV).ok();
        resolve_catalog_api(cli_override, env.as_deref(), self.catalog_api.as_deref())
    }

    /// 共通ライブラリ用の設定を組み立てる
    ///
    /// `defaultSort` が指定されていれば並び替えリストの先頭に移す。
    pub fn catalog_config(&self, cli_override: Option<&str>) -> Result<CatalogConfig> {
        let mut catalog = CatalogConfig::with_api(self.catalog_api(cli_override));

        if let Some(key) = self.default_sort.as_deref() {
            catalog
                .prefer_sort(key)
                .map_err(|_| CatalogError::UnknownSort(key.to_string()))?;
        }

        Ok(catalog)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.max(1))
    }

    pub fn set_catalog_api(&mut self, url: String) -> Result<()> {
        if url.trim().is_empty() {
            return Err(CatalogError::Config("URLが空です".into()));
        }
        self.catalog_api = Some(url.trim().trim_end_matches('/').to_string());
        self.save()
    }

    pub fn set_default_sort(&mut self, key: String) -> Result<()> {
        let catalog = CatalogConfig::default();
        let sort = catalog
            .sort_by_key(&key)
            .map_err(|_| CatalogError::UnknownSort(key.clone()))?;
        self.default_sort = Some(sort.value);
        self.save()
    }
}

/// 空白だけの値は未指定として次の候補に進む
pub fn resolve_catalog_api(cli: Option<&str>, env: Option<&str>, file: Option<&str>) -> String {
    [cli, env, file]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|url| !url.is_empty())
        .unwrap_or(DEFAULT_CATALOG_API)
        .to_string()
}
