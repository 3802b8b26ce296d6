//! 並び替えオプション

use serde::{Deserialize, Serialize};

/// 並び替えオプション（キー, 表示名）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOption {
    pub value: String,
    pub label: String,
}

impl SortOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// 組み込みの並び替えオプション。先頭がデフォルト。
pub fn default_sort_options() -> Vec<SortOption> {
    vec![
        SortOption::new("popularity", "Popularidad"),
        SortOption::new("title", "Título"),
        SortOption::new("year", "Año"),
        SortOption::new("rating", "Valoración"),
    ]
}

/// キーでオプションを検索（大文字小文字を区別しない）
pub fn find_sort<'a>(options: &'a [SortOption], key: &str) -> Option<&'a SortOption> {
    let key = key.trim();
    options.iter().find(|o| o.value.eq_ignore_ascii_case(key))
}
