//! 表示用タイル（CLI/WASM共通）

use serde::Serialize;

use crate::types::Show;

/// グリッドに並べるポスタータイル
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowTile {
    pub id: String,
    pub title: String,
    pub href: String,
    pub poster: Option<String>,
}

impl From<&Show> for ShowTile {
    fn from(show: &Show) -> Self {
        Self {
            id: show.id.clone(),
            title: show.title.clone(),
            href: show.detail_path(),
            poster: show.fanart().map(str::to_string),
        }
    }
}

/// 件数表示
pub fn count_label(count: usize) -> String {
    format!("Mostrando {} series:", count)
}
