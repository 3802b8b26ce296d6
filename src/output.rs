//! 結果の表示とJSONスナップショット

use crate::error::Result;
use chrono::{DateTime, Utc};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use series_catalog_common::{ShowTile, ViewState};
use std::future::Future;
use std::path::Path;
use std::time::Duration;

/// 取得時点の一覧（APIのデータは閲覧中に古くなりうる）
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub fetched_at: DateTime<Utc>,
    pub sort: String,
    pub page: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub search: String,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub shows: Vec<ShowTile>,
}

impl Snapshot {
    pub fn from_state(state: &ViewState) -> Self {
        Self {
            fetched_at: Utc::now(),
            sort: state.sort.value.clone(),
            page: state.page.to_string(),
            search: state.search.clone(),
            count: state.shows.len(),
            error: state.error.clone(),
            shows: state.tiles(),
        }
    }
}

/// 一覧をテキストで表示
pub fn print_tiles(tiles: &[ShowTile]) {
    for tile in tiles {
        println!("  {}  {}", tile.title, tile.href);
        if let Some(poster) = &tile.poster {
            println!("      {}", poster);
        }
    }
}

pub fn print_state(state: &ViewState) {
    println!("{}", state.count_label());
    print_tiles(&state.tiles());
    if let Some(error) = &state.error {
        println!("⚠ 取得に失敗しました: {}", error);
    }
}

/// スナップショットをJSONで出力（ファイル指定がなければ標準出力）
pub fn write_snapshot(state: &ViewState, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(&Snapshot::from_state(state))?;
    match output {
        Some(path) => {
            std::fs::write(path, json)?;
            println!("✔ 結果を保存: {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

/// 取得中スピナーを表示しながら待つ
pub async fn with_spinner<F: Future>(message: &str, enabled: bool, fut: F) -> F::Output {
    if !enabled {
        return fut.await;
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));

    let output = fut.await;
    spinner.finish_and_clear();
    output
}
