//! 対話式閲覧モジュール
//!
//! 並び替えを選択し、確認のたびに次のページを読み込む。

use crate::browse::Browser;
use crate::catalog::CatalogSource;
use crate::error::Result;
use crate::output::{print_tiles, with_spinner};
use dialoguer::{Confirm, Select};
use series_catalog_common::{ApplyOutcome, CatalogConfig, ShowTile};

/// 並び替えを対話的に選ぶ
pub fn choose_sort(config: &CatalogConfig) -> Result<usize> {
    let labels: Vec<&str> = config.sort_options.iter().map(|o| o.label.as_str()).collect();
    let index = Select::new()
        .with_prompt("Ordenar por")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(index)
}

/// 選んだ並び替えを先頭にした設定（マウント時の並び替えになる）
pub fn with_chosen_sort(config: &CatalogConfig, index: usize) -> Result<CatalogConfig> {
    let mut catalog = config.clone();
    if let Some(sort) = config.sort_options.get(index) {
        catalog.prefer_sort(&sort.value)?;
    }
    Ok(catalog)
}

pub async fn run_interactive<S: CatalogSource>(source: S, config: &CatalogConfig) -> Result<()> {
    let index = choose_sort(config)?;
    let catalog = with_chosen_sort(config, index)?;
    let (mut browser, _) = with_spinner("読み込み中...", true, Browser::mount(source, &catalog, "")).await;

    let mut shown = 0;
    loop {
        let state = browser.state();
        let tiles: Vec<ShowTile> = state.tiles();
        print_tiles(&tiles[shown..]);
        shown = tiles.len();
        println!("{}", state.count_label());

        if let Some(error) = &state.error {
            println!("⚠ 取得に失敗しました: {}", error);
        }
        if !state.can_advance() {
            println!("✓ これ以上のページはありません");
            break;
        }

        let prompt = if state.error.is_some() { "¿Reintentar?" } else { "¿Cargar más?" };
        if !Confirm::new().with_prompt(prompt).default(true).interact()? {
            break;
        }

        match with_spinner("読み込み中...", true, browser.next_page()).await {
            Some(ApplyOutcome::Applied { added }) => tracing::debug!(added, "page loaded"),
            Some(_) => {}
            None => break,
        }
    }

    Ok(())
}
