//! タイトル検索フィルタ

use crate::types::Show;

/// 大文字小文字を区別しない部分一致。空の検索語はすべて通す。
pub fn matches_search(title: &str, term: &str) -> bool {
    let term = term.trim();
    if term.is_empty() {
        return true;
    }
    title.to_lowercase().contains(&term.to_lowercase())
}

/// 検索語に一致するShowだけを残す
pub fn filter_shows(shows: Vec<Show>, term: &str) -> Vec<Show> {
    shows
        .into_iter()
        .filter(|show| matches_search(&show.title, term))
        .collect()
}
