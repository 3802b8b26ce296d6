//! スナップショット出力テスト

use series_catalog::output::{write_snapshot, Snapshot};
use series_catalog_common::{CatalogConfig, Show, ViewState};
use tempfile::tempdir;

fn loaded_state() -> ViewState {
    let (mut state, request) = ViewState::mount(&CatalogConfig::with_api("http://catalog.test"), "?search=wire");
    let mut show = Show {
        id: "2".to_string(),
        title: "The Wire".to_string(),
        ..Default::default()
    };
    show.images.insert("fanart".to_string(), "http://x.trakt.us/b.jpg".to_string());
    state.apply_response(&request, vec![show]);
    state
}

/// スナップショットの内容
#[test]
fn test_snapshot_from_state() {
    let snapshot = Snapshot::from_state(&loaded_state());

    assert_eq!(snapshot.sort, "popularity");
    assert_eq!(snapshot.page, "all");
    assert_eq!(snapshot.search, "wire");
    assert_eq!(snapshot.count, 1);
    assert_eq!(snapshot.shows[0].href, "/show/2");
    assert_eq!(snapshot.shows[0].poster.as_deref(), Some("https://x.trakt.tv/b.jpg"));
}

/// JSONファイルへの書き出し
#[test]
fn test_write_snapshot_to_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("shows.json");

    write_snapshot(&loaded_state(), Some(&path)).expect("書き出し失敗");

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).expect("JSONが不正");
    assert_eq!(json["count"], 1);
    assert_eq!(json["page"], "all");
    assert_eq!(json["shows"][0]["title"], "The Wire");
    assert!(json["fetchedAt"].is_string());
    assert!(json.get("error").is_none());
}
