//! ビュー状態と遷移（CLI/WASM共通）
//!
//! 各操作は状態を更新し、呼び出し側が実行すべき `FetchRequest` を返す。
//! 取得の実行自体は呼び出し側（WASMは fetch、CLIは reqwest）が行い、
//! 結果を `apply_response` / `apply_failure` で戻す。
//!
//! 発行のたびに世代番号が進み、古い世代の結果は破棄される。
//! 並び替え変更後に届いた前のページの結果はリストに混ざらない。

use crate::config::CatalogConfig;
use crate::filter::filter_shows;
use crate::images::rewrite_images;
use crate::page::PageCursor;
use crate::query::{search_term, shows_url};
use crate::sort::SortOption;
use crate::tile::{count_label, ShowTile};
use crate::types::{FetchRequest, Show};

/// 応答適用の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// 追加された件数（フィルタ後）
    Applied { added: usize },
    /// 失敗を記録した
    Failed,
    /// 古い世代の応答なので破棄した
    Stale,
}

#[derive(Debug, Clone)]
pub struct ViewState {
    pub loading: bool,
    pub sort: SortOption,
    pub page: PageCursor,
    pub search: String,
    pub shows: Vec<Show>,
    pub per_page: usize,
    /// 最後の取得失敗メッセージ
    pub error: Option<String>,
    /// 番号ページが件数不足で返った（これ以上ページがない）
    pub exhausted: bool,
    catalog_api: String,
    generation: u64,
}

impl ViewState {
    /// マウント時の初期化。最初の取得リクエストも返す。
    pub fn mount(config: &CatalogConfig, query: &str) -> (Self, FetchRequest) {
        let search = search_term(query).unwrap_or_default();
        let page = if search.is_empty() {
            PageCursor::first()
        } else {
            PageCursor::All
        };

        let mut state = Self {
            loading: false,
            sort: config.default_sort(),
            page,
            search,
            shows: Vec::new(),
            per_page: config.per_page,
            error: None,
            exhausted: false,
            catalog_api: config.catalog_api.clone(),
            generation: 0,
        };
        let request = state.begin_fetch();
        (state, request)
    }

    /// ナビゲーション変更。新しい空でない検索語のときだけ再取得する。
    pub fn on_navigation(&mut self, query: &str) -> Option<FetchRequest> {
        let term = search_term(query)?;
        if term == self.search {
            return None;
        }

        self.search = term;
        self.page = PageCursor::All;
        self.reset_list();
        Some(self.begin_fetch())
    }

    /// 並び替え変更。ページを1に戻してリストを空にする。
    pub fn change_sort(&mut self, sort: SortOption) -> FetchRequest {
        self.sort = sort;
        self.page = PageCursor::first();
        self.reset_list();
        self.begin_fetch()
    }

    /// 次のページへ進む
    ///
    /// 取得中、`All` モード、末尾到達時は何もしない。
    /// 直前の取得が失敗していれば同じページを再取得する。
    pub fn next_page(&mut self) -> Option<FetchRequest> {
        if self.loading || self.page.is_all() {
            return None;
        }
        if self.error.is_some() {
            return self.retry();
        }
        if self.exhausted {
            return None;
        }

        self.page = self.page.next()?;
        Some(self.begin_fetch())
    }

    /// 失敗した取得を同じカーソルでやり直す
    pub fn retry(&mut self) -> Option<FetchRequest> {
        if self.loading || self.error.is_none() {
            return None;
        }
        Some(self.begin_fetch())
    }

    /// 取得開始。以前に発行したリクエストはすべて古くなる。
    pub fn begin_fetch(&mut self) -> FetchRequest {
        self.loading = true;
        self.error = None;
        self.generation += 1;

        FetchRequest {
            url: shows_url(&self.catalog_api, self.page, &self.sort.value),
            page: self.page,
            sort: self.sort.value.clone(),
            search: self.search.clone(),
            generation: self.generation,
        }
    }

    /// 取得結果を反映する
    pub fn apply_response(&mut self, request: &FetchRequest, shows: Vec<Show>) -> ApplyOutcome {
        if !self.is_current(request) {
            return ApplyOutcome::Stale;
        }

        let received = shows.len();
        let shows: Vec<Show> = shows
            .into_iter()
            .map(|mut show| {
                rewrite_images(&mut show);
                show
            })
            .collect();
        let matched = filter_shows(shows, &request.search);
        let added = matched.len();

        self.shows.extend(matched);
        self.loading = false;
        if !request.page.is_all() && received < self.per_page {
            self.exhausted = true;
        }

        ApplyOutcome::Applied { added }
    }

    /// 取得失敗を反映する
    pub fn apply_failure(&mut self, request: &FetchRequest, message: impl Into<String>) -> ApplyOutcome {
        if !self.is_current(request) {
            return ApplyOutcome::Stale;
        }
        self.loading = false;
        self.error = Some(message.into());
        ApplyOutcome::Failed
    }

    pub fn is_current(&self, request: &FetchRequest) -> bool {
        request.generation == self.generation
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// スクロールでの追加読み込みが可能か
    pub fn can_advance(&self) -> bool {
        !self.loading && !self.page.is_all() && (!self.exhausted || self.error.is_some())
    }

    pub fn tiles(&self) -> Vec<ShowTile> {
        self.shows.iter().map(ShowTile::from).collect()
    }

    pub fn count_label(&self) -> String {
        count_label(self.shows.len())
    }

    pub fn find_show(&self, id: &str) -> Option<&Show> {
        self.shows.iter().find(|show| show.id == id)
    }

    fn reset_list(&mut self) {
        self.shows.clear();
        self.exhausted = false;
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PER_PAGE;

    const BASE: &str = "https://catalog.test";

    fn config() -> CatalogConfig {
        CatalogConfig::with_api(BASE)
    }

    fn show(id: &str, title: &str, fanart: &str) -> Show {
        let mut show = Show {
            id: id.to_string(),
            title: title.to_string(),
            ..Default::default()
        };
        show.images.insert("fanart".to_string(), fanart.to_string());
        show
    }

    fn full_page(prefix: &str) -> Vec<Show> {
        (0..PER_PAGE)
            .map(|i| show(&format!("{prefix}{i}"), &format!("{prefix} {i}"), "https://x.trakt.tv/p.jpg"))
            .collect()
    }

    #[test]
    fn test_mount_without_search_requests_page_one() {
        let (state, request) = ViewState::mount(&config(), "");

        assert!(state.loading);
        assert_eq!(request.page, PageCursor::first());
        assert_eq!(request.sort, "popularity");
        assert_eq!(request.url, "https://catalog.test/shows/1?sort=popularity");
        assert!(state.shows.is_empty());
    }

    #[test]
    fn test_mount_with_search_requests_all() {
        let (mut state, request) = ViewState::mount(&config(), "?search=wire");

        assert_eq!(request.page, PageCursor::All);
        assert_eq!(request.search, "wire");
        assert_eq!(request.url, "https://catalog.test/shows/all?sort=popularity");

        state.apply_response(&request, vec![]);
        assert!(!state.loading);
        assert_eq!(state.next_page(), None);
        assert_eq!(state.page, PageCursor::All);
    }

    #[test]
    fn test_next_page_noop_while_loading() {
        let (mut state, _request) = ViewState::mount(&config(), "");
        assert!(state.loading);
        assert_eq!(state.next_page(), None);
        assert_eq!(state.page, PageCursor::first());
    }

    #[test]
    fn test_next_page_advances_cursor() {
        let (mut state, request) = ViewState::mount(&config(), "");
        state.apply_response(&request, full_page("a"));

        let next = state.next_page().expect("次ページが発行されない");
        assert_eq!(next.page.number(), Some(2));
        assert_eq!(next.url, "https://catalog.test/shows/2?sort=popularity");
        assert!(state.loading);
    }

    #[test]
    fn test_change_sort_resets_list_and_page() {
        let (mut state, request) = ViewState::mount(&config(), "");
        state.apply_response(&request, full_page("a"));
        let second = state.next_page().unwrap();
        state.apply_response(&second, full_page("b"));
        assert_eq!(state.shows.len(), 2 * PER_PAGE);

        let request = state.change_sort(SortOption::new("title", "Título"));

        assert!(state.shows.is_empty());
        assert_eq!(state.page, PageCursor::first());
        assert_eq!(request.page, PageCursor::first());
        assert_eq!(request.url, "https://catalog.test/shows/1?sort=title");
    }

    #[test]
    fn test_stale_page_dropped_after_sort_change() {
        let (mut state, first) = ViewState::mount(&config(), "");
        state.apply_response(&first, full_page("a"));
        let second = state.next_page().unwrap();
        state.apply_response(&second, full_page("b"));
        let third = state.next_page().unwrap();
        assert_eq!(third.page.number(), Some(3));

        // page 3 が未完了のまま並び替えを変更
        let by_title = state.change_sort(SortOption::new("title", "Título"));

        assert_eq!(state.apply_response(&third, full_page("stale")), ApplyOutcome::Stale);
        assert!(state.shows.is_empty());
        assert!(state.loading);

        let outcome = state.apply_response(&by_title, vec![show("t1", "Alf", "http://x.trakt.us/a.jpg")]);
        assert_eq!(outcome, ApplyOutcome::Applied { added: 1 });
        assert_eq!(state.shows.len(), 1);
        assert_eq!(state.shows[0].id, "t1");
    }

    #[test]
    fn test_search_filter_and_rewrite_scenario() {
        let (mut state, request) = ViewState::mount(&config(), "?search=wire");
        let fetched = vec![
            show("1", "Fringe", "http://x.trakt.us/a.jpg"),
            show("2", "The Wire", "https://x.trakt.tv/b.jpg"),
        ];

        let outcome = state.apply_response(&request, fetched);

        assert_eq!(outcome, ApplyOutcome::Applied { added: 1 });
        assert_eq!(state.shows.len(), 1);
        assert_eq!(state.shows[0].title, "The Wire");
        assert_eq!(state.shows[0].fanart(), Some("https://x.trakt.tv/b.jpg"));
    }

    #[test]
    fn test_images_rewritten_without_search() {
        let (mut state, request) = ViewState::mount(&config(), "");
        state.apply_response(&request, vec![show("1", "Fringe", "http://x.trakt.us/a.jpg")]);
        assert_eq!(state.shows[0].fanart(), Some("https://x.trakt.tv/a.jpg"));
    }

    #[test]
    fn test_list_grows_monotonically() {
        let (mut state, request) = ViewState::mount(&config(), "");
        state.apply_response(&request, full_page("a"));
        let before = state.shows.len();

        let next = state.next_page().unwrap();
        state.apply_response(&next, full_page("b"));

        assert!(state.shows.len() >= before);
        assert_eq!(state.shows[0].id, "a0");
    }

    #[test]
    fn test_navigation_new_term_resets() {
        let (mut state, request) = ViewState::mount(&config(), "");
        state.apply_response(&request, full_page("a"));

        let request = state.on_navigation("?search=lost").expect("再取得されない");

        assert!(state.shows.is_empty());
        assert_eq!(state.search, "lost");
        assert_eq!(state.page, PageCursor::All);
        assert_eq!(request.page, PageCursor::All);
        assert_eq!(request.search, "lost");
    }

    #[test]
    fn test_navigation_same_or_empty_term_is_noop() {
        let (mut state, request) = ViewState::mount(&config(), "?search=lost");
        state.apply_response(&request, vec![show("1", "Lost", "")]);
        let generation = state.generation();

        assert_eq!(state.on_navigation("?search=lost"), None);
        assert_eq!(state.on_navigation("?search="), None);
        assert_eq!(state.on_navigation(""), None);
        assert_eq!(state.generation(), generation);
        assert_eq!(state.shows.len(), 1);
    }

    #[test]
    fn test_short_page_marks_exhausted() {
        let (mut state, request) = ViewState::mount(&config(), "");
        state.apply_response(&request, vec![show("1", "Lost", "")]);

        assert!(state.exhausted);
        assert!(!state.can_advance());
        assert_eq!(state.next_page(), None);
    }

    #[test]
    fn test_failure_clears_loading_and_retries_same_page() {
        let (mut state, first) = ViewState::mount(&config(), "");
        state.apply_response(&first, full_page("a"));
        let second = state.next_page().unwrap();

        assert_eq!(state.apply_failure(&second, "HTTP error: status 500"), ApplyOutcome::Failed);
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("HTTP error: status 500"));
        assert!(state.can_advance());

        let again = state.next_page().expect("再試行されない");
        assert_eq!(again.page.number(), Some(2));
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_retry_in_all_mode() {
        let (mut state, request) = ViewState::mount(&config(), "?search=wire");
        state.apply_failure(&request, "network down");

        assert_eq!(state.next_page(), None);
        let retry = state.retry().expect("再試行されない");
        assert_eq!(retry.page, PageCursor::All);
    }

    #[test]
    fn test_stale_failure_ignored() {
        let (mut state, first) = ViewState::mount(&config(), "");
        let second = state.change_sort(SortOption::new("year", "Año"));

        assert_eq!(state.apply_failure(&first, "timeout"), ApplyOutcome::Stale);
        assert!(state.loading);
        assert_eq!(state.error, None);
        assert!(state.is_current(&second));
    }

    #[test]
    fn test_tiles_and_count() {
        let (mut state, request) = ViewState::mount(&config(), "");
        state.apply_response(&request, vec![show("9", "Lost", "http://x.trakt.us/l.jpg")]);

        let tiles = state.tiles();
        assert_eq!(tiles.len(), 1);
        assert_eq!(tiles[0].href, "/show/9");
        assert_eq!(tiles[0].poster.as_deref(), Some("https://x.trakt.tv/l.jpg"));
        assert_eq!(state.count_label(), "Mostrando 1 series:");
        assert!(state.find_show("9").is_some());
        assert!(state.find_show("10").is_none());
    }
}
