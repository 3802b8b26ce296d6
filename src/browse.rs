//! 閲覧ドライバ
//!
//! ViewState の遷移が返すリクエストを取得元で実行し、結果を戻す。

use crate::catalog::CatalogSource;
use series_catalog_common::{
    search_query, ApplyOutcome, CatalogConfig, FetchRequest, SortOption, ViewState,
};

pub struct Browser<S> {
    source: S,
    state: ViewState,
}

impl<S: CatalogSource> Browser<S> {
    /// クエリ文字列付きでマウントし、最初のページを取得する
    pub async fn mount(source: S, config: &CatalogConfig, query: &str) -> (Self, ApplyOutcome) {
        let (state, request) = ViewState::mount(config, query);
        let mut browser = Self { source, state };
        let outcome = browser.execute(request).await;
        (browser, outcome)
    }

    /// 次のページ。進めない場合は `None`。
    pub async fn next_page(&mut self) -> Option<ApplyOutcome> {
        let request = self.state.next_page()?;
        Some(self.execute(request).await)
    }

    pub async fn change_sort(&mut self, sort: SortOption) -> ApplyOutcome {
        let request = self.state.change_sort(sort);
        self.execute(request).await
    }

    /// 検索語でのナビゲーション。同じ語・空の語は `None`。
    pub async fn search(&mut self, term: &str) -> Option<ApplyOutcome> {
        let request = self.state.on_navigation(&search_query(term))?;
        Some(self.execute(request).await)
    }

    /// 番号ページを `pages` ページ目まで読み込む（マウント分を含む）
    ///
    /// 失敗中のページは再取得してから進む。再取得も失敗したら止まる。
    pub async fn load_pages(&mut self, pages: u32) -> Vec<ApplyOutcome> {
        let mut outcomes = Vec::new();

        while self.state.error.is_some() || self.state.page.number().is_some_and(|n| n < pages) {
            match self.next_page().await {
                Some(ApplyOutcome::Failed) => {
                    outcomes.push(ApplyOutcome::Failed);
                    break;
                }
                Some(outcome) => outcomes.push(outcome),
                None => break,
            }
        }

        outcomes
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    async fn execute(&mut self, request: FetchRequest) -> ApplyOutcome {
        let outcome = match self.source.fetch_shows(&request).await {
            Ok(shows) => self.state.apply_response(&request, shows),
            Err(e) => {
                tracing::warn!(url = %request.url, error = %e, "fetch failed");
                self.state.apply_failure(&request, e.to_string())
            }
        };

        if outcome == ApplyOutcome::Stale {
            tracing::debug!(generation = request.generation, "dropped stale response");
        }
        outcome
    }
}
