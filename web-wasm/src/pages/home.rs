//! ホーム画面（ポスターグリッド + 無限スクロール）
//!
//! ViewState を RwSignal に保持し、遷移が返したリクエストを fetch で実行する。
//! 結果は発行時の世代と照合され、並び替えや検索の変更後に届いた古い結果は捨てられる。

use leptos::ev;
use leptos::html::Div;
use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_location;
use series_catalog_common::{ApplyOutcome, FetchRequest, SortOption, ViewState};

use crate::api::catalog::{error_message, fetch_shows};
use crate::app::LoadedShows;
use crate::components::{show_grid::ShowGrid, sort_select::SortSelect, spinner::Spinner};
use crate::config::catalog_config;

/// リクエストを実行して結果を状態に戻す
fn run_fetch(state: RwSignal<ViewState>, request: FetchRequest) {
    spawn_local(async move {
        let result = fetch_shows(&request.url).await;
        let outcome = state.try_update(|s| match result {
            Ok(shows) => s.apply_response(&request, shows),
            Err(e) => {
                let message = error_message(&e);
                warn!("fetch failed: {} ({})", request.url, message);
                s.apply_failure(&request, message)
            }
        });

        if outcome == Some(ApplyOutcome::Stale) {
            log!("dropped stale response: {}", request.url);
        }
    });
}

/// 番兵要素がビューポート内にあるか
fn sentinel_visible(sentinel: NodeRef<Div>) -> bool {
    sentinel.get_untracked().is_some_and(|el| in_viewport(&el))
}

/// 文書から外れた要素は表示中とみなさない
fn in_viewport(el: &web_sys::Element) -> bool {
    if !el.is_connected() {
        return false;
    }
    let viewport = window()
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    el.get_bounding_client_rect().top() <= viewport
}

#[component]
pub fn HomePage() -> impl IntoView {
    let config = catalog_config();
    let location = use_location();
    let loaded = expect_context::<LoadedShows>();

    let (initial, request) = ViewState::mount(&config, &location.search.get_untracked());
    let state = RwSignal::new(initial);
    run_fetch(state, request);

    // ?search= の変更
    Effect::new(move |_| {
        let query = location.search.get();
        if let Some(request) = state.try_update(|s| s.on_navigation(&query)).flatten() {
            run_fetch(state, request);
        }
    });

    let on_sort_change = move |sort: SortOption| {
        if let Some(request) = state.try_update(|s| s.change_sort(sort)) {
            run_fetch(state, request);
        }
    };

    let advance = move || {
        if let Some(request) = state.try_update(|s| s.next_page()).flatten() {
            run_fetch(state, request);
        }
    };

    let retry = move || {
        if let Some(request) = state.try_update(|s| s.retry()).flatten() {
            run_fetch(state, request);
        }
    };

    let sentinel = NodeRef::<Div>::new();

    let on_scroll = move || {
        if state.with_untracked(|s| s.can_advance() && s.error.is_none()) && sentinel_visible(sentinel) {
            advance();
        }
    };

    let scroll_handle = window_event_listener(ev::scroll, move |_| on_scroll());
    let resize_handle = window_event_listener(ev::resize, move |_| on_scroll());
    on_cleanup(move || {
        scroll_handle.remove();
        resize_handle.remove();
    });

    // 読み込み完了時に番兵がすでに見えていれば次のページへ
    Effect::new(move |_| {
        let ready = state.with(|s| s.can_advance() && s.error.is_none());
        if ready {
            on_scroll();
        }
    });

    // 詳細ページ用に一覧を共有
    Effect::new(move |_| {
        let shows = state.with(|s| s.shows.clone());
        loaded.0.set(shows);
    });

    let selected = Signal::derive(move || state.with(|s| s.sort.value.clone()));
    let tiles = Signal::derive(move || state.with(|s| s.tiles()));

    view! {
        <div class="home">
            <div class="toolbar">
                <SortSelect
                    options=config.sort_options.clone()
                    selected=selected
                    on_change=on_sort_change
                />
                <p>{move || state.with(|s| s.count_label())}</p>
            </div>

            <ShowGrid tiles=tiles />

            {move || state.with(|s| s.error.clone()).map(|error| view! {
                <div class="fetch-error">
                    <p>{format!("Error al cargar las series: {}", error)}</p>
                    <button class="btn btn-secondary" on:click=move |_| retry()>
                        "Reintentar"
                    </button>
                </div>
            })}

            <Show
                when=move || !state.with(|s| s.loading)
                fallback=|| view! { <Spinner /> }
            >
                <div class="scroll-sentinel" style="height: 1px" node_ref=sentinel />
            </Show>
        </div>
    }
}
